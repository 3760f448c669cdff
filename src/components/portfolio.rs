use leptos::prelude::*;

use crate::content::{visible_projects, PortfolioItem, ProjectCategory};

use super::{Modal, SearchIcon};

/// Gallery interaction state: the active category filter and the item
/// currently open in the lightbox. Both operations are total; the filter
/// only ever takes values from the closed category enum and selections
/// only ever point at the fixed project list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryState {
    filter: ProjectCategory,
    selected: Option<&'static PortfolioItem>,
}

impl GalleryState {
    pub fn set_filter(&mut self, filter: ProjectCategory) {
        self.filter = filter;
    }

    #[must_use]
    pub fn filter(self) -> ProjectCategory {
        self.filter
    }

    pub fn select(&mut self, item: &'static PortfolioItem) {
        self.selected = Some(item);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(self) -> Option<&'static PortfolioItem> {
        self.selected
    }

    /// The order-preserving subsequence of the fixed list admitted by the
    /// current filter.
    #[must_use]
    pub fn visible(self) -> Vec<&'static PortfolioItem> {
        visible_projects(self.filter)
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    let (gallery, set_gallery) = signal(GalleryState::default());

    let close = Callback::new(move |()| set_gallery.update(GalleryState::close));

    view! {
        <section id="portfolio" class="portfolio">
            <div class="section__inner">
                <div class="section__heading">
                    <span class="section__eyebrow">"Selected Works"</span>
                    <h2 class="section__title">"Portfolio Gallery"</h2>
                    <div class="section__rule"></div>
                </div>

                <div class="portfolio__filters">
                    {ProjectCategory::ALL_FILTERS
                        .into_iter()
                        .map(|category| {
                            let class = move || {
                                if gallery.get().filter() == category {
                                    "portfolio__filter portfolio__filter--active"
                                } else {
                                    "portfolio__filter"
                                }
                            };
                            view! {
                                <button
                                    class=class
                                    on:click=move |_| {
                                        set_gallery.update(|g| g.set_filter(category));
                                    }
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="portfolio__grid">
                    {move || {
                        gallery
                            .get()
                            .visible()
                            .into_iter()
                            .map(|project| {
                                view! {
                                    <div
                                        class="portfolio__card"
                                        on:click=move |_| {
                                            set_gallery.update(|g| g.select(project));
                                        }
                                    >
                                        <img src=project.image alt=project.title />
                                        <div class="portfolio__card-overlay">
                                            <span class="portfolio__card-category">
                                                {project.category.label()}
                                            </span>
                                            <h3 class="portfolio__card-title">{project.title}</h3>
                                            <span class="portfolio__card-zoom">
                                                <SearchIcon />
                                            </span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>

            {move || {
                gallery
                    .get()
                    .selected()
                    .map(|item| view! { <Modal item=item on_close=close /> })
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use crate::content::PROJECTS;

    use super::*;

    #[test]
    fn defaults_show_everything_with_nothing_selected() {
        let gallery = GalleryState::default();
        assert_eq!(gallery.filter(), ProjectCategory::All);
        assert_eq!(gallery.visible().len(), 6);
        assert!(gallery.selected().is_none());
    }

    #[test]
    fn setting_a_filter_is_idempotent() {
        let mut gallery = GalleryState::default();
        gallery.set_filter(ProjectCategory::Logo);
        let once = gallery.visible();
        gallery.set_filter(ProjectCategory::Logo);
        assert_eq!(gallery.visible(), once);
    }

    #[test]
    fn setting_a_filter_replaces_the_previous_one() {
        let mut gallery = GalleryState::default();
        gallery.set_filter(ProjectCategory::Logo);
        gallery.set_filter(ProjectCategory::Branding);
        assert_eq!(gallery.filter(), ProjectCategory::Branding);
        assert!(gallery
            .visible()
            .iter()
            .all(|item| item.category == ProjectCategory::Branding));
    }

    #[test]
    fn selecting_then_closing_clears_the_lightbox() {
        let mut gallery = GalleryState::default();
        gallery.select(&PROJECTS[0]);
        assert_eq!(gallery.selected(), Some(&PROJECTS[0]));
        gallery.close();
        assert!(gallery.selected().is_none());
    }

    #[test]
    fn closing_without_a_selection_is_a_no_op() {
        let mut gallery = GalleryState::default();
        gallery.close();
        assert!(gallery.selected().is_none());
    }

    #[test]
    fn selection_survives_a_filter_change() {
        let mut gallery = GalleryState::default();
        gallery.select(&PROJECTS[4]);
        gallery.set_filter(ProjectCategory::Print);
        assert_eq!(gallery.selected(), Some(&PROJECTS[4]));
    }

    #[test]
    fn print_filter_scenario_from_initial_state() {
        let mut gallery = GalleryState::default();
        assert_eq!(gallery.visible().len(), 6);
        assert!(gallery.selected().is_none());

        gallery.set_filter(ProjectCategory::Print);
        let summary: Vec<(u32, &str)> = gallery
            .visible()
            .iter()
            .map(|item| (item.id, item.title))
            .collect();
        assert_eq!(
            summary,
            vec![
                (3, "Professional Brochure"),
                (4, "Large Format Banner"),
                (6, "Merit Certificate"),
            ]
        );
    }
}
