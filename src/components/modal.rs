use leptos::{ev, prelude::*};

use crate::content::{PortfolioItem, DESIGNER_NAME};

use super::CloseIcon;

fn lightbox_copy(item: &PortfolioItem) -> String {
    format!(
        "A specialized project focused on {} excellence. Designed with a focus on clean \
         aesthetics and impactful visual communication for {}'s clients.",
        item.category.label().to_lowercase(),
        DESIGNER_NAME,
    )
}

/// Lightbox projection of a selected gallery item. The caller maps its
/// optional selection over this component, so the cleared state has no
/// DOM presence at all.
#[component]
pub fn Modal(item: &'static PortfolioItem, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="lightbox" on:click=move |_| on_close.run(())>
            // clicks inside the card must not reach the overlay's dismiss handler
            <div class="lightbox__card" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <button
                    class="lightbox__close"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    <CloseIcon />
                </button>
                <img class="lightbox__image" src=item.image alt=item.title />
                <div class="lightbox__body">
                    <span class="lightbox__category">{item.category.label()}</span>
                    <h3 class="lightbox__title">{item.title}</h3>
                    <p class="lightbox__copy">{lightbox_copy(item)}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::content::PROJECTS;

    use super::*;

    #[test]
    fn copy_interpolates_the_lowercased_category() {
        let kit = &PROJECTS[4];
        let copy = lightbox_copy(kit);
        assert!(copy.contains("social media excellence"));
        assert!(copy.contains(DESIGNER_NAME));
    }

    #[test]
    fn copy_names_the_designer_for_every_item() {
        for item in &PROJECTS {
            assert!(lightbox_copy(item).contains("Julian D Costa"));
        }
    }
}
