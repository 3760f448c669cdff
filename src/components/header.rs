use leptos::prelude::*;

use crate::content::NAV_LINKS;

use super::{CloseIcon, MenuIcon};

/// Vertical offset (px) past which the nav switches to its solid style.
const SCROLL_THRESHOLD: f64 = 50.0;

/// Header interaction state. The mobile menu flag and the scroll flag are
/// independent; both only ever drive class selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Choosing a link from the open mobile menu closes it; the fragment
    /// navigation itself is left to the browser.
    pub fn choose_link(&mut self) {
        self.menu_open = false;
    }

    /// Recomputed on every scroll observation, no hysteresis.
    pub fn observe_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (nav, set_nav) = signal(NavState::default());

    // Track the window scroll position once hydrated in the browser. The
    // listener is removed again on reactive cleanup so remounting the
    // header never stacks observers.
    #[cfg(target_arch = "wasm32")]
    {
        use leptos::wasm_bindgen::{closure::Closure, JsCast};

        let observe = move || {
            if let Some(window) = leptos::web_sys::window() {
                if let Ok(offset) = window.scroll_y() {
                    set_nav.update(|n| n.observe_scroll(offset));
                }
            }
        };
        observe();

        let listener = Closure::<dyn Fn()>::new(observe);
        if let Some(window) = leptos::web_sys::window() {
            if window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                .is_ok()
            {
                on_cleanup(move || {
                    if let Some(window) = leptos::web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                });
            }
        }
    }

    let nav_class = move || {
        if nav.get().scrolled {
            "site-nav site-nav--solid"
        } else {
            "site-nav"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="site-nav__inner">
                <a class="site-nav__brand" href="#">
                    "JULIAN " <span class="site-nav__brand-accent">"D COSTA"</span>
                </a>
                <ul class="site-nav__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a class="site-nav__link" href=link.href>
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <button
                    class="site-nav__menu-button"
                    aria-label=move || {
                        if nav.get().menu_open { "Close menu" } else { "Open menu" }
                    }
                    on:click=move |_| set_nav.update(NavState::toggle_menu)
                >
                    {move || {
                        if nav.get().menu_open {
                            view! { <CloseIcon size=28 /> }.into_any()
                        } else {
                            view! { <MenuIcon size=28 /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <Show when=move || nav.get().menu_open>
                <div class="site-nav__mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="site-nav__mobile-link"
                                    href=link.href
                                    on:click=move |_| set_nav.update(NavState::choose_link)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_closed_and_unscrolled() {
        let nav = NavState::default();
        assert!(!nav.menu_open);
        assert!(!nav.scrolled);
    }

    #[test]
    fn toggling_twice_returns_to_the_original_state() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.toggle_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn choosing_a_link_closes_an_open_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.choose_link();
        assert!(!nav.menu_open);

        // and is a no-op when the menu is already closed
        nav.choose_link();
        assert!(!nav.menu_open);
    }

    #[test]
    fn scroll_flag_follows_the_threshold_strictly() {
        let mut nav = NavState::default();

        nav.observe_scroll(49.0);
        assert!(!nav.scrolled);

        nav.observe_scroll(50.0);
        assert!(!nav.scrolled);

        nav.observe_scroll(51.0);
        assert!(nav.scrolled);

        nav.observe_scroll(0.0);
        assert!(!nav.scrolled);
    }

    #[test]
    fn scroll_observation_leaves_the_menu_alone() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.observe_scroll(200.0);
        assert!(nav.menu_open);
        assert!(nav.scrolled);
    }
}
