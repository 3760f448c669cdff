use leptos::prelude::*;

use crate::content::{COPYRIGHT_YEAR, SOCIAL_LINKS};

use super::IconGlyph;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="section__inner">
                <div class="footer__top">
                    <div>
                        <h2 class="footer__brand">
                            "JULIAN " <span class="footer__brand-accent">"D COSTA"</span>
                        </h2>
                        <p class="footer__tagline">
                            "Professional Graphics Designer specializing in Branding & Print \
                             Design."
                        </p>
                    </div>
                    <div class="footer__socials">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        class="footer__social"
                                        href=social.href
                                        aria-label=social.name
                                    >
                                        <IconGlyph icon=social.icon />
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="footer__bottom">
                    <p>
                        "© " {COPYRIGHT_YEAR} " Julian D Costa. All Rights Reserved."
                    </p>
                    <div class="footer__legal">
                        <a href="#">"Privacy Policy"</a>
                        <a href="#">"Terms of Service"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
