use leptos::prelude::*;

use crate::content::{DESIGNER_NAME, DESIGNER_TITLE};

use super::{AwardIcon, ChevronRightIcon};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__glow hero__glow--right"></div>
            <div class="hero__glow hero__glow--left"></div>

            <div class="hero__inner">
                <div class="hero__intro">
                    <span class="hero__badge">
                        <span class="hero__badge-dot"></span>
                        "Open for Collaboration"
                    </span>
                    <h1 class="hero__heading">
                        {DESIGNER_NAME} <br />
                        <span class="hero__heading-sub">{DESIGNER_TITLE}</span>
                    </h1>
                    <p class="hero__lede">
                        "Creative Branding & Print Design Specialist. Julian creates clean, \
                         impactful, and purpose-driven visual identities for organizations \
                         and communities."
                    </p>
                    <div class="hero__actions">
                        <a class="hero__cta hero__cta--primary" href="#portfolio">
                            "View My Work" <ChevronRightIcon size=20 />
                        </a>
                        <a class="hero__cta hero__cta--ghost" href="#contact">
                            "Contact Me"
                        </a>
                    </div>
                </div>

                <div class="hero__portrait">
                    <div class="hero__portrait-frame">
                        <img
                            src="https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?auto=format&fit=crop&q=80&w=800"
                            alt="Julian D Costa portrait"
                        />
                    </div>
                    <div class="hero__since">
                        <span class="hero__since-icon">
                            <AwardIcon size=28 />
                        </span>
                        <div>
                            <p class="hero__since-year">"2023"</p>
                            <p class="hero__since-label">"Since Pro"</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
