use leptos::prelude::*;

use super::{AwardIcon, BackgroundShapes, Icon, IconGlyph};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <BackgroundShapes />
            <div class="section__inner">
                <div class="about__grid">
                    <div class="about__visual">
                        <div class="about__photo">
                            <img
                                src="https://images.unsplash.com/photo-1558655146-d09347e92766?auto=format&fit=crop&q=80&w=800"
                                alt="Design workspace"
                            />
                        </div>
                        <div class="about__floating-card">
                            <div class="about__floating-card-head">
                                <IconGlyph icon=Icon::Monitor size=32 />
                                <h4>"Branding Specialist"</h4>
                            </div>
                            <p>
                                "Expert in transforming complex ideas into clean, functional \
                                 visual identities."
                            </p>
                        </div>
                    </div>

                    <div class="about__body">
                        <span class="section__eyebrow">"About Me"</span>
                        <h2 class="section__title">
                            "Crafting Identities with "
                            <span class="about__title-accent">"Purpose"</span>
                        </h2>
                        <p>
                            "Julian is a Graphics Designer experienced in logo design, \
                             brochures, banners, certificates, and social media design. He \
                             currently serves as a Graphics Designer at Chattogram Catholic \
                             Archdiocese (2023–Present)."
                        </p>
                        <p>
                            "His contribution to organizational branding and youth initiatives \
                             has defined his professional path, focusing on clean and impactful \
                             visual communication that resonates with communities and \
                             organizations alike."
                        </p>
                        <div class="about__cards">
                            <div class="about__card about__card--education">
                                <h3>
                                    <AwardIcon size=20 />
                                    "Education"
                                </h3>
                                <p class="about__card-primary">"Honours in Management"</p>
                                <p class="about__card-secondary">"National University"</p>
                            </div>
                            <div class="about__card">
                                <h3>"Philosophy"</h3>
                                <p class="about__card-quote">
                                    "\u{201c}Design is not just what it looks like and feels \
                                     like. Design is how it works.\u{201d}"
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
