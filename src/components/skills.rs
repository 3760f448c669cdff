use leptos::prelude::*;

use crate::content::SKILLS;

use super::IconGlyph;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <div class="section__inner">
                <div class="section__heading">
                    <span class="section__eyebrow">"Skills & Expertise"</span>
                    <h2 class="section__title">"What I Master"</h2>
                    <div class="section__rule"></div>
                </div>

                <div class="skills__grid">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="skills__card">
                                    <span class="skills__icon">
                                        <IconGlyph icon=skill.icon size=40 />
                                    </span>
                                    <h3>{skill.name}</h3>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
