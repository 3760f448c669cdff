use leptos::prelude::*;

use crate::content::EXPERIENCES;

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    view! {
        <section id="experience" class="experience">
            <div class="section__inner">
                <div class="section__heading">
                    <span class="section__eyebrow">"Timeline"</span>
                    <h2 class="section__title">"Professional Experience"</h2>
                    <div class="section__rule"></div>
                </div>

                <div class="experience__timeline">
                    {EXPERIENCES
                        .iter()
                        .map(|exp| {
                            view! {
                                <div class="experience__entry">
                                    <div class="experience__marker"></div>
                                    <div class="experience__card">
                                        <span class="experience__period">{exp.period}</span>
                                        <h3>{exp.role}</h3>
                                        <p class="experience__company">{exp.company}</p>
                                        <p class="experience__description">{exp.description}</p>
                                        <div class="experience__tags">
                                            {exp.tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="experience__tag">
                                                            "#" {*tag}
                                                        </span>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
