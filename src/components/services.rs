use leptos::prelude::*;

use crate::content::SERVICES;

use super::{ChevronRightIcon, IconGlyph};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="section__inner">
                <div class="section__heading">
                    <span class="section__eyebrow">"Services I Offer"</span>
                    <h2 class="section__title">"My Creative Services"</h2>
                    <div class="section__rule"></div>
                </div>

                <div class="services__grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="services__card">
                                    <span class="services__icon">
                                        <IconGlyph icon=service.icon size=48 />
                                    </span>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <a class="services__hire" href="#contact">
                                        "Hire Me" <ChevronRightIcon size=20 />
                                    </a>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
