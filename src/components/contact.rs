use leptos::{ev, prelude::*};

use crate::content::{CONTACT_EMAIL, CONTACT_PHONE};

use super::{Icon, IconGlyph, MailIcon, PhoneIcon, SendIcon};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="contact__backdrop">
                <IconGlyph icon=Icon::Box size=400 />
            </div>
            <div class="section__inner">
                <div class="contact__grid">
                    <div class="contact__pitch">
                        <span class="section__eyebrow section__eyebrow--inverse">
                            "Let's Work Together"
                        </span>
                        <h2 class="contact__heading">
                            "Bring Your Brand to "
                            <span class="contact__heading-accent">"Life"</span>
                        </h2>
                        <p>
                            "Ready to start a new project or just want to say hi? Feel free to \
                             reach out. I'm always open to new opportunities and creative \
                             collaborations."
                        </p>

                        <div class="contact__channels">
                            <div class="contact__channel">
                                <span class="contact__channel-icon">
                                    <MailIcon size=28 />
                                </span>
                                <div>
                                    <p class="contact__channel-label">"Email Me"</p>
                                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                                </div>
                            </div>
                            <div class="contact__channel">
                                <span class="contact__channel-icon">
                                    <PhoneIcon size=28 />
                                </span>
                                <div>
                                    <p class="contact__channel-label">"Call Me"</p>
                                    <a href=format!("tel:{CONTACT_PHONE}")>{CONTACT_PHONE}</a>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="contact__panel">
                        // markup only: there is deliberately no submission path
                        <form
                            class="contact__form"
                            on:submit=|ev: ev::SubmitEvent| ev.prevent_default()
                        >
                            <div class="contact__form-row">
                                <div class="contact__field">
                                    <label for="contact-name">"Name"</label>
                                    <input id="contact-name" type="text" placeholder="John Doe" />
                                </div>
                                <div class="contact__field">
                                    <label for="contact-email">"Email"</label>
                                    <input
                                        id="contact-email"
                                        type="email"
                                        placeholder="john@example.com"
                                    />
                                </div>
                            </div>
                            <div class="contact__field">
                                <label for="contact-message">"Message"</label>
                                <textarea
                                    id="contact-message"
                                    rows="5"
                                    placeholder="Tell me about your project..."
                                ></textarea>
                            </div>
                            <button class="contact__submit" type="submit">
                                "Send Message" <SendIcon size=20 />
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
