use leptos::prelude::*;

use super::SectionHeader;
use crate::core::Notice;
use crate::core::content::CONTACT_INFO;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::reveal::Reveal;

/// Delay of the simulated send
#[cfg(not(feature = "ssr"))]
const SEND_DELAY_MS: u32 = 1500;

#[component]
pub fn ContactSection() -> impl IntoView {
    let notifications = use_notifications();
    let is_sending = RwSignal::new(false);
    let form_ref = NodeRef::<leptos::html::Form>::new();

    // Messages are not delivered anywhere yet; the form only acknowledges
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_sending.get_untracked() {
            return;
        }
        is_sending.set(true);

        leptos::task::spawn_local(async move {
            #[cfg(not(feature = "ssr"))]
            gloo_timers::future::TimeoutFuture::new(SEND_DELAY_MS).await;

            notifications.notify(Notice::success(
                "Message Sent!",
                "We'll get back to you within 24 hours.",
            ));
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }
            is_sending.set(false);
        });
    };

    view! {
        <section id="contact" class="section">
            <div class="absolute inset-0 bg-gradient-to-t from-muted/30 via-transparent to-transparent"></div>

            <div class="container-space relative z-10">
                <SectionHeader
                    badge="Contact Us"
                    title="Get In"
                    highlight="Touch"
                    tone="badge-accent"
                    lead="Have a project in mind? Want to collaborate? We'd love to hear from you."
                />

                <div class="grid lg:grid-cols-2 gap-16">
                    <Reveal>
                        <div class="glass-card rounded-2xl p-8 border border-border/50">
                            <h3 class="text-2xl font-orbitron font-bold mb-6">"Send a Message"</h3>
                            <form node_ref=form_ref on:submit=on_submit class="space-y-6">
                                <div class="grid md:grid-cols-2 gap-4">
                                    <div>
                                        <label class="form-label" for="contact-first-name">"First Name"</label>
                                        <input id="contact-first-name" class="form-input" placeholder="John" required />
                                    </div>
                                    <div>
                                        <label class="form-label" for="contact-last-name">"Last Name"</label>
                                        <input id="contact-last-name" class="form-input" placeholder="Doe" required />
                                    </div>
                                </div>
                                <div>
                                    <label class="form-label" for="contact-email">"Email"</label>
                                    <input id="contact-email" type="email" class="form-input" placeholder="john@example.com" required />
                                </div>
                                <div>
                                    <label class="form-label" for="contact-subject">"Subject"</label>
                                    <input id="contact-subject" class="form-input" placeholder="Project Collaboration" required />
                                </div>
                                <div>
                                    <label class="form-label" for="contact-message">"Message"</label>
                                    <textarea
                                        id="contact-message"
                                        class="form-input min-h-[150px]"
                                        placeholder="Tell us about your project..."
                                        required
                                    ></textarea>
                                </div>
                                <button
                                    type="submit"
                                    class="btn-hero btn-lg w-full"
                                    disabled=move || is_sending.get()
                                >
                                    {move || {
                                        if is_sending.get() {
                                            view! {
                                                <Icon name=icons::LOADER class="w-5 h-5 animate-spin" />
                                                "Sending..."
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <Icon name=icons::SEND class="w-5 h-5" />
                                                "Send Message"
                                            }
                                                .into_any()
                                        }
                                    }}
                                </button>
                            </form>
                        </div>
                    </Reveal>

                    <Reveal class="space-y-6" delay_ms=200>
                        {CONTACT_INFO
                            .iter()
                            .map(|info| {
                                view! {
                                    <div class="glass-card rounded-xl p-6 flex items-start gap-4">
                                        <div class="feature-icon">
                                            <Icon name=info.icon class="w-6 h-6" />
                                        </div>
                                        <div>
                                            <h4 class="font-orbitron font-bold mb-1">{info.title}</h4>
                                            <p class="text-foreground font-rajdhani">{info.details}</p>
                                            <p class="text-sm text-muted-foreground">{info.subtext}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
