//! Services page: every service with its full feature list

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::content::{SERVICE_DETAILS, Service};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{Footer, Navbar};
use crate::ui::magnetic_button::MagneticButton;
use crate::ui::reveal::Reveal;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Title text="Services - Team MOVIS" />
        <Meta name="description" content="Rover development services from concept to deployment: mechanical, electrical and software engineering." />

        <main class="relative min-h-screen overflow-x-hidden">
            <Navbar />

            <section class="relative pt-32 pb-20 px-4">
                <div class="absolute inset-0 overflow-hidden">
                    <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-primary/10 rounded-full blur-3xl"></div>
                </div>

                <div class="container mx-auto max-w-6xl relative z-10">
                    <div class="text-center mb-16 fade-in-up">
                        <span class="text-primary font-mono text-sm tracking-wider uppercase">"What We Offer"</span>
                        <h1 class="text-4xl md:text-6xl font-orbitron font-bold mt-2 mb-4">
                            "Our " <span class="text-gradient">"Services"</span>
                        </h1>
                        <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                            "Comprehensive rover development services from concept to deployment. "
                            "We bring together expertise in mechanical, electrical, and software engineering."
                        </p>
                    </div>

                    <div class="space-y-8">
                        {SERVICE_DETAILS
                            .iter()
                            .map(|service| view! { <ServiceDetail service=*service /> })
                            .collect_view()}
                    </div>

                    <Reveal class="text-center mt-16">
                        <h3 class="text-2xl font-orbitron font-bold mb-4">"Ready to Start Your Mission?"</h3>
                        <p class="text-muted-foreground mb-6">
                            "Let's discuss how we can help bring your rover project to life."
                        </p>
                        <MagneticButton strength=0.35>
                            <A href="/#contact" attr:class="btn-glow btn-lg">"Contact Us"</A>
                        </MagneticButton>
                    </Reveal>
                </div>
            </section>

            <Footer />
        </main>
    }
}

#[component]
fn ServiceDetail(service: Service) -> impl IntoView {
    view! {
        <Reveal class="glass-card service-detail p-8">
            <div class="grid md:grid-cols-3 gap-8">
                <div class="md:col-span-2">
                    <div class="flex items-center gap-4 mb-4">
                        <div class="p-3 rounded-lg bg-primary/20">
                            <Icon name=service.icon class="w-8 h-8 text-primary" />
                        </div>
                        <h2 class="text-2xl font-orbitron font-bold">{service.title}</h2>
                    </div>
                    <p class="text-muted-foreground mb-6">{service.description}</p>
                    <MagneticButton strength=0.25>
                        <A href="/#contact" attr:class="btn-outline btn-sm flex items-center gap-2">
                            "Get Started"
                            <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                        </A>
                    </MagneticButton>
                </div>
                <div>
                    <h4 class="text-sm font-semibold text-primary mb-3 uppercase tracking-wider">"Key Features"</h4>
                    <ul class="space-y-2">
                        {service
                            .features
                            .iter()
                            .map(|feature| {
                                view! {
                                    <li class="flex items-start gap-2 text-sm text-muted-foreground">
                                        <Icon name=icons::CHECK_CIRCLE class="w-4 h-4 text-green-500 mt-0.5" />
                                        <span>{*feature}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </Reveal>
    }
}
