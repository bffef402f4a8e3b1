use leptos::prelude::*;
use leptos_router::components::A;

use super::SectionHeader;
use crate::core::content::{SERVICES, SERVICES_PATH, Service};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::Reveal;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="section">
            <div class="container-space relative z-10">
                <SectionHeader
                    badge="What We Do"
                    title="Our"
                    highlight="Services"
                    lead="From concept to deployment, we offer comprehensive solutions for rover development and autonomous systems."
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| view! { <ServiceCard service=*service delay_ms={i as u32 * 100} /> })
                        .collect_view()}
                </div>

                <Reveal class="text-center mt-16">
                    <A href=SERVICES_PATH attr:class="btn-hero-outline btn-lg">
                        "Explore All Services"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </A>
                </Reveal>
            </div>
        </section>
    }
}

/// Service card, shared with the services page
#[component]
pub fn ServiceCard(service: Service, #[prop(default = 0)] delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal class="service-card glass-card" delay_ms=delay_ms>
            <div class="feature-icon">
                <Icon name=service.icon class="w-7 h-7" />
            </div>
            <h3 class="text-2xl font-orbitron font-bold mb-3">{service.title}</h3>
            <p class="text-muted-foreground font-rajdhani mb-6">{service.description}</p>
            <ul class="space-y-2">
                {service
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-center gap-2 text-sm font-rajdhani">
                                <Icon name=icons::CHECK class="w-4 h-4 text-primary" />
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Reveal>
    }
}
