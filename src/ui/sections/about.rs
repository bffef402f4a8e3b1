use leptos::prelude::*;

use super::SectionHeader;
use crate::core::content::{ABOUT_FEATURES, ABOUT_STATS};
use crate::ui::icon::Icon;
use crate::ui::reveal::Reveal;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="absolute top-1/2 left-0 w-72 h-72 bg-secondary/10 rounded-full blur-3xl -translate-y-1/2"></div>

            <div class="container-space relative z-10">
                <SectionHeader
                    badge="About Us"
                    title="About"
                    highlight="MOVIS"
                    tone="badge-secondary"
                    lead="Team Movis is a passionate group of innovators, engineers, and tech enthusiasts thriving on innovation and pushing the boundaries of technology through hackathons and real-world problem-solving."
                />

                <div class="grid lg:grid-cols-2 gap-16 items-center mb-20">
                    <Reveal class="relative">
                        <div class="about-visual glass-card">
                            <div class="aspect-video star-field" role="img" aria-label="Team MOVIS at work"></div>
                        </div>
                    </Reveal>

                    <Reveal class="space-y-6" delay_ms=200>
                        <h3 class="text-3xl font-orbitron font-bold">
                            "Pushing the Boundaries of " <span class="text-primary">"Exploration"</span>
                        </h3>
                        <p class="text-lg text-muted-foreground font-rajdhani">
                            "From concept sketches to field-tested rovers, we handle every stage of "
                            "the build ourselves: mechanical design, embedded electronics and the "
                            "software that lets our machines think for themselves."
                        </p>
                        <div class="grid grid-cols-3 gap-4 pt-4">
                            {ABOUT_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center">
                                            <div class="text-3xl font-orbitron font-bold text-primary">{stat.value}</div>
                                            <div class="text-sm text-muted-foreground">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {ABOUT_FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| {
                            view! {
                                <Reveal class="feature-card glass-card" delay_ms={i as u32 * 100}>
                                    <div class="feature-icon">
                                        <Icon name=feature.icon class="w-7 h-7" />
                                    </div>
                                    <h4 class="text-xl font-orbitron font-bold mb-3">{feature.title}</h4>
                                    <p class="text-muted-foreground font-rajdhani">{feature.description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
