use leptos::prelude::*;

use super::SectionHeader;
use crate::core::content::{TECH_COUNTERS, TECH_STACK, TECHNOLOGIES};
use crate::ui::reveal::Reveal;

#[component]
pub fn TechSection() -> impl IntoView {
    view! {
        <section id="tech" class="section">
            <div class="container-space relative z-10">
                <SectionHeader
                    badge="Technology"
                    title="Our Tech"
                    highlight="Arsenal"
                    tone="badge-accent"
                    lead="We leverage cutting-edge technologies and tools to build innovative solutions that push the boundaries of what's possible."
                />

                <div class="grid lg:grid-cols-2 gap-16 mb-20">
                    // Proficiency bars
                    <Reveal class="space-y-6">
                        {TECHNOLOGIES
                            .iter()
                            .map(|tech| {
                                view! {
                                    <div>
                                        <div class="flex justify-between mb-2">
                                            <span class="font-rajdhani font-semibold">{tech.name}</span>
                                            <span class="text-sm text-muted-foreground">
                                                {format!("{} · {}%", tech.category, tech.level)}
                                            </span>
                                        </div>
                                        <div class="skill-track">
                                            <div class="skill-bar" style:width=format!("{}%", tech.level)></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Reveal>

                    // Stack by category
                    <div class="grid sm:grid-cols-2 gap-6">
                        {TECH_STACK
                            .iter()
                            .enumerate()
                            .map(|(i, group)| {
                                view! {
                                    <Reveal class="glass-card rounded-2xl p-6" delay_ms={i as u32 * 100}>
                                        <h4 class=format!("font-orbitron font-bold mb-4 text-{}", group.color)>
                                            {group.category}
                                        </h4>
                                        <div class="flex flex-wrap gap-2">
                                            {group
                                                .items
                                                .iter()
                                                .map(|item| view! { <span class="tech-chip">{*item}</span> })
                                                .collect_view()}
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Reveal class="grid grid-cols-2 md:grid-cols-4 gap-6">
                    {TECH_COUNTERS
                        .iter()
                        .map(|counter| {
                            view! {
                                <div class="glass-card rounded-xl p-6 text-center">
                                    <div class="text-4xl font-orbitron font-bold text-gradient">{counter.value}</div>
                                    <div class="text-sm text-muted-foreground mt-2">{counter.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}
