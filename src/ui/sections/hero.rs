use leptos::prelude::*;

use crate::core::content::HERO_STATS;
use crate::ui::icon::Icon;
use crate::ui::magnetic_button::MagneticButton;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="absolute inset-0 star-field"></div>
            <div class="absolute inset-0 grid-overlay opacity-30"></div>
            <div class="absolute inset-0 bg-gradient-to-b from-background via-transparent to-background"></div>

            <div class="relative z-10 container-space text-center pt-24 md:pt-32">
                <div class="mb-6 fade-in-up">
                    <span class="section-badge badge-primary">"Pioneering Rover Technology"</span>
                </div>

                <h1 class="hero-title fade-in-up delay-200">
                    <span class="block text-foreground">"Explore The"</span>
                    <span class="block text-gradient text-glow">"Unknown"</span>
                </h1>

                <p class="hero-lead fade-in-up delay-400">
                    "Team MOVIS is a passionate group of innovators, engineers, and tech enthusiasts "
                    "pushing the boundaries of rover technology and AI-driven solutions."
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center fade-in-up delay-600">
                    <MagneticButton>
                        <a href="#projects" class="btn-hero btn-xl">
                            <Icon name="rocket" class="w-5 h-5" />
                            "View Projects"
                        </a>
                    </MagneticButton>
                    <MagneticButton>
                        <a href="#about" class="btn-hero-outline btn-xl">"Learn More"</a>
                    </MagneticButton>
                </div>

                <div class="hero-visual fade-in delay-1000">
                    <div class="hero-image glass-card grid-overlay" role="img" aria-label="Advanced Mars Rover"></div>
                    {HERO_STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            let side = if i % 2 == 0 { "hero-stat-left" } else { "hero-stat-right" };
                            view! {
                                <div class=format!("hero-stat glass-card {side}")>
                                    <div class="text-3xl font-orbitron font-bold text-primary">{stat.value}</div>
                                    <div class="text-sm text-muted-foreground">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="hero-scroll">
                <span class="text-sm font-rajdhani uppercase tracking-widest">"Scroll Down"</span>
                <Icon name="chevron-down" class="w-6 h-6" />
            </div>
        </section>
    }
}
