//! Landing page sections
//!
//! Each section is a standalone component anchored by its `id`, so the
//! navbar's `/#section` links land on it.

mod about;
mod contact;
mod hero;
mod projects;
mod services;
mod team;
mod tech;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use services::ServicesSection;
pub use team::TeamSection;
pub use tech::TechSection;

use leptos::prelude::*;

use crate::ui::reveal::Reveal;

/// Badge, two-tone title and lead paragraph shared by every section
#[component]
pub fn SectionHeader(
    badge: &'static str,
    title: &'static str,
    highlight: &'static str,
    lead: &'static str,
    #[prop(default = "badge-primary")] tone: &'static str,
) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-20">
            <span class=format!("section-badge {tone}")>{badge}</span>
            <h2 class="section-title">
                {title} " " <span class="text-gradient">{highlight}</span>
            </h2>
            <p class="section-lead">{lead}</p>
        </Reveal>
    }
}
