//! Landing page
//!
//! Single scrolling page with one section per navbar anchor.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::layout::{Footer, Navbar};
use crate::ui::sections::{
    AboutSection, ContactSection, HeroSection, ProjectsSection, ServicesSection, TeamSection,
    TechSection,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <main class="relative min-h-screen overflow-x-hidden">
            <Navbar />
            <HeroSection />
            <AboutSection />
            <ServicesSection />
            <ProjectsSection />
            <TechSection />
            <TeamSection />
            <ContactSection />
            <Footer />
        </main>
    }
}

/// SEO meta tags for the landing page
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Team MOVIS - Pioneering Rover Technology" />

        <Meta name="description" content="Team MOVIS is a passionate group of innovators, engineers, and tech enthusiasts pushing the boundaries of rover technology and AI-driven solutions." />
        <Meta name="keywords" content="rover, robotics, autonomous systems, AI, embedded systems, student team, MOVIS" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Team MOVIS - Pioneering Rover Technology" />
        <Meta property="og:description" content="Rover development and AI-driven aerospace solutions by Team MOVIS." />

        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="Team MOVIS - Pioneering Rover Technology" />

        <Link rel="canonical" href="/" />
    }
}
