use leptos::prelude::*;

use super::SectionHeader;
use crate::core::Carousel;
use crate::core::content::{PROJECTS, Project};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(PROJECTS.len()));
    let current = move || carousel.with(|c| PROJECTS.get(c.index()).copied());

    view! {
        <section id="projects" class="section">
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-muted/20 to-transparent"></div>

            <div class="container-space relative z-10">
                <SectionHeader
                    badge="Our Projects"
                    title="Featured"
                    highlight="Missions"
                    lead="Explore our portfolio of successful rover projects, each pushing the boundaries of what's possible in robotics and autonomous systems."
                />

                <div class="relative">
                    {move || current().map(|project| view! { <ProjectSlide project=project /> })}

                    <div class="flex items-center justify-center gap-4 mt-12">
                        <button
                            class="carousel-arrow"
                            aria-label="Previous project"
                            on:click=move |_| carousel.update(|c| c.previous())
                        >
                            <Icon name=icons::CHEVRON_LEFT class="w-6 h-6" />
                        </button>

                        <div class="flex gap-2">
                            {(0..PROJECTS.len())
                                .map(|index| {
                                    view! {
                                        <button
                                            class="carousel-dot"
                                            class:carousel-dot-active=move || carousel.with(|c| c.index() == index)
                                            aria-label=format!("Show project {}", index + 1)
                                            on:click=move |_| carousel.update(|c| c.select(index))
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <button
                            class="carousel-arrow"
                            aria-label="Next project"
                            on:click=move |_| carousel.update(|c| c.next())
                        >
                            <Icon name=icons::CHEVRON_RIGHT class="w-6 h-6" />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectSlide(project: Project) -> impl IntoView {
    let accent = format!("accent-{}", project.theme);

    view! {
        <div class="project-slide grid lg:grid-cols-2 gap-12 items-center">
            <div class=format!("project-visual gradient-{}", project.theme)>
                <div class="absolute inset-0 grid-overlay opacity-30"></div>
                <div class="absolute inset-0 flex items-center justify-center">
                    <div class="text-center p-8">
                        <div class="project-number">
                            <span class="text-6xl font-orbitron font-bold">{project.id}</span>
                        </div>
                        <span class=format!("{accent} font-orbitron font-bold text-2xl")>
                            {project.category}
                        </span>
                    </div>
                </div>
                <div class="scan-line"></div>
            </div>

            <div class="space-y-6">
                <div>
                    <span class=format!("{accent} text-sm font-rajdhani font-semibold uppercase tracking-widest")>
                        {project.category}
                    </span>
                    <h3 class="text-3xl md:text-4xl font-orbitron font-bold mt-2">{project.title}</h3>
                </div>
                <p class="text-lg text-muted-foreground font-rajdhani">{project.description}</p>

                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="tech-chip">{*tech}</span> })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-3 gap-4 py-6 border-t border-b border-border">
                    {project
                        .stats
                        .iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="text-center">
                                    <div class=format!("text-2xl font-orbitron font-bold {accent}")>{*value}</div>
                                    <div class="text-sm text-muted-foreground capitalize">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
