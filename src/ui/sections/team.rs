use leptos::prelude::*;
use leptos_router::components::A;

use super::SectionHeader;
use crate::core::Track;
use crate::core::content::{JOIN_US_PATH, TeamMember, team_members};
use crate::ui::reveal::Reveal;

#[component]
pub fn TeamSection() -> impl IntoView {
    // None shows every department
    let department = RwSignal::new(None::<Track>);
    let members = move || team_members(department.get());

    let filters = std::iter::once(None).chain(Track::ALL.into_iter().map(Some));

    view! {
        <section id="team" class="section">
            <div class="container-space relative z-10">
                <SectionHeader
                    badge="Our Team"
                    title="Meet The"
                    highlight="Crew"
                    tone="badge-secondary"
                    lead="A diverse team of passionate engineers, developers, and innovators working together to push the boundaries of rover technology."
                />

                <Reveal class="flex flex-wrap justify-center gap-3 mb-12">
                    {filters
                        .map(|filter| {
                            let label = filter.map_or_else(|| "All".to_string(), |t| t.to_string());
                            view! {
                                <button
                                    class="filter-pill"
                                    class:filter-pill-active=move || department.get() == filter
                                    aria-pressed=move || (department.get() == filter).to_string()
                                    on:click=move |_| department.set(filter)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </Reveal>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=members
                        key=|member| member.name
                        children=|member| view! { <MemberCard member=*member /> }
                    />
                </div>

                <Reveal class="mt-16 text-center">
                    <div class="glass-card rounded-2xl p-8 md:p-12 max-w-2xl mx-auto border border-primary/30">
                        <h3 class="text-2xl md:text-3xl font-orbitron font-bold mb-4">
                            "Want to Join the " <span class="text-primary">"Mission"</span> "?"
                        </h3>
                        <p class="text-muted-foreground font-rajdhani mb-6">
                            "We're always looking for passionate engineers and innovators to join our team."
                        </p>
                        <A href=JOIN_US_PATH attr:class="btn-hero btn-lg">"View Open Positions"</A>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn MemberCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class="member-card glass-card group">
            <div class=format!("member-avatar dept-{}", member.department.to_string().to_lowercase())>
                <div class="member-initials">
                    <span class="text-4xl font-orbitron font-bold">{member.initials()}</span>
                </div>
                <span class="member-badge">{member.department.to_string()}</span>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-orbitron font-bold mb-1">{member.name}</h3>
                <p class="text-primary font-rajdhani font-semibold mb-3">{member.role}</p>
                <p class="text-sm text-muted-foreground font-rajdhani italic">
                    {format!("\"{}\"", member.quote)}
                </p>
            </div>
        </div>
    }
}
