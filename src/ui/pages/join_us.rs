//! Join-us page
//!
//! Benefits banner plus the application form. The form itself is driven by
//! [`ApplicationForm`]: this component only renders its state and forwards
//! input, the gate check and the submit to the workflow.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};

use crate::core::content::JOIN_BENEFITS;
use crate::core::workflow::{self, ApplicationForm, FormState};
use crate::core::{DraftField, Track, YearOfStudy};
use crate::ui::client::HttpApplicationsApi;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{Footer, Navbar};
use crate::ui::magnetic_button::MagneticButton;
use crate::ui::notifications::use_notifications;

#[component]
pub fn JoinUsPage() -> impl IntoView {
    let form = RwSignal::new(ApplicationForm::new());

    // Effects only run in the browser, so the gate is checked once after hydration
    Effect::new(move |_| {
        spawn_local(async move {
            workflow::check_gate(&form, &HttpApplicationsApi).await;
        });
    });

    // Submitting keeps the form on screen, only with the button disabled
    let panel = Memo::new(move |_| match form.with(|f| f.state()) {
        FormState::Submitting => FormState::Form,
        state => state,
    });

    view! {
        <Title text="Join Us - Team MOVIS" />
        <Meta name="description" content="Apply to join Team MOVIS and work on real rover missions." />

        <main class="relative min-h-screen overflow-x-hidden">
            <Navbar />

            <section class="relative pt-32 pb-20 px-4">
                <div class="absolute inset-0 overflow-hidden">
                    <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-primary/10 rounded-full blur-3xl"></div>
                    <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-accent/10 rounded-full blur-3xl"></div>
                </div>

                <div class="container mx-auto max-w-4xl relative z-10">
                    <div class="text-center mb-12 fade-in-up">
                        <h1 class="text-4xl md:text-6xl font-orbitron font-bold mb-4">
                            "Join " <span class="text-gradient">"MOVIS"</span>
                        </h1>
                        <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                            "Be part of the next generation of rover engineers. Apply to join our elite team of innovators."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-6 mb-12 fade-in-up delay-200">
                        {JOIN_BENEFITS
                            .iter()
                            .map(|benefit| {
                                view! {
                                    <div class="glass-card p-6 text-center">
                                        <Icon name=benefit.icon class="w-10 h-10 text-primary mx-auto mb-3" />
                                        <h3 class="font-semibold text-foreground mb-1">{benefit.title}</h3>
                                        <p class="text-sm text-muted-foreground">{benefit.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="glass-card p-8 md:p-12 fade-in-up delay-400">
                        {move || match panel.get() {
                            FormState::Loading => view! {
                                <div class="flex items-center justify-center py-12" aria-busy="true">
                                    <div class="spinner"></div>
                                </div>
                            }
                            .into_any(),
                            FormState::Closed => view! {
                                <div class="text-center py-12">
                                    <Icon name=icons::LOCK class="w-16 h-16 text-muted-foreground mx-auto mb-4" />
                                    <h2 class="text-2xl font-orbitron font-bold mb-2">"Applications Closed"</h2>
                                    <p class="text-muted-foreground">
                                        "Applications are currently not being accepted. Check back later!"
                                    </p>
                                </div>
                            }
                            .into_any(),
                            FormState::Submitted => view! {
                                <div class="text-center py-12">
                                    <Icon name=icons::CHECK_CIRCLE class="w-16 h-16 text-green-500 mx-auto mb-4" />
                                    <h2 class="text-2xl font-orbitron font-bold mb-2">"Application Submitted!"</h2>
                                    <p class="text-muted-foreground">
                                        "Thank you for applying. We'll review your application and contact you soon."
                                    </p>
                                </div>
                            }
                            .into_any(),
                            FormState::Form | FormState::Submitting => {
                                view! { <ApplicationFormView form=form /> }.into_any()
                            }
                        }}
                    </div>
                </div>
            </section>

            <Footer />
        </main>
    }
}

#[component]
fn ApplicationFormView(form: RwSignal<ApplicationForm>) -> impl IntoView {
    let notifications = use_notifications();
    let is_submitting = Memo::new(move |_| form.with(|f| f.is_submitting()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            if let Some(notice) = workflow::submit(&form, &HttpApplicationsApi).await {
                notifications.notify(notice);
            }
        });
    };

    let years = YearOfStudy::ALL.iter().map(|y| y.to_string()).collect::<Vec<_>>();
    let tracks = Track::ALL.iter().map(|t| t.to_string()).collect::<Vec<_>>();
    let second_options = Signal::derive(move || {
        form.with(|f| {
            f.draft()
                .second_preference_options()
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
        })
    });

    view! {
        <form on:submit=on_submit class="space-y-6">
            <h2 class="text-2xl font-orbitron font-bold mb-6 text-center">"Application Form"</h2>

            <div class="grid md:grid-cols-2 gap-6">
                <TextField form=form field=DraftField::Name id="name" placeholder="Enter your full name" />
                <TextField
                    form=form
                    field=DraftField::RegisterNumber
                    id="register-number"
                    placeholder="e.g., RA2211003010XXX"
                />
                <SelectField
                    form=form
                    field=DraftField::YearOfStudy
                    id="year-of-study"
                    placeholder="Select year"
                    options=Signal::stored(years)
                />
                <TextField form=form field=DraftField::Course id="course" placeholder="e.g., B.Tech CSE" />
                <TextField
                    form=form
                    field=DraftField::Department
                    id="department"
                    placeholder="e.g., Computer Science"
                />
                <SelectField
                    form=form
                    field=DraftField::FirstPreference
                    id="first-preference"
                    placeholder="Select preference"
                    options=Signal::stored(tracks)
                />
                <div class="md:col-span-2 md:w-1/2">
                    <SelectField
                        form=form
                        field=DraftField::SecondPreference
                        id="second-preference"
                        placeholder="Select preference"
                        options=second_options
                    />
                </div>
            </div>

            <div class="flex justify-center pt-4">
                <MagneticButton strength=0.3>
                    <button type="submit" class="btn-glow btn-lg" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "Submitting..." } else { "Submit Application" }}
                    </button>
                </MagneticButton>
            </div>
        </form>
    }
}

#[component]
fn TextField(
    form: RwSignal<ApplicationForm>,
    field: DraftField,
    id: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label class="form-label" for=id>{format!("{field} *")}</label>
            <input
                id=id
                class="form-input"
                placeholder=placeholder
                required
                prop:value=move || form.with(|f| f.draft().get(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn SelectField(
    form: RwSignal<ApplicationForm>,
    field: DraftField,
    id: &'static str,
    placeholder: &'static str,
    #[prop(into)] options: Signal<Vec<String>>,
) -> impl IntoView {
    let current = move || form.with(|f| f.draft().get(field).to_string());

    view! {
        <div class="space-y-2">
            <label class="form-label" for=id>{format!("{field} *")}</label>
            <select
                id=id
                class="form-input"
                required
                on:change=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            >
                <option value="" disabled selected=move || current().is_empty()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|option| option.clone()
                    children=move |option| {
                        let value = option.clone();
                        let label = option.clone();
                        view! {
                            <option value=option selected=move || current() == value>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
