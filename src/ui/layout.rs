//! Site chrome shared by every page: fixed navbar and footer

use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{
    BRAND, FOOTER_GROUPS, JOIN_US_PATH, NAV_LINKS, NavLink, ORGANIZATION, SOCIAL_LINKS,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::magnetic_button::MagneticButton;

/// Scroll offset after which the navbar switches to its solid style
const SCROLLED_OFFSET: f64 = 50.0;

/// Pull strength of the navbar call-to-action
const CTA_STRENGTH: f64 = 0.3;

#[component]
pub fn Navbar() -> impl IntoView {
    let (is_scrolled, _set_is_scrolled) = signal(false);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::{JsCast, closure::Closure};
        use leptos::web_sys;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };

            let window_scroll = window.clone();
            let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let offset = window_scroll.scroll_y().unwrap_or(0.0);
                _set_is_scrolled.set(offset > SCROLLED_OFFSET);
            }) as Box<dyn FnMut(web_sys::Event)>);

            let _ = window
                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            on_scroll.forget();
        });
    }

    let close_menu = move |_| set_mobile_menu_open.set(false);

    view! {
        <nav
            class="navbar"
            class:navbar-scrolled=move || is_scrolled.get()
        >
            <div class="container-space">
                <div class="navbar-row">
                    <a href="/#home" class="navbar-logo">
                        <Icon name="rocket" class="w-8 h-8 text-primary" />
                        <span class="font-orbitron text-2xl font-bold text-glow">{BRAND}</span>
                    </a>

                    // Desktop Navigation
                    <div class="navbar-links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <NavItem link=*link class="navbar-link" /> })
                            .collect_view()}
                    </div>

                    <div class="navbar-cta">
                        <MagneticButton strength=CTA_STRENGTH>
                            <A href=JOIN_US_PATH attr:class="btn-hero btn-lg">"Join Us"</A>
                        </MagneticButton>
                    </div>

                    <button
                        class="navbar-toggle"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_menu_open.get()>
                <div class="navbar-mobile">
                    <div class="container-space">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <div on:click=close_menu>
                                        <NavItem link=*link class="navbar-mobile-link" />
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div on:click=close_menu>
                            <A href=JOIN_US_PATH attr:class="btn-hero btn-lg w-full mt-4">
                                "Join Us"
                            </A>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

/// Plain anchor for in-page sections, router link for everything else
#[component]
fn NavItem(link: NavLink, class: &'static str) -> impl IntoView {
    if link.is_anchor() {
        view! { <a href=link.href class=class>{link.name}</a> }.into_any()
    } else {
        view! { <A href=link.href attr:class=class>{link.name}</A> }.into_any()
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    let scroll_to_top = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            use leptos::web_sys;

            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    };

    view! {
        <footer class="footer">
            <div class="absolute inset-0 grid-overlay opacity-10"></div>

            <div class="container-space relative z-10">
                <div class="footer-grid">
                    // Brand column
                    <div class="lg:col-span-2">
                        <a href="/#home" class="flex items-center gap-3 mb-6">
                            <Icon name="rocket" class="w-8 h-8 text-primary" />
                            <span class="font-orbitron text-2xl font-bold text-glow">{BRAND}</span>
                        </a>
                        <p class="text-muted-foreground font-rajdhani mb-6 max-w-sm">
                            "Pioneering rover development and AI-driven aerospace solutions. "
                            "We transform ideas into reality through innovation and engineering excellence."
                        </p>
                    </div>

                    {FOOTER_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div>
                                    <h4 class="font-orbitron font-bold mb-4">{group.title}</h4>
                                    <ul class="space-y-3">
                                        {group
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <NavItem link=*link class="footer-link" />
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer-bottom">
                    <p class="text-sm text-muted-foreground font-rajdhani">
                        {format!("© {year} {ORGANIZATION}. All rights reserved.")}
                    </p>

                    <div class="flex items-center gap-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a href=social.href class="footer-social" aria-label=social.label>
                                        <Icon name=social.icon class="w-5 h-5" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button class="footer-top" on:click=scroll_to_top>
                        "Back to top"
                        <Icon name=icons::ARROW_UP class="w-4 h-4" />
                    </button>
                </div>
            </div>
        </footer>
    }
}
