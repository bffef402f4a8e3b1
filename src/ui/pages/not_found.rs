//! 404 page shown for unknown routes

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::ORGANIZATION;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Lets the server answer with a real 404 status
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - Team MOVIS" />

        <main class="min-h-screen flex flex-col items-center justify-center p-4 relative">
            <div class="absolute inset-0 star-field"></div>

            <div class="text-center relative z-10">
                <div class="w-24 h-24 mx-auto mb-6 glass-card rounded-full flex items-center justify-center">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12 text-primary" />
                </div>

                <h1 class="text-6xl font-orbitron font-bold text-gradient mb-4">"404"</h1>
                <h2 class="text-2xl font-orbitron font-semibold mb-2">"Lost in Space"</h2>
                <p class="text-muted-foreground font-rajdhani mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="btn-hero btn-lg">"Return to Base"</A>
            </div>

            <p class="absolute bottom-8 text-sm text-muted-foreground">
                {format!("© {ORGANIZATION}")}
            </p>
        </main>
    }
}
