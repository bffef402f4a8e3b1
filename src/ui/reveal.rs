//! Scroll-triggered entrance animation
//!
//! [`Reveal`] renders its children hidden and adds the `visible` class the
//! first time the wrapper scrolls into view. The observer is disconnected
//! right after, so the animation never replays.

use leptos::prelude::*;

use crate::core::RevealLatch;

/// Share of the element that must be on screen before it is revealed
#[cfg(not(feature = "ssr"))]
const THRESHOLD: f64 = 0.1;

#[cfg(not(feature = "ssr"))]
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[component]
pub fn Reveal(
    #[prop(default = "")] class: &'static str,
    /// Transition delay in milliseconds
    #[prop(default = 0)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let latch = RwSignal::new(RevealLatch::new());

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::{JsCast, JsValue, closure::Closure};
        use leptos::web_sys;

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };

            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let is_visible = entries.iter().any(|entry| {
                        entry
                            .unchecked_into::<web_sys::IntersectionObserverEntry>()
                            .is_intersecting()
                    });
                    let revealed = latch
                        .try_update(|l| l.observe(is_visible))
                        .unwrap_or(false);
                    if revealed {
                        observer.disconnect();
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(THRESHOLD));
            options.set_root_margin(ROOT_MARGIN);

            match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => observer.observe(&element),
                Err(_) => {
                    // No observer support: show the content straight away
                    latch.update(|l| {
                        l.observe(true);
                    });
                }
            }

            callback.forget();
        });
    }

    view! {
        <div
            node_ref=node_ref
            class=format!("reveal {class}")
            class:visible=move || latch.with(|l| l.is_revealed())
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}
