//! Pointer-following wrapper for call-to-action buttons

use leptos::prelude::*;

use crate::core::{MagneticField, MagneticState};

/// Wraps its children in a container that drifts toward the pointer while
/// hovered and eases back home when the pointer leaves.
#[component]
pub fn MagneticButton(
    #[prop(default = MagneticField::DEFAULT_RADIUS)] radius: f64,
    #[prop(default = MagneticField::DEFAULT_STRENGTH)] strength: f64,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let state = RwSignal::new(MagneticState::new(MagneticField::new(radius, strength)));

    let on_mouse_move = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::{Point, Rect};

            let Some(container) = container_ref.get_untracked() else {
                return;
            };
            let bounds = container.get_bounding_client_rect();
            let rect = Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
            let pointer = Point::new(_ev.client_x() as f64, _ev.client_y() as f64);
            state.update(|s| s.pointer_move(pointer, rect));
        }
    };

    view! {
        <div
            node_ref=container_ref
            class="inline-block"
            on:mousemove=on_mouse_move
            on:mouseleave=move |_| state.update(|s| s.pointer_leave())
        >
            <div
                class=class
                style:transform=move || state.with(|s| s.transform())
                style:transition=move || state.with(|s| s.transition())
            >
                {children()}
            </div>
        </div>
    }
}
