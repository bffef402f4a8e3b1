//! Toast notifications
//!
//! A notification context provided at the app root. Any component can push a
//! [`Notice`]; the container renders the most recent ones in a corner of the
//! viewport.

use crate::core::{Notice, NoticeKind};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// Notice with a unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notice: Notice,
}

/// Handle to the shared notification list
#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Show a notice
    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.items.update(|n| {
            n.push_back(NotificationItem { id, notice });

            // Remove oldest if we exceed max
            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|n| n.retain(|item| item.id != id));
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the notification context. Call once at the app root.
pub fn provide_notifications() -> Notifications {
    let notifications = Notifications::new();
    provide_context(notifications);
    notifications
}

/// Get the notification context
pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications context not provided")
}

/// Notifications container component
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || notifications.items.get()
                key=|item| item.id
                children=move |item| view! { <Toast item=item notifications=notifications /> }
            />
        </div>
    }
}

/// Single toast
#[component]
fn Toast(item: NotificationItem, notifications: Notifications) -> impl IntoView {
    let (is_exiting, _set_is_exiting) = signal(false);
    let id = item.id;

    // Auto-dismiss if specified
    if let Some(_ms) = item.notice.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Wait for exit animation
                TimeoutFuture::new(300).await;
                notifications.dismiss(id);
            });
        }
    }

    let kind_class = match item.notice.kind {
        NoticeKind::Success => "toast-success",
        NoticeKind::Error => "toast-error",
    };
    let icon = match item.notice.kind {
        NoticeKind::Success => "check-circle",
        NoticeKind::Error => "alert-circle",
    };

    view! {
        <div
            class=format!("toast {kind_class}")
            class:toast-exiting=move || is_exiting.get()
        >
            <crate::ui::icon::Icon name=icon class="toast-icon" />
            <div class="toast-body">
                <h4 class="toast-title">{item.notice.title}</h4>
                <p class="toast-message">{item.notice.message}</p>
            </div>
            <button
                class="toast-close"
                aria-label="Dismiss notification"
                on:click=move |_| notifications.dismiss(id)
            >
                <crate::ui::icon::Icon name=crate::ui::icon::icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}
