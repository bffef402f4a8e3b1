use leptos::prelude::*;

/// Renders `/icons/{name}.svg` as an inline image
#[component]
pub fn Icon(
    /// Icon name without the `.svg` extension
    name: &'static str,
    #[prop(default = "w-5 h-5")] class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

#[allow(dead_code)]
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_UP: &str = "arrow-up";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const X: &str = "x";
    pub const MENU: &str = "menu";
    pub const LOADER: &str = "loader";
    pub const LOCK: &str = "lock";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const MAP_PIN: &str = "map-pin";
    pub const SEND: &str = "send";
}
