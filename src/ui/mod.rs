pub mod client;
pub mod icon;
pub mod layout;
pub mod magnetic_button;
pub mod notifications;
pub mod pages;
pub mod reveal;
pub mod sections;

pub use icon::{Icon, icons};
pub use magnetic_button::MagneticButton;
pub use notifications::{Notifications, provide_notifications, use_notifications};
pub use reveal::Reveal;
