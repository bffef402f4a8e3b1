//! Application pages
//!
//! - Landing page (home)
//! - Join-us application page
//! - Services page
//! - 404 fallback

mod join_us;
mod landing;
mod not_found;
mod services;

pub use join_us::JoinUsPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use services::ServicesPage;
