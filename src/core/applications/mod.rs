//! Join-us applications over HTTP
//!
//! REST endpoints for the persistence and acceptance-gate boundaries of
//! the application form.

pub mod api;

pub use api::{ApplicationError, ApplicationsApiState, applications_router};
