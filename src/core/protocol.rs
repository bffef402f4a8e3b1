//! Wire types shared by the REST endpoints and the browser client

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Insert endpoint: `POST` a [`crate::core::application::NewApplication`]
pub const APPLICATIONS_PATH: &str = "/api/applications";

/// Acceptance-gate endpoint: `GET` an [`ApplicationStatus`]
pub const APPLICATIONS_STATUS_PATH: &str = "/api/applications/status";

/// Error codes carried in [`ErrorBody::code`]
pub mod codes {
    pub const VALIDATION: &str = "VALIDATION";
    pub const ALREADY_APPLIED: &str = "ALREADY_APPLIED";
    pub const APPLICATIONS_CLOSED: &str = "APPLICATIONS_CLOSED";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Whether the form currently accepts submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationStatus {
    pub accepting: bool,
}

/// Body of a successful insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub id: Uuid,
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}
