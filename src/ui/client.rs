//! HTTP transport for the join-us workflow

use gloo_net::http::{Request, Response};

use crate::core::protocol::{
    APPLICATIONS_PATH, APPLICATIONS_STATUS_PATH, ApplicationStatus, ErrorBody,
};
use crate::core::{ApiError, ApplicationsApi, NewApplication};

/// [`ApplicationsApi`] backed by the site's own REST endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpApplicationsApi;

impl ApplicationsApi for HttpApplicationsApi {
    async fn is_accepting(&self) -> Result<bool, ApiError> {
        let response = Request::get(APPLICATIONS_STATUS_PATH)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(read_error(response).await);
        }

        let status: ApplicationStatus = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(status.accepting)
    }

    async fn insert(&self, application: &NewApplication) -> Result<(), ApiError> {
        let response = Request::post(APPLICATIONS_PATH)
            .header("Content-Type", "application/json")
            .json(application)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(read_error(response).await)
        }
    }
}

async fn read_error(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    error_for_status(status, message)
}

/// Map a non-success status onto the workflow's error kinds
pub fn error_for_status(status: u16, message: String) -> ApiError {
    match status {
        400 => ApiError::Rejected(message),
        403 => ApiError::Closed,
        409 => ApiError::Duplicate,
        _ => ApiError::Server { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            error_for_status(409, "dup".to_string()),
            ApiError::Duplicate
        );
        assert_eq!(
            error_for_status(403, "closed".to_string()),
            ApiError::Closed
        );
        assert_eq!(
            error_for_status(400, "bad year".to_string()),
            ApiError::Rejected("bad year".to_string())
        );
        assert_eq!(
            error_for_status(502, "Bad Gateway".to_string()),
            ApiError::Server {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );
    }
}
