//! Applications API endpoints
//!
//! Provides REST API endpoints for the join-us form:
//! - POST /api/applications - Insert one application
//! - GET /api/applications/status - Whether applications are open

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;

use crate::core::application::{NewApplication, ValidationError};
use crate::core::db::{ApplicationRepositoryError, ApplicationStore};
use crate::core::protocol::{
    APPLICATIONS_PATH, APPLICATIONS_STATUS_PATH, ApplicationStatus, ErrorBody, SubmitReceipt,
    codes,
};

/// Applications API state: the store and the acceptance gate
#[derive(Clone)]
pub struct ApplicationsApiState<S> {
    pub store: S,
    pub accepting: bool,
}

impl<S: ApplicationStore> ApplicationsApiState<S> {
    pub fn new(store: S, accepting: bool) -> Self {
        Self { store, accepting }
    }
}

/// Errors returned by the applications endpoints
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("An application with this register number already exists.")]
    AlreadyApplied,

    #[error("Applications are currently not being accepted.")]
    Closed,

    #[error("Failed to store application")]
    Internal,
}

impl From<ApplicationRepositoryError> for ApplicationError {
    fn from(err: ApplicationRepositoryError) -> Self {
        match err {
            ApplicationRepositoryError::AlreadyApplied(register_number) => {
                tracing::warn!("Duplicate application for register number {register_number}");
                ApplicationError::AlreadyApplied
            }
            ApplicationRepositoryError::DatabaseError(e) => {
                tracing::error!("Failed to insert application: {e}");
                ApplicationError::Internal
            }
        }
    }
}

/// Convert ApplicationError to API response
impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApplicationError::Validation(_) => (StatusCode::BAD_REQUEST, codes::VALIDATION),
            ApplicationError::AlreadyApplied => (StatusCode::CONFLICT, codes::ALREADY_APPLIED),
            ApplicationError::Closed => (StatusCode::FORBIDDEN, codes::APPLICATIONS_CLOSED),
            ApplicationError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, codes::INTERNAL_ERROR)
            }
        };

        let body = ErrorBody::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Create the applications API router
pub fn applications_router<S: ApplicationStore>(state: ApplicationsApiState<S>) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route(APPLICATIONS_PATH, post(submit_handler::<S>))
        .route(APPLICATIONS_STATUS_PATH, get(status_handler::<S>))
        .with_state(state)
}

/// POST /api/applications
/// Insert one application
pub async fn submit_handler<S: ApplicationStore>(
    State(state): State<Arc<ApplicationsApiState<S>>>,
    Json(application): Json<NewApplication>,
) -> Result<(StatusCode, Json<SubmitReceipt>), ApplicationError> {
    if !state.accepting {
        tracing::warn!(
            "Rejected application from {} while closed",
            application.register_number
        );
        return Err(ApplicationError::Closed);
    }

    let application = application.normalized();
    application.validate()?;

    let row = state.store.insert(&application).await?;

    tracing::info!(
        "Application {} stored for register number {}",
        row.id,
        row.register_number
    );

    Ok((StatusCode::CREATED, Json(SubmitReceipt { id: row.id })))
}

/// GET /api/applications/status
/// Whether applications are open
pub async fn status_handler<S: ApplicationStore>(
    State(state): State<Arc<ApplicationsApiState<S>>>,
) -> Json<ApplicationStatus> {
    Json(ApplicationStatus {
        accepting: state.accepting,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::application::{Track, YearOfStudy};
    use crate::core::db::MemoryApplicationStore;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    fn application(register_number: &str) -> NewApplication {
        NewApplication {
            name: "Arjun Mehta".to_string(),
            year_of_study: YearOfStudy::Fourth,
            course: "B.Tech EEE".to_string(),
            register_number: register_number.to_string(),
            department: "Electrical".to_string(),
            first_preference: Track::Electrical,
            second_preference: Track::Programming,
        }
    }

    fn post_json(body: &serde_json::Value) -> Request<Body> {
        Request::post(APPLICATIONS_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_status_reports_gate() {
        for accepting in [true, false] {
            let router = applications_router(ApplicationsApiState::new(
                MemoryApplicationStore::new(),
                accepting,
            ));

            let response = router
                .oneshot(
                    Request::get(APPLICATIONS_STATUS_PATH)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let status: ApplicationStatus = read_json(response).await;
            assert_eq!(status.accepting, accepting);
        }
    }

    #[tokio::test]
    async fn test_submit_creates_row() {
        let store = MemoryApplicationStore::new();
        let router = applications_router(ApplicationsApiState::new(store.clone(), true));

        let body = serde_json::to_value(application("RA100")).unwrap();
        let response = router.oneshot(post_json(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let receipt: SubmitReceipt = read_json(response).await;
        assert_eq!(store.get("RA100").map(|row| row.id), Some(receipt.id));
    }

    #[tokio::test]
    async fn test_duplicate_is_conflict() {
        let store = MemoryApplicationStore::new();
        let router = applications_router(ApplicationsApiState::new(store.clone(), true));
        let body = serde_json::to_value(application("RA100")).unwrap();

        let first = router.clone().oneshot(post_json(&body)).await.unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = router.oneshot(post_json(&body)).await.unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let error: ErrorBody = read_json(second).await;
        assert_eq!(error.code, codes::ALREADY_APPLIED);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_same_preferences_rejected() {
        let store = MemoryApplicationStore::new();
        let router = applications_router(ApplicationsApiState::new(store.clone(), true));

        let mut payload = application("RA100");
        payload.second_preference = payload.first_preference;
        let body = serde_json::to_value(payload).unwrap();

        let response = router.oneshot(post_json(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorBody = read_json(response).await;
        assert_eq!(error.code, codes::VALIDATION);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_closed_rejects_submissions() {
        let store = MemoryApplicationStore::new();
        let router = applications_router(ApplicationsApiState::new(store.clone(), false));
        let body = serde_json::to_value(application("RA100")).unwrap();

        let response = router.oneshot(post_json(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let error: ErrorBody = read_json(response).await;
        assert_eq!(error.code, codes::APPLICATIONS_CLOSED);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_enumeration_is_rejected_before_store() {
        let store = MemoryApplicationStore::new();
        let router = applications_router(ApplicationsApiState::new(store.clone(), true));

        let mut body = serde_json::to_value(application("RA100")).unwrap();
        body["first_preference"] = serde_json::json!("Software");

        let response = router.oneshot(post_json(&body)).await.unwrap();

        assert!(response.status().is_client_error());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_padded_register_number_is_duplicate() {
        let store = MemoryApplicationStore::new();
        let router = applications_router(ApplicationsApiState::new(store.clone(), true));

        let first = serde_json::to_value(application("RA100")).unwrap();
        let response = router.clone().oneshot(post_json(&first)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let padded = serde_json::to_value(application(" RA100 ")).unwrap();
        let response = router.oneshot(post_json(&padded)).await.unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let error: ErrorBody = read_json(response).await;
        assert_eq!(error.code, codes::ALREADY_APPLIED);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_stores_trimmed_fields() {
        let store = MemoryApplicationStore::new();
        let router = applications_router(ApplicationsApiState::new(store.clone(), true));

        let mut payload = application("  RA200\t");
        payload.name = " Arjun Mehta ".to_string();
        let body = serde_json::to_value(payload).unwrap();
        let response = router.oneshot(post_json(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let row = store.get("RA200").unwrap();
        assert_eq!(row.name, "Arjun Mehta");
    }

    #[tokio::test]
    async fn test_database_failure_is_internal_error() {
        let err: ApplicationError =
            ApplicationRepositoryError::DatabaseError(sqlx::Error::PoolTimedOut).into();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: ErrorBody = read_json(response).await;
        assert_eq!(error.code, codes::INTERNAL_ERROR);
    }
}
