//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use exercise_store::TrackerError;
use serde_json::json;

/// Stable error codes returned in failure bodies.
pub mod error_codes {
    /// A required field is missing or malformed.
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    /// The referenced resource does not exist.
    pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";
    /// The server failed to complete the operation.
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Tracker operation failed.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ServerError::InvalidRequest(msg) => (
                StatusCode::BAD_REQUEST,
                error_codes::INVALID_REQUEST,
                msg.clone(),
            ),
            ServerError::Tracker(err) => match err {
                TrackerError::Validation { .. } => (
                    StatusCode::BAD_REQUEST,
                    error_codes::INVALID_REQUEST,
                    err.to_string(),
                ),
                TrackerError::NotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    error_codes::RESOURCE_NOT_FOUND,
                    err.to_string(),
                ),
                TrackerError::Persistence(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::INTERNAL_ERROR,
                    err.to_string(),
                ),
            },
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
