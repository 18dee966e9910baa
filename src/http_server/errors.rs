//! # API Errors
//!
//! Error types for the HTTP API.
//!
//! Exactly one error kind crosses the HTTP boundary: a storage failure,
//! rendered uniformly as a 500 with `{"error": "Internal Server Error"}`.
//! The underlying cause is logged, never returned to the caller. A missing
//! record on update/delete is not an error (it is a 200 with a zero
//! count), and an unknown query token is not an error either.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StorageError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Record store failure
    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
///
/// The body carries the fixed message only; the cause stays in the log.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Logger::error("STORAGE_ERROR", &[("cause", &self.to_string())]);

        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: "Internal Server Error".to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_maps_to_500() {
        let err = ApiError::Storage(StorageError::LockPoisoned);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_body_is_opaque() {
        let body = ErrorResponse {
            error: "Internal Server Error".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Internal Server Error"}));
    }
}
