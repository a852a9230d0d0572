//! API error mapping
//!
//! Every handler error becomes a JSON `{"error": ...}` body with the
//! matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::analysis::ScorerError;

/// Handler-level errors
#[derive(Debug)]
pub enum ApiError {
    InvalidInput(String),
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<sentimap_common::Error> for ApiError {
    fn from(err: sentimap_common::Error) -> Self {
        match err {
            sentimap_common::Error::InvalidInput(msg) => ApiError::InvalidInput(msg),
            sentimap_common::Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ScorerError> for ApiError {
    fn from(err: ScorerError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
