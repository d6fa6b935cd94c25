//! HTTP error mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reasonedge::ReasonError;
use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Error returned by request handlers.
///
/// Client errors echo the offending value; everything else becomes an opaque
/// 500 and is only logged.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal,
}

impl From<ReasonError> for ApiError {
    fn from(err: ReasonError) -> Self {
        if err.is_client_error() {
            tracing::error!("Validation error: {}", err);
            ApiError::BadRequest(err.to_string())
        } else {
            tracing::error!("Error processing request: {}", err);
            ApiError::Internal
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::error!("Validation error: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request parameters: {message}"),
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error occurred".to_string(),
            ),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
