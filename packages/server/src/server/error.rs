//! HTTP error responses.
//!
//! Every failure leaves the server as `{"error": "..."}` with a non-2xx status.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domains::gifts::GiftError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// Request body missing, not JSON, or the wrong shape
    BadRequest(String),
    /// Completion Service credentials are not configured
    ServiceUnavailable(String),
    /// Completion Service call failed
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<GiftError> for ApiError {
    fn from(err: GiftError) -> Self {
        match err {
            GiftError::MissingCredentials => ApiError::ServiceUnavailable(
                "Gift generation is not configured on this server".to_string(),
            ),
            // Upstream details go to the log, not the caller
            GiftError::Completion(_) => {
                ApiError::Upstream("Failed to generate gift ideas".to_string())
            }
        }
    }
}
