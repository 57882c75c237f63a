use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::server::app::AxumAppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub completion_service: String,
    pub image_lookup: String,
}

/// Health check endpoint
///
/// Reports which collaborators are configured. The server itself is always
/// healthy if it can answer; a missing Completion Service is reported here
/// and surfaced per request.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let configured = |present: bool| {
        if present {
            "configured".to_string()
        } else {
            "missing".to_string()
        }
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            completion_service: configured(state.deps.completion.is_some()),
            image_lookup: configured(state.deps.image_lookup.is_some()),
        }),
    )
}
