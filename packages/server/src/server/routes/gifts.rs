use axum::{extract::rejection::JsonRejection, extract::Extension, Json};

use crate::domains::gifts::{generate_gift_ideas, GiftRequest, GiftResponse};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// POST /api/generate
///
/// Body: `{occasion?, interests?, budget?, isContinuation?}`.
/// Responds with exactly `target_count` gift ideas, or `{error}` when the
/// body is malformed or the Completion Service is unavailable.
pub async fn generate_handler(
    Extension(state): Extension<AxumAppState>,
    body: Result<Json<GiftRequest>, JsonRejection>,
) -> Result<Json<GiftResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected gift request body");
        ApiError::from(rejection)
    })?;

    let gifts = generate_gift_ideas(&state.deps, &request).await?;

    Ok(Json(GiftResponse::new(gifts)))
}
