use tracing::{error, info, warn};

use super::{assemble_gifts, attach_images, attach_retailer_links};
use crate::domains::gifts::errors::GiftError;
use crate::domains::gifts::models::{Budget, GiftRecord, GiftRequest};
use crate::domains::gifts::prompts::build_gift_prompt;
use crate::kernel::ServerDeps;

/// Prompt the Completion Service and turn its answer into gift ideas.
///
/// Only infrastructure failures are returned as errors. Whatever text comes
/// back is recovered into exactly `target_count` records, each decorated
/// with an image and a retailer link.
pub async fn generate_gift_ideas(
    deps: &ServerDeps,
    request: &GiftRequest,
) -> Result<Vec<GiftRecord>, GiftError> {
    let settings = &deps.settings;
    let completion = deps
        .completion
        .as_ref()
        .ok_or(GiftError::MissingCredentials)?;

    let budget = Budget::parse(request.budget());
    let prompt = build_gift_prompt(request, settings.target_count, &budget);

    info!(
        occasion = %request.occasion(),
        interests = %request.interests(),
        budget = %request.budget(),
        ceiling = ?budget.ceiling(),
        continuation = request.is_continuation(),
        "Generating gift ideas"
    );

    let raw = match completion.complete(&prompt, &deps.generation).await {
        Ok(text) => text,
        Err(e) if settings.mask_completion_errors => {
            warn!(error = %e, "Completion failed, answering from fallback pool");
            String::new()
        }
        Err(e) => {
            error!(error = %e, "Completion failed");
            return Err(GiftError::Completion(e.to_string()));
        }
    };

    let gifts = assemble_gifts(&raw, &budget, settings);
    let gifts = attach_images(
        gifts,
        deps.image_lookup.as_ref(),
        &settings.placeholder_image_url,
    )
    .await;
    let gifts = attach_retailer_links(gifts, &settings.retailer_search_url);

    Ok(gifts)
}
