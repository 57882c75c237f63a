//! Response recovery: raw completion text in, exactly `target_count` gift
//! records out.
//!
//! Pipeline: fast-path check → extract array → repair/parse → validate →
//! budget filter → reconcile count against the fallback pool.

use tracing::{debug, info};

use super::{apply_budget, extract_array, parse_candidates, reconcile, validate};
use crate::domains::gifts::fallback::fallback_pool;
use crate::domains::gifts::models::{Budget, GiftRecord, PipelineSettings};

/// Validated records salvaged from the completion, in text order.
///
/// Completions shorter than `min_len` (after trimming) are not parsed at all.
pub fn recover_gifts(raw: &str, min_len: usize) -> Vec<GiftRecord> {
    if raw.trim().chars().count() < min_len {
        debug!(length = raw.trim().len(), "Completion empty or too short, skipping parse");
        return Vec::new();
    }

    let candidate = extract_array(raw);
    let items = parse_candidates(candidate);
    let parsed = items.len();
    let accepted: Vec<GiftRecord> = items.iter().filter_map(validate).collect();

    debug!(
        parsed,
        accepted = accepted.len(),
        rejected = parsed - accepted.len(),
        "Validated parsed gift ideas"
    );
    accepted
}

/// Full recovery: never fails, always returns `settings.target_count` records.
pub fn assemble_gifts(raw: &str, budget: &Budget, settings: &PipelineSettings) -> Vec<GiftRecord> {
    let recovered = recover_gifts(raw, settings.min_response_len);
    let from_model = recovered.len();

    let pool = fallback_pool();
    let (accepted, budget) = apply_budget(recovered, &pool, budget);
    let gifts = reconcile(
        accepted,
        &pool,
        settings.target_count,
        settings.fallback_policy,
        &budget,
    );

    info!(
        from_model,
        returned = gifts.len(),
        "Recovered gift ideas from completion"
    );
    gifts
}
