use tracing::debug;

use crate::domains::gifts::models::{Budget, GiftRecord};

/// Drop over-budget records and return the budget that padding should honor.
///
/// If neither an accepted record nor any fallback fits the ceiling, the
/// filter is skipped and an unbounded budget is returned.
pub fn apply_budget(
    accepted: Vec<GiftRecord>,
    pool: &[GiftRecord],
    budget: &Budget,
) -> (Vec<GiftRecord>, Budget) {
    if budget.ceiling().is_none() {
        return (accepted, *budget);
    }

    let affordable: Vec<GiftRecord> = accepted.iter().filter(|g| budget.fits(g)).cloned().collect();
    let pool_fits = pool.iter().any(|g| budget.fits(g));

    if affordable.is_empty() && !pool_fits {
        debug!(ceiling = ?budget.ceiling(), "No gift fits the budget, skipping price filter");
        return (accepted, Budget::unbounded());
    }

    let dropped = accepted.len() - affordable.len();
    if dropped > 0 {
        debug!(dropped, ceiling = ?budget.ceiling(), "Dropped over-budget gift ideas");
    }

    (affordable, *budget)
}
