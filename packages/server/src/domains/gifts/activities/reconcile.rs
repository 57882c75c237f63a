use tracing::debug;

use crate::domains::gifts::fallback::FallbackPolicy;
use crate::domains::gifts::models::{Budget, GiftRecord};

/// Force `accepted` to exactly `target` records.
///
/// Extra records are cut from the end, so earlier model output wins. Short
/// batches are padded from `pool` according to `policy`. Padding prefers
/// fallbacks within `budget` and uses every distinct pool entry before
/// repeating one.
pub fn reconcile(
    mut accepted: Vec<GiftRecord>,
    pool: &[GiftRecord],
    target: usize,
    policy: FallbackPolicy,
    budget: &Budget,
) -> Vec<GiftRecord> {
    if accepted.len() >= target {
        accepted.truncate(target);
        return accepted;
    }
    if pool.is_empty() {
        return accepted;
    }

    let needed = target - accepted.len();
    let padding = match policy {
        FallbackPolicy::Cycle => cycle(&budget.prioritize(pool.to_vec()), needed),
        FallbackPolicy::Diverse => {
            diverse(&accepted, pool, needed, budget, &mut fastrand::Rng::new())
        }
    };

    debug!(
        accepted = accepted.len(),
        padded = padding.len(),
        policy = %policy,
        ceiling = ?budget.ceiling(),
        "Padded gift ideas from fallback pool"
    );

    accepted.extend(padding);
    accepted
}

fn cycle(pool: &[GiftRecord], needed: usize) -> Vec<GiftRecord> {
    pool.iter().cycle().take(needed).cloned().collect()
}

/// Shuffled pool entries that don't resemble an accepted title, then the
/// resembling ones, each within-budget first. Wraps only once every entry
/// has been used.
fn diverse(
    accepted: &[GiftRecord],
    pool: &[GiftRecord],
    needed: usize,
    budget: &Budget,
    rng: &mut fastrand::Rng,
) -> Vec<GiftRecord> {
    let (mut fresh, similar): (Vec<GiftRecord>, Vec<GiftRecord>) = pool
        .iter()
        .cloned()
        .partition(|fallback| !accepted.iter().any(|gift| fallback.resembles(&gift.title)));
    rng.shuffle(&mut fresh);

    let (fresh_fits, fresh_over): (Vec<GiftRecord>, Vec<GiftRecord>) =
        fresh.into_iter().partition(|g| budget.fits(g));
    let (similar_fits, similar_over): (Vec<GiftRecord>, Vec<GiftRecord>) =
        similar.into_iter().partition(|g| budget.fits(g));

    let mut ordered = fresh_fits;
    ordered.extend(similar_fits);
    ordered.extend(budget.prioritize(fresh_over));
    ordered.extend(budget.prioritize(similar_over));

    cycle(&ordered, needed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::gifts::fallback::fallback_pool;

    fn gift(title: &str) -> GiftRecord {
        GiftRecord::new(title, "", title, &["$10", "$20"], &[], &[])
    }

    fn titles(gifts: &[GiftRecord]) -> Vec<&str> {
        gifts.iter().map(|g| g.title.as_str()).collect()
    }

    #[test]
    fn test_exact_count_is_untouched() {
        let accepted: Vec<GiftRecord> = (0..6).map(|i| gift(&format!("Gift {}", i))).collect();
        let result = reconcile(accepted.clone(), &fallback_pool(), 6, FallbackPolicy::Cycle, &Budget::unbounded());
        assert_eq!(result, accepted);
    }

    #[test]
    fn test_long_batch_keeps_first_records() {
        let accepted: Vec<GiftRecord> = (0..8).map(|i| gift(&format!("Gift {}", i))).collect();
        let result = reconcile(accepted, &fallback_pool(), 6, FallbackPolicy::Cycle, &Budget::unbounded());

        assert_eq!(titles(&result), vec!["Gift 0", "Gift 1", "Gift 2", "Gift 3", "Gift 4", "Gift 5"]);
    }

    #[test]
    fn test_cycle_pads_from_pool_start() {
        let pool = fallback_pool();
        let result = reconcile(vec![gift("Camping Chair")], &pool, 6, FallbackPolicy::Cycle, &Budget::unbounded());

        assert_eq!(result.len(), 6);
        assert_eq!(result[0].title, "Camping Chair");
        assert_eq!(result[1..], pool[..5]);
    }

    #[test]
    fn test_cycle_wraps_small_pool() {
        let pool = vec![gift("A"), gift("B")];
        let result = reconcile(Vec::new(), &pool, 5, FallbackPolicy::Cycle, &Budget::unbounded());
        assert_eq!(titles(&result), vec!["A", "B", "A", "B", "A"]);
    }

    #[test]
    fn test_diverse_skips_similar_titles() {
        let pool = fallback_pool();
        let accepted = vec![gift("BBQ Thermometer"), gift("Tool Belt")];
        let result = reconcile(accepted, &pool, 6, FallbackPolicy::Diverse, &Budget::unbounded());

        assert_eq!(result.len(), 6);
        let padded = &result[2..];
        assert!(padded.iter().all(|g| g.title != "Smart BBQ Thermometer"));
        assert!(padded.iter().all(|g| g.title != "Premium Tool Belt"));
    }

    #[test]
    fn test_diverse_has_no_repeats_when_pool_suffices() {
        let result = reconcile(Vec::new(), &fallback_pool(), 6, FallbackPolicy::Diverse, &Budget::unbounded());

        let mut seen = titles(&result);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_diverse_tops_up_when_everything_resembles() {
        let pool = vec![gift("Mug"), gift("Coffee Mug")];
        let mut rng = fastrand::Rng::with_seed(7);
        let padded = diverse(&[gift("mug")], &pool, 3, &Budget::unbounded(), &mut rng);
        assert_eq!(titles(&padded), vec!["Mug", "Coffee Mug", "Mug"]);
    }

    #[test]
    fn test_zero_target_is_empty() {
        let result = reconcile(vec![gift("A")], &fallback_pool(), 0, FallbackPolicy::Cycle, &Budget::unbounded());
        assert!(result.is_empty());
    }

    fn priced(title: &str, high: &str) -> GiftRecord {
        GiftRecord::new(title, "", title, &["$1", high], &[], &[])
    }

    #[test]
    fn test_cycle_prefers_affordable_then_distinct() {
        let pool = vec![priced("A", "$90"), priced("B", "$20"), priced("C", "$60"), priced("D", "$40")];
        let result = reconcile(Vec::new(), &pool, 6, FallbackPolicy::Cycle, &Budget::under(50.0));

        assert_eq!(titles(&result), vec!["B", "D", "C", "A", "B", "D"]);
    }

    #[test]
    fn test_diverse_prefers_affordable_then_distinct() {
        let pool = vec![priced("A", "$90"), priced("B", "$20"), priced("C", "$60"), priced("D", "$40")];
        let mut rng = fastrand::Rng::with_seed(3);
        let padded = diverse(&[], &pool, 4, &Budget::under(50.0), &mut rng);

        let mut affordable = titles(&padded[..2]);
        affordable.sort();
        assert_eq!(affordable, vec!["B", "D"]);
        assert_eq!(titles(&padded[2..]), vec!["C", "A"]);
    }

    #[test]
    fn test_diverse_uses_resembling_entries_before_repeating() {
        let pool = vec![gift("Mug"), gift("Tool Belt"), gift("Golf Net")];
        let mut rng = fastrand::Rng::with_seed(11);
        let padded = diverse(&[gift("mug")], &pool, 3, &Budget::unbounded(), &mut rng);

        let mut seen = titles(&padded);
        seen.sort();
        assert_eq!(seen, vec!["Golf Net", "Mug", "Tool Belt"]);
        assert_eq!(padded[2].title, "Mug");
    }
}
