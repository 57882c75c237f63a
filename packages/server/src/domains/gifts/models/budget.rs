use std::cmp::Ordering;

use lazy_static::lazy_static;
use regex::Regex;

use super::GiftRecord;

lazy_static! {
    // "Under $50", "under $1,000"
    static ref CEILING_REGEX: Regex = Regex::new(r"(?i)under\s*\$\s*(\d[\d,]*)").unwrap();

    // Every currency-prefixed number: "$25", "$24.99", "$25-$50"
    static ref PRICE_REGEX: Regex = Regex::new(r"\$\s*(\d[\d,]*(?:\.\d+)?)").unwrap();
}

/// Maximum acceptable price derived from the caller's budget text
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Budget {
    ceiling: Option<f64>,
}

impl Budget {
    pub fn unbounded() -> Self {
        Self { ceiling: None }
    }

    pub fn under(ceiling: f64) -> Self {
        Self {
            ceiling: Some(ceiling),
        }
    }

    /// "Under $N" yields a ceiling of N; anything else is unbounded.
    pub fn parse(text: &str) -> Self {
        CEILING_REGEX
            .captures(text)
            .and_then(|caps| parse_amount(&caps[1]))
            .map(Self::under)
            .unwrap_or_else(Self::unbounded)
    }

    pub fn ceiling(&self) -> Option<f64> {
        self.ceiling
    }

    /// Whether the record's highest declared price is within the ceiling.
    /// Records with no readable price always fit.
    pub fn fits(&self, gift: &GiftRecord) -> bool {
        match (self.ceiling, max_price(gift)) {
            (Some(ceiling), Some(price)) => price <= ceiling,
            _ => true,
        }
    }

    /// Records within the ceiling first, in their given order, then the
    /// rest from cheapest to priciest. Nothing is dropped.
    pub fn prioritize(&self, gifts: Vec<GiftRecord>) -> Vec<GiftRecord> {
        if self.ceiling.is_none() {
            return gifts;
        }

        let (mut affordable, mut over): (Vec<GiftRecord>, Vec<GiftRecord>) =
            gifts.into_iter().partition(|g| self.fits(g));
        over.sort_by(|a, b| {
            max_price(a)
                .partial_cmp(&max_price(b))
                .unwrap_or(Ordering::Equal)
        });
        affordable.extend(over);
        affordable
    }
}

/// Highest currency-prefixed amount across every entry of the price range
pub fn max_price(gift: &GiftRecord) -> Option<f64> {
    gift.price_range
        .iter()
        .flat_map(|entry| PRICE_REGEX.captures_iter(entry))
        .filter_map(|caps| parse_amount(&caps[1]))
        .fold(None, |max, price| match max {
            Some(m) if m >= price => Some(m),
            _ => Some(price),
        })
}

fn parse_amount(text: &str) -> Option<f64> {
    text.replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(title: &str, range: &[&str]) -> GiftRecord {
        GiftRecord::new(title, "", title, range, &[], &[])
    }

    #[test]
    fn test_parse_under_amount() {
        assert_eq!(Budget::parse("Under $50").ceiling(), Some(50.0));
        assert_eq!(Budget::parse("under $1,000").ceiling(), Some(1000.0));
    }

    #[test]
    fn test_parse_other_text_is_unbounded() {
        assert_eq!(Budget::parse("$50-$100").ceiling(), None);
        assert_eq!(Budget::parse("No limit").ceiling(), None);
        assert_eq!(Budget::parse("").ceiling(), None);
    }

    #[test]
    fn test_max_price_reads_every_token() {
        assert_eq!(max_price(&priced("a", &["$25", "$50"])), Some(50.0));
        assert_eq!(max_price(&priced("b", &["$25-$80"])), Some(80.0));
        assert_eq!(max_price(&priced("c", &["$24.99"])), Some(24.99));
        assert_eq!(max_price(&priced("d", &["cheap"])), None);
    }

    #[test]
    fn test_prioritize_puts_affordable_first() {
        let budget = Budget::parse("Under $50");
        let gifts = vec![
            priced("grill", &["$40", "$80"]),
            priced("mug", &["$10", "$20"]),
            priced("belt", &["$30", "$60"]),
            priced("thermometer", &["$25", "$50"]),
        ];

        let ordered: Vec<String> = budget
            .prioritize(gifts)
            .into_iter()
            .map(|g| g.title)
            .collect();
        assert_eq!(ordered, vec!["mug", "thermometer", "belt", "grill"]);
    }

    #[test]
    fn test_unbounded_prioritize_keeps_order() {
        let gifts = vec![priced("b", &["$90"]), priced("a", &["$10"])];
        assert_eq!(Budget::unbounded().prioritize(gifts.clone()), gifts);
    }

    #[test]
    fn test_unpriced_record_fits() {
        assert!(Budget::under(5.0).fits(&priced("free", &["priceless"])));
    }
}
