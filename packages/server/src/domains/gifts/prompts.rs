//! Prompt template for the gift idea completion.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::models::{Budget, GiftRequest};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([a-z_]+)\}").unwrap();
}

const GIFT_PROMPT_TEMPLATE: &str = r#"Generate {count} unique and practical gift ideas for a dad, based on:
- Occasion: {occasion}
- Interests: {interests}
- Budget: {budget}

For each gift, return:
1. A clear, generic product name (no brands, no made-up names, no bundles, just one real item)
2. A short, light-hearted description (can be witty, but not confusing)
3. A generic search term for an online store (same as the product name, no brands)
4. A realistic price range{price_hint}
5. Matching interests and occasions (as arrays)
{budget_rule}{continuation}
Examples of good product names:
- "Camping Chair", "Digital Meat Thermometer", "Golf Practice Net", "BBQ Tool Set"

Examples of bad product names:
- "Dad's Ultimate Grill Pack", "GrillMaster Pro 9000", "Coleman Tent" (no vague terms, fake names, or brands)

Output only a JSON array with this schema for each item:
{
  "title": "",
  "description": "",
  "searchTerm": "",
  "priceRange": ["$25", "$50"],
  "interests": [],
  "occasions": []
}"#;

const CONTINUATION_NOTE: &str = "\nThe user has already seen the most common suggestions. Favor less obvious ideas this time.\n";

/// Render the completion prompt for a request
pub fn build_gift_prompt(request: &GiftRequest, count: usize, budget: &Budget) -> String {
    let (budget_text, price_hint, budget_rule) = match budget.ceiling() {
        Some(ceiling) => {
            let max = format_amount(ceiling);
            (
                format!("Under ${}", max),
                format!(" under ${}", max),
                format!(
                    "\nStay within budget: $0-${max}. All gift suggestions MUST be under ${max}.\n"
                ),
            )
        }
        None => (request.budget().to_string(), String::new(), String::new()),
    };

    let continuation = if request.is_continuation() {
        CONTINUATION_NOTE
    } else {
        ""
    };

    let count = count.to_string();
    render(
        GIFT_PROMPT_TEMPLATE,
        &[
            ("count", count.as_str()),
            ("occasion", request.occasion()),
            ("interests", request.interests()),
            ("budget", budget_text.as_str()),
            ("price_hint", price_hint.as_str()),
            ("budget_rule", budget_rule.as_str()),
            ("continuation", continuation),
        ],
    )
}

/// Fill every `{name}` in one pass. Substituted text is never rescanned, so
/// caller input that looks like a placeholder stays literal.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            values
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as u64)
    } else {
        format!("{:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_request_and_ceiling() {
        let request = GiftRequest {
            occasion: Some("Father's Day".into()),
            interests: Some("Golf".into()),
            budget: Some("Under $50".into()),
            is_continuation: None,
        };
        let prompt = build_gift_prompt(&request, 6, &Budget::parse(request.budget()));

        assert!(prompt.starts_with("Generate 6 unique"));
        assert!(prompt.contains("- Occasion: Father's Day"));
        assert!(prompt.contains("- Interests: Golf"));
        assert!(prompt.contains("MUST be under $50"));
        assert!(!prompt.contains("less obvious"));
    }

    #[test]
    fn test_unbounded_budget_is_passed_through() {
        let request = GiftRequest {
            budget: Some("Money is no object".into()),
            ..Default::default()
        };
        let prompt = build_gift_prompt(&request, 6, &Budget::parse(request.budget()));

        assert!(prompt.contains("- Budget: Money is no object"));
        assert!(!prompt.contains("MUST be under"));
    }

    #[test]
    fn test_continuation_asks_for_fresh_ideas() {
        let request = GiftRequest {
            is_continuation: Some(true),
            ..Default::default()
        };
        let prompt = build_gift_prompt(&request, 6, &Budget::parse(request.budget()));
        assert!(prompt.contains("less obvious"));
    }

    #[test]
    fn test_no_placeholders_left() {
        let prompt = build_gift_prompt(&GiftRequest::default(), 6, &Budget::unbounded());
        for placeholder in ["{count}", "{occasion}", "{interests}", "{budget}", "{price_hint}", "{budget_rule}", "{continuation}"] {
            assert!(!prompt.contains(placeholder), "{} left in prompt", placeholder);
        }
    }

    #[test]
    fn test_placeholder_text_in_request_stays_literal() {
        let request = GiftRequest {
            occasion: Some("{interests}".into()),
            interests: Some("Golf {budget_rule}".into()),
            ..Default::default()
        };
        let prompt = build_gift_prompt(&request, 6, &Budget::parse(request.budget()));

        assert!(prompt.contains("- Occasion: {interests}\n"));
        assert!(prompt.contains("- Interests: Golf {budget_rule}\n"));
        assert_eq!(prompt.matches("MUST be under $100").count(), 1);
    }

    #[test]
    fn test_unknown_braces_are_untouched() {
        assert_eq!(render("{a} {b} {}", &[("a", "1")]), "1 {b} {}");
    }
}
