use serde_json::{Map, Value};

use crate::domains::gifts::models::GiftRecord;

/// Keys that count as the record's required string fields
const TITLE_KEY: &str = "title";
const DESCRIPTION_KEY: &str = "description";
const SEARCH_KEYS: [&str; 2] = ["searchTerm", "amazonSearch"];

/// Turn one parsed element into a gift record, or reject it.
///
/// Missing fields are defaulted. A string field holding the wrong type, an
/// empty title, or an object with none of the string fields at all is
/// rejected. Sequence fields holding the wrong type fall back to defaults.
pub fn validate(value: &Value) -> Option<GiftRecord> {
    let object = value.as_object()?;

    let search_value = SEARCH_KEYS.iter().find_map(|key| object.get(*key));
    let has_any_text_field = object.contains_key(TITLE_KEY)
        || object.contains_key(DESCRIPTION_KEY)
        || search_value.is_some();
    if !has_any_text_field {
        return None;
    }

    let title = string_field(object.get(TITLE_KEY))?;
    if title.is_empty() {
        return None;
    }
    let description = string_field(object.get(DESCRIPTION_KEY))?;
    let search_term = match string_field(search_value)? {
        term if term.is_empty() => title.clone(),
        term => term,
    };

    let price_range = match object.get("priceRange").and_then(Value::as_array) {
        Some(items) => {
            let prices: Vec<String> = items.iter().filter_map(price_entry).collect();
            if prices.is_empty() {
                GiftRecord::fallback_price_range()
            } else {
                prices
            }
        }
        None => GiftRecord::fallback_price_range(),
    };

    Some(GiftRecord {
        title,
        description,
        search_term,
        price_range,
        interests: tag_field(object, "interests"),
        occasions: tag_field(object, "occasions"),
        image_url: link_field(object, "imageUrl"),
        retailer_url: link_field(object, "retailerUrl"),
    })
}

/// Decorations carried over from a previously rendered record. Anything but
/// a non-empty string is dropped.
fn link_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

/// Absent or null → empty string; a string → trimmed; anything else → reject.
fn string_field(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => Some(String::new()),
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(_) => None,
    }
}

fn price_entry(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(format!("${}", n)),
        _ => None,
    }
}

/// A sequence of tags, de-duplicated in first-seen order. Non-sequences → empty.
fn tag_field(object: &Map<String, Value>, key: &str) -> Vec<String> {
    let Some(items) = object.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut tags: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let tag = match item {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => continue,
        };
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_object_is_kept_as_is() {
        let gift = validate(&json!({
            "title": "Camping Chair",
            "description": "Sit outside.",
            "searchTerm": "folding camping chair",
            "priceRange": ["$25", "$50"],
            "interests": ["Outdoors"],
            "occasions": ["Birthday"]
        }))
        .unwrap();

        assert_eq!(gift.title, "Camping Chair");
        assert_eq!(gift.search_term, "folding camping chair");
        assert_eq!(gift.price_range, vec!["$25", "$50"]);
        assert_eq!(gift.interests, vec!["Outdoors"]);
    }

    #[test]
    fn test_missing_fields_are_defaulted() {
        let gift = validate(&json!({"title": " Golf Net "})).unwrap();

        assert_eq!(gift.title, "Golf Net");
        assert_eq!(gift.description, "");
        assert_eq!(gift.search_term, "Golf Net");
        assert_eq!(gift.price_range, GiftRecord::fallback_price_range());
        assert!(gift.interests.is_empty());
        assert!(gift.occasions.is_empty());
    }

    #[test]
    fn test_legacy_search_key_is_read() {
        let gift = validate(&json!({"title": "Golf Net", "amazonSearch": "golf practice net"})).unwrap();
        assert_eq!(gift.search_term, "golf practice net");
    }

    #[test]
    fn test_wrong_typed_sequences_fall_back() {
        let gift = validate(&json!({
            "title": "Tool Belt",
            "priceRange": "$30-$60",
            "interests": "Tools",
            "occasions": null
        }))
        .unwrap();

        assert_eq!(gift.price_range, GiftRecord::fallback_price_range());
        assert!(gift.interests.is_empty());
        assert!(gift.occasions.is_empty());
    }

    #[test]
    fn test_empty_price_range_is_malformed() {
        let gift = validate(&json!({"title": "Mug", "priceRange": []})).unwrap();
        assert_eq!(gift.price_range, GiftRecord::fallback_price_range());
    }

    #[test]
    fn test_numeric_prices_gain_currency() {
        let gift = validate(&json!({"title": "Mug", "priceRange": [10, "$20"]})).unwrap();
        assert_eq!(gift.price_range, vec!["$10", "$20"]);
    }

    #[test]
    fn test_tags_are_deduplicated() {
        let gift = validate(&json!({"title": "Mug", "interests": ["Coffee", "Coffee", " Tea", 7]})).unwrap();
        assert_eq!(gift.interests, vec!["Coffee", "Tea", "7"]);
    }

    #[test]
    fn test_noise_without_text_fields_is_rejected() {
        assert!(validate(&json!({"priceRange": ["$5"], "interests": []})).is_none());
        assert!(validate(&json!({})).is_none());
        assert!(validate(&json!("Camping Chair")).is_none());
    }

    #[test]
    fn test_wrong_typed_string_field_is_rejected() {
        assert!(validate(&json!({"title": 42})).is_none());
        assert!(validate(&json!({"title": "Mug", "description": ["nope"]})).is_none());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        assert!(validate(&json!({"title": "", "description": "something"})).is_none());
        assert!(validate(&json!({"description": "no title"})).is_none());
    }

    #[test]
    fn test_rendered_links_are_kept() {
        let gift = validate(&json!({
            "title": "Mug",
            "imageUrl": "https://img/mug.jpg",
            "retailerUrl": "https://www.amazon.com/s?k=mug"
        }))
        .unwrap();

        assert_eq!(gift.image_url.as_deref(), Some("https://img/mug.jpg"));
        assert_eq!(gift.retailer_url.as_deref(), Some("https://www.amazon.com/s?k=mug"));
    }

    #[test]
    fn test_malformed_links_are_dropped() {
        let gift = validate(&json!({"title": "Mug", "imageUrl": 42, "retailerUrl": "  "})).unwrap();

        assert!(gift.image_url.is_none());
        assert!(gift.retailer_url.is_none());
    }
}
