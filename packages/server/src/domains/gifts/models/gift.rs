use serde::{Deserialize, Serialize};

/// Price pair used when a record's price range is absent or malformed
pub const FALLBACK_PRICE_RANGE: [&str; 2] = ["$0", "$100"];

/// A single gift suggestion returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Retailer/image search phrase. Older model prompts emitted `amazonSearch`.
    #[serde(default, alias = "amazonSearch")]
    pub search_term: String,
    #[serde(default)]
    pub price_range: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub occasions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer_url: Option<String>,
}

impl GiftRecord {
    /// Build a record with the given core fields and no decorations
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        search_term: impl Into<String>,
        price_range: &[&str],
        interests: &[&str],
        occasions: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            search_term: search_term.into(),
            price_range: price_range.iter().map(|p| p.to_string()).collect(),
            interests: interests.iter().map(|i| i.to_string()).collect(),
            occasions: occasions.iter().map(|o| o.to_string()).collect(),
            image_url: None,
            retailer_url: None,
        }
    }

    pub fn fallback_price_range() -> Vec<String> {
        FALLBACK_PRICE_RANGE.iter().map(|p| p.to_string()).collect()
    }

    /// Case-insensitive substring match between titles, in either direction
    pub fn resembles(&self, other_title: &str) -> bool {
        let mine = self.title.to_lowercase();
        let theirs = other_title.to_lowercase();
        if mine.is_empty() || theirs.is_empty() {
            return false;
        }
        mine.contains(&theirs) || theirs.contains(&mine)
    }
}
