use serde::{Deserialize, Serialize};

use super::GiftRecord;

pub const DEFAULT_OCCASION: &str = "Birthday";
pub const DEFAULT_INTERESTS: &str = "Tech, Tools, Sports";
pub const DEFAULT_BUDGET: &str = "Under $100";

/// Inbound body of `POST /api/generate`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftRequest {
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    /// Set when the caller already has a batch and wants more ideas
    #[serde(default)]
    pub is_continuation: Option<bool>,
}

impl GiftRequest {
    pub fn occasion(&self) -> &str {
        non_blank(&self.occasion).unwrap_or(DEFAULT_OCCASION)
    }

    pub fn interests(&self) -> &str {
        non_blank(&self.interests).unwrap_or(DEFAULT_INTERESTS)
    }

    pub fn budget(&self) -> &str {
        non_blank(&self.budget).unwrap_or(DEFAULT_BUDGET)
    }

    pub fn is_continuation(&self) -> bool {
        self.is_continuation.unwrap_or(false)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Successful response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftResponse {
    pub gift_ideas: Vec<GiftRecord>,
    pub has_more: bool,
}

impl GiftResponse {
    pub fn new(gift_ideas: Vec<GiftRecord>) -> Self {
        Self {
            gift_ideas,
            has_more: true,
        }
    }
}
