use crate::domains::gifts::fallback::FallbackPolicy;

/// Number of gift records every successful response carries
pub const TARGET_COUNT: usize = 6;

/// Trimmed completions shorter than this skip parsing entirely
pub const MIN_RESPONSE_LEN: usize = 10;

pub const PLACEHOLDER_IMAGE_URL: &str = "/gift-placeholder.jpg";
pub const RETAILER_SEARCH_URL: &str = "https://www.amazon.com/s?k=";

/// Tunables for the response recovery pipeline
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub target_count: usize,
    pub min_response_len: usize,
    pub fallback_policy: FallbackPolicy,
    pub placeholder_image_url: String,
    pub retailer_search_url: String,
    /// Answer Completion Service failures with the fallback pool instead of an error
    pub mask_completion_errors: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            target_count: TARGET_COUNT,
            min_response_len: MIN_RESPONSE_LEN,
            fallback_policy: FallbackPolicy::Cycle,
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            retailer_search_url: RETAILER_SEARCH_URL.to_string(),
            mask_completion_errors: false,
        }
    }
}
