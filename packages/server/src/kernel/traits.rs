// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// What to prompt for and how to read the answer live in the gifts domain.
//
// Naming convention: Base* for trait names (e.g., BaseCompletionService)

use anyhow::Result;
use async_trait::async_trait;

/// Default model for gift idea completions
pub const DEFAULT_COMPLETION_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

// =============================================================================
// Completion Service Trait (Infrastructure - raw text generation)
// =============================================================================

/// Sampling parameters sent with every completion
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub repetition_penalty: f32,
    pub stop: Vec<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_COMPLETION_MODEL.to_string(),
            max_tokens: 1500,
            temperature: 0.7,
            top_p: 0.9,
            top_k: 50,
            repetition_penalty: 1.1,
            stop: vec!["</s>".to_string(), "```".to_string()],
        }
    }
}

impl GenerationParams {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
pub trait BaseCompletionService: Send + Sync {
    /// Complete a prompt (returns raw text, with no structural guarantee)
    async fn complete(&self, prompt: &str, params: &GenerationParams) -> Result<String>;
}

// =============================================================================
// Image Lookup Trait (Infrastructure - stock photos)
// =============================================================================

#[async_trait]
pub trait BaseImageLookup: Send + Sync {
    /// Find an image for a short query. `Ok(None)` means nothing matched.
    async fn find_image(&self, query: &str) -> Result<Option<String>>;
}
