//! Together inference API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Completion
// =============================================================================

/// Raw-prompt completion request.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Model to use (e.g., "mistralai/Mistral-7B-Instruct-v0.2")
    pub model: String,

    /// Prompt text, sent as-is
    pub prompt: String,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Top-k sampling cutoff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Repetition penalty (1.0 = none)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f32>,

    /// Sequences that end generation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
}

impl CompletionRequest {
    /// Create a new completion request for the given model and prompt.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens: None,
            temperature: None,
            top_p: None,
            top_k: None,
            repetition_penalty: None,
            stop: Vec::new(),
        }
    }

    /// Set max tokens.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set nucleus sampling threshold.
    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set top-k cutoff.
    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Set repetition penalty.
    pub fn repetition_penalty(mut self, penalty: f32) -> Self {
        self.repetition_penalty = Some(penalty);
        self
    }

    /// Add a stop sequence.
    pub fn stop(mut self, sequence: impl Into<String>) -> Self {
        self.stop.push(sequence.into());
        self
    }
}

/// Completion response.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated text of the first choice
    pub text: String,

    /// Token usage statistics, when reported
    pub usage: Option<Usage>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,

    #[serde(default)]
    pub completion_tokens: u32,

    #[serde(default)]
    pub total_tokens: u32,
}

/// Raw response body.
///
/// The legacy `/inference` endpoint nests choices under `output`; the
/// `/v1/completions` endpoint puts them at the top level.
#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponseRaw {
    #[serde(default)]
    pub output: Option<OutputRaw>,
    #[serde(default)]
    pub choices: Vec<ChoiceRaw>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OutputRaw {
    #[serde(default)]
    pub choices: Vec<ChoiceRaw>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceRaw {
    #[serde(default)]
    pub text: Option<String>,
}

impl CompletionResponseRaw {
    /// Pull the first choice's text out of whichever shape was returned.
    pub(crate) fn into_response(self) -> Option<CompletionResponse> {
        let (choices, usage) = match self.output {
            Some(output) if !output.choices.is_empty() => {
                (output.choices, output.usage.or(self.usage))
            }
            _ => (self.choices, self.usage),
        };

        let text = choices.into_iter().next()?.text?;
        Some(CompletionResponse { text, usage })
    }
}
