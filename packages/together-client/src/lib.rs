//! Pure Together inference REST API client
//!
//! A minimal client for raw-prompt text completions with no domain-specific
//! logic. The response text is returned exactly as the model produced it.
//!
//! # Example
//!
//! ```rust,ignore
//! use together_client::{CompletionRequest, TogetherClient};
//!
//! let client = TogetherClient::from_env()?;
//!
//! let response = client
//!     .complete(
//!         CompletionRequest::new("mistralai/Mistral-7B-Instruct-v0.2", "Say hi")
//!             .max_tokens(64)
//!             .temperature(0.7),
//!     )
//!     .await?;
//! println!("{}", response.text);
//! ```

pub mod error;
pub mod types;

pub use error::{Result, TogetherError};
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

/// Default endpoint for raw-prompt completions.
pub const DEFAULT_BASE_URL: &str = "https://api.together.xyz/inference";

/// Pure Together API client.
#[derive(Clone)]
pub struct TogetherClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl TogetherClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `TOGETHER_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("TOGETHER_API_KEY")
            .map_err(|_| TogetherError::Config("TOGETHER_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom endpoint URL (for the `/v1/completions` endpoint, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Bound every request by a total timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TogetherError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the endpoint URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Text completion.
    ///
    /// Sends the prompt verbatim and returns the first choice's text.
    pub async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Together request failed");
                TogetherError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Together API error");
            return Err(TogetherError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let raw: types::CompletionResponseRaw = response
            .json()
            .await
            .map_err(|e| TogetherError::Parse(e.to_string()))?;

        let completion = raw
            .into_response()
            .ok_or_else(|| TogetherError::Parse("No completion in Together response".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            response_length = completion.text.len(),
            "Together completion"
        );

        Ok(completion)
    }
}
