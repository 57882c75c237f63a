// Completion Service adapter over the Together client
//
// Maps GenerationParams onto a raw-prompt completion request.

use anyhow::Result;
use async_trait::async_trait;
use together_client::{CompletionRequest, TogetherClient};

use super::{BaseCompletionService, GenerationParams};

/// Wrapper around TogetherClient that implements BaseCompletionService
pub struct TogetherCompletionService(pub TogetherClient);

impl TogetherCompletionService {
    pub fn new(client: TogetherClient) -> Self {
        Self(client)
    }
}

pub fn build_request(prompt: &str, params: &GenerationParams) -> CompletionRequest {
    params.stop.iter().fold(
        CompletionRequest::new(params.model.as_str(), prompt)
            .max_tokens(params.max_tokens)
            .temperature(params.temperature)
            .top_p(params.top_p)
            .top_k(params.top_k)
            .repetition_penalty(params.repetition_penalty),
        |request, stop| request.stop(stop.as_str()),
    )
}

#[async_trait]
impl BaseCompletionService for TogetherCompletionService {
    async fn complete(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        tracing::info!(
            model = %params.model,
            prompt_length = prompt.len(),
            "Calling Together API"
        );

        let response = self
            .0
            .complete(build_request(prompt, params))
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;

        tracing::info!(
            response_length = response.text.len(),
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "Together API response received"
        );

        Ok(response.text)
    }
}
