//! Server dependencies for the gift pipeline (using traits for testability)
//!
//! Every external collaborator sits behind a trait so tests can swap in the
//! mocks from `test_dependencies`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use together_client::TogetherClient;

use crate::config::Config;
use crate::domains::gifts::PipelineSettings;
use crate::kernel::{
    BaseCompletionService, BaseImageLookup, GenerationParams, TogetherCompletionService,
    UnsplashClient,
};

/// Server dependencies accessible to handlers
#[derive(Clone)]
pub struct ServerDeps {
    /// Completion Service. `None` when no credentials are configured.
    pub completion: Option<Arc<dyn BaseCompletionService>>,
    /// Image lookup. `None` degrades every image to the placeholder.
    pub image_lookup: Option<Arc<dyn BaseImageLookup>>,
    pub generation: GenerationParams,
    pub settings: PipelineSettings,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        completion: Option<Arc<dyn BaseCompletionService>>,
        image_lookup: Option<Arc<dyn BaseImageLookup>>,
        generation: GenerationParams,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            completion,
            image_lookup,
            generation,
            settings,
        }
    }

    /// Wire production clients from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let completion: Option<Arc<dyn BaseCompletionService>> = match &config.together_api_key {
            Some(key) => {
                let client = TogetherClient::new(key.clone())
                    .with_base_url(config.together_api_url.clone())
                    .with_timeout(Duration::from_secs(config.completion_timeout_secs))
                    .map_err(|e| anyhow::anyhow!("{}", e))?;
                Some(Arc::new(TogetherCompletionService::new(client)))
            }
            None => {
                tracing::warn!("TOGETHER_API_KEY not set - gift generation will return errors");
                None
            }
        };

        let image_lookup: Option<Arc<dyn BaseImageLookup>> = match &config.unsplash_access_key {
            Some(key) => Some(Arc::new(UnsplashClient::new(key.clone())?)),
            None => {
                tracing::info!("UNSPLASH_ACCESS_KEY not set - using placeholder images");
                None
            }
        };

        Ok(Self::new(
            completion,
            image_lookup,
            GenerationParams::default().with_model(config.together_model.clone()),
            config.pipeline_settings(),
        ))
    }
}
