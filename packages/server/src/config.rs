use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::domains::gifts::{FallbackPolicy, PipelineSettings};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Completion Service credentials. Absence is reported per request, not at boot.
    pub together_api_key: Option<String>,
    pub together_api_url: String,
    pub together_model: String,
    pub completion_timeout_secs: u64,
    pub unsplash_access_key: Option<String>,
    pub target_count: usize,
    pub fallback_policy: FallbackPolicy,
    pub placeholder_image_url: String,
    pub retailer_search_url: String,
    pub mask_completion_errors: bool,
    pub allowed_origins: Vec<String>,
    pub rate_limit_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = PipelineSettings::default();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            together_api_key: env::var("TOGETHER_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            together_api_url: env::var("TOGETHER_API_URL")
                .unwrap_or_else(|_| together_client::DEFAULT_BASE_URL.to_string()),
            together_model: env::var("TOGETHER_MODEL")
                .unwrap_or_else(|_| crate::kernel::DEFAULT_COMPLETION_MODEL.to_string()),
            completion_timeout_secs: env::var("COMPLETION_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .context("COMPLETION_TIMEOUT_SECS must be a valid number")?,
            unsplash_access_key: env::var("UNSPLASH_ACCESS_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            target_count: env::var("GIFT_TARGET_COUNT")
                .unwrap_or_else(|_| defaults.target_count.to_string())
                .parse()
                .context("GIFT_TARGET_COUNT must be a valid number")?,
            fallback_policy: env::var("FALLBACK_POLICY")
                .unwrap_or_else(|_| "cycle".to_string())
                .parse()
                .context("FALLBACK_POLICY must be 'cycle' or 'diverse'")?,
            placeholder_image_url: env::var("PLACEHOLDER_IMAGE_URL")
                .unwrap_or(defaults.placeholder_image_url),
            retailer_search_url: env::var("RETAILER_SEARCH_URL")
                .unwrap_or(defaults.retailer_search_url),
            mask_completion_errors: parse_flag("MASK_COMPLETION_ERRORS", false)?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            rate_limit_enabled: parse_flag("RATE_LIMIT_ENABLED", true)?,
        })
    }

    /// Pipeline knobs derived from this configuration
    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            target_count: self.target_count,
            fallback_policy: self.fallback_policy,
            placeholder_image_url: self.placeholder_image_url.clone(),
            retailer_search_url: self.retailer_search_url.clone(),
            mask_completion_errors: self.mask_completion_errors,
            ..PipelineSettings::default()
        }
    }
}

fn parse_flag(name: &str, default: bool) -> Result<bool> {
    match env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => anyhow::bail!("{} must be a boolean, got '{}'", name, other),
        },
        Err(_) => Ok(default),
    }
}
