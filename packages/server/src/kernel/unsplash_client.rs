use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::BaseImageLookup;

pub const UNSPLASH_API_URL: &str = "https://api.unsplash.com";

/// Unsplash API client for stock photo lookup
pub struct UnsplashClient {
    access_key: String,
    base_url: String,
    client: reqwest::Client,
}

/// Unsplash search response
#[derive(Debug, Deserialize)]
struct SearchPhotosResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    #[serde(default)]
    regular: Option<String>,
    #[serde(default)]
    small: Option<String>,
}

impl UnsplashClient {
    /// Create a new Unsplash client
    pub fn new(access_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            access_key,
            base_url: UNSPLASH_API_URL.to_string(),
            client,
        })
    }

    /// Point at a different API host (proxies, tests)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl BaseImageLookup for UnsplashClient {
    async fn find_image(&self, query: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(format!("{}/search/photos", self.base_url))
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .query(&[("query", query), ("per_page", "1"), ("orientation", "squarish")])
            .send()
            .await
            .context("Failed to send Unsplash search request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Unsplash API error {}: {}", status, body);
        }

        let search: SearchPhotosResponse = response
            .json()
            .await
            .context("Failed to parse Unsplash response")?;

        Ok(first_photo_url(search))
    }
}

fn first_photo_url(search: SearchPhotosResponse) -> Option<String> {
    search
        .results
        .into_iter()
        .next()
        .and_then(|photo| photo.urls.regular.or(photo.urls.small))
}
