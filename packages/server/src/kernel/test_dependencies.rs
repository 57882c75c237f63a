// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseCompletionService, BaseImageLookup, GenerationParams, ServerDeps};
use crate::domains::gifts::PipelineSettings;

// =============================================================================
// Mock Completion Service
// =============================================================================

enum MockReply {
    Text(String),
    Error(String),
}

pub struct MockCompletionService {
    responses: Arc<Mutex<Vec<MockReply>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockCompletionService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockReply::Text(response.into()));
        self
    }

    /// Add a JSON response to the queue (will be serialized)
    pub fn with_json_response<T: serde::Serialize>(self, data: &T) -> Self {
        let json = serde_json::to_string(data).expect("Failed to serialize mock response");
        self.with_response(json)
    }

    /// Queue a failure, as if the service returned a non-success status
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockReply::Error(message.into()));
        self
    }

    /// Get all prompts that were sent
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last prompt sent
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Get the number of completions requested
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockCompletionService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseCompletionService for MockCompletionService {
    async fn complete(&self, prompt: &str, _params: &GenerationParams) -> Result<String> {
        // Record the call
        self.calls.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Prose with no array, like a model ignoring the format
            return Ok("Here are some great gift ideas for dad!".to_string());
        }

        match responses.remove(0) {
            MockReply::Text(text) => Ok(text),
            MockReply::Error(message) => Err(anyhow::anyhow!(message)),
        }
    }
}

// =============================================================================
// Mock Image Lookup
// =============================================================================

pub struct MockImageLookup {
    urls: Arc<Mutex<Vec<String>>>,
    fail: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockImageLookup {
    /// A lookup that finds nothing unless URLs are queued
    pub fn new() -> Self {
        Self {
            urls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A lookup whose every call errors
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Queue a URL to be returned by the next lookup
    pub fn with_url(self, url: impl Into<String>) -> Self {
        self.urls.lock().unwrap().push(url.into());
        self
    }

    /// Get all queries that were looked up
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockImageLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseImageLookup for MockImageLookup {
    async fn find_image(&self, query: &str) -> Result<Option<String>> {
        self.calls.lock().unwrap().push(query.to_string());

        if self.fail {
            anyhow::bail!("image service unavailable");
        }

        let mut urls = self.urls.lock().unwrap();
        if urls.is_empty() {
            Ok(None)
        } else {
            Ok(Some(urls.remove(0)))
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mock collaborators plus the ServerDeps wired to them
pub struct TestDependencies {
    pub completion: Arc<MockCompletionService>,
    pub image_lookup: Arc<MockImageLookup>,
    pub settings: PipelineSettings,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            completion: Arc::new(MockCompletionService::new()),
            image_lookup: Arc::new(MockImageLookup::new()),
            settings: PipelineSettings::default(),
        }
    }

    pub fn with_completion(mut self, completion: MockCompletionService) -> Self {
        self.completion = Arc::new(completion);
        self
    }

    pub fn with_image_lookup(mut self, image_lookup: MockImageLookup) -> Self {
        self.image_lookup = Arc::new(image_lookup);
        self
    }

    pub fn with_settings(mut self, settings: PipelineSettings) -> Self {
        self.settings = settings;
        self
    }

    /// ServerDeps backed by the mocks
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            Some(self.completion.clone()),
            Some(self.image_lookup.clone()),
            GenerationParams::default(),
            self.settings.clone(),
        )
    }

    /// ServerDeps with no Completion Service credentials
    pub fn server_deps_without_credentials(&self) -> ServerDeps {
        ServerDeps::new(
            None,
            Some(self.image_lookup.clone()),
            GenerationParams::default(),
            self.settings.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
