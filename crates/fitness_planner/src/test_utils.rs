//! Shared test utilities and stub `GenerationClient` implementations used by unit tests.
#![cfg(test)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use gemini_client::{GenerationClient, GenerationError};

/// Replies with a fixed text, or with no result, and records every prompt.
pub struct StubClient {
    reply: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubClient {
    pub fn text(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            prompts: Arc::default(),
        }
    }

    pub fn no_result() -> Self {
        Self {
            reply: None,
            prompts: Arc::default(),
        }
    }

    /// Handle to the prompts received so far; stays valid after the stub is moved.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }
}

#[async_trait]
impl GenerationClient for StubClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if let Ok(mut seen) = self.prompts.lock() {
            seen.push(prompt.to_string());
        }
        self.reply.clone().ok_or(GenerationError::EmptyText)
    }
}
