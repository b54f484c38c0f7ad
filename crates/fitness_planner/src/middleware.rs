//! Middleware layer for cross-cutting concerns around the generation client.

use std::sync::Arc;
use std::time::Instant;

use gemini_client::{GenerationClient, GenerationError};
use tracing::debug;

/// Wraps a [`GenerationClient`] and logs the duration and outcome of each call.
#[derive(Clone)]
pub struct LoggingMiddleware<C: GenerationClient> {
    inner: Arc<C>,
}

impl<C: GenerationClient> LoggingMiddleware<C> {
    pub fn new(client: C) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }
}

#[async_trait::async_trait]
impl<C: GenerationClient + 'static> GenerationClient for LoggingMiddleware<C> {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let start = Instant::now();
        debug!(prompt_len = prompt.len(), "Starting generation");

        let result = self.inner.generate(prompt).await;

        let duration = start.elapsed();
        match &result {
            Ok(text) => {
                debug!(
                    "Generation completed in {:?} ({} chars)",
                    duration,
                    text.len()
                );
            }
            Err(e) => {
                debug!("Generation failed in {:?} - error: {}", duration, e);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StubClient;

    #[tokio::test]
    async fn passes_results_through_unchanged() {
        let ok = LoggingMiddleware::new(StubClient::text("hello"));
        assert_eq!(ok.generate("p").await.unwrap(), "hello");

        let empty = LoggingMiddleware::new(StubClient::no_result());
        assert!(matches!(
            empty.generate("p").await,
            Err(GenerationError::EmptyText)
        ));
    }

    #[tokio::test]
    async fn forwards_prompt_to_inner_client() {
        let stub = StubClient::text("{}");
        let prompts = stub.prompts();
        let client = LoggingMiddleware::new(stub);
        client.generate("exact prompt").await.unwrap();
        assert_eq!(prompts.lock().unwrap().as_slice(), ["exact prompt"]);
    }
}
