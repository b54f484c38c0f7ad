//! Minimal `GenerationClient` trait and a reqwest-based Gemini implementation.

use async_trait::async_trait;
use thiserror::Error;

pub mod config;
pub mod http_client;

pub use config::Config;
pub use http_client::GeminiClient;

/// Reasons a generation call produced no usable text.
///
/// Every variant means "no result": callers are expected to treat any of them
/// the same way and route to their own fallback.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("configuration error: {0}")]
    Config(String),
    /// Transport failure. The request URL is stripped since it carries the key.
    #[error("http error: {0}")]
    Http(reqwest::Error),
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("upstream returned an empty body")]
    EmptyBody,
    #[error("upstream body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("upstream error payload: {0}")]
    Upstream(String),
    #[error("upstream response has no candidates")]
    NoCandidates,
    #[error("upstream candidates contain no text")]
    EmptyText,
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Http(err.without_url())
    }
}

impl GenerationError {
    /// True when the failure comes from local configuration rather than the
    /// network; such a client never succeeds until it is rebuilt.
    pub fn is_config(&self) -> bool {
        matches!(self, GenerationError::Config(_))
    }
}

#[async_trait]
pub trait GenerationClient: Send + Sync + 'static {
    /// Send `prompt` to the text-generation service and return the trimmed,
    /// newline-joined text of every part of every candidate.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
