//! HTTP client implementation for the Gemini `generateContent` API.
//!
//! This module provides a reqwest-based implementation of the [`GenerationClient`](crate::GenerationClient) trait.

use crate::{Config, GenerationClient, GenerationError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Client for the Gemini text-generation API using reqwest.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    /// `None` when the configured key is missing, blank or the placeholder.
    api_key: Option<SecretString>,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    fn from_prompt(text: &'a str) -> Self {
        Self {
            contents: [Content {
                parts: [Part { text }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    error: Option<serde_json::Value>,
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "safetyRatings")]
    safety_ratings: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Create a new client instance with the connect and read timeouts from `config`.
    ///
    /// A missing or placeholder API key does not fail construction; the client
    /// is built disabled and answers every call with [`GenerationError::Config`].
    pub fn new(config: Config) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .build()?;
        let usable = config.usable_api_key().is_some();
        if !usable {
            tracing::warn!("Gemini API key missing or placeholder; generation disabled");
        }
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            api_key: config.api_key.filter(|_| usable),
            client,
        })
    }

    /// The endpoint for the configured model, without the key query parameter.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Whether a usable API key was configured.
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, GenerationError> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret())
            .ok_or_else(|| GenerationError::Config("Gemini API key missing or placeholder".into()))
    }

    /// Extract error information from a failed response.
    async fn error_from_response(resp: reqwest::Response) -> GenerationError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();
        GenerationError::Status {
            status,
            body: body_snippet,
        }
    }

    async fn request(&self, prompt: &str) -> Result<String, GenerationError> {
        let key = self.api_key()?;
        let resp = self
            .client
            .post(self.endpoint())
            .query(&[("key", key)])
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }

        let body = resp.text().await?;
        if body.trim().is_empty() {
            return Err(GenerationError::EmptyBody);
        }
        let payload: GenerateResponse = serde_json::from_str(&body)?;
        aggregate_text(payload)
    }
}

/// Join the text of every part of every candidate, one line each.
fn aggregate_text(payload: GenerateResponse) -> Result<String, GenerationError> {
    if let Some(error) = payload.error {
        return Err(GenerationError::Upstream(error.to_string()));
    }
    let candidates = payload.candidates.unwrap_or_default();
    if candidates.is_empty() {
        return Err(GenerationError::NoCandidates);
    }

    tracing::debug!(candidates = candidates.len(), "Gemini candidates received");
    let mut out = String::new();
    for candidate in candidates {
        if let Some(parts) = candidate.content.and_then(|c| c.parts) {
            for text in parts.into_iter().filter_map(|p| p.text) {
                out.push_str(&text);
                out.push('\n');
            }
        }
        if let Some(safety) = candidate.safety_ratings {
            tracing::debug!(%safety, "Gemini safety ratings");
        }
    }

    let out = out.trim();
    if out.is_empty() {
        tracing::warn!("Gemini produced empty aggregated text");
        return Err(GenerationError::EmptyText);
    }
    tracing::debug!(len = out.len(), "Gemini aggregated text");
    Ok(out.to_string())
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let result = self.request(prompt).await;
        if let Err(e) = &result {
            tracing::error!(endpoint = %self.endpoint(), error = %e, "Gemini request failed");
        }
        result
    }
}
