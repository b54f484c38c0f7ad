use crate::GenerationError;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Value shipped in sample property files; treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "CHANGE_ME";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(8);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(25);

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: Option<SecretString>,
    pub model: String,
    pub base_url: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Config {
    /// Configuration with default model, endpoint and timeouts.
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    pub fn from_env() -> Result<Self, GenerationError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    ///
    /// A missing API key is not an error here: the resulting client is simply
    /// disabled and reports [`GenerationError::Config`] on every call.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, GenerationError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api_key = get("GEMINI_API_KEY").map(|k| SecretString::new(k.into()));
        let model = get("GEMINI_API_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());
        let base_url = get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let connect_timeout =
            parse_secs(get("GEMINI_CONNECT_TIMEOUT_SECS"), "GEMINI_CONNECT_TIMEOUT_SECS")?
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        let read_timeout =
            parse_secs(get("GEMINI_READ_TIMEOUT_SECS"), "GEMINI_READ_TIMEOUT_SECS")?
                .unwrap_or(DEFAULT_READ_TIMEOUT);
        Ok(Self {
            api_key,
            model,
            base_url,
            connect_timeout,
            read_timeout,
        })
    }

    /// The API key, if one is set and is not blank or the placeholder.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret())
            .filter(|k| !k.trim().is_empty() && *k != PLACEHOLDER_API_KEY)
    }
}

fn parse_secs(raw: Option<String>, name: &str) -> Result<Option<Duration>, GenerationError> {
    raw.map(|v| {
        v.trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| GenerationError::Config(format!("{name} must be whole seconds, got {v:?}")))
    })
    .transpose()
}
