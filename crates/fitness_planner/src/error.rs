//! Error types for the generation pipeline.
//!
//! None of these reach callers of [`PlanGenerator`](crate::PlanGenerator); they
//! describe why a call fell back.

use thiserror::Error;

/// Failure to isolate a JSON object inside generated text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("generated text is blank")]
    Blank,
    #[error("no JSON object braces found in generated text")]
    NoJsonObject,
}

/// Pipeline errors, one per fallible stage.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("generation failed: {0}")]
    Generation(#[from] gemini_client::GenerationError),

    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for pipeline stages.
pub type PlannerResult<T> = Result<T, PlannerError>;
