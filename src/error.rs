//! Error handling for the resume grader

use crate::generation::GenerationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeGraderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input text too short: {length} characters (minimum {minimum})")]
    ShortInputRejected { length: usize, minimum: usize },

    #[error("Text generation failed: {0}")]
    GenerationFailed(#[from] GenerationError),

    #[error("No parseable JSON object found in generated text ({} bytes retained)", .raw.len())]
    RecoveryFailed { raw: String },

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ResumeGraderError>;

/// Convert anyhow errors (model loading) to our custom error type
impl From<anyhow::Error> for ResumeGraderError {
    fn from(err: anyhow::Error) -> Self {
        ResumeGraderError::Embedding(err.to_string())
    }
}
