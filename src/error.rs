//! Error handling for the job-lens application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobLensError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("LLM request error: {0}")]
    LlmRequest(#[from] reqwest::Error),

    #[error("LLM response error: {0}")]
    LlmResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, JobLensError>;
