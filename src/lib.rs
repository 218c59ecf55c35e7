//! job-lens: job description analysis and resume match scoring
//!
//! The core pipeline extracts required skills, experience and education
//! requirements from a job description with curated regex patterns, then
//! scores an optional resume against them. An LLM-backed analyzer can sit
//! in front of the pattern engine and falls back to it on any failure.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;

pub use config::Config;
pub use error::{JobLensError, Result};
