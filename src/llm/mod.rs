//! LLM delegation strategy for job analysis

pub mod analyzer;
pub mod client;
pub mod prompts;

pub use analyzer::LlmAnalyzer;
pub use client::ChatClient;
