//! Command line interface definitions

use crate::config::OutputFormat;
use crate::error::{JobLensError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-lens")]
#[command(about = "Analyze job descriptions and score resume fit")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a job description, optionally matching a resume against it
    Analyze {
        /// Path to the job description file (txt or md)
        job: PathBuf,

        /// Path to a resume file to match against the job (txt or md)
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Output format: console, json, or markdown (defaults to the
        /// configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save the report to a file as well; without a value, a
        /// timestamped filename is derived from the job file
        #[arg(short, long)]
        save: Option<Option<PathBuf>>,

        /// Skip the LLM and use pattern matching directly
        #[arg(long)]
        no_llm: bool,

        /// Include matched/missing skill lists and run info
        #[arg(short, long)]
        detailed: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Reset the configuration file to defaults
    Reset,
}

/// Resolve the effective output format: an explicit CLI value wins,
/// otherwise the configured default applies
pub fn resolve_output_format(
    cli_value: Option<&str>,
    configured: OutputFormat,
) -> Result<OutputFormat> {
    match cli_value {
        Some(value) => parse_output_format(value),
        None => Ok(configured),
    }
}

pub fn parse_output_format(format: &str) -> Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        other => Err(JobLensError::InvalidInput(format!(
            "Unknown output format '{}' (expected console, json, or markdown)",
            other
        ))),
    }
}

pub fn validate_file_extension(path: &std::path::Path) -> Result<()> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .as_deref()
    {
        Some("txt") | Some("md") | Some("markdown") => Ok(()),
        _ => Err(JobLensError::UnsupportedFormat(format!(
            "Unsupported file type: {} (expected .txt or .md)",
            path.display()
        ))),
    }
}
