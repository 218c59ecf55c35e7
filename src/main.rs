//! job-lens CLI entry point

use clap::Parser;
use job_lens::analysis::Analyzer;
use job_lens::cli::{resolve_output_format, validate_file_extension, Cli, Commands, ConfigAction};
use job_lens::config::Config;
use job_lens::error::{JobLensError, Result};
use job_lens::input::InputManager;
use job_lens::llm::{ChatClient, LlmAnalyzer};
use job_lens::output::{save_report_to_file, suggest_filename, AnalysisReport, ReportGenerator};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            job,
            resume,
            output,
            save,
            no_llm,
            detailed,
        } => {
            run_analyze(config, job, resume, output, save, no_llm, detailed).await
        }
        Commands::Config { action } => run_config(config, action),
    }
}

async fn run_analyze(
    config: Config,
    job: PathBuf,
    resume: Option<PathBuf>,
    output: Option<String>,
    save: Option<Option<PathBuf>>,
    no_llm: bool,
    detailed: bool,
) -> Result<()> {
    let format = resolve_output_format(output.as_deref(), config.output.format)?;

    validate_file_extension(&job)?;
    if let Some(resume_path) = &resume {
        validate_file_extension(resume_path)?;
    }

    let mut input = InputManager::new();
    let job_text = input.extract_text(&job).await?;
    if job_text.trim().is_empty() {
        return Err(JobLensError::InvalidInput(format!(
            "Job description is empty: {}",
            job.display()
        )));
    }

    let resume_text = match &resume {
        Some(path) => Some(input.extract_text(path).await?),
        None => None,
    };

    let llm = if no_llm {
        debug!("LLM disabled on the command line");
        None
    } else {
        ChatClient::from_config(&config.llm)?.map(LlmAnalyzer::new)
    };
    let analyzer = Analyzer::new(llm)?;
    info!("Analyzing with strategy: {}", analyzer.strategy_name());

    let start = Instant::now();
    let analysis = analyzer.analyze(&job_text, resume_text.as_deref()).await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    let report = AnalysisReport::new(
        analysis,
        analyzer.strategy_name(),
        elapsed_ms,
        job.display().to_string(),
        resume.as_ref().map(|p| p.display().to_string()),
    );

    let detailed = detailed || config.output.detailed;
    let rendered = ReportGenerator::generate(&report, format, detailed, config.output.color_output)?;
    println!("{}", rendered);

    if let Some(save) = save {
        let save_path = save
            .unwrap_or_else(|| PathBuf::from(suggest_filename(&report.metadata.job_file, format)));
        save_report_to_file(&rendered, &save_path).await?;
        println!("Report saved to: {}", save_path.display());
    }

    Ok(())
}

fn run_config(config: Config, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let content = toml::to_string_pretty(&config).map_err(|e| {
                JobLensError::Configuration(format!("Failed to serialize config: {}", e))
            })?;
            println!("{}", content);
        }
        ConfigAction::Reset => {
            let defaults = Config::default();
            defaults.save()?;
            println!("Configuration reset to defaults");
        }
    }
    Ok(())
}
