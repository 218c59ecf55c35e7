//! Output formatters for analysis reports

use crate::analysis::{ExtractedSkill, SkillCategory};
use crate::config::OutputFormat;
use crate::error::{JobLensError, Result};
use crate::output::report::AnalysisReport;
use colored::*;

pub trait OutputFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String>;
    fn file_extension(&self) -> &'static str;
}

/// Human-readable console output with color-coded match scores
pub struct ConsoleFormatter {
    pub detailed: bool,
    pub use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(detailed: bool, use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self {
            detailed,
            use_colors,
        }
    }

    fn score_badge(&self, score: u8) -> ColoredString {
        let text = format!("{}%", score);
        match score {
            80..=100 => text.green().bold(),
            60..=79 => text.yellow().bold(),
            _ => text.red().bold(),
        }
    }

    fn category_label(category: SkillCategory) -> &'static str {
        match category {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Tool => "tool",
            SkillCategory::Domain => "domain",
        }
    }

    fn skill_line(skill: &ExtractedSkill) -> String {
        format!(
            "  • {} ({}, {:?})",
            skill.name,
            Self::category_label(skill.category),
            skill.level
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let analysis = &report.analysis;

        output.push_str(&format!("\n{}\n", "📋 Job Analysis".bold().blue()));
        output.push_str(&format!("{}\n", "═".repeat(50)));
        output.push_str(&format!("Position: {}\n", analysis.title.bold()));
        output.push_str(&format!("Company:  {}\n", analysis.company));
        output.push_str(&format!("Experience: {}\n", analysis.experience_level));
        output.push_str(&format!("Education:  {}\n", analysis.education_requirements));

        output.push_str(&format!(
            "\n{} ({})\n",
            "Required Skills".bold(),
            analysis.required_skills.len()
        ));
        if analysis.required_skills.is_empty() {
            output.push_str("  (none detected)\n");
        }
        for skill in &analysis.required_skills {
            output.push_str(&Self::skill_line(skill));
            output.push('\n');
        }

        if let Some(m) = &analysis.resume_match {
            output.push_str(&format!("\n{}\n", "🎯 Resume Match".bold().blue()));
            output.push_str(&format!("{}\n", "─".repeat(50)));
            output.push_str(&format!(
                "Overall match:    {}\n",
                self.score_badge(m.overall_match)
            ));
            output.push_str(&format!(
                "Technical match:  {}\n",
                self.score_badge(m.technical_match)
            ));
            output.push_str(&format!(
                "Experience match: {}\n",
                self.score_badge(m.experience_match)
            ));
            output.push_str(&format!(
                "Education match:  {}\n",
                self.score_badge(m.education_match)
            ));
            output.push_str(&format!("Skills gap:       {} missing\n", m.skills_gap));

            if self.detailed {
                if !m.matched_skills.is_empty() {
                    output.push_str(&format!("\n{}\n", "Matched skills".bold().green()));
                    for name in &m.matched_skills {
                        output.push_str(&format!("  ✓ {}\n", name));
                    }
                }
                if !m.missing_skills.is_empty() {
                    output.push_str(&format!("\n{}\n", "Missing skills".bold().red()));
                    for name in &m.missing_skills {
                        output.push_str(&format!("  ✗ {}\n", name));
                    }
                }
            }
        }

        if self.detailed {
            output.push_str(&format!("\n{}\n", "Run Info".bold()));
            output.push_str(&format!("Strategy: {}\n", report.metadata.strategy));
            output.push_str(&format!(
                "Processing time: {}ms\n",
                report.metadata.processing_time_ms
            ));
        }

        Ok(output)
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        serde_json::to_string_pretty(report)
            .map_err(|e| JobLensError::OutputFormatting(format!("JSON serialization failed: {}", e)))
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}

pub struct MarkdownFormatter {
    pub detailed: bool,
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let analysis = &report.analysis;

        output.push_str("# Job Analysis\n\n");
        output.push_str(&format!("**Position:** {}\n\n", analysis.title));
        output.push_str(&format!("**Company:** {}\n\n", analysis.company));
        output.push_str(&format!("**Experience:** {}\n\n", analysis.experience_level));
        output.push_str(&format!(
            "**Education:** {}\n\n",
            analysis.education_requirements
        ));

        output.push_str("## Required Skills\n\n");
        if analysis.required_skills.is_empty() {
            output.push_str("_None detected._\n");
        } else {
            output.push_str("| Skill | Category | Level |\n");
            output.push_str("|-------|----------|-------|\n");
            for skill in &analysis.required_skills {
                output.push_str(&format!(
                    "| {} | {} | {:?} |\n",
                    skill.name,
                    ConsoleFormatter::category_label(skill.category),
                    skill.level
                ));
            }
        }
        output.push('\n');

        if let Some(m) = &analysis.resume_match {
            output.push_str("## Resume Match\n\n");
            output.push_str("| Dimension | Score |\n");
            output.push_str("|-----------|-------|\n");
            output.push_str(&format!("| Overall | {}% |\n", m.overall_match));
            output.push_str(&format!("| Technical | {}% |\n", m.technical_match));
            output.push_str(&format!("| Experience | {}% |\n", m.experience_match));
            output.push_str(&format!("| Education | {}% |\n", m.education_match));
            output.push_str(&format!("\n**Skills gap:** {} missing\n\n", m.skills_gap));

            if self.detailed {
                if !m.matched_skills.is_empty() {
                    output.push_str("### Matched Skills\n\n");
                    for name in &m.matched_skills {
                        output.push_str(&format!("- {}\n", name));
                    }
                    output.push('\n');
                }
                if !m.missing_skills.is_empty() {
                    output.push_str("### Missing Skills\n\n");
                    for name in &m.missing_skills {
                        output.push_str(&format!("- {}\n", name));
                    }
                    output.push('\n');
                }
            }
        }

        output.push_str("---\n\n");
        output.push_str(&format!(
            "_Generated {} by job-lens v{} ({} strategy, {}ms)_\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.version,
            report.metadata.strategy,
            report.metadata.processing_time_ms
        ));

        Ok(output)
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }
}

/// Dispatches to the formatter selected by the output configuration
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn formatter(
        format: OutputFormat,
        detailed: bool,
        use_colors: bool,
    ) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Console => Box::new(ConsoleFormatter::new(detailed, use_colors)),
            OutputFormat::Json => Box::new(JsonFormatter),
            OutputFormat::Markdown => Box::new(MarkdownFormatter { detailed }),
        }
    }

    pub fn generate(
        report: &AnalysisReport,
        format: OutputFormat,
        detailed: bool,
        use_colors: bool,
    ) -> Result<String> {
        Self::formatter(format, detailed, use_colors).format(report)
    }
}

pub async fn save_report_to_file(content: &str, path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, content).await?;
    Ok(())
}

pub fn suggest_filename(job_file: &str, format: OutputFormat) -> String {
    let stem = std::path::Path::new(job_file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("analysis");
    let extension = ReportGenerator::formatter(format, false, false).file_extension();
    format!(
        "{}_analysis_{}.{}",
        stem,
        chrono::Utc::now().format("%Y%m%d_%H%M%S"),
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PatternEngine;
    use crate::output::report::AnalysisReport;

    const JOB: &str = "Senior Full Stack Developer at TechCorp. We need 5+ years of \
        experience with React, Node.js and MongoDB. Bachelor's degree required.";

    fn sample_report(resume: Option<&str>) -> AnalysisReport {
        let engine = PatternEngine::new().unwrap();
        let analysis = engine.analyze(JOB, resume);
        AnalysisReport::new(analysis, "pattern", 3, "job.txt".to_string(), None)
    }

    #[test]
    fn test_console_format_without_resume() {
        let report = sample_report(None);
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format(&report).unwrap();

        assert!(output.contains("Senior Full Stack Developer"));
        assert!(output.contains("TechCorp"));
        assert!(output.contains("React"));
        assert!(!output.contains("Resume Match"));
    }

    #[test]
    fn test_console_detailed_lists_missing_skills() {
        let report = sample_report(Some("I have 3 years of experience with React."));
        let formatter = ConsoleFormatter::new(true, false);
        let output = formatter.format(&report).unwrap();

        assert!(output.contains("Resume Match"));
        assert!(output.contains("Missing skills"));
        assert!(output.contains("Node.js"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let report = sample_report(Some("5 years of experience with React and Node.js."));
        let output = JsonFormatter.format(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed.analysis.title, report.analysis.title);
        assert!(parsed.analysis.resume_match.is_some());
    }

    #[test]
    fn test_markdown_format_has_skill_table() {
        let report = sample_report(None);
        let formatter = MarkdownFormatter { detailed: false };
        let output = formatter.format(&report).unwrap();

        assert!(output.contains("# Job Analysis"));
        assert!(output.contains("| Skill | Category | Level |"));
        assert!(output.contains("| React |"));
    }

    #[test]
    fn test_suggest_filename_uses_job_stem_and_extension() {
        let name = suggest_filename("postings/backend_role.txt", OutputFormat::Json);
        assert!(name.starts_with("backend_role_analysis_"));
        assert!(name.ends_with(".json"));
    }
}
