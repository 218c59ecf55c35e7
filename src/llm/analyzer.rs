//! LLM analysis strategy: same contract as the pattern engine
//!
//! The delegation boundary absorbs every failure mode (network error,
//! non-success status, missing content, JSON parse error, schema mismatch)
//! by returning `Err`, which the caller converts into a pattern-matching
//! fallback. Nothing here panics on a malformed model reply.

use crate::analysis::engine::JobAnalysis;
use crate::analysis::extract::{DEFAULT_COMPANY, DEFAULT_TITLE, NOT_SPECIFIED};
use crate::error::{JobLensError, Result};
use crate::llm::client::ChatClient;
use crate::llm::prompts::{PromptParams, PromptTemplates, SYSTEM_PROMPT};

pub struct LlmAnalyzer {
    client: ChatClient,
    templates: PromptTemplates,
}

impl LlmAnalyzer {
    pub fn new(client: ChatClient) -> Self {
        Self {
            client,
            templates: PromptTemplates::default(),
        }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// One shot: render the prompt, call the endpoint, validate the reply
    pub async fn analyze(&self, job_description: &str, resume: Option<&str>) -> Result<JobAnalysis> {
        let params = PromptParams {
            job_content: job_description.to_string(),
            resume_content: resume.map(str::to_string),
        };

        let prompt = self.templates.render_analysis(&params);
        let content = self.client.complete(SYSTEM_PROMPT, &prompt).await?;

        parse_analysis(&content, resume.is_some())
    }
}

/// Parse and structurally validate a model reply into a `JobAnalysis`
pub(crate) fn parse_analysis(content: &str, resume_supplied: bool) -> Result<JobAnalysis> {
    let mut analysis: JobAnalysis = serde_json::from_str(strip_code_fences(content))?;

    if analysis.title.trim().is_empty() {
        analysis.title = DEFAULT_TITLE.to_string();
    }
    if analysis.company.trim().is_empty() {
        analysis.company = DEFAULT_COMPANY.to_string();
    }
    if analysis.experience_level.trim().is_empty() {
        analysis.experience_level = NOT_SPECIFIED.to_string();
    }
    if analysis.education_requirements.trim().is_empty() {
        analysis.education_requirements = NOT_SPECIFIED.to_string();
    }

    if !resume_supplied {
        // No resume was sent, so a hallucinated match report is dropped
        analysis.resume_match = None;
        return Ok(analysis);
    }

    let report = analysis
        .resume_match
        .as_ref()
        .ok_or_else(|| JobLensError::LlmResponse("reply is missing resume_match".to_string()))?;

    for (field, value) in [
        ("overall_match", report.overall_match),
        ("technical_match", report.technical_match),
        ("experience_match", report.experience_match),
        ("education_match", report.education_match),
    ] {
        if value > 100 {
            return Err(JobLensError::LlmResponse(format!(
                "{} is out of range: {}",
                field, value
            )));
        }
    }

    if report.matched_skills.len() + report.missing_skills.len() != analysis.required_skills.len() {
        return Err(JobLensError::LlmResponse(
            "matched and missing skills do not partition the required skills".to_string(),
        ));
    }

    if report.skills_gap != report.missing_skills.len() {
        return Err(JobLensError::LlmResponse(
            "skills_gap disagrees with missing_skills".to_string(),
        ));
    }

    Ok(analysis)
}

/// Models sometimes wrap JSON in markdown fences despite instructions
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches(['\r', '\n'])
        .trim_end()
        .trim_end_matches("```")
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_REPLY: &str = r#"{
        "title": "Senior Rust Developer",
        "company": "Initech",
        "required_skills": [
            {"name": "Rust", "category": "technical", "level": "expert", "required": true},
            {"name": "Docker", "category": "tool", "level": "intermediate", "required": true}
        ],
        "experience_level": "5+ years",
        "education_requirements": "Bachelor's degree",
        "resume_match": {
            "overall_match": 50,
            "skills_gap": 1,
            "technical_match": 100,
            "experience_match": 80,
            "education_match": 100,
            "matched_skills": ["Rust"],
            "missing_skills": ["Docker"]
        }
    }"#;

    #[test]
    fn test_parse_valid_reply() {
        let analysis = parse_analysis(VALID_REPLY, true).unwrap();
        assert_eq!(analysis.title, "Senior Rust Developer");
        assert_eq!(analysis.resume_match.unwrap().overall_match, 50);
    }

    #[test]
    fn test_parse_fenced_reply() {
        let fenced = format!("```json\n{}\n```", VALID_REPLY);
        let analysis = parse_analysis(&fenced, true).unwrap();
        assert_eq!(analysis.company, "Initech");
    }

    #[test]
    fn test_unsolicited_resume_match_is_dropped() {
        let analysis = parse_analysis(VALID_REPLY, false).unwrap();
        assert!(analysis.resume_match.is_none());
    }

    #[test]
    fn test_missing_resume_match_is_schema_mismatch() {
        let reply = r#"{
            "title": "Dev", "company": "Co", "required_skills": [],
            "experience_level": "Not specified",
            "education_requirements": "Not specified"
        }"#;
        assert!(parse_analysis(reply, true).is_err());
    }

    #[test]
    fn test_bad_partition_is_schema_mismatch() {
        let reply = VALID_REPLY.replace(r#""missing_skills": ["Docker"]"#, r#""missing_skills": []"#);
        assert!(parse_analysis(&reply, true).is_err());
    }

    #[test]
    fn test_empty_fields_fall_back_to_defaults() {
        let reply = r#"{
            "title": "", "company": "  ", "required_skills": [],
            "experience_level": "", "education_requirements": ""
        }"#;
        let analysis = parse_analysis(reply, false).unwrap();
        assert_eq!(analysis.title, DEFAULT_TITLE);
        assert_eq!(analysis.company, DEFAULT_COMPANY);
        assert_eq!(analysis.experience_level, NOT_SPECIFIED);
        assert_eq!(analysis.education_requirements, NOT_SPECIFIED);
    }

    #[test]
    fn test_garbage_reply_is_an_error() {
        assert!(parse_analysis("the posting looks great!", false).is_err());
    }

    #[test]
    fn test_out_of_range_percentage_rejected() {
        let reply = VALID_REPLY.replace(r#""overall_match": 50"#, r#""overall_match": 250"#);
        assert!(parse_analysis(&reply, true).is_err());
    }
}
