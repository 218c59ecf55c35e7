//! Prompt templates for the LLM analysis strategy

/// Fixed system prompt: constrains the model to structured JSON output
pub const SYSTEM_PROMPT: &str = "You are a precise job-posting analyst. \
Reply with a single JSON object and nothing else. \
Never invent information that is not present in the provided text.";

/// Parameters for prompt template substitution
#[derive(Debug, Clone)]
pub struct PromptParams {
    pub job_content: String,
    pub resume_content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    analysis: String,
    resume_section: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            analysis: ANALYSIS_TEMPLATE.to_string(),
            resume_section: RESUME_SECTION_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Render the combined analysis prompt. The resume block and the
    /// `resume_match` instruction appear only when a resume was supplied.
    pub fn render_analysis(&self, params: &PromptParams) -> String {
        let resume_block = match &params.resume_content {
            Some(resume) => self.resume_section.replace("{resume}", resume),
            None => String::new(),
        };

        self.analysis
            .replace("{job}", &params.job_content)
            .replace("{resume_block}", &resume_block)
    }
}

const ANALYSIS_TEMPLATE: &str = r#"Analyze the job posting below and respond with JSON matching this schema:

{
  "title": "job title, or \"Position\" if unclear",
  "company": "company name, or \"Company\" if unclear",
  "required_skills": [
    {
      "name": "canonical skill name",
      "category": "technical | soft | tool | domain",
      "level": "beginner | intermediate | advanced | expert",
      "required": true
    }
  ],
  "experience_level": "e.g. \"5+ years\", or \"Not specified\"",
  "education_requirements": "e.g. \"Bachelor's degree\", or \"Not specified\""
}

<JOB POSTING>
{job}
</JOB POSTING>
{resume_block}"#;

const RESUME_SECTION_TEMPLATE: &str = r#"
Also compare the resume below against the extracted requirements and include a "resume_match" object with integer percentages:
{
  "overall_match": 0-100,
  "skills_gap": <count of required skills missing from the resume>,
  "technical_match": 0-100,
  "experience_match": 0-100,
  "education_match": 50 or 100,
  "matched_skills": ["..."],
  "missing_skills": ["..."]
}
Every required skill must appear in exactly one of matched_skills or missing_skills.

<RESUME>
{resume}
</RESUME>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_resume() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_analysis(&PromptParams {
            job_content: "Rust developer at Initech".to_string(),
            resume_content: None,
        });

        assert!(prompt.contains("Rust developer at Initech"));
        assert!(!prompt.contains("<RESUME>"));
    }

    #[test]
    fn test_render_with_resume() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_analysis(&PromptParams {
            job_content: "Rust developer".to_string(),
            resume_content: Some("Seasoned Rustacean".to_string()),
        });

        assert!(prompt.contains("<RESUME>"));
        assert!(prompt.contains("Seasoned Rustacean"));
        assert!(prompt.contains("resume_match"));
    }
}
