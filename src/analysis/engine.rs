//! The pattern-matching analysis engine and the strategy shell around it
//!
//! `PatternEngine::analyze` is a pure function of its string inputs: no I/O,
//! no randomness, never panics on malformed text. A miss at any extraction
//! step degrades to a documented default rather than failing, so callers
//! always get a best-effort result.

use crate::analysis::extract::FieldExtractors;
use crate::analysis::matcher::{MatchScorer, ResumeMatchReport};
use crate::analysis::taxonomy::{ExtractedSkill, SkillTaxonomy};
use crate::error::Result;
use crate::llm::analyzer::LlmAnalyzer;
use serde::{Deserialize, Serialize};

/// The engine's result: best-effort fields with placeholder defaults, plus
/// a resume match report when a resume was supplied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub title: String,
    pub company: String,
    pub required_skills: Vec<ExtractedSkill>,
    pub experience_level: String,
    pub education_requirements: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_match: Option<ResumeMatchReport>,
}

/// Deterministic regex-based analysis path
pub struct PatternEngine {
    taxonomy: SkillTaxonomy,
    extractors: FieldExtractors,
    scorer: MatchScorer,
}

impl PatternEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            taxonomy: SkillTaxonomy::new()?,
            extractors: FieldExtractors::new()?,
            scorer: MatchScorer::new()?,
        })
    }

    /// Analyze a job description and, optionally, match a resume against it
    pub fn analyze(&self, job_description: &str, resume: Option<&str>) -> JobAnalysis {
        let lower = job_description.to_lowercase();

        let title = self.extractors.title(&lower);
        let company = self.extractors.company(job_description);
        let required_skills = self.taxonomy.extract(&lower);
        let experience_level = self.extractors.experience_level(&lower);
        let education_requirements = self.extractors.education(&lower);

        let resume_match = resume.map(|resume_text| {
            self.scorer.score(
                &self.taxonomy,
                &self.extractors,
                &required_skills,
                resume_text,
                &experience_level,
            )
        });

        JobAnalysis {
            title,
            company,
            required_skills,
            experience_level,
            education_requirements,
            resume_match,
        }
    }

    pub fn skill_count(&self) -> usize {
        self.taxonomy.skill_count()
    }
}

/// Strategy shell: delegates to the LLM when one is configured and falls
/// back to the pattern engine on any delegation failure
pub struct Analyzer {
    engine: PatternEngine,
    llm: Option<LlmAnalyzer>,
}

impl Analyzer {
    pub fn new(llm: Option<LlmAnalyzer>) -> Result<Self> {
        Ok(Self {
            engine: PatternEngine::new()?,
            llm,
        })
    }

    /// Analyze with the configured strategy. LLM failures (network,
    /// non-success status, malformed payload) are logged and absorbed by
    /// the pattern fallback, never propagated.
    pub async fn analyze(&self, job_description: &str, resume: Option<&str>) -> JobAnalysis {
        if let Some(llm) = &self.llm {
            match llm.analyze(job_description, resume).await {
                Ok(analysis) => {
                    log::info!("LLM analysis completed with model {}", llm.model());
                    return analysis;
                }
                Err(e) => {
                    log::warn!("LLM analysis failed, using pattern matching: {}", e);
                }
            }
        }
        self.engine.analyze(job_description, resume)
    }

    pub fn strategy_name(&self) -> &'static str {
        if self.llm.is_some() {
            "llm+pattern-fallback"
        } else {
            "pattern"
        }
    }

    pub fn pattern_engine(&self) -> &PatternEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extract::{DEFAULT_COMPANY, DEFAULT_TITLE, NOT_SPECIFIED};

    const TECHCORP_JOB: &str = "Senior Full Stack Developer at TechCorp. \
        We need 5+ years of experience with React, Node.js and MongoDB. \
        Bachelor's degree required.";

    fn engine() -> PatternEngine {
        PatternEngine::new().unwrap()
    }

    #[test]
    fn test_defaults_on_cue_free_text() {
        let analysis = engine().analyze("we make excellent sandwiches downtown", None);

        assert_eq!(analysis.title, DEFAULT_TITLE);
        assert_eq!(analysis.company, DEFAULT_COMPANY);
        assert_eq!(analysis.experience_level, NOT_SPECIFIED);
        assert_eq!(analysis.education_requirements, NOT_SPECIFIED);
        assert!(analysis.required_skills.is_empty());
        assert!(analysis.resume_match.is_none());
    }

    #[test]
    fn test_techcorp_scenario_without_resume() {
        let analysis = engine().analyze(TECHCORP_JOB, None);

        assert!(analysis.title.contains("Full Stack Developer"));
        assert_eq!(analysis.company, "TechCorp");
        assert_eq!(analysis.experience_level, "5+ years");
        assert_eq!(analysis.education_requirements, "Bachelor's degree");

        let names: Vec<&str> = analysis
            .required_skills
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert!(names.contains(&"React"));
        assert!(names.contains(&"Node.js"));
        assert!(names.contains(&"NoSQL"));
        assert!(analysis.required_skills.iter().all(|s| s.required));
    }

    #[test]
    fn test_techcorp_scenario_with_partial_resume() {
        let resume = "Frontend developer, 3 years experience building apps with React.";
        let analysis = engine().analyze(TECHCORP_JOB, Some(resume));

        let report = analysis.resume_match.unwrap();
        assert!(report.matched_skills.contains(&"React".to_string()));
        assert!(report.missing_skills.contains(&"Node.js".to_string()));
        assert!(report.missing_skills.contains(&"NoSQL".to_string()));
        assert_eq!(report.experience_match, 60);
    }

    #[test]
    fn test_empty_resume_still_produces_report() {
        let analysis = engine().analyze("we make sandwiches", Some(""));

        let report = analysis.resume_match.unwrap();
        assert_eq!(report.overall_match, 0);
        assert_eq!(report.skills_gap, 0);
        assert!(report.matched_skills.is_empty());
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let engine = engine();
        let resume = "React developer, 4 years experience";

        let first = engine.analyze(TECHCORP_JOB, Some(resume));
        let second = engine.analyze(TECHCORP_JOB, Some(resume));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_analyzer_without_llm_uses_pattern_path() {
        let analyzer = Analyzer::new(None).unwrap();
        assert_eq!(analyzer.strategy_name(), "pattern");

        let analysis = analyzer.analyze(TECHCORP_JOB, None).await;
        assert_eq!(analysis.company, "TechCorp");
    }
}
