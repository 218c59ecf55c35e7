//! Resume-to-requirements matching and scoring

use crate::analysis::extract::FieldExtractors;
use crate::analysis::taxonomy::{ExtractedSkill, SkillCategory, SkillTaxonomy};
use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How well a resume covers the requirements extracted from a job
/// description. All percentages are integers in 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeMatchReport {
    pub overall_match: u8,
    pub skills_gap: usize,
    pub technical_match: u8,
    pub experience_match: u8,
    pub education_match: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

pub struct MatchScorer {
    degree_keywords: Regex,
}

impl MatchScorer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            degree_keywords: Regex::new(
                r"bachelor|master|ph\.?d|doctorate|\bb\.?s\.?\b|\bm\.?s\.?\b|\bmba\b|degree|diploma",
            )
            .map_err(|e| {
                crate::error::JobLensError::Configuration(format!("Invalid degree pattern: {}", e))
            })?,
        })
    }

    /// Score a resume against the required skills and experience level
    /// extracted from a job description.
    ///
    /// Every required skill lands in exactly one of `matched_skills` or
    /// `missing_skills`, in requirement order.
    pub fn score(
        &self,
        taxonomy: &SkillTaxonomy,
        extractors: &FieldExtractors,
        required_skills: &[ExtractedSkill],
        resume_text: &str,
        experience_level: &str,
    ) -> ResumeMatchReport {
        let resume_lower = resume_text.to_lowercase();

        let mut matched_skills = Vec::new();
        let mut missing_skills = Vec::new();
        let mut technical_total = 0usize;
        let mut technical_matched = 0usize;

        for skill in required_skills {
            let is_technical = skill.category == SkillCategory::Technical;
            if is_technical {
                technical_total += 1;
            }

            let found = taxonomy
                .get(&skill.name)
                .map(|entry| entry.matches(&resume_lower))
                .unwrap_or(false);

            if found {
                if is_technical {
                    technical_matched += 1;
                }
                matched_skills.push(skill.name.clone());
            } else {
                missing_skills.push(skill.name.clone());
            }
        }

        let overall_match = percentage(matched_skills.len(), required_skills.len());
        let technical_match = percentage(technical_matched, technical_total);

        let experience_match = match extractors.required_years(experience_level) {
            Some(required) => {
                let resume_years = extractors.resume_years(&resume_lower);
                let ratio = (100.0 * f64::from(resume_years) / f64::from(required)).round();
                ratio.min(100.0) as u8
            }
            // No numeric requirement counts as fully satisfied
            None => 100,
        };

        // Binary credit: a degree keyword confirms, its absence is treated
        // as "cannot confirm", not failure
        let education_match = if self.degree_keywords.is_match(&resume_lower) {
            100
        } else {
            50
        };

        ResumeMatchReport {
            overall_match,
            skills_gap: missing_skills.len(),
            technical_match,
            experience_match,
            education_match,
            matched_skills,
            missing_skills,
        }
    }
}

fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        0
    } else {
        (100.0 * part as f64 / total as f64).round() as u8
    }
}
