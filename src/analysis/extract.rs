//! Field extractors for job-description free text
//!
//! Every extractor is a fixed priority-ordered regex list: the first pattern
//! that matches wins, and a miss resolves to a documented default instead of
//! an error. All patterns are compiled once at construction.

use crate::error::{JobLensError, Result};
use regex::Regex;

pub const DEFAULT_TITLE: &str = "Position";
pub const DEFAULT_COMPANY: &str = "Company";
pub const NOT_SPECIFIED: &str = "Not specified";

const ROLE_WORDS: &str = "developer|engineer|manager|analyst|designer|architect|consultant";

pub struct FieldExtractors {
    title_patterns: Vec<Regex>,
    company_patterns: Vec<Regex>,
    experience_plus: Regex,
    experience_range: Regex,
    experience_bare: Regex,
    experience_keywords: Vec<(Regex, &'static str)>,
    education_keywords: Vec<(Regex, &'static str)>,
    education_degree_in: Regex,
    resume_years_patterns: Vec<Regex>,
    leading_number: Regex,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| JobLensError::Configuration(format!("Invalid extractor pattern: {}", e)))
}

impl FieldExtractors {
    pub fn new() -> Result<Self> {
        let title_patterns = vec![
            compile(&format!(r"senior\s+(?:[a-z0-9+#./-]+\s+){{0,4}}?(?:{})", ROLE_WORDS))?,
            compile(&format!(r"\b(?:[a-z0-9+#./-]+\s+){{1,4}}?(?:{})\b", ROLE_WORDS))?,
            compile(r"\blead\s+[a-z0-9+#./-]+(?:\s+[a-z0-9+#./-]+){0,3}")?,
            compile(r"\bprincipal\s+[a-z0-9+#./-]+(?:\s+[a-z0-9+#./-]+){0,3}")?,
            compile(r"\bstaff\s+[a-z0-9+#./-]+(?:\s+[a-z0-9+#./-]+){0,3}")?,
        ];

        let company_patterns = vec![
            compile(r"\b(?i:at|for|join)\s+([A-Z][A-Za-z0-9&'-]*(?:[ \t][A-Z][A-Za-z0-9&'-]*)*)")?,
            compile(r"(?i:company|organization)\s*:\s*([A-Z][A-Za-z0-9&'-]*(?:[ \t][A-Z][A-Za-z0-9&'-]*)*)")?,
        ];

        let experience_keywords = vec![
            (compile(r"entry[\s-]level|\bjunior\b|\b0-2\b")?, "0-2 years"),
            (compile(r"mid[\s-]level|\bintermediate\b|\b3-5\b")?, "3-5 years"),
            (compile(r"\bsenior\b|\bsr\.|\blead\b|\b5\+")?, "5+ years"),
            (compile(r"\bprincipal\b|\bstaff\b|\barchitect\b|\b8\+")?, "8+ years"),
        ];

        let education_keywords = vec![
            (compile(r"bachelor'?s?(?:\s+degree)?|\bb\.?s\.?\b|\bbsc\b")?, "Bachelor's degree"),
            (compile(r"master'?s?(?:\s+degree)?|\bm\.?s\.?\b|\bmsc\b")?, "Master's degree"),
            (compile(r"\bph\.?d\.?\b|\bdoctorate\b")?, "PhD or Doctorate"),
        ];

        Ok(Self {
            title_patterns,
            company_patterns,
            experience_plus: compile(r"(\d+)\s*\+\s*years?")?,
            experience_range: compile(r"(\d+)\s*(?:-|–|to)\s*(\d+)\s*years?")?,
            experience_bare: compile(r"(\d+)\s*years?")?,
            experience_keywords,
            education_keywords,
            education_degree_in: compile(r"degree\s+in\s+([a-z]+(?:\s+[a-z]+){0,3})")?,
            resume_years_patterns: vec![
                compile(r"(\d+)\s*\+?\s*years?[^.\n]*?experience")?,
                compile(r"experience\s*:?\s*(\d+)")?,
            ],
            leading_number: compile(r"(\d+)")?,
        })
    }

    /// Extract a job title from the lower-cased description, title-cased
    /// verbatim; defaults to "Position"
    pub fn title(&self, lower_text: &str) -> String {
        for pattern in &self.title_patterns {
            if let Some(found) = pattern.find(lower_text) {
                return title_case(found.as_str());
            }
        }
        DEFAULT_TITLE.to_string()
    }

    /// Extract a company name from the original-case description; capture
    /// runs over capitalized words and stops at newline, period, or comma
    pub fn company(&self, text: &str) -> String {
        for pattern in &self.company_patterns {
            if let Some(caps) = pattern.captures(text) {
                if let Some(name) = caps.get(1) {
                    return name.as_str().trim().to_string();
                }
            }
        }
        DEFAULT_COMPANY.to_string()
    }

    /// Extract the experience-level requirement from the lower-cased
    /// description. The `N+` and `N-M` forms are tried before a bare
    /// `N years` so ranges are never truncated by the bare-number rule.
    pub fn experience_level(&self, lower_text: &str) -> String {
        if let Some(caps) = self.experience_plus.captures(lower_text) {
            return format!("{}+ years", &caps[1]);
        }
        if let Some(caps) = self.experience_range.captures(lower_text) {
            return format!("{}-{} years", &caps[1], &caps[2]);
        }
        if let Some(caps) = self.experience_bare.captures(lower_text) {
            return format!("{} years", &caps[1]);
        }
        for (pattern, level) in &self.experience_keywords {
            if pattern.is_match(lower_text) {
                return level.to_string();
            }
        }
        NOT_SPECIFIED.to_string()
    }

    /// Extract the education requirement from the lower-cased description
    pub fn education(&self, lower_text: &str) -> String {
        for (pattern, requirement) in &self.education_keywords {
            if pattern.is_match(lower_text) {
                return requirement.to_string();
            }
        }
        if let Some(caps) = self.education_degree_in.captures(lower_text) {
            return format!("Degree in {}", caps[1].trim());
        }
        if lower_text.contains("high school") || lower_text.contains("diploma") {
            return "High school diploma".to_string();
        }
        NOT_SPECIFIED.to_string()
    }

    /// Parse years of experience claimed in a lower-cased resume, default 0
    pub fn resume_years(&self, lower_text: &str) -> u32 {
        for pattern in &self.resume_years_patterns {
            if let Some(caps) = pattern.captures(lower_text) {
                if let Ok(years) = caps[1].parse() {
                    return years;
                }
            }
        }
        0
    }

    /// Parse the required years from an extracted experience level.
    ///
    /// Only the leading integer counts, so a "3-5 years" requirement uses
    /// the lower bound. A zero or absent number means no numeric
    /// requirement.
    pub fn required_years(&self, experience_level: &str) -> Option<u32> {
        self.leading_number
            .captures(experience_level)
            .and_then(|caps| caps[1].parse().ok())
            .filter(|&years: &u32| years > 0)
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
