//! Skill taxonomy: the static pattern table that drives skill extraction
//!
//! Adding a skill is a data edit in `SKILL_TABLE`, not a control-flow change.
//! The table is compiled into regexes once at construction and is read-only
//! afterwards, so a single taxonomy can be shared across concurrent callers.

use crate::error::{JobLensError, Result};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Tool,
    Domain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// A skill detected in a job description or resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
    pub required: bool,
}

/// A named skill with its detection patterns, compiled and ready to match
pub struct SkillPattern {
    pub name: &'static str,
    pub category: SkillCategory,
    pub default_level: SkillLevel,
    patterns: Vec<regex::Regex>,
}

impl SkillPattern {
    /// A skill is present if ANY of its patterns matches (existence, not count)
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

/// The full compiled skill table, iterated category-major
pub struct SkillTaxonomy {
    entries: Vec<SkillPattern>,
}

struct SkillSpec {
    name: &'static str,
    category: SkillCategory,
    level: SkillLevel,
    patterns: &'static [&'static str],
}

use SkillCategory::{Domain, Soft, Technical, Tool};
use SkillLevel::{Advanced, Beginner, Expert, Intermediate};

const SKILL_TABLE: &[SkillSpec] = &[
    // Technical
    SkillSpec { name: "JavaScript", category: Technical, level: Advanced, patterns: &[r"\bjavascript\b", r"\bes6\b", r"\becmascript\b"] },
    SkillSpec { name: "TypeScript", category: Technical, level: Advanced, patterns: &[r"\btypescript\b"] },
    SkillSpec { name: "Python", category: Technical, level: Advanced, patterns: &[r"\bpython\b", r"\bdjango\b", r"\bflask\b"] },
    SkillSpec { name: "Java", category: Technical, level: Advanced, patterns: &[r"\bjava\b", r"\bspring\s*boot\b"] },
    SkillSpec { name: "C#", category: Technical, level: Advanced, patterns: &[r"c#", r"\bcsharp\b", r"\.net\b", r"\bdotnet\b"] },
    SkillSpec { name: "C++", category: Technical, level: Expert, patterns: &[r"c\+\+"] },
    SkillSpec { name: "Go", category: Technical, level: Advanced, patterns: &[r"\bgolang\b", r"\bgo\s+(?:developer|engineer|programming)\b"] },
    SkillSpec { name: "Rust", category: Technical, level: Expert, patterns: &[r"\brust\b"] },
    SkillSpec { name: "React", category: Technical, level: Advanced, patterns: &[r"\breact(?:\.?js)?\b", r"\bredux\b"] },
    SkillSpec { name: "Angular", category: Technical, level: Advanced, patterns: &[r"\bangular(?:js)?\b"] },
    SkillSpec { name: "Vue.js", category: Technical, level: Intermediate, patterns: &[r"\bvue(?:\.?js)?\b", r"\bnuxt\b"] },
    SkillSpec { name: "Node.js", category: Technical, level: Advanced, patterns: &[r"\bnode(?:\.?js)?\b", r"\bexpress(?:\.js)?\b"] },
    SkillSpec { name: "HTML/CSS", category: Technical, level: Intermediate, patterns: &[r"\bhtml5?\b", r"\bcss3?\b", r"\bsass\b", r"\btailwind\b"] },
    SkillSpec { name: "SQL", category: Technical, level: Advanced, patterns: &[r"\bsql\b", r"\bpostgres(?:ql)?\b", r"\bmysql\b", r"\bsqlite\b"] },
    SkillSpec { name: "NoSQL", category: Technical, level: Intermediate, patterns: &[r"\bnosql\b", r"\bmongo(?:db)?\b", r"\bdynamodb\b", r"\bcassandra\b", r"\bredis\b"] },
    SkillSpec { name: "GraphQL", category: Technical, level: Intermediate, patterns: &[r"\bgraphql\b", r"\bapollo\b"] },
    SkillSpec { name: "REST APIs", category: Technical, level: Advanced, patterns: &[r"\brest(?:ful)?\s*api", r"\brest\b", r"\bweb\s+services\b"] },
    SkillSpec { name: "Machine Learning", category: Technical, level: Expert, patterns: &[r"machine\s+learning", r"deep\s+learning", r"\btensorflow\b", r"\bpytorch\b", r"\bscikit-learn\b"] },
    SkillSpec { name: "Mobile Development", category: Technical, level: Advanced, patterns: &[r"\bios\b", r"\bandroid\b", r"\bswift\b", r"\bkotlin\b", r"react\s+native", r"\bflutter\b"] },
    // Soft
    SkillSpec { name: "Communication", category: Soft, level: Intermediate, patterns: &[r"communicat(?:ion|e|or)", r"\bpresentation\b"] },
    SkillSpec { name: "Leadership", category: Soft, level: Advanced, patterns: &[r"\bleadership\b", r"\bmentor(?:ing|ship)?\b", r"lead\s+a\s+team"] },
    SkillSpec { name: "Teamwork", category: Soft, level: Intermediate, patterns: &[r"\bteamwork\b", r"team\s+player", r"collaborat(?:ion|ive|e)"] },
    SkillSpec { name: "Problem Solving", category: Soft, level: Advanced, patterns: &[r"problem[\s-]solving", r"\banalytical\b", r"critical\s+thinking"] },
    SkillSpec { name: "Time Management", category: Soft, level: Intermediate, patterns: &[r"time\s+management", r"prioriti[sz](?:e|ation)", r"\bdeadlines?\b"] },
    SkillSpec { name: "Adaptability", category: Soft, level: Intermediate, patterns: &[r"\badaptab(?:le|ility)\b", r"fast[\s-]paced", r"\bflexib(?:le|ility)\b"] },
    // Tools
    SkillSpec { name: "Git", category: Tool, level: Intermediate, patterns: &[r"\bgit\b", r"\bgithub\b", r"\bgitlab\b", r"version\s+control"] },
    SkillSpec { name: "Docker", category: Tool, level: Intermediate, patterns: &[r"\bdocker\b", r"\bcontainer(?:s|ization)?\b"] },
    SkillSpec { name: "Kubernetes", category: Tool, level: Advanced, patterns: &[r"\bkubernetes\b", r"\bk8s\b", r"\bhelm\b"] },
    SkillSpec { name: "AWS", category: Tool, level: Advanced, patterns: &[r"\baws\b", r"amazon\s+web\s+services", r"\bec2\b", r"\bs3\b", r"\blambda\b"] },
    SkillSpec { name: "Azure", category: Tool, level: Advanced, patterns: &[r"\bazure\b"] },
    SkillSpec { name: "Google Cloud", category: Tool, level: Advanced, patterns: &[r"\bgcp\b", r"google\s+cloud"] },
    SkillSpec { name: "CI/CD", category: Tool, level: Intermediate, patterns: &[r"ci/cd", r"\bcicd\b", r"continuous\s+(?:integration|delivery|deployment)", r"\bjenkins\b", r"github\s+actions"] },
    SkillSpec { name: "Terraform", category: Tool, level: Advanced, patterns: &[r"\bterraform\b", r"infrastructure\s+as\s+code"] },
    SkillSpec { name: "Jira", category: Tool, level: Beginner, patterns: &[r"\bjira\b", r"\bconfluence\b"] },
    SkillSpec { name: "Linux", category: Tool, level: Intermediate, patterns: &[r"\blinux\b", r"\bunix\b", r"\bbash\b", r"shell\s+scripting"] },
    // Domain
    SkillSpec { name: "Agile", category: Domain, level: Intermediate, patterns: &[r"\bagile\b", r"\bscrum\b", r"\bkanban\b", r"\bsprints?\b"] },
    SkillSpec { name: "DevOps", category: Domain, level: Advanced, patterns: &[r"\bdevops\b", r"site\s+reliability", r"\bsre\b"] },
    SkillSpec { name: "Security", category: Domain, level: Advanced, patterns: &[r"\bsecurity\b", r"\bowasp\b", r"penetration\s+testing", r"\bencryption\b"] },
    SkillSpec { name: "Testing", category: Domain, level: Intermediate, patterns: &[r"unit\s+test(?:s|ing)?", r"integration\s+test(?:s|ing)?", r"\btdd\b", r"\bjest\b", r"\bpytest\b", r"\bcypress\b", r"quality\s+assurance"] },
    SkillSpec { name: "Microservices", category: Domain, level: Advanced, patterns: &[r"\bmicroservices?\b", r"distributed\s+systems?", r"event[\s-]driven"] },
    SkillSpec { name: "Data Analysis", category: Domain, level: Intermediate, patterns: &[r"data\s+analysis", r"\bpandas\b", r"\bnumpy\b", r"\btableau\b", r"power\s*bi\b"] },
    SkillSpec { name: "E-commerce", category: Domain, level: Intermediate, patterns: &[r"e-?commerce", r"\bshopify\b", r"payment\s+processing"] },
    SkillSpec { name: "Fintech", category: Domain, level: Advanced, patterns: &[r"\bfintech\b", r"financial\s+services", r"\bbanking\b", r"\btrading\b"] },
    SkillSpec { name: "Healthcare", category: Domain, level: Advanced, patterns: &[r"\bhealthcare\b", r"\bhipaa\b", r"\bclinical\b", r"\bmedical\b"] },
    SkillSpec { name: "UX/UI Design", category: Domain, level: Intermediate, patterns: &[r"\bux\b", r"\bui\s+design\b", r"\bfigma\b", r"user\s+experience", r"\bwireframes?\b"] },
];

impl SkillTaxonomy {
    /// Compile the static table into a ready-to-match taxonomy
    pub fn new() -> Result<Self> {
        let mut entries = Vec::with_capacity(SKILL_TABLE.len());

        for spec in SKILL_TABLE {
            let mut patterns = Vec::with_capacity(spec.patterns.len());
            for pattern in spec.patterns {
                let compiled = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        JobLensError::Configuration(format!(
                            "Invalid pattern for skill '{}': {}",
                            spec.name, e
                        ))
                    })?;
                patterns.push(compiled);
            }

            entries.push(SkillPattern {
                name: spec.name,
                category: spec.category,
                default_level: spec.level,
                patterns,
            });
        }

        Ok(Self { entries })
    }

    /// Scan a job description and return every skill the table detects,
    /// in table order, each flagged as required
    pub fn extract(&self, text: &str) -> Vec<ExtractedSkill> {
        self.entries
            .iter()
            .filter(|entry| entry.matches(text))
            .map(|entry| ExtractedSkill {
                name: entry.name.to_string(),
                category: entry.category,
                level: entry.default_level,
                required: true,
            })
            .collect()
    }

    /// Look up a table entry by canonical skill name
    pub fn get(&self, name: &str) -> Option<&SkillPattern> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn skill_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_taxonomy_builds() {
        let taxonomy = SkillTaxonomy::new().unwrap();
        assert!(taxonomy.skill_count() > 30);
    }

    #[test]
    fn test_skill_names_are_unique() {
        let names: HashSet<&str> = SKILL_TABLE.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SKILL_TABLE.len());
    }

    #[test]
    fn test_extracts_common_stack() {
        let taxonomy = SkillTaxonomy::new().unwrap();
        let text = "we need react, node.js and mongodb experience";
        let skills = taxonomy.extract(text);

        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"React"));
        assert!(names.contains(&"Node.js"));
        assert!(names.contains(&"NoSQL"));
        assert!(skills.iter().all(|s| s.required));
    }

    #[test]
    fn test_java_does_not_match_javascript() {
        let taxonomy = SkillTaxonomy::new().unwrap();
        let skills = taxonomy.extract("strong javascript background");

        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"JavaScript"));
        assert!(!names.contains(&"Java"));
    }

    #[test]
    fn test_no_duplicates_when_multiple_patterns_match() {
        let taxonomy = SkillTaxonomy::new().unwrap();
        let skills = taxonomy.extract("postgresql and mysql and sql server");

        let sql_count = skills.iter().filter(|s| s.name == "SQL").count();
        assert_eq!(sql_count, 1);
    }

    #[test]
    fn test_table_order_is_category_major() {
        let taxonomy = SkillTaxonomy::new().unwrap();
        let skills = taxonomy.extract("python, leadership, docker, agile");

        let categories: Vec<SkillCategory> = skills.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                SkillCategory::Technical,
                SkillCategory::Soft,
                SkillCategory::Tool,
                SkillCategory::Domain
            ]
        );
    }

    #[test]
    fn test_lookup_by_name() {
        let taxonomy = SkillTaxonomy::new().unwrap();
        let react = taxonomy.get("React").unwrap();
        assert!(react.matches("built dashboards in react"));
        assert!(!react.matches("angular only"));
        assert!(taxonomy.get("COBOL").is_none());
    }
}
