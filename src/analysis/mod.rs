//! Job-description and resume analysis

pub mod engine;
pub mod extract;
pub mod matcher;
pub mod taxonomy;

pub use engine::{Analyzer, JobAnalysis, PatternEngine};
pub use matcher::ResumeMatchReport;
pub use taxonomy::{ExtractedSkill, SkillCategory, SkillLevel, SkillTaxonomy};
