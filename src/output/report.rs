//! Analysis report wrapper with run metadata

use crate::analysis::JobAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis: JobAnalysis,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    /// Which analysis strategy produced the result
    pub strategy: String,
    pub version: String,
    pub job_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_file: Option<String>,
}

impl AnalysisReport {
    pub fn new(
        analysis: JobAnalysis,
        strategy: &str,
        processing_time_ms: u64,
        job_file: String,
        resume_file: Option<String>,
    ) -> Self {
        Self {
            analysis,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                processing_time_ms,
                strategy: strategy.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                job_file,
                resume_file,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PatternEngine;

    #[test]
    fn test_report_carries_metadata() {
        let engine = PatternEngine::new().unwrap();
        let analysis = engine.analyze("Senior Rust Engineer at Acme", None);
        let report = AnalysisReport::new(
            analysis,
            "pattern",
            12,
            "job.txt".to_string(),
            None,
        );

        assert_eq!(report.metadata.strategy, "pattern");
        assert_eq!(report.metadata.processing_time_ms, 12);
        assert_eq!(report.metadata.version, env!("CARGO_PKG_VERSION"));
        assert!(report.metadata.resume_file.is_none());
    }
}
