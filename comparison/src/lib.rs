#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

//! Alignment and scoring of two statement sets.
//!
//! The rule-based RUPP statements are the reference side; the generated
//! candidates are aligned against them, bucketed, and scored. The module is
//! pure: no I/O, no clock, deterministic for a given input.

/// Bucketing of statements into matched/missing/overspecified/out-of-scope.
pub mod categorize;
/// Precision, recall, F1, and accuracy over the buckets.
pub mod metrics;
/// Token normalization and similarity scoring.
pub mod similarity;
/// Quality label and recommendations.
pub mod summary;

use serde::{Deserialize, Serialize};

pub use categorize::{categorize, Categorization, MatchedPair, UnmatchedStatement};
pub use metrics::{compute, Metrics};
pub use similarity::{similarity, token_overlap};
pub use summary::{quality_assessment, summarize, ComparisonSummary};

/// Default similarity threshold for matching.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Complete result of one comparison, immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Statement buckets.
    pub categorization: Categorization,
    /// Scores computed over the buckets.
    pub metrics: Metrics,
    /// Quality label and recommendations.
    pub summary: ComparisonSummary,
}

/// Runs the full comparison: alignment, metrics, and summary.
#[must_use]
pub fn compare(
    rupp: &[String],
    ai: &[String],
    original_text: &str,
    actor_names: &[String],
    threshold: f64,
) -> ComparisonRecord {
    let categorization = categorize(rupp, ai, original_text, actor_names, threshold);
    let metrics = compute(&categorization, rupp.len(), ai.len(), threshold);
    let summary = summarize(&categorization, &metrics);
    ComparisonRecord {
        categorization,
        metrics,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_comparison_populates_every_section() {
        let rupp = vec![
            "When Member submits password, the system shall validate it.".to_string(),
            "The system shall send overdue reminders.".to_string(),
        ];
        let ai = vec!["The system validates the member's password.".to_string()];
        let record = compare(
            &rupp,
            &ai,
            "The member submits the password. The system sends overdue reminders.",
            &["Member".to_string()],
            DEFAULT_THRESHOLD,
        );
        assert_eq!(record.categorization.matched.len(), 1);
        assert_eq!(record.categorization.missing.len(), 1);
        assert!((record.metrics.precision - 1.0).abs() < f64::EPSILON);
        assert!((record.metrics.recall - 0.5).abs() < f64::EPSILON);
        assert!(!record.summary.recommendations.is_empty());
    }

    #[test]
    fn record_serializes_round_trip() {
        let record = compare(
            &["The system shall validate the password.".to_string()],
            &["The system validates the password.".to_string()],
            "The system validates the password.",
            &[],
            DEFAULT_THRESHOLD,
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: ComparisonRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.categorization.matched.len(), 1);
        assert_eq!(back.summary.quality_assessment, "Excellent");
    }
}
