use serde::{Deserialize, Serialize};

use crate::categorize::Categorization;
use crate::metrics::Metrics;

/// Human-readable assessment attached to a comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Overall quality label derived from accuracy.
    pub quality_assessment: String,
    /// Actionable follow-ups derived from the bucket counts.
    pub recommendations: Vec<String>,
}

/// Maps accuracy to a quality label.
#[must_use]
pub fn quality_assessment(accuracy: f64) -> &'static str {
    if accuracy >= 0.8 {
        "Excellent"
    } else if accuracy >= 0.6 {
        "Good"
    } else {
        "Needs Improvement"
    }
}

/// Builds the summary block from a categorization and its metrics.
#[must_use]
pub fn summarize(categorization: &Categorization, metrics: &Metrics) -> ComparisonSummary {
    let mut recommendations = Vec::new();
    let missing = categorization.missing.len();
    let overspecified = categorization.overspecified.len();
    let out_of_scope = categorization.out_of_scope.len();

    if missing > 0 {
        recommendations.push(format!(
            "Consider adding {missing} missing requirements to the generated set"
        ));
    }
    if overspecified > 0 {
        recommendations.push(format!(
            "Review {overspecified} potentially overspecified requirements"
        ));
    }
    if out_of_scope > 0 {
        recommendations.push(format!("Remove {out_of_scope} out-of-scope requirements"));
    }
    if metrics.precision < 0.8 {
        recommendations
            .push("Improve requirement precision by reducing overspecification".to_string());
    }
    if metrics.recall < 0.8 {
        recommendations.push(
            "Improve requirement coverage by capturing more functional requirements".to_string(),
        );
    }

    ComparisonSummary {
        quality_assessment: quality_assessment(metrics.accuracy).to_string(),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::categorize;
    use crate::metrics::compute;

    #[test]
    fn accuracy_tiers_map_to_labels() {
        assert_eq!(quality_assessment(0.95), "Excellent");
        assert_eq!(quality_assessment(0.8), "Excellent");
        assert_eq!(quality_assessment(0.7), "Good");
        assert_eq!(quality_assessment(0.59), "Needs Improvement");
        assert_eq!(quality_assessment(0.0), "Needs Improvement");
    }

    #[test]
    fn perfect_comparison_has_no_recommendations() {
        let rupp = vec!["The system shall validate the password.".to_string()];
        let ai = vec!["The system validates the password.".to_string()];
        let categorization = categorize(&rupp, &ai, "The system validates the password.", &[], 0.6);
        let metrics = compute(&categorization, 1, 1, 0.6);
        let summary = summarize(&categorization, &metrics);
        assert_eq!(summary.quality_assessment, "Excellent");
        assert!(summary.recommendations.is_empty());
    }

    #[test]
    fn missing_statements_drive_a_recommendation() {
        let rupp = vec![
            "The system shall validate the password.".to_string(),
            "The system shall send overdue reminders.".to_string(),
        ];
        let categorization = categorize(&rupp, &[], "The system validates passwords.", &[], 0.6);
        let metrics = compute(&categorization, 2, 0, 0.6);
        let summary = summarize(&categorization, &metrics);
        assert_eq!(summary.quality_assessment, "Needs Improvement");
        assert!(summary
            .recommendations
            .iter()
            .any(|r| r.contains("2 missing")));
        assert!(summary.recommendations.iter().any(|r| r.contains("coverage")));
    }
}
