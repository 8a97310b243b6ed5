use serde::{Deserialize, Serialize};

use crate::categorize::Categorization;

/// Alignment metrics for one comparison. All four scores are bounded in
/// [0, 1]; undefined ratios collapse to 0 rather than NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    /// `matched / ai_total`.
    pub precision: f64,
    /// `matched / rupp_total`.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
    /// `matched / (matched + missing + overspecified)`.
    pub accuracy: f64,
    /// Number of matched pairs.
    pub matched_count: usize,
    /// RUPP statements without a match.
    pub missing_count: usize,
    /// Unmatched candidates grounded in the source text.
    pub overspecified_count: usize,
    /// Unmatched candidates with no grounding in the source text.
    pub out_of_scope_count: usize,
    /// Total RUPP statements.
    pub rupp_total: usize,
    /// Total candidate statements.
    pub ai_total: usize,
    /// Similarity threshold used for matching.
    pub similarity_threshold: f64,
}

/// Computes metrics from a categorization.
#[must_use]
pub fn compute(
    categorization: &Categorization,
    rupp_total: usize,
    ai_total: usize,
    threshold: f64,
) -> Metrics {
    let matched = categorization.matched.len();
    let missing = categorization.missing.len();
    let overspecified = categorization.overspecified.len();
    let out_of_scope = categorization.out_of_scope.len();

    let precision = ratio(matched, ai_total);
    let recall = ratio(matched, rupp_total);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };
    let accuracy = ratio(matched, matched + missing + overspecified);

    Metrics {
        precision,
        recall,
        f1,
        accuracy,
        matched_count: matched,
        missing_count: missing,
        overspecified_count: overspecified,
        out_of_scope_count: out_of_scope,
        rupp_total,
        ai_total,
        similarity_threshold: threshold,
    }
}

/// Guarded division clamped to [0, 1]; a zero denominator yields 0.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = numerator as f64 / denominator as f64;
    ratio.clamp(0.0, 1.0)
}
