use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::StoredRecord;

/// Number of timeline entries retained in the aggregate view.
const TIMELINE_LIMIT: usize = 10;

/// One point on the processing timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Calendar date of the submission.
    pub date: String,
    /// Submission title.
    pub title: String,
    /// Accuracy scored for the submission.
    pub accuracy: f64,
}

/// Aggregate view over every stored submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Number of stored submissions.
    pub total_submissions: usize,
    /// Mean accuracy across submissions with a comparison.
    pub average_accuracy: f64,
    /// Mean precision across submissions with a comparison.
    pub average_precision: f64,
    /// Mean recall across submissions with a comparison.
    pub average_recall: f64,
    /// Mean F1 across submissions with a comparison.
    pub average_f1: f64,
    /// Missing-statement count summed over all submissions.
    pub total_missing: usize,
    /// Overspecified-statement count summed over all submissions.
    pub total_overspecified: usize,
    /// Out-of-scope-statement count summed over all submissions.
    pub total_out_of_scope: usize,
    /// Quality label → number of submissions with that label.
    pub quality_distribution: IndexMap<String, usize>,
    /// Most recent submissions, oldest first.
    pub processing_timeline: Vec<TimelineEntry>,
}

fn metric(record: &StoredRecord, name: &str) -> Option<f64> {
    record.payload["comparison"]["metrics"][name].as_f64()
}

fn count(record: &StoredRecord, name: &str) -> usize {
    usize::try_from(
        record.payload["comparison"]["metrics"][name]
            .as_u64()
            .unwrap_or(0),
    )
    .unwrap_or(0)
}

/// Computes the aggregate view over the given records.
#[must_use]
pub fn aggregate_statistics(records: &[StoredRecord]) -> AggregateStats {
    let mut stats = AggregateStats {
        total_submissions: records.len(),
        ..AggregateStats::default()
    };
    if records.is_empty() {
        return stats;
    }

    let mut accuracies = Vec::new();
    let mut precisions = Vec::new();
    let mut recalls = Vec::new();
    let mut f1_scores = Vec::new();

    for record in records {
        if let Some(accuracy) = metric(record, "accuracy") {
            accuracies.push(accuracy);
        }
        if let Some(precision) = metric(record, "precision") {
            precisions.push(precision);
        }
        if let Some(recall) = metric(record, "recall") {
            recalls.push(recall);
        }
        if let Some(f1) = metric(record, "f1") {
            f1_scores.push(f1);
        }
        stats.total_missing += count(record, "missing_count");
        stats.total_overspecified += count(record, "overspecified_count");
        stats.total_out_of_scope += count(record, "out_of_scope_count");

        let quality = record.payload["comparison"]["summary"]["quality_assessment"]
            .as_str()
            .unwrap_or("Unknown")
            .to_string();
        *stats.quality_distribution.entry(quality).or_insert(0) += 1;
    }

    stats.average_accuracy = mean(&accuracies);
    stats.average_precision = mean(&precisions);
    stats.average_recall = mean(&recalls);
    stats.average_f1 = mean(&f1_scores);

    let mut ordered: Vec<&StoredRecord> = records.iter().collect();
    ordered.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    stats.processing_timeline = ordered
        .iter()
        .map(|record| TimelineEntry {
            date: record.created_at.date_naive().to_string(),
            title: record.title.clone(),
            accuracy: metric(record, "accuracy").unwrap_or(0.0),
        })
        .collect();
    if stats.processing_timeline.len() > TIMELINE_LIMIT {
        let start = stats.processing_timeline.len() - TIMELINE_LIMIT;
        stats.processing_timeline.drain(..start);
    }
    stats
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denominator = values.len() as f64;
    values.iter().sum::<f64>() / denominator
}
