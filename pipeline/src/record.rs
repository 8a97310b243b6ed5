use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use snlgen_actors::{Actor, Domain};
use snlgen_comparison::ComparisonRecord;
use snlgen_generator::CandidateSet;
use snlgen_rupp::RewriteOutput;
use snlgen_storage::StoredRecord;
use snlgen_textprep::TextStats;

/// Complete result of processing one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Record identifier.
    pub id: Uuid,
    /// Submission title.
    pub title: String,
    /// Time the record was created.
    pub created_at: DateTime<Utc>,
    /// Raw submitted text, before any cleaning.
    pub original_text: String,
    /// Surface statistics over the original text.
    pub stats: TextStats,
    /// Domain the submission was processed under.
    pub domain: Domain,
    /// Identified actors after conflict resolution.
    pub actors: Vec<Actor>,
    /// Rule-based rewrite output.
    pub rupp: RewriteOutput,
    /// Generated candidate set; empty when the generator failed.
    pub ai: CandidateSet,
    /// Alignment and scores of the two statement sets.
    pub comparison: ComparisonRecord,
    /// Non-fatal problems encountered during processing.
    pub warnings: Vec<String>,
}

impl SubmissionRecord {
    /// Wraps the record in a storage envelope.
    ///
    /// # Errors
    /// Returns a serialization error when the record cannot be converted to
    /// JSON.
    pub fn to_stored(&self) -> Result<StoredRecord, serde_json::Error> {
        Ok(StoredRecord {
            id: self.id,
            title: self.title.clone(),
            created_at: self.created_at,
            payload: serde_json::to_value(self)?,
        })
    }

    /// Unwraps a storage envelope back into a record.
    ///
    /// # Errors
    /// Returns a deserialization error when the payload does not hold a
    /// submission record.
    pub fn from_stored(stored: &StoredRecord) -> Result<Self, serde_json::Error> {
        serde_json::from_value(stored.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snlgen_comparison::compare;

    fn sample() -> SubmissionRecord {
        SubmissionRecord {
            id: Uuid::new_v4(),
            title: "Library case".to_string(),
            created_at: Utc::now(),
            original_text: "The member clicks the login button.".to_string(),
            stats: TextStats::default(),
            domain: Domain::Library,
            actors: vec![Actor::new("Member", snlgen_actors::ActorClass::Valid)],
            rupp: RewriteOutput::default(),
            ai: CandidateSet::default(),
            comparison: compare(&[], &[], "", &[], 0.6),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn storage_envelope_round_trips() {
        let record = sample();
        let stored = record.to_stored().unwrap();
        assert_eq!(stored.id, record.id);
        assert_eq!(stored.title, record.title);
        let back = SubmissionRecord::from_stored(&stored).unwrap();
        assert_eq!(back.actors, record.actors);
        assert_eq!(back.domain, Domain::Library);
    }
}
