#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

//! Persistence for processed submissions.
//!
//! The processing core never touches a store directly; callers inject a
//! [`SubmissionStore`] implementation. Records travel through storage as an
//! opaque envelope so the store does not need to know the record schema.

/// Filesystem-backed store, one JSON file per record.
pub mod file;
/// In-process store for demos and tests.
pub mod memory;
/// Aggregate statistics across stored records.
pub mod stats;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use stats::{aggregate_statistics, AggregateStats, TimelineEntry};

/// Errors emitted by the storage subsystem.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Envelope persisted per submission. The `payload` holds the full processed
/// record as opaque JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Record identifier.
    pub id: Uuid,
    /// Submission title.
    pub title: String,
    /// Time the record was created.
    pub created_at: DateTime<Utc>,
    /// Full processed record.
    pub payload: serde_json::Value,
}

impl StoredRecord {
    /// Wraps a payload in a fresh envelope.
    #[must_use]
    pub fn new(id: Uuid, title: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            id,
            title: title.into(),
            created_at: Utc::now(),
            payload,
        }
    }
}

/// Listing entry: envelope metadata without the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionSummary {
    /// Record identifier.
    pub id: Uuid,
    /// Submission title.
    pub title: String,
    /// Time the record was created.
    pub created_at: DateTime<Utc>,
}

impl From<&StoredRecord> for SubmissionSummary {
    fn from(record: &StoredRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            created_at: record.created_at,
        }
    }
}

/// Storage capability injected into callers.
pub trait SubmissionStore: Send + Sync {
    /// Persists a record, returning its id.
    fn save(&self, record: &StoredRecord) -> Result<Uuid, StorageError>;

    /// Loads a record by id; `None` when it does not exist.
    fn load(&self, id: Uuid) -> Result<Option<StoredRecord>, StorageError>;

    /// Lists up to `limit` records, newest first.
    fn list(&self, limit: usize) -> Result<Vec<SubmissionSummary>, StorageError>;

    /// Loads every stored record, newest first.
    fn load_all(&self) -> Result<Vec<StoredRecord>, StorageError>;
}
