use indexmap::IndexMap;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::{StorageError, StoredRecord, SubmissionStore, SubmissionSummary};

/// In-process store backed by an insertion-ordered map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<IndexMap<Uuid, StoredRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl SubmissionStore for MemoryStore {
    fn save(&self, record: &StoredRecord) -> Result<Uuid, StorageError> {
        self.records.lock().insert(record.id, record.clone());
        Ok(record.id)
    }

    fn load(&self, id: Uuid) -> Result<Option<StoredRecord>, StorageError> {
        Ok(self.records.lock().get(&id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<SubmissionSummary>, StorageError> {
        let records = self.records.lock();
        let mut summaries: Vec<SubmissionSummary> =
            records.values().map(SubmissionSummary::from).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        summaries.truncate(limit);
        Ok(summaries)
    }

    fn load_all(&self) -> Result<Vec<StoredRecord>, StorageError> {
        let records = self.records.lock();
        let mut all: Vec<StoredRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
