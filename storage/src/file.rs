use std::{fs, path::PathBuf};

use uuid::Uuid;

use crate::{StorageError, StoredRecord, SubmissionStore, SubmissionSummary};

/// Filesystem store keeping one pretty-printed JSON file per record.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given directory.
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Directory the store writes into.
    #[must_use]
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn record_path(&self, id: Uuid) -> PathBuf {
        self.base_path.join(format!("{id}.json"))
    }

    fn read_all(&self) -> Result<Vec<StoredRecord>, StorageError> {
        let mut records = Vec::new();
        let read_dir = match fs::read_dir(&self.base_path) {
            Ok(read_dir) => read_dir,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(records),
            Err(err) => return Err(err.into()),
        };
        for entry in read_dir.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let data = fs::read(&path)?;
                // Unreadable files are skipped rather than failing the listing.
                if let Ok(record) = serde_json::from_slice::<StoredRecord>(&data) {
                    records.push(record);
                }
            }
        }
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

impl SubmissionStore for FileStore {
    fn save(&self, record: &StoredRecord) -> Result<Uuid, StorageError> {
        fs::create_dir_all(&self.base_path)?;
        let data = serde_json::to_vec_pretty(record)?;
        fs::write(self.record_path(record.id), data)?;
        Ok(record.id)
    }

    fn load(&self, id: Uuid) -> Result<Option<StoredRecord>, StorageError> {
        let path = self.record_path(id);
        match fs::read(&path) {
            Ok(data) => Ok(Some(serde_json::from_slice(&data)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn list(&self, limit: usize) -> Result<Vec<SubmissionSummary>, StorageError> {
        let mut summaries: Vec<SubmissionSummary> = self
            .read_all()?
            .iter()
            .map(SubmissionSummary::from)
            .collect();
        summaries.truncate(limit);
        Ok(summaries)
    }

    fn load_all(&self) -> Result<Vec<StoredRecord>, StorageError> {
        self.read_all()
    }
}
