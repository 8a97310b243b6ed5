use thiserror::Error;

use snlgen_storage::StorageError;

/// Errors that abort submission processing.
///
/// Extraction gaps are not errors: unmatched sentences surface as flagged
/// data and external-service failures degrade to warnings on the record.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The submission failed input validation; nothing was processed.
    #[error("invalid submission: {0}")]
    Validation(String),
    /// Persistence failed while saving or loading a record.
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}
