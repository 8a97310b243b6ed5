#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

//! End-to-end submission processing.
//!
//! Composes normalization, actor extraction, template rewriting, candidate
//! generation, and comparison into one operation that yields a complete,
//! storable record. Persistence and transport stay outside; callers inject
//! a generator and hand the finished record to whatever store they use.

/// Tunable processing knobs.
pub mod config;
/// The processing operation itself.
pub mod engine;
/// Error taxonomy for aborted processing.
pub mod error;
/// The processed-submission record and its storage envelope.
pub mod record;

pub use config::{PipelineConfig, DEFAULT_MAX_ACTORS};
pub use snlgen_rupp::GapPolicy;
pub use engine::{process, MIN_SUBMISSION_LEN};
pub use error::PipelineError;
pub use record::SubmissionRecord;
