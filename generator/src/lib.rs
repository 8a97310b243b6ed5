#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

//! Candidate-statement generation capability.
//!
//! The comparator consumes an opaque second statement set; whether it comes
//! from a remote language model or a local mock is invisible to it. Both
//! sides of that seam live here: the capability trait and the offline
//! implementations.

/// Deterministic offline generator used in demo mode.
pub mod mock;
/// Free-text response parsing shared by implementations.
pub mod parse;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use mock::{MockGenerator, ScriptedGenerator};
pub use parse::parse_response;

/// Ordered candidate statements plus generation metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateSet {
    /// Candidate statements in generation order.
    pub statements: Vec<String>,
    /// Identifier of the model that produced them, if known.
    pub model: Option<String>,
    /// Wall-clock generation time in milliseconds, if known.
    pub elapsed_ms: Option<u64>,
}

/// Capability interface for producing candidate statements from raw text.
#[async_trait]
pub trait CandidateGenerator: Send + Sync {
    /// Produces an ordered candidate set for the given requirement text.
    ///
    /// `feedback` carries an optional user hint from a retry request;
    /// implementations may ignore it.
    async fn produce(&self, text: &str, feedback: Option<&str>) -> Result<CandidateSet>;
}
