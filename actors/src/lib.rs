#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

//! Actor extraction for requirement submissions.
//!
//! Candidates are surfaced by keyword and position heuristics, classified
//! against the detected domain profile, and cross-checked against diagram
//! markup.

/// Semantic conflict resolution between near-synonymous actors.
pub mod conflicts;
/// Diagram cross-checking of identified actors.
pub mod diagram;
/// Candidate extraction and classification.
pub mod extract;
/// Closed set of domain profiles with their keyword data.
pub mod profile;

pub use conflicts::resolve_conflicts;
pub use diagram::{verify, DiagramVerification, VerificationStats};
pub use extract::{extract, Actor, ActorClass};
pub use profile::{detect_domain, Domain, DomainProfile};
