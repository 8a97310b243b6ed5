#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

//! Text normalization and sentence extraction for requirement submissions.

/// Cleaning and contraction expansion applied before any analysis.
pub mod preprocess;
/// Sentence splitting and compound-clause expansion.
pub mod sentences;
/// Surface statistics over submitted text.
pub mod stats;

pub use preprocess::preprocess;
pub use sentences::{expand_compounds, split_sentences};
pub use stats::{text_stats, TextStats};
