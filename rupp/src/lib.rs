#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

//! Template-based rewriting of requirement sentences into structured
//! natural language (SNL).
//!
//! Each input sentence is matched against an ordered list of trigger
//! patterns; the first match produces one canonical statement. Sentences
//! matching no pattern emit nothing, and whether that loss is silent or
//! flagged is a caller decision.

/// Structured statement and rewrite output types.
pub mod statement;
/// Ordered sentence templates.
pub mod templates;

pub use statement::{GapPolicy, RewriteOutput, StructuredStatement, TemplateKind};
pub use templates::{rewrite, rewrite_sentence};
