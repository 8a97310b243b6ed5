use serde::{Deserialize, Serialize};

/// Which template produced a statement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// `If <condition>, then the system shall <response>.`
    Conditional,
    /// `When <trigger>, the system shall <response>.`
    WhenTrigger,
    /// `The system shall be able to <action>.`
    SystemCapability,
    /// `The system shall provide <actor> with the ability to <action>.`
    UserAction,
    /// Modal-verb statements rewritten to `The system shall <response>.`
    Modal,
    /// `The system shall ensure that <state>.`
    State,
    /// `The system shall <verb> <object>.`
    Validation,
}

/// One generated SNL statement with the clauses it was built from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructuredStatement {
    /// Full canonical sentence.
    pub text: String,
    /// Actor referenced by the statement, if any.
    pub actor: Option<String>,
    /// Trigger/condition clause extracted from the source sentence.
    pub trigger: Option<String>,
    /// System response clause.
    pub response: String,
    /// Template that matched.
    pub template: TemplateKind,
}

/// Policy for sentences that match no rewrite pattern.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    /// Drop unmatched sentences silently (the historical behavior).
    #[default]
    Drop,
    /// Record unmatched sentences in the rewrite output.
    Flag,
}

/// Result of rewriting a sentence sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewriteOutput {
    /// Generated statements, deduplicated in input order.
    pub statements: Vec<StructuredStatement>,
    /// Sentences that matched no pattern (empty under [`GapPolicy::Drop`]).
    pub flagged: Vec<String>,
}

impl RewriteOutput {
    /// Statement texts in order.
    #[must_use]
    pub fn statement_texts(&self) -> Vec<String> {
        self.statements.iter().map(|s| s.text.clone()).collect()
    }
}
