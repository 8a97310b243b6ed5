use std::time::Instant;

use anyhow::Result;
use async_trait::async_trait;
use snlgen_textprep::{preprocess, split_sentences};

use crate::{CandidateGenerator, CandidateSet};

const MOCK_MODEL: &str = "mock-snl-1";

/// Deterministic offline generator standing in for the remote model.
///
/// Statements are derived from the input sentences with a fixed set of
/// rephrasing rules, so the same text always yields the same candidate set.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator;

impl MockGenerator {
    fn candidate_for(sentence: &str) -> String {
        let clause = sentence.trim().trim_end_matches(['.', '!', '?']);
        if let Some(rest) = clause.strip_prefix("the system ") {
            return format!("The system shall be able to {rest}.");
        }
        let tokens: Vec<&str> = clause.split_whitespace().collect();
        // "the member clicks ..." reads as subject + third-person verb.
        if tokens.len() > 2 && tokens[0] == "the" && tokens[2].ends_with('s') {
            let verb = tokens[2].trim_end_matches('s');
            let rest = tokens[3..].join(" ");
            return format!("The system shall allow the {} to {verb} {rest}.", tokens[1]);
        }
        format!("The system shall ensure that {clause}.")
    }
}

#[async_trait]
impl CandidateGenerator for MockGenerator {
    async fn produce(&self, text: &str, feedback: Option<&str>) -> Result<CandidateSet> {
        let started = Instant::now();
        let cleaned = preprocess(text);
        let mut statements: Vec<String> = split_sentences(&cleaned)
            .iter()
            .map(|sentence| Self::candidate_for(sentence))
            .collect();
        if let Some(hint) = feedback {
            let hint = hint.trim();
            if !hint.is_empty() {
                statements.push(format!("The system shall satisfy the clarification: {hint}."));
            }
        }
        Ok(CandidateSet {
            statements,
            model: Some(MOCK_MODEL.to_string()),
            elapsed_ms: Some(u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)),
        })
    }
}

/// Test double returning a preset statement list.
#[derive(Debug, Clone)]
pub struct ScriptedGenerator {
    statements: Vec<String>,
}

impl ScriptedGenerator {
    /// Creates a generator that always returns the given statements.
    #[must_use]
    pub fn new(statements: Vec<String>) -> Self {
        Self { statements }
    }
}

#[async_trait]
impl CandidateGenerator for ScriptedGenerator {
    async fn produce(&self, _text: &str, _feedback: Option<&str>) -> Result<CandidateSet> {
        Ok(CandidateSet {
            statements: self.statements.clone(),
            model: Some("scripted".to_string()),
            elapsed_ms: Some(0),
        })
    }
}
