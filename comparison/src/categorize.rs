use serde::{Deserialize, Serialize};

use crate::similarity::{content_tokens, similarity, tokens};

/// A RUPP statement aligned with its best-matching candidate statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchedPair {
    /// Index into the RUPP statement list.
    pub rupp_index: usize,
    /// RUPP statement text.
    pub rupp_statement: String,
    /// Index into the candidate statement list.
    pub ai_index: usize,
    /// Candidate statement text.
    pub ai_statement: String,
    /// Similarity score that produced the match.
    pub similarity: f64,
}

/// A statement left unmatched on either side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnmatchedStatement {
    /// Index into the owning statement list.
    pub index: usize,
    /// Statement text.
    pub statement: String,
    /// Best similarity observed against the other side.
    pub best_similarity: f64,
}

/// Classification buckets for one comparison.
///
/// Every RUPP statement lands in exactly one of `matched`/`missing`, and
/// every candidate statement in exactly one of
/// `matched`/`overspecified`/`out_of_scope`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Categorization {
    /// Aligned statement pairs.
    pub matched: Vec<MatchedPair>,
    /// RUPP statements with no candidate above the threshold.
    pub missing: Vec<UnmatchedStatement>,
    /// Unmatched candidates still grounded in the original text.
    pub overspecified: Vec<UnmatchedStatement>,
    /// Unmatched candidates with no term from the original text.
    pub out_of_scope: Vec<UnmatchedStatement>,
}

/// Aligns the RUPP statement set against the candidate set.
///
/// Greedy in RUPP order: each RUPP statement takes its best-scoring
/// still-unconsumed candidate when the score clears `threshold`; a
/// candidate can be consumed at most once, so no statement is ever
/// double-counted.
#[must_use]
pub fn categorize(
    rupp: &[String],
    ai: &[String],
    original_text: &str,
    actor_names: &[String],
    threshold: f64,
) -> Categorization {
    let mut result = Categorization::default();
    let mut consumed = vec![false; ai.len()];

    for (rupp_index, rupp_statement) in rupp.iter().enumerate() {
        let mut best_score = 0.0_f64;
        let mut best_index: Option<usize> = None;
        for (ai_index, ai_statement) in ai.iter().enumerate() {
            let score = similarity(rupp_statement, ai_statement, actor_names);
            if score > best_score {
                best_score = score;
                best_index = Some(ai_index);
            }
        }
        match best_index {
            Some(ai_index) if best_score >= threshold && !consumed[ai_index] => {
                consumed[ai_index] = true;
                result.matched.push(MatchedPair {
                    rupp_index,
                    rupp_statement: rupp_statement.clone(),
                    ai_index,
                    ai_statement: ai[ai_index].clone(),
                    similarity: best_score,
                });
            }
            _ => result.missing.push(UnmatchedStatement {
                index: rupp_index,
                statement: rupp_statement.clone(),
                best_similarity: best_score,
            }),
        }
    }

    let original = tokens(original_text);
    for (ai_index, ai_statement) in ai.iter().enumerate() {
        if consumed[ai_index] {
            continue;
        }
        let best_similarity = rupp
            .iter()
            .map(|rupp_statement| similarity(rupp_statement, ai_statement, actor_names))
            .fold(0.0_f64, f64::max);
        let grounded = content_tokens(ai_statement)
            .iter()
            .any(|token| original.contains(token));
        let entry = UnmatchedStatement {
            index: ai_index,
            statement: ai_statement.clone(),
            best_similarity,
        };
        if grounded || content_tokens(ai_statement).is_empty() {
            result.overspecified.push(entry);
        } else {
            result.out_of_scope.push(entry);
        }
    }
    result
}
