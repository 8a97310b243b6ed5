use std::collections::BTreeSet;

/// Boost applied when an identified actor appears in both statements.
pub const ACTOR_BOOST: f64 = 0.15;

/// Function words ignored during token comparison.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "to", "of", "in", "on", "at", "is", "are", "was", "were", "be",
    "been", "being", "it", "its", "this", "that", "with", "for", "by", "shall", "will", "would",
    "should", "can", "could", "may", "must", "when", "if", "then", "able",
];

/// Template boilerplate ignored when deciding whether a statement is
/// grounded in the original text.
const TEMPLATE_WORDS: &[&str] = &[
    "system", "provide", "provides", "ability", "ensure", "ensures", "respond", "appropriately",
    "allow", "allows", "support", "supports",
];

/// Lowercases, strips punctuation, and collapses whitespace for comparison.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() {
            normalized.push(c);
        } else if c.is_whitespace() || c == '\'' || c.is_ascii_punctuation() {
            normalized.push(' ');
        }
    }
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Content tokens of a statement: normalized, stopwords removed, trailing
/// plural/third-person `s` stripped.
#[must_use]
pub fn tokens(text: &str) -> BTreeSet<String> {
    normalize(text)
        .split_whitespace()
        .filter(|token| !STOPWORDS.contains(token))
        .map(stem)
        .filter(|token| token.len() > 1)
        .collect()
}

/// Content tokens with template boilerplate removed as well; used for the
/// out-of-scope check against the original text.
#[must_use]
pub fn content_tokens(text: &str) -> BTreeSet<String> {
    tokens(text)
        .into_iter()
        .filter(|token| !TEMPLATE_WORDS.contains(&token.as_str()))
        .collect()
}

/// Token-overlap ratio (shared / union) of two statements. Empty inputs
/// yield 0, never NaN.
#[must_use]
pub fn token_overlap(a: &str, b: &str) -> f64 {
    let tokens_a = tokens(a);
    let tokens_b = tokens(b);
    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        return 0.0;
    }
    let shared = tokens_a.intersection(&tokens_b).count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = shared as f64 / union as f64;
    ratio
}

/// Combined similarity: token overlap plus an actor-containment boost when
/// any identified actor appears in both statements. Clamped to [0, 1].
#[must_use]
pub fn similarity(a: &str, b: &str, actor_names: &[String]) -> f64 {
    let mut score = token_overlap(a, b);
    let tokens_a = tokens(a);
    let tokens_b = tokens(b);
    let shared_actor = actor_names.iter().any(|actor| {
        let actor = stem(&actor.to_lowercase());
        !actor.is_empty() && tokens_a.contains(&actor) && tokens_b.contains(&actor)
    });
    if shared_actor {
        score += ACTOR_BOOST;
    }
    score.clamp(0.0, 1.0)
}

/// Strips a trailing possessive or plural `s` from tokens longer than three
/// characters.
fn stem(token: &str) -> String {
    let token = token.trim();
    if token.len() > 3 && token.ends_with('s') && !token.ends_with("ss") {
        token[..token.len() - 1].to_string()
    } else {
        token.to_string()
    }
}
