use serde::{Deserialize, Serialize};

use crate::profile::{DomainProfile, DENY_LIST, GENERIC_ROLES, STOPWORDS};

/// Classification assigned to an extracted actor candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActorClass {
    /// Expected actor for the detected domain.
    Valid,
    /// Generic or technical noise that should never be an actor.
    Incorrect,
    /// Legitimate domain noun that is not expected as an actor.
    Overspecified,
}

/// A named actor candidate with its classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    /// Actor name, capitalized.
    pub name: String,
    /// Classification tag.
    pub class: ActorClass,
}

impl Actor {
    /// Creates an actor record.
    #[must_use]
    pub fn new(name: impl Into<String>, class: ActorClass) -> Self {
        Self {
            name: name.into(),
            class,
        }
    }
}

/// Extracts actor candidates from the sentence sequence and classifies each
/// against the domain profile.
///
/// Deduplication is case-insensitive with the first occurrence winning.
/// Classification precedence is fixed: the profile allow-list overrides the
/// generic deny-list, and `Incorrect` wins over `Overspecified` when a
/// candidate matches both. Running extraction twice on identical input
/// yields an identical actor set.
#[must_use]
pub fn extract(sentences: &[String], profile: &DomainProfile) -> Vec<Actor> {
    let mut actors: Vec<Actor> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    let mut push = |name: String, class: ActorClass, seen: &mut Vec<String>, actors: &mut Vec<Actor>| {
        let key = name.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            actors.push(Actor::new(name, class));
        }
    };

    for sentence in sentences {
        let lower_sentence = sentence.to_lowercase();

        // Compound system actors are matched against the whole sentence so
        // the profile's canonical casing is preserved.
        for compound in profile.allowed_compounds {
            if lower_sentence.contains(&compound.to_lowercase()) {
                push((*compound).to_string(), ActorClass::Valid, &mut seen, &mut actors);
            }
        }

        let tokens: Vec<&str> = sentence.split_whitespace().collect();
        for (index, raw) in tokens.iter().enumerate() {
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if word.len() <= 2 || !word.chars().all(char::is_alphabetic) {
                continue;
            }
            let lower = word.to_lowercase();
            if STOPWORDS.contains(&lower.as_str()) {
                continue;
            }

            let is_role =
                profile.roles.contains(&lower.as_str()) || GENERIC_ROLES.contains(&lower.as_str());
            let capitalized = word.chars().next().is_some_and(char::is_uppercase);
            // Sentence-initial capitalized words are only trusted when they
            // sit in subject position before a third-person verb.
            let subject_position = index == 0
                && capitalized
                && tokens
                    .get(1)
                    .is_some_and(|next| next.trim_end_matches(|c: char| !c.is_alphanumeric()).ends_with('s'));

            if !is_role && !(capitalized && (index > 0 || subject_position)) {
                continue;
            }

            let name = if is_role { capitalize(&lower) } else { word.to_string() };
            let class = classify(&lower, profile);
            push(name, class, &mut seen, &mut actors);
        }
    }
    actors
}

/// Classifies a single lowercased candidate. Allow-list first, then the
/// deny-list, then the domain-noun list.
fn classify(lower: &str, profile: &DomainProfile) -> ActorClass {
    if profile
        .allowed_compounds
        .iter()
        .any(|compound| compound.to_lowercase() == lower)
    {
        return ActorClass::Valid;
    }
    if DENY_LIST.iter().any(|term| lower.contains(term)) {
        return ActorClass::Incorrect;
    }
    let singular = lower.strip_suffix('s').unwrap_or(lower);
    if profile.domain_nouns.contains(&lower) || profile.domain_nouns.contains(&singular) {
        return ActorClass::Overspecified;
    }
    ActorClass::Valid
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{detect_domain, Domain};

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn member_is_valid_in_library_domain() {
        let input = sentences(&[
            "The Member clicks the login button.",
            "The system validates the password.",
        ]);
        let profile = detect_domain(&input, Some(Domain::Library));
        let actors = extract(&input, profile);
        let member = actors
            .iter()
            .find(|actor| actor.name == "Member")
            .expect("member extracted");
        assert_eq!(member.class, ActorClass::Valid);
    }

    #[test]
    fn deny_listed_terms_are_incorrect() {
        let input = sentences(&["The librarian opens the Database to update records."]);
        let profile = detect_domain(&input, Some(Domain::Library));
        let actors = extract(&input, profile);
        let database = actors
            .iter()
            .find(|actor| actor.name == "Database")
            .expect("database candidate surfaced");
        assert_eq!(database.class, ActorClass::Incorrect);
    }

    #[test]
    fn domain_nouns_are_overspecified() {
        let input = sentences(&["The member returns the Book before the due date."]);
        let profile = detect_domain(&input, Some(Domain::Library));
        let actors = extract(&input, profile);
        let book = actors
            .iter()
            .find(|actor| actor.name == "Book")
            .expect("book candidate surfaced");
        assert_eq!(book.class, ActorClass::Overspecified);
    }

    #[test]
    fn allow_list_overrides_deny_list() {
        let input = sentences(&["The PaymentSystem confirms the transaction."]);
        let profile = detect_domain(&input, Some(Domain::Booking));
        let actors = extract(&input, profile);
        let payment = actors
            .iter()
            .find(|actor| actor.name == "PaymentSystem")
            .expect("compound actor extracted");
        assert_eq!(payment.class, ActorClass::Valid);
    }

    #[test]
    fn incorrect_takes_precedence_over_overspecified() {
        // "catalog" sits on both the deny-list and the library noun list.
        let input = sentences(&["The member browses the Catalog for titles."]);
        let profile = detect_domain(&input, Some(Domain::Library));
        let actors = extract(&input, profile);
        let catalog = actors
            .iter()
            .find(|actor| actor.name == "Catalog")
            .expect("catalog candidate surfaced");
        assert_eq!(catalog.class, ActorClass::Incorrect);
    }

    #[test]
    fn extraction_is_deterministic() {
        let input = sentences(&[
            "The Member clicks the login button.",
            "The Librarian issues the book.",
        ]);
        let profile = detect_domain(&input, Some(Domain::Library));
        assert_eq!(extract(&input, profile), extract(&input, profile));
    }

    #[test]
    fn dedupes_case_insensitively() {
        let input = sentences(&[
            "The member searches for books.",
            "The Member views the loan history.",
        ]);
        let profile = detect_domain(&input, Some(Domain::Library));
        let actors = extract(&input, profile);
        let members = actors
            .iter()
            .filter(|actor| actor.name.to_lowercase() == "member")
            .count();
        assert_eq!(members, 1);
    }
}
