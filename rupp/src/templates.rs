use snlgen_actors::{Actor, ActorClass};

use crate::statement::{GapPolicy, RewriteOutput, StructuredStatement, TemplateKind};

const MIN_STATEMENT_LEN: usize = 20;

/// Verb variants recognized by the system-capability template, mapped to
/// their canonical base form.
const CAPABILITY_VERBS: &[(&str, &str)] = &[
    ("displays", "display"),
    ("display", "display"),
    ("shows", "display"),
    ("show", "display"),
    ("validates", "validate"),
    ("validate", "validate"),
    ("checks", "validate"),
    ("check", "validate"),
    ("processes", "process"),
    ("process", "process"),
    ("handles", "process"),
    ("handle", "process"),
    ("stores", "store"),
    ("store", "store"),
    ("saves", "store"),
    ("save", "store"),
    ("retrieves", "retrieve"),
    ("retrieve", "retrieve"),
    ("fetches", "retrieve"),
    ("fetch", "retrieve"),
    ("asks", "ask"),
    ("ask", "ask"),
    ("prompts", "prompt"),
    ("prompt", "prompt"),
    ("opens", "open"),
    ("open", "open"),
    ("closes", "close"),
    ("close", "close"),
    ("updates", "update"),
    ("update", "update"),
    ("enters", "accept"),
    ("enter", "accept"),
];

const USER_ACTION_WORDS: &[&str] = &["click", "enter", "select", "view", "browse", "search"];

const USER_VERB_FORMS: &[(&str, &str)] = &[
    ("clicks ", "click "),
    ("enters ", "enter "),
    ("selects ", "select "),
    ("types ", "type "),
    ("views ", "view "),
    ("browses ", "browse "),
    ("searches ", "search "),
];

const MODALS: &[&str] = &["shall", "should", "must", "will", "can", "may"];

const STATE_WORDS: &[&str] = &["available", "ready", "logged in", "valid", "correct"];

const VALIDATION_WORDS: &[&str] = &["validate", "verify", "confirm", "check"];

/// Rewrites a sentence sequence under the given gap policy.
///
/// Statements are deduplicated by text in input order and degenerate
/// statements (20 chars or fewer) are discarded. Deterministic: identical
/// input always yields identical output.
#[must_use]
pub fn rewrite(sentences: &[String], actors: &[Actor], policy: GapPolicy) -> RewriteOutput {
    let mut output = RewriteOutput::default();
    let mut seen: Vec<String> = Vec::new();
    for sentence in sentences {
        match rewrite_sentence(sentence, actors) {
            Some(statement) => {
                if statement.text.len() > MIN_STATEMENT_LEN && !seen.contains(&statement.text) {
                    seen.push(statement.text.clone());
                    output.statements.push(statement);
                }
            }
            None => {
                if policy == GapPolicy::Flag {
                    output.flagged.push(sentence.clone());
                }
            }
        }
    }
    output
}

/// Attempts to rewrite one sentence, trying templates in a fixed order:
/// conditional, when-trigger, system capability, user action, modal, state,
/// validation. Returns `None` when no template matches.
#[must_use]
pub fn rewrite_sentence(sentence: &str, actors: &[Actor]) -> Option<StructuredStatement> {
    let lower = sentence
        .trim()
        .trim_end_matches(['.', '!', '?'])
        .to_lowercase();
    if lower.is_empty() {
        return None;
    }

    conditional_template(&lower, actors)
        .or_else(|| when_template(&lower, actors))
        .or_else(|| capability_template(&lower))
        .or_else(|| user_action_template(&lower, actors))
        .or_else(|| modal_template(&lower))
        .or_else(|| state_template(&lower))
        .or_else(|| validation_template(&lower))
}

fn conditional_template(lower: &str, actors: &[Actor]) -> Option<StructuredStatement> {
    let has_if = lower.split_whitespace().any(|token| token == "if");
    if !has_if || !(lower.contains(" then ") || lower.contains(',')) {
        return None;
    }

    let (condition, raw_response) = if let Some((head, tail)) = lower.split_once(" then ") {
        (strip_if(head), tail.trim().to_string())
    } else {
        let (head, tail) = lower.split_once(',')?;
        (strip_if(head), tail.trim().to_string())
    };
    if condition.is_empty() {
        return None;
    }

    let mut response = clean_system_prefix(&raw_response);
    if response.is_empty() {
        response = "respond appropriately".to_string();
    }
    let text = format!("If {condition}, then the system shall {response}.");
    Some(StructuredStatement {
        text,
        actor: find_actor(&condition, actors),
        trigger: Some(condition),
        response,
        template: TemplateKind::Conditional,
    })
}

fn when_template(lower: &str, actors: &[Actor]) -> Option<StructuredStatement> {
    let rest = lower.strip_prefix("when ")?.trim();
    if rest.is_empty() {
        return None;
    }
    // A sentence already carrying a system clause keeps its own response.
    let (trigger, response) = rest.split_once(", the system shall ").map_or_else(
        || (rest.to_string(), "respond appropriately".to_string()),
        |(head, tail)| (head.trim().to_string(), tail.trim().to_string()),
    );
    let text = format!("When {trigger}, the system shall {response}.");
    Some(StructuredStatement {
        text,
        actor: find_actor(&trigger, actors),
        trigger: Some(trigger),
        response,
        template: TemplateKind::WhenTrigger,
    })
}

fn capability_template(lower: &str) -> Option<StructuredStatement> {
    let cleaned = strip_subject(lower);

    // Earliest occurrence wins; the longer variant wins at equal offsets so
    // "displays" is preferred to "display".
    let mut best: Option<(usize, &str, &str)> = None;
    for (variant, base) in CAPABILITY_VERBS {
        if let Some(index) = cleaned.find(variant) {
            let better = match best {
                None => true,
                Some((best_index, best_variant, _)) => {
                    index < best_index || (index == best_index && variant.len() > best_variant.len())
                }
            };
            if better {
                best = Some((index, variant, base));
            }
        }
    }
    let (index, variant, base) = best?;

    let mut after = cleaned[index + variant.len()..].trim().to_string();
    if after.is_empty() {
        after = "the required information".to_string();
    } else {
        match base {
            "ask" | "prompt" => {
                if !after.contains("to ") {
                    after = format!("the user to {after}");
                }
            }
            "display" | "validate" => {
                if !after.starts_with("the ") && !after.starts_with("that ") {
                    after = format!("the {after}");
                }
            }
            _ => {}
        }
    }
    let response = format!("be able to {base} {after}");
    let text = format!("The system shall {response}.");
    Some(StructuredStatement {
        text,
        actor: None,
        trigger: None,
        response,
        template: TemplateKind::SystemCapability,
    })
}

fn user_action_template(lower: &str, actors: &[Actor]) -> Option<StructuredStatement> {
    let cleaned = lower.strip_prefix("the ").unwrap_or(lower);
    let actor = valid_actors(actors).find(|actor| {
        let name = actor.name.to_lowercase();
        name != "system" && cleaned.contains(&name)
    });
    let has_action_word = USER_ACTION_WORDS.iter().any(|word| cleaned.contains(word));
    if actor.is_none() && !has_action_word {
        return None;
    }

    if let Some(actor) = actor {
        let name = actor.name.to_lowercase();
        let index = cleaned.find(&name)?;
        let mut after = cleaned[index + name.len()..].trim().to_string();
        for modal in MODALS {
            if let Some(rest) = after.strip_prefix(&format!("{modal} ")) {
                after = rest.to_string();
                break;
            }
        }
        for (variant, base) in USER_VERB_FORMS {
            if after.starts_with(variant) {
                after = after.replacen(variant, base, 1);
                break;
            }
        }
        if let Some(rest) = after.strip_prefix("on ") {
            after = rest.to_string();
        }
        if after.is_empty() {
            return None;
        }
        let response = format!("provide {name} with the ability to {after}");
        let text = format!("The system shall {response}.");
        return Some(StructuredStatement {
            text,
            actor: Some(actor.name.clone()),
            trigger: None,
            response,
            template: TemplateKind::UserAction,
        });
    }

    let action = strip_subject(cleaned);
    if action.is_empty() {
        return None;
    }
    let response = format!("provide users with the ability to {action}");
    let text = format!("The system shall {response}.");
    Some(StructuredStatement {
        text,
        actor: None,
        trigger: None,
        response,
        template: TemplateKind::UserAction,
    })
}

fn modal_template(lower: &str) -> Option<StructuredStatement> {
    for modal in MODALS {
        if let Some(index) = find_word(lower, modal) {
            let after = lower[index + modal.len()..].trim();
            if after.is_empty() {
                continue;
            }
            let response = after.to_string();
            let text = format!("The system shall {response}.");
            return Some(StructuredStatement {
                text,
                actor: None,
                trigger: None,
                response,
                template: TemplateKind::Modal,
            });
        }
    }
    None
}

fn state_template(lower: &str) -> Option<StructuredStatement> {
    if !STATE_WORDS.iter().any(|word| lower.contains(word)) {
        return None;
    }
    let response = format!("ensure that {lower}");
    let text = format!("The system shall {response}.");
    Some(StructuredStatement {
        text,
        actor: None,
        trigger: None,
        response,
        template: TemplateKind::State,
    })
}

fn validation_template(lower: &str) -> Option<StructuredStatement> {
    for word in VALIDATION_WORDS {
        if let Some(index) = lower.find(word) {
            let mut object = String::new();
            object.push_str(lower[..index].trim());
            let after = lower[index + word.len()..]
                .trim_start_matches('s')
                .trim();
            if !after.is_empty() {
                if !object.is_empty() {
                    object.push(' ');
                }
                object.push_str(after);
            }
            if object.is_empty() {
                return None;
            }
            let response = format!("{word} {object}");
            let text = format!("The system shall {response}.");
            return Some(StructuredStatement {
                text,
                actor: None,
                trigger: None,
                response,
                template: TemplateKind::Validation,
            });
        }
    }
    None
}

/// Removes a leading `if` from a condition clause.
fn strip_if(clause: &str) -> String {
    let trimmed = clause.trim();
    trimmed
        .strip_prefix("if ")
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Strips a leading `the <subject>` so the remaining clause starts at the
/// verb.
fn strip_subject(lower: &str) -> String {
    let mut rest = lower.trim().strip_prefix("the ").unwrap_or(lower).trim();
    for subject in ["system", "member", "user", "librarian", "administrator", "guest"] {
        if let Some(tail) = rest.strip_prefix(subject) {
            rest = tail.trim();
            break;
        }
    }
    rest.to_string()
}

/// Removes a leading `the system shall/should/...` from a response clause.
fn clean_system_prefix(clause: &str) -> String {
    let mut rest = clause.trim();
    rest = rest.strip_prefix("the ").unwrap_or(rest);
    rest = rest.strip_prefix("system").unwrap_or(rest).trim_start();
    for modal in MODALS {
        if let Some(tail) = rest.strip_prefix(modal) {
            rest = tail.trim_start();
            break;
        }
    }
    rest.trim().to_string()
}

/// Finds a whole-word occurrence, returning its byte offset.
fn find_word(text: &str, word: &str) -> Option<usize> {
    let mut start = 0;
    while let Some(rel) = text[start..].find(word) {
        let index = start + rel;
        let before_ok = index == 0
            || !text[..index]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let after = index + word.len();
        let after_ok = after >= text.len()
            || !text[after..].chars().next().is_some_and(char::is_alphanumeric);
        if before_ok && after_ok {
            return Some(index);
        }
        start = index + word.len();
    }
    None
}

fn valid_actors(actors: &[Actor]) -> impl Iterator<Item = &Actor> {
    actors
        .iter()
        .filter(|actor| actor.class == ActorClass::Valid)
}

fn find_actor(clause: &str, actors: &[Actor]) -> Option<String> {
    valid_actors(actors)
        .find(|actor| clause.contains(&actor.name.to_lowercase()))
        .map(|actor| actor.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library_actors() -> Vec<Actor> {
        vec![
            Actor::new("Member", ActorClass::Valid),
            Actor::new("Librarian", ActorClass::Valid),
        ]
    }

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn conditional_sentence_maps_to_if_then() {
        let statement =
            rewrite_sentence("if the password is wrong then the system displays an error.", &library_actors())
                .expect("conditional matched");
        assert_eq!(statement.template, TemplateKind::Conditional);
        assert_eq!(
            statement.text,
            "If the password is wrong, then the system shall displays an error."
        );
        assert_eq!(statement.trigger.as_deref(), Some("the password is wrong"));
    }

    #[test]
    fn when_sentence_keeps_existing_system_clause() {
        let statement = rewrite_sentence(
            "when member submits password, the system shall validate it.",
            &library_actors(),
        )
        .expect("when matched");
        assert_eq!(statement.template, TemplateKind::WhenTrigger);
        assert_eq!(
            statement.text,
            "When member submits password, the system shall validate it."
        );
        assert_eq!(statement.actor.as_deref(), Some("Member"));
    }

    #[test]
    fn capability_sentence_uses_base_verb() {
        let statement =
            rewrite_sentence("the system displays the home page.", &library_actors())
                .expect("capability matched");
        assert_eq!(statement.template, TemplateKind::SystemCapability);
        assert_eq!(statement.text, "The system shall be able to display the home page.");
    }

    #[test]
    fn user_action_names_the_actor() {
        let statement =
            rewrite_sentence("the member clicks the login button.", &library_actors())
                .expect("user action matched");
        assert_eq!(statement.template, TemplateKind::UserAction);
        assert_eq!(statement.actor.as_deref(), Some("Member"));
        assert_eq!(
            statement.text,
            "The system shall provide member with the ability to click the login button."
        );
    }

    #[test]
    fn modal_sentence_is_rewritten() {
        let statement = rewrite_sentence(
            "the application must send a reminder before the due date.",
            &library_actors(),
        )
        .expect("modal matched");
        assert_eq!(statement.template, TemplateKind::Modal);
        assert_eq!(
            statement.text,
            "The system shall send a reminder before the due date."
        );
    }

    #[test]
    fn unmatched_sentence_yields_none() {
        assert!(rewrite_sentence("the fine amounts to five dollars.", &library_actors()).is_none());
    }

    #[test]
    fn drop_policy_discards_gaps_silently() {
        let input = sentences(&["the fine amounts to five dollars."]);
        let output = rewrite(&input, &library_actors(), GapPolicy::Drop);
        assert!(output.statements.is_empty());
        assert!(output.flagged.is_empty());
    }

    #[test]
    fn flag_policy_records_gaps() {
        let input = sentences(&["the fine amounts to five dollars."]);
        let output = rewrite(&input, &library_actors(), GapPolicy::Flag);
        assert!(output.statements.is_empty());
        assert_eq!(output.flagged, input);
    }

    #[test]
    fn duplicate_statements_are_removed() {
        let input = sentences(&[
            "the member clicks the login button.",
            "the member clicks the login button.",
        ]);
        let output = rewrite(&input, &library_actors(), GapPolicy::Drop);
        assert_eq!(output.statements.len(), 1);
    }

    #[test]
    fn rewriting_is_deterministic() {
        let input = sentences(&[
            "when the member returns the book, the system shall update the record.",
            "the system validates the password.",
        ]);
        let first = rewrite(&input, &library_actors(), GapPolicy::Flag);
        let second = rewrite(&input, &library_actors(), GapPolicy::Flag);
        assert_eq!(first.statement_texts(), second.statement_texts());
        assert_eq!(first.flagged, second.flagged);
    }
}
