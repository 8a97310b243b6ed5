use crate::extract::{Actor, ActorClass};

/// Groups of near-synonymous roles that usually describe the same actor.
const CONFLICT_GROUPS: &[&[&str]] = &[
    &["member", "customer", "client"],
    &["admin", "administrator", "manager"],
    &["librarian", "staff", "employee"],
    &["student", "pupil", "learner"],
    &["guest", "visitor", "anonymous"],
];

/// Collapses semantically conflicting valid actors (e.g. `User` vs `Member`)
/// to the variant mentioned most often in the source text. Frequency ties
/// keep the actor encountered first. Incorrect and overspecified actors are
/// left untouched.
#[must_use]
pub fn resolve_conflicts(actors: &[Actor], text: &str) -> Vec<Actor> {
    let lower_text = text.to_lowercase();
    let mut resolved: Vec<Actor> = Vec::new();
    let mut handled_groups: Vec<usize> = Vec::new();

    for actor in actors {
        if actor.class != ActorClass::Valid {
            resolved.push(actor.clone());
            continue;
        }
        let lower = actor.name.to_lowercase();
        let group_index = CONFLICT_GROUPS
            .iter()
            .position(|group| group.contains(&lower.as_str()));

        match group_index {
            Some(index) => {
                if handled_groups.contains(&index) {
                    continue;
                }
                handled_groups.push(index);
                let contenders: Vec<&Actor> = actors
                    .iter()
                    .filter(|candidate| {
                        candidate.class == ActorClass::Valid
                            && CONFLICT_GROUPS[index]
                                .contains(&candidate.name.to_lowercase().as_str())
                    })
                    .collect();
                // Strictly-greater comparison so frequency ties keep the
                // actor encountered first.
                let mut winner = actor;
                let mut best = occurrences(&lower_text, &lower);
                for candidate in contenders {
                    let count = occurrences(&lower_text, &candidate.name.to_lowercase());
                    if count > best {
                        winner = candidate;
                        best = count;
                    }
                }
                resolved.push(winner.clone());
            }
            None => resolved.push(actor.clone()),
        }
    }
    resolved
}

/// Counts whole-word occurrences of `word` in lowercased text.
fn occurrences(text: &str, word: &str) -> usize {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| *token == word)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_most_frequent_conflicting_actor() {
        let actors = vec![
            Actor::new("Customer", ActorClass::Valid),
            Actor::new("Member", ActorClass::Valid),
        ];
        let text = "The member borrows a book. The member returns it. The customer waits.";
        let resolved = resolve_conflicts(&actors, text);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "Member");
    }

    #[test]
    fn non_conflicting_actors_pass_through() {
        let actors = vec![
            Actor::new("Librarian", ActorClass::Valid),
            Actor::new("Book", ActorClass::Overspecified),
        ];
        let resolved = resolve_conflicts(&actors, "The librarian shelves the book.");
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn frequency_tie_keeps_first_seen() {
        let actors = vec![
            Actor::new("Admin", ActorClass::Valid),
            Actor::new("Manager", ActorClass::Valid),
        ];
        let resolved = resolve_conflicts(&actors, "The admin and the manager disagree.");
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "Admin");
    }

    #[test]
    fn resolution_is_idempotent() {
        let actors = vec![
            Actor::new("Customer", ActorClass::Valid),
            Actor::new("Client", ActorClass::Valid),
        ];
        let text = "The customer pays. The customer leaves.";
        let once = resolve_conflicts(&actors, text);
        let twice = resolve_conflicts(&once, text);
        assert_eq!(once, twice);
    }
}
