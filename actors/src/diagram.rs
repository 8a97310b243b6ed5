use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::profile::DENY_LIST;

/// Count statistics attached to a verification result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationStats {
    /// Number of identified actors checked.
    pub total_identified: usize,
    /// Actors found in the diagram sources.
    pub present_count: usize,
    /// Actors absent from every source.
    pub missing_count: usize,
    /// Diagram entities never identified as actors.
    pub overspecified_count: usize,
    /// Actor coverage as a percentage.
    pub coverage_percentage: f64,
}

/// Result of cross-checking identified actors against diagram markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramVerification {
    /// Identified actors found in at least one diagram source.
    pub present: Vec<String>,
    /// Identified actors absent from every diagram source.
    pub missing: Vec<String>,
    /// Diagram-declared entities that were never identified as actors.
    pub overspecified_classes: Vec<String>,
    /// Overspecified entities matching deny-listed generic terms.
    pub incorrect_classes: Vec<String>,
    /// Count statistics.
    pub stats: VerificationStats,
    /// Coverage score in [0, 1]; 0 when no actors were identified.
    pub overall_score: f64,
}

/// Extracts entity names declared via `class`, `participant`, or `actor`
/// keywords from diagram markup. The markup dialect is otherwise opaque.
#[must_use]
pub fn declared_entities(source: &str) -> Vec<String> {
    let pattern = Regex::new(r#"(?m)\b(?:class|participant|actor)\s+(?:"([^"]+)"|([A-Za-z0-9_]+))"#)
        .unwrap();
    let mut entities = Vec::new();
    for captures in pattern.captures_iter(source) {
        let name = captures
            .get(1)
            .or_else(|| captures.get(2))
            .map(|m| m.as_str().trim().to_string());
        if let Some(name) = name {
            if name.len() > 2 && !entities.contains(&name) {
                entities.push(name);
            }
        }
    }
    entities
}

/// Cross-checks identified actor names against one or more diagram sources.
///
/// An actor counts as `present` when its name is declared in at least one
/// source (case-insensitive). Declared entities with no matching actor are
/// `overspecified_classes`; those that additionally contain a deny-listed
/// generic term are also reported as `incorrect_classes`. The overall score
/// is `present / total_identified`, 0 when no actors were identified.
#[must_use]
pub fn verify(actor_names: &[String], sources: &[&str]) -> DiagramVerification {
    let declared: Vec<String> = sources
        .iter()
        .flat_map(|source| declared_entities(source))
        .fold(Vec::new(), |mut acc, name| {
            if !acc.contains(&name) {
                acc.push(name);
            }
            acc
        });
    let declared_lower: Vec<String> = declared.iter().map(|name| name.to_lowercase()).collect();

    let mut present = Vec::new();
    let mut missing = Vec::new();
    for actor in actor_names {
        if declared_lower.contains(&actor.to_lowercase()) {
            present.push(actor.clone());
        } else {
            missing.push(actor.clone());
        }
    }

    let actor_lower: Vec<String> = actor_names.iter().map(|name| name.to_lowercase()).collect();
    let overspecified_classes: Vec<String> = declared
        .iter()
        .filter(|entity| !actor_lower.contains(&entity.to_lowercase()))
        .cloned()
        .collect();
    let incorrect_classes: Vec<String> = overspecified_classes
        .iter()
        .filter(|entity| {
            let lower = entity.to_lowercase();
            DENY_LIST.iter().any(|term| lower.contains(term))
        })
        .cloned()
        .collect();

    let total = actor_names.len();
    #[allow(clippy::cast_precision_loss)]
    let overall_score = if total == 0 {
        0.0
    } else {
        present.len() as f64 / total as f64
    };
    let stats = VerificationStats {
        total_identified: total,
        present_count: present.len(),
        missing_count: missing.len(),
        overspecified_count: overspecified_classes.len(),
        coverage_percentage: overall_score * 100.0,
    };

    DiagramVerification {
        present,
        missing,
        overspecified_classes,
        incorrect_classes,
        stats,
        overall_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASS_DIAGRAM: &str = "@startuml\nclass PaymentSystem {\n  +confirm()\n}\nclass Document {\n  +title\n}\n@enduml";
    const SEQUENCE_DIAGRAM: &str = "@startuml\nactor Member\nparticipant \"Login Service\"\n@enduml";

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn identified_actor_declared_in_diagram_is_present() {
        let result = verify(&names(&["PaymentSystem"]), &[CLASS_DIAGRAM]);
        assert_eq!(result.present, vec!["PaymentSystem"]);
        assert!(result.missing.is_empty());
        assert!((result.overall_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn undeclared_entity_is_overspecified_not_incorrect() {
        let result = verify(&names(&["PaymentSystem"]), &[CLASS_DIAGRAM]);
        assert_eq!(result.overspecified_classes, vec!["Document"]);
        assert!(result.incorrect_classes.is_empty());
    }

    #[test]
    fn deny_listed_entity_is_also_incorrect() {
        let result = verify(&names(&["Member"]), &[SEQUENCE_DIAGRAM]);
        assert_eq!(result.incorrect_classes, vec!["Login Service"]);
    }

    #[test]
    fn absent_actor_is_missing() {
        let result = verify(&names(&["Member", "Librarian"]), &[SEQUENCE_DIAGRAM]);
        assert_eq!(result.present, vec!["Member"]);
        assert_eq!(result.missing, vec!["Librarian"]);
        assert!((result.overall_score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_actor_set_scores_zero() {
        let result = verify(&[], &[CLASS_DIAGRAM]);
        assert!((result.overall_score).abs() < f64::EPSILON);
        assert!((result.stats.coverage_percentage).abs() < f64::EPSILON);
    }

    #[test]
    fn actors_are_checked_across_all_sources() {
        let result = verify(
            &names(&["PaymentSystem", "Member"]),
            &[CLASS_DIAGRAM, SEQUENCE_DIAGRAM],
        );
        assert_eq!(result.present.len(), 2);
    }
}
