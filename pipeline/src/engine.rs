use chrono::Utc;
use uuid::Uuid;

use snlgen_actors::{detect_domain, extract, resolve_conflicts, ActorClass};
use snlgen_comparison::compare;
use snlgen_generator::{CandidateGenerator, CandidateSet};
use snlgen_rupp::rewrite;
use snlgen_textprep::{expand_compounds, preprocess, split_sentences, text_stats};

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::record::SubmissionRecord;

/// Minimum length of a submission, in characters after trimming.
pub const MIN_SUBMISSION_LEN: usize = 10;

/// Processes one submission end to end.
///
/// Validation failures abort before any analysis runs. A generator failure
/// does not: the candidate set degrades to empty and the failure is recorded
/// as a warning, so the rule-based half of the record is always produced.
///
/// A retry is a plain re-invocation with the user's clarification passed as
/// `feedback`; no retry state is kept here.
///
/// # Errors
/// Returns [`PipelineError::Validation`] when the text is empty or shorter
/// than [`MIN_SUBMISSION_LEN`] characters.
pub async fn process(
    text: &str,
    title: &str,
    generator: &dyn CandidateGenerator,
    feedback: Option<&str>,
    config: &PipelineConfig,
) -> Result<SubmissionRecord, PipelineError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::Validation(
            "submission text is empty".to_string(),
        ));
    }
    if trimmed.chars().count() < MIN_SUBMISSION_LEN {
        return Err(PipelineError::Validation(format!(
            "submission text must be at least {MIN_SUBMISSION_LEN} characters"
        )));
    }

    let mut warnings = Vec::new();
    let stats = text_stats(text);
    let cleaned = preprocess(text);
    let sentences = expand_compounds(&split_sentences(&cleaned));
    // Actor extraction scans the raw sentences: the classification
    // heuristics depend on the original casing, which preprocess destroys.
    let raw_sentences = expand_compounds(&split_sentences(text));

    let profile = detect_domain(&sentences, config.domain_hint);
    let mut actors = resolve_conflicts(&extract(&raw_sentences, profile), text);
    if actors.len() > config.max_actors {
        warnings.push(format!(
            "actor list truncated from {} to {}",
            actors.len(),
            config.max_actors
        ));
        actors.truncate(config.max_actors);
    }

    let rupp = rewrite(&sentences, &actors, config.gap_policy);

    let ai = match generator.produce(text, feedback).await {
        Ok(set) => set,
        Err(err) => {
            warnings.push(format!("candidate generation failed: {err}"));
            CandidateSet::default()
        }
    };

    let actor_names: Vec<String> = actors
        .iter()
        .filter(|actor| actor.class == ActorClass::Valid)
        .map(|actor| actor.name.clone())
        .collect();
    let comparison = compare(
        &rupp.statement_texts(),
        &ai.statements,
        text,
        &actor_names,
        config.similarity_threshold,
    );

    Ok(SubmissionRecord {
        id: Uuid::new_v4(),
        title: title.to_string(),
        created_at: Utc::now(),
        original_text: text.to_string(),
        stats,
        domain: profile.domain,
        actors,
        rupp,
        ai,
        comparison,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use snlgen_actors::Domain;
    use snlgen_generator::MockGenerator;

    struct FailingGenerator;

    #[async_trait]
    impl CandidateGenerator for FailingGenerator {
        async fn produce(&self, _text: &str, _feedback: Option<&str>) -> anyhow::Result<CandidateSet> {
            anyhow::bail!("upstream service unavailable")
        }
    }

    fn library_config() -> PipelineConfig {
        PipelineConfig {
            domain_hint: Some(Domain::Library),
            ..PipelineConfig::default()
        }
    }

    #[tokio::test]
    async fn short_text_is_rejected_before_processing() {
        let result = process("Too short", "t", &MockGenerator, None, &PipelineConfig::default()).await;
        assert!(matches!(result, Err(PipelineError::Validation(_))));
    }

    #[tokio::test]
    async fn empty_text_is_rejected() {
        let result = process("   ", "t", &MockGenerator, None, &PipelineConfig::default()).await;
        assert!(matches!(result, Err(PipelineError::Validation(_))));
    }

    #[tokio::test]
    async fn library_submission_produces_a_full_record() {
        let text = "The Member clicks the login button. The system validates the password.";
        let record = process(text, "Library case", &MockGenerator, None, &library_config())
            .await
            .unwrap();
        assert_eq!(record.domain, Domain::Library);
        assert!(record
            .actors
            .iter()
            .any(|actor| actor.name == "Member" && actor.class == ActorClass::Valid));
        assert!(!record.rupp.statements.is_empty());
        assert!(!record.ai.statements.is_empty());
        assert!(record.warnings.is_empty());
        assert_eq!(record.stats.sentence_count, 2);
    }

    #[tokio::test]
    async fn classified_actors_survive_to_the_record() {
        let text = "The Librarian opens the Database to update records. \
                    The Member returns the Book before the due date.";
        let record = process(text, "classifications", &MockGenerator, None, &library_config())
            .await
            .unwrap();
        let class_of = |name: &str| {
            record
                .actors
                .iter()
                .find(|actor| actor.name == name)
                .map(|actor| actor.class)
        };
        assert_eq!(class_of("Librarian"), Some(ActorClass::Valid));
        assert_eq!(class_of("Member"), Some(ActorClass::Valid));
        assert_eq!(class_of("Database"), Some(ActorClass::Incorrect));
        assert_eq!(class_of("Book"), Some(ActorClass::Overspecified));
    }

    #[tokio::test]
    async fn generator_failure_degrades_to_a_warning() {
        let text = "The Member clicks the login button. The system validates the password.";
        let record = process(text, "degraded", &FailingGenerator, None, &library_config())
            .await
            .unwrap();
        assert!(record.ai.statements.is_empty());
        assert_eq!(record.warnings.len(), 1);
        assert!(record.warnings[0].contains("candidate generation failed"));
        assert_eq!(
            record.comparison.categorization.missing.len(),
            record.rupp.statements.len()
        );
    }

    #[tokio::test]
    async fn processing_is_deterministic_apart_from_identity_fields() {
        let text = "The Member clicks the login button. The system validates the password.";
        let first = process(text, "a", &MockGenerator, None, &library_config())
            .await
            .unwrap();
        let second = process(text, "a", &MockGenerator, None, &library_config())
            .await
            .unwrap();
        assert_eq!(first.actors, second.actors);
        assert_eq!(first.rupp.statements, second.rupp.statements);
        assert_eq!(first.ai.statements, second.ai.statements);
    }
}
