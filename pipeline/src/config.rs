use serde::{Deserialize, Serialize};

use snlgen_actors::Domain;
use snlgen_comparison::DEFAULT_THRESHOLD;
use snlgen_rupp::GapPolicy;

/// Upper bound on actors kept after conflict resolution.
pub const DEFAULT_MAX_ACTORS: usize = 10;

/// Tunable processing knobs, loadable from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Caller-supplied domain override; detection runs when absent.
    pub domain_hint: Option<Domain>,
    /// How sentences matching no template are handled.
    pub gap_policy: GapPolicy,
    /// Minimum similarity for two statements to match.
    pub similarity_threshold: f64,
    /// Maximum number of actors kept on a record.
    pub max_actors: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            domain_hint: None,
            gap_policy: GapPolicy::default(),
            similarity_threshold: DEFAULT_THRESHOLD,
            max_actors: DEFAULT_MAX_ACTORS,
        }
    }
}
