//! Constraint solver configuration types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::zones::SolverConfig;
use crate::zones::solver::{
    DEFAULT_ADJACENCY_THRESHOLD, DEFAULT_MAX_CLEANUP_PASSES, DEFAULT_MAX_STEAL_ROUNDS,
};

/// Tunables for minimum-size enforcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SolverSettings {
    /// Largest separation, in pixels, at which two zones count as neighbours.
    /// Never smaller than the zone padding in effect.
    pub adjacency_threshold: f64,

    /// Maximum pairwise stealing rounds per axis.
    pub max_steal_rounds: usize,

    /// Maximum overlap cleanup passes.
    pub max_cleanup_passes: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            adjacency_threshold: DEFAULT_ADJACENCY_THRESHOLD,
            max_steal_rounds: DEFAULT_MAX_STEAL_ROUNDS,
            max_cleanup_passes: DEFAULT_MAX_CLEANUP_PASSES,
        }
    }
}

impl SolverSettings {
    /// Builds the solver configuration for rectangles resolved with `inner_gap`.
    #[must_use]
    pub fn solver_config(&self, inner_gap: f64) -> SolverConfig {
        SolverConfig {
            inner_gap,
            adjacency_threshold: self.adjacency_threshold,
            max_steal_rounds: self.max_steal_rounds,
            max_cleanup_passes: self.max_cleanup_passes,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_solver_defaults() {
        let settings = SolverSettings::default();
        assert_eq!(settings.solver_config(0.0), SolverConfig::default());
    }

    #[test]
    fn test_solver_config_carries_inner_gap() {
        let settings: SolverSettings =
            serde_json::from_str(r#"{ "adjacencyThreshold": 40, "maxStealRounds": 2 }"#).unwrap();
        let config = settings.solver_config(12.0);
        assert_eq!(config.inner_gap, 12.0);
        assert_eq!(config.adjacency_threshold, 40.0);
        assert_eq!(config.max_steal_rounds, 2);
        assert_eq!(config.max_cleanup_passes, DEFAULT_MAX_CLEANUP_PASSES);
    }
}
