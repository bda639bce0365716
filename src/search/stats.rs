//! Search statistics returned with every decision.

use serde::{Deserialize, Serialize};

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes whose children were generated.
    pub nodes_expanded: u64,

    /// Calls to the recursive evaluator.
    pub nodes_evaluated: u64,

    /// Nodes where a player had already won.
    pub terminal_hits: u64,

    /// Leaves scored by the depth cut-off placeholder.
    pub horizon_cutoffs: u64,

    /// Sibling scans stopped early by alpha-beta.
    pub prunes: u64,

    /// Heuristic generation came up empty and fell back to all moves.
    pub heuristic_fallbacks: u64,

    /// Total time spent deciding (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add another set of counters into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes_expanded += other.nodes_expanded;
        self.nodes_evaluated += other.nodes_evaluated;
        self.terminal_hits += other.terminal_hits;
        self.horizon_cutoffs += other.horizon_cutoffs;
        self.prunes += other.prunes;
        self.heuristic_fallbacks += other.heuristic_fallbacks;
        self.time_us += other.time_us;
    }

    /// Calculate evaluated nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_evaluated as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
