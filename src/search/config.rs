//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Search configuration parameters.
///
/// The boolean flags select between the search variants: plain minimax,
/// alpha-beta, and alpha-beta with path-length and horizon tie-break data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched below each root child (default: 4).
    pub depth: u32,

    /// Initial alpha bound. Must be below every reachable value.
    pub alpha: i8,

    /// Initial beta bound. Must be above every reachable value.
    pub beta: i8,

    /// Player whose wins score +1.
    pub maximizing: Player,

    /// Random seed for openings and tie-breaks.
    /// Same seed produces the same sequence of decisions.
    pub seed: u64,

    /// Stop scanning siblings once beta <= alpha.
    pub alpha_beta: bool,

    /// Report winning path lengths for tie-breaking.
    pub track_path_length: bool,

    /// Report the remaining depth at which terminals were found.
    pub track_depth: bool,

    /// Narrow move generation to cells near existing stones.
    pub use_move_heuristic: bool,

    /// Evaluate root children on the rayon thread pool.
    pub parallel_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            alpha: -2,
            beta: 2,
            maximizing: Player::Black,
            seed: 42,
            alpha_beta: true,
            track_path_length: true,
            track_depth: true,
            use_move_heuristic: true,
            parallel_root: false,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a different maximizing player.
    pub fn with_maximizing(mut self, player: Player) -> Self {
        self.maximizing = player;
        self
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    /// Enable or disable path-length tracking.
    pub fn with_path_length(mut self, enabled: bool) -> Self {
        self.track_path_length = enabled;
        self
    }

    /// Enable or disable horizon tracking.
    pub fn with_depth_tracking(mut self, enabled: bool) -> Self {
        self.track_depth = enabled;
        self
    }

    /// Enable or disable heuristic move generation.
    pub fn with_move_heuristic(mut self, enabled: bool) -> Self {
        self.use_move_heuristic = enabled;
        self
    }

    /// Enable or disable parallel evaluation of root children.
    pub fn with_parallel_root(mut self, enabled: bool) -> Self {
        self.parallel_root = enabled;
        self
    }
}
