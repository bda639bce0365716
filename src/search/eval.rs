//! Evaluation tuples and the depth cut-off evaluator.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// Shortest qualifying winning path seen in a subtree.
///
/// `NoBound` orders above every length, so folding with `min` ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PathLength {
    Length(u32),
    NoBound,
}

/// How early a subtree was resolved.
///
/// `Resolved(d)` records the remaining depth at which a terminal was
/// found; a larger value means the win or loss was settled closer to the
/// root. `CutOff` marks a branch that only reached the search horizon and
/// orders below every resolved value, so folding with `max` prefers
/// resolved branches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Horizon {
    CutOff,
    Resolved(u32),
}

/// Result of evaluating one subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    /// Minimax value in {-1, 0, 1}; positive favours the maximizing player.
    pub value: i8,

    /// Secondary tie-break: shortest winning path.
    pub path_length: PathLength,

    /// Secondary tie-break: earliest resolution.
    pub horizon: Horizon,
}

impl Evaluation {
    /// A leaf scored at the search horizon.
    #[must_use]
    pub const fn cut_off(value: i8) -> Self {
        Self {
            value,
            path_length: PathLength::NoBound,
            horizon: Horizon::CutOff,
        }
    }
}

/// Static evaluation used when the depth limit is hit before any player
/// has won.
pub trait LeafEvaluator: Send + Sync {
    /// Score `board` for a search started by `searcher`.
    fn evaluate(&self, board: &Board, searcher: Player, maximizing: Player) -> i8;
}

/// Placeholder evaluation: every unresolved leaf is assumed to favour the
/// player who started the search.
///
/// There is no positional knowledge here. Unresolved lines score +1 when
/// the searcher is the maximizing player and -1 otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct FavorSearcher;

impl LeafEvaluator for FavorSearcher {
    fn evaluate(&self, _board: &Board, searcher: Player, maximizing: Player) -> i8 {
        if searcher == maximizing {
            1
        } else {
            -1
        }
    }
}
