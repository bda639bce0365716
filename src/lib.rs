//! # polyline
//!
//! Adversarial search engine for Polyline, a two-player connection game on
//! an N×N hex board. Black tries to join the top and bottom edges with a
//! chain of stones, White the left and right edges.
//!
//! ## Design Principles
//!
//! 1. **Rules as an oracle**: the search only queries a `RulesOracle`
//!    for moves, adjacency and completed paths. It never mutates it.
//!
//! 2. **One configurable search**: plain minimax, alpha-beta, and the
//!    tie-break tracking variants are flags on `SearchConfig`.
//!
//! 3. **Deterministic given a seed**: every random choice goes through
//!    `GameRng`.
//!
//! ## Architecture
//!
//! - **Search tree**: built fresh for every decision. Only the root's
//!   children are kept; deeper nodes are dropped once evaluated. Boards are
//!   persistent vectors, so children are cheap snapshots.
//!
//! - **Per-decision statistics**: timing and node counts come back in each
//!   `Decision`; there is no global accumulator.
//!
//! ## Modules
//!
//! - `core`: players, coordinates, boards, RNG
//! - `rules`: `RulesOracle` trait and the hex rules
//! - `search`: move generation, minimax evaluation, move selection
//! - `strategy`: the per-turn `Strategy` facade
//! - `play`: game driver and championship loop

pub mod core;
pub mod error;
pub mod play;
pub mod rules;
pub mod search;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Coord, GameRng, Move, Player, PlayerMap};

pub use crate::error::{Error, Result};

pub use crate::rules::{HexRules, RulesOracle, WinningPath};

pub use crate::search::{
    Evaluation, FavorSearcher, Horizon, LeafEvaluator, PathLength, SearchConfig, SearchNode,
    SearchStats,
};

pub use crate::strategy::{Decision, DecisionKind, Strategy, StrategyKind};

pub use crate::play::{championship, play_game, ChampionshipSummary, GameRecord};
