//! Per-turn strategy facade.
//!
//! A `Strategy` turns a board and the player to move into exactly one
//! legal move, dispatching to an opening set, the search engine, or a
//! uniform random choice.

pub mod facade;
pub mod opening;

pub use facade::{Decision, DecisionKind, Strategy, StrategyKind};
pub use opening::opening_moves;
