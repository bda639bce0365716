//! Adversarial search for the connection game.
//!
//! ## Overview
//!
//! One configurable minimax search replaces the separate plain-minimax and
//! alpha-beta variants:
//!
//! - **Move generation**: all empty cells, or a proximity heuristic that
//!   bounds the branching factor well below N²
//! - **Evaluation**: depth-limited minimax with optional alpha-beta
//!   pruning, folding path-length and horizon tie-break data
//! - **Selection**: a tie-break cascade over the root children
//!
//! ## Usage
//!
//! ```rust
//! use polyline::core::{Board, GameRng, Player};
//! use polyline::rules::HexRules;
//! use polyline::search::{evaluate_root, select_move, FavorSearcher, SearchConfig, SearchNode};
//!
//! let board: Board = ".B.\n.B.\n...".parse().unwrap();
//! let config = SearchConfig::default().with_depth(1);
//!
//! let mut root = SearchNode::root(&HexRules, board);
//! let (evals, _stats) =
//!     evaluate_root(&HexRules, &config, &FavorSearcher, &mut root, Player::Black).unwrap();
//!
//! let mv = select_move(
//!     &root.child_moves(),
//!     &evals,
//!     Player::Black,
//!     config.maximizing,
//!     &mut GameRng::new(config.seed),
//! )
//! .unwrap();
//! assert_eq!(mv.row, 2);
//! ```

pub mod config;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod node;
pub mod select;
pub mod stats;

pub use config::SearchConfig;
pub use engine::{evaluate_root, Searcher};
pub use eval::{Evaluation, FavorSearcher, Horizon, LeafEvaluator, PathLength};
pub use movegen::{generate_moves, heuristic_moves, Generated};
pub use node::SearchNode;
pub use select::{candidates, select_move};
pub use stats::SearchStats;
