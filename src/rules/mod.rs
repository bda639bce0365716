//! Rules oracle for the connection game.
//!
//! The search engine asks the oracle for:
//! - Legal moves on a board
//! - The adjacency relation between cells
//! - Whether a player has completed a winning path
//!
//! It never interprets the board topology itself.

pub mod hex;
pub mod oracle;

pub use hex::HexRules;
pub use oracle::{RulesOracle, WinningPath};
