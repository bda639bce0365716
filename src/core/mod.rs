//! Core types: players, coordinates, boards, and RNG.
//!
//! These are game-level building blocks with no knowledge of search.

pub mod board;
pub mod coord;
pub mod player;
pub mod rng;

pub use board::{Board, Cell, MAX_BOARD_SIZE};
pub use coord::{Coord, Move};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
