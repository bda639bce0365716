//! Error type shared by the board, search, and strategy layers.

use thiserror::Error;

use crate::core::Coord;

/// Errors raised by the engine.
///
/// All of these are precondition failures; nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinate {coord} is outside a {size}x{size} board")]
    OutOfBounds { coord: Coord, size: usize },

    #[error("cell {coord} is already occupied")]
    CellOccupied { coord: Coord },

    #[error("invalid board size {0}: expected 1..=26")]
    InvalidBoardSize(usize),

    #[error("cannot parse board: {0}")]
    ParseBoard(String),

    #[error("invalid search state: {0}")]
    InvalidState(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
