//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A cell on the board, addressed by row then column.
///
/// A move is a coordinate; it is only legal relative to a board on which
/// that cell is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// A move is the coordinate a stone is placed on.
pub type Move = Coord;

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta, returning `None` if the result leaves
    /// a `size`×`size` board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, size: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < size && col < size).then_some(Coord { row, col })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
