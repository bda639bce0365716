//! N×N board snapshots.
//!
//! Cells live in an `im::Vector` so that deriving a child board from a
//! parent is an O(1) clone plus a single O(log n) update. A search tree
//! holds thousands of snapshots that share almost all of their structure.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{Coord, Player};
use crate::error::{Error, Result};

/// Largest supported side length.
pub const MAX_BOARD_SIZE: usize = 26;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Stone(p) => p.symbol(),
        }
    }
}

/// A board position.
///
/// Treated as immutable once handed to the search: `place` returns a new
/// board and leaves `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vector<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = Error;

    fn try_from(raw: RawBoard) -> Result<Self> {
        let board = Board::new(raw.size)?;
        if raw.cells.len() != raw.size * raw.size {
            return Err(Error::ParseBoard(format!(
                "{} cells for a {size}x{size} board",
                raw.cells.len(),
                size = raw.size
            )));
        }
        Ok(Board {
            cells: raw.cells,
            ..board
        })
    }
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(Error::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: std::iter::repeat(Cell::Empty).take(size * size).collect(),
        })
    }

    /// Side length.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Cell at `coord`, or `None` when off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord)
            .then(|| self.cells[coord.row * self.size + coord.col])
    }

    /// True if `coord` is on the board and empty.
    #[must_use]
    pub fn is_free(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Empty)
    }

    /// Derive the board that results from `player` placing a stone on `coord`.
    pub fn place(&self, coord: Coord, player: Player) -> Result<Board> {
        match self.get(coord) {
            None => Err(Error::OutOfBounds {
                coord,
                size: self.size,
            }),
            Some(Cell::Stone(_)) => Err(Error::CellOccupied { coord }),
            Some(Cell::Empty) => {
                let mut next = self.clone();
                next.cells.set(coord.row * self.size + coord.col, Cell::Stone(player));
                Ok(next)
            }
        }
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size * size).map(move |i| Coord::new(i / size, i % size))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|&c| self.is_free(c))
    }

    /// Cells holding `player`'s stones, in row-major order.
    pub fn stones(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        self.coords()
            .filter(move |&c| self.get(c) == Some(Cell::Stone(player)))
    }

    /// True when no stone has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Number of stones on the board.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| self.cells[row * self.size + col].symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = Error;

    /// Parse a square grid of `.`, `B` and `W`, one row per line.
    /// Whitespace inside a row and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|r| !r.is_empty())
            .collect();

        let size = rows.len();
        let mut board = Board::new(size)?;
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != size {
                return Err(Error::ParseBoard(format!(
                    "row {row} has {} cells, expected {size}",
                    chars.len()
                )));
            }
            for (col, ch) in chars.iter().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    'B' | 'b' => Cell::Stone(Player::Black),
                    'W' | 'w' => Cell::Stone(Player::White),
                    other => {
                        return Err(Error::ParseBoard(format!(
                            "unexpected '{other}' at {}",
                            Coord::new(row, col)
                        )))
                    }
                };
                board.cells.set(row * size + col, cell);
            }
        }
        Ok(board)
    }
}
