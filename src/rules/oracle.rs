//! Rules oracle trait.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Coord, Move, Player};

/// A completed connection between a player's two edges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningPath {
    /// The player who owns the path.
    pub player: Player,
    /// Stones of the path, from the player's start edge to its goal edge.
    pub nodes: Vec<Coord>,
}

impl WinningPath {
    /// Number of stones in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Rules oracle.
///
/// Every query is a pure function of its arguments. The engine may share
/// one oracle across turns and across threads.
///
/// ## Implementation Notes
///
/// - `possible_moves`: every empty cell, row-major
/// - `neighbors`: order matters, it drives move-generation order
/// - `is_game_over`: `None` while `player` has no completed path
/// - `axis_step`: must agree with the edges `is_game_over` connects
pub trait RulesOracle {
    /// All legal moves on `board`.
    fn possible_moves(&self, board: &Board) -> Vec<Move> {
        board.empty_cells().collect()
    }

    /// Cells adjacent to `coord` on `board`.
    fn neighbors(&self, board: &Board, coord: Coord) -> SmallVec<[Coord; 6]>;

    /// True if `coord` is on the board and unoccupied.
    fn is_cell_free(&self, board: &Board, coord: Coord) -> bool {
        board.is_free(coord)
    }

    /// The winning path of `player` on `board`, if it has one.
    fn is_game_over(&self, player: Player, board: &Board) -> Option<WinningPath>;

    /// Unit (row, column) step along `player`'s winning axis. Move
    /// generation sweeps along it. Defaults to Black joining rows and
    /// White joining columns.
    fn axis_step(&self, player: Player) -> (isize, isize) {
        match player {
            Player::Black => (1, 0),
            Player::White => (0, 1),
        }
    }

    /// The winning path of whichever player has one.
    fn winner(&self, board: &Board) -> Option<WinningPath> {
        Player::ALL
            .into_iter()
            .find_map(|player| self.is_game_over(player, board))
    }
}
