//! Hex-topology rules for the Polyline game.
//!
//! The board is an N×N rhombus of hexagonal cells. Black owns the top and
//! bottom edges, White owns the left and right edges. A player wins once a
//! chain of their stones joins their two edges.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::oracle::{RulesOracle, WinningPath};
use crate::core::{Board, Cell, Coord, Player};

/// The six hex directions, in the order neighbours are reported.
const DIRECTIONS: [(isize, isize); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0)];

/// Standard hex connection rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct HexRules;

impl HexRules {
    pub fn new() -> Self {
        Self
    }

    /// Distance along `player`'s winning axis: the row for Black, the
    /// column for White.
    #[inline]
    #[must_use]
    pub fn axis_position(player: Player, coord: Coord) -> usize {
        match player {
            Player::Black => coord.row,
            Player::White => coord.col,
        }
    }
}

impl RulesOracle for HexRules {
    fn neighbors(&self, board: &Board, coord: Coord) -> SmallVec<[Coord; 6]> {
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| coord.offset(dr, dc, board.size()))
            .collect()
    }

    /// Breadth-first search from the player's start edge through their
    /// stones. The first goal-edge stone reached closes a shortest path.
    fn is_game_over(&self, player: Player, board: &Board) -> Option<WinningPath> {
        let last = board.size() - 1;
        let own = Cell::Stone(player);

        let mut parent: FxHashMap<Coord, Option<Coord>> = FxHashMap::default();
        let mut queue = VecDeque::new();

        for start in board
            .stones(player)
            .filter(|&c| Self::axis_position(player, c) == 0)
        {
            parent.insert(start, None);
            queue.push_back(start);
        }

        while let Some(current) = queue.pop_front() {
            if Self::axis_position(player, current) == last {
                let mut nodes = vec![current];
                let mut cursor = parent[&current];
                while let Some(prev) = cursor {
                    nodes.push(prev);
                    cursor = parent[&prev];
                }
                nodes.reverse();
                return Some(WinningPath { player, nodes });
            }

            for next in self.neighbors(board, current) {
                if board.get(next) == Some(own) && !parent.contains_key(&next) {
                    parent.insert(next, Some(current));
                    queue.push_back(next);
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_neighbors_interior_and_corner() {
        let b = Board::new(3).unwrap();
        let rules = HexRules;

        let mid = rules.neighbors(&b, Coord::new(1, 1));
        assert_eq!(mid.len(), 6);
        assert_eq!(mid[0], Coord::new(0, 1));
        assert_eq!(mid[1], Coord::new(0, 2));

        let corner = rules.neighbors(&b, Coord::new(0, 0));
        assert_eq!(corner.as_slice(), &[Coord::new(0, 1), Coord::new(1, 0)]);
    }

    #[test]
    fn test_black_connects_top_to_bottom() {
        let b = board(
            ". B .
             . B .
             B . .",
        );
        let path = HexRules.is_game_over(Player::Black, &b).unwrap();

        assert_eq!(path.player, Player::Black);
        assert_eq!(path.nodes, vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 0)]);
        assert!(HexRules.is_game_over(Player::White, &b).is_none());
    }

    #[test]
    fn test_white_connects_left_to_right() {
        let b = board(
            ". . .
             W W W
             . . .",
        );
        let path = HexRules.is_game_over(Player::White, &b).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(HexRules.winner(&b).unwrap().player, Player::White);
    }

    #[test]
    fn test_diagonal_that_is_not_adjacent() {
        // (0,0)-(1,1) is not a hex neighbour pair
        let b = board(
            "B . .
             . B .
             . . B",
        );
        assert!(HexRules.is_game_over(Player::Black, &b).is_none());
    }

    #[test]
    fn test_path_is_shortest() {
        let b = board(
            "B B B B
             . . . B
             B B B B
             B . . .",
        );
        let path = HexRules.is_game_over(Player::Black, &b).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.nodes.first().map(|c| c.row), Some(0));
        assert_eq!(path.nodes.last().map(|c| c.row), Some(3));
    }

    #[test]
    fn test_single_cell_board() {
        let b = board("B");
        assert_eq!(HexRules.is_game_over(Player::Black, &b).unwrap().len(), 1);
        assert!(HexRules.is_game_over(Player::White, &b).is_none());
    }
}
