//! Candidate move generation.
//!
//! Naive generation returns every untried move. Heuristic generation keeps
//! only cells likely to matter:
//!
//! 1. Empty cells next to an opponent stone (blocking or cutting moves).
//! 2. Free cells reached by sweeping along the mover's winning axis from
//!    each cell found in pass 1, then from each of the mover's own stones.
//!
//! Candidates keep insertion order with duplicates dropped. The order
//! decides which child comes first among equal values, so it is part of
//! the contract.

use log::warn;
use rustc_hash::FxHashSet;

use super::node::SearchNode;
use crate::core::{Board, Coord, Move, Player};
use crate::rules::RulesOracle;

/// Result of move generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    /// Moves to expand, in order.
    pub moves: Vec<Move>,

    /// Heuristic mode produced nothing and naive generation was used.
    pub fallback: bool,
}

/// Generate candidate moves for `player` at `node`.
///
/// With `use_heuristic`, an empty heuristic set falls back to naive
/// generation. On an empty board that is expected; anywhere else it is
/// logged as a coverage gap.
pub fn generate_moves<O: RulesOracle + ?Sized>(
    oracle: &O,
    node: &SearchNode,
    player: Player,
    use_heuristic: bool,
) -> Generated {
    if !use_heuristic {
        return Generated {
            moves: node.untried_moves.clone(),
            fallback: false,
        };
    }

    let untried: FxHashSet<Move> = node.untried_moves.iter().copied().collect();
    let moves: Vec<Move> = heuristic_moves(oracle, &node.board, player)
        .into_iter()
        .filter(|m| untried.contains(m))
        .collect();

    if moves.is_empty() {
        if !node.board.is_empty() {
            warn!(
                "no heuristic candidates for {player} with {} stones down; using all moves",
                node.board.stone_count()
            );
        }
        return Generated {
            moves: node.untried_moves.clone(),
            fallback: true,
        };
    }

    Generated {
        moves,
        fallback: false,
    }
}

/// Heuristic candidate set for `player` on `board`, without fallback.
///
/// Empty only when neither player has a stone near a free cell, which in
/// practice means an empty board.
pub fn heuristic_moves<O: RulesOracle + ?Sized>(
    oracle: &O,
    board: &Board,
    player: Player,
) -> Vec<Move> {
    let mut seen: FxHashSet<Coord> = FxHashSet::default();
    let mut moves = Vec::new();

    for stone in board.stones(player.opponent()) {
        for n in oracle.neighbors(board, stone) {
            if oracle.is_cell_free(board, n) && seen.insert(n) {
                moves.push(n);
            }
        }
    }

    let origins: Vec<Coord> = moves
        .iter()
        .copied()
        .chain(board.stones(player))
        .collect();

    let (dr, dc) = oracle.axis_step(player);
    for origin in origins {
        for (sr, sc) in [(dr, dc), (-dr, -dc)] {
            let mut cursor = origin.offset(sr, sc, board.size());
            while let Some(cell) = cursor.filter(|&c| oracle.is_cell_free(board, c)) {
                if seen.insert(cell) {
                    moves.push(cell);
                }
                cursor = cell.offset(sr, sc, board.size());
            }
        }
    }

    moves
}
