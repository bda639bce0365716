//! Shared helpers for integration tests.

#![allow(dead_code)]

use polyline::{Board, GameRng, HexRules, Player, RulesOracle};

/// Play `plies` uniformly random moves from an empty board, Black first,
/// stopping early if someone wins. Returns the board and the player to move.
pub fn random_position(size: usize, plies: usize, seed: u64) -> (Board, Player) {
    let mut rng = GameRng::new(seed);
    let mut board = Board::new(size).unwrap();
    let mut to_move = Player::Black;

    for _ in 0..plies {
        if HexRules.winner(&board).is_some() {
            break;
        }
        let moves = HexRules.possible_moves(&board);
        let Some(&mv) = rng.choose(&moves) else { break };
        board = board.place(mv, to_move).unwrap();
        to_move = to_move.opponent();
    }

    (board, to_move)
}

/// Parse a board literal, panicking on malformed input.
pub fn board(text: &str) -> Board {
    text.parse().unwrap()
}
