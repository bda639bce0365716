//! Symmetric opening sets.

use crate::core::{Move, Player};

/// Opening cells for `player` on a `size`×`size` board.
///
/// Black draws from the main diagonal and White from the anti-diagonal.
#[must_use]
pub fn opening_moves(size: usize, player: Player) -> Vec<Move> {
    (0..size)
        .map(|i| match player {
            Player::Black => Move::new(i, i),
            Player::White => Move::new(i, size - 1 - i),
        })
        .collect()
}
