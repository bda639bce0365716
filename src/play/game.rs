//! Single game between two strategies.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Coord, Move, Player, PlayerMap};
use crate::error::{Error, Result};
use crate::rules::RulesOracle;
use crate::search::SearchStats;
use crate::strategy::Strategy;

/// A finished game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRecord {
    /// Player who completed a path.
    pub winner: Player,

    /// The winning path.
    pub winning_path: Vec<Coord>,

    /// Player who moved first.
    pub starter: Player,

    /// Every move in order.
    pub moves: Vec<(Player, Move)>,

    /// Number of turns, counted as moves by the starting player.
    pub turns: usize,

    /// Decision statistics aggregated per player.
    pub stats: PlayerMap<SearchStats>,

    /// Final position.
    pub board: Board,
}

impl GameRecord {
    /// Number of moves `player` made.
    #[must_use]
    pub fn moves_by(&self, player: Player) -> usize {
        self.moves.iter().filter(|(p, _)| *p == player).count()
    }
}

/// Play one game on an empty `size`×`size` board.
///
/// The oracle of `black` adjudicates the game.
pub fn play_game<O: RulesOracle + Sync>(
    size: usize,
    black: &mut Strategy<O>,
    white: &mut Strategy<O>,
    black_starts: bool,
) -> Result<GameRecord> {
    let mut board = Board::new(size)?;
    let starter = if black_starts { Player::Black } else { Player::White };
    let mut to_move = starter;
    let mut moves = Vec::with_capacity(size * size);
    let mut stats: PlayerMap<SearchStats> = PlayerMap::with_default();

    loop {
        if let Some(path) = black.oracle().winner(&board) {
            let record = GameRecord {
                winner: path.player,
                winning_path: path.nodes,
                starter,
                turns: moves.iter().filter(|(p, _)| *p == starter).count(),
                moves,
                stats,
                board,
            };
            info!(
                "{} wins after {} turns ({} moves by Black, {} by White)",
                record.winner,
                record.turns,
                record.moves_by(Player::Black),
                record.moves_by(Player::White)
            );
            return Ok(record);
        }

        if moves.len() == size * size {
            return Err(Error::InvalidState("board filled without a winner".into()));
        }

        let strategy = match to_move {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };
        let decision = strategy.decide(&board, to_move)?;

        board = board.place(decision.mv, to_move)?;
        stats[to_move].merge(&decision.stats);
        moves.push((to_move, decision.mv));
        to_move = to_move.opponent();
    }
}
