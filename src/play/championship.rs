//! Series of games between the same two strategies.

use log::info;
use serde::{Deserialize, Serialize};

use super::game::play_game;
use crate::core::{Player, PlayerMap};
use crate::error::Result;
use crate::rules::RulesOracle;
use crate::search::SearchStats;
use crate::strategy::Strategy;

/// Aggregate result of a championship.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChampionshipSummary {
    /// Games played.
    pub games: u32,

    /// Games won by each player.
    pub wins: PlayerMap<u32>,

    /// Games started by each player.
    pub starts: PlayerMap<u32>,

    /// Decision statistics summed over all games.
    pub stats: PlayerMap<SearchStats>,
}

impl ChampionshipSummary {
    /// Fraction of games `player` won.
    #[must_use]
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins[player] as f64 / self.games as f64
        }
    }
}

/// Play `n_games` games. The first half is started by Black and the rest
/// by White, since the starting side has a fixed advantage.
pub fn championship<O: RulesOracle + Sync>(
    size: usize,
    black: &mut Strategy<O>,
    white: &mut Strategy<O>,
    n_games: u32,
) -> Result<ChampionshipSummary> {
    let mut summary = ChampionshipSummary::default();

    for game in 0..n_games {
        let black_starts = 2 * game < n_games;
        let record = play_game(size, black, white, black_starts)?;

        summary.games += 1;
        summary.wins[record.winner] += 1;
        summary.starts[record.starter] += 1;
        for player in Player::ALL {
            summary.stats[player].merge(&record.stats[player]);
        }
    }

    info!(
        "Black won {} games || White won {} games",
        summary.wins[Player::Black],
        summary.wins[Player::White]
    );
    info!(
        "Win rate Black: {:.0}% || White: {:.0}%",
        summary.win_rate(Player::Black) * 100.0,
        summary.win_rate(Player::White) * 100.0
    );

    Ok(summary)
}
