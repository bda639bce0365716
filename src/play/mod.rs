//! Game driver and championship loop.
//!
//! Plays full games between two strategies and aggregates results and
//! decision statistics per player.

pub mod championship;
pub mod game;

pub use championship::{championship, ChampionshipSummary};
pub use game::{play_game, GameRecord};
