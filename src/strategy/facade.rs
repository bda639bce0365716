//! Strategy facade: one decision per turn.

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use super::opening::opening_moves;
use crate::core::{Board, GameRng, Move, Player};
use crate::error::{Error, Result};
use crate::rules::RulesOracle;
use crate::search::{
    evaluate_root, select_move, FavorSearcher, LeafEvaluator, SearchConfig, SearchNode,
    SearchStats,
};

/// How a strategy chooses moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Uniform choice among all legal moves.
    Random,
    /// Opening set on the first stone, minimax search afterwards.
    Minimax,
}

/// Which path produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionKind {
    Opening,
    Search,
    Random,
}

/// Outcome of one `decide` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// The move to play.
    pub mv: Move,

    /// Which path produced it.
    pub kind: DecisionKind,

    /// Counters and elapsed time for this decision only.
    pub stats: SearchStats,
}

/// Per-player decision maker.
///
/// Owns its RNG so that a fixed seed reproduces every decision. Nothing is
/// kept between calls apart from the RNG position.
pub struct Strategy<O: RulesOracle> {
    oracle: O,
    kind: StrategyKind,
    config: SearchConfig,
    evaluator: Box<dyn LeafEvaluator>,
    rng: GameRng,
}

impl<O: RulesOracle + Sync> Strategy<O> {
    /// Create a searching strategy.
    pub fn minimax(oracle: O, config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            oracle,
            kind: StrategyKind::Minimax,
            config,
            evaluator: Box::new(FavorSearcher),
            rng,
        }
    }

    /// Create a uniform random strategy.
    pub fn random(oracle: O, seed: u64) -> Self {
        Self {
            oracle,
            kind: StrategyKind::Random,
            config: SearchConfig::default().with_seed(seed),
            evaluator: Box::new(FavorSearcher),
            rng: GameRng::new(seed),
        }
    }

    /// Set a custom leaf evaluator.
    pub fn with_evaluator<L: LeafEvaluator + 'static>(mut self, evaluator: L) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Replace the RNG stream.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Choose a move for `player` on `board`.
    ///
    /// Fails with `InvalidState` when the game is already decided or no
    /// legal move exists.
    pub fn decide(&mut self, board: &Board, player: Player) -> Result<Decision> {
        let start = Instant::now();

        if let Some(path) = self.oracle.winner(board) {
            return Err(Error::InvalidState(format!(
                "game already won by {}",
                path.player
            )));
        }
        let legal = self.oracle.possible_moves(board);
        if legal.is_empty() {
            return Err(Error::InvalidState(format!("no legal moves for {player}")));
        }

        let (mv, kind, mut stats) = match self.kind {
            StrategyKind::Random => (self.pick(&legal)?, DecisionKind::Random, SearchStats::new()),
            StrategyKind::Minimax => self.search_or_open(board, player)?,
        };

        stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "{player} plays {mv} ({kind:?}, {} nodes, {}us)",
            stats.nodes_evaluated, stats.time_us
        );

        Ok(Decision { mv, kind, stats })
    }

    fn search_or_open(
        &mut self,
        board: &Board,
        player: Player,
    ) -> Result<(Move, DecisionKind, SearchStats)> {
        if board.stones(player).next().is_none() {
            let openings: Vec<Move> = opening_moves(board.size(), player)
                .into_iter()
                .filter(|&m| self.oracle.is_cell_free(board, m))
                .collect();
            if !openings.is_empty() {
                return Ok((self.pick(&openings)?, DecisionKind::Opening, SearchStats::new()));
            }
        }

        let mut root = SearchNode::root(&self.oracle, board.clone());
        let (evals, stats) = evaluate_root(
            &self.oracle,
            &self.config,
            self.evaluator.as_ref(),
            &mut root,
            player,
        )?;
        let mv = select_move(
            &root.child_moves(),
            &evals,
            player,
            self.config.maximizing,
            &mut self.rng,
        )?;

        Ok((mv, DecisionKind::Search, stats))
    }

    fn pick(&mut self, moves: &[Move]) -> Result<Move> {
        self.rng
            .choose(moves)
            .copied()
            .ok_or_else(|| Error::InvalidState("nothing to choose from".into()))
    }

    /// Strategy kind.
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the oracle reference.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}
