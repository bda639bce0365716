//! Strategy facade and game driver tests.

mod common;

use polyline::{
    championship, play_game, DecisionKind, GameRng, HexRules, Player, RulesOracle, SearchConfig,
    Strategy,
};

use common::board;

// =============================================================================
// Decisions
// =============================================================================

#[test]
fn test_decide_returns_a_legal_move() {
    let b = board("B...\n.W..\n..B.\n....");
    let mut strategy = Strategy::minimax(HexRules, SearchConfig::default().with_depth(2));

    let decision = strategy.decide(&b, Player::White).unwrap();

    assert!(b.is_free(decision.mv));
    assert_eq!(decision.kind, DecisionKind::Search);
    assert!(decision.stats.nodes_expanded > 0);
}

#[test]
fn test_decide_deterministic_with_seed() {
    let b = board("B....\n.W...\n..B..\n.....\n.....");
    let config = SearchConfig::default().with_depth(2).with_seed(12345);

    let mut first = Strategy::minimax(HexRules, config.clone());
    let mut second = Strategy::minimax(HexRules, config);

    for _ in 0..5 {
        let a = first.decide(&b, Player::White).unwrap();
        let b2 = second.decide(&b, Player::White).unwrap();
        assert_eq!(a.mv, b2.mv, "Same seed should produce same move");
    }
}

#[test]
fn test_parallel_root_matches_serial() {
    let b = board("B....\n.W...\n..B..\n.....\n.....");
    let config = SearchConfig::default().with_depth(2).with_seed(7);

    let mut serial = Strategy::minimax(HexRules, config.clone());
    let mut parallel = Strategy::minimax(HexRules, config.with_parallel_root(true));

    for _ in 0..5 {
        let a = serial.decide(&b, Player::White).unwrap();
        let p = parallel.decide(&b, Player::White).unwrap();
        assert_eq!(a.mv, p.mv);
        assert_eq!(a.stats.nodes_evaluated, p.stats.nodes_evaluated);
    }
}

#[test]
fn test_default_config_decides_on_7x7() {
    let b = board(
        "B......
         .W.....
         ..B....
         ...W...
         ....B..
         .......
         .......",
    );
    let config = SearchConfig::default();
    assert_eq!(config.depth, 4);
    let mut strategy = Strategy::minimax(HexRules, config);

    let decision = strategy.decide(&b, Player::White).unwrap();

    assert_eq!(decision.kind, DecisionKind::Search);
    assert!(b.is_free(decision.mv));
    assert!(decision.stats.nodes_evaluated > decision.stats.nodes_expanded);
}

#[test]
fn test_opening_then_search() {
    let mut strategy = Strategy::minimax(HexRules, SearchConfig::default().with_depth(1));
    let empty = board("....\n....\n....\n....");

    let first = strategy.decide(&empty, Player::Black).unwrap();
    assert_eq!(first.kind, DecisionKind::Opening);
    assert_eq!(first.mv.row, first.mv.col);

    let after = empty.place(first.mv, Player::Black).unwrap();
    let second = strategy.decide(&after, Player::Black).unwrap();
    assert_eq!(second.kind, DecisionKind::Search);
}

// =============================================================================
// Games
// =============================================================================

#[test]
fn test_minimax_against_random_completes() {
    let mut root_rng = GameRng::new(99);
    let mut black = Strategy::minimax(HexRules, SearchConfig::default().with_depth(2))
        .with_rng(root_rng.fork());
    let mut white = Strategy::random(HexRules, 0).with_rng(root_rng.fork());

    let record = play_game(4, &mut black, &mut white, true).unwrap();

    assert!(HexRules.is_game_over(record.winner, &record.board).is_some());
    assert!(record.stats[Player::Black].nodes_evaluated > 0);
    assert_eq!(record.stats[Player::White].nodes_evaluated, 0);
}

#[test]
fn test_championship_against_random() {
    let mut black = Strategy::minimax(HexRules, SearchConfig::default().with_depth(2));
    let mut white = Strategy::random(HexRules, 17);

    let summary = championship(3, &mut black, &mut white, 6).unwrap();

    assert_eq!(summary.games, 6);
    assert_eq!(summary.starts[Player::Black], 3);
    assert_eq!(summary.starts[Player::White], 3);
    assert_eq!(summary.wins[Player::Black] + summary.wins[Player::White], 6);
    assert!(summary.stats[Player::Black].nodes_evaluated > 0);
}
