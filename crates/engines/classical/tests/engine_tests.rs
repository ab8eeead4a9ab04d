//! End-to-end behaviour of `MinimaxEngine` on real positions.

use chess_core::{
    Color, Engine, Evaluator, Move, Piece, Position, Rules, RulesError, SearchError,
};
use classical_engine::{
    Algorithm, Bound, ConfigError, EngineConfig, HeuristicEvaluator, MinimaxEngine,
    RootSelection, MAX_SEARCH_DEPTH, NEG_INF, POS_INF,
};
use random_utility::RandomUtility;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const SICILIAN: &str = "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2";
const WHITE_MATES_IN_ONE: &str = "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1";
const BLACK_MATES_IN_ONE: &str = "1k1q4/ppp5/8/8/8/8/PPP5/1K6 b - - 0 1";
const SCHOLARS_MATE: &str = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4";
const STALEMATE: &str = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1";

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid FEN")
}

fn engine(config: EngineConfig) -> MinimaxEngine {
    MinimaxEngine::from_config(config).unwrap()
}

fn side_to_move(fen: &str) -> Color {
    pos(fen).side_to_move()
}

// =============================================================================
// Move choice
// =============================================================================

#[test]
fn test_finds_mate_in_one_for_white() {
    for depth in 1..=2 {
        let mut p = pos(WHITE_MATES_IN_ONE);
        let mut e = engine(EngineConfig::new(Color::White).with_depth(depth));
        let mv = e.get_move(&mut p).unwrap().expect("a move");
        assert_eq!(mv.to_string(), "e1e8", "depth {depth}");
    }
}

#[test]
fn test_finds_mate_in_one_for_black() {
    for depth in 1..=2 {
        let mut p = pos(BLACK_MATES_IN_ONE);
        let mut e = engine(EngineConfig::new(Color::Black).with_depth(depth));
        let mv = e.get_move(&mut p).unwrap().expect("a move");
        assert_eq!(mv.to_string(), "d8d1", "depth {depth}");
    }
}

#[test]
fn test_returned_move_is_legal() {
    for fen in [KIWIPETE, ENDGAME, SICILIAN] {
        let mut p = pos(fen);
        let mut e = engine(EngineConfig::new(side_to_move(fen)).with_depth(2));
        let mv = e.get_move(&mut p).unwrap().expect("a move");
        assert!(p.legal_moves().contains(&mv), "{fen}");
    }
}

// =============================================================================
// Pruning and table never change the answer
// =============================================================================

fn configs(side: Color, depth: u8) -> Vec<EngineConfig> {
    let base = EngineConfig::new(side).with_depth(depth);
    vec![
        base.with_algorithm(Algorithm::AlphaBeta).with_transposition(false),
        base.with_algorithm(Algorithm::AlphaBeta).with_transposition(true),
        base.with_root(RootSelection::Rescan).with_transposition(false),
        base.with_root(RootSelection::Rescan).with_transposition(true),
    ]
}

#[test]
fn test_alpha_beta_agrees_with_minimax() {
    let cases = [
        (None, 3),
        (Some(SICILIAN), 2),
        (Some(KIWIPETE), 2),
        (Some(ENDGAME), 3),
        (Some(WHITE_MATES_IN_ONE), 3),
    ];
    for (fen, depth) in cases {
        let start = fen.map(pos).unwrap_or_default();
        let side = start.side_to_move();

        let mut p = start.clone();
        let reference = engine(
            EngineConfig::new(side)
                .with_depth(depth)
                .with_algorithm(Algorithm::Minimax),
        )
        .search(&mut p)
        .unwrap();

        for config in configs(side, depth) {
            let mut p = start.clone();
            let result = engine(config).search(&mut p).unwrap();
            assert_eq!(result.score, reference.score, "{fen:?} {config:?}");
            assert_eq!(result.best_move, reference.best_move, "{fen:?} {config:?}");
        }
    }
}

#[test]
fn test_alpha_beta_evaluates_fewer_leaves() {
    let base = EngineConfig::new(Color::White).with_depth(3);
    let plain = engine(base.with_algorithm(Algorithm::Minimax))
        .search(&mut Position::startpos())
        .unwrap();
    let pruned = engine(base.with_transposition(false))
        .search(&mut Position::startpos())
        .unwrap();

    assert_eq!(plain.table_hits, 0);
    assert!(pruned.evaluations < plain.evaluations);
    assert!(pruned.nodes < plain.nodes);
}

#[test]
fn test_table_only_saves_evaluations() {
    for (fen, depth) in [(None, 3), (Some(ENDGAME), 3), (Some(KIWIPETE), 2)] {
        let start = fen.map(pos).unwrap_or_default();
        let base = EngineConfig::new(start.side_to_move()).with_depth(depth);

        let without = engine(base.with_transposition(false))
            .search(&mut start.clone())
            .unwrap();
        let with = engine(base.with_transposition(true))
            .search(&mut start.clone())
            .unwrap();

        assert_eq!(with.best_move, without.best_move);
        assert_eq!(with.score, without.score);
        assert_eq!(with.nodes, without.nodes);
        assert_eq!(with.evaluations + with.table_hits, without.evaluations);
    }
}

#[test]
fn test_rescan_reuses_first_pass_entries() {
    let mut e = engine(
        EngineConfig::new(Color::White)
            .with_depth(2)
            .with_root(RootSelection::Rescan),
    );
    let result = e.search(&mut Position::startpos()).unwrap();
    assert!(result.table_hits > 0);
    assert!(!e.transposition_table().is_empty());
}

#[test]
fn test_table_is_fresh_per_search() {
    let mut e = engine(EngineConfig::new(Color::White).with_depth(2));
    let first = e.search(&mut Position::startpos()).unwrap();
    let second = e.search(&mut Position::startpos()).unwrap();
    assert_eq!(first, second);

    let mut off = engine(EngineConfig::new(Color::White).with_depth(2).with_transposition(false));
    off.search(&mut Position::startpos()).unwrap();
    assert!(off.transposition_table().is_empty());
}

#[test]
fn test_stored_bounds_follow_root_window() {
    // Depth 1: every root reply is a cutoff node searched with (alpha, +inf),
    // where alpha is the best reply value seen so far.
    let start = Position::startpos();
    let mut e = engine(EngineConfig::new(Color::White).with_depth(1));
    e.search(&mut start.clone()).unwrap();

    let mut evaluator = HeuristicEvaluator::new(Color::White);
    let mut alpha = NEG_INF;
    let mut p = start.clone();
    for mv in start.legal_moves() {
        p.apply_move(mv).unwrap();
        let score = evaluator.evaluate(&p);
        let entry = e.transposition_table().get(p.position_hash()).copied().unwrap();
        p.undo_move().unwrap();

        assert_eq!(entry.score, score);
        assert_eq!(entry.depth, 0);
        assert_eq!(entry.bound, Bound::classify(score, alpha, POS_INF), "{mv}");
        alpha = alpha.max(score);
    }
    assert_eq!(e.transposition_table().len(), start.legal_moves().len());
}

// =============================================================================
// Degenerate roots
// =============================================================================

#[test]
fn test_depth_zero_compares_immediate_replies() {
    let start = pos(SICILIAN);
    let mut evaluator = HeuristicEvaluator::new(Color::Black);

    let mut expected: Option<(Move, i32)> = None;
    let mut p = start.clone();
    for mv in start.legal_moves() {
        p.apply_move(mv).unwrap();
        let score = evaluator.evaluate(&p);
        p.undo_move().unwrap();
        if expected.map_or(true, |(_, best)| score > best) {
            expected = Some((mv, score));
        }
    }

    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        for depth in [0, 1] {
            let config = EngineConfig::new(Color::Black)
                .with_depth(depth)
                .with_algorithm(algorithm);
            let result = engine(config).search(&mut start.clone()).unwrap();
            assert_eq!(result.best_move, expected.map(|(mv, _)| mv), "{config:?}");
            assert_eq!(Some(result.score), expected.map(|(_, s)| s), "{config:?}");
        }
    }
}

#[test]
fn test_terminal_root_returns_no_move() {
    for fen in [SCHOLARS_MATE, STALEMATE] {
        for config in configs(Color::White, 3) {
            let mut p = pos(fen);
            let hash = p.position_hash();
            let result = engine(config).search(&mut p).unwrap();
            assert_eq!(result.best_move, None, "{fen}");
            assert_eq!(result.nodes, 0);
            assert_eq!(p.position_hash(), hash);
        }
    }
}

#[test]
fn test_position_is_restored_after_search() {
    for fen in [KIWIPETE, ENDGAME, SICILIAN, SCHOLARS_MATE] {
        let mut p = pos(fen);
        let hash = p.position_hash();
        let side = p.side_to_move();

        let mut e = engine(EngineConfig::new(side).with_depth(2));
        e.get_move(&mut p).unwrap();

        assert_eq!(p.position_hash(), hash);
        assert_eq!(p.side_to_move(), side);
        assert_eq!(p.undo_depth(), 0);
    }
}

// =============================================================================
// Contract violations abort the search
// =============================================================================

/// Rejects the `fail_at`-th applied move as illegal.
struct FaultyPosition {
    inner: Position,
    applied: usize,
    fail_at: usize,
}

impl Rules for FaultyPosition {
    type Move = Move;

    fn legal_moves_into(&self, moves: &mut Vec<Move>) {
        self.inner.legal_moves_into(moves);
    }
    fn apply_move(&mut self, mv: Move) -> Result<(), RulesError> {
        self.applied += 1;
        if self.applied == self.fail_at {
            return Err(RulesError::IllegalMove { mv: mv.to_string() });
        }
        self.inner.apply_move(mv)
    }
    fn undo_move(&mut self) -> Result<(), RulesError> {
        self.inner.undo_move()
    }
    fn is_checkmate(&self) -> bool {
        self.inner.is_checkmate()
    }
    fn is_stalemate(&self) -> bool {
        self.inner.is_stalemate()
    }
    fn is_in_check(&self) -> bool {
        self.inner.is_in_check()
    }
    fn side_to_move(&self) -> Color {
        self.inner.side_to_move()
    }
    fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.inner.piece_at(sq)
    }
    fn position_hash(&self) -> u64 {
        self.inner.position_hash()
    }
}

#[test]
fn test_illegal_move_aborts_and_unwinds() {
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let mut p = FaultyPosition {
            inner: Position::startpos(),
            applied: 0,
            fail_at: 30,
        };
        let hash = p.position_hash();
        let mut e = engine(
            EngineConfig::new(Color::White)
                .with_depth(3)
                .with_algorithm(algorithm),
        );

        let err = e.get_move(&mut p).unwrap_err();
        assert!(
            matches!(err, SearchError::Rules(RulesError::IllegalMove { .. })),
            "{err:?}"
        );
        assert_eq!(p.inner.undo_depth(), 0);
        assert_eq!(p.position_hash(), hash);
    }
}

// =============================================================================
// Random utility as a pluggable evaluator
// =============================================================================

#[test]
fn test_random_evaluator_drives_search() {
    for fen in [KIWIPETE, ENDGAME] {
        let mut p = pos(fen);
        let hash = p.position_hash();
        let side = p.side_to_move();
        let config = EngineConfig::new(side).with_depth(2);
        let mut e = MinimaxEngine::with_evaluator(config, RandomUtility::new(side, 7)).unwrap();

        let mv = e.get_move(&mut p).unwrap().expect("a move");
        assert!(p.legal_moves().contains(&mv));
        assert_eq!(p.position_hash(), hash);
    }
}

#[test]
fn test_random_evaluator_is_reproducible() {
    let config = EngineConfig::new(Color::White).with_depth(2);
    let run = || {
        MinimaxEngine::with_evaluator(config, RandomUtility::new(Color::White, 0))
            .unwrap()
            .search(&mut Position::startpos())
            .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_rescan_may_find_no_matching_move() {
    // Fresh random draws on the second pass can miss the first pass utility.
    // The engine then answers "no move" even though moves exist, and must
    // still hand back an untouched position.
    let config = EngineConfig::new(Color::White)
        .with_depth(3)
        .with_root(RootSelection::Rescan);
    let start = Position::startpos();

    let mut misses = 0;
    for seed in 0..100 {
        let mut p = start.clone();
        let mut e =
            MinimaxEngine::with_evaluator(config, RandomUtility::new(Color::White, seed)).unwrap();
        let result = e.search(&mut p).unwrap();
        assert_eq!(p.position_hash(), start.position_hash());
        match result.best_move {
            Some(mv) => assert!(start.legal_moves().contains(&mv)),
            None => misses += 1,
        }
    }
    assert!(misses > 0);
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_constructors_reject_excessive_depth() {
    let config = EngineConfig::new(Color::White).with_depth(MAX_SEARCH_DEPTH + 1);

    let err = MinimaxEngine::from_config(config).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = MinimaxEngine::with_evaluator(config, RandomUtility::new(Color::White, 0))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let at_limit = EngineConfig::new(Color::White).with_depth(MAX_SEARCH_DEPTH);
    assert!(MinimaxEngine::from_config(at_limit).is_ok());
}
