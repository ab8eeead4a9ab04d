use super::*;
use chess_core::Position;

#[test]
fn random_utility_scores_checkmate_by_side() {
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    assert_eq!(RandomUtility::new(Color::Black, 0).evaluate(&pos), i32::MIN);
    assert_eq!(RandomUtility::new(Color::White, 0).evaluate(&pos), i32::MAX);
}

#[test]
fn random_utility_handles_stalemate() {
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    assert_eq!(RandomUtility::new(Color::White, 0).evaluate(&pos), 0);
}

#[test]
fn random_utility_stays_in_range() {
    let pos = Position::startpos();
    let mut eval = RandomUtility::new(Color::White, 0);

    for _ in 0..1000 {
        let score = eval.evaluate(&pos);
        assert!((RANDOM_MIN..RANDOM_MAX).contains(&score));
    }
}

#[test]
fn random_utility_is_reproducible_per_seed() {
    let pos = Position::startpos();
    let mut a = RandomUtility::new(Color::White, 42);
    let mut b = RandomUtility::new(Color::White, 42);
    let mut c = RandomUtility::new(Color::White, 43);

    let xs: Vec<i32> = (0..16).map(|_| a.evaluate(&pos)).collect();
    let ys: Vec<i32> = (0..16).map(|_| b.evaluate(&pos)).collect();
    let zs: Vec<i32> = (0..16).map(|_| c.evaluate(&pos)).collect();
    assert_eq!(xs, ys);
    assert_ne!(xs, zs);
}
