use super::*;
use nogo_core::{Board, Move, legal_moves};

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new(Some(5));
    let board = GoBoard::from_diagram(
        "
        . X .
        X O .
        . X .
        ",
        Stone::Black,
    )
    .unwrap();

    for color in [Stone::Black, Stone::White] {
        let result = engine.search(&board, color, &SearchLimits::unlimited());
        let p = result.best_move.point().expect("moves are available");
        assert!(legal_moves(&board, color).contains(&p));
        assert!(board.is_legal(p, color));
    }
}

#[test]
fn random_engine_passes_when_stuck() {
    let mut engine = RandomEngine::default();
    let board = GoBoard::from_diagram(". X\nX .", Stone::White).unwrap();

    let result = engine.search(&board, Stone::White, &SearchLimits::unlimited());

    assert_eq!(result.best_move, Move::Pass);
}

#[test]
fn random_engine_is_reproducible_with_seed() {
    let board = GoBoard::new(5).unwrap();
    let limits = SearchLimits::unlimited();
    let mut a = RandomEngine::new(Some(42));
    let mut b = RandomEngine::new(Some(42));
    let moves_a: Vec<_> = (0..8)
        .map(|_| a.search(&board, Stone::Black, &limits).best_move)
        .collect();
    let moves_b: Vec<_> = (0..8)
        .map(|_| b.search(&board, Stone::Black, &limits).best_move)
        .collect();
    assert_eq!(moves_a, moves_b);

    a.new_game();
    assert_eq!(a.search(&board, Stone::Black, &limits).best_move, moves_a[0]);
}
