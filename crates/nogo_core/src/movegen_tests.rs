use super::*;
use crate::board::GoBoard;
use crate::types::Coord;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sample_board() -> GoBoard {
    GoBoard::from_diagram(
        "
        . X . .
        X O . .
        . X . O
        . . O .
        ",
        Stone::Black,
    )
    .unwrap()
}

#[test]
fn test_empty_board_moves() {
    let board = GoBoard::new(3).unwrap();
    // Every point of an empty board is legal
    assert_eq!(legal_moves(&board, Stone::Black).len(), 9);
    assert_eq!(legal_moves(&board, Stone::White).len(), 9);
}

#[test]
fn test_legal_moves_subset_of_empty_and_legal() {
    let board = sample_board();
    for stone in [Stone::Black, Stone::White] {
        let empty = board.empty_positions(stone);
        let legal = legal_moves(&board, stone);
        assert!(!legal.is_empty());
        for p in &legal {
            assert!(empty.contains(p));
            assert!(board.is_legal(*p, stone));
        }
        let rejected = empty.iter().filter(|p| !legal.contains(p));
        for p in rejected {
            assert!(!board.is_legal(*p, stone));
        }
    }
}

#[test]
fn test_illegal_points_are_filtered() {
    let board = sample_board();
    let c3 = board.coord_to_point(Coord::new(3, 3)).unwrap();
    let legal_black = legal_moves(&board, Stone::Black);
    // c3 would capture the white stone on b3
    assert!(!legal_black.contains(&c3));
    let a4 = board.coord_to_point(Coord::new(4, 1)).unwrap();
    assert!(!legal_moves(&board, Stone::White).contains(&a4));
    assert!(legal_black.contains(&a4));
}

#[test]
fn test_legal_moves_into_reuses_buffer() {
    let board = GoBoard::new(2).unwrap();
    let mut buf = vec![Point::new(999)];
    legal_moves_into(&board, Stone::Black, &mut buf);
    assert_eq!(buf, legal_moves(&board, Stone::Black));
}

#[test]
fn test_random_legal_move_is_legal() {
    let board = sample_board();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..32 {
        let mv = random_legal_move(&board, Stone::White, &mut rng);
        let p = mv.point().expect("white has legal moves");
        assert!(board.is_legal(p, Stone::White));
    }
}

#[test]
fn test_random_legal_move_passes_when_stuck() {
    let board = GoBoard::from_diagram(". X\nX .", Stone::White).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(legal_moves(&board, Stone::White).is_empty());
    assert_eq!(random_legal_move(&board, Stone::White, &mut rng), Move::Pass);
}
