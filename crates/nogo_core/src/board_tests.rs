use super::*;

fn at(board: &GoBoard, text: &str) -> Point {
    let coord = parse_move(text, board.size()).unwrap();
    board.coord_to_point(coord).unwrap()
}

#[test]
fn test_board_sizes() {
    assert_eq!(GoBoard::new(0), Err(BoardError::InvalidSize(0)));
    assert_eq!(GoBoard::new(26), Err(BoardError::InvalidSize(26)));
    for size in [1, 2, 7, 25] {
        let board = GoBoard::new(size).unwrap();
        assert_eq!(board.size(), size);
        assert_eq!(board.empty_positions(Stone::Black).len(), size * size);
        assert_eq!(board.to_play(), Stone::Black);
    }
}

#[test]
fn test_coord_point_round_trip() {
    let board = GoBoard::new(5).unwrap();
    for row in 1..=5 {
        for col in 1..=5 {
            let c = Coord::new(row, col);
            let p = board.coord_to_point(c).unwrap();
            assert_eq!(board.point_to_coord(p), c);
            assert_eq!(board.get_color(p), Color::Empty);
        }
    }
    assert_eq!(board.coord_to_point(Coord::new(0, 1)), Err(BoardError::OffBoard));
    assert_eq!(board.coord_to_point(Coord::new(1, 6)), Err(BoardError::OffBoard));
}

#[test]
fn test_single_point_board_is_lost_for_mover() {
    let board = GoBoard::new(1).unwrap();
    let only = board.points().next().unwrap();
    assert_eq!(board.check_move(only, Stone::Black), Err(BoardError::Suicide));
    assert!(!board.is_legal(only, Stone::Black));
    assert_eq!(board.winner(), Some(Stone::White));
}

#[test]
fn test_capturing_move_is_illegal() {
    let board = GoBoard::from_diagram(
        "
        . X .
        X O .
        . X .
        ",
        Stone::Black,
    )
    .unwrap();
    let c2 = at(&board, "c2");
    assert_eq!(board.check_move(c2, Stone::Black), Err(BoardError::Capture));
    // White may fill its own liberty only if the block keeps breathing.
    assert_eq!(board.check_move(c2, Stone::White), Ok(()));
}

#[test]
fn test_suicide_is_illegal() {
    let board = GoBoard::from_diagram(
        "
        . X .
        X . .
        . . .
        ",
        Stone::White,
    )
    .unwrap();
    let a3 = at(&board, "a3");
    assert_eq!(board.check_move(a3, Stone::White), Err(BoardError::Suicide));
    assert_eq!(board.check_move(a3, Stone::Black), Ok(()));
}

#[test]
fn test_occupied_point_is_illegal() {
    let board = GoBoard::from_diagram("X.\n..", Stone::White).unwrap();
    let a2 = at(&board, "a2");
    assert_eq!(board.get_color(a2), Color::Black);
    assert_eq!(board.check_move(a2, Stone::White), Err(BoardError::Occupied));
    assert_eq!(board.check_move(a2, Stone::Black), Err(BoardError::Occupied));
}

#[test]
fn test_winner_when_mover_is_stuck() {
    let board = GoBoard::from_diagram(
        "
        . X
        X .
        ",
        Stone::White,
    )
    .unwrap();
    assert_eq!(board.winner(), Some(Stone::Black));

    let mut black_to_play = board.clone();
    black_to_play.set_to_play(Stone::Black);
    assert_eq!(black_to_play.winner(), None);
}

#[test]
fn test_empty_board_has_no_winner() {
    let board = GoBoard::new(3).unwrap();
    assert_eq!(board.winner(), None);
}

#[test]
fn test_apply_move_flips_turn() {
    let mut board = GoBoard::new(3).unwrap();
    let b2 = at(&board, "b2");
    board.apply_move(b2, Stone::Black);
    assert_eq!(board.get_color(b2), Color::Black);
    assert_eq!(board.to_play(), Stone::White);
    assert_eq!(board.empty_positions(Stone::White).len(), 8);
}

#[test]
fn test_play_is_checked() {
    let mut board = GoBoard::new(3).unwrap();
    let a1 = at(&board, "a1");
    board.play(Move::Play(a1), Stone::Black).unwrap();
    assert_eq!(
        board.play(Move::Play(a1), Stone::White),
        Err(BoardError::Occupied)
    );
    // A rejected move leaves the turn alone.
    assert_eq!(board.to_play(), Stone::White);

    board.play(Move::Pass, Stone::White).unwrap();
    assert_eq!(board.passes(Stone::White), 1);
    assert_eq!(board.passes(Stone::Black), 0);
    assert_eq!(board.to_play(), Stone::Black);
}

#[test]
fn test_clones_are_independent() {
    let board = GoBoard::new(2).unwrap();
    let mut copy = board.clone();
    let a1 = at(&board, "a1");
    copy.apply_move(a1, Stone::Black);
    copy.play(Move::Pass, Stone::White).unwrap();
    assert_eq!(board.get_color(a1), Color::Empty);
    assert_eq!(board.passes(Stone::White), 0);
    assert_eq!(board.to_play(), Stone::Black);
    assert_ne!(board, copy);
}

#[test]
fn test_diagram_errors() {
    assert_eq!(
        GoBoard::from_diagram("X?\n..", Stone::Black),
        Err(BoardError::InvalidDiagram('?'))
    );
    assert_eq!(
        GoBoard::from_diagram("X..\n..", Stone::Black),
        Err(BoardError::InvalidSize(3))
    );
    assert_eq!(
        GoBoard::from_diagram("", Stone::Black),
        Err(BoardError::InvalidSize(0))
    );
}

#[test]
fn test_display() {
    let board = GoBoard::from_diagram(
        "
        . X .
        X O .
        . X .
        ",
        Stone::Black,
    )
    .unwrap();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], " 3  . X .");
    assert_eq!(lines[1], " 2  X O .");
    assert_eq!(lines[2], " 1  . X .");
    assert_eq!(lines[3], "    a b c");
}
