//! Board tests - bounds, placement checks and line clearing

use blockstacker::core::{Board, SpawnOutcome};
use blockstacker::types::{Bounds, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_ANCHOR};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in -10..12 {
        for x in -5..5 {
            assert!(board.is_free(x, y), "Cell ({}, {}) should be free", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-6, 0), None);
    assert_eq!(board.get(0, -11), None);
    assert_eq!(board.get(5, 0), None);
    assert_eq!(board.get(0, 12), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(3, 7, Some(PieceKind::T)));
    assert_eq!(board.get(3, 7), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(3, 7));

    assert!(board.set(3, 7, None));
    assert_eq!(board.get(3, 7), Some(None));

    assert!(!board.set(5, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -11, Some(PieceKind::T)));
}

#[test]
fn test_is_valid_position() {
    let mut board = Board::new();
    board.set(0, 0, Some(PieceKind::O));

    assert!(board.is_valid_position(&[(-5, -10), (4, 11)]));
    // Occupied
    assert!(!board.is_valid_position(&[(1, 0), (0, 0)]));
    // Outside each edge
    assert!(!board.is_valid_position(&[(-6, 0)]));
    assert!(!board.is_valid_position(&[(5, 0)]));
    assert!(!board.is_valid_position(&[(0, -11)]));
    assert!(!board.is_valid_position(&[(0, 12)]));
}

#[test]
fn test_clear_single_bottom_line() {
    let mut board = Board::new();
    board.fill_row(-10, PieceKind::I);
    board.set(-3, -8, Some(PieceKind::T));
    board.set(2, -8, Some(PieceKind::Z));

    assert_eq!(board.clear_lines(), 1);

    assert!(!board.is_row_full(-10));
    assert_eq!(board.get(-3, -9), Some(Some(PieceKind::T)));
    assert_eq!(board.get(2, -9), Some(Some(PieceKind::Z)));
    assert!(board.is_row_empty(-8));
    assert_eq!(board.stack_top(), Some(-9));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_adjacent_lines_without_gap() {
    let mut board = Board::new();
    board.fill_row(-10, PieceKind::I);
    board.fill_row(-9, PieceKind::J);
    board.set(0, -8, Some(PieceKind::S));

    assert_eq!(board.clear_lines(), 2);

    assert_eq!(board.get(0, -10), Some(Some(PieceKind::S)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_clear_separated_lines() {
    let mut board = Board::new();
    board.fill_row(-10, PieceKind::I);
    board.set(1, -9, Some(PieceKind::L));
    board.fill_row(-8, PieceKind::I);
    board.set(2, -7, Some(PieceKind::O));

    assert_eq!(board.clear_lines(), 2);

    assert_eq!(board.get(1, -10), Some(Some(PieceKind::L)));
    assert_eq!(board.get(2, -9), Some(Some(PieceKind::O)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_top_row() {
    let mut board = Board::new();
    board.fill_row(11, PieceKind::Z);
    assert_eq!(board.clear_lines(), 1);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_no_full_lines() {
    let mut board = Board::new();
    for x in -5..4 {
        board.set(x, -10, Some(PieceKind::T));
    }
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board.occupied_count(), 9);
}

#[test]
fn test_spawn_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        match board.spawn_piece(kind, SPAWN_ANCHOR) {
            SpawnOutcome::Spawned(piece) => {
                assert_eq!(piece.kind(), kind);
                assert_eq!(piece.position(), SPAWN_ANCHOR);
            }
            SpawnOutcome::Blocked => panic!("{:?} blocked on empty board", kind),
        }
    }
}

#[test]
fn test_spawn_blocked_by_stack() {
    let mut board = Board::new();
    // The anchor cell itself is part of every spawn footprint except I.
    board.set(-1, 8, Some(PieceKind::L));
    board.set(-1, 9, Some(PieceKind::L));
    for kind in PieceKind::ALL {
        assert_eq!(
            board.spawn_piece(kind, SPAWN_ANCHOR),
            SpawnOutcome::Blocked,
            "{:?}",
            kind
        );
    }
}

#[test]
fn test_custom_bounds() {
    let board = Board::with_bounds(Bounds::new(0, 0, 4, 6));
    assert_eq!(board.width(), 4);
    assert_eq!(board.height(), 6);
    assert!(board.is_free(0, 0));
    assert!(board.is_free(3, 5));
    assert!(!board.is_free(4, 0));
    assert!(!board.is_free(-1, 0));
    assert_eq!(board.rows_top_down().count(), 6);
}
