//! Board tests.

use pastel_tetris::core::Board;
use pastel_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_out_of_bounds_counts_as_occupied() {
    // The boundary is "occupied" in the sense that nothing is valid there.
    let board = Board::new();
    assert!(!board.is_valid(-1, 0));
    assert!(!board.is_valid(0, -1));
    assert!(!board.is_valid(BOARD_WIDTH as i8, 0));
    assert!(!board.is_valid(0, BOARD_HEIGHT as i8));
}

#[test]
fn test_board_is_valid_and_occupied() {
    let mut board = Board::new();

    assert!(board.is_valid(5, 10));
    assert!(!board.is_occupied(5, 10));

    board.set(5, 10, Some(PieceKind::T));
    assert!(!board.is_valid(5, 10));
    assert!(board.is_occupied(5, 10));

    // Out of bounds is neither valid nor occupied-by-a-cell.
    assert!(!board.is_occupied(-1, 0));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();

    assert!(!board.is_row_full(5));

    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 5, Some(PieceKind::T));
    }
    assert!(board.is_row_full(5));

    // One gap is enough to not be full.
    board.set(3, 5, None);
    assert!(!board.is_row_full(5));

    // Out-of-range row is never full.
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_fill_piece_writes_cells() {
    let mut board = Board::new();

    let shape = [(0, 0), (1, 0), (0, 1), (1, 1)];
    board.fill_piece(&shape, 3, 5, PieceKind::O);

    assert_eq!(board.get(3, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(3, 6), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 6), Some(Some(PieceKind::O)));
}

#[test]
fn test_fill_piece_drops_cells_above_top() {
    let mut board = Board::new();

    // Piece partially above the board: rows -2 and -1 are dropped.
    let shape = [(0, 0), (0, 1), (0, 2), (0, 3)];
    board.fill_piece(&shape, 6, -2, PieceKind::I);

    assert_eq!(board.get(6, 0), Some(Some(PieceKind::I)));
    assert_eq!(board.get(6, 1), Some(Some(PieceKind::I)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

#[test]
fn test_clear_full_rows_single() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 5, Some(PieceKind::T));
    }
    board.set(0, 3, Some(PieceKind::I));
    board.set(1, 4, Some(PieceKind::O));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 1);
    assert!(cleared.contains(&5));

    // Rows above the cleared one shift down by one.
    assert_eq!(board.get(1, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(0, 4), Some(Some(PieceKind::I)));
    assert_eq!(board.get(0, 3), Some(None));
}

#[test]
fn test_clear_full_rows_preserves_row_order() {
    let mut board = Board::new();

    // Fill rows 5, 10 and 15 completely.
    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 5, Some(PieceKind::T));
        board.set(x as i8, 10, Some(PieceKind::I));
        board.set(x as i8, 15, Some(PieceKind::O));
    }

    // Markers above each full row.
    board.set(0, 4, Some(PieceKind::J));
    board.set(0, 9, Some(PieceKind::L));
    board.set(0, 14, Some(PieceKind::S));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 3);

    // Each marker drops by the number of full rows below it; the markers'
    // relative vertical order is preserved.
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
}

#[test]
fn test_clear_full_rows_inserts_empty_rows_at_top() {
    let mut board = Board::new();

    for y in [18i8, 19] {
        for x in 0..BOARD_WIDTH {
            board.set(x as i8, y, Some(PieceKind::Z));
        }
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);
    assert!(board.cells().iter().all(|c| c.is_none()));
}
