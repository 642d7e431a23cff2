//! Board tests - placement rules, lock-in and row removal

use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH};
use blockfall::{Board, Rotation, Shape};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.cell(x, y), Some(Shape::Empty));
        }
    }
}

#[test]
fn test_cell_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.cell(-1, 0), None);
    assert_eq!(board.cell(0, -1), None);
    assert_eq!(board.cell(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.cell(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_placement_rejects_out_of_range_columns_and_floor() {
    let board = Board::new();

    // T occupies columns 1-3 of its box.
    assert!(board.placement_fits(Shape::T, Rotation::North, -1, 5));
    assert!(!board.placement_fits(Shape::T, Rotation::North, -2, 5));
    assert!(board.placement_fits(Shape::T, Rotation::North, 6, 5));
    assert!(!board.placement_fits(Shape::T, Rotation::North, 7, 5));

    // T occupies rows 1-2 of its box; row 21 is the floor.
    assert!(board.placement_fits(Shape::T, Rotation::North, 3, 19));
    assert!(!board.placement_fits(Shape::T, Rotation::North, 3, 20));
}

#[test]
fn test_placement_accepts_negative_rows() {
    let board = Board::new();
    // Entirely above the board counts as clear space.
    for shape in [Shape::Z, Shape::S, Shape::J, Shape::O, Shape::T, Shape::I, Shape::L] {
        assert!(
            board.placement_fits(shape, Rotation::North, 3, -4),
            "{:?} should fit above the buffer",
            shape
        );
    }
}

#[test]
fn test_placement_rejects_overlap() {
    let mut board = Board::new();
    board.set(5, 12, Shape::J);

    // T at (3, 10): bottom row of the box covers (4,12)-(6,12).
    assert!(!board.placement_fits(Shape::T, Rotation::North, 3, 10));
    assert!(board.placement_fits(Shape::T, Rotation::North, 3, 9));
}

#[test]
fn test_lock_piece_writes_identity() {
    let mut board = Board::new();
    board.lock_piece(Shape::T, Rotation::North, 3, 10);

    assert_eq!(board.cell(5, 11), Some(Shape::T));
    assert_eq!(board.cell(4, 12), Some(Shape::T));
    assert_eq!(board.cell(5, 12), Some(Shape::T));
    assert_eq!(board.cell(6, 12), Some(Shape::T));
    assert_eq!(
        board.cells().iter().filter(|c| !c.is_empty()).count(),
        4
    );
}

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Shape::I);
    }
}

#[test]
fn test_full_rows_bottom_to_top() {
    let mut board = Board::new();
    fill_row(&mut board, 3);
    fill_row(&mut board, 21);
    fill_row(&mut board, 17);

    assert_eq!(board.full_rows().as_slice(), &[21, 17, 3]);
}

#[test]
fn test_remove_rows_noop_on_clean_board() {
    let mut board = Board::new();
    board.set(2, 20, Shape::S);
    board.set(7, 21, Shape::Z);
    let before = board.clone();

    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_remove_rows_population_and_order() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    fill_row(&mut board, 20);
    board.set(1, 17, Shape::J);
    board.set(1, 18, Shape::L);
    board.set(1, 21, Shape::S);

    let population = board.cells().iter().filter(|c| !c.is_empty()).count();
    let removed = board.clear_full_rows();
    assert_eq!(removed.len(), 2);

    assert_eq!(
        board.cells().iter().filter(|c| !c.is_empty()).count(),
        population - 2 * BOARD_WIDTH as usize
    );

    // Markers above the removed rows fall by two, keeping their order; the
    // marker below stays put.
    assert_eq!(board.cell(1, 19), Some(Shape::J));
    assert_eq!(board.cell(1, 20), Some(Shape::L));
    assert_eq!(board.cell(1, 21), Some(Shape::S));
}

#[test]
fn test_quadruple_clear_leaves_no_full_rows() {
    let mut board = Board::new();
    for y in 18..22 {
        fill_row(&mut board, y);
    }
    board.set(0, 17, Shape::T);

    let removed = board.clear_full_rows();
    assert_eq!(removed.len(), 4);
    assert!(board.full_rows().is_empty());
    assert_eq!(board.cell(0, 21), Some(Shape::T));
}
