//! Grid tests - bounds, painting and row removal

use blockfall::core::Grid;
use blockfall::types::{PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

const RED: Rgb = PieceKind::Z.color();
const BLUE: Rgb = PieceKind::J.color();

fn fill_row(grid: &mut Grid, y: i8, color: Rgb) {
    grid.paint((0..BOARD_WIDTH as i8).map(|x| (x, y)), color);
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), BOARD_WIDTH);
    assert_eq!(grid.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(!grid.filled(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(grid.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_outside_counts_as_filled() {
    let grid = Grid::new();

    assert!(grid.filled(-1, 0));
    assert!(grid.filled(0, -1));
    assert!(grid.filled(BOARD_WIDTH as i8, 0));
    assert!(grid.filled(0, BOARD_HEIGHT as i8));

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_paint_sets_only_given_cells() {
    let mut grid = Grid::new();
    grid.paint([(0, 19), (1, 19), (9, 0)], RED);

    assert_eq!(grid.get(0, 19), Some(Some(RED)));
    assert_eq!(grid.get(9, 0), Some(Some(RED)));
    assert_eq!(grid.filled_count(), 3);
}

#[test]
fn test_remove_row_shifts_rows_above() {
    let mut grid = Grid::new();
    grid.paint([(3, 17)], RED);
    grid.paint([(4, 18)], BLUE);
    fill_row(&mut grid, 19, RED);
    grid.paint([(0, 0)], BLUE);

    grid.remove_row(18);

    // Row 19 untouched, 17 moved to 18, row 0 emptied and old row 0 moved to 1.
    assert!(grid.is_row_full(19));
    assert_eq!(grid.get(3, 18), Some(Some(RED)));
    assert_eq!(grid.get(4, 18), Some(None));
    assert_eq!(grid.get(0, 1), Some(Some(BLUE)));
    assert!(grid.rows().next().unwrap().iter().all(Option::is_none));
}

#[test]
fn test_remove_empty_row_only_shifts() {
    let mut grid = Grid::new();
    grid.paint([(2, 5)], RED);
    grid.paint([(7, 15)], BLUE);

    grid.remove_row(10);

    assert_eq!(grid.get(2, 6), Some(Some(RED)));
    assert_eq!(grid.get(7, 15), Some(Some(BLUE)));
    assert_eq!(grid.filled_count(), 2);
}

#[test]
fn test_clear_full_rows_removes_non_adjacent_rows() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 19, RED);
    grid.paint([(0, 18)], BLUE);
    fill_row(&mut grid, 17, RED);
    grid.paint([(5, 16)], BLUE);

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[17, 19]);

    assert_eq!(grid.filled_count(), 2);
    assert_eq!(grid.get(0, 19), Some(Some(BLUE)));
    assert_eq!(grid.get(5, 18), Some(Some(BLUE)));
    assert!((0..BOARD_HEIGHT as usize).all(|y| !grid.is_row_full(y)));
}

#[test]
fn test_clear_four_stacked_rows() {
    let mut grid = Grid::new();
    for y in 16..20 {
        fill_row(&mut grid, y, RED);
    }
    grid.paint([(4, 15)], BLUE);

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.len(), 4);
    assert_eq!(grid.filled_count(), 1);
    assert_eq!(grid.get(4, 19), Some(Some(BLUE)));
}

#[test]
fn test_snapshot_round_trips_through_from_rows() {
    let mut grid = Grid::new();
    grid.paint([(1, 2), (8, 19)], RED);

    let rows = grid.snapshot();
    assert_eq!(rows[2][1], Some(RED));
    assert_eq!(rows[19][8], Some(RED));
    assert_eq!(Grid::from_rows(rows), grid);
}
