//! Grid module - the committed matrix of locked cells
//!
//! The grid is a 10x20 matrix where each cell is either empty or holds the
//! color of the piece that locked there. Uses a flat array for cache locality
//! and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{Cell, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row-major export of the grid, `rows[y][x]`.
pub type Rows = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Indices of rows removed in one clearing pass, in removal order.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The locked-cell grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Build a grid from a row-major matrix.
    pub fn from_rows(rows: Rows) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            grid.cells[start..start + BOARD_WIDTH as usize].copy_from_slice(row);
        }
        grid
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y), `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// True if (x, y) lies outside the grid or holds a locked cell.
    ///
    /// Walls, floor and ceiling all count as filled, so one predicate covers
    /// both boundary and stack collisions.
    #[inline]
    pub fn filled(&self, x: i8, y: i8) -> bool {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx].is_some(),
            None => true,
        }
    }

    /// Set a single cell.
    ///
    /// Callers only paint legality-checked coordinates; an out-of-range write
    /// is a bug and trips a debug assertion.
    pub fn paint_cell(&mut self, x: i8, y: i8, cell: Cell) {
        let idx = Self::index(x, y);
        debug_assert!(idx.is_some(), "paint outside the grid at ({}, {})", x, y);
        if let Some(idx) = idx {
            self.cells[idx] = cell;
        }
    }

    /// Paint every cell in `cells` with `color`.
    pub fn paint<I>(&mut self, cells: I, color: Rgb)
    where
        I: IntoIterator<Item = (i8, i8)>,
    {
        for (x, y) in cells {
            self.paint_cell(x, y, Some(color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shifting every row above it down by one.
    ///
    /// Row `i` takes the contents of row `i - 1` for `i` from `y` down to 1 and
    /// row 0 becomes empty. Rows below `y` are untouched.
    pub fn remove_row(&mut self, y: usize) {
        debug_assert!(y < BOARD_HEIGHT as usize, "remove_row({}) outside the grid", y);
        if y >= BOARD_HEIGHT as usize {
            return;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges.
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells.copy_within(src_start..src_start + width, dst_start);
        }

        self.cells[..width].fill(None);
    }

    /// Remove every full row and return the removed indices.
    ///
    /// Scans top to bottom. A removal only shifts rows that were already
    /// scanned (and found not full), so one pass leaves no full row behind.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared.push(y);
            }
        }
        cleared
    }

    /// Number of non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Copy the grid out as a row-major matrix.
    pub fn snapshot(&self) -> Rows {
        let mut rows: Rows = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (dst, src) in rows.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn fill_row(grid: &mut Grid, y: i8, color: Rgb) {
        for x in 0..BOARD_WIDTH as i8 {
            grid.paint_cell(x, y, Some(color));
        }
    }

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(9, 0), Some(9));
        assert_eq!(Grid::index(0, 1), Some(10));
        assert_eq!(Grid::index(9, 19), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(10, 0), None);
        assert_eq!(Grid::index(0, 20), None);
    }

    #[test]
    fn test_out_of_bounds_counts_as_filled() {
        let grid = Grid::new();
        assert!(grid.filled(-1, 5));
        assert!(grid.filled(10, 5));
        assert!(grid.filled(3, -1));
        assert!(grid.filled(3, 20));
        assert!(!grid.filled(3, 5));
    }

    #[test]
    fn test_remove_row_shifts_rows_above_only() {
        let mut grid = Grid::new();
        grid.paint_cell(2, 3, Some(RED));
        fill_row(&mut grid, 10, BLUE);
        grid.paint_cell(7, 15, Some(RED));

        grid.remove_row(10);

        assert_eq!(grid.get(2, 4), Some(Some(RED)));
        assert_eq!(grid.get(2, 3), Some(None));
        assert!(!grid.is_row_full(10));
        // Below the removed row nothing moves.
        assert_eq!(grid.get(7, 15), Some(Some(RED)));
    }

    #[test]
    fn test_remove_top_row_only_empties_it() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 0, RED);
        grid.paint_cell(4, 1, Some(BLUE));

        grid.remove_row(0);

        assert!(grid.rows().next().unwrap().iter().all(|c| c.is_none()));
        assert_eq!(grid.get(4, 1), Some(Some(BLUE)));
    }

    #[test]
    fn test_clear_adjacent_full_rows_in_one_pass() {
        let mut grid = Grid::new();
        grid.paint_cell(0, 16, Some(RED));
        fill_row(&mut grid, 17, BLUE);
        fill_row(&mut grid, 18, BLUE);
        grid.paint_cell(5, 19, Some(RED));

        let cleared = grid.clear_full_rows();

        assert_eq!(cleared.as_slice(), &[17, 18]);
        assert_eq!(grid.get(0, 18), Some(Some(RED)));
        assert_eq!(grid.get(5, 19), Some(Some(RED)));
        assert_eq!(grid.filled_count(), 2);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut rows: Rows = [[None; 10]; 20];
        rows[5][3] = Some(RED);
        rows[19][9] = Some(BLUE);

        let grid = Grid::from_rows(rows);
        assert_eq!(grid.snapshot(), rows);
        assert_eq!(grid.get(3, 5), Some(Some(RED)));
    }
}
