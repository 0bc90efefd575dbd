//! Board module - manages the game grid
//!
//! The board is a rectangle of cells, each empty or holding the kind of the
//! piece that was locked there. Storage is a flat row-major vector; rows are
//! stored bottom-up, so row `bounds.y_min` is the first slice.
//!
//! Coordinates are not origin-zero: with the default bounds, x ranges `-5..5`
//! and y ranges `-10..12`, with y growing upwards.
//!
//! The board only knows about locked cells. The active piece lives outside it
//! and is validated against it through [`Board::is_valid_position`].

use tracing::debug;

use crate::piece::Piece;
use crate::types::{Bounds, Cell, PieceKind};

/// Result of trying to bring a piece into play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// The piece fits at the anchor.
    Spawned(Piece),
    /// The stack already covers the spawn footprint.
    Blocked,
}

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    bounds: Bounds,
    /// Flat array of cells, row-major, bottom row first
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the default 10x22 bounds
    pub fn new() -> Self {
        Self::with_bounds(Bounds::default())
    }

    /// Create a new empty board covering `bounds`
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![None; bounds.area()],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let col = (x - self.bounds.x_min) as usize;
        let row = (y - self.bounds.y_min) as usize;
        Some(row * self.bounds.width as usize + col)
    }

    /// Flat index range of a row inside the bounds
    fn row_range(&self, y: i32) -> Option<std::ops::Range<usize>> {
        let start = self.index(self.bounds.x_min, y)?;
        Some(start..start + self.bounds.width as usize)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff every absolute cell lies within bounds and is unoccupied.
    ///
    /// This is the only placement-legality check; every move, rotation, kick
    /// and spawn goes through it.
    pub fn is_valid_position(&self, cells: &[(i32, i32)]) -> bool {
        cells.iter().all(|&(x, y)| self.is_free(x, y))
    }

    /// Write `kind` into every cell of a footprint.
    ///
    /// Does not validate; callers check [`Board::is_valid_position`] first.
    /// Cells outside the bounds are skipped.
    pub fn place(&mut self, cells: &[(i32, i32)], kind: PieceKind) {
        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// Clear every cell of a footprint.
    pub fn remove(&mut self, cells: &[(i32, i32)]) {
        for &(x, y) in cells {
            self.set(x, y, None);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i32) -> bool {
        match self.row_range(y) {
            Some(range) => self.cells[range].iter().all(|cell| cell.is_some()),
            None => false,
        }
    }

    /// Check if a row has no filled cells
    pub fn is_row_empty(&self, y: i32) -> bool {
        match self.row_range(y) {
            Some(range) => self.cells[range].iter().all(|cell| cell.is_none()),
            None => true,
        }
    }

    /// Clear a row and shift every row above it down by one.
    ///
    /// The top row becomes empty; rows below `y` are untouched.
    pub fn clear_row(&mut self, y: i32) {
        let Some(range) = self.row_range(y) else {
            return;
        };
        let width = self.bounds.width as usize;
        let end = self.cells.len();

        // Rows are stored bottom-up, so "above" is later in the vector.
        self.cells.copy_within(range.end..end, range.start);
        for cell in &mut self.cells[end - width..] {
            *cell = None;
        }
    }

    /// Remove every full row, collapsing the stack, and return how many were cleared.
    ///
    /// Scans from the bottom row upwards. After a clear the same row index is
    /// examined again, since the row shifted into it may be full as well.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = self.bounds.y_min;
        while row < self.bounds.y_max() {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            } else {
                row += 1;
            }
        }
        if cleared > 0 {
            debug!(cleared, "lines cleared");
        }
        cleared
    }

    /// Build a piece at `anchor` and check it against the stack.
    pub fn spawn_piece(&self, kind: PieceKind, anchor: (i32, i32)) -> SpawnOutcome {
        let piece = Piece::new(kind, anchor);
        if self.is_valid_position(&piece.footprint()) {
            SpawnOutcome::Spawned(piece)
        } else {
            SpawnOutcome::Blocked
        }
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Row index of the highest filled cell, if any
    pub fn stack_top(&self) -> Option<i32> {
        (self.bounds.y_min..self.bounds.y_max())
            .rev()
            .find(|&y| !self.is_row_empty(y))
    }

    /// Cells of one row, left to right
    pub fn row(&self, y: i32) -> Option<&[Cell]> {
        self.row_range(y).map(|range| &self.cells[range])
    }

    /// Rows from top to bottom, for painting
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.bounds.width.max(1) as usize).rev()
    }

    /// Get a reference to the internal cells array (bottom row first)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Fill a whole row with `kind` (test and benchmark setup)
    pub fn fill_row(&mut self, y: i32, kind: PieceKind) {
        if let Some(range) = self.row_range(y) {
            for cell in &mut self.cells[range] {
                *cell = Some(kind);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(-5, -10), Some(0));
        assert_eq!(board.index(4, -10), Some(9));
        assert_eq!(board.index(-5, -9), Some(10));
        assert_eq!(board.index(4, 11), Some(219));
        assert_eq!(board.index(-6, 0), None);
        assert_eq!(board.index(5, 0), None);
        assert_eq!(board.index(0, 12), None);
        assert_eq!(board.index(0, -11), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(-5, -10, Some(PieceKind::I));
        board.set(0, 0, Some(PieceKind::T));

        assert_eq!(board.get(-5, -10), Some(Some(PieceKind::I)));
        assert_eq!(board.get(0, 0), Some(Some(PieceKind::T)));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_clear_row_shifts_only_rows_above() {
        let mut board = Board::new();
        board.set(0, -10, Some(PieceKind::J));
        board.fill_row(-9, PieceKind::I);
        board.set(1, -8, Some(PieceKind::O));
        board.set(2, 11, Some(PieceKind::Z));

        board.clear_row(-9);

        assert_eq!(board.get(0, -10), Some(Some(PieceKind::J)));
        assert_eq!(board.get(1, -9), Some(Some(PieceKind::O)));
        assert_eq!(board.get(1, -8), Some(None));
        assert_eq!(board.get(2, 10), Some(Some(PieceKind::Z)));
        assert!(board.is_row_empty(11));
    }

    #[test]
    fn test_rows_top_down_starts_at_top() {
        let mut board = Board::new();
        board.set(-5, 11, Some(PieceKind::L));
        let first = board.rows_top_down().next().unwrap();
        assert_eq!(first[0], Some(PieceKind::L));
        assert_eq!(board.rows_top_down().count(), 22);
    }

    #[test]
    fn test_stack_top() {
        let mut board = Board::new();
        assert_eq!(board.stack_top(), None);
        board.set(3, -4, Some(PieceKind::S));
        board.set(3, -7, Some(PieceKind::S));
        assert_eq!(board.stack_top(), Some(-4));
    }
}
