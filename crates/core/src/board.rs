//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of cells stored as a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (negative y) are open space: pieces may hang there while
//! spawning, but nothing is ever stored there.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
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

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Collision test for a single cell.
    ///
    /// Blocked means: left of column 0, right of the last column, below the last
    /// row, or a filled cell on the board. Rows above the board are never blocked.
    pub fn is_blocked(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.is_occupied(x, y)
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(Cell::is_filled))
            .unwrap_or(false)
    }

    /// Borrow one row, `None` past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Fill every in-bounds cell of `cells` with `kind`.
    ///
    /// Cells outside the board (including rows above it) are skipped.
    /// Returns how many cells were written.
    pub fn lock_cells(&mut self, cells: &[(i8, i8)], kind: PieceKind) -> usize {
        cells
            .iter()
            .filter(|&&(x, y)| self.set(x, y, Cell::Filled(kind)))
            .count()
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Full rows are removed in one pass; the rest are compacted downward in
    /// their original order and the top is refilled with empty rows.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, { BOARD_HEIGHT as usize }> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = Cell::Empty;
        }

        cleared_rows
    }

    /// Clear full rows and return only how many there were
    pub fn clear_full_lines(&mut self) -> u32 {
        self.clear_full_rows().len() as u32
    }

    /// Game-over predicate: anything locked into the topmost row
    pub fn top_row_has_any_filled(&self) -> bool {
        self.cells[..BOARD_WIDTH as usize]
            .iter()
            .any(Cell::is_filled)
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; BOARD_SIZE];
    }

    /// Build a board from text rows, top row first.
    ///
    /// `#` marks a filled cell, anything else is empty. Missing rows at the top
    /// are empty; the given rows sit at the bottom of the board.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = (BOARD_HEIGHT as usize).saturating_sub(rows.len());
        for (i, line) in rows.iter().take(BOARD_HEIGHT as usize).enumerate() {
            for (x, ch) in line.chars().take(BOARD_WIDTH as usize).enumerate() {
                if ch == '#' {
                    board.set(x as i8, (offset + i) as i8, Cell::Filled(PieceKind::I));
                }
            }
        }
        board
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
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_rows_above_board_are_open() {
        let board = Board::new();
        assert!(!board.is_blocked(4, -1));
        assert!(!board.is_blocked(0, -3));
        // Walls still apply above the board
        assert!(board.is_blocked(-1, -1));
        assert!(board.is_blocked(10, -1));
    }

    #[test]
    fn test_from_rows_places_rows_at_bottom() {
        let board = Board::from_rows(&["#.........", "##########"]);
        assert!(board.is_occupied(0, 18));
        assert!(!board.is_occupied(1, 18));
        assert!(board.is_row_full(19));
        assert_eq!(board.filled_count(), 11);
    }

    #[test]
    fn test_clear_keeps_relative_order() {
        let mut board = Board::from_rows(&[
            "#.........",
            "##########",
            ".#........",
            "##########",
            "..#.......",
        ]);
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[18, 16]);
        assert!(board.is_occupied(0, 17));
        assert!(board.is_occupied(1, 18));
        assert!(board.is_occupied(2, 19));
        assert_eq!(board.filled_count(), 3);
    }

    #[test]
    fn test_lock_cells_skips_out_of_bounds() {
        let mut board = Board::new();
        let written = board.lock_cells(&[(0, -1), (0, 0), (10, 5), (3, 19)], PieceKind::T);
        assert_eq!(written, 2);
        assert!(board.top_row_has_any_filled());
        assert_eq!(board.get(3, 19), Some(Cell::Filled(PieceKind::T)));
    }
}
