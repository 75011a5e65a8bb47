//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that settled there. Rows are stored as fixed-size row buffers, so
//! clearing lines is a compaction over the row store with no allocation.
//! Coordinates: (col, row) where col ranges 0..9 (left to right), row ranges
//! 0..19 (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_COLS, BOARD_ROWS};

const COLS: usize = BOARD_COLS as usize;
const ROWS: usize = BOARD_ROWS as usize;

/// One board row
pub type Row = [Cell; COLS];

/// Row indices of full rows, bottom to top
pub type FullRows = ArrayVec<u8, ROWS>;

/// The game board - 10 columns x 20 rows of settled cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [Row; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[None; COLS]; ROWS],
        }
    }

    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<(usize, usize)> {
        if col < 0 || col >= BOARD_COLS as i8 || row < 0 || row >= BOARD_ROWS as i8 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_COLS
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_ROWS
    }

    /// Get cell at position (col, row)
    /// Returns None if out of bounds
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|(c, r)| self.rows[r][c])
    }

    /// Write a cell at position (col, row)
    /// Returns false if out of bounds (including rows above the board)
    pub fn set_cell(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some((c, r)) => {
                self.rows[r][c] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Indices of all full rows, bottom to top
    pub fn full_rows(&self) -> FullRows {
        (0..ROWS)
            .rev()
            .filter(|&row| self.is_row_full(row))
            .map(|row| row as u8)
            .collect()
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows above a removed row move down; the same number of empty rows
    /// appear at the top. Scans bottom to top with a read and a write cursor,
    /// so consecutive full rows are all caught.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write = ROWS;

        for read in (0..ROWS).rev() {
            if self.is_row_full(read) {
                cleared += 1;
            } else {
                write -= 1;
                if write != read {
                    self.rows[write] = self.rows[read];
                }
            }
        }

        for row in &mut self.rows[..write] {
            *row = [None; COLS];
        }

        cleared
    }

    /// Write `kind` into every given cell; cells outside the board are skipped.
    /// Returns the number of cells written.
    pub fn lock_cells(
        &mut self,
        cells: impl IntoIterator<Item = (i8, i8)>,
        kind: PieceKind,
    ) -> usize {
        cells
            .into_iter()
            .filter(|&(col, row)| self.set_cell(col, row, Some(kind)))
            .count()
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    /// Number of settled cells
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.rows = [[None; COLS]; ROWS];
    }

    /// Build a board from text rows, bottom-aligned.
    ///
    /// `#` (or a piece letter) marks a settled cell, anything else is empty.
    /// Used by tests and benches to set up positions.
    pub fn from_ascii(lines: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = ROWS.saturating_sub(lines.len());
        for (i, line) in lines.iter().take(ROWS).enumerate() {
            for (col, ch) in line.chars().take(COLS).enumerate() {
                let cell = match ch {
                    '#' => Some(PieceKind::I),
                    other => PieceKind::from_str(&other.to_string()),
                };
                board.rows[offset + i][col] = cell;
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
