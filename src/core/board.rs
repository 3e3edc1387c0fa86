//! Board module - manages the persistent grid of locked cells
//!
//! The board is a 15x20 grid where each cell is empty or holds a locked color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..15 (left to right), y in 0..20 (top to bottom).
//!
//! Out-of-range queries are a caller contract violation: movement and rotation
//! checks clamp to the grid before asking the board anything.

use arrayvec::ArrayVec;

use crate::types::{Cell, ColorTag, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Rows currently full, reported bottom-up. Row 0 is never eligible,
/// so at most `BOARD_HEIGHT - 1` entries.
pub type FullRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 15 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates.
    /// In-range is a contract; violations are fatal.
    #[inline(always)]
    fn index(x: i8, y: i8) -> usize {
        assert!(
            x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8,
            "board query out of range: ({}, {})",
            x,
            y
        );
        (y as usize) * (BOARD_WIDTH as usize) + (x as usize)
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y). In-range contract applies.
    pub fn get(&self, x: i8, y: i8) -> Cell {
        self.cells[Self::index(x, y)]
    }

    /// Set cell at position (x, y). In-range contract applies.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) {
        self.cells[Self::index(x, y)] = cell;
    }

    /// Check if position holds a locked cell. In-range contract applies.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.cells[Self::index(x, y)].is_some()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Find the bottom-most full row, scanning from `height-1` up to `1`.
    ///
    /// Row 0 is deliberately excluded: it doubles as the spawn buffer and is
    /// never cleared.
    pub fn find_full_line(&self) -> Option<usize> {
        (1..BOARD_HEIGHT as usize).rev().find(|&y| self.is_row_full(y))
    }

    /// All currently-full rows, bottom-up. This is the payload handed to the
    /// presentation layer so it can flash the rows before they are removed.
    pub fn full_rows(&self) -> FullRows {
        let mut rows = FullRows::new();
        for y in (1..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(y) {
                rows.push(y);
            }
        }
        rows
    }

    /// Empty a full row. Every cell in the row must be occupied; clearing a
    /// partial row is a fatal precondition error.
    pub fn clear_line(&mut self, y: usize) {
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        for cell in &mut self.cells[start..end] {
            assert!(cell.is_some(), "clearing row {} that is not full", y);
            *cell = None;
        }
    }

    /// Gravity-collapse the stack above a cleared row by exactly one row.
    ///
    /// Iterates from `row-1` upward to `1`, moving each occupied cell down by
    /// one; that order guarantees the destination row was vacated first.
    /// Row 0 never shifts.
    pub fn compact_above(&mut self, row: usize) {
        for y in (1..row).rev() {
            for x in 0..BOARD_WIDTH as usize {
                let src = y * BOARD_WIDTH as usize + x;
                let dst = (y + 1) * BOARD_WIDTH as usize + x;
                if self.cells[src].is_some() {
                    self.cells.swap(src, dst);
                }
            }
        }
    }

    /// Check the spawn zone near the top center: columns
    /// `width/2-2 ..= width/2+1`, rows 0..2. Any occupied cell there means no
    /// new piece can spawn safely.
    pub fn is_spawn_zone_occupied(&self) -> bool {
        let x_start = (BOARD_WIDTH as i8) / 2 - 2;
        let x_end = (BOARD_WIDTH as i8) / 2 + 2;
        (0..2).any(|y| (x_start..x_end).any(|x| self.is_occupied(x, y)))
    }

    /// Write a locked piece's cells into the board.
    /// Precondition (debug-asserted): no target cell is already occupied.
    pub fn commit_cells(&mut self, cells: &[(i8, i8)], color: ColorTag) {
        for &(x, y) in cells {
            let idx = Self::index(x, y);
            debug_assert!(
                self.cells[idx].is_none(),
                "committing over an occupied cell at ({}, {})",
                x,
                y
            );
            self.cells[idx] = Some(color);
        }
    }

    /// Count of occupied cells in a row
    pub fn row_occupancy(&self, y: usize) -> usize {
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
