//! Render snapshot - everything the presentation layer needs for one frame
//!
//! The snapshot is plain data: locked cells, active-piece cells, the rows
//! pending a flash, the score, and the terminal flag. It can be reused across
//! frames via `snapshot_into` to avoid per-frame allocation.

use arrayvec::ArrayVec;

use crate::core::board::FullRows;
use crate::core::engine::GameEngine;
use crate::types::{Cell, ColorTag, BOARD_HEIGHT, BOARD_WIDTH};

/// Active-piece cells with their color (at most 16, the bounding-box area)
pub type ActiveCells = ArrayVec<(i8, i8, ColorTag), 16>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    /// Locked board cells, `board[y][x]`
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// Cells of the falling piece
    pub active: ActiveCells,
    /// Full rows awaiting removal (flash targets)
    pub pending_rows: FullRows,
    pub score: u32,
    pub game_over: bool,
}

impl RenderSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active.clear();
        self.pending_rows.clear();
        self.score = 0;
        self.game_over = false;
    }

    /// Every drawable cell: locked board cells first, then the active piece
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, ColorTag)> + '_ {
        let locked = self.board.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|color| (x as i8, y as i8, color)))
        });
        locked.chain(self.active.iter().copied())
    }
}

impl Default for RenderSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveCells::new(),
            pending_rows: FullRows::new(),
            score: 0,
            game_over: false,
        }
    }
}

impl GameEngine {
    /// Fill a reusable snapshot from the current state
    pub fn snapshot_into(&self, out: &mut RenderSnapshot) {
        out.clear();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                out.board[y as usize][x as usize] = self.board().get(x, y);
            }
        }
        if let Some(piece) = self.active() {
            for (x, y) in piece.cells() {
                out.active.push((x, y, piece.color));
            }
        }
        if let Some(rows) = self.pending_rows() {
            out.pending_rows = rows.clone();
        }
        out.score = self.score();
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let mut snapshot = RenderSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
