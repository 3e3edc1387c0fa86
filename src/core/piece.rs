//! Piece module - shape masks and the rotation state machine
//!
//! Each shape is an occupancy mask over a 3x3 or 4x4 bounding box, fixed at
//! construction. Rotation cycles through four stages by alternating two
//! in-place mask transforms: a transpose, then a reflection through the
//! anti-diagonal. Two stages compose to a 90-degree turn, so four stages are
//! the identity.

use arrayvec::ArrayVec;

use crate::types::{ColorTag, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Largest bounding box edge (the I and L families use 4x4)
pub const MAX_BOX: usize = 4;

/// Bounded scratch list of local mask coordinates
pub type LocalCells = ArrayVec<(usize, usize), { MAX_BOX * MAX_BOX }>;

/// Bounded list of absolute board coordinates occupied by a piece
pub type PieceCells = ArrayVec<(i8, i8), { MAX_BOX * MAX_BOX }>;

impl ShapeKind {
    /// Bounding box edge for this shape
    pub fn box_size(&self) -> usize {
        match self {
            ShapeKind::S | ShapeKind::SMirrored | ShapeKind::T | ShapeKind::O => 3,
            ShapeKind::I | ShapeKind::L | ShapeKind::LMirrored => 4,
        }
    }

    /// Occupied (x, y) offsets within the bounding box at spawn orientation.
    ///
    /// The O box is 3x3 and the L family carries five cells; both are part of
    /// the shape definitions and the rotation algorithm handles them uniformly.
    pub fn base_cells(&self) -> &'static [(usize, usize)] {
        match self {
            ShapeKind::S => &[(0, 0), (1, 0), (1, 1), (2, 1)],
            ShapeKind::SMirrored => &[(2, 0), (1, 0), (1, 1), (0, 1)],
            ShapeKind::T => &[(0, 0), (1, 0), (2, 0), (1, 1)],
            ShapeKind::O => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            ShapeKind::I => &[(0, 0), (1, 0), (2, 0), (3, 0)],
            ShapeKind::L => &[(0, 1), (1, 1), (2, 1), (3, 1), (0, 2)],
            ShapeKind::LMirrored => &[(3, 1), (2, 1), (1, 1), (0, 1), (3, 2)],
        }
    }
}

/// The single falling, player-controlled piece.
///
/// `(x, y)` is the top-left corner of the bounding box in board coordinates;
/// absolute cell positions derive from it plus the local mask offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub color: ColorTag,
    pub x: i8,
    pub y: i8,
    /// Rotation stage, cyclic 1 -> 2 -> 3 -> 4 -> 1
    stage: u8,
    size: usize,
    /// Occupancy mask, indexed `mask[x][y]`
    mask: [[bool; MAX_BOX]; MAX_BOX],
}

impl ActivePiece {
    pub fn new(kind: ShapeKind, color: ColorTag, x: i8, y: i8) -> Self {
        let mut mask = [[false; MAX_BOX]; MAX_BOX];
        for &(mx, my) in kind.base_cells() {
            mask[mx][my] = true;
        }
        Self {
            kind,
            color,
            x,
            y,
            stage: 1,
            size: kind.box_size(),
            mask,
        }
    }

    pub fn stage(&self) -> u8 {
        self.stage
    }

    pub fn box_size(&self) -> usize {
        self.size
    }

    /// Occupied local mask coordinates, x-major
    fn occupied_local(&self) -> LocalCells {
        let mut cells = LocalCells::new();
        for x in 0..self.size {
            for y in 0..self.size {
                if self.mask[x][y] {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    /// Absolute board coordinates currently occupied by the piece
    pub fn cells(&self) -> PieceCells {
        let mut cells = PieceCells::new();
        for (mx, my) in self.occupied_local() {
            cells.push((self.x + mx as i8, self.y + my as i8));
        }
        cells
    }

    /// Translate the bounding box. Legality is the engine's concern.
    pub fn shift(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Advance the rotation stage, mutating the mask in place.
    ///
    /// Stages 1 and 3 transpose the occupied cells; stages 2 and 4 reflect
    /// them through the anti-diagonal. The swaps run over a pre-collected
    /// occupied list, so symmetric pairs are swapped twice and land where the
    /// transform says they should.
    pub fn rotate(&mut self) {
        let occupied = self.occupied_local();
        let n = self.size;
        match self.stage {
            1 | 3 => {
                for (x, y) in occupied {
                    let a = self.mask[x][y];
                    self.mask[x][y] = self.mask[y][x];
                    self.mask[y][x] = a;
                }
            }
            2 | 4 => {
                for (x, y) in occupied {
                    let (rx, ry) = (n - 1 - y, n - 1 - x);
                    let a = self.mask[x][y];
                    self.mask[x][y] = self.mask[rx][ry];
                    self.mask[rx][ry] = a;
                }
            }
            _ => unreachable!("rotation stage out of range: {}", self.stage),
        }
        self.stage = self.stage % 4 + 1;
    }

    /// Check whether the next rotation stage fits the board.
    ///
    /// The probe targets depend on stage parity: entering stage 2 or 4 the
    /// transpose targets `(y, x)` are evaluated; entering stage 3 or 1 the
    /// anti-diagonal targets `(n-1-y, n-1-x)` are evaluated. Each target must
    /// lie within the walls, above the bottom row, and on an empty cell.
    /// `is_occupied` is only called with in-range coordinates.
    pub fn rotation_fits(&self, is_occupied: impl Fn(i8, i8) -> bool) -> bool {
        let n = self.size;
        for (x, y) in self.occupied_local() {
            let (tx, ty) = match self.stage {
                1 | 3 => (y, x),
                2 | 4 => (n - 1 - y, n - 1 - x),
                _ => unreachable!("rotation stage out of range: {}", self.stage),
            };
            let ax = self.x + tx as i8;
            let ay = self.y + ty as i8;
            if ax < 0 || ax >= BOARD_WIDTH as i8 || ay < 0 || ay >= BOARD_HEIGHT as i8 - 1 {
                return false;
            }
            if is_occupied(ax, ay) {
                return false;
            }
        }
        true
    }
}
