//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 15;
pub const BOARD_HEIGHT: u8 = 20;

/// Game timing constants (in milliseconds)
pub const GRAVITY_TICK_MS: u64 = 500;
pub const LINE_FLASH_MS: u64 = 450;
pub const LOCK_PAUSE_MS: u64 = 500;

/// Points awarded per cleared line
pub const LINE_SCORE: u32 = 10;

/// Number of piece families the spawner picks among (two of them have a
/// mirrored sibling chosen by a coin flip)
pub const SHAPE_FAMILIES: u32 = 5;

/// Size of the color palette pieces draw from
pub const PALETTE_SIZE: u32 = 5;

/// Color assigned to a piece, independent of its shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Red,
    Blue,
    Magenta,
    Green,
    Yellow,
}

/// Concrete piece shapes.
///
/// Five families; the S and L families each have a mirrored sibling, so the
/// spawner's 5-way family pick plus a coin flip yields a deliberately
/// non-uniform distribution over these seven variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    S,
    SMirrored,
    T,
    O,
    I,
    L,
    LMirrored,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::S,
        ShapeKind::SMirrored,
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::I,
        ShapeKind::L,
        ShapeKind::LMirrored,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::S => "s",
            ShapeKind::SMirrored => "s-mirrored",
            ShapeKind::T => "t",
            ShapeKind::O => "o",
            ShapeKind::I => "i",
            ShapeKind::L => "l",
            ShapeKind::LMirrored => "l-mirrored",
        }
    }
}

/// Player commands the engine accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    RotateCw,
    SoftDrop,
}

/// Cell on the board (None = empty, Some = locked with a color)
pub type Cell = Option<ColorTag>;
