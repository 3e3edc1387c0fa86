//! Core module - pure game rules with no I/O dependencies
//!
//! Everything the game needs to decide legality and advance a turn lives
//! here: the board, the piece masks and rotation machine, the spawn policy,
//! and the engine that ties them together.

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use board::Board;
pub use engine::{GameEngine, TickEvent};
pub use piece::ActivePiece;
pub use rng::SimpleRng;
pub use snapshot::RenderSnapshot;
