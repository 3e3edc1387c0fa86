//! Terminal presentation layer: framebuffer, renderer, and game view.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::FrameBuffer;
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
