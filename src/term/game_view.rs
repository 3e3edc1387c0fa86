//! GameView: maps a `RenderSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-tested.

use crate::core::RenderSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorTag, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the playfield centered in the viewport.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame.
    pub fn render(&self, snapshot: &RenderSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.fill(' ', CellStyle::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells and the active piece share one paint path.
        for (x, y, color) in snapshot.cells() {
            self.draw_cell(&mut fb, start_x, start_y, x as u16, y as u16, tag_style(color));
        }

        // Rows about to clear flash white over whatever is there.
        let flash = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(235, 235, 235),
        };
        for &row in &snapshot.pending_rows {
            for x in 0..BOARD_WIDTH as u16 {
                self.draw_cell(&mut fb, start_x, start_y, x, row as u16, flash);
            }
        }

        let score_line = format!("Score: {}", snapshot.score);
        fb.put_str(start_x, start_y.saturating_sub(1), &score_line, border);

        if snapshot.game_over {
            let banner = "GAME OVER";
            let bx = start_x + frame_w.saturating_sub(banner.len() as u16) / 2;
            let by = start_y + frame_h / 2;
            let style = CellStyle {
                fg: Rgb::new(255, 80, 80),
                bg: Rgb::new(0, 0, 0),
            };
            fb.put_str(bx, by, banner, style);
        }

        fb
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        style: CellStyle,
    ) {
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 0..w {
            fb.set(x + dx, y, '─', style);
            fb.set(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.set(x, y + dy, '│', style);
            fb.set(x + w - 1, y + dy, '│', style);
        }
        fb.set(x, y, '┌', style);
        fb.set(x + w - 1, y, '┐', style);
        fb.set(x, y + h - 1, '└', style);
        fb.set(x + w - 1, y + h - 1, '┘', style);
    }
}

fn tag_style(color: ColorTag) -> CellStyle {
    let bg = match color {
        ColorTag::Red => Rgb::new(220, 70, 70),
        ColorTag::Blue => Rgb::new(80, 110, 230),
        ColorTag::Magenta => Rgb::new(200, 80, 200),
        ColorTag::Green => Rgb::new(90, 200, 100),
        ColorTag::Yellow => Rgb::new(230, 210, 80),
    };
    CellStyle {
        fg: Rgb::new(0, 0, 0),
        bg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameEngine;

    fn viewport() -> Viewport {
        Viewport::new(80, 30)
    }

    #[test]
    fn test_render_paints_active_piece() {
        let mut engine = GameEngine::new(12345);
        engine.start();
        let snapshot = engine.snapshot();
        let view = GameView::default();
        let fb = view.render(&snapshot, viewport());

        // At least one painted cell must match the active piece's color.
        let expected = tag_style(snapshot.active[0].2);
        let mut found = false;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).unwrap().style == expected {
                    found = true;
                }
            }
        }
        assert!(found);
    }

    #[test]
    fn test_render_flashes_pending_rows() {
        let mut snapshot = RenderSnapshot::default();
        snapshot.pending_rows.push(19);
        let view = GameView::default();
        let fb = view.render(&snapshot, viewport());

        // With an 80x30 viewport the playfield frame starts at (24, 4), so
        // board cell (0, 19) lands at terminal cell (25, 24).
        let white = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(235, 235, 235),
        };
        assert_eq!(fb.get(25, 24).unwrap().style, white);
        // Row 18 is untouched.
        assert_ne!(fb.get(25, 23).unwrap().style, white);
    }

    #[test]
    fn test_render_shows_score() {
        let engine = GameEngine::new(1);
        let snapshot = engine.snapshot();
        let view = GameView::default();
        let fb = view.render(&snapshot, viewport());

        let mut line = String::new();
        let y = (30u16.saturating_sub(22)) / 2 - 1;
        for x in 0..fb.width() {
            line.push(fb.get(x, y).unwrap().ch);
        }
        assert!(line.contains("Score: 0"));
    }
}
