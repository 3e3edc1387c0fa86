//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermCell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for TermCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<TermCell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![TermCell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<TermCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Writes outside the buffer are silently dropped.
    pub fn set(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = TermCell { ch, style };
    }

    pub fn fill(&mut self, ch: char, style: CellStyle) {
        for cell in &mut self.cells {
            *cell = TermCell { ch, style };
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, ch, style);
            }
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        for (i, ch) in text.chars().enumerate() {
            self.set(x + i as u16, y, ch, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let mut fb = FrameBuffer::new(10, 5);
        let style = CellStyle {
            fg: Rgb::new(1, 2, 3),
            bg: Rgb::new(4, 5, 6),
        };
        fb.set(3, 2, '#', style);
        assert_eq!(fb.get(3, 2), Some(TermCell { ch: '#', style }));
    }

    #[test]
    fn test_out_of_bounds_is_silent() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.set(10, 10, 'x', CellStyle::default());
        assert_eq!(fb.get(10, 10), None);
    }

    #[test]
    fn test_put_str() {
        let mut fb = FrameBuffer::new(20, 2);
        fb.put_str(1, 0, "score", CellStyle::default());
        assert_eq!(fb.get(1, 0).unwrap().ch, 's');
        assert_eq!(fb.get(5, 0).unwrap().ch, 'e');
    }
}
