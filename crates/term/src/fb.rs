//! Glyph grid the canvas paints into and the renderer flushes.
//!
//! Painting takes rectangles in `u32` units and clips them to the buffer
//! once, so callers can compute cell positions for any configured cell size
//! without overflow and without bounds checks of their own.

use crate::types::Rgb;

/// Colors and weight of one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    /// Foreground and background both set to `color`.
    pub const fn solid(color: Rgb) -> Self {
        Self {
            fg: color,
            bg: color,
            bold: false,
        }
    }

    /// `fg` on the terminal's black.
    pub const fn ink(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::ink(Rgb::new(220, 220, 220))
    }
}

/// A character with its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: CellStyle,
}

impl Glyph {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    pub const BLANK: Glyph = Glyph::new(' ', CellStyle::ink(Rgb::new(220, 220, 220)));
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Rectangle in buffer units. May extend past the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            glyphs: Vec::new(),
        };
        fb.reset(width, height, Glyph::BLANK);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Resize to `width` by `height` and fill every glyph. Keeps the
    /// allocation when it is large enough.
    pub fn reset(&mut self, width: u16, height: u16, fill: Glyph) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs.resize(width as usize * height as usize, fill);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.row(y).get(x as usize).copied()
    }

    /// Glyphs of row `y`, left to right. Empty when out of range.
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    /// Fill the visible part of `rect`.
    pub fn paint(&mut self, rect: Rect, glyph: Glyph) {
        let x0 = rect.x.min(self.width as u32) as usize;
        let x1 = rect.x.saturating_add(rect.width).min(self.width as u32) as usize;
        let y0 = rect.y.min(self.height as u32) as usize;
        let y1 = rect.y.saturating_add(rect.height).min(self.height as u32) as usize;
        let stride = self.width as usize;
        for y in y0..y1 {
            self.glyphs[y * stride + x0..y * stride + x1].fill(glyph);
        }
    }

    /// Write `text` on row `y` from column `x`, dropping what falls outside.
    pub fn write(&mut self, x: u32, y: u32, text: &str, style: CellStyle) {
        if y >= self.height as u32 {
            return;
        }
        let stride = self.width as usize;
        let row = y as usize * stride;
        for (i, ch) in text.chars().enumerate() {
            let cx = x as usize + i;
            if cx >= stride {
                break;
            }
            self.glyphs[row + cx] = Glyph::new(ch, style);
        }
    }

    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Glyph {
        Glyph::new('#', CellStyle::solid(Rgb::new(255, 0, 0)))
    }

    #[test]
    fn paint_clips_to_buffer() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.paint(Rect::new(2, 1, 10, 10), red());
        assert_eq!(fb.row_text(0), "    ");
        assert_eq!(fb.row_text(1), "  ##");
        assert_eq!(fb.row_text(2), "  ##");
    }

    #[test]
    fn paint_far_outside_is_ignored() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.paint(Rect::new(u32::MAX - 1, 0, u32::MAX, 1), red());
        fb.paint(Rect::new(0, 70_000, 4, 1), red());
        assert_eq!(fb, FrameBuffer::new(4, 3));
    }

    #[test]
    fn write_truncates_at_right_edge() {
        let mut fb = FrameBuffer::new(5, 2);
        fb.write(3, 1, "GAME", CellStyle::default());
        fb.write(0, 9, "lost", CellStyle::default());
        assert_eq!(fb.row_text(1), "   GA");
        assert_eq!(fb.row_text(0), "     ");
    }

    #[test]
    fn reset_resizes_and_fills() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.reset(3, 1, red());
        assert_eq!((fb.width(), fb.height()), (3, 1));
        assert_eq!(fb.row_text(0), "###");
        assert_eq!(fb.get(3, 0), None);
        assert!(fb.row(1).is_empty());
    }
}
