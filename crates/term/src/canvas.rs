//! BoardCanvas: a [`Surface`] that paints into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use anyhow::Result;

use crate::engine::core::GameConfig;
use crate::engine::Surface;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rect};
use crate::types::Rgb;

const BORDER: Rgb = Rgb::new(200, 200, 200);
const OVERLAY: Rgb = Rgb::new(255, 255, 255);

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

/// Board-sized play area centered in the viewport, framed by a border.
///
/// Grid cell (`col`, `row`) covers `cell_w` by `cell_h` terminal cells.
/// Geometry is computed in `u32`; whatever falls outside the viewport is
/// clipped by the framebuffer.
pub struct BoardCanvas {
    cols: u16,
    rows: u16,
    cell_w: u32,
    cell_h: u32,
    viewport: Viewport,
    fb: FrameBuffer,
}

impl BoardCanvas {
    pub fn new(config: &GameConfig, viewport: Viewport) -> Self {
        Self {
            cols: config.cols,
            rows: config.rows,
            cell_w: config.cell_width as u32,
            cell_h: config.cell_height as u32,
            viewport,
            fb: FrameBuffer::new(viewport.width, viewport.height),
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    /// Takes effect on the next `clear`.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Border rectangle, centered; pinned to the top-left when it does not fit.
    pub fn frame_rect(&self) -> Rect {
        let width = self.cols as u32 * self.cell_w + 2;
        let height = self.rows as u32 * self.cell_h + 2;
        Rect::new(
            (self.viewport.width as u32).saturating_sub(width) / 2,
            (self.viewport.height as u32).saturating_sub(height) / 2,
            width,
            height,
        )
    }

    /// Area covered by grid cell (`col`, `row`).
    pub fn cell_rect(&self, col: u16, row: u16) -> Rect {
        let frame = self.frame_rect();
        Rect::new(
            frame.x + 1 + col as u32 * self.cell_w,
            frame.y + 1 + row as u32 * self.cell_h,
            self.cell_w,
            self.cell_h,
        )
    }

    fn draw_border(&mut self, r: Rect) {
        let style = CellStyle::ink(BORDER);
        let right = r.x + r.width - 1;
        let bottom = r.y + r.height - 1;
        let edges = [
            (Rect::new(r.x + 1, r.y, r.width - 2, 1), '─'),
            (Rect::new(r.x + 1, bottom, r.width - 2, 1), '─'),
            (Rect::new(r.x, r.y + 1, 1, r.height - 2), '│'),
            (Rect::new(right, r.y + 1, 1, r.height - 2), '│'),
            (Rect::new(r.x, r.y, 1, 1), '┌'),
            (Rect::new(right, r.y, 1, 1), '┐'),
            (Rect::new(r.x, bottom, 1, 1), '└'),
            (Rect::new(right, bottom, 1, 1), '┘'),
        ];
        for (rect, ch) in edges {
            self.fb.paint(rect, Glyph::new(ch, style));
        }
    }
}

impl Surface for BoardCanvas {
    fn clear(&mut self, color: Rgb) {
        self.fb.reset(self.viewport.width, self.viewport.height, Glyph::BLANK);
        let frame = self.frame_rect();
        self.draw_border(frame);
        let play = Rect::new(frame.x + 1, frame.y + 1, frame.width - 2, frame.height - 2);
        self.fb.paint(play, Glyph::new(' ', CellStyle::solid(color)));
    }

    fn fill_cell(&mut self, col: u16, row: u16, color: Rgb) {
        if col >= self.cols || row >= self.rows {
            return;
        }
        let rect = self.cell_rect(col, row);
        self.fb.paint(rect, Glyph::new('█', CellStyle::solid(color)));
    }

    fn overlay_text(&mut self, text: &str) {
        let frame = self.frame_rect();
        let text_w = text.chars().count() as u32;
        self.fb.write(
            frame.x + frame.width.saturating_sub(text_w) / 2,
            frame.y + frame.height / 2,
            text,
            CellStyle::ink(OVERLAY).bold(),
        );
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
