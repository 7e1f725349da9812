//! TerminalSurface: a [`BoardCanvas`] flushed through a [`TerminalRenderer`].

use anyhow::Result;
use crossterm::terminal;

use crate::canvas::{BoardCanvas, Viewport};
use crate::engine::core::GameConfig;
use crate::engine::Surface;
use crate::renderer::TerminalRenderer;
use crate::types::Rgb;

pub struct TerminalSurface {
    canvas: BoardCanvas,
    renderer: TerminalRenderer,
}

impl TerminalSurface {
    /// Sized to the current terminal. Does not touch terminal modes.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            canvas: BoardCanvas::new(config, Viewport::new(width, height)),
            renderer: TerminalRenderer::new(),
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self, color: Rgb) {
        self.canvas.clear(color);
    }

    fn fill_cell(&mut self, col: u16, row: u16, color: Rgb) {
        self.canvas.fill_cell(col, row, color);
    }

    fn overlay_text(&mut self, text: &str) {
        self.canvas.overlay_text(text);
    }

    fn present(&mut self) -> Result<()> {
        self.renderer.present(self.canvas.frame_mut())?;
        // Picked up by the next clear; the renderer redraws fully on resize.
        let (width, height) = terminal::size()?;
        self.canvas.set_viewport(Viewport::new(width, height));
        Ok(())
    }
}
