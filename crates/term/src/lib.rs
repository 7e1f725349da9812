//! Terminal presentation for the game loop.
//!
//! Grid cells are painted into a simple framebuffer instead of going through
//! a widget toolkit, then flushed to the terminal as a diff against the
//! previous frame. Each grid cell covers `cell_width` by `cell_height`
//! terminal cells (2x1 by default, which roughly squares the glyph aspect).

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod surface;

pub use tui_blockfall_engine as engine;
pub use tui_blockfall_types as types;

pub use canvas::{BoardCanvas, Viewport};
pub use fb::{CellStyle, FrameBuffer, Glyph, Rect};
pub use renderer::{encode_frame, TerminalRenderer};
pub use surface::TerminalSurface;
