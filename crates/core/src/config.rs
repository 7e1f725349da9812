//! Game configuration - every tunable the engine and loop read
//!
//! A [`GameConfig`] is built once at startup and handed to
//! [`GridEngine::new`](crate::GridEngine::new) and the game loop. Invalid
//! values fail fast in [`GameConfig::validate`].

use std::fmt;

use crate::shape::PieceShape;
use crate::types::{
    CellKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH, DROP_TICK_MS, FRAME_MS,
    MAX_BOARD_SIDE,
};

/// Fixed 8-entry color table, one entry per [`CellKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: [Rgb; 8],
}

impl Palette {
    /// Colors in tag order: background, I, J, L, O, S, Z, T.
    pub const fn from_colors(colors: [Rgb; 8]) -> Self {
        Self { colors }
    }

    pub fn color(&self, kind: CellKind) -> Rgb {
        self.colors[kind.tag() as usize]
    }

    pub fn background(&self) -> Rgb {
        self.color(CellKind::Empty)
    }

    pub fn with(mut self, kind: CellKind, color: Rgb) -> Self {
        self.colors[kind.tag() as usize] = color;
        self
    }

    pub fn colors(&self) -> &[Rgb; 8] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = [Rgb::default(); 8];
        for (tag, slot) in colors.iter_mut().enumerate() {
            if let Some(kind) = CellKind::from_tag(tag as u8) {
                *slot = kind.color();
            }
        }
        Self { colors }
    }
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A dimension or period that must be positive is zero.
    Zero(&'static str),
    /// Board side above [`MAX_BOARD_SIDE`].
    BoardTooLarge { rows: u16, cols: u16 },
    /// The shape set is empty.
    NoShapes,
    /// Shape `index` can never be placed on the board.
    ShapeDoesNotFit { index: usize, width: u8, height: u8 },
    /// A supplied board does not match the configured dimensions.
    BoardMismatch {
        expected: (u16, u16),
        actual: (u16, u16),
    },
    /// Board times cell size, plus a one-unit frame, exceeds a `u16` surface.
    CanvasTooLarge { width: u32, height: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Zero(what) => write!(f, "{what} must be greater than zero"),
            ConfigError::BoardTooLarge { rows, cols } => write!(
                f,
                "board {cols}x{rows} exceeds the {MAX_BOARD_SIDE} cell limit per side"
            ),
            ConfigError::NoShapes => write!(f, "shape set is empty"),
            ConfigError::ShapeDoesNotFit {
                index,
                width,
                height,
            } => write!(f, "shape {index} ({width}x{height}) does not fit the board"),
            ConfigError::BoardMismatch { expected, actual } => write!(
                f,
                "board is {}x{}, expected {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            ConfigError::CanvasTooLarge { width, height } => write!(
                f,
                "canvas {width}x{height} plus frame exceeds {} units per side",
                u16::MAX
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything the engine, loop and surface need to know up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    /// Surface units per board cell, horizontally.
    pub cell_width: u16,
    /// Surface units per board cell, vertically.
    pub cell_height: u16,
    pub palette: Palette,
    /// Spawn candidates, picked uniformly.
    pub shapes: Vec<PieceShape>,
    /// Gravity period.
    pub drop_tick_ms: u32,
    /// Upper bound on one event wait.
    pub frame_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_HEIGHT,
            cols: BOARD_WIDTH,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            palette: Palette::default(),
            shapes: PieceShape::canonical_set(),
            drop_tick_ms: DROP_TICK_MS,
            frame_ms: FRAME_MS,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Zero("rows"));
        }
        if self.cols == 0 {
            return Err(ConfigError::Zero("cols"));
        }
        if self.rows > MAX_BOARD_SIDE || self.cols > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.cell_width == 0 {
            return Err(ConfigError::Zero("cell width"));
        }
        if self.cell_height == 0 {
            return Err(ConfigError::Zero("cell height"));
        }
        let (width, height) = self.canvas_size();
        if width + 2 > u16::MAX as u32 || height + 2 > u16::MAX as u32 {
            return Err(ConfigError::CanvasTooLarge { width, height });
        }
        if self.drop_tick_ms == 0 {
            return Err(ConfigError::Zero("drop tick"));
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::Zero("frame period"));
        }
        if self.shapes.is_empty() {
            return Err(ConfigError::NoShapes);
        }
        for (index, shape) in self.shapes.iter().enumerate() {
            if shape.width() as u16 > self.cols || shape.height() as u16 > self.rows {
                return Err(ConfigError::ShapeDoesNotFit {
                    index,
                    width: shape.width(),
                    height: shape.height(),
                });
            }
        }
        Ok(())
    }

    /// Canvas size in surface units.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.cols as u32 * self.cell_width as u32,
            self.rows as u32 * self.cell_height as u32,
        )
    }
}
