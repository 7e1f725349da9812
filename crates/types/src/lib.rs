//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (grid engine, game loop, terminal rendering).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered, row 0
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_TICK_MS` | 500 | Gravity period, one row per tick |
//! | `FRAME_MS` | 16 | Frame cap for the event wait (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{CellKind, Command, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Cell kinds carry their numeric tag
//! assert_eq!(CellKind::I.tag(), 1);
//! assert_eq!(CellKind::from_tag(7), Some(CellKind::T));
//!
//! // Commands have a stable log name
//! assert_eq!(Command::Rotate.as_str(), "rotate");
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Largest supported board side, in cells.
pub const MAX_BOARD_SIDE: u16 = 256;

/// Gravity period in milliseconds (one row every 500ms)
pub const DROP_TICK_MS: u32 = 500;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Board cell width in terminal columns.
///
/// 2x1 compensates for the typical terminal glyph aspect ratio.
pub const CELL_WIDTH: u16 = 2;

/// Board cell height in terminal rows.
pub const CELL_HEIGHT: u16 = 1;

/// Largest piece shape side, in cells.
pub const MAX_SHAPE_SIDE: usize = 4;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
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

/// The content of one board cell.
///
/// `Empty` plus the seven tetromino kinds. The numeric tag (0-7) follows
/// declaration order and is what shape literals and board dumps use:
/// - **Empty** (0): background, black
/// - **I** (1): cyan, horizontal bar
/// - **J** (2): blue
/// - **L** (3): orange
/// - **O** (4): yellow, 2x2 square
/// - **S** (5): green
/// - **Z** (6): red
/// - **T** (7): purple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

/// Every non-empty kind, in tag order.
pub const PIECE_KINDS: [CellKind; 7] = [
    CellKind::I,
    CellKind::J,
    CellKind::L,
    CellKind::O,
    CellKind::S,
    CellKind::Z,
    CellKind::T,
];

impl CellKind {
    /// Numeric tag in `0..=7`.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Inverse of [`CellKind::tag`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::CellKind;
    ///
    /// assert_eq!(CellKind::from_tag(0), Some(CellKind::Empty));
    /// assert_eq!(CellKind::from_tag(4), Some(CellKind::O));
    /// assert_eq!(CellKind::from_tag(8), None);
    /// ```
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(CellKind::Empty),
            1 => Some(CellKind::I),
            2 => Some(CellKind::J),
            3 => Some(CellKind::L),
            4 => Some(CellKind::O),
            5 => Some(CellKind::S),
            6 => Some(CellKind::Z),
            7 => Some(CellKind::T),
            _ => None,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, CellKind::Empty)
    }

    /// Default display color.
    pub const fn color(self) -> Rgb {
        match self {
            CellKind::Empty => Rgb::new(0, 0, 0),
            CellKind::I => Rgb::new(0, 255, 255),
            CellKind::J => Rgb::new(0, 0, 255),
            CellKind::L => Rgb::new(255, 165, 0),
            CellKind::O => Rgb::new(255, 255, 0),
            CellKind::S => Rgb::new(0, 255, 0),
            CellKind::Z => Rgb::new(255, 0, 0),
            CellKind::T => Rgb::new(128, 0, 128),
        }
    }

    /// Single-letter name, `"."` for empty.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Empty => ".",
            CellKind::I => "I",
            CellKind::J => "J",
            CellKind::L => "L",
            CellKind::O => "O",
            CellKind::S => "S",
            CellKind::Z => "Z",
            CellKind::T => "T",
        }
    }
}

/// Player commands dispatched by the game loop
///
/// Each command maps to exactly one grid engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it is resting
    SoftDrop,
    /// Rotate piece a quarter turn
    Rotate,
}

impl Command {
    /// camelCase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
        }
    }
}

/// Whether the session still accepts moves.
///
/// `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Over,
}
