//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid rules and the piece state machine.
//! It has **zero dependencies** on rendering, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is a plain synchronous call
//! - **Portable**: Can run behind any surface (terminal, pixel canvas, headless)
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with row compaction
//! - [`shape`]: piece shape matrices and quarter-turn rotation
//! - [`grid_engine`]: active piece, collision, locking, line clears, game over
//! - [`config`]: validated game configuration and palette
//! - [`rng`]: seeded uniform piece selection
//!
//! # Game Rules
//!
//! - Pieces spawn horizontally centered on row 0, picked uniformly from the shape set
//! - A piece may hang above the top row; those cells never collide
//! - A piece that cannot descend locks immediately, full rows clear, the next piece spawns
//! - Rotation is a plain quarter turn with no wall kicks
//! - The game ends when a new piece's spawn placement collides
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Descent, GameConfig, GridEngine};
//!
//! let config = GameConfig::default();
//! let mut engine = GridEngine::new(&config, 12345).unwrap();
//!
//! engine.try_move(1, 0);
//! engine.rotate_active();
//! while engine.move_down_or_lock() == Descent::Moved {}
//!
//! assert!(engine.board().filled_count() > 0);
//! ```

pub mod board;
pub mod config;
pub mod grid_engine;
pub mod rng;
pub mod shape;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig, Palette};
pub use grid_engine::{ActivePiece, Descent, GridEngine, LockEvent, Position};
pub use rng::SimpleRng;
pub use shape::{PieceShape, ShapeError};
