//! Game loop module (surface-facing).
//!
//! This module owns the session: a drop timer, the single [`core::GridEngine`],
//! and the mapping from [`GameEvent`]s to engine calls. Drawing and input are
//! reached only through the [`Surface`] and [`InputSource`] traits, so the
//! loop runs the same against a terminal, a window, or a test double.
//!
//! # Example
//!
//! ```
//! use tui_blockfall_engine::core::{GameConfig, GridEngine};
//! use tui_blockfall_engine::types::Command;
//! use tui_blockfall_engine::{ExitReason, GameEvent, GameLoop};
//!
//! let config = GameConfig::default();
//! let engine = GridEngine::new(&config, 7).unwrap();
//! let mut game = GameLoop::new(&config, engine);
//!
//! assert_eq!(game.handle(GameEvent::Input(Command::Rotate)), None);
//! assert_eq!(game.handle(GameEvent::Quit), Some(ExitReason::Quit));
//! ```

pub mod event;
pub mod game_loop;
pub mod surface;
pub mod timer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use event::{ExitReason, GameEvent};
pub use game_loop::GameLoop;
pub use surface::{InputSource, Surface};
pub use timer::DropTimer;
