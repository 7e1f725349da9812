//! Terminal input module (loop-facing).
//!
//! This module is independent of any UI framework beyond `crossterm`. It maps
//! key events into [`crate::types::Command`]s and exposes the terminal as an
//! [`InputSource`](tui_blockfall_engine::InputSource) for the game loop.

pub mod map;
pub mod terminal;

pub use tui_blockfall_types as types;

pub use map::{command_for_key, event_for_key, should_quit};
pub use terminal::TerminalInput;
