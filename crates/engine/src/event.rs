//! Events consumed by the game loop, one at a time.

use crate::types::Command;

/// One unit of work for the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Gravity period elapsed.
    Tick,
    /// A player command.
    Input(Command),
    /// Stop the session.
    Quit,
}

/// Why [`GameLoop::run`](crate::GameLoop::run) returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    GameOver,
}

impl ExitReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitReason::Quit => "quit",
            ExitReason::GameOver => "game over",
        }
    }
}
