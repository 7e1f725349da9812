//! The terminal as an event source.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tui_blockfall_engine::{GameEvent, InputSource};

use crate::map::event_for_key;

/// Reads key presses from the terminal via `crossterm`.
///
/// Only key-down events count; releases and terminal auto-repeat are
/// ignored, as are keys with no mapping.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> Result<Option<GameEvent>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(None);
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(event) = event_for_key(key) {
                    return Ok(Some(event));
                }
            }
        }
    }
}
