//! Game loop - turns time and input into grid engine calls
//!
//! One control flow: wait for input until the frame deadline, handle each
//! event in arrival order, advance the drop timer by the measured elapsed
//! time, draw once. The loop holds the only [`GridEngine`], so no grid state
//! is ever shared.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info, trace};

use crate::core::{GameConfig, GridEngine, Palette};
use crate::event::{ExitReason, GameEvent};
use crate::surface::{InputSource, Surface};
use crate::timer::DropTimer;
use crate::types::Command;

/// Drives one session of a [`GridEngine`].
pub struct GameLoop {
    engine: GridEngine,
    palette: Palette,
    timer: DropTimer,
    frame: Duration,
    frames: u64,
}

impl GameLoop {
    pub fn new(config: &GameConfig, engine: GridEngine) -> Self {
        Self {
            engine,
            palette: config.palette,
            timer: DropTimer::new(Duration::from_millis(config.drop_tick_ms as u64)),
            frame: Duration::from_millis(config.frame_ms as u64),
            frames: 0,
        }
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Frames drawn by [`GameLoop::run`] so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Apply one event. Returns the exit reason once the session is over.
    pub fn handle(&mut self, event: GameEvent) -> Option<ExitReason> {
        match event {
            GameEvent::Quit => return Some(ExitReason::Quit),
            GameEvent::Tick => self.drop_one(),
            GameEvent::Input(command) => self.dispatch(command),
        }
        self.engine.is_over().then_some(ExitReason::GameOver)
    }

    /// Advance the drop timer by `dt`, applying every tick that fell due.
    pub fn advance(&mut self, dt: Duration) -> Option<ExitReason> {
        for _ in 0..self.timer.advance(dt) {
            if let Some(reason) = self.handle(GameEvent::Tick) {
                return Some(reason);
            }
        }
        None
    }

    fn dispatch(&mut self, command: Command) {
        trace!("command {}", command.as_str());
        match command {
            Command::MoveLeft => {
                self.engine.try_move(-1, 0);
            }
            Command::MoveRight => {
                self.engine.try_move(1, 0);
            }
            Command::SoftDrop => self.drop_one(),
            Command::Rotate => {
                self.engine.rotate_active();
            }
        }
    }

    fn drop_one(&mut self) {
        self.engine.move_down_or_lock();
        if let Some(event) = self.engine.take_last_event() {
            debug!(
                "lock {}: {} line(s), {} total",
                event.kind.as_str(),
                event.lines_cleared,
                self.engine.lines_cleared()
            );
        }
    }

    /// Paint the board and the active piece, then present.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<()> {
        surface.clear(self.palette.background());

        let board = self.engine.board();
        for (y, row) in board.rows().enumerate() {
            for (x, &kind) in row.iter().enumerate() {
                if !kind.is_empty() {
                    surface.fill_cell(x as u16, y as u16, self.palette.color(kind));
                }
            }
        }

        for (x, y, kind) in self.engine.active().cells() {
            if x < 0 || y < 0 || x >= board.width() as i16 || y >= board.height() as i16 {
                continue;
            }
            surface.fill_cell(x as u16, y as u16, self.palette.color(kind));
        }

        if self.engine.is_over() {
            surface.overlay_text("GAME OVER");
        }

        surface.present()
    }

    /// Run until quit or game over. The final state is drawn before returning.
    pub fn run<S: Surface, I: InputSource>(
        &mut self,
        surface: &mut S,
        input: &mut I,
    ) -> Result<ExitReason> {
        info!(
            "game loop started: drop every {:?}, frame {:?}",
            self.timer.period(),
            self.frame
        );

        let mut last = Instant::now();
        let reason = 'frames: loop {
            if self.engine.is_over() {
                break ExitReason::GameOver;
            }

            let deadline = last + self.frame;
            while let Some(event) = input.poll(deadline.saturating_duration_since(Instant::now()))? {
                if let Some(reason) = self.handle(event) {
                    break 'frames reason;
                }
                if Instant::now() >= deadline {
                    break;
                }
            }

            let now = Instant::now();
            let dt = now.duration_since(last);
            last = now;
            if let Some(reason) = self.advance(dt) {
                break reason;
            }

            self.draw(surface)?;
            self.frames += 1;
        };

        self.draw(surface)?;
        info!(
            "game loop ended ({}) after {} frames and {} spawns: {}",
            reason.as_str(),
            self.frames,
            self.engine.pieces_spawned(),
            self.summary()
        );
        Ok(reason)
    }

    /// Session totals. A piece whose spawn ended the game was never placed.
    pub fn summary(&self) -> String {
        format!(
            "pieces placed: {}, lines cleared: {}",
            self.engine.pieces_locked(),
            self.engine.lines_cleared()
        )
    }
}
