//! Grid engine - the piece/board state machine
//!
//! Owns the board, the falling piece and the game status. Every placement
//! decision goes through [`GridEngine::collides`]; a move or rotation is
//! committed only when the candidate placement is free, so a rejected
//! attempt never changes anything.
//!
//! Per piece: `Falling -> Locked -> (clear + spawn) -> Falling`. A spawn whose
//! first placement already collides ends the game; after that every
//! operation is a no-op.

use log::{debug, info, trace};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::rng::SimpleRng;
use crate::shape::PieceShape;
use crate::types::{CellKind, GameStatus};

/// Grid coordinate of a shape's top-left corner.
///
/// `row` may be negative while a piece is still entering from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub col: i16,
    pub row: i16,
}

impl Position {
    pub const fn new(col: i16, row: i16) -> Self {
        Self { col, row }
    }

    pub fn offset(self, dcol: i16, drow: i16) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }
}

/// The falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: PieceShape,
    pub position: Position,
}

impl ActivePiece {
    pub fn new(shape: PieceShape, position: Position) -> Self {
        Self { shape, position }
    }

    /// Occupied cells in board coordinates, as `(col, row, kind)`.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16, CellKind)> + '_ {
        let Position { col, row } = self.position;
        self.shape
            .occupied()
            .map(move |(dx, dy, kind)| (col + dx, row + dy, kind))
    }

    pub fn kind(&self) -> CellKind {
        self.shape.kind()
    }
}

/// Result of one gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// The piece moved one row down.
    Moved,
    /// The piece was resting; it locked, rows were cleared, a new piece spawned.
    Locked { lines_cleared: usize },
    /// The game is over; nothing changed.
    Halted,
}

/// Emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: CellKind,
    pub lines_cleared: u32,
    /// Whether the follow-up spawn ended the game.
    pub game_over: bool,
}

/// Board, active piece and status for one session.
#[derive(Debug, Clone)]
pub struct GridEngine {
    board: Board,
    active: ActivePiece,
    status: GameStatus,
    shapes: Vec<PieceShape>,
    rng: SimpleRng,
    pieces_spawned: u32,
    pieces_locked: u32,
    lines_cleared: u32,
    last_cleared: usize,
    last_event: Option<LockEvent>,
}

impl GridEngine {
    /// Empty board, first piece already spawned.
    pub fn new(config: &GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::with_board(config, Board::new(config.cols, config.rows), seed)
    }

    /// Start from a prepared board. The first piece is spawned onto it, so a
    /// blocked spawn area yields an engine that is already over.
    pub fn with_board(config: &GameConfig, board: Board, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        if (board.width(), board.height()) != (config.cols, config.rows) {
            return Err(ConfigError::BoardMismatch {
                expected: (config.cols, config.rows),
                actual: (board.width(), board.height()),
            });
        }
        let first = config.shapes.first().cloned().ok_or(ConfigError::NoShapes)?;

        let mut engine = Self {
            board,
            active: ActivePiece::new(first, Position::default()),
            status: GameStatus::Running,
            shapes: config.shapes.clone(),
            rng: SimpleRng::new(seed),
            pieces_spawned: 0,
            pieces_locked: 0,
            lines_cleared: 0,
            last_cleared: 0,
            last_event: None,
        };
        engine.spawn_piece();
        Ok(engine)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Pieces spawned so far, including one whose spawn ended the game.
    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Pieces written into the board.
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Running total of cleared rows.
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Rows removed by the most recent [`GridEngine::clear_lines`].
    pub fn last_cleared(&self) -> usize {
        self.last_cleared
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Replace the active piece with a random shape centered at the top.
    ///
    /// If that placement already collides the game is over; the board is
    /// never touched. Returns whether the game is still running.
    pub fn spawn_piece(&mut self) -> bool {
        if self.is_over() {
            return false;
        }

        let Some(shape) = self.rng.choose(&self.shapes).cloned() else {
            return false;
        };
        let col = (self.board.width() as i16) / 2 - (shape.width() as i16) / 2;
        let position = Position::new(col, 0);
        let blocked = self.collides(&shape, position);

        self.active = ActivePiece::new(shape, position);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if blocked {
            self.status = GameStatus::Over;
            info!(
                "spawn of {} at ({}, {}) blocked, game over after {} lines",
                self.active.kind().as_str(),
                position.col,
                position.row,
                self.lines_cleared
            );
            return false;
        }

        debug!(
            "spawned {} at ({}, {})",
            self.active.kind().as_str(),
            position.col,
            position.row
        );
        true
    }

    /// Whether `shape` placed at `position` overlaps a wall, the floor or a
    /// filled board cell. Cells above the top row never collide.
    pub fn collides(&self, shape: &PieceShape, position: Position) -> bool {
        let cols = self.board.width() as i16;
        let rows = self.board.height() as i16;
        shape.occupied().any(|(dx, dy, _)| {
            let x = position.col + dx;
            let y = position.row + dy;
            if x < 0 || x >= cols || y >= rows {
                return true;
            }
            y >= 0 && self.board.is_occupied(x, y)
        })
    }

    /// Shift the active piece; applied only if the new placement is free.
    pub fn try_move(&mut self, dcol: i16, drow: i16) -> bool {
        if self.is_over() {
            return false;
        }
        let candidate = self.active.position.offset(dcol, drow);
        if self.collides(&self.active.shape, candidate) {
            trace!("move ({dcol}, {drow}) rejected");
            return false;
        }
        self.active.position = candidate;
        true
    }

    /// One gravity step: descend, or lock the resting piece, clear full rows
    /// and spawn the next piece.
    pub fn move_down_or_lock(&mut self) -> Descent {
        if self.is_over() {
            return Descent::Halted;
        }
        if self.try_move(0, 1) {
            return Descent::Moved;
        }

        let kind = self.active.kind();
        self.lock_active();
        let lines_cleared = self.clear_lines();
        let running = self.spawn_piece();

        self.last_event = Some(LockEvent {
            kind,
            lines_cleared: lines_cleared as u32,
            game_over: !running,
        });
        Descent::Locked { lines_cleared }
    }

    /// Write the active piece into the board. Cells still above the top row
    /// are dropped.
    fn lock_active(&mut self) {
        let mut skipped = 0;
        for (x, y, kind) in self.active.cells() {
            if y < 0 {
                skipped += 1;
                continue;
            }
            self.board.set(x, y, kind);
        }
        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        debug!(
            "locked {} at ({}, {}), {} cell(s) above the top",
            self.active.kind().as_str(),
            self.active.position.col,
            self.active.position.row,
            skipped
        );
    }

    /// Remove full rows, keeping the remaining rows in order and inserting
    /// empty rows at the top. Returns how many were removed.
    pub fn clear_lines(&mut self) -> usize {
        let cleared = self.board.clear_full_rows();
        self.last_cleared = cleared;
        self.lines_cleared = self.lines_cleared.wrapping_add(cleared as u32);
        if cleared > 0 {
            debug!("cleared {cleared} line(s), {} total", self.lines_cleared);
        }
        cleared
    }

    /// Rotate the active piece a quarter turn in place. No kicks: if the
    /// rotated footprint collides nothing changes.
    pub fn rotate_active(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        let rotated = self.active.shape.rotated();
        if self.collides(&rotated, self.active.position) {
            trace!("rotation rejected");
            return false;
        }
        self.active.shape = rotated;
        true
    }
}
