//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, collision checks, the shape
//! source and scoring. It handles piece movement, rotation, locking, line
//! clears and the NotStarted/Running/Paused/Over lifecycle.
//!
//! The game reads no clock. Drivers pass a monotonic millisecond timestamp to
//! [`GameState::tick`]; gravity fires once `drop_interval_ms` has elapsed since
//! the last drop.

use log::{debug, info, trace};

use crate::collision::{collides, overlaps};
use crate::pieces::Piece;
use crate::rng::{ShapeSource, SimpleRng};
use crate::scoring::{calculate_score, get_drop_interval_ms};
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::Board;

/// Horizontal offsets tried, in order, when rotating
const ROTATION_KICKS: [i8; 3] = [0, -1, 1];

/// Result of a gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or not yet time to drop
    Idle,
    /// The piece moved down one row
    Fell,
    /// The piece could not move down and was locked
    Locked(LockEvent),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = SimpleRng> {
    board: Board,
    current: Option<Piece>,
    /// Generated ahead of time, never placed on the board before promotion.
    next: Option<Piece>,
    source: S,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    phase: Phase,
    /// Gravity reference time. `None` until the first tick after start/resume.
    last_drop_ms: Option<u64>,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<S: ShapeSource> GameState<S> {
    /// Create a new, not yet started game drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            source,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: get_drop_interval_ms(START_LEVEL),
            phase: Phase::NotStarted,
            last_drop_ms: None,
            last_event: None,
        }
    }

    /// Start a new game.
    ///
    /// Works from any phase; an in-progress game is discarded and restarted.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.drop_interval_ms = get_drop_interval_ms(START_LEVEL);
        self.last_event = None;

        let current = self.draw_piece();
        self.current = Some(current);
        self.next = Some(self.draw_piece());

        self.phase = Phase::Running;
        self.last_drop_ms = None;

        info!(
            "game started: current={} next={}",
            current.kind.as_str(),
            self.next.map(|p| p.kind.as_str()).unwrap_or("-")
        );
    }

    /// Toggle between Running and Paused. No-op in other phases.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
            Phase::NotStarted | Phase::Over => false,
        }
    }

    /// Pause a running game
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        info!("phase {} at score {}", self.phase.as_str(), self.score);
        true
    }

    /// Resume a paused game.
    ///
    /// The gravity reference restarts at the next tick, so time spent paused
    /// never triggers a catch-up drop.
    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Running;
        self.last_drop_ms = None;
        info!("phase {}", self.phase.as_str());
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval in milliseconds
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the settled cells.
    ///
    /// For setting up positions (puzzles, tests, benches). The current piece
    /// is left where it is; game over is only checked at the next lock.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Last lock event, if not yet taken
    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.rows().iter()) {
            *dst = *src;
        }
        out.current = self.current;
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn draw_piece(&mut self) -> Piece {
        Piece::spawn(self.source.next_kind())
    }

    /// Try to move the current piece by (d_col, d_row).
    ///
    /// Applies the move and returns true only when the moved piece would not
    /// collide. Always false unless the game is running.
    pub fn try_move(&mut self, d_col: i8, d_row: i8) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        if collides(&piece, &self.board, d_col, d_row, None) {
            return false;
        }

        self.current = Some(piece.shifted(d_col, d_row));
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move one row down. Never locks; gravity and hard drop do that.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate the current piece clockwise.
    ///
    /// Tries the rotated shape in place, then one cell left, then one cell
    /// right. There is no vertical kick: a piece wedged against the floor may
    /// simply fail to rotate.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        let rotated = piece.shape.rotate_cw();
        for d_col in ROTATION_KICKS {
            if !collides(&piece, &self.board, d_col, 0, Some(&rotated)) {
                self.current = Some(Piece {
                    shape: rotated,
                    ..piece.shifted(d_col, 0)
                });
                return true;
            }
        }

        false
    }

    /// Drop the current piece to the lowest legal row and lock it at once.
    pub fn hard_drop(&mut self) -> Option<LockEvent> {
        if self.phase != Phase::Running {
            return None;
        }
        let mut piece = self.current?;

        while !collides(&piece, &self.board, 0, 1, None) {
            piece = piece.shifted(0, 1);
        }
        self.current = Some(piece);

        Some(self.lock_piece(piece))
    }

    /// Main game tick - gravity.
    ///
    /// `now_ms` is a monotonic timestamp. The first tick after start or resume
    /// only records the reference time.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }

        let Some(last_drop) = self.last_drop_ms else {
            self.last_drop_ms = Some(now_ms);
            return TickOutcome::Idle;
        };

        if now_ms.saturating_sub(last_drop) < u64::from(self.drop_interval_ms) {
            return TickOutcome::Idle;
        }
        self.last_drop_ms = Some(now_ms);

        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }

        match self.current {
            Some(piece) => TickOutcome::Locked(self.lock_piece(piece)),
            None => TickOutcome::Idle,
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let phase = self.phase;
        let changed = match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => {
                self.start();
                true
            }
        };
        trace!(
            "{} in {}: {}",
            action.as_str(),
            phase.as_str(),
            if changed { "applied" } else { "ignored" }
        );
        changed
    }

    /// Lock `piece` onto the board, clear lines, score, and promote the next piece.
    fn lock_piece(&mut self, piece: Piece) -> LockEvent {
        // Sub-cells still above the board cannot settle and are dropped.
        let written = self.board.lock_cells(piece.board_cells(), piece.kind);

        let full_rows = self.board.full_rows();
        let lines_cleared = self.board.clear_full_rows();

        let mut score_delta = 0;
        if let Some(result) = calculate_score(lines_cleared, self.lines, self.level) {
            score_delta = result.points;
            self.score = self.score.saturating_add(result.points);
            self.lines = result.lines;
            if result.level != self.level {
                info!(
                    "level {} -> {} (drop interval {}ms)",
                    self.level, result.level, result.drop_interval_ms
                );
            }
            self.level = result.level;
            self.drop_interval_ms = result.drop_interval_ms;
        }

        debug!(
            "locked {} at ({}, {}): {} cells, {} lines, +{}",
            piece.kind.as_str(),
            piece.col,
            piece.row,
            written,
            lines_cleared,
            score_delta
        );

        let promoted = match self.next.take() {
            Some(next) => next,
            None => self.draw_piece(),
        };
        self.current = Some(promoted);
        self.next = Some(self.draw_piece());

        let game_over = overlaps(&promoted, &self.board);
        if game_over {
            self.phase = Phase::Over;
            info!(
                "game over: score={} level={} lines={}",
                self.score, self.level, self.lines
            );
        }

        let mut cleared_rows = [0u8; 4];
        for (slot, &row) in cleared_rows.iter_mut().zip(full_rows.iter()) {
            *slot = row;
        }

        let event = LockEvent {
            lines_cleared: lines_cleared as u32,
            cleared_rows,
            score_delta,
            game_over,
        };
        self.last_event = Some(event);
        event
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
