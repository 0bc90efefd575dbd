//! Game state module - the active piece state machine and session
//!
//! This module ties together the board, the piece queue, the hold slot and the
//! active piece. It owns every timer and is the only place that locks pieces.
//!
//! The driver calls [`GameState::tick`] once per frame with the elapsed time;
//! discrete intents (move, rotate, hold, hard drop) go through
//! [`GameState::apply_action`] and take effect immediately.
//!
//! # Lock delay
//!
//! The lock timer accumulates every tick and locks the piece once it reaches
//! the lock delay while the piece is grounded. Reaching a new lowest row resets
//! it outright. Other successful moves and rotations reset it only while the
//! per-piece extension budget (`lock_reset_limit`) lasts, so a piece cannot be
//! kept alive forever by shifting back and forth.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, SpawnOutcome};
use crate::hold::{HoldSlot, HoldSwap};
use crate::piece::Piece;
use crate::queue::{PieceQueue, Preview};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, TimersSnapshot};
use crate::types::{GameAction, GameConfig, MoveDirection, PieceKind, RotationDirection};

/// Observable state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// The active piece can still fall
    Falling,
    /// The active piece is resting; the lock timer decides when it commits
    Locking,
    /// A spawn was blocked; only a restart continues
    GameOver,
}

/// Emitted after every lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// The piece after this one could not spawn
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: GameConfig,
    board: Board,
    queue: PieceQueue<R>,
    active: Option<Piece>,
    hold: HoldSlot,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id for spawned pieces (queue spawns and hold swaps).
    piece_id: u32,
    last_event: Option<LockEvent>,
    lines: u32,
    pieces_locked: u32,
    step_timer: Duration,
    lock_timer: Duration,
    lock_resets: u8,
    /// Lowest anchor row reached by the active piece
    lowest_y: i32,
    game_over: bool,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed and default configuration
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), SimpleRng::new(seed))
    }

    /// Current RNG state (restarting from it continues the sequence)
    pub fn seed(&self) -> u32 {
        self.queue.seed()
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game on an empty board and spawn the first piece
    pub fn with_config(config: GameConfig, rng: R) -> Self {
        Self::from_board(config, Board::with_bounds(config.bounds), rng)
    }

    /// Create a game on a prepared board.
    ///
    /// If the stack already blocks the spawn anchor, the session starts in game over.
    pub fn from_board(config: GameConfig, board: Board, rng: R) -> Self {
        let mut state = Self {
            config,
            board,
            queue: PieceQueue::with_rng(rng, config.preview_len),
            active: None,
            hold: HoldSlot::new(),
            episode_id: 0,
            piece_id: 0,
            last_event: None,
            lines: 0,
            pieces_locked: 0,
            step_timer: Duration::ZERO,
            lock_timer: Duration::ZERO,
            lock_resets: 0,
            lowest_y: config.spawn_anchor.1,
            game_over: false,
        };
        state.spawn_next();
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn queue(&self) -> &PieceQueue<R> {
        &self.queue
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Absolute cells of the active piece (for rendering)
    pub fn active_cells(&self) -> Option<[(i32, i32); 4]> {
        self.active.map(|p| p.footprint())
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold.shape()
    }

    pub fn can_hold(&self) -> bool {
        self.hold.can_hold()
    }

    /// Upcoming shapes, as many as the preview length
    pub fn preview(&self) -> Preview {
        self.queue.preview()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn lock_timer(&self) -> Duration {
        self.lock_timer
    }

    pub fn step_timer(&self) -> Duration {
        self.step_timer
    }

    pub fn lock_resets(&self) -> u8 {
        self.lock_resets
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.is_grounded() {
            Phase::Locking
        } else {
            Phase::Falling
        }
    }

    /// Check if the active piece is resting on the stack or the floor
    pub fn is_grounded(&self) -> bool {
        match self.active {
            Some(ref piece) => piece.is_grounded(&self.board),
            None => false,
        }
    }

    /// Rows the active piece would fall on a hard drop (ghost position)
    pub fn drop_distance(&self) -> Option<i32> {
        self.active.map(|p| p.drop_distance(&self.board))
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Draw the next shape from the queue and spawn it
    fn spawn_next(&mut self) -> bool {
        let kind = self
            .queue
            .dequeue()
            .expect("piece queue underflow: lookahead refill invariant violated");
        self.queue.refill_if_needed();
        self.spawn(kind)
    }

    /// Spawn `kind` at the anchor, or end the game if the anchor is blocked
    fn spawn(&mut self, kind: PieceKind) -> bool {
        self.step_timer = Duration::ZERO;
        self.lock_timer = Duration::ZERO;
        self.lock_resets = 0;

        match self.board.spawn_piece(kind, self.config.spawn_anchor) {
            SpawnOutcome::Spawned(piece) => {
                self.lowest_y = piece.position().1;
                self.active = Some(piece);
                self.piece_id = self.piece_id.wrapping_add(1);
                debug!(?kind, piece_id = self.piece_id, "spawned");
                true
            }
            SpawnOutcome::Blocked => {
                self.active = None;
                self.game_over = true;
                debug!(?kind, episode_id = self.episode_id, "spawn blocked, game over");
                false
            }
        }
    }

    /// Bookkeeping after any successful move or rotation
    fn on_moved(&mut self) {
        let Some(piece) = self.active else {
            return;
        };
        let y = piece.position().1;
        if y < self.lowest_y {
            self.lowest_y = y;
            self.lock_timer = Duration::ZERO;
            self.lock_resets = 0;
        } else if self.lock_resets < self.config.lock_reset_limit {
            self.lock_timer = Duration::ZERO;
            self.lock_resets += 1;
        }
    }

    /// Try to move the active piece one cell
    pub fn try_move(&mut self, direction: MoveDirection) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !piece.try_move(&self.board, direction) {
            return false;
        }
        self.on_moved();
        true
    }

    /// Try to rotate the active piece with wall kicks
    pub fn try_rotate(&mut self, direction: RotationDirection) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !piece.try_rotate(&self.board, direction) {
            return false;
        }
        self.on_moved();
        true
    }

    /// Drop the active piece as far as it goes and lock it immediately.
    ///
    /// Returns the number of rows dropped, or `None` without an active piece.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if self.game_over || self.active.is_none() {
            return None;
        }
        let mut distance = 0;
        while self.try_move(MoveDirection::Down) {
            distance += 1;
        }
        self.lock_piece();
        Some(distance)
    }

    /// Swap the active piece with the hold slot (once per lock)
    pub fn hold(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let Some(swap) = self.hold.swap(active.kind()) else {
            return false;
        };

        self.active = None;
        debug!(held = ?active.kind(), ?swap, "hold");
        match swap {
            HoldSwap::FromQueue => self.spawn_next(),
            HoldSwap::Swapped(kind) => self.spawn(kind),
        };
        true
    }

    /// Commit the active piece to the board, clear lines and spawn the next piece
    pub fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.place(&piece.footprint(), piece.kind());
        let lines_cleared = self.board.clear_lines() as u32;
        self.lines += lines_cleared;
        self.pieces_locked += 1;
        self.hold.unlock();

        let spawned = self.spawn_next();
        self.last_event = Some(LockEvent {
            kind: piece.kind(),
            lines_cleared,
            game_over: !spawned,
        });
        debug!(
            kind = ?piece.kind(),
            lines_cleared,
            pieces_locked = self.pieces_locked,
            "locked"
        );
    }

    /// Advance gravity and lock timers by `dt`.
    ///
    /// Returns true if the piece fell a row or locked.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.game_over || self.active.is_none() {
            return false;
        }

        self.step_timer += dt;
        self.lock_timer += dt;

        let mut changed = false;
        if self.step_timer >= self.config.step_delay {
            self.step_timer = Duration::ZERO;
            changed = self.try_move(MoveDirection::Down);
        }

        if self.lock_timer >= self.config.lock_delay && self.is_grounded() {
            self.lock_piece();
            return true;
        }

        changed
    }

    /// Apply a decoded intent
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(MoveDirection::Left),
            GameAction::MoveRight => self.try_move(MoveDirection::Right),
            GameAction::SoftDrop => self.try_move(MoveDirection::Down),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::RotateCw => self.try_rotate(RotationDirection::Clockwise),
            GameAction::RotateCcw => self.try_rotate(RotationDirection::CounterClockwise),
            GameAction::Hold => self.hold(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Start a fresh session: new board, new queue, empty hold.
    ///
    /// The queue keeps drawing from the same random source, so a restarted
    /// game continues the sequence instead of replaying it.
    pub fn restart(&mut self) {
        self.board = Board::with_bounds(self.config.bounds);
        self.queue.reset();
        self.active = None;
        self.hold = HoldSlot::new();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.piece_id = 0;
        self.last_event = None;
        self.lines = 0;
        self.pieces_locked = 0;
        self.game_over = false;
        debug!(episode_id = self.episode_id, "restart");
        self.spawn_next();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.bounds = self.board.bounds();
        out.board.clear();
        out.board.extend(self.board.rows_top_down().map(|row| row.to_vec()));
        out.active = self.active.map(ActiveSnapshot::from);
        out.drop_distance = self.drop_distance();
        out.hold = self.hold.shape();
        out.can_hold = self.hold.can_hold();
        out.next_queue.clear();
        out.next_queue.extend(self.queue.preview());
        out.phase = self.phase();
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
        out.timers = TimersSnapshot {
            step_ms: self.step_timer.as_millis() as u32,
            lock_ms: self.lock_timer.as_millis() as u32,
            lock_resets: self.lock_resets,
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
