//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data, usable from the simulation core, the input layer,
//! and any renderer that reads game state.
//!
//! # Coordinates
//!
//! The playfield is not origin-zero. Bounds are centered so that `(0, 0)` sits
//! near the bottom-center of the field, and `y` grows upwards:
//!
//! - **Width**: 10 columns (x in `-5..5`)
//! - **Height**: 22 rows (y in `-10..12`)
//! - **Spawn anchor**: `(-1, 8)`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `STEP_DELAY` | 1s | Gravity step interval |
//! | `LOCK_DELAY` | 500ms | Time a grounded piece waits before locking |
//! | `LOCK_RESET_LIMIT` | 15 | Max lock timer extensions per piece |
//! | `DAS_DELAY` | 150ms | Delay before a held move key repeats |
//! | `ARR_INTERVAL` | 50ms | Interval between repeated moves |
//! | `SOFT_DROP_INTERVAL` | 100ms | Interval between repeated soft drops |
//!
//! # Examples
//!
//! ```
//! use blockstacker_types::{GameAction, PieceKind, Rotation, RotationDirection};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//!
//! let rotation = Rotation::Spawn.rotate(RotationDirection::CounterClockwise);
//! assert_eq!(rotation, Rotation::Left);
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i32 = 10;

/// Board height in cells (22 rows, the top two are spawn headroom)
pub const BOARD_HEIGHT: i32 = 22;

/// Bottom-left corner of the playfield
pub const BOARD_ORIGIN: (i32, i32) = (-5, -10);

/// Anchor every new piece is spawned at
pub const SPAWN_ANCHOR: (i32, i32) = (-1, 8);

/// Number of shapes in one bag (one of each)
pub const BAG_SIZE: usize = 7;

/// Default number of upcoming pieces exposed for display
pub const PREVIEW_LEN: usize = 5;

/// Largest preview window the queue supports
pub const MAX_PREVIEW_LEN: usize = BAG_SIZE;

/// Gravity step interval
pub const STEP_DELAY: Duration = Duration::from_secs(1);

/// Lock delay once the piece is resting on the stack or the floor
pub const LOCK_DELAY: Duration = Duration::from_millis(500);

/// Maximum number of lock timer extensions per piece from moves and rotations
pub const LOCK_RESET_LIMIT: u8 = 15;

/// DAS (Delayed Auto Shift) delay
pub const DAS_DELAY: Duration = Duration::from_millis(150);

/// ARR (Auto Repeat Rate) interval
pub const ARR_INTERVAL: Duration = Duration::from_millis(50);

/// Repeat interval while the soft drop key is held
pub const SOFT_DROP_INTERVAL: Duration = Duration::from_millis(100);

/// The seven tetromino piece kinds
///
/// Each piece doubles as the visual identity of the cells it leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; BAG_SIZE] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockstacker_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether the shape's bounding box has even width, so it rotates about a
    /// half-unit pivot.
    pub fn has_half_unit_pivot(&self) -> bool {
        matches!(self, PieceKind::I | PieceKind::O)
    }
}

/// Direction of a single rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// `+1` for clockwise, `-1` for counter-clockwise.
    pub fn sign(&self) -> i32 {
        match self {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Rotation states, indexed 0 to 3
///
/// - **Spawn** (0): orientation the piece enters the field with
/// - **Right** (1): one clockwise step
/// - **Flipped** (2): two steps
/// - **Left** (3): one counter-clockwise step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Spawn,
    Right,
    Flipped,
    Left,
}

impl Rotation {
    /// Rotation index in `0..4`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Build from any integer, wrapping modulo 4.
    ///
    /// ```
    /// use blockstacker_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(-1), Rotation::Left);
    /// assert_eq!(Rotation::from_index(4), Rotation::Spawn);
    /// ```
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Rotation::Spawn,
            1 => Rotation::Right,
            2 => Rotation::Flipped,
            _ => Rotation::Left,
        }
    }

    /// Advance one step in `direction`.
    pub fn rotate(&self, direction: RotationDirection) -> Self {
        Self::from_index(self.index() as i32 + direction.sign())
    }

    /// Parse rotation from string ("spawn" | "0", "right" | "1", ...)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spawn" | "0" => Some(Rotation::Spawn),
            "right" | "1" => Some(Rotation::Right),
            "flipped" | "2" => Some(Rotation::Flipped),
            "left" | "3" => Some(Rotation::Left),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::Spawn => "spawn",
            Rotation::Right => "right",
            Rotation::Flipped => "flipped",
            Rotation::Left => "left",
        }
    }
}

/// Unit translations a piece can attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Left,
    Right,
    Down,
}

impl MoveDirection {
    /// Translation as `(dx, dy)` with `y` growing upwards.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            MoveDirection::Left => (-1, 0),
            MoveDirection::Right => (1, 0),
            MoveDirection::Down => (0, -1),
        }
    }
}

/// Rectangular playfield bounds with an arbitrary bottom-left origin.
///
/// `x_min..x_max` and `y_min..y_max` are half-open, like `RectInt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: i32,
    pub y_min: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x_min: i32, y_min: i32, width: i32, height: i32) -> Self {
        Self {
            x_min,
            y_min,
            width,
            height,
        }
    }

    pub fn x_max(&self) -> i32 {
        self.x_min + self.width
    }

    pub fn y_max(&self) -> i32 {
        self.y_min + self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x_min && x < self.x_max() && y >= self.y_min && y < self.y_max()
    }

    /// Number of cells inside the bounds.
    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(BOARD_ORIGIN.0, BOARD_ORIGIN.1, BOARD_WIDTH, BOARD_HEIGHT)
    }
}

/// Tunables for one game session.
///
/// Defaults come from the constants in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub bounds: Bounds,
    pub spawn_anchor: (i32, i32),
    pub preview_len: usize,
    pub step_delay: Duration,
    pub lock_delay: Duration,
    pub lock_reset_limit: u8,
}

impl GameConfig {
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_spawn_anchor(mut self, x: i32, y: i32) -> Self {
        self.spawn_anchor = (x, y);
        self
    }

    /// Preview lengths are clamped to `1..=MAX_PREVIEW_LEN`.
    pub fn with_preview_len(mut self, preview_len: usize) -> Self {
        self.preview_len = preview_len.clamp(1, MAX_PREVIEW_LEN);
        self
    }

    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    pub fn with_lock_delay(mut self, lock_delay: Duration) -> Self {
        self.lock_delay = lock_delay;
        self
    }

    pub fn with_lock_reset_limit(mut self, limit: u8) -> Self {
        self.lock_reset_limit = limit;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            spawn_anchor: SPAWN_ANCHOR,
            preview_len: PREVIEW_LEN,
            step_delay: STEP_DELAY,
            lock_delay: LOCK_DELAY,
            lock_reset_limit: LOCK_RESET_LIMIT,
        }
    }
}

/// Decoded player intents
///
/// The input layer turns raw key states into these; the core only ever sees
/// intents, never keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Drop piece to its resting place and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Swap the active piece with the hold slot
    Hold,
    /// Start a fresh session (also acknowledges game over)
    Restart,
}

impl GameAction {
    /// Parse action from a camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockstacker_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateccw"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("pause"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
