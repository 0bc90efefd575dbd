//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the simulation: the shape catalog, the bag
//! randomizer and queue, the board, the active piece with its wall kicks, the
//! hold slot, and the session state machine that ties them together.
//! It has no dependencies on UI, terminal or other I/O.
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Headless**: Time only advances through [`GameState::tick`]
//! - **Injectable randomness**: any [`RandomSource`] can drive the queue
//!
//! # Module Structure
//!
//! - [`catalog`]: shape definitions, precomputed rotation tables and kick tables
//! - [`rng`]: random sources and the bag shuffle
//! - [`queue`]: FIFO of upcoming shapes, refilled one bag at a time
//! - [`board`]: bounded grid with collision checks and line clearing
//! - [`piece`]: the active piece and its legal moves
//! - [`kicks`]: wall kick row selection and resolution
//! - [`hold`]: the hold slot and its once-per-lock guard
//! - [`game_state`]: timers, locking, spawning and the session itself
//! - [`snapshot`]: serializable read-only view of a session
//!
//! # Example
//!
//! ```
//! use blockstacker_core::GameState;
//! use blockstacker_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert_eq!(game.board().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time. Gravity moves the piece one row per step delay (1s by
//! default); a grounded piece locks after the lock delay (500ms).

pub mod board;
pub mod catalog;
pub mod game_state;
pub mod hold;
pub mod kicks;
pub mod piece;
pub mod queue;
pub mod rng;
pub mod snapshot;

pub use blockstacker_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, SpawnOutcome};
pub use catalog::{catalog, get_shape, tetromino, Catalog, PieceShape, TetrominoData};
pub use game_state::{GameState, LockEvent, Phase};
pub use hold::{HoldSlot, HoldSwap};
pub use piece::Piece;
pub use queue::{PieceQueue, Preview};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot, TimersSnapshot};
