//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and provides a DAS/ARR handler
//! that turns held movement keys into repeated actions, including on
//! terminals that never report key releases.

pub mod handler;
pub mod map;

pub use blockstacker_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
