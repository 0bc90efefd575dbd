//! Blockstacker (workspace facade crate).
//!
//! Re-exports the simulation core, the shared types and the terminal input
//! layer under one name; the implementation lives in the crates under `crates/`.

pub use blockstacker_core as core;
pub use blockstacker_input as input;
pub use blockstacker_types as types;
