//! Configuration types
//!
//! Board-agnostic configuration structures. There is no persisted
//! configuration on this machine; defaults are compiled in and the board
//! module of the firmware owns the wiring table.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
