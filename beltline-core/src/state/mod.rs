//! State machine for the conveyor run/stop/lockout cycle
//!
//! Defines the authoritative runtime behavior of the belt.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
