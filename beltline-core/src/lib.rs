//! Board-agnostic core logic for the conveyor belt controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (stepper, display)
//! - State machine for the run/stop/lockout cycle
//! - Per-tick controller evaluation
//! - Button debouncing and edge detection
//! - Step planning (acceleration math)
//! - Jam/foreign-object sensor hook
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

// Host tests link std (proptest needs it)
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod control;
pub mod input;
pub mod motion;
pub mod safety;
pub mod state;
pub mod traits;
