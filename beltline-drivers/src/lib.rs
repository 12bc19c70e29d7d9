//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in beltline-core for the conveyor hardware:
//!
//! - Four-wire full-step coil sequencer
//! - Position-profile stepper driver
//! - HD44780 16x2 character display (4-bit mode)
//! - Debounced, polarity-aware button input
//! - Polarity-aware switched output (buzzer, alert LED)
//!
//! Drivers are written against the small pin traits in [`gpio`], so they
//! run on the host with mock pins and on target behind thin adapters.

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod gpio;
pub mod stepper;
