//! Jam and foreign-object monitoring
//!
//! The belt carries a photo gate and a rock-detection sensor. Both are
//! sampled every tick but drive no control logic unless the jam hook is
//! explicitly enabled in configuration.

pub mod monitor;

pub use monitor::{FaultKind, SafetyMonitor, SafetyStatus};
