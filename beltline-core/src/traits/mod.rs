//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod stepper;

pub use display::{DisplayError, StatusDisplay, DISPLAY_COLS, DISPLAY_ROWS};
pub use stepper::{PositionActuator, StepDevice};
