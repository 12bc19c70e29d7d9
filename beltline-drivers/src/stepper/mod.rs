//! Stepper driver implementations

pub mod four_wire;
pub mod position;

pub use four_wire::FourWireStepper;
pub use position::PositionStepper;
