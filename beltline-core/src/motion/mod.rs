//! Motion planning
//!
//! Trapezoidal position profiles for the belt steppers: ramp up at a
//! fixed acceleration, cruise at the configured maximum speed, and brake
//! so the motor converges on its target without overshoot.

pub mod planner;

pub use planner::{StepDirection, StepPlanner};
