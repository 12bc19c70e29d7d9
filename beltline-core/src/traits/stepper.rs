//! Stepper actuator traits
//!
//! Two layers: [`StepDevice`] is the raw coil sequencer (one step at a
//! time, no timing), [`PositionActuator`] is the position-controlled
//! actuator the controller talks to.

/// Raw step sequencer for a stepper motor
///
/// Implementations advance the coil pattern by exactly one full step per
/// call. Timing is owned by the caller.
pub trait StepDevice {
    /// Take one step toward larger positions
    fn forward(&mut self);

    /// Take one step toward smaller positions
    fn backward(&mut self);

    /// De-energize all coils (no holding torque)
    fn release(&mut self);
}

/// Position-controlled stepper actuator
///
/// Contract: given a target and the configured max speed/acceleration,
/// the actuator converges monotonically to the target without overshoot.
/// Re-issuing the current target is a no-op.
pub trait PositionActuator {
    /// Command an absolute target position in steps
    fn move_to(&mut self, target: i64);

    /// Brake to a stop as quickly as the acceleration limit allows
    fn stop(&mut self);

    /// Advance toward the target if a step is due
    ///
    /// Must be called at least once per step interval; makes at most one
    /// step per call. Returns true if a step was taken.
    fn poll(&mut self, now_us: u64) -> bool;

    /// Current commanded position in steps
    fn current_position(&self) -> i64;

    /// Signed steps remaining to the target
    fn distance_to_go(&self) -> i64;

    /// Check if a move is in progress
    fn is_running(&self) -> bool;
}
