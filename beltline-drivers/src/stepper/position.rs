//! Position-controlled stepper driver
//!
//! Couples a [`StepPlanner`] with a raw step device to implement the
//! [`PositionActuator`] contract: converge on an absolute target under a
//! trapezoidal speed profile, at most one step per poll, no overshoot.

use beltline_core::config::StepperHwConfig;
use beltline_core::motion::{StepDirection, StepPlanner};
use beltline_core::traits::{PositionActuator, StepDevice};

/// Position-controlled stepper
pub struct PositionStepper<D> {
    device: D,
    planner: StepPlanner,
    /// Coils are released when a move completes so the motor does not
    /// hold torque (and heat) while the belt is idle
    energized: bool,
}

impl<D: StepDevice> PositionStepper<D> {
    /// Create a driver with explicit motion limits
    pub fn new(device: D, max_speed_sps: u32, accel_sps2: u32) -> Self {
        Self {
            device,
            planner: StepPlanner::new(max_speed_sps, accel_sps2),
            energized: false,
        }
    }

    /// Create a driver from a stepper hardware config
    pub fn from_config(device: D, config: &StepperHwConfig) -> Self {
        Self::new(device, config.max_speed_sps, config.accel_sps2)
    }

    /// Stop immediately, discarding the profile in progress
    ///
    /// The controller's emergency path commands the decelerated
    /// [`PositionActuator::stop`], matching how the belts behave in the
    /// field; `halt` is the hard kill for shutdown paths that must not
    /// take the braking distance.
    pub fn halt(&mut self) {
        self.planner.halt();
        self.device.release();
        self.energized = false;
    }

    /// Access the underlying step device
    pub fn device(&mut self) -> &mut D {
        &mut self.device
    }
}

impl<D: StepDevice> PositionActuator for PositionStepper<D> {
    fn move_to(&mut self, target: i64) {
        self.planner.move_to(target);
    }

    fn stop(&mut self) {
        self.planner.stop();
    }

    fn poll(&mut self, now_us: u64) -> bool {
        match self.planner.poll(now_us) {
            Some(StepDirection::Forward) => {
                self.device.forward();
                self.energized = true;
                true
            }
            Some(StepDirection::Backward) => {
                self.device.backward();
                self.energized = true;
                true
            }
            None => {
                if self.energized && !self.planner.is_running() {
                    self.device.release();
                    self.energized = false;
                }
                false
            }
        }
    }

    fn current_position(&self) -> i64 {
        self.planner.current_position()
    }

    fn distance_to_go(&self) -> i64 {
        self.planner.distance_to_go()
    }

    fn is_running(&self) -> bool {
        self.planner.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Step device that counts steps instead of driving coils
    struct CountingDevice {
        forward_steps: u32,
        backward_steps: u32,
        released: bool,
    }

    impl CountingDevice {
        fn new() -> Self {
            Self {
                forward_steps: 0,
                backward_steps: 0,
                released: true,
            }
        }
    }

    impl StepDevice for CountingDevice {
        fn forward(&mut self) {
            self.forward_steps += 1;
            self.released = false;
        }

        fn backward(&mut self) {
            self.backward_steps += 1;
            self.released = false;
        }

        fn release(&mut self) {
            self.released = true;
        }
    }

    fn run_until_idle(stepper: &mut PositionStepper<CountingDevice>, start_us: u64) -> u64 {
        let mut now_us = start_us;
        for _ in 0..120_000 {
            now_us += 1_000;
            stepper.poll(now_us);
            if !stepper.is_running() {
                break;
            }
        }
        // One settling poll to release the coils
        now_us += 1_000;
        stepper.poll(now_us);
        now_us
    }

    #[test]
    fn test_reaches_target_and_releases() {
        let mut stepper = PositionStepper::new(CountingDevice::new(), 1000, 500);
        stepper.move_to(200);

        run_until_idle(&mut stepper, 0);

        assert_eq!(stepper.current_position(), 200);
        assert_eq!(stepper.distance_to_go(), 0);
        assert_eq!(stepper.device().forward_steps, 200);
        assert_eq!(stepper.device().backward_steps, 0);
        assert!(stepper.device().released);
    }

    #[test]
    fn test_reissued_target_is_noop() {
        let mut stepper = PositionStepper::new(CountingDevice::new(), 1000, 500);
        stepper.move_to(100);
        let now_us = run_until_idle(&mut stepper, 0);
        assert_eq!(stepper.device().forward_steps, 100);

        stepper.move_to(100);
        for i in 1..100u64 {
            assert!(!stepper.poll(now_us + i * 1_000));
        }
        assert_eq!(stepper.device().forward_steps, 100);
    }

    #[test]
    fn test_stop_shortens_travel() {
        let mut stepper = PositionStepper::new(CountingDevice::new(), 1000, 500);
        stepper.move_to(100_000);

        let mut now_us = 0;
        for _ in 0..300 {
            now_us += 1_000;
            stepper.poll(now_us);
        }
        stepper.stop();
        run_until_idle(&mut stepper, now_us);

        assert!(!stepper.is_running());
        assert!(stepper.current_position() < 100_000);
        assert_eq!(stepper.device().backward_steps, 0);
    }

    #[test]
    fn test_halt_releases_immediately() {
        let mut stepper = PositionStepper::new(CountingDevice::new(), 1000, 500);
        stepper.move_to(5_000);
        let mut now_us = 0;
        for _ in 0..200 {
            now_us += 1_000;
            stepper.poll(now_us);
        }

        stepper.halt();
        assert!(!stepper.is_running());
        assert!(stepper.device().released);
        let position = stepper.current_position();

        assert!(!stepper.poll(now_us + 1_000));
        assert_eq!(stepper.current_position(), position);
    }
}
