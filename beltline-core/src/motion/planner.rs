//! Trapezoidal step planner
//!
//! Integer fixed-point profile generator for one stepper axis. The
//! planner owns the commanded position and target; a driver layer calls
//! [`StepPlanner::poll`] as often as it can and forwards each emitted
//! step to the physical coil sequencer.
//!
//! At most one step is emitted per poll. The planner brakes once the
//! remaining distance falls inside the stopping distance `v^2 / 2a`, so
//! the profile converges on the target monotonically without overshoot.

/// Default maximum speed in steps per second
pub const DEFAULT_MAX_SPEED_SPS: u32 = 1000;

/// Default acceleration in steps per second squared
pub const DEFAULT_ACCEL_SPS2: u32 = 500;

/// Largest time delta credited to a single poll
///
/// Caps the speed/position integration after a scheduling gap so a stalled
/// task cannot produce a step burst or an instant ramp to full speed.
const MAX_DT_US: u64 = 50_000;

/// Fixed-point scale: speed is stored in microsteps per second
const USPS_PER_SPS: u64 = 1_000_000;

/// Fixed-point scale: one full step in the position accumulator
/// (microsteps/second x microseconds)
const PSTEPS_PER_STEP: u64 = 1_000_000_000_000;

/// Direction of an emitted step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepDirection {
    /// Toward larger positions
    Forward,
    /// Toward smaller positions
    Backward,
}

/// Trapezoidal position profile for a single stepper
#[derive(Debug, Clone)]
pub struct StepPlanner {
    /// Maximum speed in microsteps per second
    max_usps: u64,
    /// Acceleration in steps per second squared
    accel_sps2: u32,
    /// Minimum commanded speed while a move is pending, in microsteps
    /// per second. Chosen so the final step of a braked profile still
    /// completes in bounded time.
    crawl_usps: u64,
    /// Current speed in microsteps per second
    speed_usps: u64,
    /// Current travel direction (true = forward)
    forward: bool,
    /// Commanded position in steps
    position: i64,
    /// Target position in steps
    target: i64,
    /// Fractional step accumulator
    accum_psteps: u64,
    /// Timestamp of the previous poll
    last_poll_us: Option<u64>,
}

impl StepPlanner {
    /// Create a planner with the given speed limit and acceleration
    pub fn new(max_speed_sps: u32, accel_sps2: u32) -> Self {
        let accel = accel_sps2.max(1);
        Self {
            max_usps: u64::from(max_speed_sps.max(1)) * USPS_PER_SPS,
            accel_sps2: accel,
            crawl_usps: isqrt64(2 * u64::from(accel)).max(1) * USPS_PER_SPS,
            speed_usps: 0,
            forward: true,
            position: 0,
            target: 0,
            accum_psteps: 0,
            last_poll_us: None,
        }
    }

    /// Set a new absolute target position
    ///
    /// Re-issuing the current target is a no-op; the profile in progress
    /// continues unchanged.
    pub fn move_to(&mut self, target: i64) {
        self.target = target;
    }

    /// Brake to a stop as quickly as the acceleration limit allows
    ///
    /// Retargets to the nearest position reachable under deceleration.
    pub fn stop(&mut self) {
        if self.speed_usps == 0 {
            self.target = self.position;
            return;
        }
        let stop_steps = self.stopping_distance().max(1) as i64;
        self.target = if self.forward {
            self.position + stop_steps
        } else {
            self.position - stop_steps
        };
    }

    /// Stop immediately, discarding any profile in progress
    pub fn halt(&mut self) {
        self.target = self.position;
        self.speed_usps = 0;
        self.accum_psteps = 0;
    }

    /// Commanded position in steps
    pub fn current_position(&self) -> i64 {
        self.position
    }

    /// Current target position in steps
    pub fn target_position(&self) -> i64 {
        self.target
    }

    /// Signed steps remaining to the target
    pub fn distance_to_go(&self) -> i64 {
        self.target - self.position
    }

    /// Check if a move is in progress
    pub fn is_running(&self) -> bool {
        self.target != self.position || self.speed_usps > 0
    }

    /// Redefine the current position (e.g. after homing)
    ///
    /// Only valid while stopped; the target moves with the position.
    pub fn set_current_position(&mut self, position: i64) {
        self.position = position;
        self.target = position;
        self.speed_usps = 0;
        self.accum_psteps = 0;
    }

    /// Advance the profile to `now_us`, emitting at most one step
    ///
    /// Call as often as possible while a move is pending; at the
    /// configured maximum of 1000 steps/s that means at least once per
    /// millisecond.
    pub fn poll(&mut self, now_us: u64) -> Option<StepDirection> {
        let dt_us = match self.last_poll_us {
            Some(last) => now_us.saturating_sub(last).min(MAX_DT_US),
            None => 0,
        };
        self.last_poll_us = Some(now_us);
        if dt_us == 0 {
            return None;
        }

        let remaining = self.target - self.position;
        if remaining == 0 {
            // Target reached; the residual crawl speed is discarded
            self.speed_usps = 0;
            self.accum_psteps = 0;
            return None;
        }

        let want_forward = remaining > 0;
        let distance = remaining.unsigned_abs();
        let dv_usps = u64::from(self.accel_sps2) * dt_us;

        if want_forward != self.forward && self.speed_usps > 0 {
            // Moving away from the target: ramp down before reversing
            self.speed_usps = self.speed_usps.saturating_sub(dv_usps);
            if self.speed_usps == 0 {
                self.forward = want_forward;
            }
        } else {
            self.forward = want_forward;
            if self.stopping_distance() >= distance {
                // Inside braking distance
                self.speed_usps = self
                    .speed_usps
                    .saturating_sub(dv_usps)
                    .max(self.crawl_usps);
            } else {
                self.speed_usps = (self.speed_usps + dv_usps)
                    .clamp(self.crawl_usps, self.max_usps);
            }
        }

        // Integrate position; one step when a full step has accumulated
        self.accum_psteps += self.speed_usps * dt_us;
        if self.accum_psteps >= PSTEPS_PER_STEP {
            self.accum_psteps -= PSTEPS_PER_STEP;
            // One step per poll; excess accumulation is dropped
            self.accum_psteps = self.accum_psteps.min(PSTEPS_PER_STEP);
            if self.forward {
                self.position += 1;
                Some(StepDirection::Forward)
            } else {
                self.position -= 1;
                Some(StepDirection::Backward)
            }
        } else {
            None
        }
    }

    /// Steps needed to brake from the current speed
    fn stopping_distance(&self) -> u64 {
        let speed_sps = self.speed_usps / USPS_PER_SPS;
        (speed_sps * speed_sps) / (2 * u64::from(self.accel_sps2))
    }
}

impl Default for StepPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SPEED_SPS, DEFAULT_ACCEL_SPS2)
    }
}

/// Integer square root (floor)
fn isqrt64(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the planner with 1 ms polls until idle or the poll budget
    /// runs out; returns (forward steps, backward steps, max position).
    fn run_to_idle(planner: &mut StepPlanner, max_polls: u32) -> (u32, u32, i64) {
        let mut fwd = 0;
        let mut back = 0;
        let mut max_pos = planner.current_position();
        let mut now_us = 0u64;

        for _ in 0..max_polls {
            now_us += 1_000;
            match planner.poll(now_us) {
                Some(StepDirection::Forward) => fwd += 1,
                Some(StepDirection::Backward) => back += 1,
                None => {}
            }
            max_pos = max_pos.max(planner.current_position());
            if !planner.is_running() {
                break;
            }
        }
        (fwd, back, max_pos)
    }

    #[test]
    fn test_initial_state() {
        let planner = StepPlanner::default();
        assert_eq!(planner.current_position(), 0);
        assert_eq!(planner.distance_to_go(), 0);
        assert!(!planner.is_running());
    }

    #[test]
    fn test_converges_without_overshoot() {
        let mut planner = StepPlanner::new(1000, 1000);
        planner.move_to(100);
        assert!(planner.is_running());

        let (fwd, back, max_pos) = run_to_idle(&mut planner, 60_000);
        assert_eq!(planner.current_position(), 100);
        assert_eq!(fwd, 100);
        assert_eq!(back, 0);
        assert_eq!(max_pos, 100);
        assert!(!planner.is_running());
    }

    #[test]
    fn test_retarget_same_position_is_noop() {
        let mut planner = StepPlanner::new(1000, 1000);
        planner.move_to(50);
        let (_, _, _) = run_to_idle(&mut planner, 60_000);
        assert_eq!(planner.current_position(), 50);

        // Same target again: no further motion
        planner.move_to(50);
        let (fwd, back, _) = run_to_idle(&mut planner, 1_000);
        assert_eq!(fwd, 0);
        assert_eq!(back, 0);
        assert_eq!(planner.current_position(), 50);
    }

    #[test]
    fn test_stop_brakes_without_reversing() {
        let mut planner = StepPlanner::new(1000, 500);
        planner.move_to(10_000);

        // Get some speed up
        let mut now_us = 0u64;
        for _ in 0..500 {
            now_us += 1_000;
            planner.poll(now_us);
        }
        let pos_at_stop = planner.current_position();
        assert!(pos_at_stop > 0);

        planner.stop();
        assert!(planner.target_position() < 10_000);

        let mut final_now = now_us;
        let mut backward_steps = 0;
        for _ in 0..60_000 {
            final_now += 1_000;
            if planner.poll(final_now) == Some(StepDirection::Backward) {
                backward_steps += 1;
            }
            if !planner.is_running() {
                break;
            }
        }
        assert!(!planner.is_running());
        assert_eq!(backward_steps, 0);
        assert!(planner.current_position() >= pos_at_stop);
        assert!(planner.current_position() < 10_000);
    }

    #[test]
    fn test_halt_is_immediate() {
        let mut planner = StepPlanner::new(1000, 500);
        planner.move_to(10_000);
        let mut now_us = 0u64;
        for _ in 0..200 {
            now_us += 1_000;
            planner.poll(now_us);
        }

        planner.halt();
        assert!(!planner.is_running());
        let pos = planner.current_position();

        now_us += 1_000;
        assert_eq!(planner.poll(now_us), None);
        assert_eq!(planner.current_position(), pos);
    }

    #[test]
    fn test_backward_travel() {
        let mut planner = StepPlanner::new(1000, 1000);
        planner.move_to(-40);

        let (fwd, back, _) = run_to_idle(&mut planner, 60_000);
        assert_eq!(planner.current_position(), -40);
        assert_eq!(back, 40);
        assert_eq!(fwd, 0);
    }

    #[test]
    fn test_at_most_one_step_per_poll() {
        let mut planner = StepPlanner::new(1000, 1000);
        planner.move_to(10);

        // A huge scheduling gap still yields a single step per poll
        let mut steps = 0;
        let mut now_us = 0u64;
        for _ in 0..10_000 {
            now_us += 500_000;
            if planner.poll(now_us).is_some() {
                steps += 1;
            }
            if !planner.is_running() {
                break;
            }
        }
        assert_eq!(steps, 10);
        assert_eq!(planner.current_position(), 10);
    }

    #[test]
    fn test_set_current_position() {
        let mut planner = StepPlanner::default();
        planner.set_current_position(500);
        assert_eq!(planner.current_position(), 500);
        assert_eq!(planner.distance_to_go(), 0);
        assert!(!planner.is_running());
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt64(0), 0);
        assert_eq!(isqrt64(1), 1);
        assert_eq!(isqrt64(1000), 31);
        assert_eq!(isqrt64(1_000_000), 1000);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            /// Any reachable target is hit exactly, never crossed.
            #[test]
            fn converges_without_overshoot(
                target in -2000i64..=2000,
                max_speed in 200u32..=1500,
                accel in 100u32..=1500,
            ) {
                let mut planner = StepPlanner::new(max_speed, accel);
                planner.move_to(target);

                let mut now_us = 0u64;
                for _ in 0..120_000u32 {
                    now_us += 1_000;
                    planner.poll(now_us);
                    if target >= 0 {
                        prop_assert!(planner.current_position() <= target);
                    } else {
                        prop_assert!(planner.current_position() >= target);
                    }
                    if !planner.is_running() {
                        break;
                    }
                }
                prop_assert_eq!(planner.current_position(), target);
                prop_assert!(!planner.is_running());
            }
        }
    }
}
