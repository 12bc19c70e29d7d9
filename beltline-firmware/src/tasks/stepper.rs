//! Stepper motor control task
//!
//! Receives motor command pairs from the controller and drives both
//! belt steppers, polling their motion profiles while a move is in
//! progress and sleeping on the command signal while idle.

use defmt::*;
use embassy_time::{Instant, Timer};

use beltline_core::control::{MotorCommand, MOTOR_COUNT};
use beltline_core::traits::PositionActuator;

use crate::boards::BeltStepper;
use crate::channels::{MOTOR_CMD, MOTOR_POSITIONS};

/// Poll interval while a move is in progress, in microseconds
///
/// Four polls per step at the 1000 steps/s ceiling.
const STEP_POLL_US: u64 = 250;

/// Position report interval while moving, in milliseconds
const POSITION_REPORT_MS: u64 = 50;

/// Stepper control task for both belt motors
#[embassy_executor::task]
pub async fn stepper_task(mut belt_a: BeltStepper, mut belt_b: BeltStepper) {
    info!("Stepper task started");

    let mut last_report = Instant::now();

    loop {
        if !belt_a.is_running() && !belt_b.is_running() {
            // Idle: report the settled positions and sleep on the signal
            report_positions(&belt_a, &belt_b);
            let cmd = MOTOR_CMD.wait().await;
            apply(&mut belt_a, &mut belt_b, cmd);
        } else {
            // Moving: pick up command changes without blocking
            if let Some(cmd) = MOTOR_CMD.try_take() {
                apply(&mut belt_a, &mut belt_b, cmd);
            }

            let now_us = Instant::now().as_micros();
            belt_a.poll(now_us);
            belt_b.poll(now_us);

            if last_report.elapsed().as_millis() >= POSITION_REPORT_MS {
                report_positions(&belt_a, &belt_b);
                last_report = Instant::now();
            }

            Timer::after_micros(STEP_POLL_US).await;
        }
    }
}

fn apply(belt_a: &mut BeltStepper, belt_b: &mut BeltStepper, cmd: [MotorCommand; MOTOR_COUNT]) {
    trace!("Motor command: {:?}", cmd);
    apply_one(belt_a, cmd[0]);
    apply_one(belt_b, cmd[1]);
}

fn apply_one(belt: &mut BeltStepper, cmd: MotorCommand) {
    match cmd {
        MotorCommand::Stop => belt.stop(),
        MotorCommand::MoveTo(target) => belt.move_to(target),
    }
}

fn report_positions(belt_a: &BeltStepper, belt_b: &BeltStepper) {
    MOTOR_POSITIONS.signal([belt_a.current_position(), belt_b.current_position()]);
}
