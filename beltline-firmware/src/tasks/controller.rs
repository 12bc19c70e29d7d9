//! Main controller task
//!
//! Runs the conveyor state machine. Wakes on input level changes and on
//! periodic ticks, evaluates one controller tick, and publishes motor,
//! screen and annunciator updates only when they change, so a target-set
//! reaches the stepper task exactly once per `Running` entry.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::Instant;

use beltline_core::config::ControlConfig;
use beltline_core::control::{ControlInputs, ConveyorControl, TickOutput, MOTOR_COUNT};

use crate::channels::{
    AnnunciatorLevels, ButtonSnapshot, ANNUNCIATOR_CMD, BUTTON_LEVELS, MOTOR_CMD, MOTOR_POSITIONS,
    SCREEN_UPDATE,
};
use crate::tasks::tick::TICK_SIGNAL;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(config: ControlConfig) {
    info!("Controller task started");

    let mut control = ConveyorControl::new(config);
    let mut levels = ButtonSnapshot::default();
    let mut positions = [0i64; MOTOR_COUNT];
    let mut last_out: Option<TickOutput> = None;

    loop {
        // Wait for either an input level change or a tick
        let now_ms = match select(BUTTON_LEVELS.wait(), TICK_SIGNAL.wait()).await {
            Either::First(snapshot) => {
                levels = snapshot;
                Instant::now().as_millis()
            }
            Either::Second(now_ms) => now_ms,
        };

        // Pick up the latest reported motor positions, if any
        if let Some(reported) = MOTOR_POSITIONS.try_take() {
            positions = reported;
        }

        let inputs = ControlInputs {
            start: levels.start,
            stop: levels.stop,
            emergency: levels.emergency,
            photo_blocked: levels.photo_blocked,
            rock_detected: levels.rock_detected,
            positions,
        };

        let out = control.evaluate(&inputs, now_ms);
        publish_changes(&out, &mut last_out);
    }
}

/// Publish the parts of a tick output that changed since the last one
fn publish_changes(out: &TickOutput, last: &mut Option<TickOutput>) {
    let prev = last.replace(*out);

    if prev.map(|p| p.state) != Some(out.state) {
        info!("State: {:?}", out.state);
    }
    if prev.map(|p| p.motors) != Some(out.motors) {
        debug!(
            "Motor targets: {:?} / {:?}",
            out.motors[0].target(),
            out.motors[1].target()
        );
        MOTOR_CMD.signal(out.motors);
    }
    if prev.map(|p| p.screen) != Some(out.screen) {
        SCREEN_UPDATE.signal(out.screen);
    }
    let annunciator = AnnunciatorLevels {
        buzzer: out.buzzer,
        alert_led: out.alert_led,
    };
    if prev.map(|p| (p.buzzer, p.alert_led)) != Some((out.buzzer, out.alert_led)) {
        ANNUNCIATOR_CMD.signal(annunciator);
    }
}
