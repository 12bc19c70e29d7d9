//! Annunciator task
//!
//! Drives the buzzer and alert LED from controller level updates. The
//! motor relay is owned here too, held off for the program lifetime.

use defmt::*;

use crate::boards::BeltOutput;
use crate::channels::ANNUNCIATOR_CMD;

/// Annunciator task - owns the buzzer, alert LED, and relay outputs
#[embassy_executor::task]
pub async fn annunciator_task(
    mut buzzer: BeltOutput,
    mut alert_led: BeltOutput,
    _motor_relay: BeltOutput,
) {
    info!("Annunciator task started");

    loop {
        let levels = ANNUNCIATOR_CMD.wait().await;

        if levels.buzzer != buzzer.is_on() {
            debug!("Buzzer: {}", levels.buzzer);
        }
        buzzer.set(levels.buzzer);
        alert_led.set(levels.alert_led);
    }
}
