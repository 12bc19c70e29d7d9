//! Status display task
//!
//! Initializes the character LCD and rewrites it whenever the
//! controller publishes new screen content.

use defmt::*;

use beltline_core::traits::StatusDisplay;

use crate::boards::BeltDisplay;
use crate::channels::SCREEN_UPDATE;

/// Display task - owns the LCD
#[embassy_executor::task]
pub async fn display_task(mut lcd: BeltDisplay) {
    info!("Display task started");

    // Blocking init is fine here, nothing else owns these pins
    lcd.init();

    loop {
        let screen = SCREEN_UPDATE.wait().await;
        debug!("Screen: {:?}", screen);

        for (line, text) in screen.lines.iter().enumerate() {
            if let Err(e) = lcd.print(line as u8, text) {
                warn!("Display write failed: {:?}", e);
            }
        }
    }
}
