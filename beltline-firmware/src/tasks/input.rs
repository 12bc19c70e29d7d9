//! Input sampling task
//!
//! Samples the operator buttons and belt sensors at a fixed cadence,
//! feeding each reading through its debouncer, and publishes a snapshot
//! of the logical levels whenever one of them changes.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::boards::BeltButton;
use crate::channels::{ButtonSnapshot, BUTTON_LEVELS};

/// Raw sampling interval in milliseconds
///
/// With the default 4-sample debounce threshold a press registers
/// after 8 ms of stable contact.
pub const SAMPLE_INTERVAL_MS: u64 = 2;

/// Input sampling task
#[embassy_executor::task]
pub async fn input_task(
    mut start: BeltButton,
    mut stop: BeltButton,
    mut emergency: BeltButton,
    mut photo: BeltButton,
    mut rock: BeltButton,
) {
    info!("Input task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));

    // Publish the initial all-released snapshot so the controller has
    // levels before the first press
    let mut last = ButtonSnapshot::default();
    BUTTON_LEVELS.signal(last);

    loop {
        ticker.next().await;

        let snapshot = ButtonSnapshot {
            start: start.sample(),
            stop: stop.sample(),
            emergency: emergency.sample(),
            photo_blocked: photo.sample(),
            rock_detected: rock.sample(),
        };

        if snapshot != last {
            debug!("Input levels: {:?}", snapshot);
            BUTTON_LEVELS.signal(snapshot);
            last = snapshot;
        }
    }
}
