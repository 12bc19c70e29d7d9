//! Tick task for time-based updates
//!
//! Provides periodic ticks to the controller so time-dependent outputs
//! (buzzer pulse timing) advance even when no input level changes.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 50;

/// Signal to notify the controller of a tick, with the timestamp
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u64> = Signal::new();

/// Tick task - sends periodic tick signals with timestamp
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;

        // Boot-relative timestamp, same clock the controller reads on
        // input wakeups
        let now_ms = Instant::now().as_millis();

        // Signal the controller
        TICK_SIGNAL.signal(now_ms);
    }
}
