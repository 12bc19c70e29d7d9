//! Beltline - Conveyor Belt Controller Firmware
//!
//! Main firmware binary for RP2040-based conveyor belt controllers.
//! Two coil-driven belt steppers, a 16x2 character LCD, three operator
//! buttons and a lockout buzzer, coordinated by a three-state machine.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

mod boards;
mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Beltline firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = boards::machine_config();
    let board = boards::wire(p, &config);
    info!("Board wired");

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::input_task(
            board.start,
            board.stop,
            board.emergency,
            board.photo,
            board.rock,
        ))
        .unwrap();
    spawner
        .spawn(tasks::stepper_task(board.belt_a, board.belt_b))
        .unwrap();
    spawner.spawn(tasks::display_task(board.display)).unwrap();
    spawner
        .spawn(tasks::annunciator_task(
            board.buzzer,
            board.alert_led,
            board.motor_relay,
        ))
        .unwrap();
    spawner
        .spawn(tasks::controller_task(config.control))
        .unwrap();

    info!("All tasks spawned, controller running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
