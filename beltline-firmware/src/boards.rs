//! Board wiring for the Pico-based belt controller
//!
//! Pin assignments are board-specific and fixed at build time:
//!
//! | Function          | GPIO        |
//! |-------------------|-------------|
//! | Belt A coils 1-4  | 2, 3, 4, 5  |
//! | Belt B coils 1-4  | 6, 7, 8, 9  |
//! | LCD RS / EN       | 10, 11      |
//! | LCD D4-D7         | 12, 13, 14, 15 |
//! | Start / Stop / E-stop | 16, 17, 18 (active-low, pull-up) |
//! | Buzzer / Alert LED / Motor relay | 20, 21, 19 |
//! | Photo gate / Rock sensor | 26, 27 |

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;
use embassy_time::Delay;

use beltline_core::config::{
    AnnunciatorHwConfig, ButtonsHwConfig, DisplayHwConfig, MachineConfig, PinConfig,
    SensorsHwConfig,
};
use beltline_drivers::display::Hd44780;
use beltline_drivers::gpio::{Button, InputPin, OutputPin, SwitchedOutput};
use beltline_drivers::stepper::{FourWireStepper, PositionStepper};

/// Adapter over the RP2040 push-pull output driver
pub struct RpOutput(Output<'static>);

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Adapter over the RP2040 input driver
pub struct RpInput(Input<'static>);

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

pub type BeltButton = Button<RpInput>;
pub type BeltStepper = PositionStepper<FourWireStepper<RpOutput>>;
pub type BeltDisplay = Hd44780<RpOutput, Delay>;
pub type BeltOutput = SwitchedOutput<RpOutput>;

/// Everything wired up, ready to hand to tasks
pub struct Board {
    pub start: BeltButton,
    pub stop: BeltButton,
    pub emergency: BeltButton,
    pub photo: BeltButton,
    pub rock: BeltButton,
    pub belt_a: BeltStepper,
    pub belt_b: BeltStepper,
    pub display: BeltDisplay,
    pub buzzer: BeltOutput,
    pub alert_led: BeltOutput,
    pub motor_relay: BeltOutput,
}

/// Machine configuration matching the pin table above
pub fn machine_config() -> MachineConfig {
    MachineConfig {
        steppers: [
            MachineConfig::default_stepper("belt_a", [2, 3, 4, 5]),
            MachineConfig::default_stepper("belt_b", [6, 7, 8, 9]),
        ],
        display: DisplayHwConfig {
            rs: 10,
            en: 11,
            data: [12, 13, 14, 15],
        },
        buttons: ButtonsHwConfig {
            start: PinConfig::button(16),
            stop: PinConfig::button(17),
            emergency: PinConfig::button(18),
        },
        annunciator: AnnunciatorHwConfig {
            buzzer: PinConfig::new(20),
            alert_led: PinConfig::new(21),
            motor_relay: PinConfig::new(19),
        },
        sensors: SensorsHwConfig {
            photo: PinConfig::new(26),
            rock: PinConfig::new(27),
        },
        ..Default::default()
    }
}

fn pull_for(config: &PinConfig) -> Pull {
    if config.pull_up {
        Pull::Up
    } else {
        Pull::None
    }
}

/// Wire the peripherals according to `config`
///
/// The GPIO numbers in `config` document the wiring; the peripheral
/// bindings below must agree with them.
pub fn wire(p: Peripherals, config: &MachineConfig) -> Board {
    let debounce = config.control.debounce_samples;
    let buttons = &config.buttons;
    let sensors = &config.sensors;

    let start = Button::new(
        RpInput(Input::new(p.PIN_16, pull_for(&buttons.start))),
        &buttons.start,
        debounce,
    );
    let stop = Button::new(
        RpInput(Input::new(p.PIN_17, pull_for(&buttons.stop))),
        &buttons.stop,
        debounce,
    );
    let emergency = Button::new(
        RpInput(Input::new(p.PIN_18, pull_for(&buttons.emergency))),
        &buttons.emergency,
        debounce,
    );
    let photo = Button::new(
        RpInput(Input::new(p.PIN_26, pull_for(&sensors.photo))),
        &sensors.photo,
        debounce,
    );
    let rock = Button::new(
        RpInput(Input::new(p.PIN_27, pull_for(&sensors.rock))),
        &sensors.rock,
        debounce,
    );

    let belt_a = PositionStepper::from_config(
        FourWireStepper::new([
            RpOutput(Output::new(p.PIN_2, Level::Low)),
            RpOutput(Output::new(p.PIN_3, Level::Low)),
            RpOutput(Output::new(p.PIN_4, Level::Low)),
            RpOutput(Output::new(p.PIN_5, Level::Low)),
        ]),
        &config.steppers[0],
    );
    let belt_b = PositionStepper::from_config(
        FourWireStepper::new([
            RpOutput(Output::new(p.PIN_6, Level::Low)),
            RpOutput(Output::new(p.PIN_7, Level::Low)),
            RpOutput(Output::new(p.PIN_8, Level::Low)),
            RpOutput(Output::new(p.PIN_9, Level::Low)),
        ]),
        &config.steppers[1],
    );

    let display = Hd44780::new(
        RpOutput(Output::new(p.PIN_10, Level::Low)),
        RpOutput(Output::new(p.PIN_11, Level::Low)),
        [
            RpOutput(Output::new(p.PIN_12, Level::Low)),
            RpOutput(Output::new(p.PIN_13, Level::Low)),
            RpOutput(Output::new(p.PIN_14, Level::Low)),
            RpOutput(Output::new(p.PIN_15, Level::Low)),
        ],
        Delay,
    );

    let buzzer = SwitchedOutput::new(
        RpOutput(Output::new(p.PIN_20, Level::Low)),
        config.annunciator.buzzer.inverted,
    );
    let alert_led = SwitchedOutput::new(
        RpOutput(Output::new(p.PIN_21, Level::Low)),
        config.annunciator.alert_led.inverted,
    );
    let motor_relay = SwitchedOutput::new(
        RpOutput(Output::new(p.PIN_19, Level::Low)),
        config.annunciator.motor_relay.inverted,
    );

    Board {
        start,
        stop,
        emergency,
        photo,
        rock,
        belt_a,
        belt_b,
        display,
        buzzer,
        alert_led,
        motor_relay,
    }
}
