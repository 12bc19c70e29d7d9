//! Control configuration
//!
//! Behavioral knobs for the controller, separate from pin wiring.

use super::hardware::{
    AnnunciatorHwConfig, ButtonsHwConfig, DisplayHwConfig, SensorsHwConfig, StepperHwConfig,
    MAX_NAME_LEN, STEPPER_COUNT,
};
use crate::input::DEFAULT_DEBOUNCE_SAMPLES;
use crate::motion::planner::{DEFAULT_ACCEL_SPS2, DEFAULT_MAX_SPEED_SPS};

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default travel per start press, in steps
pub const DEFAULT_TRAVEL_STEPS: u32 = 1000;

/// Default buzzer pulse width in milliseconds
pub const DEFAULT_BUZZER_PULSE_MS: u64 = 1000;

/// Buzzer behavior while the system is locked
///
/// The two reference behaviors from the field are both supported: hold
/// the buzzer for the whole lockout, or sound it once for a fixed window
/// after lockout entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BuzzerMode {
    /// Buzzer asserted for the entire lockout
    #[default]
    Sustained,
    /// Buzzer asserted for a fixed window after lockout entry
    Pulse,
}

/// Controller behavior configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControlConfig {
    /// Steps each motor travels per start press
    pub travel_steps: u32,
    /// Buzzer behavior in the locked state
    pub buzzer_mode: BuzzerMode,
    /// Pulse width for [`BuzzerMode::Pulse`], in milliseconds
    pub buzzer_pulse_ms: u64,
    /// Debounce threshold in samples
    pub debounce_samples: u8,
    /// Arm the jam/foreign-object hook
    pub jam_detection: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            travel_steps: DEFAULT_TRAVEL_STEPS,
            buzzer_mode: BuzzerMode::Sustained,
            buzzer_pulse_ms: DEFAULT_BUZZER_PULSE_MS,
            debounce_samples: DEFAULT_DEBOUNCE_SAMPLES,
            jam_detection: false,
        }
    }
}

/// Complete machine configuration
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MachineConfig {
    /// Controller behavior
    pub control: ControlConfig,
    /// Belt steppers
    pub steppers: [StepperHwConfig; STEPPER_COUNT],
    /// Status display
    pub display: DisplayHwConfig,
    /// Operator buttons
    pub buttons: ButtonsHwConfig,
    /// Belt sensors
    pub sensors: SensorsHwConfig,
    /// Buzzer and alert LED
    pub annunciator: AnnunciatorHwConfig,
}

impl MachineConfig {
    /// Default stepper parameters matching the belt hardware
    pub fn default_stepper(name: &str, coil_pins: [u8; 4]) -> StepperHwConfig {
        let mut label: String<MAX_NAME_LEN> = String::new();
        let _ = label.push_str(name);
        StepperHwConfig {
            name: label,
            coil_pins,
            max_speed_sps: DEFAULT_MAX_SPEED_SPS,
            accel_sps2: DEFAULT_ACCEL_SPS2,
        }
    }
}
