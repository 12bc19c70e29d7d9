//! Hardware configuration types
//!
//! Pin-level configuration for buttons, sensors, steppers, the display,
//! and the annunciator outputs. Polarity is explicit everywhere: whether
//! an input is active-high or active-low is wiring, not logic.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum stepper name length
pub const MAX_NAME_LEN: usize = 16;

/// Number of belt steppers
pub const STEPPER_COUNT: usize = 2;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new active-high pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an active-low pin with pull-up (typical button wiring)
    pub const fn button(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }

    /// Map a raw electrical level to the logical asserted level
    pub fn normalize(&self, raw_high: bool) -> bool {
        raw_high != self.inverted
    }
}

/// Four-wire stepper hardware configuration
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepperHwConfig {
    /// Stepper name (e.g. "belt_a", "belt_b")
    pub name: String<MAX_NAME_LEN>,
    /// Coil pins IN1-IN4
    pub coil_pins: [u8; 4],
    /// Maximum speed in steps per second
    pub max_speed_sps: u32,
    /// Acceleration in steps per second squared
    pub accel_sps2: u32,
}

/// HD44780 display hardware configuration (4-bit mode)
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayHwConfig {
    /// Register-select pin
    pub rs: u8,
    /// Enable (strobe) pin
    pub en: u8,
    /// Data pins D4-D7
    pub data: [u8; 4],
}

/// Operator button wiring
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonsHwConfig {
    /// Start button
    pub start: PinConfig,
    /// Stop button
    pub stop: PinConfig,
    /// Emergency stop button
    pub emergency: PinConfig,
}

/// Belt sensor wiring (sampled, inert by default)
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorsHwConfig {
    /// Photo gate across the belt
    pub photo: PinConfig,
    /// Rock/foreign-object sensor
    pub rock: PinConfig,
}

/// Annunciator and auxiliary output wiring
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnunciatorHwConfig {
    /// Buzzer output
    pub buzzer: PinConfig,
    /// Alert LED output (declared, never asserted by control logic)
    pub alert_led: PinConfig,
    /// Motor relay output (declared, wired off, never driven)
    pub motor_relay: PinConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_active_high() {
        let pin = PinConfig::new(5);
        assert!(pin.normalize(true));
        assert!(!pin.normalize(false));
    }

    #[test]
    fn test_normalize_active_low_button() {
        let pin = PinConfig::button(22);
        assert!(pin.pull_up);
        assert!(pin.normalize(false));
        assert!(!pin.normalize(true));
    }

    #[test]
    fn test_auxiliary_outputs_declared_inactive() {
        // All three outputs default to active-high wiring; the alert
        // LED and motor relay are wired but never driven
        let outputs = AnnunciatorHwConfig::default();
        assert!(!outputs.buzzer.inverted);
        assert!(!outputs.alert_led.inverted);
        assert!(!outputs.motor_relay.inverted);
        assert!(!outputs.motor_relay.pull_up);
    }
}
