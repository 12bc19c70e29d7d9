//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy
//! tasks. Every signal carries levels, not events: late consumers see
//! the most recent value and missed intermediate values are harmless.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use beltline_core::control::{MotorCommand, Screen, MOTOR_COUNT};

/// Debounced logical button and sensor levels, one snapshot per change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSnapshot {
    /// Start button level
    pub start: bool,
    /// Stop button level
    pub stop: bool,
    /// Emergency button level
    pub emergency: bool,
    /// Photo gate level
    pub photo_blocked: bool,
    /// Rock sensor level
    pub rock_detected: bool,
}

/// Buzzer and alert LED levels, one snapshot per change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnnunciatorLevels {
    /// Buzzer output level
    pub buzzer: bool,
    /// Alert LED level
    pub alert_led: bool,
}

/// Conditioned input levels (updated by the input task on change)
pub static BUTTON_LEVELS: Signal<CriticalSectionRawMutex, ButtonSnapshot> = Signal::new();

/// Motor command pair (updated by the controller on change)
pub static MOTOR_CMD: Signal<CriticalSectionRawMutex, [MotorCommand; MOTOR_COUNT]> = Signal::new();

/// Latest commanded motor positions (updated by the stepper task)
pub static MOTOR_POSITIONS: Signal<CriticalSectionRawMutex, [i64; MOTOR_COUNT]> = Signal::new();

/// Screen content (updated by the controller on change)
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, Screen> = Signal::new();

/// Annunciator levels (updated by the controller on change)
pub static ANNUNCIATOR_CMD: Signal<CriticalSectionRawMutex, AnnunciatorLevels> = Signal::new();
