//! GPIO pin traits and polarity-aware wrappers
//!
//! The drivers in this crate talk to pins through these two traits
//! rather than a full HAL, so they can be exercised on the host with
//! mock pins. The firmware provides one-line adapters over the real
//! GPIO types.

use beltline_core::config::PinConfig;
use beltline_core::input::Debouncer;

/// Trait for GPIO output pin abstraction
pub trait OutputPin {
    /// Set the pin high
    fn set_high(&mut self);

    /// Set the pin low
    fn set_low(&mut self);

    /// Check if the pin is set high
    fn is_set_high(&self) -> bool;
}

/// Trait for GPIO input pin abstraction
pub trait InputPin {
    /// Check if the electrical level is high
    fn is_high(&self) -> bool;
}

/// Polarity-aware switched output
///
/// Drives a buzzer, LED, or relay. The pin can be active-high (default)
/// or active-low; the output always starts logically off.
pub struct SwitchedOutput<P> {
    pin: P,
    /// If true, ON = pin LOW
    inverted: bool,
    /// Current logical state
    on: bool,
}

impl<P: OutputPin> SwitchedOutput<P> {
    /// Create a switched output, forcing it off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut out = Self {
            pin,
            inverted,
            on: false,
        };
        out.set(false);
        out
    }

    /// Set the logical output state
    pub fn set(&mut self, on: bool) {
        self.on = on;
        if on != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    /// Current logical state
    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// Debounced, polarity-normalized button input
///
/// Sampling cadence is owned by the caller; each [`Button::sample`]
/// feeds one raw reading through the polarity map and the debouncer.
pub struct Button<P> {
    pin: P,
    /// Pin is active-low
    inverted: bool,
    debounce: Debouncer,
}

impl<P: InputPin> Button<P> {
    /// Create a button from its wiring config and debounce threshold
    pub fn new(pin: P, config: &PinConfig, debounce_samples: u8) -> Self {
        Self {
            pin,
            inverted: config.inverted,
            debounce: Debouncer::new(debounce_samples),
        }
    }

    /// Sample the pin once; returns the debounced logical level
    pub fn sample(&mut self) -> bool {
        let asserted = self.pin.is_high() != self.inverted;
        self.debounce.update(asserted)
    }

    /// Last debounced level without sampling
    pub fn level(&self) -> bool {
        self.debounce.level()
    }
}
