//! Four-wire full-step coil sequencer
//!
//! Drives a unipolar/bipolar stepper through four coil outputs (IN1-IN4
//! on the usual driver boards). Full-step, two coils energized per
//! phase. Timing is owned by the caller; each call advances exactly one
//! step.

use beltline_core::traits::StepDevice;

use crate::gpio::OutputPin;

/// Full-step sequence, two coils on per phase
const SEQUENCE: [[bool; 4]; 4] = [
    [true, false, true, false],
    [false, true, true, false],
    [false, true, false, true],
    [true, false, false, true],
];

/// Four-wire stepper coil sequencer
pub struct FourWireStepper<P> {
    coils: [P; 4],
    phase: u8,
}

impl<P: OutputPin> FourWireStepper<P> {
    /// Create a sequencer with all coils de-energized
    pub fn new(mut coils: [P; 4]) -> Self {
        for coil in &mut coils {
            coil.set_low();
        }
        Self { coils, phase: 0 }
    }

    /// Current phase index (0-3)
    pub fn phase(&self) -> u8 {
        self.phase
    }

    fn apply(&mut self) {
        let pattern = SEQUENCE[self.phase as usize];
        for (coil, on) in self.coils.iter_mut().zip(pattern) {
            if on {
                coil.set_high();
            } else {
                coil.set_low();
            }
        }
    }
}

impl<P: OutputPin> StepDevice for FourWireStepper<P> {
    fn forward(&mut self) {
        self.phase = (self.phase + 1) % 4;
        self.apply();
    }

    fn backward(&mut self) {
        self.phase = (self.phase + 3) % 4;
        self.apply();
    }

    fn release(&mut self) {
        for coil in &mut self.coils {
            coil.set_low();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock coil pin
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn sequencer() -> FourWireStepper<MockPin> {
        FourWireStepper::new([
            MockPin::new(),
            MockPin::new(),
            MockPin::new(),
            MockPin::new(),
        ])
    }

    fn coil_states(stepper: &FourWireStepper<MockPin>) -> [bool; 4] {
        [
            stepper.coils[0].high,
            stepper.coils[1].high,
            stepper.coils[2].high,
            stepper.coils[3].high,
        ]
    }

    #[test]
    fn test_starts_released() {
        let stepper = sequencer();
        assert_eq!(coil_states(&stepper), [false; 4]);
    }

    #[test]
    fn test_forward_follows_sequence() {
        let mut stepper = sequencer();
        for expected in [1u8, 2, 3, 0, 1] {
            stepper.forward();
            assert_eq!(stepper.phase(), expected);
            assert_eq!(coil_states(&stepper), SEQUENCE[expected as usize]);
            // Exactly two coils energized in every full-step phase
            let on = coil_states(&stepper).iter().filter(|c| **c).count();
            assert_eq!(on, 2);
        }
    }

    #[test]
    fn test_backward_undoes_forward() {
        let mut stepper = sequencer();
        stepper.forward();
        stepper.forward();
        let mid = coil_states(&stepper);
        stepper.forward();
        stepper.backward();
        assert_eq!(coil_states(&stepper), mid);
    }

    #[test]
    fn test_release_drops_all_coils() {
        let mut stepper = sequencer();
        stepper.forward();
        assert_ne!(coil_states(&stepper), [false; 4]);

        stepper.release();
        assert_eq!(coil_states(&stepper), [false; 4]);
    }
}
