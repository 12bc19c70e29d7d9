//! Input conditioning for buttons and sensors
//!
//! Buttons are mechanical and chatter; levels are cleaned up in two
//! stages before the controller sees them:
//!
//! 1. [`Debouncer`] - integrator filter over raw samples
//! 2. [`EdgeDetector`] - two-sample rising-edge detection

/// Default number of consecutive agreeing samples before a level flips
pub const DEFAULT_DEBOUNCE_SAMPLES: u8 = 4;

/// Integrator-style debounce filter
///
/// The output level only changes after `threshold` consecutive samples
/// disagree with it. A chattering input shorter than the threshold is
/// absorbed without any output transition.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Samples required to flip the output level
    threshold: u8,
    /// Consecutive samples disagreeing with the current level
    count: u8,
    /// Current debounced level
    level: bool,
}

impl Debouncer {
    /// Create a debouncer with the given threshold, starting low
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold: threshold.max(1),
            count: 0,
            level: false,
        }
    }

    /// Feed one raw sample and return the debounced level
    pub fn update(&mut self, raw: bool) -> bool {
        if raw == self.level {
            self.count = 0;
        } else {
            self.count = self.count.saturating_add(1);
            if self.count >= self.threshold {
                self.level = raw;
                self.count = 0;
            }
        }
        self.level
    }

    /// Current debounced level without feeding a sample
    pub fn level(&self) -> bool {
        self.level
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_SAMPLES)
    }
}

/// Two-sample rising-edge detector
///
/// Returns true exactly once per low-to-high transition. A held-high
/// level never re-fires; this is what prevents a held start button from
/// re-latching motor targets every tick.
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    last: bool,
}

impl EdgeDetector {
    /// Create a detector with the previous level assumed low
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current level; true on a rising edge
    pub fn rising(&mut self, level: bool) -> bool {
        let edge = level && !self.last;
        self.last = level;
        edge
    }
}
