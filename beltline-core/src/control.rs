//! Per-tick controller evaluation
//!
//! [`ConveyorControl`] is the single decision point of the firmware. It
//! consumes one conditioned input snapshot per tick and produces the new
//! state plus every output level: one command per motor, the two-line
//! screen content, and the buzzer/alert levels. No hardware types appear
//! here, so the whole control surface runs in host tests.
//!
//! Rule priority per tick, first match wins:
//!
//! 1. `Locked`: stop/emergency ignored; only a start rising edge clears.
//! 2. `Running` + emergency (or armed jam fault) -> `Locked`.
//! 3. `Running` + stop -> `Stopped`.
//! 4. `Running` otherwise: keep commanding the latched targets. The
//!    command is idempotent; the targets were latched once, at entry.
//! 5. `Stopped` + start rising edge -> `Running`, latching each motor's
//!    target to its current position plus the configured travel.
//! 6. Otherwise hold state; the actuators' own profiles govern motion
//!    between commands.

use crate::config::{BuzzerMode, ControlConfig};
use crate::input::EdgeDetector;
use crate::safety::SafetyMonitor;
use crate::state::{Event, State};
use crate::traits::display::DISPLAY_ROWS;

/// Number of belt motors
pub const MOTOR_COUNT: usize = 2;

/// Conditioned input levels for one evaluation tick
///
/// All levels are logical (polarity already normalized) and debounced.
/// Motor positions are the most recent commanded positions reported by
/// the actuators; they are read only when latching targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlInputs {
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
    /// Current motor positions in steps
    pub positions: [i64; MOTOR_COUNT],
}

/// Command for one motor, one per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorCommand {
    /// Brake to a stop
    Stop,
    /// Converge on an absolute target position
    MoveTo(i64),
}

impl MotorCommand {
    /// Target position, if this command is a move
    pub fn target(&self) -> Option<i64> {
        match self {
            MotorCommand::MoveTo(target) => Some(*target),
            MotorCommand::Stop => None,
        }
    }
}

/// Two-line screen content, a pure function of the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Screen {
    /// Display lines, top to bottom
    pub lines: [&'static str; DISPLAY_ROWS],
}

impl Screen {
    /// Screen content for a state
    pub fn for_state(state: State) -> Self {
        let lines = match state {
            State::Stopped => ["SYSTEM STOPPED", "PRESS START BTN"],
            State::Running => ["SYSTEM STARTED", ""],
            State::Locked => ["EMERGENCY STOP", "PRESS START BTN"],
        };
        Self { lines }
    }
}

/// Everything the controller decided this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutput {
    /// State after this tick
    pub state: State,
    /// Per-motor commands
    pub motors: [MotorCommand; MOTOR_COUNT],
    /// Screen content
    pub screen: Screen,
    /// Buzzer output level
    pub buzzer: bool,
    /// Alert LED level (wired, never asserted by control logic)
    pub alert_led: bool,
}

/// The conveyor controller
pub struct ConveyorControl {
    config: ControlConfig,
    state: State,
    start_edge: EdgeDetector,
    safety: SafetyMonitor,
    /// Targets latched at the most recent `Running` entry
    targets: [i64; MOTOR_COUNT],
    /// Timestamp of the most recent `Locked` entry, for pulse timing
    locked_at_ms: Option<u64>,
}

impl ConveyorControl {
    /// Create a controller in the `Stopped` state
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            state: State::Stopped,
            start_edge: EdgeDetector::new(),
            safety: SafetyMonitor::new(config.jam_detection),
            targets: [0; MOTOR_COUNT],
            locked_at_ms: None,
        }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Evaluate one tick
    ///
    /// `now_ms` must come from a monotonic clock; it is only compared
    /// against the lockout entry time.
    pub fn evaluate(&mut self, inputs: &ControlInputs, now_ms: u64) -> TickOutput {
        let start_edge = self.start_edge.rising(inputs.start);
        self.safety
            .update_sensors(inputs.photo_blocked, inputs.rock_detected);

        let event = match self.state {
            // Lockout: stop and emergency levels are deliberately
            // ignored; only the start edge acknowledges
            State::Locked => start_edge.then_some(Event::StartEdge),
            State::Running => {
                if inputs.emergency || self.safety.check().is_fault() {
                    Some(Event::EmergencyStop)
                } else if inputs.stop {
                    Some(Event::StopPressed)
                } else {
                    None
                }
            }
            State::Stopped => start_edge.then_some(Event::StartEdge),
        };

        let prev = self.state;
        if let Some(event) = event {
            self.state = prev.transition(event);
        }

        // Entry actions
        if self.state == State::Running && prev != State::Running {
            let travel = i64::from(self.config.travel_steps);
            for (target, position) in self.targets.iter_mut().zip(inputs.positions) {
                *target = position + travel;
            }
        }
        if self.state == State::Locked {
            if prev != State::Locked {
                self.locked_at_ms = Some(now_ms);
            }
        } else {
            self.locked_at_ms = None;
        }

        let motors = if self.state == State::Running {
            [
                MotorCommand::MoveTo(self.targets[0]),
                MotorCommand::MoveTo(self.targets[1]),
            ]
        } else {
            [MotorCommand::Stop; MOTOR_COUNT]
        };

        let buzzer = match self.state {
            State::Locked => match self.config.buzzer_mode {
                BuzzerMode::Sustained => true,
                BuzzerMode::Pulse => self
                    .locked_at_ms
                    .is_some_and(|entry| now_ms.saturating_sub(entry) < self.config.buzzer_pulse_ms),
            },
            _ => false,
        };

        TickOutput {
            state: self.state,
            motors,
            screen: Screen::for_state(self.state),
            buzzer,
            alert_led: false,
        }
    }
}
