//! State machine definition
//!
//! All motor, buzzer, and display behavior is a function of the current
//! state and an event.

use super::events::Event;

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Belt idle, waiting for the start button
    Stopped,
    /// Motors commanded toward a latched target position
    Running,
    /// Emergency lockout; motors stopped, buzzer active, requires an
    /// explicit start-button press to clear
    Locked,
}

impl State {
    /// Check if this state allows motor motion
    pub fn motors_allowed(&self) -> bool {
        matches!(self, State::Running)
    }

    /// Check if this state requires operator acknowledgment to leave
    pub fn is_locked(&self) -> bool {
        matches!(self, State::Locked)
    }

    /// Process an event and return the next state
    ///
    /// This is the core transition logic. The lockout invariant lives
    /// here: `Locked` is only reachable from `Running` via the emergency
    /// event, and only a start edge leaves it. Stop and emergency events
    /// have no transitions out of `Locked`.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Stopped transitions
            (Stopped, StartEdge) => Running,

            // Running transitions
            (Running, EmergencyStop) => Locked,
            (Running, StopPressed) => Stopped,

            // Locked transitions - only an explicit start edge clears
            (Locked, StartEdge) => Running,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_edge_from_stopped() {
        let next = State::Stopped.transition(Event::StartEdge);
        assert_eq!(next, State::Running);
    }

    #[test]
    fn test_stop_from_running() {
        let next = State::Running.transition(Event::StopPressed);
        assert_eq!(next, State::Stopped);
    }

    #[test]
    fn test_emergency_from_running() {
        let next = State::Running.transition(Event::EmergencyStop);
        assert_eq!(next, State::Locked);
    }

    #[test]
    fn test_locked_only_entered_from_running() {
        // Emergency while already stopped must not lock the system
        let next = State::Stopped.transition(Event::EmergencyStop);
        assert_eq!(next, State::Stopped);
    }

    #[test]
    fn test_locked_ignores_stop_and_emergency() {
        assert_eq!(State::Locked.transition(Event::StopPressed), State::Locked);
        assert_eq!(
            State::Locked.transition(Event::EmergencyStop),
            State::Locked
        );
    }

    #[test]
    fn test_locked_cleared_by_start_edge() {
        let next = State::Locked.transition(Event::StartEdge);
        assert_eq!(next, State::Running);
    }

    #[test]
    fn test_motors_allowed() {
        assert!(State::Running.motors_allowed());
        assert!(!State::Stopped.motors_allowed());
        assert!(!State::Locked.motors_allowed());
    }
}
