//! Events that trigger state transitions
//!
//! Events are derived from conditioned button levels once per tick by the
//! controller; raw pin levels never reach the state machine.

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Rising edge of the start button (previous tick low, current high)
    StartEdge,
    /// Stop button level asserted
    StopPressed,
    /// Emergency input asserted (button, or the jam hook when enabled)
    EmergencyStop,
}

impl Event {
    /// Check if this event clears an emergency lockout
    pub fn acknowledges_lockout(&self) -> bool {
        matches!(self, Event::StartEdge)
    }

    /// Check if this event is a safety event
    pub fn is_safety_event(&self) -> bool {
        matches!(self, Event::EmergencyStop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_classification() {
        assert!(Event::StartEdge.acknowledges_lockout());
        assert!(!Event::StopPressed.acknowledges_lockout());
        assert!(Event::EmergencyStop.is_safety_event());
        assert!(!Event::StartEdge.is_safety_event());
    }
}
