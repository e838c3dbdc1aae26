//! Timer status and control enablement

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a task timer, always derived from its timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    NotStarted,
    Running,
    Stopped,
}

impl TimerStatus {
    /// Derive the status from the presence of the start and end timestamps
    pub fn from_timestamps(has_start: bool, has_end: bool) -> Self {
        match (has_start, has_end) {
            (false, _) => TimerStatus::NotStarted,
            (true, false) => TimerStatus::Running,
            (true, true) => TimerStatus::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, TimerStatus::Running)
    }
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimerStatus::NotStarted => "Not Started",
            TimerStatus::Running => "Running",
            TimerStatus::Stopped => "Stopped",
        };
        f.write_str(label)
    }
}

/// Which of the three row controls are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlStates {
    pub start: bool,
    pub stop: bool,
    pub reset: bool,
}

impl ControlStates {
    /// Map a status onto the enabled/disabled controls for its row
    pub fn for_status(status: TimerStatus) -> Self {
        match status {
            TimerStatus::NotStarted => Self {
                start: true,
                stop: false,
                reset: false,
            },
            TimerStatus::Running => Self {
                start: false,
                stop: true,
                reset: false,
            },
            // start stays enabled; the timer rejects it until reset
            TimerStatus::Stopped => Self {
                start: true,
                stop: false,
                reset: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_status_from_timestamps() {
        assert_eq!(TimerStatus::from_timestamps(false, false), TimerStatus::NotStarted);
        assert_eq!(TimerStatus::from_timestamps(true, false), TimerStatus::Running);
        assert_eq!(TimerStatus::from_timestamps(true, true), TimerStatus::Stopped);
    }

    #[test]
    fn test_status_display_labels() {
        assert_eq!(TimerStatus::NotStarted.to_string(), "Not Started");
        assert_eq!(TimerStatus::Running.to_string(), "Running");
        assert_eq!(TimerStatus::Stopped.to_string(), "Stopped");
    }

    #[test]
    fn test_control_states_table() {
        assert_eq!(
            ControlStates::for_status(TimerStatus::NotStarted),
            ControlStates {
                start: true,
                stop: false,
                reset: false,
            }
        );
        assert_eq!(
            ControlStates::for_status(TimerStatus::Running),
            ControlStates {
                start: false,
                stop: true,
                reset: false,
            }
        );
        assert_eq!(
            ControlStates::for_status(TimerStatus::Stopped),
            ControlStates {
                start: true,
                stop: false,
                reset: true,
            }
        );
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&TimerStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not_started\"");
    }
}
