//! View models handed to the renderers

use std::time::Duration;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use super::format::format_hms;
use crate::state::{ControlStates, TaskBoard, TaskTimer, TimerStatus};

/// One rendered row of the task table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    pub name: String,
    pub status: TimerStatus,
    pub duration_secs: u64,
    pub duration_text: String,
    pub controls: ControlStates,
}

impl TaskRow {
    /// Build a row using `now` for running timers
    pub fn from_timer_at(timer: &TaskTimer, now: Instant) -> Self {
        let status = timer.status();
        let duration = timer.duration_at(now);
        Self {
            name: timer.task_name().to_string(),
            status,
            duration_secs: duration.as_secs(),
            duration_text: format_hms(duration),
            controls: ControlStates::for_status(status),
        }
    }
}

/// Everything needed to draw the board at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: Vec<TaskRow>,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Local>>,
    pub uptime: String,
}

impl BoardSnapshot {
    /// Capture every timer on the board as of `now`
    pub fn capture(board: &TaskBoard, now: Instant, uptime: Duration) -> Self {
        let (last_action, last_action_time) = board.last_action();
        Self {
            rows: board.iter().map(|timer| TaskRow::from_timer_at(timer, now)).collect(),
            last_action,
            last_action_time,
            uptime: super::format_uptime(uptime),
        }
    }

    pub fn running_count(&self) -> usize {
        self.rows.iter().filter(|row| row.status.is_running()).count()
    }

    pub fn row(&self, name: &str) -> Option<&TaskRow> {
        self.rows.iter().find(|row| row.name == name)
    }
}
