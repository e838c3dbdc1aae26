//! Per-task timer state machine

use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use super::TimerStatus;

/// Tracks start, stop and elapsed time for a single named task.
///
/// There is no stored status: it is derived from which timestamps are
/// present, so `end_time` is only ever set alongside `start_time`, and
/// `duration` is only ever set alongside `end_time`.
#[derive(Debug, Clone)]
pub struct TaskTimer {
    task_name: String,
    start_time: Option<Instant>,
    end_time: Option<Instant>,
    duration: Option<Duration>,
}

impl TaskTimer {
    /// Create a timer in the `NotStarted` state
    pub fn new(task_name: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            start_time: None,
            end_time: None,
            duration: None,
        }
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn start_time(&self) -> Option<Instant> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<Instant> {
        self.end_time
    }

    /// Frozen duration, present only once stopped
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Current status, computed from the timestamps
    pub fn status(&self) -> TimerStatus {
        TimerStatus::from_timestamps(self.start_time.is_some(), self.end_time.is_some())
    }

    /// Start the timer. Returns false without touching state unless `NotStarted`.
    pub fn start(&mut self) -> bool {
        self.start_at(Instant::now())
    }

    /// Start the timer as of `now`
    pub fn start_at(&mut self, now: Instant) -> bool {
        if self.status() != TimerStatus::NotStarted {
            debug!("Refusing to start '{}' while {}", self.task_name, self.status());
            return false;
        }

        self.start_time = Some(now);
        self.end_time = None;
        self.duration = None;
        true
    }

    /// Stop the timer and freeze its duration. Returns false unless `Running`.
    pub fn stop(&mut self) -> bool {
        self.stop_at(Instant::now())
    }

    /// Stop the timer as of `now`
    pub fn stop_at(&mut self, now: Instant) -> bool {
        let Some(start_time) = self.start_time.filter(|_| self.end_time.is_none()) else {
            debug!("Refusing to stop '{}' while {}", self.task_name, self.status());
            return false;
        };

        self.end_time = Some(now);
        self.duration = Some(now.saturating_duration_since(start_time));
        true
    }

    /// Return to `NotStarted`. Always succeeds.
    pub fn reset(&mut self) -> bool {
        self.start_time = None;
        self.end_time = None;
        self.duration = None;
        true
    }

    /// Elapsed time: frozen when stopped, live when running, zero otherwise
    pub fn get_duration(&self) -> Duration {
        self.duration_at(Instant::now())
    }

    /// Elapsed time as observed at `now`
    pub fn duration_at(&self, now: Instant) -> Duration {
        match (self.duration, self.start_time) {
            (Some(frozen), _) => frozen,
            (None, Some(start_time)) => now.saturating_duration_since(start_time),
            (None, None) => Duration::ZERO,
        }
    }
}
