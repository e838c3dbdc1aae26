//! Main application state management

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::{sync::watch, time::Instant};
use tracing::{info, warn};

use super::{BoardError, TaskBoard, TimerStatus};
use crate::display::BoardSnapshot;

/// Outcome of a start/stop/reset request against a named task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The timer changed state
    Applied(TimerStatus),
    /// The timer refused the request and is still in this state
    Rejected(TimerStatus),
}

/// Shared state for the command loop and the refresh task
#[derive(Debug)]
pub struct AppState {
    /// All task timers
    pub board: Arc<Mutex<TaskBoard>>,
    /// Process start, for uptime
    pub start_time: Instant,
    /// Last reply shown to the user, redrawn under the live table
    pub last_reply: Arc<Mutex<Option<String>>>,
    /// Channel carrying the latest rendered snapshot
    pub snapshot_tx: watch::Sender<BoardSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _snapshot_rx: watch::Receiver<BoardSnapshot>,
}

impl AppState {
    /// Create an empty application state
    pub fn new() -> Self {
        let (snapshot_tx, snapshot_rx) = watch::channel(BoardSnapshot::default());

        Self {
            board: Arc::new(Mutex::new(TaskBoard::new())),
            start_time: Instant::now(),
            last_reply: Arc::new(Mutex::new(None)),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    fn lock_board(&self) -> Result<MutexGuard<'_, TaskBoard>, String> {
        self.board
            .lock()
            .map_err(|e| format!("Failed to lock task board: {}", e))
    }

    /// Register a task; duplicate and empty names come back as a `BoardError`
    pub fn add_task(&self, name: &str) -> Result<Result<(), BoardError>, String> {
        let result = self.lock_board()?.add_task(name).map(|_| ());
        self.refresh_snapshot()?;
        Ok(result)
    }

    /// Remove a task from the board
    pub fn remove_task(&self, name: &str) -> Result<Result<(), BoardError>, String> {
        let result = self.lock_board()?.remove_task(name).map(|_| ());
        self.refresh_snapshot()?;
        Ok(result)
    }

    pub fn start_task(&self, name: &str) -> Result<Result<Transition, BoardError>, String> {
        self.apply("Started", name, TaskBoard::start_task)
    }

    pub fn stop_task(&self, name: &str) -> Result<Result<Transition, BoardError>, String> {
        self.apply("Stopped", name, TaskBoard::stop_task)
    }

    pub fn reset_task(&self, name: &str) -> Result<Result<Transition, BoardError>, String> {
        self.apply("Reset", name, TaskBoard::reset_task)
    }

    /// Run a board transition and report the resulting status
    fn apply<F>(
        &self,
        verb: &str,
        name: &str,
        op: F,
    ) -> Result<Result<Transition, BoardError>, String>
    where
        F: FnOnce(&mut TaskBoard, &str) -> Result<bool, BoardError>,
    {
        let outcome = {
            let mut board = self.lock_board()?;
            op(&mut *board, name).map(|applied| {
                let status = board
                    .get(name)
                    .map(|t| t.status())
                    .unwrap_or(TimerStatus::NotStarted);
                if applied {
                    info!("{} task: {}", verb, name.trim());
                    Transition::Applied(status)
                } else {
                    warn!("Task '{}' is {}, request ignored", name.trim(), status);
                    Transition::Rejected(status)
                }
            })
        };

        self.refresh_snapshot()?;
        Ok(outcome)
    }

    /// Capture the board as of now and publish it to snapshot watchers
    pub fn refresh_snapshot(&self) -> Result<BoardSnapshot, String> {
        let snapshot = {
            let board = self.lock_board()?;
            BoardSnapshot::capture(&board, Instant::now(), self.start_time.elapsed())
        };

        // send_replace never fails, even with no receivers
        self.snapshot_tx.send_replace(snapshot.clone());
        Ok(snapshot)
    }

    /// Remember the reply most recently shown to the user
    pub fn set_last_reply(&self, text: &str) {
        match self.last_reply.lock() {
            Ok(mut last_reply) => *last_reply = Some(text.to_string()),
            Err(e) => warn!("Failed to lock last reply: {}", e),
        }
    }

    pub fn last_reply(&self) -> Option<String> {
        self.last_reply.lock().ok().and_then(|r| r.clone())
    }

    /// Latest published snapshot
    pub fn current_snapshot(&self) -> BoardSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Subscribe to snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<BoardSnapshot> {
        self.snapshot_tx.subscribe()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
