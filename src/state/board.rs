//! Ordered collection of named task timers

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{debug, info};

use super::TaskTimer;

/// Rejections raised while managing the board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("task name must not be empty")]
    EmptyName,
    #[error("task '{0}' already exists")]
    DuplicateTask(String),
    #[error("no task named '{0}'")]
    UnknownTask(String),
}

/// Owns one `TaskTimer` per task name, in the order tasks were added
#[derive(Debug, Default)]
pub struct TaskBoard {
    timers: Vec<TaskTimer>,
    last_action: Option<String>,
    last_action_time: Option<DateTime<Local>>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new task. Names are trimmed and must be unique.
    pub fn add_task(&mut self, name: &str) -> Result<&TaskTimer, BoardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BoardError::EmptyName);
        }
        if self.position(name).is_some() {
            return Err(BoardError::DuplicateTask(name.to_string()));
        }

        info!("Added task: {}", name);
        self.timers.push(TaskTimer::new(name));
        self.record_action("add", name);
        Ok(&self.timers[self.timers.len() - 1])
    }

    /// Remove a task and hand back its timer
    pub fn remove_task(&mut self, name: &str) -> Result<TaskTimer, BoardError> {
        let index = self.position(name).ok_or_else(|| unknown(name))?;
        let timer = self.timers.remove(index);
        info!("Removed task: {}", timer.task_name());
        self.record_action("remove", timer.task_name());
        Ok(timer)
    }

    pub fn start_task(&mut self, name: &str) -> Result<bool, BoardError> {
        self.transition("start", name, TaskTimer::start)
    }

    pub fn stop_task(&mut self, name: &str) -> Result<bool, BoardError> {
        self.transition("stop", name, TaskTimer::stop)
    }

    pub fn reset_task(&mut self, name: &str) -> Result<bool, BoardError> {
        self.transition("reset", name, TaskTimer::reset)
    }

    pub fn get(&self, name: &str) -> Option<&TaskTimer> {
        self.position(name).map(|index| &self.timers[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskTimer> {
        self.timers.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.timers.iter().map(|t| t.task_name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Most recent successful action and when it happened
    pub fn last_action(&self) -> (Option<String>, Option<DateTime<Local>>) {
        (self.last_action.clone(), self.last_action_time)
    }

    /// Apply a timer operation by name, recording the action when it succeeds
    fn transition<F>(&mut self, action: &str, name: &str, op: F) -> Result<bool, BoardError>
    where
        F: FnOnce(&mut TaskTimer) -> bool,
    {
        let index = self.position(name).ok_or_else(|| unknown(name))?;
        let timer = &mut self.timers[index];
        let applied = op(timer);

        debug!("{} '{}' -> {} (now {})", action, name.trim(), applied, timer.status());
        if applied {
            let task_name = timer.task_name().to_string();
            self.record_action(action, &task_name);
        }
        Ok(applied)
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.timers.iter().position(|t| t.task_name() == name)
    }

    fn record_action(&mut self, action: &str, name: &str) {
        self.last_action = Some(format!("{}:{}", action, name));
        self.last_action_time = Some(Local::now());
    }
}

fn unknown(name: &str) -> BoardError {
    BoardError::UnknownTask(name.trim().to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::state::TimerStatus;

    #[test]
    fn test_add_task_trims_and_registers() {
        let mut board = TaskBoard::new();

        let timer = board.add_task("  Write report ").unwrap();
        assert_eq!(timer.task_name(), "Write report");
        assert_eq!(timer.status(), TimerStatus::NotStarted);
        assert_eq!(board.len(), 1);
        assert!(board.get("Write report").is_some());
    }

    #[test]
    fn test_add_task_rejects_empty_and_duplicate() {
        let mut board = TaskBoard::new();
        board.add_task("Review").unwrap();

        assert_eq!(board.add_task("   ").unwrap_err(), BoardError::EmptyName);
        assert_eq!(
            board.add_task("Review").unwrap_err(),
            BoardError::DuplicateTask("Review".to_string())
        );
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_duplicate_does_not_touch_existing_timer() {
        let mut board = TaskBoard::new();
        board.add_task("Review").unwrap();
        board.start_task("Review").unwrap();

        assert!(board.add_task("Review").is_err());
        assert_eq!(board.get("Review").unwrap().status(), TimerStatus::Running);
    }

    #[test]
    fn test_transitions_dispatch_by_name() {
        let mut board = TaskBoard::new();
        board.add_task("a").unwrap();
        board.add_task("b").unwrap();

        assert_eq!(board.start_task("a"), Ok(true));
        assert_eq!(board.start_task("a"), Ok(false));
        assert_eq!(board.get("b").unwrap().status(), TimerStatus::NotStarted);

        assert_eq!(board.stop_task("b"), Ok(false));
        assert_eq!(board.stop_task("a"), Ok(true));
        assert_eq!(board.get("a").unwrap().status(), TimerStatus::Stopped);

        assert_eq!(board.reset_task("a"), Ok(true));
        assert_eq!(board.get("a").unwrap().status(), TimerStatus::NotStarted);
    }

    #[test]
    fn test_unknown_task_is_an_error() {
        let mut board = TaskBoard::new();

        assert_eq!(board.start_task("ghost"), Err(BoardError::UnknownTask("ghost".to_string())));
        assert_eq!(board.stop_task("ghost"), Err(BoardError::UnknownTask("ghost".to_string())));
        assert_eq!(board.reset_task("ghost"), Err(BoardError::UnknownTask("ghost".to_string())));
        assert!(board.remove_task("ghost").is_err());
    }

    #[test]
    fn test_remove_keeps_order_of_remaining_tasks() {
        let mut board = TaskBoard::new();
        for name in ["one", "two", "three"] {
            board.add_task(name).unwrap();
        }

        let removed = board.remove_task("two").unwrap();
        assert_eq!(removed.task_name(), "two");
        assert_eq!(board.names(), vec!["one".to_string(), "three".to_string()]);

        // name is free again
        assert!(board.add_task("two").is_ok());
        assert_eq!(board.names().last().map(String::as_str), Some("two"));
    }

    #[test]
    fn test_last_action_only_tracks_successes() {
        let mut board = TaskBoard::new();
        assert_eq!(board.last_action().0, None);

        board.add_task("x").unwrap();
        board.start_task("x").unwrap();
        assert_eq!(board.last_action().0.as_deref(), Some("start:x"));

        board.start_task("x").unwrap();
        assert_eq!(board.last_action().0.as_deref(), Some("start:x"));
        assert!(board.last_action().1.is_some());
    }
}
