//! Task Timer - track time spent on named tasks from the terminal
//! 
//! This library provides the per-task timer state machine, the board that
//! owns one timer per task name, and the terminal front end that drives them.

pub mod cli;
pub mod config;
pub mod display;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, BoardError, TaskBoard, TaskTimer, TimerStatus};
pub use utils::signals::shutdown_signal;
