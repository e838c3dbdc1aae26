//! State management module
//! 
//! This module contains the per-task timer state machine, the board that
//! owns every timer, and the shared application state.

pub mod app_state;
pub mod board;
pub mod status;
pub mod task_timer;

// Re-export main types
pub use app_state::{AppState, Transition};
pub use board::{BoardError, TaskBoard};
pub use status::{ControlStates, TimerStatus};
pub use task_timer::TaskTimer;
