//! Background tasks module
//! 
//! This module contains the tasks that run alongside the command loop.

pub mod refresh;

// Re-export main functions
pub use refresh::display_refresh_task;
