//! Display module
//!
//! Turns timer state into the text shown to the user: formatted durations,
//! per-row view models and the rendered task table.

pub mod format;
pub mod render;
pub mod view;

// Re-export main types
pub use format::{format_hms, format_uptime};
pub use render::{render_json, render_live, render_table};
pub use view::{BoardSnapshot, TaskRow};
