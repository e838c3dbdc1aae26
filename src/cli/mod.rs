//! Interactive command front end
//! 
//! This module reads user input lines, parses them and dispatches them to
//! the task board.

pub mod commands;
pub mod handlers;
pub mod input;

pub use commands::{Command, CommandError};
pub use handlers::{handle_command, run_command_loop, Reply};
pub use input::spawn_stdin_reader;
