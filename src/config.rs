//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "task-timer")]
#[command(about = "Track time spent on named tasks from the terminal")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Display refresh interval in seconds
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Register a task at launch (repeatable)
    #[arg(short, long = "task", value_name = "NAME")]
    pub tasks: Vec<String>,

    /// Redraw the task table on every refresh
    #[arg(short, long)]
    pub live: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Refresh interval as a `Duration`
    pub fn tick(&self) -> Duration {
        Duration::from_secs(self.interval)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
