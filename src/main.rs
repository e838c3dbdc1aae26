//! Task Timer - track time spent on named tasks from the terminal
//! 
//! This is the main entry point for the task-timer application.

use std::sync::Arc;

use tokio::io::stdout;
use tracing::{info, warn};

use task_timer::{
    cli::{run_command_loop, spawn_stdin_reader},
    config::Config,
    display::render_table,
    state::AppState,
    tasks::display_refresh_task,
    utils::shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they stay out of the task table
    tracing_subscriber::fmt()
        .with_env_filter(format!("task_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting task-timer v1.0.0");
    info!("Configuration: interval={}s, live={}, tasks={:?}",
          config.interval, config.live, config.tasks);

    let state = Arc::new(AppState::new());

    for name in &config.tasks {
        match state.add_task(name) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Skipping task from command line: {}", e),
            Err(e) => anyhow::bail!(e),
        }
    }

    let snapshot = state.refresh_snapshot().map_err(anyhow::Error::msg)?;
    print!("{}", render_table(&snapshot));

    // Start the display refresh background task
    let refresh_state = Arc::clone(&state);
    tokio::spawn(display_refresh_task(refresh_state, config.tick(), config.live));

    // stdin is read on its own thread so a pending read never blocks shutdown
    let lines = spawn_stdin_reader()?;
    if let Err(e) = run_command_loop(Arc::clone(&state), lines, stdout(), shutdown_signal()).await {
        tracing::error!("Command loop error: {}", e);
    }

    info!("Task timer shutdown complete");
    Ok(())
}
