//! Command dispatch

use std::{future::Future, sync::Arc};

use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::mpsc,
};
use tracing::{debug, error, info, warn};

use super::commands::Command;
use crate::{
    display::{render_json, render_table},
    state::{AppState, BoardError, TimerStatus, Transition},
};

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading
    Text(String),
    /// Leave the loop
    Quit,
}

/// Apply one command to the application state
pub fn handle_command(state: &AppState, command: Command) -> Result<Reply, String> {
    debug!("Handling command: {:?}", command);

    let text = match command {
        Command::Add(name) => match state.add_task(&name)? {
            Ok(()) => format!("Added task '{}'.\n", name.trim()),
            Err(e) => rejected(e),
        },
        Command::Remove(name) => match state.remove_task(&name)? {
            Ok(()) => format!("Removed task '{}'.\n", name.trim()),
            Err(e) => rejected(e),
        },
        Command::Start(name) => transition_reply("start", &name, state.start_task(&name)?),
        Command::Stop(name) => transition_reply("stop", &name, state.stop_task(&name)?),
        Command::Reset(name) => transition_reply("reset", &name, state.reset_task(&name)?),
        Command::List => render_table(&state.refresh_snapshot()?),
        Command::Json => {
            let snapshot = state.refresh_snapshot()?;
            let mut json = render_json(&snapshot)
                .map_err(|e| format!("Failed to encode snapshot: {}", e))?;
            json.push('\n');
            json
        }
        Command::Help => Command::usage().to_string(),
        Command::Quit => return Ok(Reply::Quit),
    };

    Ok(Reply::Text(text))
}

fn rejected(error: BoardError) -> String {
    warn!("Rejected: {}", error);
    format!("Error: {}.\n", error)
}

fn transition_reply(
    action: &str,
    name: &str,
    outcome: Result<Transition, BoardError>,
) -> String {
    match outcome {
        Ok(Transition::Applied(status)) => format!("{} is now {}.\n", name.trim(), status),
        Ok(Transition::Rejected(status)) => {
            let hint = if action == "start" && status == TimerStatus::Stopped {
                " (reset it first)"
            } else {
                ""
            };
            format!("Cannot {} '{}' while it is {}{}.\n", action, name.trim(), status, hint)
        }
        Err(e) => rejected(e),
    }
}

/// Run commands from `lines` until `quit`, end of input, or `shutdown` resolves.
///
/// Replies other than table listings are also kept on the state so a live
/// redraw can show them under the table.
pub async fn run_command_loop<W, F>(
    state: Arc<AppState>,
    mut lines: mpsc::Receiver<String>,
    mut output: W,
    shutdown: F,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
    F: Future<Output = ()>,
{
    info!("Command loop ready");
    tokio::pin!(shutdown);

    write_prompt(&mut output, "").await?;

    loop {
        let line = tokio::select! {
            line = lines.recv() => match line {
                Some(line) => line,
                None => {
                    info!("End of input");
                    return Ok(());
                }
            },
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                return Ok(());
            }
        };

        if line.trim().is_empty() {
            write_prompt(&mut output, "").await?;
            continue;
        }

        let (reply, remember) = match line.parse::<Command>() {
            Ok(command) => {
                let remember = !matches!(command, Command::List | Command::Json | Command::Help);
                match handle_command(&state, command) {
                    Ok(reply) => (reply, remember),
                    Err(e) => {
                        error!("Command failed: {}", e);
                        (Reply::Text(format!("Internal error: {}\n", e)), true)
                    }
                }
            }
            Err(e) => (Reply::Text(format!("{}\n", e)), true),
        };

        match reply {
            Reply::Quit => {
                info!("Quit requested");
                return Ok(());
            }
            Reply::Text(text) => {
                if remember {
                    state.set_last_reply(&text);
                }
                write_prompt(&mut output, &text).await?;
            }
        }
    }
}

async fn write_prompt<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"> ").await?;
    output.flush().await
}
