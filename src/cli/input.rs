//! Blocking stdin reader

use std::{
    io::{self, BufRead},
    thread,
};

use tokio::sync::mpsc;
use tracing::{debug, error};

/// Read stdin on a dedicated thread and forward each line to the returned channel.
///
/// The thread is never joined; it dies with the process, so a pending read
/// cannot hold up shutdown.
pub fn spawn_stdin_reader() -> io::Result<mpsc::Receiver<String>> {
    let (tx, rx) = mpsc::channel(16);

    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || forward_lines(io::stdin().lock(), tx))?;

    Ok(rx)
}

/// Forward lines from `reader` until it ends or the receiver is dropped
pub fn forward_lines<R: BufRead>(reader: R, tx: mpsc::Sender<String>) {
    for line in reader.lines() {
        match line {
            Ok(line) => {
                if tx.blocking_send(line).is_err() {
                    debug!("Command loop closed, stopping input reader");
                    return;
                }
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                return;
            }
        }
    }

    debug!("Input closed");
}
