//! Periodic display refresh

use std::{io::Write, sync::Arc, time::Duration};

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::{
    display::{render_live, BoardSnapshot},
    state::AppState,
};

/// Background task that re-captures every timer on a fixed tick.
///
/// Only reads timer state. With `live` set, the table and the last reply are
/// redrawn on stdout whenever their text changes.
pub async fn display_refresh_task(state: Arc<AppState>, tick: Duration, live: bool) {
    info!("Starting display refresh task (every {:?})", tick);

    let mut interval = interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_drawn = String::new();

    loop {
        interval.tick().await;

        let snapshot = match state.refresh_snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("Failed to refresh display: {}", e);
                continue;
            }
        };

        if snapshot.running_count() > 0 {
            debug!("Refreshed {} running task(s)", snapshot.running_count());
        }

        if live {
            let frame = live_frame(&state, &snapshot);
            if frame != last_drawn {
                redraw(&frame);
                last_drawn = frame;
            }
        }
    }
}

/// Text drawn for one live refresh
fn live_frame(state: &AppState, snapshot: &BoardSnapshot) -> String {
    render_live(snapshot, state.last_reply().as_deref())
}

fn redraw(frame: &str) {
    let mut stdout = std::io::stdout().lock();
    // clear screen, home cursor
    let result = write!(stdout, "\x1b[2J\x1b[H{}> ", frame).and_then(|_| stdout.flush());
    if let Err(e) = result {
        error!("Failed to redraw table: {}", e);
    }
}
