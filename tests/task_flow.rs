use std::{sync::Arc, time::Duration};

use pretty_assertions::assert_eq;
use task_timer::{
    cli::{handle_command, Command, Reply},
    state::{ControlStates, TaskTimer},
    tasks::display_refresh_task,
    AppState, BoardError, TimerStatus,
};
use tokio::time::{advance, sleep};

#[tokio::test(start_paused = true)]
async fn write_report_scenario_through_the_board() {
    let state = AppState::new();
    state.add_task("Write report").unwrap().unwrap();

    let row = state.current_snapshot().rows[0].clone();
    assert_eq!(row.status, TimerStatus::NotStarted);
    assert_eq!(row.duration_text, "00:00:00");
    assert_eq!(
        row.controls,
        ControlStates {
            start: true,
            stop: false,
            reset: false,
        }
    );

    state.start_task("Write report").unwrap().unwrap();
    advance(Duration::from_secs(5)).await;
    state.stop_task("Write report").unwrap().unwrap();

    let row = state.current_snapshot().rows[0].clone();
    assert_eq!(row.status, TimerStatus::Stopped);
    assert_eq!(row.duration_secs, 5);
    assert_eq!(
        row.controls,
        ControlStates {
            start: true,
            stop: false,
            reset: true,
        }
    );

    let reply = handle_command(&state, Command::Start("Write report".into())).unwrap();
    assert_eq!(
        reply,
        Reply::Text("Cannot start 'Write report' while it is Stopped (reset it first).\n".into())
    );

    state.reset_task("Write report").unwrap().unwrap();
    let row = state.current_snapshot().rows[0].clone();
    assert_eq!(row.status, TimerStatus::NotStarted);
    assert_eq!(row.duration_secs, 0);
}

#[tokio::test(start_paused = true)]
async fn timers_are_independent() {
    let state = Arc::new(AppState::new());
    for name in ["design", "build", "ship"] {
        state.add_task(name).unwrap().unwrap();
    }

    tokio::spawn(display_refresh_task(Arc::clone(&state), Duration::from_secs(1), false));

    state.start_task("design").unwrap().unwrap();
    sleep(Duration::from_secs(2)).await;
    state.start_task("build").unwrap().unwrap();
    sleep(Duration::from_millis(1500)).await;

    let snapshot = state.current_snapshot();
    let secs: Vec<u64> = snapshot.rows.iter().map(|r| r.duration_secs).collect();
    assert_eq!(secs, vec![3, 1, 0]);
    assert_eq!(snapshot.running_count(), 2);
}

#[test]
fn status_tracks_timestamps_for_every_reachable_state() {
    let mut timer = TaskTimer::new("states");
    let check = |timer: &TaskTimer| {
        let expected = match (timer.start_time().is_some(), timer.end_time().is_some()) {
            (false, false) => TimerStatus::NotStarted,
            (true, false) => TimerStatus::Running,
            (true, true) => TimerStatus::Stopped,
            (false, true) => panic!("end time without start time"),
        };
        assert_eq!(timer.status(), expected);
        assert_eq!(timer.duration().is_some(), expected == TimerStatus::Stopped);
    };

    check(&timer);
    timer.start();
    check(&timer);
    timer.stop();
    check(&timer);
    timer.start();
    check(&timer);
    timer.reset();
    check(&timer);
}

#[test]
fn board_errors_are_recoverable() {
    let state = AppState::new();
    assert_eq!(state.add_task("  ").unwrap(), Err(BoardError::EmptyName));
    assert_eq!(
        state.reset_task("missing").unwrap(),
        Err(BoardError::UnknownTask("missing".into()))
    );

    // the board keeps working afterwards
    assert_eq!(state.add_task("ok").unwrap(), Ok(()));
    assert_eq!(state.current_snapshot().rows.len(), 1);
}
