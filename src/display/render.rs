//! Plain-text and JSON rendering of a board snapshot

use super::view::{BoardSnapshot, TaskRow};

const NAME_WIDTH: usize = 20;
const DISABLED: &str = "-----";

/// Render the snapshot as a fixed-width table, one line per task
pub fn render_table(snapshot: &BoardSnapshot) -> String {
    if snapshot.rows.is_empty() {
        return "No tasks yet. Add one with `add <name>`.\n".to_string();
    }

    let mut out = snapshot.rows.iter().map(render_row).collect::<Vec<_>>().join("\n");
    out.push('\n');
    out
}

/// Render the table followed by the last reply, for full-screen redraws
pub fn render_live(snapshot: &BoardSnapshot, last_reply: Option<&str>) -> String {
    let mut out = render_table(snapshot);
    if let Some(reply) = last_reply {
        out.push('\n');
        out.push_str(reply);
    }
    out
}

fn render_row(row: &TaskRow) -> String {
    let control = |enabled: bool, label: &str| {
        if enabled {
            format!("[{}]", label)
        } else {
            format!(" {} ", DISABLED)
        }
    };

    format!(
        "{:<width$} {:>10}  {:<11} {} {} {}",
        truncate(&row.name, NAME_WIDTH),
        row.duration_text,
        row.status.to_string(),
        control(row.controls.start, "start"),
        control(row.controls.stop, "stop "),
        control(row.controls.reset, "reset"),
        width = NAME_WIDTH,
    )
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(width - 1).collect();
        short.push('…');
        short
    }
}

/// Render the snapshot as pretty-printed JSON
pub fn render_json(snapshot: &BoardSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}
