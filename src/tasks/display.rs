//! Headless display: one JSON snapshot per line for every widget change

use std::{io::Write, sync::Arc};
use tracing::{debug, error};

use crate::state::{TimerSnapshot, TimerWidget};

/// Serialize one snapshot as a single JSON line
pub fn render_line(snapshot: &TimerSnapshot) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}

/// Write the current snapshot and every change until the timer finishes.
/// Hands the writer back when done.
pub async fn display_task<W: Write + Send>(widget: Arc<TimerWidget>, mut out: W) -> W {
    let mut rx = widget.subscribe();

    loop {
        let snapshot = rx.borrow_and_update().clone();

        let line = match render_line(&snapshot) {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to serialize snapshot: {}", e);
                return out;
            }
        };

        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            error!("Failed to write snapshot: {}", e);
            return out;
        }

        if snapshot.finished {
            debug!("Timer finished, display task exiting");
            return out;
        }

        if rx.changed().await.is_err() {
            debug!("Timer dropped, display task exiting");
            return out;
        }
    }
}
