//! Tasks that drive the native window from the tokio side

use eframe::egui;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{state::TimerSnapshot, utils::shutdown_signal};

/// Request a repaint for every published snapshot, up to and including the finished one
pub async fn repaint_task(ctx: egui::Context, mut rx: watch::Receiver<TimerSnapshot>) {
    while rx.changed().await.is_ok() {
        let finished = rx.borrow_and_update().finished;
        ctx.request_repaint();

        if finished {
            debug!("Timer finished, repaint task exiting");
            return;
        }
    }
    debug!("Timer dropped, repaint task exiting");
}

/// Close the window on SIGINT/SIGTERM
pub async fn close_on_signal(ctx: egui::Context) {
    shutdown_signal().await;
    info!("Shutdown signal received, closing window");
    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
}
