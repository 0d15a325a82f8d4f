//! Countdown Timer - a minimal MM:SS countdown shown in a small native window
//!
//! This is the main entry point for the countdown-timer application.

use std::sync::Arc;
use anyhow::Context;
use tracing::{info, warn};

use countdown_timer::{
    config::{Config, OutputFormat},
    state::TimerWidget,
    tasks::{display_task, CountdownEnd},
    utils::shutdown_signal,
    view::{window, Scene},
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so JSON lines on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting countdown-timer v1.0.0");
    info!("Configuration: minutes={}, title={:?}, format={:?}",
          config.minutes, config.title, config.format);

    // Invalid minutes abort startup before anything ticks
    let widget = Arc::new(TimerWidget::new());
    widget
        .set_time(config.minutes)
        .context("Invalid timer configuration")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;

    match config.format {
        OutputFormat::Window => {
            // The window owns the main thread; tasks run on the runtime's workers
            let _guard = runtime.enter();
            let mut countdown = widget.start().context("Failed to start countdown")?;

            window::run(Arc::clone(&widget), Scene::new(config.title.clone()))
                .map_err(|e| anyhow::anyhow!("Timer window failed: {}", e))?;

            countdown.cancel();
            info!("Window closed");
            Ok(())
        }
        OutputFormat::Json => runtime.block_on(run_headless(widget)),
    }
}

/// Count down without a window, printing one JSON snapshot per change
async fn run_headless(widget: Arc<TimerWidget>) -> anyhow::Result<()> {
    let display = tokio::spawn(display_task(Arc::clone(&widget), std::io::stdout()));
    let mut countdown = widget.start().context("Failed to start countdown")?;

    let completed = tokio::select! {
        end = countdown.wait() => Some(end),
        _ = shutdown_signal() => None,
    };

    let end = match completed {
        Some(end) => end,
        None => {
            info!("Shutdown signal received, cancelling countdown");
            countdown.cancel();
            countdown.wait().await
        }
    };

    match end {
        CountdownEnd::Finished => {
            // The display exits on its own after writing the final snapshot
            if let Err(e) = display.await {
                warn!("Display task failed: {}", e);
            }
            info!("Countdown complete");
        }
        CountdownEnd::Cancelled => {
            display.abort();
            info!("Countdown stopped before completion");
        }
        CountdownEnd::Failed(e) => {
            display.abort();
            return Err(e).context("Countdown failed");
        }
    }

    Ok(())
}
