//! Periodic countdown task

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::oneshot,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info, warn};

use crate::{
    error::TimerError,
    state::{TickOutcome, TimerWidget},
};

/// Interval between ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// How a countdown task ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownEnd {
    /// Remaining time reached zero and the finished flag was set
    Finished,
    /// Stopped through the handle before finishing
    Cancelled,
    /// A tick could not be applied
    Failed(TimerError),
}

/// Owner of a running countdown. Dropping it aborts the task.
#[derive(Debug)]
pub struct CountdownHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
    join: Option<JoinHandle<CountdownEnd>>,
    /// How the task ended, once observed
    end: Option<CountdownEnd>,
}

impl CountdownHandle {
    /// Ask the task to stop without marking the timer finished
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            // The task may already be gone
            let _ = tx.send(());
        }
    }

    /// Wait for the task to end. Later calls return the same outcome.
    pub async fn wait(&mut self) -> CountdownEnd {
        if let Some(end) = &self.end {
            return end.clone();
        }

        let end = match self.join.as_mut() {
            Some(join) => match join.await {
                Ok(end) => end,
                Err(e) => {
                    warn!("Countdown task did not complete: {}", e);
                    CountdownEnd::Cancelled
                }
            },
            None => CountdownEnd::Cancelled,
        };
        self.join = None;
        self.end = Some(end.clone());
        end
    }

    /// Outcome already observed through `wait`, if any
    pub fn end(&self) -> Option<&CountdownEnd> {
        self.end.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.end.is_some() || self.join.as_ref().map_or(true, |join| join.is_finished())
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            join.abort();
        }
    }
}

/// Clears the widget's running flag however the task exits, including abort
struct RunningGuard(Arc<TimerWidget>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.mark_stopped();
    }
}

/// Spawn the ticking task for `widget`; the first tick fires one `period` from now
pub fn spawn_countdown(widget: Arc<TimerWidget>, period: Duration) -> CountdownHandle {
    let (cancel_tx, cancel_rx) = oneshot::channel();
    let join = tokio::spawn(countdown_task(widget, period, cancel_rx));

    CountdownHandle {
        cancel_tx: Some(cancel_tx),
        join: Some(join),
        end: None,
    }
}

async fn countdown_task(
    widget: Arc<TimerWidget>,
    period: Duration,
    mut cancel_rx: oneshot::Receiver<()>,
) -> CountdownEnd {
    let _guard = RunningGuard(Arc::clone(&widget));

    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match widget.tick() {
                    Ok(TickOutcome::Decremented) => {}
                    Ok(TickOutcome::Finished) => {
                        info!("Countdown reached zero, stopping ticks");
                        return CountdownEnd::Finished;
                    }
                    Ok(TickOutcome::Idle) => {
                        debug!("Timer already finished, stopping ticks");
                        return CountdownEnd::Finished;
                    }
                    Err(e) => {
                        error!("Failed to apply tick: {}", e);
                        return CountdownEnd::Failed(e);
                    }
                }
            }

            // Explicit cancel, or the handle was dropped
            _ = &mut cancel_rx => {
                info!("Countdown cancelled");
                return CountdownEnd::Cancelled;
            }
        }
    }
}
