//! The timer widget: shared countdown state, its label grid and change notifications

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{Digits, TickOutcome, TimerState};
use crate::{
    error::TimerError,
    tasks::countdown::{spawn_countdown, CountdownHandle, TICK_PERIOD},
    view::TimerGrid,
};

/// Point-in-time view of the widget published to observers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub remaining_seconds: u32,
    pub finished: bool,
    pub digits: Digits,
    pub display: String,
    pub timestamp: DateTime<Utc>,
}

impl TimerSnapshot {
    fn of(state: &TimerState) -> Self {
        let digits = state.digits();
        Self {
            remaining_seconds: state.remaining_seconds,
            finished: state.finished,
            digits,
            display: digits.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug)]
pub struct TimerWidget {
    timer_state: Arc<Mutex<TimerState>>,
    grid: Arc<Mutex<TimerGrid>>,
    /// Set while a countdown task for this widget is alive
    running: AtomicBool,
    snapshot_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    _snapshot_rx: watch::Receiver<TimerSnapshot>,
}

impl TimerWidget {
    /// Create an unconfigured widget showing `00:00`
    pub fn new() -> Self {
        let timer_state = TimerState::new();
        let (snapshot_tx, snapshot_rx) = watch::channel(TimerSnapshot::of(&timer_state));

        Self {
            timer_state: Arc::new(Mutex::new(timer_state)),
            grid: Arc::new(Mutex::new(TimerGrid::new())),
            running: AtomicBool::new(false),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Set the countdown length in minutes (1-99) and refresh the labels
    pub fn set_time(&self, minutes: i64) -> Result<Digits, TimerError> {
        // Both locks are taken before anything changes
        let mut state = self.lock_state()?;
        let mut grid = self.lock_grid()?;
        state.set_time(minutes)?;

        let digits = state.digits();
        grid.refresh(&digits);
        let snapshot = TimerSnapshot::of(&state);
        drop(grid);
        drop(state);

        info!("Timer set to {} minutes ({})", minutes, digits);
        self.publish(snapshot);
        Ok(digits)
    }

    /// Start ticking once per second on the current tokio runtime
    pub fn start(self: &Arc<Self>) -> Result<CountdownHandle, TimerError> {
        {
            let state = self.lock_state()?;
            if !state.configured {
                return Err(TimerError::NotConfigured);
            }
            if state.finished {
                return Err(TimerError::Finished);
            }
        }
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(TimerError::AlreadyRunning);
        }

        info!("Starting countdown");
        Ok(spawn_countdown(Arc::clone(self), TICK_PERIOD))
    }

    /// Apply a single tick: decrement, or mark finished once remaining time is zero
    pub fn tick(&self) -> Result<TickOutcome, TimerError> {
        let mut state = self.lock_state()?;
        let mut grid = self.lock_grid()?;
        let outcome = state.tick();

        match outcome {
            TickOutcome::Decremented => {
                let digits = state.digits();
                grid.refresh(&digits);
                let snapshot = TimerSnapshot::of(&state);
                drop(grid);
                drop(state);

                debug!("Tick: {} remaining", digits);
                self.publish(snapshot);
            }
            TickOutcome::Finished => {
                let snapshot = TimerSnapshot::of(&state);
                drop(grid);
                drop(state);

                info!("Countdown finished");
                self.publish(snapshot);
            }
            TickOutcome::Idle => {}
        }

        Ok(outcome)
    }

    pub fn snapshot(&self) -> Result<TimerSnapshot, TimerError> {
        self.lock_state().map(|state| TimerSnapshot::of(&state))
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Copy of the labels currently on screen
    pub fn grid(&self) -> Result<TimerGrid, TimerError> {
        self.lock_grid().map(|grid| grid.clone())
    }

    pub fn is_finished(&self) -> Result<bool, TimerError> {
        self.lock_state().map(|state| state.is_finished())
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub(crate) fn mark_stopped(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    fn publish(&self, snapshot: TimerSnapshot) {
        if let Err(e) = self.snapshot_tx.send(snapshot) {
            warn!("Failed to send timer update: {}", e);
        }
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, TimerState>, TimerError> {
        self.timer_state
            .lock()
            .map_err(|e| TimerError::StatePoisoned(e.to_string()))
    }

    fn lock_grid(&self) -> Result<MutexGuard<'_, TimerGrid>, TimerError> {
        self.grid
            .lock()
            .map_err(|e| TimerError::StatePoisoned(e.to_string()))
    }
}

impl Default for TimerWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::tasks::countdown::CountdownEnd;

    #[test]
    fn set_time_updates_labels_and_snapshot() {
        let widget = TimerWidget::new();
        let digits = widget.set_time(1).unwrap();

        assert_eq!(digits.labels(), ["0", "1", "0", "0"]);
        assert_eq!(widget.grid().unwrap().texts(), ["0", "1", ":", "0", "0"]);

        let snapshot = widget.snapshot().unwrap();
        assert_eq!(snapshot.remaining_seconds, 60);
        assert_eq!(snapshot.display, "01:00");
        assert!(!snapshot.finished);
    }

    #[test]
    fn invalid_time_keeps_previous_state() {
        let widget = TimerWidget::new();
        widget.set_time(5).unwrap();

        assert_eq!(widget.set_time(0), Err(TimerError::InvalidMinutes(0)));
        assert_eq!(widget.set_time(100), Err(TimerError::InvalidMinutes(100)));

        assert_eq!(widget.snapshot().unwrap().remaining_seconds, 300);
        assert_eq!(widget.grid().unwrap().texts(), ["0", "5", ":", "0", "0"]);
    }

    #[test]
    fn manual_ticks_drive_to_finished() {
        let widget = TimerWidget::new();
        widget.set_time(1).unwrap();

        for _ in 0..60 {
            assert_eq!(widget.tick().unwrap(), TickOutcome::Decremented);
        }
        assert_eq!(widget.tick().unwrap(), TickOutcome::Finished);
        assert_eq!(widget.tick().unwrap(), TickOutcome::Idle);

        assert!(widget.is_finished().unwrap());
        assert_eq!(widget.grid().unwrap().texts(), ["0", "0", ":", "0", "0"]);
    }

    #[test]
    fn subscribers_see_latest_snapshot() {
        let widget = TimerWidget::new();
        let mut rx = widget.subscribe();

        widget.set_time(2).unwrap();
        widget.tick().unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().display, "01:59");
    }

    fn poison_grid(widget: &TimerWidget) {
        let grid = Arc::clone(&widget.grid);
        let _ = std::thread::spawn(move || {
            let _guard = grid.lock().unwrap();
            panic!("poison grid lock");
        })
        .join();
    }

    #[test]
    fn set_time_with_poisoned_grid_changes_nothing() {
        let widget = TimerWidget::new();
        widget.set_time(2).unwrap();
        let before = widget.snapshot().unwrap();
        poison_grid(&widget);

        assert!(matches!(widget.set_time(7), Err(TimerError::StatePoisoned(_))));

        let after = widget.snapshot().unwrap();
        assert_eq!(after.remaining_seconds, before.remaining_seconds);
        assert_eq!(after.finished, before.finished);
    }

    #[test]
    fn tick_with_poisoned_grid_changes_nothing() {
        let widget = TimerWidget::new();
        widget.set_time(1).unwrap();
        poison_grid(&widget);

        assert!(matches!(widget.tick(), Err(TimerError::StatePoisoned(_))));
        assert_eq!(widget.snapshot().unwrap().remaining_seconds, 60);
    }

    #[tokio::test]
    async fn start_after_finish_is_refused_until_new_time() {
        let widget = Arc::new(TimerWidget::new());
        widget.set_time(1).unwrap();
        for _ in 0..61 {
            widget.tick().unwrap();
        }

        assert!(matches!(widget.start(), Err(TimerError::Finished)));
        assert!(!widget.is_running());

        widget.set_time(1).unwrap();
        let mut handle = widget.start().unwrap();
        handle.cancel();
        handle.wait().await;
    }

    #[tokio::test]
    async fn start_requires_configuration() {
        let widget = Arc::new(TimerWidget::new());
        assert!(matches!(widget.start(), Err(TimerError::NotConfigured)));
        assert!(!widget.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn start_refuses_second_countdown() {
        let widget = Arc::new(TimerWidget::new());
        widget.set_time(1).unwrap();

        let mut handle = widget.start().unwrap();
        assert!(matches!(widget.start(), Err(TimerError::AlreadyRunning)));

        handle.cancel();
        assert_eq!(handle.wait().await, CountdownEnd::Cancelled);
        assert!(!widget.is_running());

        let mut again = widget.start().unwrap();
        again.cancel();
        again.wait().await;
    }

    #[tokio::test(start_paused = true)]
    async fn set_time_while_running_restarts_from_new_value() {
        let widget = Arc::new(TimerWidget::new());
        widget.set_time(1).unwrap();
        let mut handle = widget.start().unwrap();

        tokio::time::sleep(Duration::from_millis(5_500)).await;
        assert_eq!(widget.snapshot().unwrap().remaining_seconds, 55);

        widget.set_time(2).unwrap();
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(widget.snapshot().unwrap().remaining_seconds, 117);

        handle.cancel();
        handle.wait().await;
    }
}
