//! Deferred-execution facility behind the delay and throttle decorators.
//!
//! The scheduler is an injectable seam so deferred behavior can be tested
//! deterministically, without waiting on a real timer.

use parking_lot::Mutex;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use tokio::time::sleep;

/// A deferred callback
pub type ScheduledFn = Box<dyn FnOnce() + Send>;

/// Deferred-execution facility: run `callback` after at least `wait`.
///
/// No cancellation is exposed; once scheduled, a callback runs.
pub trait Scheduler: Send + Sync {
    fn schedule_after(&self, wait: Duration, callback: ScheduledFn);
}

/// Scheduler backed by the tokio timer.
///
/// Requires a tokio runtime context. A callback that panics takes down its
/// spawned task, not the caller.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[cfg(not(target_arch = "wasm32"))]
impl Scheduler for TokioScheduler {
    fn schedule_after(&self, wait: Duration, callback: ScheduledFn) {
        tokio::spawn(async move {
            sleep(wait).await;
            callback();
        });
    }
}

/// Scheduler that runs callbacks synchronously, ignoring the wait.
///
/// A test double for exercising deferred paths without a runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn schedule_after(&self, _wait: Duration, callback: ScheduledFn) {
        callback();
    }
}

/// Scheduler that records scheduled calls for deterministic replay.
#[derive(Default)]
pub struct RecordingScheduler {
    scheduled: Mutex<Vec<(Duration, ScheduledFn)>>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting to be replayed
    pub fn scheduled_count(&self) -> usize {
        self.scheduled.lock().len()
    }

    /// Wait durations of the pending callbacks, in scheduling order
    pub fn scheduled_waits(&self) -> Vec<Duration> {
        self.scheduled.lock().iter().map(|(wait, _)| *wait).collect()
    }

    /// Run the earliest pending callback; returns false if none is pending
    pub fn run_next(&self) -> bool {
        let next = {
            let mut scheduled = self.scheduled.lock();
            if scheduled.is_empty() {
                None
            } else {
                Some(scheduled.remove(0))
            }
        };

        match next {
            Some((_, callback)) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Run every pending callback in scheduling order; returns how many ran
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }
}

impl Scheduler for RecordingScheduler {
    fn schedule_after(&self, wait: Duration, callback: ScheduledFn) {
        self.scheduled.lock().push((wait, callback));
    }
}

impl std::fmt::Debug for RecordingScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingScheduler")
            .field("scheduled_count", &self.scheduled_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_immediate_scheduler_runs_synchronously() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();

        ImmediateScheduler.schedule_after(
            Duration::from_millis(100),
            Box::new(move || {
                counter_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_recording_scheduler_replays_in_order() {
        let scheduler = RecordingScheduler::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let log_clone = log.clone();
            scheduler.schedule_after(
                Duration::from_millis(i * 10),
                Box::new(move || log_clone.lock().push(i)),
            );
        }

        assert_eq!(scheduler.scheduled_count(), 3);
        assert_eq!(
            scheduler.scheduled_waits(),
            vec![
                Duration::from_millis(0),
                Duration::from_millis(10),
                Duration::from_millis(20)
            ]
        );

        assert_eq!(scheduler.run_all(), 3);
        assert_eq!(*log.lock(), vec![0, 1, 2]);
        assert!(!scheduler.run_next());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_tokio_scheduler_fires_after_wait() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();

        TokioScheduler.schedule_after(
            Duration::from_millis(10),
            Box::new(move || {
                counter_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
