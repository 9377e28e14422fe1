//! Deferred one-shot invocation.

use crate::scheduler::Scheduler;
use std::time::Duration;
use tracing::debug;

/// Schedule a single invocation of `func(args)` after at least `wait`.
///
/// Returns immediately; the caller never sees the function's return value
/// and no cancellation handle is exposed.
pub fn delay<S, A, F>(scheduler: &S, func: F, wait: Duration, args: A)
where
    S: Scheduler + ?Sized,
    A: Send + 'static,
    F: FnOnce(A) + Send + 'static,
{
    debug!(wait_ms = wait.as_millis() as u64, "delay scheduled");
    scheduler.schedule_after(wait, Box::new(move || func(args)));
}
