//! Rate-limiting with trailing-edge scheduling.

use crate::decorators::once::Once;
use crate::scheduler::Scheduler;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

type SharedFn<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;

/// A recorded fire: when it happened and the one-shot gate that produced it.
/// The two are always installed together.
struct LastFire<A, R> {
    at: Instant,
    gate: Arc<Once<A, R>>,
}

struct ThrottleState<A, R> {
    last: Option<LastFire<A, R>>,
    scheduled: bool,
    pending_args: Option<A>,
}

struct ThrottleInner<A, R> {
    func: SharedFn<A, R>,
    wait: Duration,
    scheduler: Arc<dyn Scheduler>,
    state: Mutex<ThrottleState<A, R>>,
}

impl<A, R> ThrottleInner<A, R>
where
    A: Clone + Send + 'static,
    R: Clone + Send + 'static,
{
    fn fresh_gate(&self) -> Arc<Once<A, R>> {
        let func = self.func.clone();
        Arc::new(Once::new(move |args| func(args)))
    }

    /// Trailing fire: reset the schedule flag, open a new window with a
    /// fresh gate, and fire it with the most recently recorded arguments.
    fn fire_trailing(self: &Arc<Self>) {
        let (gate, args) = {
            let mut state = self.state.lock();
            state.scheduled = false;
            let gate = self.fresh_gate();
            state.last = Some(LastFire {
                at: Instant::now(),
                gate: gate.clone(),
            });
            (gate, state.pending_args.take())
        };

        if let Some(args) = args {
            debug!("throttle trailing call fired");
            gate.call(args);
        }
    }
}

/// A callable that fires its wrapped function at most once per `wait`
/// window, with trailing-edge scheduling.
///
/// A call outside the window fires immediately. A call inside the window
/// records its arguments, schedules at most one trailing fire at `wait`
/// from now, and returns the cached result of the most recently fired
/// one-shot gate — callers inside the window observe a stale result until
/// the trailing call resolves. Bursts collapse to a single trailing fire
/// carrying the burst's most recent arguments.
pub struct Throttled<A, R> {
    inner: Arc<ThrottleInner<A, R>>,
}

impl<A, R> Throttled<A, R>
where
    A: Clone + Send + 'static,
    R: Clone + Send + 'static,
{
    pub fn new<F>(func: F, wait: Duration, scheduler: Arc<dyn Scheduler>) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(ThrottleInner {
                func: Arc::new(func),
                wait,
                scheduler,
                state: Mutex::new(ThrottleState {
                    last: None,
                    scheduled: false,
                    pending_args: None,
                }),
            }),
        }
    }

    /// Invoke the throttled callable.
    pub fn call(&self, args: A) -> R {
        let now = Instant::now();
        let mut state = self.inner.state.lock();

        // Still cooling down if the last fire is within the window.
        let cooling_gate = match &state.last {
            Some(last) if now.duration_since(last.at) <= self.inner.wait => {
                Some(last.gate.clone())
            }
            _ => None,
        };

        match cooling_gate {
            None => {
                let gate = self.inner.fresh_gate();
                state.last = Some(LastFire {
                    at: now,
                    gate: gate.clone(),
                });
                drop(state);

                debug!("throttle fired immediately");
                gate.call(args)
            }
            Some(gate) => {
                state.pending_args = Some(args.clone());
                let needs_schedule = !state.scheduled;
                state.scheduled = true;
                drop(state);

                if needs_schedule {
                    debug!("throttle trailing call scheduled");
                    let inner = self.inner.clone();
                    self.inner.scheduler.schedule_after(
                        self.inner.wait,
                        Box::new(move || inner.fire_trailing()),
                    );
                } else {
                    debug!("throttle call collapsed into pending trailing call");
                }

                // Stale result until the trailing call resolves.
                gate.call(args)
            }
        }
    }
}

impl<A, R> Clone for Throttled<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A, R> std::fmt::Debug for Throttled<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Throttled")
            .field("wait", &self.inner.wait)
            .field("scheduled", &state.scheduled)
            .field("has_fired", &state.last.is_some())
            .finish()
    }
}

/// Rate-limit a function to at most one completed call per `wait` window.
pub fn throttle<A, R, F>(func: F, wait: Duration, scheduler: Arc<dyn Scheduler>) -> Throttled<A, R>
where
    A: Clone + Send + 'static,
    R: Clone + Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    Throttled::new(func, wait, scheduler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::RecordingScheduler;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_throttle(
        wait: Duration,
        scheduler: Arc<RecordingScheduler>,
    ) -> (Throttled<i32, i32>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        let throttled = throttle(
            move |n: i32| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
                n
            },
            wait,
            scheduler,
        );

        (throttled, calls)
    }

    #[test]
    fn test_first_call_fires_immediately() {
        let scheduler = Arc::new(RecordingScheduler::new());
        let (throttled, calls) = counting_throttle(Duration::from_millis(100), scheduler.clone());

        assert_eq!(throttled.call(1), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.scheduled_count(), 0);
    }

    #[test]
    fn test_burst_collapses_to_one_trailing_call() {
        let scheduler = Arc::new(RecordingScheduler::new());
        let (throttled, calls) = counting_throttle(Duration::from_millis(100), scheduler.clone());

        for n in 0..10 {
            throttled.call(n);
        }

        // One immediate fire, one pending trailing fire.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.scheduled_count(), 1);

        scheduler.run_all();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(scheduler.scheduled_count(), 0);
    }

    #[test]
    fn test_cooldown_calls_return_stale_result() {
        let scheduler = Arc::new(RecordingScheduler::new());
        let (throttled, _) = counting_throttle(Duration::from_millis(100), scheduler.clone());

        assert_eq!(throttled.call(1), 1);
        // Inside the window: the previous gate's result, not this call's.
        assert_eq!(throttled.call(2), 1);
        assert_eq!(throttled.call(3), 1);
    }

    #[test]
    fn test_trailing_fire_uses_most_recent_arguments() {
        let scheduler = Arc::new(RecordingScheduler::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        let throttled: Throttled<i32, ()> = throttle(
            move |n| seen_clone.lock().push(n),
            Duration::from_millis(100),
            scheduler.clone(),
        );

        throttled.call(1);
        throttled.call(2);
        throttled.call(3);

        scheduler.run_all();
        assert_eq!(*seen.lock(), vec![1, 3]);
    }

    #[test]
    fn test_ready_again_after_window() {
        let scheduler = Arc::new(RecordingScheduler::new());
        let (throttled, calls) = counting_throttle(Duration::from_millis(1), scheduler.clone());

        assert_eq!(throttled.call(1), 1);
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(throttled.call(2), 2);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(scheduler.scheduled_count(), 0);
    }
}
