//! One-shot gate around a callable.

use parking_lot::Mutex;
use tracing::debug;

struct OnceInner<A, R> {
    func: Option<Box<dyn FnOnce(A) -> R + Send>>,
    result: Option<R>,
}

/// A callable that fires its wrapped function at most once.
///
/// The first call consumes the wrapped function with that call's arguments
/// and caches the result; every later call returns the cached result,
/// whatever arguments it supplies.
pub struct Once<A, R> {
    inner: Mutex<OnceInner<A, R>>,
}

impl<A, R: Clone> Once<A, R> {
    pub fn new<F>(func: F) -> Self
    where
        F: FnOnce(A) -> R + Send + 'static,
    {
        Self {
            inner: Mutex::new(OnceInner {
                func: Some(Box::new(func)),
                result: None,
            }),
        }
    }

    /// Invoke the gate. Fires the wrapped function on the first call only.
    pub fn call(&self, args: A) -> R {
        let mut inner = self.inner.lock();

        if let Some(func) = inner.func.take() {
            let result = func(args);
            inner.result = Some(result.clone());
            debug!("once gate fired");
            return result;
        }

        match inner.result.clone() {
            Some(result) => result,
            // `new` always arms `func`, and `func` is only consumed after
            // `result` is stored.
            None => unreachable!("once gate holds neither function nor result"),
        }
    }

    /// Whether the wrapped function has fired
    pub fn has_fired(&self) -> bool {
        self.inner.lock().func.is_none()
    }
}

impl<A, R> std::fmt::Debug for Once<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Once")
            .field("fired", &self.inner.lock().func.is_none())
            .finish()
    }
}

/// Wrap a function so it can fire at most once.
pub fn once<A, R, F>(func: F) -> Once<A, R>
where
    R: Clone,
    F: FnOnce(A) -> R + Send + 'static,
{
    Once::new(func)
}
