//! Result caching for a single-argument callable.

use crate::error::Result;
use dashmap::DashMap;
use serde::Serialize;
use tracing::debug;

/// A callable with a cache keyed by the serialization of its argument.
///
/// On a cache miss the wrapped function runs and its result is stored; on a
/// hit the cached result is returned without invoking the function. The
/// cache grows monotonically and never evicts. Only single, serializable
/// arguments are supported; anything else is out of contract.
pub struct Memoized<A, R> {
    func: Box<dyn Fn(&A) -> R + Send + Sync>,
    cache: DashMap<String, R>,
}

impl<A: Serialize, R: Clone> Memoized<A, R> {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
            cache: DashMap::new(),
        }
    }

    /// Invoke the callable, consulting the cache first.
    ///
    /// Fails only when the argument cannot be serialized into a cache key.
    pub fn call(&self, arg: &A) -> Result<R> {
        let key = serde_json::to_string(arg)?;

        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, "memoize cache hit");
            return Ok(hit.clone());
        }

        debug!(key = %key, "memoize cache miss");
        let result = (self.func)(arg);
        self.cache.insert(key, result.clone());
        Ok(result)
    }

    /// Number of cached results
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<A, R> std::fmt::Debug for Memoized<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memoized")
            .field("cache_size", &self.cache.len())
            .finish()
    }
}

/// Memoize a single-argument function by its serialized argument.
pub fn memoize<A, R, F>(func: F) -> Memoized<A, R>
where
    A: Serialize,
    R: Clone,
    F: Fn(&A) -> R + Send + Sync + 'static,
{
    Memoized::new(func)
}
