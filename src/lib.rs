//! # Underbar
//!
//! Generic collection-iteration primitives and function-decorating
//! combinators for Rust.
//!
//! ## Features
//!
//! - Traversal and transformation over sequences and string-keyed mappings
//!   (`each`, `map`, `filter`, `reject`, `fold`/`reduce`, `uniq`,
//!   `contains`, `every`, `some`)
//! - In-place object merging (`extend`, `defaults`)
//! - Function decorators with explicit hidden state (`once`, `memoize`,
//!   `delay`, `throttle`)
//! - Array algorithms (`sort_by`, `zip`, `flatten`, `intersection`,
//!   `difference`, `shuffle`)
//! - An injectable scheduler so deferred behavior is deterministic in tests
//!
//! ## Example
//!
//! ```
//! use underbar::{filter, fold, memoize, sort_by};
//!
//! let evens = filter(&vec![1, 2, 3, 4], |n| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let sum = fold(&vec![1, 2, 3, 4], 0, |a, b| a + b);
//! assert_eq!(sum, 10);
//!
//! let sorted = sort_by(&[(2, "b"), (1, "a")], |t| Some(t.0));
//! assert_eq!(sorted, vec![(1, "a"), (2, "b")]);
//!
//! let double = memoize(|n: &i64| n * 2);
//! assert_eq!(double.call(&21).unwrap(), 42);
//! assert_eq!(double.cache_size(), 1);
//! ```

// Module declarations
pub mod arrays;
pub mod collection;
pub mod decorators;
pub mod iteration;
pub mod objects;
pub mod scheduler;

mod error;

// Re-exports
pub use arrays::{
    difference, first, flatten, intersection, last, shuffle, sort_by, sort_by_field, zip, Nested,
};
pub use collection::{Collection, Key, Truthy};
pub use decorators::{delay, memoize, once, throttle, Memoized, Once, Throttled};
pub use error::{Result, UnderbarError};
pub use iteration::{
    contains, each, every, every_truthy, filter, fold, identity, index_of, invoke, invoke_method,
    map, pluck, reduce, reject, some, some_truthy, uniq, MethodCall,
};
pub use objects::{defaults, extend};
#[cfg(not(target_arch = "wasm32"))]
pub use scheduler::TokioScheduler;
pub use scheduler::{ImmediateScheduler, RecordingScheduler, Scheduler};
