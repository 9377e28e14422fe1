//! Function decorators: wrappers that change a callable's invocation
//! semantics while carrying hidden mutable state.
//!
//! Each decorator is a struct owning its flags, caches, and timestamps
//! behind a lock, invoked through a `call` method; there is no implicit
//! closure capture. Arguments are bundled as a single
//! value (use a tuple for more than one). The decorators assume
//! single-threaded, event-loop style access; the locks make concurrent use
//! memory-safe but the invocation semantics remain single-threaded.

pub mod delay;
pub mod memoize;
pub mod once;
pub mod throttle;

pub use delay::delay;
pub use memoize::{memoize, Memoized};
pub use once::{once, Once};
pub use throttle::{throttle, Throttled};
