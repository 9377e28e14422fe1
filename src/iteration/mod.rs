//! Collection-iteration primitives.

pub mod filtering;
pub mod mapping;
pub mod reduction;
pub mod traversal;

pub use filtering::*;
pub use mapping::*;
pub use reduction::*;
pub use traversal::*;
