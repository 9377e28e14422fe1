//! Foundational single-pass traversal.

use crate::collection::{Collection, Key};

/// Return the argument unchanged.
///
/// Handy as a default iterator when a caller does not supply one.
pub fn identity<T>(value: T) -> T {
    value
}

/// Invoke `f(value, key)` once per element of the collection.
///
/// Sequences traverse in index order; mappings in whatever order the map
/// yields. No return value; used only for side effects.
pub fn each<C, F>(collection: &C, f: F)
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, Key<'_>),
{
    collection.each(f);
}

/// Return the lowest index at which `target` appears in the sequence, or
/// `None` if it is absent.
pub fn index_of<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}
