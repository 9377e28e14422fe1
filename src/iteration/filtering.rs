//! Predicate-based selection.

use crate::collection::Collection;

/// Collect every element passing the predicate, in traversal order.
///
/// Mapping inputs are projected to a sequence of values.
pub fn filter<C, F>(collection: &C, predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: Fn(&C::Item) -> bool,
{
    let mut result = Vec::new();
    collection.each(|value, _| {
        if predicate(value) {
            result.push(value.clone());
        }
    });
    result
}

/// Collect every element failing the predicate.
///
/// Delegates to [`filter`] with the predicate negated, so the traversal
/// semantics are identical.
pub fn reject<C, F>(collection: &C, predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: Fn(&C::Item) -> bool,
{
    filter(collection, |value| !predicate(value))
}

/// Produce a duplicate-free copy of the sequence, retaining the first
/// occurrence of each element. Strict equality; quadratic scan.
pub fn uniq<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::new();
    for item in items {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}
