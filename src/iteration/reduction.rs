//! Folding a collection down to a single value.
//!
//! Both folds walk a borrowed snapshot of the collection in traversal order
//! and never mutate the caller's input. For sequences that means a forward,
//! left-to-right fold.

use crate::collection::{Collection, Truthy};
use crate::error::{Result, UnderbarError};

/// Fold the collection into `initial` by passing every element through
/// `iterator(acc, &value)` in traversal order.
pub fn fold<C, A, F>(collection: &C, initial: A, mut iterator: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    let mut acc = initial;
    for value in collection.values() {
        acc = iterator(acc, value);
    }
    acc
}

/// Fold the collection with the first consumed element as the seed.
///
/// The seed element is not passed through `iterator`. Fails with
/// [`UnderbarError::EmptyReduction`] on an empty collection.
pub fn reduce<C, F>(collection: &C, mut iterator: F) -> Result<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    let values = collection.values();
    let mut remaining = values.into_iter();

    let seed = remaining
        .next()
        .ok_or_else(|| UnderbarError::empty_reduction("cannot reduce an empty collection without an initial value"))?;

    let mut acc: C::Item = (*seed).clone();
    for value in remaining {
        acc = iterator(acc, value);
    }
    Ok(acc)
}

/// Check whether the collection contains `target`, using strict equality.
/// An OR-fold over the elements.
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    fold(collection, false, |found, value| found || value == target)
}

/// Check whether every element passes the predicate. An AND-fold; `true`
/// for an empty collection.
pub fn every<C, F>(collection: &C, predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: Fn(&C::Item) -> bool,
{
    fold(collection, true, |all, value| all && predicate(value))
}

/// [`every`] with element truthiness as the predicate.
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, Truthy::is_truthy)
}

/// Check whether any element passes the predicate.
///
/// Composed from [`every`] with the predicate negated; `false` for an empty
/// collection.
pub fn some<C, F>(collection: &C, predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: Fn(&C::Item) -> bool,
{
    !every(collection, |value| !predicate(value))
}

/// [`some`] with element truthiness as the predicate.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, Truthy::is_truthy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnderbarError;
    use std::collections::HashMap;

    #[test]
    fn test_fold_with_initial() {
        let items = vec![1, 2, 3, 4];
        assert_eq!(fold(&items, 0, |a, b| a + b), 10);
    }

    #[test]
    fn test_fold_changes_accumulator_type() {
        let items = vec![1, 2, 3];
        let rendered = fold(&items, String::new(), |mut acc, n| {
            acc.push_str(&n.to_string());
            acc
        });
        assert_eq!(rendered, "123");
    }

    #[test]
    fn test_reduce_seeds_with_first_element() {
        let items = vec![1, 2, 3];
        assert_eq!(reduce(&items, |a, b| a + b).unwrap(), 6);
    }

    #[test]
    fn test_reduce_folds_forward() {
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let joined = reduce(&items, |acc, next| acc + next).unwrap();
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let items = vec![5, 6, 7];
        let _ = reduce(&items, |a, b| a.max(*b)).unwrap();
        assert_eq!(items, vec![5, 6, 7]);
    }

    #[test]
    fn test_reduce_empty_fails() {
        let items: Vec<i32> = Vec::new();
        let err = reduce(&items, |a, b| a + b).unwrap_err();
        assert!(matches!(err, UnderbarError::EmptyReduction { .. }));
    }

    #[test]
    fn test_reduce_over_mapping() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), 2);
        map.insert("b".to_string(), 3);
        map.insert("c".to_string(), 5);

        assert_eq!(reduce(&map, |a, b| a + b).unwrap(), 10);
    }

    #[test]
    fn test_contains() {
        let items = vec![1, 2, 3];
        assert!(contains(&items, &2));
        assert!(!contains(&items, &9));

        let mut map = HashMap::new();
        map.insert("k".to_string(), "v");
        assert!(contains(&map, &"v"));
    }

    #[test]
    fn test_every_true_on_empty() {
        let items: Vec<i32> = Vec::new();
        assert!(every(&items, |n| *n > 0));
    }

    #[test]
    fn test_every_and_some() {
        let items = vec![2, 4, 6];
        assert!(every(&items, |n| n % 2 == 0));
        assert!(!every(&items, |n| *n > 4));
        assert!(some(&items, |n| *n > 4));
        assert!(!some(&items, |n| *n > 6));
    }

    #[test]
    fn test_some_false_on_empty() {
        let items: Vec<i32> = Vec::new();
        assert!(!some(&items, |_| true));
    }

    #[test]
    fn test_every_some_duality() {
        let items = vec![1, 2, 3, 4, 5];
        let over_three = |n: &i32| *n > 3;
        assert_eq!(some(&items, over_three), !every(&items, |n| !over_three(n)));
    }

    #[test]
    fn test_truthy_forms() {
        assert!(every_truthy(&vec![1, 2, 3]));
        assert!(!every_truthy(&vec![1, 0, 3]));
        assert!(some_truthy(&vec!["", "x"]));
        assert!(!some_truthy(&vec!["", ""]));
    }
}
