//! Higher-level algorithms over ordered sequences.

use crate::iteration::contains;
use rand::seq::SliceRandom;
use serde_json::Value;
use std::cmp::Ordering;

/// First `n` elements of the sequence (the whole sequence if shorter).
pub fn first<T>(items: &[T], n: usize) -> &[T] {
    &items[..n.min(items.len())]
}

/// Last `n` elements of the sequence (the whole sequence if shorter).
pub fn last<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Stable ascending sort by a derived key, as an insertion sort.
///
/// `None` keys sort to the end; elements with equal keys keep their input
/// order.
pub fn sort_by<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    let mut result: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        let item_key = key(item);
        let mut at = result.len();
        for (index, existing) in result.iter().enumerate() {
            if key_greater(&key(existing), &item_key) {
                at = index;
                break;
            }
        }
        result.insert(at, item.clone());
    }
    result
}

// Missing keys order after every present key; missing vs missing is a tie,
// which keeps the insertion stable.
fn key_greater<K: PartialOrd>(a: &Option<K>, b: &Option<K>) -> bool {
    match (a, b) {
        (None, None) => false,
        (None, Some(_)) => true,
        (Some(_), None) => false,
        (Some(a), Some(b)) => matches!(a.partial_cmp(b), Some(Ordering::Greater)),
    }
}

/// [`sort_by`] keyed on a named property of each JSON object.
///
/// Numbers, strings, and booleans are comparable keys; missing properties
/// and other value types sort to the end.
pub fn sort_by_field(items: &[Value], field: &str) -> Vec<Value> {
    sort_by(items, |item| item.get(field).cloned().and_then(FieldKey::new))
}

/// A JSON property value usable as a sort key
struct FieldKey(Value);

impl FieldKey {
    fn new(value: Value) -> Option<Self> {
        match value {
            Value::Number(_) | Value::String(_) | Value::Bool(_) => Some(Self(value)),
            _ => None,
        }
    }
}

impl PartialEq for FieldKey {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for FieldKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.0, &other.0) {
            (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Zip sequences together element-wise.
///
/// Row length equals the number of input sequences; the number of rows
/// equals the longest input, with missing positions filled with `None`.
pub fn zip<T: Clone>(sequences: &[Vec<T>]) -> Vec<Vec<Option<T>>> {
    let rows = sequences.iter().map(Vec::len).max().unwrap_or(0);
    (0..rows)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.get(index).cloned())
                .collect()
        })
        .collect()
}

/// An arbitrarily nested sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Value(T),
    List(Vec<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Recursively flatten a nested sequence into a flat one, depth-unlimited,
/// preserving element order.
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::new();
    flatten_into(nested, &mut result);
    result
}

fn flatten_into<T: Clone>(nested: &[Nested<T>], result: &mut Vec<T>) {
    for node in nested {
        match node {
            Nested::Value(value) => result.push(value.clone()),
            Nested::List(list) => flatten_into(list, result),
        }
    }
}

/// Elements of the first sequence present in every other sequence.
///
/// First-sequence order, duplicates from the first sequence included as
/// many times as they appear.
pub fn intersection<T: PartialEq + Clone>(sequences: &[Vec<T>]) -> Vec<T> {
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };

    head.iter()
        .filter(|value| rest.iter().all(|sequence| contains(sequence, *value)))
        .cloned()
        .collect()
}

/// Elements of `first` absent from every sequence in `rest`, order
/// preserved.
pub fn difference<T: PartialEq + Clone>(first: &[T], rest: &[Vec<T>]) -> Vec<T> {
    first
        .iter()
        .filter(|value| !rest.iter().any(|sequence| contains(sequence, *value)))
        .cloned()
        .collect()
}

/// A uniformly random permutation of the sequence. The input is copied,
/// never mutated.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut result = items.to_vec();
    result.shuffle(&mut rand::thread_rng());
    result
}
