//! Element-wise transformation and dispatch.

use crate::error::{Result, UnderbarError};
use serde_json::Value;

/// Return a new sequence of `iterator(&value, index)` results, same length
/// and order as the input. Iterator panics propagate to the caller.
pub fn map<T, U, F>(items: &[T], mut iterator: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    items
        .iter()
        .enumerate()
        .map(|(index, value)| iterator(value, index))
        .collect()
}

/// Project a named property from each JSON object in the sequence.
///
/// Elements missing the property project `Value::Null`.
pub fn pluck(items: &[Value], key: &str) -> Vec<Value> {
    map(items, |item, _| {
        item.get(key).cloned().unwrap_or(Value::Null)
    })
}

/// Per-element dispatch of a named method.
pub trait MethodCall {
    type Arg;
    type Output;

    /// Call the method named `name` on this element, or `None` if no such
    /// method exists.
    fn call_method(&self, name: &str, args: &[Self::Arg]) -> Option<Self::Output>;
}

/// Call the named method on every element, collecting results in input
/// order. Fails with [`UnderbarError::MissingMethod`] when an element has no
/// method with that name.
pub fn invoke_method<T>(items: &[T], name: &str, args: &[T::Arg]) -> Result<Vec<T::Output>>
where
    T: MethodCall,
{
    items
        .iter()
        .map(|item| {
            item.call_method(name, args)
                .ok_or_else(|| UnderbarError::missing_method(format!("no method named '{}'", name)))
        })
        .collect()
}

/// Apply a free function to every element with the shared args, collecting
/// results in input order.
pub fn invoke<T, A, U, F>(items: &[T], func: F, args: &[A]) -> Vec<U>
where
    F: Fn(&T, &[A]) -> U,
{
    items.iter().map(|item| func(item, args)).collect()
}
