//! The polymorphic collection seam shared by the iteration primitives.
//!
//! Two collection shapes exist: ordered sequences (`[T]`, `Vec<T>`) and
//! string-keyed mappings (`HashMap<String, T>`). Sequences traverse in index
//! order; mapping traversal order is whatever the map yields, but every key
//! is visited exactly once.

use std::collections::HashMap;

/// Position of an element within a collection traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// Index into a sequence
    Index(usize),
    /// Key of a mapping entry
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// Get the sequence index, if this key came from a sequence
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None,
        }
    }

    /// Get the mapping key, if this key came from a mapping
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Self::Index(_) => None,
            Self::Name(n) => Some(n),
        }
    }
}

impl std::fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Name(n) => write!(f, "{}", n),
        }
    }
}

/// A collection that the iteration primitives can traverse.
///
/// `values` returns a traversal-order snapshot of borrows; the reduction
/// primitives fold over it instead of consuming the caller's collection.
pub trait Collection {
    type Item;

    /// Visit every element once, in traversal order
    fn each<F>(&self, f: F)
    where
        F: FnMut(&Self::Item, Key<'_>);

    /// Borrowed elements in traversal order
    fn values(&self) -> Vec<&Self::Item>;

    /// Number of elements
    fn len(&self) -> usize;

    /// Check whether the collection has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Collection for [T] {
    type Item = T;

    fn each<F>(&self, mut f: F)
    where
        F: FnMut(&T, Key<'_>),
    {
        for (index, value) in self.iter().enumerate() {
            f(value, Key::Index(index));
        }
    }

    fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn each<F>(&self, f: F)
    where
        F: FnMut(&T, Key<'_>),
    {
        self.as_slice().each(f);
    }

    fn values(&self) -> Vec<&T> {
        self.as_slice().values()
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn each<F>(&self, f: F)
    where
        F: FnMut(&T, Key<'_>),
    {
        self.as_slice().each(f);
    }

    fn values(&self) -> Vec<&T> {
        self.as_slice().values()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<V> Collection for HashMap<String, V> {
    type Item = V;

    fn each<F>(&self, mut f: F)
    where
        F: FnMut(&V, Key<'_>),
    {
        for (key, value) in self {
            f(value, Key::Name(key));
        }
    }

    fn values(&self) -> Vec<&V> {
        HashMap::values(self).collect()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

/// Value truthiness, for the predicate-less forms of `every` and `some`
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}
