use std::{fmt, marker::PhantomData};

/// The end-of-traversal sentinel.
///
/// A sentinel carries no time, step size, or borrow; it exists only to be
/// compared against. An adaptive iterator equals the sentinel once it has
/// ended, and any two sentinels are equal.
///
/// The type parameters tie a sentinel to the state and time types of the
/// iterators it is compared with.
pub struct End<X, T> {
    marker: PhantomData<fn() -> (X, T)>,
}

impl<X, T> End<X, T> {
    /// Creates a sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<X, T> Default for End<X, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X, T> Clone for End<X, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<X, T> Copy for End<X, T> {}

impl<X, T> fmt::Debug for End<X, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("End")
    }
}

impl<X, T> PartialEq for End<X, T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<X, T> Eq for End<X, T> {}
