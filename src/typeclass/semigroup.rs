//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there is a `combine: (T, T) -> T` that is
//! associative. Semigroup is the root of the algebra hierarchy in this crate;
//! [`Monoid`](super::Monoid) adds an identity element on top of it and the
//! markers in [`algebra`](super::CommutativeMonoid) refine it further.
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::{Semigroup, Sum};
//!
//! assert_eq!(String::from("log: ").combine(String::from("started")), "log: started");
//! assert_eq!(Sum(2).combine(Sum(3)), Sum(5));
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::num::NonZeroUsize;
use std::ops::Add;

use super::Identity;
use super::wrappers::{All, Any, First, Last, Max, Min, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// The order of the operands is significant: `combine` is not required to be
/// commutative, and the [`Writer`](crate::effect::Writer) relies on that to
/// distinguish appending from prepending.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Semigroup;
///
/// let a = vec!["open"];
/// let b = vec!["close"];
/// assert_eq!(a.combine(b), vec!["open", "close"]);
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default clones both operands; implementors with a cheaper
    /// borrowed path override it.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// `count` is non-zero because a bare semigroup has no value to return
    /// for zero repetitions; use [`Monoid::combine_all`](super::Monoid::combine_all)
    /// when the empty case matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    /// use funkit::typeclass::Semigroup;
    ///
    /// let three = NonZeroUsize::new(3).unwrap();
    /// assert_eq!(String::from("ab").combine_n(three), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: NonZeroUsize) -> Self
    where
        Self: Clone,
    {
        let mut result = self.clone();
        for _ in 1..count.get() {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces an iterator with `combine`, returning `None` when it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::{Max, Semigroup};
    ///
    /// assert_eq!(Max::reduce_all(vec![Max(3), Max(9), Max(4)]), Some(Max(9)));
    /// assert_eq!(Max::<i32>::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Collections
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T: Ord> Semigroup for BTreeSet<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// Maps combine key-wise; values under the same key are combined in order.
impl<K: Ord, V: Semigroup> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

// =============================================================================
// Option / Unit / Identity
// =============================================================================

/// `None` acts as the identity, so `Option<T>` is a semigroup (and a monoid)
/// whenever `T` is a semigroup.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

// =============================================================================
// Wrappers
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

/// Keeps the leftmost `Some`.
impl<A> Semigroup for First<A> {
    fn combine(self, other: Self) -> Self {
        if self.0.is_some() { self } else { other }
    }
}

/// Keeps the rightmost `Some`.
impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        if other.0.is_some() { other } else { self }
    }
}

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

// =============================================================================
// Tuples
// =============================================================================

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}
