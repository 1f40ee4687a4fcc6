//! Monoid type class - semigroups with an identity element.
//!
//! A monoid adds to [`Semigroup`] a distinguished `empty` value that is
//! neutral on both sides of `combine`. Monoids are what a
//! [`Writer`](crate::effect::Writer) accumulates its log into: `pure` starts
//! from `empty()` and every other operation grows the log with `combine`.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a            // left identity
//! a.combine(T::empty()) == a            // right identity
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::<u32>::empty().combine(Sum(7)), Sum(7));
//! assert_eq!(String::combine_all(vec!["a".to_string(), "b".to_string()]), "ab");
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Add;

use super::Identity;
use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Bounded, First, Last, Max, Min, Sum};

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::{Monoid, Semigroup};
///
/// let log = String::from("started;");
/// assert_eq!(String::empty().combine(log.clone()), log);
/// assert_eq!(log.clone().combine(String::empty()), log);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Folds every element into `Self::empty()`.
    ///
    /// Unlike [`Semigroup::reduce_all`] this is total: an empty iterator
    /// yields the identity.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value equals the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::{Monoid, Sum};
    ///
    /// assert!(Sum(0).is_empty_monoid());
    /// assert!(!Sum(1).is_empty_monoid());
    /// ```
    fn is_empty_monoid(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Ord> Monoid for BTreeSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<K: Ord, V: Semigroup> Monoid for BTreeMap<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `Option<T>` lifts any semigroup into a monoid with `None` as identity.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

// =============================================================================
// Wrappers
// =============================================================================

/// `Default` is zero for every primitive number, which is the additive identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}
