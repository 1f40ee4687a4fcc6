//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                        // left identity
//! m.flat_map(pure) == m                                              // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))      // associativity
//! ```
//!
//! For a [`Writer`](crate::effect::Writer), `flat_map` is `map` followed by
//! `joined`: the outer log is combined with the log produced by the
//! continuation, outer first.

use super::applicative::Applicative;
use super::identity::Identity;

/// An applicative whose next step may depend on the previous value.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Monad;
///
/// fn halve(n: u32) -> Option<u32> {
///     (n % 2 == 0).then_some(n / 2)
/// }
///
/// assert_eq!(Some(12).flat_map(halve).flat_map(halve), Some(3));
/// assert_eq!(Some(12).flat_map(halve).flat_map(halve).flat_map(halve), None);
/// ```
pub trait Monad: Applicative {
    /// Chains a computation that depends on the contained value.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias of [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the first value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

impl<A> Monad for Box<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(A) -> Box<B>,
    {
        function(*self)
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

/// The list monad, which calls its continuation once per element.
pub trait MonadVec: Sized {
    /// Element type.
    type VecInner;

    /// Maps every element to a list and concatenates the results.
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>;

    /// Concatenates nested lists.
    fn flatten<B>(self) -> Vec<B>
    where
        Self::VecInner: IntoIterator<Item = B>;
}

impl<A> MonadVec for Vec<A> {
    type VecInner = A;

    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }

    fn flatten<B>(self) -> Vec<B>
    where
        A: IntoIterator<Item = B>,
    {
        self.into_iter().flatten().collect()
    }
}
