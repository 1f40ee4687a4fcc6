//! Applicative type class - lifting values and combining independent contexts.
//!
//! `pure` lifts a plain value, `map2`/`map3` combine independent contexts
//! and `apply` feeds a wrapped argument to a wrapped function. `apply` is
//! the primitive the [`Writer`](crate::effect::Writer) traversal bridge is
//! written against: every target context is reached through
//! `pure(rebuild).apply(pure(log)).apply(effect)`.
//!
//! # Laws
//!
//! ```text
//! pure(id).apply(v) == v                                         // identity
//! pure(f).apply(pure(x)) == pure(f(x))                           // homomorphism
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)                    // interchange
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w)) // composition
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A functor that can lift values and combine independent contexts.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Applicative;
///
/// let add = |left: i32| move |right: i32| left + right;
/// let added = Some(add).apply(Some(2)).apply(Some(40));
/// assert_eq!(added, Some(42));
/// assert_eq!(Some(1).map2(None::<i32>, |a, b| a + b), None);
/// ```
pub trait Applicative: Functor {
    /// Lifts a value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three contexts with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the two contained values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Runs both contexts and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Runs both contexts and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies the contained function to the value held by `other`.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Some(function(self?, other?))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Some(function(self?, second?, third?))
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Some((self?)(other?))
    }
}

/// The first `Err` encountered, left to right, wins.
impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        Ok(function(self?, other?))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        Ok(function(self?, second?, third?))
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        Ok((self?)(other?))
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}

impl<A> Applicative for Box<A> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Box::new(function(*self, *other))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Box<B>, third: Box<C>, function: F) -> Box<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Box::new(function(*self, *second, *third))
    }

    #[inline]
    fn apply<B, Output>(self, other: Box<B>) -> Box<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Box::new((*self)(*other))
    }
}

// =============================================================================
// Vec
//
// The list applicative is a cartesian product, so every function is called
// once per argument. That needs `FnMut + Clone` rather than `FnOnce`, which
// the `Applicative` signature cannot express.
// =============================================================================

/// The list applicative: every function applied to every argument.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::ApplicativeVec;
///
/// let labels = vec![|n: i32| format!("a{n}"), |n: i32| format!("b{n}")];
/// assert_eq!(labels.apply(vec![1, 2]), vec!["a1", "a2", "b1", "b2"]);
/// ```
pub trait ApplicativeVec: Sized {
    /// Element type.
    type VecInner;

    /// A singleton list.
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Cartesian combination with a binary function.
    fn map2<B: Clone, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        Self::VecInner: Clone,
        F: FnMut(Self::VecInner, B) -> C;

    /// Applies every function to every argument, functions in the outer loop.
    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        Self::VecInner: FnMut(B) -> Output;
}

impl<A> ApplicativeVec for Vec<A> {
    type VecInner = A;

    fn map2<B: Clone, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        A: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(other.len()));
        for a in &self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        A: FnMut(B) -> Output,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(other.len()));
        for mut function in self {
            for b in &other {
                result.push(function(b.clone()));
            }
        }
        result
    }
}
