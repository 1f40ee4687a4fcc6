//! Sum types: the `Either` coproduct and the [`Coproduct`] capability.
//!
//! `Either<L, R>` holds exactly one of a `Left(L)` or a `Right(R)`. It is the
//! "OR" shape that [`Product`](super::Product) distributes over in
//! [`ProductType::inside_out_first`](super::ProductType::inside_out_first).
//!
//! Any two-variant type can take part in that distribution by implementing
//! [`Coproduct`], which converts it to and from `Either`. `Result` does so
//! with its error as the left variant.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Either;
//!
//! let parsed: Either<String, u16> = Either::Right(8080);
//! let described = parsed.fold(|error| format!("error: {error}"), |port| format!("port {port}"));
//! assert_eq!(described, "port 8080");
//! ```

use std::fmt;

/// A value that is either a `Left(L)` or a `Right(R)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left value, if present.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The right value, if present.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the left value, leaving a right value untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.bimap(function, |right| right)
    }

    /// Maps the right value, leaving a left value untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.bimap(|left| left, function)
    }

    /// Applies whichever function matches the present variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("four");
    /// assert_eq!(right.bimap(|n| n * 2, str::len), Either::Right(4));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the `Either` into a single type.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        self.fold(Either::Right, Either::Left)
    }
}

impl<T> Either<T, T> {
    /// Extracts the value when both sides share a type.
    #[inline]
    pub fn merge(self) -> T {
        self.fold(|value| value, |value| value)
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

/// `Ok` becomes `Right` and `Err` becomes `Left`.
impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.fold(Err, Ok)
    }
}

// =============================================================================
// Coproduct
// =============================================================================

/// A type with exactly two variants, convertible to and from [`Either`].
///
/// This is the sum-type capability consumed by
/// [`ProductType::inside_out_first`](super::ProductType::inside_out_first)
/// and its inverse.
///
/// # Laws
///
/// ```text
/// S::from_either(s.into_either()) == s
/// ```
///
/// # Examples
///
/// ```rust
/// use funkit::control::{Coproduct, Either};
///
/// let failed: Result<u8, &str> = Err("timeout");
/// assert_eq!(failed.into_either(), Either::Left("timeout"));
/// assert_eq!(Result::<u8, &str>::from_either(Either::Right(3)), Ok(3));
/// ```
pub trait Coproduct: Sized {
    /// Payload of the left variant.
    type Left;
    /// Payload of the right variant.
    type Right;

    /// Views the value as an `Either`.
    fn into_either(self) -> Either<Self::Left, Self::Right>;

    /// Rebuilds the value from an `Either`.
    fn from_either(either: Either<Self::Left, Self::Right>) -> Self;

    /// Applies whichever transform matches the present variant.
    fn bimap_coproduct<T, U, F, G>(self, on_left: F, on_right: G) -> Either<T, U>
    where
        F: FnOnce(Self::Left) -> T,
        G: FnOnce(Self::Right) -> U,
    {
        self.into_either().bimap(on_left, on_right)
    }

    /// Like [`bimap_coproduct`](Coproduct::bimap_coproduct), handing
    /// `context` to whichever transform runs.
    ///
    /// ```rust
    /// use funkit::control::{Coproduct, Either};
    ///
    /// let owner = String::from("job");
    /// let tagged = Ok::<u8, &str>(4).bimap_coproduct_with(
    ///     owner,
    ///     |error, owner| format!("{owner}: {error}"),
    ///     |value, owner| (owner, value),
    /// );
    /// assert_eq!(tagged, Either::Right((String::from("job"), 4)));
    /// ```
    fn bimap_coproduct_with<C, T, U, F, G>(self, context: C, on_left: F, on_right: G) -> Either<T, U>
    where
        F: FnOnce(Self::Left, C) -> T,
        G: FnOnce(Self::Right, C) -> U,
    {
        match self.into_either() {
            Either::Left(left) => Either::Left(on_left(left, context)),
            Either::Right(right) => Either::Right(on_right(right, context)),
        }
    }
}

impl<L, R> Coproduct for Either<L, R> {
    type Left = L;
    type Right = R;

    #[inline]
    fn into_either(self) -> Self {
        self
    }

    #[inline]
    fn from_either(either: Self) -> Self {
        either
    }
}

impl<T, E> Coproduct for Result<T, E> {
    type Left = E;
    type Right = T;

    #[inline]
    fn into_either(self) -> Either<E, T> {
        self.into()
    }

    #[inline]
    fn from_either(either: Either<E, T>) -> Self {
        either.into()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn either_strategy() -> impl Strategy<Value = Either<i32, String>> {
        prop_oneof![
            any::<i32>().prop_map(Either::Left),
            ".{0,6}".prop_map(Either::Right),
        ]
    }

    proptest! {
        #[test]
        fn swap_is_an_involution(value in either_strategy()) {
            prop_assert_eq!(value.clone().swap().swap(), value);
        }

        #[test]
        fn result_conversion_round_trips(value in either_strategy()) {
            let result: Result<String, i32> = value.clone().into();
            prop_assert_eq!(Either::from(result), value);
        }
    }
}
