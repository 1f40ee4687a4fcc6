//! Newtype wrappers selecting a particular monoid for an underlying type.
//!
//! The same carrier can combine in several lawful ways: integers add or take
//! the maximum, booleans `or` or `and`, optional values keep the first or the
//! last. Each wrapper picks one, so it can be used directly as a
//! [`Writer`](crate::effect::Writer) log.
//!
//! | wrapper   | combine        | identity          |
//! |-----------|----------------|-------------------|
//! | [`Sum`]   | `+`            | `Default` (zero)  |
//! | [`Max`]   | larger         | `Bounded::MIN_VALUE` |
//! | [`Min`]   | smaller        | `Bounded::MAX_VALUE` |
//! | [`First`] | leftmost `Some`  | `None`          |
//! | [`Last`]  | rightmost `Some` | `None`          |
//! | [`Any`]   | `\|\|`         | `false`           |
//! | [`All`]   | `&&`           | `true`            |
//!
//! Multiplication is deliberately absent here: the pair type
//! [`Product`](crate::control::Product) owns that name, and the
//! multiplicative structure of numbers is exposed through
//! [`Semiring`](super::Semiring) instead.

macro_rules! wrapper_accessors {
    ($wrapper:ident) => {
        impl<A> $wrapper<A> {
            #[doc = concat!("Wraps a value in `", stringify!($wrapper), "`.")]
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $wrapper<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

/// Additive monoid over any `Add + Default` type.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

wrapper_accessors!(Sum);

/// Keeps the larger of two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Max<A>(pub A);

wrapper_accessors!(Max);

/// Keeps the smaller of two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Min<A>(pub A);

wrapper_accessors!(Min);

/// Keeps the first present value.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::{First, Monoid};
///
/// let picked = First::combine_all(vec![First(None), First(Some("a")), First(Some("b"))]);
/// assert_eq!(picked, First(Some("a")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct First<A>(pub Option<A>);

/// Keeps the last present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Last<A>(pub Option<A>);

impl<A> First<A> {
    /// Wraps a present value.
    pub const fn some(value: A) -> Self {
        Self(Some(value))
    }

    /// Consumes the wrapper.
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

impl<A> Last<A> {
    /// Wraps a present value.
    pub const fn some(value: A) -> Self {
        Self(Some(value))
    }

    /// Consumes the wrapper.
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

/// Boolean disjunction monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Any(pub bool);

/// Boolean conjunction monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct All(pub bool);

impl Default for All {
    fn default() -> Self {
        Self(true)
    }
}

// =============================================================================
// Bounded
// =============================================================================

/// Types with a least and a greatest value.
///
/// Supplies the identities of [`Max`] and [`Min`].
///
/// ```rust
/// use funkit::typeclass::{Bounded, Max, Monoid};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Priority(u8);
///
/// impl Bounded for Priority {
///     const MIN_VALUE: Self = Priority(0);
///     const MAX_VALUE: Self = Priority(9);
/// }
///
/// assert_eq!(Max::<Priority>::empty(), Max(Priority(0)));
/// ```
pub trait Bounded {
    /// The least value.
    const MIN_VALUE: Self;

    /// The greatest value.
    const MAX_VALUE: Self;
}

macro_rules! bounded_by_consts {
    ($($carrier:ty),* $(,)?) => {
        $(
            impl Bounded for $carrier {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

bounded_by_consts!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl Bounded for () {
    const MIN_VALUE: Self = ();
    const MAX_VALUE: Self = ();
}
