//! Refinements of [`Monoid`] and the two-operation [`Semiring`].
//!
//! The marker traits carry no methods: they record that an implementation
//! satisfies an extra law, so generic code can demand it in a bound.
//!
//! ```text
//! CommutativeMonoid:   a.combine(b) == b.combine(a)
//! BoundedSemilattice:  a.combine(a.clone()) == a        (plus commutativity)
//! Semiring:            (S, plus, zero) commutative monoid
//!                      (S, times, one) monoid
//!                      times distributes over plus, zero annihilates times
//! ```

use std::collections::BTreeSet;
use std::ops::Add;

use super::Identity;
use super::monoid::Monoid;
use super::wrappers::{All, Any, Bounded, Max, Min, Sum};

/// A monoid whose `combine` is commutative.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::{CommutativeMonoid, Semigroup, Sum};
///
/// fn total<M: CommutativeMonoid + Clone>(left: M, right: M) -> (M, M) {
///     (left.clone().combine(right.clone()), right.combine(left))
/// }
///
/// let (a, b) = total(Sum(2), Sum(5));
/// assert_eq!(a, b);
/// ```
pub trait CommutativeMonoid: Monoid {}

/// A commutative monoid whose `combine` is also idempotent.
pub trait BoundedSemilattice: CommutativeMonoid {}

/// A type with an additive and a multiplicative monoid.
///
/// Implementations for the integer primitives use wrapping arithmetic, so
/// every operation is total.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Semiring;
///
/// assert_eq!(3u8.plus(4).times(2), 14);
/// assert_eq!(u8::zero().times(200), 0);
/// assert!(true.times(bool::one()));
/// ```
pub trait Semiring: Sized {
    /// The additive identity, which also annihilates `times`.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Additive combination.
    #[must_use]
    fn plus(self, other: Self) -> Self;

    /// Multiplicative combination.
    #[must_use]
    fn times(self, other: Self) -> Self;
}

macro_rules! integer_semiring {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Semiring for $integer {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn plus(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                #[inline]
                fn times(self, other: Self) -> Self {
                    self.wrapping_mul(other)
                }
            }
        )*
    };
}

integer_semiring!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// The boolean semiring: `or` is addition, `and` is multiplication.
impl Semiring for bool {
    fn zero() -> Self {
        false
    }

    fn one() -> Self {
        true
    }

    fn plus(self, other: Self) -> Self {
        self || other
    }

    fn times(self, other: Self) -> Self {
        self && other
    }
}

impl Semiring for () {
    fn zero() -> Self {}

    fn one() -> Self {}

    fn plus(self, _other: Self) -> Self {}

    fn times(self, _other: Self) -> Self {}
}

impl<A: Semiring, B: Semiring> Semiring for (A, B) {
    fn zero() -> Self {
        (A::zero(), B::zero())
    }

    fn one() -> Self {
        (A::one(), B::one())
    }

    fn plus(self, other: Self) -> Self {
        (self.0.plus(other.0), self.1.plus(other.1))
    }

    fn times(self, other: Self) -> Self {
        (self.0.times(other.0), self.1.times(other.1))
    }
}

// =============================================================================
// Marker implementations
// =============================================================================

impl CommutativeMonoid for () {}
impl BoundedSemilattice for () {}

impl<A: Add<Output = A> + Default> CommutativeMonoid for Sum<A> {}

impl<A: Ord + Bounded> CommutativeMonoid for Max<A> {}
impl<A: Ord + Bounded> BoundedSemilattice for Max<A> {}

impl<A: Ord + Bounded> CommutativeMonoid for Min<A> {}
impl<A: Ord + Bounded> BoundedSemilattice for Min<A> {}

impl CommutativeMonoid for Any {}
impl BoundedSemilattice for Any {}

impl CommutativeMonoid for All {}
impl BoundedSemilattice for All {}

impl<T: Ord> CommutativeMonoid for BTreeSet<T> {}
impl<T: Ord> BoundedSemilattice for BTreeSet<T> {}

impl<T: CommutativeMonoid> CommutativeMonoid for Option<T> {}
impl<T: BoundedSemilattice> BoundedSemilattice for Option<T> {}

impl<T: CommutativeMonoid> CommutativeMonoid for Identity<T> {}
impl<T: BoundedSemilattice> BoundedSemilattice for Identity<T> {}

impl<A: CommutativeMonoid, B: CommutativeMonoid> CommutativeMonoid for (A, B) {}
impl<A: BoundedSemilattice, B: BoundedSemilattice> BoundedSemilattice for (A, B) {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(250u8, 10u8, 4u8)]
    #[case(1u8, 2u8, 3u8)]
    fn integer_plus_wraps(#[case] left: u8, #[case] right: u8, #[case] expected: u8) {
        assert_eq!(left.plus(right), expected);
    }

    #[rstest]
    fn integer_times_wraps() {
        assert_eq!(i8::MAX.times(2), -2);
    }

    #[rstest]
    #[case(false, false, false, false)]
    #[case(true, false, true, false)]
    #[case(true, true, true, true)]
    fn boolean_semiring(
        #[case] left: bool,
        #[case] right: bool,
        #[case] sum: bool,
        #[case] product: bool,
    ) {
        assert_eq!(left.plus(right), sum);
        assert_eq!(left.times(right), product);
    }

    #[rstest]
    fn tuple_semiring_is_componentwise() {
        let value = (3i32, true);
        assert_eq!(value.times(<(i32, bool)>::one()), value);
        assert_eq!(value.plus(<(i32, bool)>::zero()), value);
        assert_eq!(value.times(<(i32, bool)>::zero()), (0, false));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::typeclass::Semigroup;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn integer_distributivity(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
            prop_assert_eq!(a.times(b.plus(c)), a.times(b).plus(a.times(c)));
            prop_assert_eq!(a.plus(b).times(c), a.times(c).plus(b.times(c)));
        }

        #[test]
        fn zero_annihilates(a in any::<i64>()) {
            prop_assert_eq!(a.times(i64::zero()), 0);
            prop_assert_eq!(i64::zero().times(a), 0);
        }

        #[test]
        fn max_is_idempotent(a in any::<i16>()) {
            prop_assert_eq!(Max(a).combine(Max(a)), Max(a));
        }

        #[test]
        fn sum_commutes(a in -10_000i32..10_000, b in -10_000i32..10_000) {
            prop_assert_eq!(Sum(a).combine(Sum(b)), Sum(b).combine(Sum(a)));
        }
    }
}
