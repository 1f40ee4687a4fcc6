//! Products: the `Product<A, B>` pair and the [`ProductType`] capability.
//!
//! A product is the categorical "AND": an ordered pair of two values. Its
//! only primitive is [`ProductType::fold`], which hands both components to a
//! two-argument function. Everything else (projections, `bimap`, `eval`,
//! distribution over a sum) is derived from `fold`, so any type that can fold
//! into two parts gets the whole vocabulary. [`Writer`](crate::effect::Writer)
//! is one such type, with its log as the first component.
//!
//! # Distribution over sums
//!
//! `inside_out_first` makes `(A + B) × C ≅ A × C + B × C` concrete:
//!
//! ```rust
//! use funkit::control::{Either, Product, ProductType};
//!
//! let tagged: Product<Result<u16, String>, &str> = Product::new(Ok(443), "edge");
//! assert_eq!(
//!     tagged.inside_out_first(),
//!     Either::Right(Product::new(443, "edge"))
//! );
//! ```
//!
//! # Algebra
//!
//! A product of monoids is a monoid component-wise, and the same holds for
//! the law markers and for [`Semiring`](crate::typeclass::Semiring).

use std::fmt;
use std::rc::Rc;

use super::either::{Coproduct, Either};
use crate::typeclass::{BoundedSemilattice, CommutativeMonoid, Monoid, Semigroup, Semiring};

// =============================================================================
// Exponential
// =============================================================================

/// A function-like value from `Source` to `Target`.
///
/// Named for the categorical exponential object `Target ^ Source`. It is the
/// capability [`ProductType::eval_first`] needs to apply one component of a
/// pair to the other.
///
/// Implemented for function pointers and the boxed and reference-counted
/// closure types. Plain closures can be boxed to take part.
pub trait Exponential {
    /// The argument type.
    type Source;
    /// The result type.
    type Target;

    /// Applies the function.
    fn call(self, source: Self::Source) -> Self::Target;
}

impl<A, B> Exponential for fn(A) -> B {
    type Source = A;
    type Target = B;

    #[inline]
    fn call(self, source: A) -> B {
        self(source)
    }
}

impl<'a, A, B> Exponential for Box<dyn FnOnce(A) -> B + 'a> {
    type Source = A;
    type Target = B;

    #[inline]
    fn call(self, source: A) -> B {
        self(source)
    }
}

impl<'a, A, B> Exponential for Box<dyn Fn(A) -> B + 'a> {
    type Source = A;
    type Target = B;

    #[inline]
    fn call(self, source: A) -> B {
        self(source)
    }
}

impl<'a, A, B> Exponential for Rc<dyn Fn(A) -> B + 'a> {
    type Source = A;
    type Target = B;

    #[inline]
    fn call(self, source: A) -> B {
        self(source)
    }
}

// =============================================================================
// ProductType
// =============================================================================

/// Anything that can fold into an ordered pair.
///
/// Implementors supply [`fold`](ProductType::fold); the rest is provided.
///
/// # Examples
///
/// ```rust
/// use funkit::control::{Product, ProductType};
///
/// let reading = Product::new("cpu", 71);
/// assert_eq!(reading.first(), "cpu");
/// assert_eq!(reading.second(), 71);
/// assert_eq!(reading.map_second(|celsius| celsius + 2).into_tuple(), ("cpu", 73));
/// ```
pub trait ProductType: Sized {
    /// Type of the first component.
    type First;
    /// Type of the second component.
    type Second;

    /// Hands both components to `function`.
    fn fold<T, F>(self, function: F) -> T
    where
        F: FnOnce(Self::First, Self::Second) -> T;

    /// The first component.
    #[inline]
    fn first(self) -> Self::First {
        self.fold(|first, _| first)
    }

    /// The second component.
    #[inline]
    fn second(self) -> Self::Second {
        self.fold(|_, second| second)
    }

    /// Both components as a tuple.
    #[inline]
    fn into_tuple(self) -> (Self::First, Self::Second) {
        self.fold(|first, second| (first, second))
    }

    /// The canonical [`Product`] holding the same components.
    #[inline]
    fn to_product(self) -> Product<Self::First, Self::Second> {
        self.fold(Product::new)
    }

    /// Transforms both components.
    #[inline]
    fn bimap<T, U, F, G>(self, on_first: F, on_second: G) -> Product<T, U>
    where
        F: FnOnce(Self::First) -> T,
        G: FnOnce(Self::Second) -> U,
    {
        self.fold(|first, second| Product::new(on_first(first), on_second(second)))
    }

    /// Transforms the first component.
    #[inline]
    fn map_first<T, F>(self, function: F) -> Product<T, Self::Second>
    where
        F: FnOnce(Self::First) -> T,
    {
        self.bimap(function, |second| second)
    }

    /// Transforms the second component.
    #[inline]
    fn map_second<U, G>(self, function: G) -> Product<Self::First, U>
    where
        G: FnOnce(Self::Second) -> U,
    {
        self.bimap(|first| first, function)
    }

    /// Applies the first component, a function, to the second.
    ///
    /// ```rust
    /// use funkit::control::{Product, ProductType};
    ///
    /// let double: fn(i32) -> i32 = |n| n * 2;
    /// assert_eq!(Product::new(double, 21).eval_first(), 42);
    /// ```
    #[inline]
    fn eval_first(self) -> <Self::First as Exponential>::Target
    where
        Self::First: Exponential<Source = Self::Second>,
    {
        self.fold(|function, argument| function.call(argument))
    }

    /// Applies the second component, a function, to the first.
    #[inline]
    fn eval_second(self) -> <Self::Second as Exponential>::Target
    where
        Self::Second: Exponential<Source = Self::First>,
    {
        self.fold(|first, second| second.call(first))
    }

    /// Distributes a sum in the first component over the pair.
    ///
    /// The untouched second component is paired with whichever variant is
    /// present.
    #[inline]
    fn inside_out_first(
        self,
    ) -> Either<
        Product<<Self::First as Coproduct>::Left, Self::Second>,
        Product<<Self::First as Coproduct>::Right, Self::Second>,
    >
    where
        Self::First: Coproduct,
    {
        self.fold(|sum, second| sum.bimap_coproduct_with(second, Product::new, Product::new))
    }

    /// Distributes a sum in the second component over the pair.
    #[inline]
    fn inside_out_second(
        self,
    ) -> Either<
        Product<Self::First, <Self::Second as Coproduct>::Left>,
        Product<Self::First, <Self::Second as Coproduct>::Right>,
    >
    where
        Self::Second: Coproduct,
    {
        self.fold(|first, sum| {
            sum.bimap_coproduct_with(
                first,
                |left, first| Product::new(first, left),
                |right, first| Product::new(first, right),
            )
        })
    }
}

// =============================================================================
// Product
// =============================================================================

/// An immutable ordered pair.
///
/// Equality, ordering and hashing are component-wise. The fields are private:
/// a `Product` is built once and consumed through [`ProductType`].
///
/// # Examples
///
/// ```rust
/// use funkit::control::{Product, ProductType};
/// use funkit::typeclass::{Monoid, Semigroup, Sum};
///
/// let morning = Product::new(Sum(3), String::from("a"));
/// let evening = Product::new(Sum(4), String::from("b"));
/// assert_eq!(morning.combine(evening), Product::new(Sum(7), String::from("ab")));
/// assert_eq!(Product::<Sum<i32>, String>::empty().into_tuple(), (Sum(0), String::new()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A, B> {
    first: A,
    second: B,
}

impl<A, B> Product<A, B> {
    /// Pairs two values.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Borrows both components.
    #[inline]
    pub const fn as_ref(&self) -> Product<&A, &B> {
        Product::new(&self.first, &self.second)
    }

    /// Exchanges the components.
    #[inline]
    pub fn swap(self) -> Product<B, A> {
        Product::new(self.second, self.first)
    }
}

impl<S: Coproduct, C> Product<S, C> {
    /// Inverse of [`ProductType::inside_out_first`].
    ///
    /// Rebuilds the sum with [`Coproduct::from_either`], so the original sum
    /// type is recovered rather than a bare `Either`.
    pub fn outside_in_first(distributed: Either<Product<S::Left, C>, Product<S::Right, C>>) -> Self {
        match distributed {
            Either::Left(pair) => pair.map_first(|left| S::from_either(Either::Left(left))),
            Either::Right(pair) => pair.map_first(|right| S::from_either(Either::Right(right))),
        }
    }
}

impl<C, S: Coproduct> Product<C, S> {
    /// Inverse of [`ProductType::inside_out_second`].
    pub fn outside_in_second(distributed: Either<Product<C, S::Left>, Product<C, S::Right>>) -> Self {
        match distributed {
            Either::Left(pair) => pair.map_second(|left| S::from_either(Either::Left(left))),
            Either::Right(pair) => pair.map_second(|right| S::from_either(Either::Right(right))),
        }
    }
}

impl<A, B> ProductType for Product<A, B> {
    type First = A;
    type Second = B;

    #[inline]
    fn fold<T, F>(self, function: F) -> T
    where
        F: FnOnce(A, B) -> T,
    {
        function(self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Product<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Product<A, B>> for (A, B) {
    fn from(product: Product<A, B>) -> Self {
        product.into_tuple()
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for Product<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Product")
            .field(&self.first)
            .field(&self.second)
            .finish()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Product<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Product({}, {})", self.first, self.second)
    }
}

// =============================================================================
// Algebra lift
// =============================================================================

impl<A: Semigroup, B: Semigroup> Semigroup for Product<A, B> {
    fn combine(self, other: Self) -> Self {
        Self::new(
            self.first.combine(other.first),
            self.second.combine(other.second),
        )
    }
}

impl<A: Monoid, B: Monoid> Monoid for Product<A, B> {
    fn empty() -> Self {
        Self::new(A::empty(), B::empty())
    }
}

impl<A: CommutativeMonoid, B: CommutativeMonoid> CommutativeMonoid for Product<A, B> {}

impl<A: BoundedSemilattice, B: BoundedSemilattice> BoundedSemilattice for Product<A, B> {}

impl<A: Semiring, B: Semiring> Semiring for Product<A, B> {
    fn zero() -> Self {
        Self::new(A::zero(), B::zero())
    }

    fn one() -> Self {
        Self::new(A::one(), B::one())
    }

    fn plus(self, other: Self) -> Self {
        Self::new(self.first.plus(other.first), self.second.plus(other.second))
    }

    fn times(self, other: Self) -> Self {
        Self::new(
            self.first.times(other.first),
            self.second.times(other.second),
        )
    }
}

static_assertions::assert_impl_all!(Product<String, Vec<u8>>: Send, Sync);
static_assertions::assert_impl_all!(Product<u8, char>: Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Max, Sum};
    use rstest::rstest;

    #[rstest]
    #[case(1, "a")]
    #[case(-40, "")]
    fn projections_return_components(#[case] first: i32, #[case] second: &str) {
        let pair = Product::new(first, second);
        assert_eq!(pair.first(), first);
        assert_eq!(pair.second(), second);
        assert_eq!(pair.into_tuple(), (first, second));
    }

    #[rstest]
    fn equality_is_componentwise() {
        assert_eq!(Product::new(1, 'a'), Product::new(1, 'a'));
        assert_ne!(Product::new(1, 'a'), Product::new(2, 'a'));
        assert_ne!(Product::new(1, 'a'), Product::new(1, 'b'));
    }

    #[rstest]
    fn bimap_transforms_both_sides() {
        let pair = Product::new(3, "abc").bimap(|n| n * 2, str::len);
        assert_eq!(pair, Product::new(6, 3));
    }

    #[rstest]
    fn eval_in_both_directions() {
        let measure: Box<dyn Fn(String) -> usize> = Box::new(|text| text.len());
        assert_eq!(Product::new(measure, String::from("hey")).eval_first(), 3);

        let negate: Rc<dyn Fn(i32) -> i32> = Rc::new(|n| -n);
        assert_eq!(Product::new(5, negate).eval_second(), -5);
    }

    #[rstest]
    fn eval_with_a_once_closure() {
        let owned = String::from("moved in");
        let consume: Box<dyn FnOnce(usize) -> String> = Box::new(move |n| owned[..n].to_string());
        assert_eq!(Product::new(consume, 5).eval_first(), "moved");
    }

    #[rstest]
    #[case(Either::Left('x'), Either::Left(Product::new('x', 10)))]
    #[case(Either::Right(true), Either::Right(Product::new(true, 10)))]
    fn inside_out_first_pairs_the_present_variant(
        #[case] sum: Either<char, bool>,
        #[case] expected: Either<Product<char, i32>, Product<bool, i32>>,
    ) {
        assert_eq!(Product::new(sum, 10).inside_out_first(), expected);
    }

    #[rstest]
    fn inside_out_second_over_result() {
        let pair: Product<&str, Result<u8, String>> = Product::new("job", Err("late".into()));
        assert_eq!(
            pair.inside_out_second(),
            Either::Left(Product::new("job", String::from("late")))
        );
    }

    #[derive(Debug, PartialEq)]
    struct Ticket(u32);

    #[rstest]
    fn inside_out_moves_a_non_clone_component() {
        let pending: Product<Result<&str, String>, Ticket> = Product::new(Ok("queued"), Ticket(8));
        assert_eq!(pending.inside_out_first(), Either::Right(Product::new("queued", Ticket(8))));
        let failed: Product<Ticket, Either<char, u8>> = Product::new(Ticket(9), Either::Left('e'));
        assert_eq!(failed.inside_out_second(), Either::Left(Product::new(Ticket(9), 'e')));
    }

    #[rstest]
    fn outside_in_recovers_the_original_sum_type() {
        let original: Product<Result<u8, &str>, char> = Product::new(Ok(7), 'k');
        let restored: Product<Result<u8, &str>, char> =
            Product::outside_in_first(original.inside_out_first());
        assert_eq!(restored, original);
    }

    #[rstest]
    fn combine_is_componentwise() {
        let left = Product::new(Sum(2), Max(4));
        let right = Product::new(Sum(5), Max(1));
        assert_eq!(left.combine(right), Product::new(Sum(7), Max(4)));
    }

    #[rstest]
    fn semiring_is_componentwise() {
        let value = Product::new(3u32, false);
        assert_eq!(value.times(Product::one()), value);
        assert_eq!(value.plus(Product::new(4, true)), Product::new(7, true));
        assert_eq!(value.times(Product::zero()), Product::new(0, false));
    }

    #[rstest]
    fn conversions_and_display() {
        let pair: Product<i32, char> = (1, 'z').into();
        assert_eq!(pair.swap(), Product::new('z', 1));
        assert_eq!(pair.to_string(), "Product(1, z)");
        assert_eq!(format!("{pair:?}"), "Product(1, 'z')");
        let tuple: (i32, char) = pair.into();
        assert_eq!(tuple, (1, 'z'));
    }

    #[rstest]
    fn as_ref_borrows_components() {
        let pair = Product::new(String::from("kept"), vec![1]);
        assert_eq!(pair.as_ref().map_first(String::len).into_tuple(), (4, &vec![1]));
        assert_eq!(pair.first(), "kept");
    }
}
