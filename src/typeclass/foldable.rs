//! Foldable type class - reducing a structure to a summary value.
//!
//! A [`Writer`](crate::effect::Writer) folds like a one-element container:
//! the payload is visited and the log is ignored. To fold both halves use
//! [`ProductType::fold`](crate::control::ProductType::fold).
//!
//! ```rust
//! use funkit::typeclass::{Foldable, Sum};
//!
//! assert_eq!(vec![1, 2, 3].fold_map(Sum), Sum(6));
//! assert_eq!(None::<i32>.fold_left(10, |total, n| total + n), 10);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;
use super::monoid::Monoid;

/// Structures that can be folded from either end.
///
/// For an associative `function`, `fold_left` and `fold_right` agree.
pub trait Foldable: TypeConstructor {
    /// Folds from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a monoid and combines the results in order.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements left to right.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// First element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Whether any element satisfies `predicate`.
    fn exists<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(false, |seen, element| seen || predicate(&element))
    }

    /// Whether every element satisfies `predicate`.
    fn for_all<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(true, |held, element| held && predicate(&element))
    }
}

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(element) => function(init, element),
            Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(element) => function(element, init),
            Err(_) => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_ok())
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }
}

impl<A> Foldable for Identity<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.0)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, init)
    }

    #[inline]
    fn length(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn fold_directions_differ_for_non_associative_functions() {
        let digits = vec![1, 2, 3];
        assert_eq!(digits.clone().fold_left(0, |acc, n| acc * 10 + n), 123);
        assert_eq!(digits.fold_right(0, |n, acc| acc * 10 + n), 321);
    }

    #[rstest]
    #[case(Ok(4), 1)]
    #[case(Err("missing"), 0)]
    fn result_length(#[case] value: Result<i32, &str>, #[case] expected: usize) {
        assert_eq!(value.length(), expected);
    }

    #[rstest]
    fn fold_map_combines_in_order() {
        let joined: String = vec!['a', 'b', 'c'].fold_map(String::from);
        assert_eq!(joined, "abc");
        assert_eq!(Identity(4).fold_map(Sum), Sum(4));
    }

    #[rstest]
    fn find_returns_the_first_match() {
        assert_eq!(vec![1, 4, 6].find(|n| n % 2 == 0), Some(4));
        assert_eq!(vec![1, 3].find(|n| n % 2 == 0), None);
    }

    #[rstest]
    fn exists_and_for_all() {
        assert!(vec![1, 2].exists(|n| *n == 2));
        assert!(!None::<i32>.exists(|_| true));
        assert!(None::<i32>.for_all(|_| false));
        assert!(!vec![1, 2].for_all(|n| *n < 2));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn to_list_matches_fold(values in proptest::collection::vec(any::<i8>(), 0..10)) {
            let folded = values.clone().fold_left(Vec::new(), |mut acc, n| { acc.push(n); acc });
            prop_assert_eq!(values.to_list(), folded);
        }

        #[test]
        fn sum_is_direction_independent(values in proptest::collection::vec(-100i32..100, 0..10)) {
            prop_assert_eq!(
                values.clone().fold_left(0, |acc, n| acc + n),
                values.fold_right(0, |n, acc| acc + n)
            );
        }
    }
}
