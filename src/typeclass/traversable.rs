//! Traversable type class - mapping with effects and collecting the results.
//!
//! Without higher-kinded types there is no single `traverse` generic over
//! every applicative. This trait covers the two ubiquitous standard effects
//! (`Option` and `Result`) for any container. The opposite direction, one
//! container ([`Writer`](crate::effect::Writer)) traversed into an open set
//! of effects, is handled by
//! [`WriterTraversal`](crate::effect::WriterTraversal).
//!
//! # Laws
//!
//! ```text
//! t.traverse_option(Some) == Some(t)                          // identity
//! t.traverse_option(f).map(g) == t.traverse_option(|a| f(a).map(g))
//!     when g only reshapes the container element               // naturality
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::Traversable;
//!
//! let parsed: Result<Vec<u8>, std::num::ParseIntError> =
//!     vec!["1", "2", "3"].traverse_result(str::parse::<u8>);
//! assert_eq!(parsed, Ok(vec![1, 2, 3]));
//!
//! let missing = vec![Some(1), None].sequence_option();
//! assert_eq!(missing, None);
//! ```

use super::foldable::Foldable;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// Containers that can run an `Option`- or `Result`-producing function over
/// their elements, short-circuiting on the first failure.
pub trait Traversable: Foldable {
    /// Applies `function` to every element; `None` if any call returns `None`.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies `function` to every element; the first `Err` wins.
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Turns a container of options inside out.
    fn sequence_option<B>(self) -> Option<Self::WithType<B>>
    where
        Self: Sized + TypeConstructor<Inner = Option<B>>,
    {
        self.traverse_option(|element| element)
    }

    /// Turns a container of results inside out.
    fn sequence_result<B, E>(self) -> Result<Self::WithType<B>, E>
    where
        Self: Sized + TypeConstructor<Inner = Result<B, E>>,
    {
        self.traverse_result(|element| element)
    }

    /// Runs `function` for its failure behaviour only.
    fn for_each_result<E, F>(self, function: F) -> Result<(), E>
    where
        F: FnMut(Self::Inner) -> Result<(), E>,
        Self: Sized,
    {
        self.traverse_result(function).map(|_| ())
    }
}

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        self.map(&mut function).transpose()
    }
}

impl<T, E> Traversable for Result<T, E> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Result<B, E>>
    where
        F: FnMut(T) -> Option<B>,
    {
        match self {
            Ok(element) => function(element).map(Ok),
            Err(error) => Some(Err(error)),
        }
    }

    fn traverse_result<B, E2, F>(self, mut function: F) -> Result<Result<B, E>, E2>
    where
        F: FnMut(T) -> Result<B, E2>,
    {
        match self {
            Ok(element) => function(element).map(Ok),
            Err(error) => Ok(Err(error)),
        }
    }
}

impl<A> Traversable for Vec<A> {
    fn traverse_option<B, F>(self, function: F) -> Option<Vec<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.into_iter().map(function).collect()
    }

    fn traverse_result<B, E, F>(self, function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        self.into_iter().map(function).collect()
    }
}

impl<A> Traversable for Identity<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Identity<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        function(self.0).map(Identity)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Identity<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        function(self.0).map(Identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn positive(n: i32) -> Result<u32, String> {
        u32::try_from(n).map_err(|_| format!("{n} is negative"))
    }

    #[rstest]
    #[case(vec![1, 2], Ok(vec![1, 2]))]
    #[case(vec![1, -2, -3], Err("-2 is negative".to_string()))]
    #[case(vec![], Ok(vec![]))]
    fn vec_traverse_result(#[case] input: Vec<i32>, #[case] expected: Result<Vec<u32>, String>) {
        assert_eq!(input.traverse_result(positive), expected);
    }

    #[rstest]
    fn traverse_stops_calling_after_the_first_failure() {
        let mut calls = 0;
        let result = vec![1, -1, 2].traverse_option(|n| {
            calls += 1;
            (n > 0).then_some(n)
        });
        assert_eq!(result, None);
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn option_of_nothing_traverses_to_success() {
        assert_eq!(None::<i32>.traverse_result(positive), Ok(None));
        assert_eq!(None::<i32>.traverse_option(|n| Some(n + 1)), Some(None));
    }

    #[rstest]
    fn err_passes_through_untouched() {
        let failed: Result<i32, &str> = Err("upstream");
        assert_eq!(failed.traverse_option(|n| Some(n * 2)), Some(Err("upstream")));
    }

    #[rstest]
    fn sequence_variants() {
        assert_eq!(vec![Some(1), Some(2)].sequence_option(), Some(vec![1, 2]));
        assert_eq!(
            Identity(Err::<i32, _>("no")).sequence_result(),
            Err::<Identity<i32>, _>("no")
        );
    }

    #[rstest]
    fn for_each_result_discards_values() {
        assert_eq!(vec![1, 2].for_each_result(|n| positive(n).map(|_| ())), Ok(()));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn vec_identity(values in proptest::collection::vec(any::<i32>(), 0..8)) {
            prop_assert_eq!(values.clone().traverse_option(Some), Some(values));
        }

        #[test]
        fn vec_succeeds_iff_every_element_does(values in proptest::collection::vec(-5i32..5, 0..8)) {
            let all_positive = values.iter().all(|n| *n >= 0);
            let traversed = values.traverse_option(|n| u8::try_from(n).ok());
            prop_assert_eq!(traversed.is_some(), all_positive);
        }
    }
}
