//! Bifunctor type class - mapping over both type parameters.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! bf.bimap(f, g) == bf.first(f).second(g)
//! ```
//!
//! `Result<T, E>` is a `Bifunctor<E, T>`: `first` maps the error and
//! `second` the success value, so `second` agrees with `Functor::fmap`.
//!
//! The pair type [`Product`](crate::control::Product) gets the same
//! operations from [`ProductType`](crate::control::ProductType) instead, where
//! `first()` and `second()` are projections.

#[cfg(feature = "control")]
use crate::control::Either;

/// Types with two independently mappable parameters.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Bifunctor;
///
/// let parsed: Result<u8, String> = Err("bad digit".to_string());
/// assert_eq!(parsed.first(|message| message.len()), Err(9));
/// assert_eq!((1, "one").bimap(|n| n + 1, str::len), (2, 3));
/// ```
pub trait Bifunctor<A, B> {
    /// The same shape with both parameters replaced.
    type Target<C, D>;

    /// Maps both parameters.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps the second parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Maps both parameters by reference.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

#[cfg(feature = "control")]
impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        match self {
            Self::Left(left) => Either::Left(first_function(left)),
            Self::Right(right) => Either::Right(second_function(right)),
        }
    }
}

impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        self.map(second_function).map_err(first_function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        self.as_ref().map(second_function).map_err(first_function)
    }
}

impl<A, B> Bifunctor<A, B> for (A, B) {
    type Target<C, D> = (C, D);

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D,
    {
        (first_function(&self.0), second_function(&self.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ok(3), Ok(6))]
    #[case(Err("abc"), Err(3))]
    fn result_bimap(#[case] input: Result<i32, &str>, #[case] expected: Result<i32, usize>) {
        assert_eq!(input.bimap(str::len, |n| n * 2), expected);
    }

    #[rstest]
    fn result_bimap_ref_borrows() {
        let input: Result<String, String> = Ok("kept".to_string());
        assert_eq!(input.bimap_ref(String::len, String::len), Ok(4));
        assert!(input.is_ok());
    }

    #[rstest]
    fn tuple_first_and_second() {
        assert_eq!((2, 'x').first(|n| n * 5), (10, 'x'));
        assert_eq!((2, 'x').second(|c| c.is_alphabetic()), (2, true));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn either_routes_to_the_present_side() {
        let left: Either<i32, &str> = Either::Left(4);
        let right: Either<i32, &str> = Either::Right("four");
        assert_eq!(Bifunctor::bimap(left, |n| n + 1, str::len), Either::Left(5));
        assert_eq!(Bifunctor::bimap(right, |n| n + 1, str::len), Either::Right(4));
    }
}
