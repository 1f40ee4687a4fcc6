//! Functor type class - structure-preserving mapping.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa                              // identity
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))        // composition
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::effect::Writer;
//! use funkit::typeclass::Functor;
//!
//! let written: Writer<String, i32> = Writer::new("seen;".to_string(), 20);
//! let doubled = written.fmap(|n| n * 2);
//! assert_eq!(doubled.run(), ("seen;".to_string(), 40));
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// Types whose contents can be transformed without changing their shape.
///
/// Contexts that hold at most one value use `FnOnce`. Contexts that hold
/// many, such as `Vec`, implement [`FunctorMut`] instead.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a borrow of the contained value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the contained value, keeping the structure.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Forgets the contained value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// Functor for contexts that invoke the mapping function more than once.
pub trait FunctorMut: TypeConstructor {
    /// Applies `function` to every contained value.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> B,
    {
        Box::new(function(*self))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Box<B>
    where
        F: FnOnce(&T) -> B,
    {
        Box::new(function(self.as_ref()))
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

impl<T> FunctorMut for Option<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some("3".to_string()))]
    #[case(None, None)]
    fn option_fmap(#[case] input: Option<i32>, #[case] expected: Option<String>) {
        assert_eq!(input.fmap(|n| n.to_string()), expected);
    }

    #[rstest]
    fn result_fmap_ref_clones_the_error() {
        let failed: Result<i32, String> = Err("boom".to_string());
        assert_eq!(failed.fmap_ref(|n| n + 1), Err("boom".to_string()));
        assert!(failed.is_err());
    }

    #[rstest]
    fn replace_and_void_keep_shape() {
        assert_eq!(Some(1).replace('x'), Some('x'));
        assert_eq!(None::<i32>.replace('x'), None);
        assert_eq!(Identity(5).void(), Identity(()));
    }

    #[rstest]
    fn box_fmap() {
        assert_eq!(Box::new(2).fmap(|n| n * 10), Box::new(20));
    }

    #[rstest]
    fn vec_fmap_mut_visits_every_element() {
        let mut visited = 0;
        let lengths = vec!["a", "bb", "ccc"].fmap_mut(|word| {
            visited += 1;
            word.len()
        });
        assert_eq!(lengths, vec![1, 2, 3]);
        assert_eq!(visited, 3);
    }
}
