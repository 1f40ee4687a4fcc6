//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Option<_>` as a constructor directly. A
//! `TypeConstructor` instead names the type it is currently applied to
//! (`Inner`) and how to re-apply the same constructor to another type
//! (`WithType<B>`). Every protocol trait in this crate (`Functor`,
//! `Applicative`, `Monad`, `Traversable`) is expressed on top of it.
//!
//! ```rust
//! use funkit::effect::Writer;
//! use funkit::typeclass::TypeConstructor;
//!
//! fn rebind<T: TypeConstructor>() -> std::marker::PhantomData<T::WithType<bool>> {
//!     std::marker::PhantomData
//! }
//!
//! let _: std::marker::PhantomData<Writer<String, bool>> = rebind::<Writer<String, i32>>();
//! ```

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_inner<T: TypeConstructor<Inner = u16>>() {}

    #[test]
    fn inner_is_the_applied_type() {
        assert_inner::<Option<u16>>();
        assert_inner::<Result<u16, String>>();
        assert_inner::<Vec<u16>>();
        assert_inner::<Box<u16>>();
    }

    #[test]
    fn with_type_keeps_the_error_parameter() {
        fn rebind<T: TypeConstructor>(_value: T) -> Vec<T::WithType<char>> {
            Vec::new()
        }
        let rebound: Vec<Result<char, &str>> = rebind(Ok::<u8, &str>(1));
        assert!(rebound.is_empty());
    }
}
