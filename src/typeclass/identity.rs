//! The identity functor.
//!
//! `Identity` adds no structure at all. Traversing into it is the same as
//! mapping, which makes it the reference context for the traversal laws of
//! [`Writer`](crate::effect::Writer).

use super::TypeConstructor;

/// Wraps a value without adding any behaviour.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Identity;
///
/// let wrapped = Identity::new("payload");
/// assert_eq!(wrapped.into_inner(), "payload");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
