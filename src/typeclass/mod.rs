//! Algebraic type classes.
//!
//! Two families live here:
//!
//! - the **algebra**: [`Semigroup`], [`Monoid`], the law markers
//!   [`CommutativeMonoid`] and [`BoundedSemilattice`], and [`Semiring`],
//!   together with the wrappers ([`Sum`], [`Max`], [`Min`], [`First`],
//!   [`Last`], [`Any`], [`All`]) that pick a monoid for a carrier type;
//! - the **protocol**: [`Functor`], [`Applicative`], [`Monad`],
//!   [`Foldable`], [`Traversable`] and [`Bifunctor`], built on the
//!   GAT-based [`TypeConstructor`].
//!
//! ```rust
//! use funkit::typeclass::{Monoid, Semigroup, Max, Sum};
//!
//! let (total, peak) = vec![(Sum(3), Max(3)), (Sum(9), Max(9)), (Sum(1), Max(1))]
//!     .into_iter()
//!     .fold(<(Sum<i32>, Max<i32>)>::empty(), Semigroup::combine);
//! assert_eq!((total, peak), (Sum(13), Max(9)));
//! ```

mod algebra;
mod applicative;
mod bifunctor;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use algebra::{BoundedSemilattice, CommutativeMonoid, Semiring};
pub use applicative::{Applicative, ApplicativeVec};
pub use bifunctor::Bifunctor;
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::{Monad, MonadVec};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{All, Any, Bounded, First, Last, Max, Min, Sum};
