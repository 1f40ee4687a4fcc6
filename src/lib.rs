//! # funkit
//!
//! Algebraic building blocks for Rust: monoids, products and the `Writer`
//! context, with a small Functor/Applicative/Monad protocol tying them
//! together.
//!
//! ## Overview
//!
//! - **Algebra**: [`Semigroup`](typeclass::Semigroup),
//!   [`Monoid`](typeclass::Monoid), their commutative and idempotent
//!   refinements, [`Semiring`](typeclass::Semiring), and wrappers such as
//!   [`Sum`](typeclass::Sum) and [`Max`](typeclass::Max)
//! - **Protocol**: Functor, Applicative, Monad, Foldable, Traversable and
//!   Bifunctor over a GAT-based type constructor
//! - **Products and sums**: [`Product`](control::Product) with its
//!   fold-derived vocabulary, and [`Either`](control::Either)
//! - **Effects**: [`Writer`](effect::Writer) and its traversal into
//!   `Option`, `Result`, `Vec`, `Reader`, `State`, `IO` and futures
//!
//! ## Feature Flags
//!
//! - `typeclass`: algebra and protocol traits
//! - `control`: `Product` and `Either`
//! - `effect`: `Writer`, `Reader`, `State`, `IO`
//! - `async`: traversal into boxed futures
//! - `derive`: `#[derive(Semigroup, Monoid)]` for structs
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `tracing`: `Writer::trace_log`
//! - `full`: all of the above
//!
//! ## Example
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! let checked = Writer::new(vec!["loaded"], "42")
//!     .traverse(|text| text.parse::<u32>().map_err(|error| error.to_string()))
//!     .map(|writer| writer.tell(vec!["parsed"]).map(|n| n + 1));
//!
//! let (log, value) = checked.unwrap().run();
//! assert_eq!(value, 43);
//! assert_eq!(log, vec!["loaded", "parsed"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use funkit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "derive")]
    pub use funkit_derive::{Monoid, Semigroup};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "derive")]
pub use funkit_derive::{Monoid, Semigroup};
