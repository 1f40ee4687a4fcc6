//! Derive macros for funkit's algebra.
//!
//! # Available Derive Macros
//!
//! - [`Semigroup`]: combines two values field by field
//! - [`Monoid`]: builds the empty value from every field's empty value
//!
//! Both generalise the component-wise algebra of `funkit::control::Product`
//! to structs with any number of fields.
//!
//! # Example
//!
//! ```rust,ignore
//! use funkit::typeclass::{Max, Monoid, Semigroup, Sum};
//! use funkit::{Monoid, Semigroup};
//!
//! #[derive(Debug, PartialEq, Semigroup, Monoid)]
//! struct Stats {
//!     requests: Sum<u64>,
//!     peak_latency: Max<u32>,
//! }
//!
//! let total = Stats::combine_all([
//!     Stats { requests: Sum(3), peak_latency: Max(40) },
//!     Stats { requests: Sum(5), peak_latency: Max(25) },
//! ]);
//! assert_eq!(total, Stats { requests: Sum(8), peak_latency: Max(40) });
//! ```
//!
//! Enums and unions are rejected: there is no canonical way to combine two
//! different variants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod algebra;

use proc_macro::TokenStream;

/// Derives `funkit::typeclass::Semigroup` by combining every field.
///
/// Each field type must itself be a `Semigroup`.
#[proc_macro_derive(Semigroup)]
pub fn derive_semigroup(input: TokenStream) -> TokenStream {
    algebra::derive_semigroup_impl(input)
}

/// Derives `funkit::typeclass::Monoid` with every field set to its empty
/// value.
///
/// Each field type must itself be a `Monoid`, and the struct must also
/// implement `Semigroup` (usually through `#[derive(Semigroup)]`).
#[proc_macro_derive(Monoid)]
pub fn derive_monoid(input: TokenStream) -> TokenStream {
    algebra::derive_monoid_impl(input)
}
