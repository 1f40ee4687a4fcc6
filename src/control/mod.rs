//! Products and coproducts.
//!
//! - [`Product`] and the [`ProductType`] capability: the "AND" shape.
//! - [`Either`] and the [`Coproduct`] capability: the "OR" shape.
//! - [`Exponential`]: function-like values a product can evaluate.

mod either;
mod product;

pub use either::{Coproduct, Either};
pub use product::{Exponential, Product, ProductType};
