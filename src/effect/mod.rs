//! Computational contexts.
//!
//! - [`Writer`]: a value with an accumulated monoidal log
//! - [`Reader`]: a computation over a read-only environment
//! - [`State`]: a computation threading state
//! - [`IO`]: a deferred computation
//!
//! [`WriterTraversal`] connects them: a writer can be traversed into any of
//! the other contexts (and into `Option`, `Result`, `Vec`, `Identity` and,
//! with the `async` feature, boxed futures).

mod io;
mod reader;
mod state;
mod traversal;
mod writer;

pub use io::IO;
pub use reader::Reader;
pub use state::State;
pub use traversal::WriterTraversal;
pub use writer::Writer;
