//! Traversing a [`Writer`] into other contexts.
//!
//! [`Writer::traverse`] runs an effectful function on the payload and turns
//! `Writer<L, Ctx<B>>` inside out into `Ctx<Writer<L, B>>`. Every context
//! uses the same applicative recipe:
//!
//! ```text
//! Ctx::pure(reconstruct).apply(Ctx::pure(log)).apply(effect)
//! ```
//!
//! where `reconstruct` is the curried `Writer::new`. The recipe only needs
//! `pure` and `apply` from the context, so adding a context is one
//! [`WriterTraversal`] impl.
//!
//! | context | result |
//! |---|---|
//! | `Option<B>` | `Option<Writer<L, B>>` |
//! | `Result<B, E>` | `Result<Writer<L, B>, E>` |
//! | `Vec<B>` | `Vec<Writer<L, B>>` |
//! | `Identity<B>` | `Identity<Writer<L, B>>` |
//! | `Writer<W, B>` | `Writer<W, Writer<L, B>>` |
//! | `Reader<R, B>` | `Reader<R, Writer<L, B>>` |
//! | `State<S, B>` | `State<S, Writer<L, B>>` |
//! | `IO<B>` | `IO<Writer<L, B>>` |
//! | `LocalBoxFuture<'a, B>` | `LocalBoxFuture<'a, Writer<L, B>>` |
//! | `BoxFuture<'a, B>` | `BoxFuture<'a, Writer<L, B>>` |
//!
//! Contexts that may call the rebuilt function more than once (`Vec`,
//! `Reader`, `State`) need a `Clone` log.
//!
//! # Laws
//!
//! - Identity: `writer.traverse(Ctx::pure)` equals `Ctx::pure(writer)`
//! - Naturality: for a context morphism `t`,
//!   `t(writer.traverse(f)) == writer.traverse(|a| t(f(a)))`
//!
//! # Examples
//!
//! ```rust
//! use funkit::effect::{Reader, Writer};
//!
//! let scaled = Writer::new("scaled;".to_string(), 3)
//!     .traverse(|n| Reader::new(move |factor: i32| n * factor));
//! assert_eq!(scaled.run(10), Writer::new("scaled;".to_string(), 30));
//! ```

use super::io::IO;
use super::reader::Reader;
use super::state::State;
use super::writer::Writer;
use crate::typeclass::{Applicative, ApplicativeVec, Identity, Monoid};

/// A context a [`Writer`] can be traversed into.
///
/// `rebuild` receives the effect returned by the traversing function and
/// the writer's log, and reattaches the log inside the context.
pub trait WriterTraversal<L: Monoid>: Sized {
    /// The context holding the rebuilt writer.
    type Traversed;

    /// Moves `log` inside this context next to the effect's result.
    fn rebuild(self, log: L) -> Self::Traversed;
}

/// The curried `Writer::new`, for contexts that call it at most once.
fn reconstruct<L: Monoid, B>(log: L) -> impl FnOnce(B) -> Writer<L, B> {
    move |value| Writer::new(log, value)
}

/// The curried `Writer::new`, for contexts that may call it repeatedly.
fn reconstruct_shared<L: Monoid + Clone, B>(log: L) -> impl Fn(B) -> Writer<L, B> + Clone {
    move |value| Writer::new(log.clone(), value)
}

impl<L: Monoid, B> WriterTraversal<L> for Option<B> {
    type Traversed = Option<Writer<L, B>>;

    fn rebuild(self, log: L) -> Self::Traversed {
        Self::pure(reconstruct::<L, B>)
            .apply(Self::pure(log))
            .apply(self)
    }
}

impl<L: Monoid, B, E: Clone> WriterTraversal<L> for Result<B, E> {
    type Traversed = Result<Writer<L, B>, E>;

    fn rebuild(self, log: L) -> Self::Traversed {
        Self::pure(reconstruct::<L, B>)
            .apply(Self::pure(log))
            .apply(self)
    }
}

impl<L: Monoid, B> WriterTraversal<L> for Identity<B> {
    type Traversed = Identity<Writer<L, B>>;

    fn rebuild(self, log: L) -> Self::Traversed {
        Self::pure(reconstruct::<L, B>)
            .apply(Self::pure(log))
            .apply(self)
    }
}

impl<L: Monoid + Clone, B: Clone> WriterTraversal<L> for Vec<B> {
    type Traversed = Vec<Writer<L, B>>;

    fn rebuild(self, log: L) -> Self::Traversed {
        <Self as ApplicativeVec>::pure(reconstruct_shared::<L, B>)
            .apply(<Self as ApplicativeVec>::pure(log))
            .apply(self)
    }
}

impl<L: Monoid, W: Monoid, B> WriterTraversal<L> for Writer<W, B> {
    type Traversed = Writer<W, Writer<L, B>>;

    fn rebuild(self, log: L) -> Self::Traversed {
        Writer::<W, _>::pure(reconstruct::<L, B>)
            .apply(Writer::pure(log))
            .apply(self)
    }
}

impl<L, R, B> WriterTraversal<L> for Reader<R, B>
where
    L: Monoid + Clone + 'static,
    R: Clone + 'static,
    B: 'static,
{
    type Traversed = Reader<R, Writer<L, B>>;

    fn rebuild(self, log: L) -> Self::Traversed {
        Reader::<R, _>::pure(reconstruct_shared::<L, B>)
            .apply(Reader::pure(log))
            .apply(self)
    }
}

impl<L, S, B> WriterTraversal<L> for State<S, B>
where
    L: Monoid + Clone + 'static,
    S: 'static,
    B: 'static,
{
    type Traversed = State<S, Writer<L, B>>;

    fn rebuild(self, log: L) -> Self::Traversed {
        State::<S, _>::pure(reconstruct_shared::<L, B>)
            .apply(State::pure(log))
            .apply(self)
    }
}

impl<L, B> WriterTraversal<L> for IO<B>
where
    L: Monoid + 'static,
    B: 'static,
{
    type Traversed = IO<Writer<L, B>>;

    fn rebuild(self, log: L) -> Self::Traversed {
        IO::pure(reconstruct::<L, B>)
            .apply(IO::pure(log))
            .apply(self)
    }
}

#[cfg(feature = "async")]
mod futures_contexts {
    use futures::future::{self, BoxFuture, FutureExt, LocalBoxFuture};
    use std::future::Future;

    use super::{WriterTraversal, reconstruct};
    use crate::effect::Writer;
    use crate::typeclass::Monoid;

    /// `apply` for futures: both sides run concurrently.
    fn apply_future<F, B, Output>(
        functions: impl Future<Output = F>,
        arguments: impl Future<Output = B>,
    ) -> impl Future<Output = Output>
    where
        F: FnOnce(B) -> Output,
    {
        future::join(functions, arguments).map(|(function, argument)| function(argument))
    }

    impl<'a, L, B> WriterTraversal<L> for LocalBoxFuture<'a, B>
    where
        L: Monoid + 'a,
        B: 'a,
    {
        type Traversed = LocalBoxFuture<'a, Writer<L, B>>;

        fn rebuild(self, log: L) -> Self::Traversed {
            let partial = apply_future(
                future::ready(reconstruct::<L, B>),
                future::ready(log),
            );
            apply_future(partial, self).boxed_local()
        }
    }

    impl<'a, L, B> WriterTraversal<L> for BoxFuture<'a, B>
    where
        L: Monoid + Send + 'a,
        B: Send + 'a,
    {
        type Traversed = BoxFuture<'a, Writer<L, B>>;

        fn rebuild(self, log: L) -> Self::Traversed {
            let partial = apply_future(
                future::ready(reconstruct::<L, B>),
                future::ready(log),
            );
            apply_future(partial, self).boxed()
        }
    }
}
