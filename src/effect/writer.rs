//! Writer - a value paired with an accumulated log.
//!
//! A `Writer<L, A>` holds a payload of type `A` together with a log of type
//! `L`. The log must be a [`Monoid`]: sequencing two writers combines their
//! logs with [`Semigroup::combine`], and [`Writer::pure`] starts from
//! [`Monoid::empty`].
//!
//! A writer is a product whose first component is the log, so it also
//! implements [`ProductType`] and folds into both halves.
//!
//! # Laws
//!
//! ## Functor
//!
//! - Identity: `writer.map(|x| x) == writer`
//! - Composition: `writer.map(f).map(g) == writer.map(|x| g(f(x)))`
//!
//! ## Monad
//!
//! - Left Identity: `Writer::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Writer::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## Log ordering
//!
//! - `tell` appends: `Writer::new(l, a).tell(t)` logs `l <> t`
//! - `remember` prepends: `Writer::new(l, a).remember(r)` logs `r <> l`
//!
//! # Examples
//!
//! ```rust
//! use funkit::effect::Writer;
//!
//! fn step(message: &str) -> Writer<Vec<String>, ()> {
//!     Writer::tell_only(vec![message.to_string()])
//! }
//!
//! let computation = step("parse")
//!     .flat_map(|()| step("validate"))
//!     .flat_map(|()| Writer::new(vec!["done".to_string()], 42));
//!
//! let (log, value) = computation.run();
//! assert_eq!(value, 42);
//! assert_eq!(log, vec!["parse", "validate", "done"]);
//! ```
//!
//! The log type must be a monoid:
//!
//! ```compile_fail
//! use funkit::effect::Writer;
//!
//! struct Opaque;
//! let writer = Writer::new(Opaque, 1);
//! ```
//!
//! and only writers nested over the same log can be joined:
//!
//! ```compile_fail
//! use funkit::effect::Writer;
//! use funkit::typeclass::Sum;
//!
//! let nested = Writer::new(String::new(), Writer::new(Sum(1), 'x'));
//! let flat = nested.joined();
//! ```

use std::fmt;

use super::traversal::WriterTraversal;
use crate::control::{Product, ProductType};
use crate::typeclass::{
    Applicative, Foldable, Functor, Monad, Monoid, Semigroup, Traversable, TypeConstructor,
};

/// A payload of type `A` paired with a log of type `L`.
///
/// # Examples
///
/// ```rust
/// use funkit::effect::Writer;
/// use funkit::typeclass::Sum;
///
/// let cost = Writer::new(Sum(2), "a".to_string())
///     .tell(Sum(3))
///     .map(|text| text + "!");
/// assert_eq!(cost.run(), (Sum(5), "a!".to_string()));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Writer<L: Monoid, A> {
    log: L,
    value: A,
}

impl<L: Monoid, A> Writer<L, A> {
    /// Creates a writer from a log and a payload.
    #[inline]
    pub const fn new(log: L, value: A) -> Self {
        Self { log, value }
    }

    /// Lifts a payload with an empty log.
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::new(L::empty(), value)
    }

    /// Splits the writer into its log and payload.
    #[inline]
    pub fn run(self) -> (L, A) {
        (self.log, self.value)
    }

    /// Borrows the log.
    #[inline]
    pub const fn log(&self) -> &L {
        &self.log
    }

    /// Borrows the payload.
    #[inline]
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Transforms the payload, leaving the log untouched.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Writer<L, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new(self.log, function(self.value))
    }

    /// Transforms the log, possibly into another monoid.
    #[inline]
    pub fn map_log<M, F>(self, function: F) -> Writer<M, A>
    where
        M: Monoid,
        F: FnOnce(L) -> M,
    {
        Writer::new(function(self.log), self.value)
    }

    /// Appends `entry` after the current log.
    #[inline]
    #[must_use]
    pub fn tell(self, entry: L) -> Self {
        Self::new(self.log.combine(entry), self.value)
    }

    /// Appends an entry computed from the payload.
    ///
    /// ```rust
    /// use funkit::effect::Writer;
    ///
    /// let traced = Writer::new(vec![1], 7).read(|value| vec![*value * 10]);
    /// assert_eq!(traced.run(), (vec![1, 70], 7));
    /// ```
    #[inline]
    #[must_use]
    pub fn read<F>(self, function: F) -> Self
    where
        F: FnOnce(&A) -> L,
    {
        let entry = function(&self.value);
        self.tell(entry)
    }

    /// Prepends `entry` before the current log.
    #[inline]
    #[must_use]
    pub fn remember(self, entry: L) -> Self {
        Self::new(entry.combine(self.log), self.value)
    }

    /// Turns the payload into the new log and the old log into the payload.
    #[inline]
    pub fn swap<T, F>(self, function: F) -> Writer<T, L>
    where
        T: Monoid,
        F: FnOnce(A) -> T,
    {
        Writer::new(function(self.value), self.log)
    }

    /// Replaces the log with one computed from the log and the payload,
    /// possibly in another monoid.
    ///
    /// ```rust
    /// use funkit::effect::Writer;
    /// use funkit::typeclass::Sum;
    ///
    /// let weighed = Writer::new("ab".to_string(), 3).log_value(|log, value| Sum(log.len() + *value));
    /// assert_eq!(weighed.run(), (Sum(5), 3));
    /// ```
    #[inline]
    pub fn log_value<M, F>(self, function: F) -> Writer<M, A>
    where
        M: Monoid,
        F: FnOnce(L, &A) -> M,
    {
        let Self { log, value } = self;
        let log = function(log, &value);
        Writer::new(log, value)
    }

    /// Hands the log to `effect` and returns the payload.
    ///
    /// This is the one place where a writer meets the outside world: the
    /// effect runs exactly once, at this call.
    ///
    /// ```rust
    /// use funkit::effect::Writer;
    ///
    /// let mut sink = Vec::new();
    /// let value = Writer::new(vec!["saved"], 3).consume_log(|log| sink.extend(log));
    /// assert_eq!((value, sink), (3, vec!["saved"]));
    /// ```
    #[inline]
    pub fn consume_log<F>(self, effect: F) -> A
    where
        F: FnOnce(L),
    {
        effect(self.log);
        self.value
    }

    /// Exposes a copy of the log alongside the payload.
    #[inline]
    pub fn listen(self) -> Writer<L, (L, A)>
    where
        L: Clone,
    {
        let copy = self.log.clone();
        Writer::new(self.log, (copy, self.value))
    }

    /// Rewrites the log within the same monoid.
    #[inline]
    #[must_use]
    pub fn censor<F>(self, function: F) -> Self
    where
        F: FnOnce(L) -> L,
    {
        self.map_log(function)
    }

    /// Drops the log and returns the payload.
    #[inline]
    pub fn discard_log(self) -> A {
        self.value
    }

    /// Pairs two writers, keeping their logs side by side in a [`Product`].
    ///
    /// ```rust
    /// use funkit::control::Product;
    /// use funkit::effect::Writer;
    ///
    /// let zipped = Writer::new("x".to_string(), 1).zip(Writer::new(vec![true], 'b'));
    /// assert_eq!(zipped.run(), (Product::new("x".to_string(), vec![true]), (1, 'b')));
    /// ```
    #[inline]
    pub fn zip<M, B>(self, other: Writer<M, B>) -> Writer<Product<L, M>, (A, B)>
    where
        M: Monoid,
    {
        Writer::new(
            Product::new(self.log, other.log),
            (self.value, other.value),
        )
    }

    /// Pairs two writers over the same log, combining the logs in order.
    #[inline]
    pub fn zip_merge<B>(self, other: Writer<L, B>) -> Writer<L, (A, B)> {
        self.map2(other, |first, second| (first, second))
    }

    /// Applies the function held by this writer to the payload of `argument`.
    ///
    /// The log of the function comes first.
    #[inline]
    pub fn apply<B, Output>(self, argument: Writer<L, B>) -> Writer<L, Output>
    where
        A: FnOnce(B) -> Output,
    {
        Writer::new(self.log.combine(argument.log), (self.value)(argument.value))
    }

    /// Combines two payloads with `function`, combining the logs in order.
    #[inline]
    pub fn map2<B, C, F>(self, other: Writer<L, B>, function: F) -> Writer<L, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Writer::new(
            self.log.combine(other.log),
            function(self.value, other.value),
        )
    }

    /// Lifts a unary function to work on writers.
    ///
    /// ```rust
    /// use funkit::effect::Writer;
    ///
    /// let shout = Writer::lift(|text: &str| text.to_uppercase());
    /// assert_eq!(shout(Writer::new(vec![1], "hi")).run(), (vec![1], "HI".to_string()));
    /// ```
    pub fn lift<B, F>(function: F) -> impl Fn(Self) -> Writer<L, B>
    where
        F: Fn(A) -> B,
    {
        move |writer| writer.map(&function)
    }

    /// Lifts a binary function to work on writers.
    ///
    /// ```rust
    /// use funkit::effect::Writer;
    ///
    /// let add = Writer::lift2(|a: i32, b: i32| a + b);
    /// let sum = add(Writer::new("1".to_string(), 1), Writer::new("2".to_string(), 2));
    /// assert_eq!(sum.run(), ("12".to_string(), 3));
    /// ```
    pub fn lift2<B, C, F>(function: F) -> impl Fn(Self, Writer<L, B>) -> Writer<L, C>
    where
        F: Fn(A, B) -> C,
    {
        move |first, second| first.map2(second, &function)
    }

    /// Lifts a ternary function to work on writers.
    pub fn lift3<B, C, D, F>(
        function: F,
    ) -> impl Fn(Self, Writer<L, B>, Writer<L, C>) -> Writer<L, D>
    where
        F: Fn(A, B, C) -> D,
    {
        move |first, second, third| {
            first
                .zip_merge(second)
                .map2(third, |(a, b), c| function(a, b, c))
        }
    }

    /// Chains a writer-producing function, appending its log.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Writer<L, B>
    where
        F: FnOnce(A) -> Writer<L, B>,
    {
        self.map(function).joined()
    }

    /// Runs an effectful `function` on the payload and moves the writer
    /// inside the resulting context.
    ///
    /// The context decides how the log is reattached; see
    /// [`WriterTraversal`] for the supported contexts.
    ///
    /// ```rust
    /// use funkit::effect::Writer;
    ///
    /// let parsed = Writer::new("read;".to_string(), "17").traverse(|text| text.parse::<u8>().ok());
    /// assert_eq!(parsed, Some(Writer::new("read;".to_string(), 17)));
    ///
    /// let expanded = Writer::new(vec![0], 2).traverse(|n| vec![n, n * 10]);
    /// assert_eq!(expanded, vec![Writer::new(vec![0], 2), Writer::new(vec![0], 20)]);
    /// ```
    #[inline]
    pub fn traverse<C, F>(self, function: F) -> C::Traversed
    where
        C: WriterTraversal<L>,
        F: FnOnce(A) -> C,
    {
        function(self.value).rebuild(self.log)
    }
}

impl<L: Monoid> Writer<L, ()> {
    /// A writer that only records `log`.
    #[inline]
    pub const fn tell_only(log: L) -> Self {
        Self::new(log, ())
    }
}

impl<L: Monoid, A> Writer<L, Writer<L, A>> {
    /// Flattens a nested writer; the outer log comes first.
    #[inline]
    pub fn joined(self) -> Writer<L, A> {
        let (inner_log, value) = self.value.run();
        Writer::new(self.log.combine(inner_log), value)
    }
}

impl<L: Monoid, A: Monoid> Writer<L, A> {
    /// Exchanges log and payload.
    #[inline]
    pub fn swapped(self) -> Writer<A, L> {
        self.swap(|value| value)
    }
}

#[cfg(feature = "tracing")]
impl<L: Monoid + fmt::Debug, A> Writer<L, A> {
    /// Emits the log as a `debug` event and returns the payload.
    pub fn trace_log(self) -> A {
        self.consume_log(|log| tracing::debug!(log = ?log, "writer log"))
    }

    /// Like [`trace_log`](Self::trace_log), tagging the event with `label`.
    pub fn trace_log_at(self, label: &str) -> A {
        self.consume_log(|log| tracing::debug!(label = label, log = ?log, "writer log"))
    }
}

// =============================================================================
// Standard traits
// =============================================================================

impl<L: Monoid, A: Default> Default for Writer<L, A> {
    fn default() -> Self {
        Self::new(L::empty(), A::default())
    }
}

impl<L: Monoid + fmt::Debug, A: fmt::Debug> fmt::Debug for Writer<L, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Writer")
            .field("log", &self.log)
            .field("value", &self.value)
            .finish()
    }
}

impl<L: Monoid + fmt::Display, A: fmt::Display> fmt::Display for Writer<L, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Writer({}, {})", self.log, self.value)
    }
}

impl<L: Monoid, A> From<Product<L, A>> for Writer<L, A> {
    fn from(product: Product<L, A>) -> Self {
        product.fold(Self::new)
    }
}

impl<L: Monoid, A> ProductType for Writer<L, A> {
    type First = L;
    type Second = A;

    #[inline]
    fn fold<T, F>(self, function: F) -> T
    where
        F: FnOnce(L, A) -> T,
    {
        function(self.log, self.value)
    }
}

impl<L: Monoid, A: Semigroup> Semigroup for Writer<L, A> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}

impl<L: Monoid, A: Monoid> Monoid for Writer<L, A> {
    fn empty() -> Self {
        Self::new(L::empty(), A::empty())
    }
}

// =============================================================================
// Type classes
// =============================================================================

impl<L: Monoid, A> TypeConstructor for Writer<L, A> {
    type Inner = A;
    type WithType<B> = Writer<L, B>;
}

// `fmap_ref` needs an owned log, hence `Clone` on the protocol instances.
impl<L: Monoid + Clone, A> Functor for Writer<L, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Writer<L, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Writer<L, B>
    where
        F: FnOnce(&A) -> B,
    {
        Writer::new(self.log.clone(), function(&self.value))
    }
}

impl<L: Monoid + Clone, A> Applicative for Writer<L, A> {
    #[inline]
    fn pure<B>(value: B) -> Writer<L, B> {
        Writer::pure(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Writer<L, B>, function: F) -> Writer<L, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Writer<L, B>,
        third: Writer<L, C>,
        function: F,
    ) -> Writer<L, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.zip_merge(second)
            .map2(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Writer<L, B>) -> Writer<L, Output>
    where
        A: FnOnce(B) -> Output,
    {
        Self::apply(self, other)
    }
}

impl<L: Monoid + Clone, A> Monad for Writer<L, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Writer<L, B>
    where
        F: FnOnce(A) -> Writer<L, B>,
    {
        Self::flat_map(self, function)
    }
}

impl<L: Monoid, A> Foldable for Writer<L, A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.value)
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.value, init)
    }

    #[inline]
    fn length(&self) -> usize {
        1
    }
}

impl<L: Monoid, A> Traversable for Writer<L, A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Writer<L, B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        let log = self.log;
        function(self.value).map(|value| Writer::new(log, value))
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Writer<L, B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        let log = self.log;
        function(self.value).map(|value| Writer::new(log, value))
    }
}

static_assertions::assert_impl_all!(Writer<String, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Writer<String, std::rc::Rc<i32>>: Send, Sync);


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn trace_log_emits_the_log_and_returns_the_payload() {
        let value = Writer::new(vec!["connected"], 8).trace_log();
        assert_eq!(value, 8);
        assert!(logs_contain("connected"));
    }

    #[traced_test]
    #[test]
    fn trace_log_at_adds_the_label() {
        let value = Writer::new("stage one".to_string(), 5).trace_log_at("loader");
        assert_eq!(value, 5);
        assert!(logs_contain("loader"));
    }
}
