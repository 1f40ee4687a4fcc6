//! IO - a deferred, run-once computation.
//!
//! `IO<A>` describes work that produces an `A` without performing it.
//! Nothing happens until [`IO::run_unsafe`] is called, so building and
//! composing `IO` values is pure.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use funkit::effect::IO;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//! let action = IO::new(move || {
//!     counter.set(counter.get() + 1);
//!     21
//! })
//! .fmap(|n| n * 2);
//!
//! assert_eq!(runs.get(), 0);
//! assert_eq!(action.run_unsafe(), 42);
//! assert_eq!(runs.get(), 1);
//! ```

use std::fmt;

/// A deferred computation producing an `A`.
pub struct IO<A> {
    action: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Defers `action` until the `IO` is run.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            action: Box::new(action),
        }
    }

    /// An `IO` that only returns `value`.
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Performs the deferred work.
    pub fn run_unsafe(self) -> A {
        (self.action)()
    }

    /// Transforms the eventual result.
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Sequences an `IO`-producing function after this one.
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Runs `self` then `other`, combining their results.
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }

    /// Applies the function this `IO` produces to the result of `argument`.
    pub fn apply<B, Output>(self, argument: IO<B>) -> IO<Output>
    where
        A: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        self.map2(argument, |function, value| function(value))
    }
}

impl<A> fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<IO>")
    }
}
