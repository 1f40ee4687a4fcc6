//! Reader - a computation that depends on a read-only environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads the
//! same environment through every step, which makes it a natural carrier for
//! configuration.
//!
//! The function sits behind an `Rc`, so a reader is cheap to clone and can
//! be run any number of times. For the same reason `Reader` is not `Send`.
//!
//! # Laws
//!
//! - Ask retrieval: `Reader::ask().run(r) == r`
//! - Local identity: `m.local(|r| r)` behaves as `m`
//! - Local composition: `m.local(g).local(f)` behaves as `m.local(|r| g(f(r)))`
//!
//! # Examples
//!
//! ```rust
//! use funkit::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Endpoint {
//!     host: String,
//!     port: u16,
//! }
//!
//! let address: Reader<Endpoint, String> = Reader::asks(|endpoint: Endpoint| endpoint.host)
//!     .map2(Reader::asks(|endpoint: Endpoint| endpoint.port), |host, port| {
//!         format!("{host}:{port}")
//!     });
//!
//! let endpoint = Endpoint { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address.run(endpoint), "localhost:8080");
//! ```

use std::fmt;
use std::rc::Rc;

/// A computation reading an environment of type `R` to produce an `A`.
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Wraps `function` as a reader.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the reader against `environment`.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// A reader that ignores the environment.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let run_function = self.run_function;
        Reader::new(move |environment| function(run_function(environment)))
    }

    /// Feeds the result to a reader-producing function, running both
    /// against the same environment.
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let run_function = self.run_function;
        Reader::new(move |environment: R| {
            let value = run_function(environment.clone());
            function(value).run(environment)
        })
    }

    /// Runs both readers against the same environment and combines the
    /// results.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let first = self.run_function;
        let second = other.run_function;
        Reader::new(move |environment: R| {
            let a = first(environment.clone());
            function(a, second(environment))
        })
    }

    /// Applies the function produced by this reader to the result of
    /// `argument`.
    pub fn apply<B, Output>(self, argument: Reader<R, B>) -> Reader<R, Output>
    where
        A: Fn(B) -> Output,
        B: 'static,
        Output: 'static,
        R: Clone,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// A reader projecting part of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs this reader against a modified environment.
    #[must_use]
    pub fn local<F>(self, modifier: F) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let run_function = self.run_function;
        Self::new(move |environment| run_function(modifier(environment)))
    }
}

impl<R: 'static> Reader<R, R> {
    /// A reader returning the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> fmt::Display for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<Reader>")
    }
}
