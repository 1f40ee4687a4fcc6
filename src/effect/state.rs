//! State - a computation threading a value through a sequence of steps.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`: given the current state
//! it produces a result and the next state. Sequencing two computations
//! feeds the state left by the first into the second.
//!
//! # Laws
//!
//! - Get/put: `State::get().flat_map(State::put)` leaves the state unchanged
//! - Put/get: `State::put(s).flat_map(|()| State::get())` yields `s`
//! - Modify composition: `modify(f)` then `modify(g)` equals `modify(|s| g(f(s)))`
//!
//! # Examples
//!
//! ```rust
//! use funkit::effect::State;
//!
//! let tick = || State::<u32, ()>::modify(|count| count + 1);
//! let counted = tick()
//!     .flat_map(move |()| tick())
//!     .flat_map(|()| State::gets(|count: &u32| format!("ticks: {count}")));
//!
//! assert_eq!(counted.run(0), ("ticks: 2".to_string(), 2));
//! ```

use std::fmt;
use std::rc::Rc;

/// A computation from a state `S` to a result `A` and a new state.
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Wraps a transition as a state computation.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(transition),
        }
    }

    /// Runs from `initial`, returning the result and the final state.
    pub fn run(&self, initial: S) -> (A, S) {
        (self.run_function)(initial)
    }

    /// Runs from `initial`, keeping only the result.
    pub fn eval(&self, initial: S) -> A {
        self.run(initial).0
    }

    /// Runs from `initial`, keeping only the final state.
    pub fn exec(&self, initial: S) -> S {
        self.run(initial).1
    }

    /// A computation that returns `value` and leaves the state alone.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let run_function = self.run_function;
        State::new(move |state| {
            let (value, next) = run_function(state);
            (function(value), next)
        })
    }

    /// Feeds the result to a state-producing function, continuing from the
    /// intermediate state.
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let run_function = self.run_function;
        State::new(move |state| {
            let (value, intermediate) = run_function(state);
            function(value).run(intermediate)
        })
    }

    /// Runs `self` then `other`, combining their results.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.run_function;
        let second = other.run_function;
        State::new(move |state| {
            let (a, intermediate) = first(state);
            let (b, last) = second(intermediate);
            (function(a, b), last)
        })
    }

    /// Applies the function produced by `self` to the result of `argument`.
    ///
    /// The function's computation runs first.
    ///
    /// ```rust
    /// use funkit::effect::State;
    ///
    /// let next_id = || State::<u32, u32>::new(|id| (id, id + 1));
    /// let pair = next_id().fmap(|a| move |b| (a, b)).apply(next_id());
    /// assert_eq!(pair.run(7), ((7, 8), 9));
    /// ```
    pub fn apply<B, Output>(self, argument: State<S, B>) -> State<S, Output>
    where
        A: Fn(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// A computation reading the state through `projection`.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }
}

impl<S: Clone + 'static> State<S, S> {
    /// A computation returning the current state.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S: 'static> State<S, ()> {
    /// Replaces the state.
    pub fn put(replacement: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), replacement.clone()))
    }

    /// Updates the state with `modifier`.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, A> fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<State>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn counter() -> State<i32, i32> {
        State::new(|n| (n * 2, n + 1))
    }

    #[rstest]
    fn run_eval_exec() {
        assert_eq!(counter().run(10), (20, 11));
        assert_eq!(counter().eval(10), 20);
        assert_eq!(counter().exec(10), 11);
    }

    #[rstest]
    fn pure_keeps_the_state() {
        let constant: State<i32, &str> = State::pure("same");
        assert_eq!(constant.run(42), ("same", 42));
    }

    #[rstest]
    fn get_put_modify() {
        assert_eq!(State::<i32, i32>::get().run(5), (5, 5));
        assert_eq!(State::put(100).exec(5), 100);
        assert_eq!(State::modify(|n: i32| n * 3).exec(5), 15);
    }

    #[rstest]
    fn flat_map_threads_the_intermediate_state() {
        let chained = counter().flat_map(|doubled| State::new(move |n: i32| (doubled + n, n * 10)));
        assert_eq!(chained.run(3), (10, 40));
    }

    #[rstest]
    #[case(0, ((0, 2), 2))]
    #[case(5, ((10, 12), 7))]
    fn map2_runs_left_then_right(#[case] initial: i32, #[case] expected: ((i32, i32), i32)) {
        let paired = counter().map2(counter(), |a, b| (a, b));
        assert_eq!(paired.run(initial), expected);
    }

    #[rstest]
    fn apply_runs_the_function_computation_first() {
        let label: State<i32, fn(i32) -> String> = State::pure(|n| format!("#{n}"));
        assert_eq!(label.apply(counter()).run(4), ("#8".to_string(), 5));
    }

    #[rstest]
    fn display() {
        assert_eq!(counter().to_string(), "<State>");
    }
}
