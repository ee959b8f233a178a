//! The native effect value.
//!
//! An [`Effect<A>`] is a reified, directly-invocable unit of deferred
//! computation: when invoked it performs some native operations and yields
//! an `A`. It is not a description to be interpreted; it wraps the
//! computation itself.
//!
//! # Invocation contract
//!
//! - Constructing, cloning, storing or passing an `Effect` never performs
//!   its side effects.
//! - Every invocation performs the side effects again; nothing is memoized.
//! - Invocation borrows the effect, so the same value can be invoked any
//!   number of times.
//!
//! Invocation is exposed only as [`Effect::run_unsafe`] (and its guarded
//! variant) for the program edge. Everywhere else an effect is invoked
//! transitively, by the effect that encloses it.
//!
//! # Examples
//!
//! ```rust
//! use native_effect::effect::Effect;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let counter = Rc::new(Cell::new(0));
//! let observed = Rc::clone(&counter);
//! let increment = Effect::new(move || {
//!     observed.set(observed.get() + 1);
//!     observed.get()
//! });
//!
//! // Building the effect did nothing.
//! assert_eq!(counter.get(), 0);
//!
//! assert_eq!(increment.run_unsafe(), 1);
//! assert_eq!(increment.run_unsafe(), 2);
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use super::error::InvocationError;

/// A deferred, possibly side-effecting computation producing an `A`.
///
/// The computation is shared behind a reference count, so `Clone` is cheap
/// and never runs anything. `Effect` is neither `Send` nor `Sync`: the
/// execution model is single-threaded and sequential.
///
/// # Monad Laws
///
/// Up to observable effect traces and results:
///
/// 1. **Left Identity**: `Effect::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Effect::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct Effect<A> {
    run_effect: Rc<dyn Fn() -> A>,
}

impl<A> Clone for Effect<A> {
    fn clone(&self) -> Self {
        Self {
            run_effect: Rc::clone(&self.run_effect),
        }
    }
}

impl<A> fmt::Debug for Effect<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Effect(<deferred>)")
    }
}

impl<A: 'static> Effect<A> {
    /// Wraps a native operation as an effect.
    ///
    /// The closure runs once per invocation, never at construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use native_effect::effect::Effect;
    ///
    /// let io = Effect::new(|| 10 + 20);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_effect: Rc::new(action),
        }
    }

    /// Wraps a precomputed value.
    ///
    /// Invoking the result performs no side effect and yields a clone of
    /// `value` every time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use native_effect::effect::Effect;
    ///
    /// let answer = Effect::pure(42);
    /// assert_eq!(answer.run_unsafe(), 42);
    /// assert_eq!(answer.run_unsafe(), 42);
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Builds the effect to run at invocation time.
    ///
    /// `thunk` is called on every invocation and the effect it returns is
    /// invoked immediately. Useful for recursive definitions that would
    /// otherwise be constructed eagerly.
    pub fn defer<F>(thunk: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        Self::new(move || thunk().run_unsafe())
    }

    /// Invokes the effect and returns its result.
    ///
    /// This is the host entry point. Calling it from ordinary code breaks
    /// referential transparency, hence the name; effects should be composed
    /// and handed to the program edge instead.
    #[inline]
    pub fn run_unsafe(&self) -> A {
        (self.run_effect)()
    }

    /// Invokes the effect, reporting a panic as an [`InvocationError`].
    ///
    /// Intended for the program edge only. Nothing inside the effect is
    /// recovered: the panic has already aborted the remaining steps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use native_effect::effect::Effect;
    ///
    /// assert_eq!(Effect::pure(1).run_guarded(), Ok(1));
    ///
    /// let failing: Effect<i32> = Effect::new(|| panic!("boom"));
    /// assert_eq!(failing.run_guarded().unwrap_err().message(), "boom");
    /// ```
    pub fn run_guarded(&self) -> Result<A, InvocationError> {
        catch_unwind(AssertUnwindSafe(|| self.run_unsafe())).map_err(|payload| {
            let error = InvocationError::from_panic(&*payload);
            #[cfg(feature = "tracing")]
            tracing::warn!(%error, "effect invocation failed");
            error
        })
    }

    /// Sequences this effect with a continuation.
    ///
    /// On every invocation: invoke `self`, feed its result to `function`,
    /// invoke the effect it returns and yield that result. `function` is
    /// never applied before `self` has been invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use native_effect::effect::Effect;
    ///
    /// let io = Effect::pure(10).flat_map(|x| Effect::pure(x * 2));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Effect<B>
    where
        F: Fn(A) -> Effect<B> + 'static,
        B: 'static,
    {
        Effect::new(move || {
            let value = self.run_unsafe();
            function(value).run_unsafe()
        })
    }

    /// Alias for [`flat_map`](Self::flat_map) under its monadic name.
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Effect<B>
    where
        F: Fn(A) -> Effect<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Effect<B>
    where
        F: Fn(A) -> Effect<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Transforms the result with a pure function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use native_effect::effect::Effect;
    ///
    /// let io = Effect::pure(21).fmap(|x| x * 2);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Effect<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Effect::new(move || function(self.run_unsafe()))
    }

    /// Runs `self` for its effects, then `next`.
    pub fn then<B>(self, next: Effect<B>) -> Effect<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Runs `self` then `other` and combines both results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use native_effect::effect::Effect;
    ///
    /// let io = Effect::pure(10).map2(Effect::pure(20), |a, b| a + b);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: Effect<B>, function: F) -> Effect<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Effect::new(move || {
            let first = self.run_unsafe();
            let second = other.run_unsafe();
            function(first, second)
        })
    }

    /// Runs `self` then `other` and pairs their results.
    pub fn product<B>(self, other: Effect<B>) -> Effect<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Discards the result, keeping only the side effects.
    pub fn void(self) -> Effect<()> {
        self.fmap(|_| ())
    }

    /// Replaces the result with a constant, keeping the side effects.
    pub fn replace<B>(self, value: B) -> Effect<B>
    where
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Repeats this effect without end.
    ///
    /// Only a failure inside the effect (or halting the host) stops it; the
    /// result type is therefore free.
    pub fn forever<B>(self) -> Effect<B>
    where
        B: 'static,
    {
        Effect::new(move || {
            loop {
                self.run_unsafe();
            }
        })
    }
}

impl Effect<()> {
    /// The effect that does nothing and yields `()`.
    pub fn unit() -> Self {
        Self::pure(())
    }
}

static_assertions::assert_impl_all!(Effect<i32>: Clone, fmt::Debug);
static_assertions::assert_not_impl_any!(Effect<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    fn counting(counter: &Rc<Cell<u32>>) -> Effect<u32> {
        let counter = Rc::clone(counter);
        Effect::new(move || {
            counter.set(counter.get() + 1);
            counter.get()
        })
    }

    #[rstest]
    fn construction_does_not_invoke() {
        let counter = Rc::new(Cell::new(0));
        let effect = counting(&counter);
        let copy = effect.clone();
        let _stored = vec![effect, copy];
        assert_eq!(counter.get(), 0);
    }

    #[rstest]
    fn each_invocation_repeats_side_effects() {
        let counter = Rc::new(Cell::new(0));
        let effect = counting(&counter);
        assert_eq!(effect.run_unsafe(), 1);
        assert_eq!(effect.run_unsafe(), 2);
        assert_eq!(effect.clone().run_unsafe(), 3);
    }

    #[rstest]
    #[case(0)]
    #[case(i32::MAX)]
    fn pure_yields_value_every_time(#[case] value: i32) {
        let effect = Effect::pure(value);
        for _ in 0..3 {
            assert_eq!(effect.run_unsafe(), value);
        }
    }

    #[rstest]
    fn flat_map_runs_first_before_continuation() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let first_trace = Rc::clone(&trace);
        let continuation_trace = Rc::clone(&trace);
        let second_trace = Rc::clone(&trace);

        let effect = Effect::new(move || {
            first_trace.borrow_mut().push("first");
            3
        })
        .flat_map(move |value| {
            continuation_trace.borrow_mut().push("continuation");
            let trace = Rc::clone(&second_trace);
            Effect::new(move || {
                trace.borrow_mut().push("second");
                value * 2
            })
        });

        assert!(trace.borrow().is_empty());
        assert_eq!(effect.run_unsafe(), 6);
        assert_eq!(*trace.borrow(), vec!["first", "continuation", "second"]);

        assert_eq!(effect.run_unsafe(), 6);
        assert_eq!(trace.borrow().len(), 6);
    }

    #[rstest]
    fn then_keeps_both_effects() {
        let counter = Rc::new(Cell::new(0));
        let effect = counting(&counter).then(counting(&counter));
        assert_eq!(effect.run_unsafe(), 2);
    }

    #[rstest]
    fn map2_runs_left_then_right() {
        let trace = Rc::new(RefCell::new(String::new()));
        let left_trace = Rc::clone(&trace);
        let right_trace = Rc::clone(&trace);
        let left = Effect::new(move || left_trace.borrow_mut().push('L'));
        let right = Effect::new(move || right_trace.borrow_mut().push('R'));

        left.product(right).run_unsafe();
        assert_eq!(*trace.borrow(), "LR");
    }

    #[rstest]
    fn defer_builds_effect_per_invocation() {
        let built = Rc::new(Cell::new(0));
        let observed = Rc::clone(&built);
        let effect = Effect::defer(move || {
            observed.set(observed.get() + 1);
            Effect::pure(observed.get())
        });
        assert_eq!(built.get(), 0);
        assert_eq!(effect.run_unsafe(), 1);
        assert_eq!(effect.run_unsafe(), 2);
    }

    #[rstest]
    fn void_and_replace_keep_side_effects() {
        let counter = Rc::new(Cell::new(0));
        counting(&counter).void().run_unsafe();
        assert_eq!(counting(&counter).replace("done").run_unsafe(), "done");
        assert_eq!(counter.get(), 2);
    }

    #[rstest]
    fn forever_stops_only_on_failure() {
        let counter = Rc::new(Cell::new(0));
        let observed = Rc::clone(&counter);
        let effect: Effect<()> = Effect::new(move || {
            observed.set(observed.get() + 1);
            assert!(observed.get() < 3, "third iteration");
        })
        .forever();

        let error = effect.run_guarded().unwrap_err();
        assert_eq!(error.message(), "third iteration");
        assert_eq!(counter.get(), 3);
    }

    #[rstest]
    fn panic_in_first_step_skips_continuation() {
        let continued = Rc::new(Cell::new(false));
        let observed = Rc::clone(&continued);
        let effect = Effect::<i32>::new(|| panic!("first failed")).flat_map(move |value| {
            observed.set(true);
            Effect::pure(value)
        });

        assert!(effect.run_guarded().is_err());
        assert!(!continued.get());
    }

    #[rstest]
    fn debug_does_not_invoke() {
        let counter = Rc::new(Cell::new(0));
        let rendered = format!("{:?}", counting(&counter));
        assert_eq!(rendered, "Effect(<deferred>)");
        assert_eq!(counter.get(), 0);
    }

    #[rstest]
    fn unit_yields_unit() {
        let () = Effect::unit().run_unsafe();
        assert_eq!(Effect::unit().fmap(|()| 5).run_unsafe(), 5);
    }
}
