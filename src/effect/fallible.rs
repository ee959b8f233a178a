//! Loops and sequencing for effects that fail with a value.
//!
//! Native operations can report failure as `Result` instead of unwinding.
//! The functions here keep the ordering of their counterparts in
//! [`control`](super::control) and stop at the first `Err`, which becomes
//! the result of the whole loop. An `Err` is never turned into success.

use super::Effect;

impl<A: 'static, E: 'static> Effect<Result<A, E>> {
    /// Sequences a fallible continuation after a fallible effect.
    ///
    /// On `Err` the continuation is neither built nor invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use native_effect::effect::Effect;
    ///
    /// let parsed: Effect<Result<i32, String>> = Effect::pure(Ok(20));
    /// let doubled = parsed.and_then_ok(|value| Effect::pure(Ok(value * 2)));
    /// assert_eq!(doubled.run_unsafe(), Ok(40));
    /// ```
    pub fn and_then_ok<B, F>(self, function: F) -> Effect<Result<B, E>>
    where
        B: 'static,
        F: Fn(A) -> Effect<Result<B, E>> + 'static,
    {
        Effect::new(move || match self.run_unsafe() {
            Ok(value) => function(value).run_unsafe(),
            Err(error) => Err(error),
        })
    }

    /// Maps the success value, leaving errors untouched.
    pub fn map_ok<B, F>(self, function: F) -> Effect<Result<B, E>>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        self.fmap(move |result| result.map(&function))
    }
}

/// [`until_e`](super::until_e) for a condition that may fail.
pub fn try_until_e<E>(condition: Effect<Result<bool, E>>) -> Effect<Result<(), E>>
where
    E: 'static,
{
    Effect::new(move || {
        #[cfg(feature = "tracing")]
        tracing::trace!("try_until_e started");
        while !condition.run_unsafe()? {}
        Ok(())
    })
}

/// [`while_e`](super::while_e) for a condition and a body that may fail.
pub fn try_while_e<A, E>(
    condition: Effect<Result<bool, E>>,
    body: Effect<Result<A, E>>,
) -> Effect<Result<(), E>>
where
    A: 'static,
    E: 'static,
{
    Effect::new(move || {
        #[cfg(feature = "tracing")]
        tracing::trace!("try_while_e started");
        while condition.run_unsafe()? {
            body.run_unsafe()?;
        }
        Ok(())
    })
}

/// [`for_e`](super::for_e) for steps that may fail.
///
/// # Examples
///
/// ```rust
/// use native_effect::effect::{Effect, try_for_e};
///
/// let checked = try_for_e(0, 10, |index| {
///     Effect::pure(if index < 3 { Ok(()) } else { Err(index) })
/// });
/// assert_eq!(checked.run_unsafe(), Err(3));
/// ```
pub fn try_for_e<A, E, F>(low: i32, high: i32, step: F) -> Effect<Result<(), E>>
where
    A: 'static,
    E: 'static,
    F: Fn(i32) -> Effect<Result<A, E>> + 'static,
{
    Effect::new(move || {
        #[cfg(feature = "tracing")]
        tracing::trace!(low, high, "try_for_e started");
        for index in low..high {
            step(index).run_unsafe()?;
        }
        Ok(())
    })
}

/// [`foreach_e`](super::foreach_e) for actions that may fail.
pub fn try_foreach_e<T, A, E, F, I>(items: I, action: F) -> Effect<Result<(), E>>
where
    I: IntoIterator<Item = T>,
    T: 'static,
    A: 'static,
    E: 'static,
    F: Fn(&T) -> Effect<Result<A, E>> + 'static,
{
    let snapshot: Vec<T> = items.into_iter().collect();
    Effect::new(move || {
        #[cfg(feature = "tracing")]
        tracing::trace!(length = snapshot.len(), "try_foreach_e started");
        for item in &snapshot {
            action(item).run_unsafe()?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[rstest]
    fn and_then_ok_skips_continuation_on_error() {
        let called = Rc::new(Cell::new(false));
        let observed = Rc::clone(&called);
        let failing: Effect<Result<i32, &str>> = Effect::pure(Err("nope"));
        let result = failing
            .and_then_ok(move |value| {
                observed.set(true);
                Effect::pure(Ok(value))
            })
            .run_unsafe();
        assert_eq!(result, Err("nope"));
        assert!(!called.get());
    }

    #[rstest]
    fn map_ok_transforms_success_only() {
        let success: Effect<Result<i32, String>> = Effect::pure(Ok(2));
        let failure: Effect<Result<i32, String>> = Effect::pure(Err("bad".to_string()));
        assert_eq!(success.map_ok(|x| x + 1).run_unsafe(), Ok(3));
        assert_eq!(failure.map_ok(|x| x + 1).run_unsafe(), Err("bad".to_string()));
    }

    #[rstest]
    fn try_until_e_stops_on_error() {
        let calls = Rc::new(Cell::new(0));
        let observed = Rc::clone(&calls);
        let condition = Effect::new(move || {
            observed.set(observed.get() + 1);
            if observed.get() < 2 { Ok(false) } else { Err("broken") }
        });
        assert_eq!(try_until_e(condition).run_unsafe(), Err("broken"));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn try_while_e_body_error_stops_before_next_check() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let condition_trace = Rc::clone(&trace);
        let body_trace = Rc::clone(&trace);
        let condition = Effect::new(move || {
            condition_trace.borrow_mut().push("cond");
            Ok::<bool, &str>(true)
        });
        let body = Effect::new(move || {
            body_trace.borrow_mut().push("body");
            Err::<(), &str>("body failed")
        });
        assert_eq!(try_while_e(condition, body).run_unsafe(), Err("body failed"));
        assert_eq!(*trace.borrow(), vec!["cond", "body"]);
    }

    #[rstest]
    fn try_for_e_completes_when_all_succeed() {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let effect = try_for_e(0, 4, move |_| {
            let sink = Rc::clone(&sink);
            Effect::new(move || {
                sink.set(sink.get() + 1);
                Ok::<(), String>(())
            })
        });
        assert_eq!(effect.run_unsafe(), Ok(()));
        assert_eq!(count.get(), 4);
    }

    #[rstest]
    fn try_foreach_e_stops_at_failing_element() {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&visited);
        let effect = try_foreach_e(vec!["a", "b", "c"], move |item: &&str| {
            let sink = Rc::clone(&sink);
            let item = *item;
            Effect::new(move || {
                sink.borrow_mut().push(item);
                if item == "b" { Err(item) } else { Ok(()) }
            })
        });
        assert_eq!(effect.run_unsafe(), Err("b"));
        assert_eq!(*visited.borrow(), vec!["a", "b"]);
    }
}
