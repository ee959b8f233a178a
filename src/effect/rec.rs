//! Monadic recursion without stack growth.
//!
//! A recursive effect written with `flat_map` nests one closure per step and
//! grows the stack when invoked. [`tail_rec`] instead runs each step in an
//! ordinary loop: the step reports whether to continue with a new state or
//! to finish with a result.

use super::Effect;

/// The outcome of one step of [`tail_rec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<A, B> {
    /// Continue with a new state.
    Loop(A),
    /// Stop with a final result.
    Done(B),
}

/// Runs `step` from `initial` until it yields [`Step::Done`].
///
/// Each invocation of the returned effect starts again from a clone of
/// `initial`. Steps run strictly one after another.
///
/// # Examples
///
/// ```rust
/// use native_effect::effect::{Effect, Step, tail_rec};
///
/// let sum_to = tail_rec((0_u64, 1_000_000_u64), |(total, remaining)| {
///     Effect::pure(if remaining == 0 {
///         Step::Done(total)
///     } else {
///         Step::Loop((total + remaining, remaining - 1))
///     })
/// });
///
/// assert_eq!(sum_to.run_unsafe(), 500_000_500_000);
/// ```
pub fn tail_rec<A, B, F>(initial: A, step: F) -> Effect<B>
where
    A: Clone + 'static,
    B: 'static,
    F: Fn(A) -> Effect<Step<A, B>> + 'static,
{
    Effect::new(move || {
        let mut state = initial.clone();
        loop {
            match step(state).run_unsafe() {
                Step::Loop(next) => state = next,
                Step::Done(result) => return result,
            }
        }
    })
}
