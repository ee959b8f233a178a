//! Native control flow over effects.
//!
//! The loops here are ordinary Rust loops running inside a single
//! [`Effect`]: no matter how many iterations they perform, they build no
//! chain of `flat_map` closures and use constant stack.
//!
//! None of them catches anything. A panic in a condition, body or step
//! unwinds out of the loop at once, so the remaining iterations never run.
//!
//! # Examples
//!
//! ```rust
//! use native_effect::effect::{Effect, for_e};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let loop_effect = for_e(2, 5, move |index| {
//!     let sink = Rc::clone(&sink);
//!     Effect::new(move || sink.borrow_mut().push(index))
//! });
//!
//! loop_effect.run_unsafe();
//! assert_eq!(*seen.borrow(), vec![2, 3, 4]);
//! ```

use super::Effect;

/// Invokes `condition` until it yields `true`.
///
/// Every invocation, including the final one, performs its effects. There
/// is no iteration cap: a condition that never yields `true` loops forever.
pub fn until_e(condition: Effect<bool>) -> Effect<()> {
    Effect::new(move || {
        #[cfg(feature = "tracing")]
        tracing::trace!("until_e started");
        while !condition.run_unsafe() {}
    })
}

/// Invokes `body` as long as `condition` yields `true`.
///
/// The condition is checked before each iteration, so a condition that is
/// `false` at first means zero iterations. The body's result is discarded.
///
/// # Examples
///
/// ```rust
/// use native_effect::effect::{Effect, while_e};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let remaining = Rc::new(Cell::new(3));
/// let check = Rc::clone(&remaining);
/// let step = Rc::clone(&remaining);
///
/// while_e(
///     Effect::new(move || check.get() > 0),
///     Effect::new(move || step.set(step.get() - 1)),
/// )
/// .run_unsafe();
///
/// assert_eq!(remaining.get(), 0);
/// ```
pub fn while_e<A>(condition: Effect<bool>, body: Effect<A>) -> Effect<()>
where
    A: 'static,
{
    Effect::new(move || {
        #[cfg(feature = "tracing")]
        tracing::trace!("while_e started");
        while condition.run_unsafe() {
            body.run_unsafe();
        }
    })
}

/// Invokes `step(i)` for every `i` from `low` (inclusive) to `high` (exclusive).
///
/// Indices are visited in increasing order, and `step(i + 1)` is only built
/// after the effect for `i` has run. `low >= high` means zero iterations.
pub fn for_e<A, F>(low: i32, high: i32, step: F) -> Effect<()>
where
    A: 'static,
    F: Fn(i32) -> Effect<A> + 'static,
{
    Effect::new(move || {
        #[cfg(feature = "tracing")]
        tracing::trace!(low, high, "for_e started");
        for index in low..high {
            step(index).run_unsafe();
        }
    })
}

/// Invokes `action` on every element of `items`, in order.
///
/// `items` is collected when `foreach_e` is called, so later changes to the
/// source do not affect the loop. Elements are visited by position.
///
/// # Examples
///
/// ```rust
/// use native_effect::effect::{Effect, foreach_e};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let output = Rc::new(RefCell::new(String::new()));
/// let sink = Rc::clone(&output);
/// foreach_e(vec!['a', 'b', 'c'], move |character| {
///     let sink = Rc::clone(&sink);
///     let character = *character;
///     Effect::new(move || sink.borrow_mut().push(character))
/// })
/// .run_unsafe();
///
/// assert_eq!(*output.borrow(), "abc");
/// ```
pub fn foreach_e<T, A, F, I>(items: I, action: F) -> Effect<()>
where
    I: IntoIterator<Item = T>,
    T: 'static,
    A: 'static,
    F: Fn(&T) -> Effect<A> + 'static,
{
    let snapshot: Vec<T> = items.into_iter().collect();
    Effect::new(move || {
        #[cfg(feature = "tracing")]
        tracing::trace!(length = snapshot.len(), "foreach_e started");
        for item in &snapshot {
            action(item).run_unsafe();
        }
    })
}

/// Runs `effect` only when `condition` holds.
pub fn when(condition: bool, effect: Effect<()>) -> Effect<()> {
    if condition { effect } else { Effect::unit() }
}

/// Runs `effect` only when `condition` does not hold.
pub fn unless(condition: bool, effect: Effect<()>) -> Effect<()> {
    when(!condition, effect)
}
