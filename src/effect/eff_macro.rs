//! eff! macro for do-notation style sequencing of effects.
//!
//! # Syntax
//!
//! - `pattern <= effect;` - Bind: run `effect`, name its result
//! - `let pattern = expression;` - Pure let binding
//! - `effect` - Final expression (already an effect)
//!
//! `<=` stands in for Haskell's `<-`, which is not a valid token sequence in
//! `macro_rules!` patterns.
//!
//! # Expansion
//!
//! ```rust,ignore
//! eff! { x <= first; rest }
//! // becomes
//! first.flat_map(move |x| eff! { rest })
//! ```
//!
//! Each continuation is an `Fn` closure that runs once per invocation, so a
//! captured value used by a later step must be `Copy` or cloned explicitly.

/// A macro for do-notation style sequencing.
///
/// # Examples
///
/// ```rust
/// use native_effect::eff;
/// use native_effect::effect::Effect;
///
/// let program = eff! {
///     x <= Effect::pure(5);
///     y <= Effect::pure(10);
///     let z = x + y;
///     Effect::pure(z * 2)
/// };
/// assert_eq!(program.run_unsafe(), 30);
/// ```
#[macro_export]
macro_rules! eff {
    // Terminal: already an effect
    ($result:expr) => {
        $result
    };

    // Bind with identifier pattern
    ($pattern:ident <= $effect:expr ; $($rest:tt)+) => {
        $effect.flat_map(move |$pattern| {
            $crate::eff!($($rest)+)
        })
    };

    // Bind with tuple pattern
    (($($pattern:tt)*) <= $effect:expr ; $($rest:tt)+) => {
        $effect.flat_map(move |($($pattern)*)| {
            $crate::eff!($($rest)+)
        })
    };

    // Bind, discarding the result
    (_ <= $effect:expr ; $($rest:tt)+) => {
        $effect.flat_map(move |_| {
            $crate::eff!($($rest)+)
        })
    };

    // Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::eff!($($rest)+)
        }
    };

    // Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::eff!($($rest)+)
        }
    };
}
