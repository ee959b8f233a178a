//! Monad type class - sequencing computations that depend on earlier results.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! Effects are opaque, so for [`Effect`](crate::effect::Effect) these are
//! equalities of observable behaviour: same side effects, same order, same
//! final value.
//!
//! # Examples
//!
//! ```rust
//! use native_effect::effect::Effect;
//! use native_effect::typeclass::Monad;
//!
//! let chained = Effect::pure(5).flat_map(|n| Effect::pure(n * 2));
//! assert_eq!(chained.run_unsafe(), 10);
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for types that support sequencing of computations.
///
/// `flat_map` is the `bind` primitive: the continuation receives the first
/// result and returns the next computation to run.
pub trait Monad: Applicative {
    /// Feeds the result into `function` and flattens the computation it returns.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// `self` still runs first, for its effects.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone + 'static,
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> Identity<B> + 'static,
        B: 'static,
    {
        function(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_flat_map_transforms() {
        assert_eq!(Identity::new(5).flat_map(|x| Identity(x + 1)), Identity(6));
    }

    #[rstest]
    fn identity_then_replaces() {
        assert_eq!(Identity::new(5).then(Identity("next")), Identity("next"));
    }

    #[rstest]
    #[case(0)]
    #[case(99)]
    fn identity_left_identity_law(#[case] value: i32) {
        let function = |x: i32| Identity(x.wrapping_mul(3));
        assert_eq!(
            <Identity<()>>::pure(value).flat_map(function),
            function(value)
        );
    }

    #[rstest]
    #[case(0)]
    #[case(-4)]
    fn identity_right_identity_law(#[case] value: i32) {
        assert_eq!(
            Identity::new(value).flat_map(<Identity<()>>::pure),
            Identity::new(value)
        );
    }

    #[rstest]
    fn identity_associativity_law() {
        let first = |x: i32| Identity(x + 1);
        let second = |x: i32| Identity(x * 2);
        assert_eq!(
            Identity::new(10).flat_map(first).flat_map(second),
            Identity::new(10).flat_map(move |x| first(x).flat_map(second))
        );
    }
}
