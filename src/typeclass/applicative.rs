//! Applicative type class - lifting values and combining independent results.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value,
//! and with ways of combining two computations whose results do not depend on
//! each other. For effects the left operand is always invoked before the
//! right one.
//!
//! # Laws
//!
//! ```text
//! Self::pure(|x| x).apply(v) == v                               // identity
//! Self::pure(f).apply(Self::pure(x)) == Self::pure(f(x))        // homomorphism
//! ```
//!
//! # Examples
//!
//! ```rust
//! use native_effect::effect::Effect;
//! use native_effect::typeclass::Applicative;
//!
//! let sum = Effect::pure(1).map2(Effect::pure(2), |a, b| a + b);
//! assert_eq!(sum.run_unsafe(), 3);
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for functors that can lift values and combine results.
///
/// `pure` values are handed out on every invocation of the enclosing
/// computation, hence the `Clone` bound.
pub trait Applicative: Functor {
    /// Lifts a value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use native_effect::typeclass::{Applicative, Identity};
    ///
    /// let lifted: Identity<i32> = <Identity<()>>::pure(42);
    /// assert_eq!(lifted, Identity(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + 'static;

    /// Combines the results of two computations with a binary function.
    ///
    /// `self` runs first, then `other`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: Fn(Self::Inner, B) -> C + 'static,
        B: 'static,
        C: 'static;

    /// Applies a wrapped function to a wrapped argument.
    ///
    /// The function is obtained first, then the argument.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: Fn(B) -> Output,
        B: 'static,
        Output: 'static;

    /// Pairs the results of two computations.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Runs both computations and keeps the first result.
    #[inline]
    fn apply_first<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
    {
        self.map2(other, |a, _| a)
    }

    /// Runs both computations and keeps the second result.
    #[inline]
    fn apply_second<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.map2(other, |_, b| b)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B>
    where
        B: Clone + 'static,
    {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: Fn(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        Identity((self.0)(other.0))
    }
}
