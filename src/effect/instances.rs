//! Type class and operator instances for [`Effect`].
//!
//! Every instance is plain sequencing: the left operand is invoked first,
//! then the right one, and only then are the results combined.

use std::ops::{Add, Mul, Neg, Sub};

use super::Effect;
use crate::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, TypeConstructor};

impl<A> TypeConstructor for Effect<A> {
    type Inner = A;
    type WithType<B> = Effect<B>;
}

impl<A: 'static> Functor for Effect<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Effect<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Effect::fmap(self, function)
    }
}

impl<A: 'static> Applicative for Effect<A> {
    #[inline]
    fn pure<B>(value: B) -> Effect<B>
    where
        B: Clone + 'static,
    {
        Effect::pure(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Effect<B>, function: F) -> Effect<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Effect::map2(self, other, function)
    }

    fn apply<B, Output>(self, other: Effect<B>) -> Effect<Output>
    where
        A: Fn(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        Effect::new(move || {
            let function = self.run_unsafe();
            function(other.run_unsafe())
        })
    }
}

impl<A: 'static> Monad for Effect<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Effect<B>
    where
        F: Fn(A) -> Effect<B> + 'static,
        B: 'static,
    {
        Effect::flat_map(self, function)
    }
}

/// Appending two effects runs both, left first, and combines their results.
impl<A: Semigroup + 'static> Semigroup for Effect<A> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}

/// The identity effect performs nothing and yields `A::empty()`.
impl<A: Monoid + Clone + 'static> Monoid for Effect<A> {
    fn empty() -> Self {
        Self::pure(A::empty())
    }
}

// =============================================================================
// Arithmetic lifted pointwise
// =============================================================================

impl<A: Add<Output = A> + 'static> Add for Effect<A> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.map2(rhs, |left, right| left + right)
    }
}

impl<A: Sub<Output = A> + 'static> Sub for Effect<A> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.map2(rhs, |left, right| left - right)
    }
}

impl<A: Mul<Output = A> + 'static> Mul for Effect<A> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.map2(rhs, |left, right| left * right)
    }
}

impl<A: Neg<Output = A> + 'static> Neg for Effect<A> {
    type Output = Self;

    fn neg(self) -> Self {
        self.fmap(|value| -value)
    }
}
