//! The effect-free reference instance.
//!
//! `Identity` performs no effect at all. It is the second instance, beside
//! [`Effect`](crate::effect::Effect), of the type classes in this crate and
//! serves as a reference model: the generic derivations in
//! [`derived`](super::derived) must give the same answers for both.

use super::TypeConstructor;

/// A bare value seen as a computation that has already run.
///
/// Sequencing an `Identity` is plain function application, so its results
/// can be compared directly where an effect's cannot.
///
/// # Examples
///
/// ```rust
/// use native_effect::typeclass::{Identity, Monad};
///
/// let doubled = Identity::new(21).flat_map(|x| Identity::new(x * 2));
/// assert_eq!(doubled.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}
