//! Functor type class - mapping over the eventual result.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! For effectful instances "==" means: invoking both sides performs the
//! same effects in the same order and yields equal values.
//!
//! # Re-applicable functions
//!
//! Unlike a container functor, an [`Effect`](crate::effect::Effect) may be
//! invoked any number of times, and a mapped effect applies its function once
//! per invocation. The function is therefore `Fn`, not `FnOnce`.
//!
//! # Examples
//!
//! ```rust
//! use native_effect::effect::Effect;
//! use native_effect::typeclass::Functor;
//!
//! let length = Effect::pure(String::from("hello")).fmap(|s| s.len());
//! assert_eq!(length.run_unsafe(), 5);
//! assert_eq!(length.run_unsafe(), 5);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their result.
///
/// # Examples
///
/// ```rust
/// use native_effect::typeclass::{Functor, Identity};
///
/// let text = Identity::new(5).fmap(|n| n.to_string());
/// assert_eq!(text, Identity(String::from("5")));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the result with a constant value.
    ///
    /// Equivalent to `fmap(move |_| value.clone())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use native_effect::typeclass::{Functor, Identity};
    ///
    /// assert_eq!(Identity::new(5).replace("replaced"), Identity("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the result, replacing it with `()`.
    ///
    /// Only the structure (for effects: the side effects) survives.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Identity(function(self.0))
    }
}
