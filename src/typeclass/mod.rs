//! Type class traits for deferred computations.
//!
//! - [`Functor`]: mapping over the eventual result
//! - [`Applicative`]: lifting values and combining independent results
//! - [`Monad`]: sequencing computations with dependency
//! - [`Semigroup`]: associative binary operations
//! - [`Monoid`]: semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types to let the traits above talk about `F<A>` and `F<B>` at
//! once.
//!
//! ## Re-applicable closures
//!
//! The traits take `Fn` closures rather than `FnOnce`. An effect built from
//! them may be invoked many times, and each invocation applies every
//! composed function afresh.
//!
//! ## Generic derivations
//!
//! [`derived`] spells map, apply, append and the monoid identity in terms of
//! `pure` and `flat_map` alone, for any instance.
//!
//! # Examples
//!
//! ```rust
//! use native_effect::typeclass::{Monoid, Semigroup, Sum};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod applicative;
pub mod derived;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
