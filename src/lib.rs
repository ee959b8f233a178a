//! # native-effect
//!
//! The native effect primitive of a purely functional runtime: a value that
//! stands for a deferred, possibly side-effecting computation and runs only
//! when invoked.
//!
//! ## Overview
//!
//! - **Effect**: [`effect::Effect`], built with `new`/`pure` and sequenced
//!   with `flat_map`
//! - **Control Flow**: native loops (`until_e`, `while_e`, `for_e`,
//!   `foreach_e`) and stack-safe recursion (`tail_rec`)
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid, with
//!   map, apply and append derived generically from `pure` and `flat_map`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `effect`: The effect primitive and its control flow
//! - `tracing`: `trace!` events from the loops and `warn!` from
//!   `Effect::run_guarded`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use native_effect::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let counter = Rc::new(Cell::new(0));
//! let observed = Rc::clone(&counter);
//! let body = Effect::new(move || observed.set(observed.get() + 1));
//!
//! let program = for_e(0, 3, move |_| body.clone()).then(Effect::pure("done"));
//!
//! assert_eq!(counter.get(), 0);
//! assert_eq!(program.run_unsafe(), "done");
//! assert_eq!(counter.get(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// ```rust
/// use native_effect::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
