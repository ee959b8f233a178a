//! The native effect primitive and its control flow.
//!
//! An [`Effect<A>`] is a deferred computation that performs native
//! operations and yields an `A`, but only when invoked. Building, cloning
//! and passing effects around is pure; only the host entry point
//! [`Effect::run_unsafe`] invokes them.
//!
//! # Sequencing
//!
//! ```rust
//! use native_effect::effect::Effect;
//!
//! let io = Effect::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| Effect::pure(x + 1));
//!
//! assert_eq!(io.run_unsafe(), 21);
//! ```
//!
//! # Control Flow
//!
//! - [`until_e`]: repeat a condition until it yields `true`
//! - [`while_e`]: repeat a body while a condition yields `true`
//! - [`for_e`]: run a step for each index of a half-open range
//! - [`foreach_e`]: run an action for each element of a sequence
//! - [`tail_rec`]: stack-safe monadic recursion
//!
//! Fallible counterparts (`try_*`) stop at the first `Err` value.
//!
//! # Do-Notation with eff! Macro
//!
//! ```rust
//! use native_effect::eff;
//! use native_effect::effect::Effect;
//!
//! let result = eff! {
//!     x <= Effect::pure(5);
//!     y <= Effect::pure(10);
//!     Effect::pure(x * y)
//! };
//! assert_eq!(result.run_unsafe(), 50);
//! ```

mod primitive;

pub use primitive::Effect;

mod instances;

// =============================================================================
// Control Flow
// =============================================================================

mod control;
mod fallible;
mod rec;

pub use control::{for_e, foreach_e, unless, until_e, when, while_e};
pub use fallible::{try_for_e, try_foreach_e, try_until_e, try_while_e};
pub use rec::{Step, tail_rec};

// =============================================================================
// Errors
// =============================================================================

mod error;

pub use error::InvocationError;

// =============================================================================
// Do-Notation Macro
// =============================================================================

mod eff_macro;
