//! Error types reported at the host edge.
//!
//! The combinators and loops of this crate never catch anything: a panic in
//! a sub-effect unwinds through every enclosing `flat_map` and loop. Only
//! [`Effect::run_guarded`](super::Effect::run_guarded), the host-side entry
//! point, turns an unwinding panic into an [`InvocationError`].

use std::any::Any;

/// Represents a failure observed while invoking an effect from the host.
///
/// # Examples
///
/// ```rust
/// use native_effect::effect::{Effect, InvocationError};
///
/// let failing: Effect<i32> = Effect::new(|| panic!("disk on fire"));
/// let error = failing.run_guarded().unwrap_err();
/// assert_eq!(
///     error,
///     InvocationError::Panicked { message: "disk on fire".to_string() }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    /// A native operation inside the effect panicked.
    Panicked {
        /// The panic payload, when it was a string.
        message: String,
    },
}

impl InvocationError {
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self::Panicked { message }
    }

    /// Returns the human-readable failure message.
    pub fn message(&self) -> &str {
        match self {
            Self::Panicked { message } => message,
        }
    }
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Panicked { message } => {
                write!(formatter, "effect invocation panicked: {message}")
            }
        }
    }
}

impl std::error::Error for InvocationError {}
