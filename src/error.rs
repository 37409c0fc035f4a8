//! Error types for the algebra.
//!
//! Only two things can go wrong in this crate: a dynamic pattern match
//! that is missing the handler for the value's case, and an operation
//! receiving an argument outside its domain. Absence of a value is never
//! an error; it is represented as data (`Option::None` or
//! [`Maybe::Nothing`](crate::control::Maybe::Nothing)).

use thiserror::Error;

/// Errors raised by the algebra's fallible operations.
///
/// # Examples
///
/// ```rust
/// use funcore::AlgebraError;
///
/// let error = AlgebraError::IncompleteMatch { type_name: "List", case: "Cons" };
/// assert_eq!(error.to_string(), "incomplete match on List: no handler for case `Cons`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A case table did not supply a handler for the value's actual case.
    #[error("incomplete match on {type_name}: no handler for case `{case}`")]
    IncompleteMatch {
        /// The sum type that was matched.
        type_name: &'static str,
        /// The case the value was built with.
        case: &'static str,
    },

    /// An operation was called with an argument outside its domain.
    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },
}

impl AlgebraError {
    /// Builds an [`AlgebraError::InvalidArgument`].
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}
