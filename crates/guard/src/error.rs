//! Error type for failed guards

use std::borrow::Cow;

/// Result of a guard: the checked value, or why it was rejected.
pub type GuardResult<T> = Result<T, GuardError>;

/// A rejected argument.
///
/// Every guard fails with [`GuardError::InvalidArgument`]; the message tells
/// which check failed and the bounds involved.
///
/// # Examples
///
/// ```
/// use palisade_guard::{GuardError, guard_maximum};
///
/// let err = guard_maximum(12, "retries", 10).unwrap_err();
/// assert_eq!(err.argument(), "retries");
/// assert_eq!(
///     err.to_string(),
///     "invalid argument 'retries': retries (12) is above the maximum of 10"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum GuardError {
    /// The argument violated a guard.
    #[error("invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// Name of the rejected argument, as given to the guard.
        argument: Cow<'static, str>,
        /// Rendered description of the violation.
        message: String,
    },
}

impl GuardError {
    /// Creates an `InvalidArgument` error.
    pub fn invalid_argument(
        argument: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "invalid_argument",
        }
    }

    /// Name of the rejected argument.
    pub fn argument(&self) -> &str {
        match self {
            Self::InvalidArgument { argument, .. } => argument,
        }
    }

    /// The violation message, without the argument prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message, .. } => message,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
