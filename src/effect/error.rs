//! Error types for the effect system.
//!
//! This module provides the typed failures an [`IO`](super::IO) action can
//! produce when run. Failures are ordinary values: `run` surfaces them as
//! the `Err` side of a `Result`, and they propagate through combinator
//! chains by short-circuiting, exactly like `?` on an ordinary call stack.
//!
//! Two kinds of failure exist:
//!
//! - [`RaisedError`]: a general failure raised by an effect
//! - [`TryFailure`]: a failure adapted from a failable procedure via
//!   [`IO::from_failable`](super::IO::from_failable), carrying the
//!   original message verbatim
//!
//! [`EffectError`] unifies the two so callers can match on the failure
//! kind.

/// A general failure raised by an effect.
///
/// This is the failure kind produced by [`IO::fail`](super::IO::fail) and
/// by primitive adapters whose underlying operation reports an error.
///
/// # Examples
///
/// ```rust
/// use iolite::effect::RaisedError;
///
/// let error = RaisedError::new("connection reset");
/// assert_eq!(format!("{error}"), "connection reset");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaisedError {
    /// The failure message.
    pub message: String,
}

impl RaisedError {
    /// Creates a raised failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RaisedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl std::error::Error for RaisedError {}

/// A failure adapted from a failable procedure.
///
/// Produced when [`IO::from_failable`](super::IO::from_failable) wraps a
/// procedure that reports failure through its return value. The original
/// failure's message is preserved verbatim; the wrapping only tags the
/// failure so callers can distinguish adapted failures from other effect
/// failures.
///
/// # Examples
///
/// ```rust
/// use iolite::effect::TryFailure;
///
/// let failure = TryFailure::new("failure");
/// assert_eq!(format!("{failure}"), "failure");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryFailure {
    /// The original failure's message, unmodified.
    pub message: String,
}

impl TryFailure {
    /// Creates an adapted failure carrying the given message verbatim.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TryFailure {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl std::error::Error for TryFailure {}

/// Represents the failures an effect can produce when run.
///
/// This enum provides a unified failure type for the effect system.
/// Callers pattern-match on the variant to distinguish adapted failures
/// from general ones.
///
/// # Examples
///
/// ```rust
/// use iolite::effect::{EffectError, TryFailure};
///
/// let error = EffectError::Try(TryFailure::new("failure"));
/// match &error {
///     EffectError::Try(failure) => assert_eq!(failure.message, "failure"),
///     EffectError::Raised(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// A general failure raised by an effect.
    Raised(RaisedError),
    /// A failure adapted from a failable procedure.
    Try(TryFailure),
}

impl EffectError {
    /// Creates a general raised failure with the given message.
    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised(RaisedError::new(message))
    }

    /// Returns the failure's message, whichever kind it is.
    pub fn message(&self) -> &str {
        match self {
            Self::Raised(error) => &error.message,
            Self::Try(failure) => &failure.message,
        }
    }
}

impl std::fmt::Display for EffectError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raised(error) => write!(formatter, "{error}"),
            Self::Try(failure) => write!(formatter, "{failure}"),
        }
    }
}

impl std::error::Error for EffectError {}
