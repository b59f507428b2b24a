//! Error type shared by every fallible operation in the crate.
//!
//! Only two things can go wrong when using this library:
//!
//! - a required argument was absent ([`Error::InvalidArgument`]), or
//! - a value was forced out of an empty container ([`Error::IllegalState`]).
//!
//! Neither is retried or recovered from internally. Operations fail
//! immediately and hand the error back to the caller.

use thiserror::Error;

/// The failure kinds raised by the boundary API.
///
/// # Examples
///
/// ```rust
/// use functional_extras::Error;
///
/// let error = Error::invalid_argument("morphism must not be null");
/// assert_eq!(error.to_string(), "invalid argument: morphism must not be null");
/// assert!(error.is_invalid_argument());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A required argument (a morphism, a predicate or a sum-type instance
    /// needed to pick a branch) was null.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value was forced out of a container that does not hold one.
    #[error("illegal state: {0}")]
    IllegalState(String),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] with the given message.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an [`Error::IllegalState`] with the given message.
    #[must_use]
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState(message.into())
    }

    /// Returns `true` for [`Error::InvalidArgument`].
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` for [`Error::IllegalState`].
    #[inline]
    pub const fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState(_))
    }

    /// Returns the message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(message) | Self::IllegalState(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_argument("either must not be null"), "invalid argument: either must not be null")]
    #[case(Error::illegal_state("maybe must not be null or Nothing"), "illegal state: maybe must not be null or Nothing")]
    fn test_error_display(#[case] error: Error, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_error_kind_predicates() {
        let invalid = Error::invalid_argument("x");
        let illegal = Error::illegal_state("y");

        assert!(invalid.is_invalid_argument());
        assert!(!invalid.is_illegal_state());
        assert!(illegal.is_illegal_state());
        assert!(!illegal.is_invalid_argument());
    }

    #[rstest]
    fn test_error_message() {
        assert_eq!(Error::invalid_argument("predicate").message(), "predicate");
        assert_eq!(Error::illegal_state("nothing").message(), "nothing");
    }
}
