//! Validation failures
//!
//! Every rejected assertion produces a [`ValidationError`]. There are exactly two
//! kinds of failure, distinguished by category only:
//!
//! - [`ValidationError::Invalid`] for definedness, null, truthiness and exact
//!   equality checks
//! - [`ValidationError::OutOfRange`] for interval and threshold checks
//!
//! The only payload is the message supplied at the failing call site. It is
//! stored verbatim and displayed verbatim.
//!
//! # Examples
//!
//! ```
//! use plumbline::{ErrorKind, ValidationError};
//!
//! let err = plumbline::n(42).is_less_than(10, "too large").unwrap_err();
//!
//! assert_eq!(err.kind(), ErrorKind::OutOfRange);
//! assert_eq!(err.message(), "too large");
//! assert_eq!(err.to_string(), "too large");
//! assert_eq!(err, ValidationError::OutOfRange("too large".to_string()));
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Generic failure: definedness, null, nullish, truthiness, equality.
    Invalid,
    /// Range failure: intervals and thresholds.
    OutOfRange,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Invalid => f.pad("invalid"),
            ErrorKind::OutOfRange => f.pad("out of range"),
        }
    }
}

/// A failed assertion carrying the caller's message.
///
/// # Examples
///
/// ```
/// use plumbline::ValidationError;
///
/// let err = ValidationError::new(plumbline::ErrorKind::Invalid, "name is required");
/// assert!(!err.is_out_of_range());
/// assert_eq!(err.into_message(), "name is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// A generic validation failure.
    Invalid(String),
    /// A range validation failure.
    OutOfRange(String),
}

impl ValidationError {
    /// Create an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        match kind {
            ErrorKind::Invalid => ValidationError::Invalid(message.into()),
            ErrorKind::OutOfRange => ValidationError::OutOfRange(message.into()),
        }
    }

    /// The category of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Invalid(_) => ErrorKind::Invalid,
            ValidationError::OutOfRange(_) => ErrorKind::OutOfRange,
        }
    }

    /// The message supplied at the failing call site.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::Invalid(message) | ValidationError::OutOfRange(message) => message,
        }
    }

    /// Consume the error and return its message.
    pub fn into_message(self) -> String {
        match self {
            ValidationError::Invalid(message) | ValidationError::OutOfRange(message) => message,
        }
    }

    /// Returns `true` for range failures.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ValidationError::OutOfRange(_))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl StdError for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selects_variant() {
        assert_eq!(
            ValidationError::new(ErrorKind::Invalid, "a"),
            ValidationError::Invalid("a".to_string())
        );
        assert_eq!(
            ValidationError::new(ErrorKind::OutOfRange, String::from("b")),
            ValidationError::OutOfRange("b".to_string())
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(ValidationError::Invalid("x".into()).kind(), ErrorKind::Invalid);
        assert_eq!(
            ValidationError::OutOfRange("x".into()).kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn test_display_is_message_verbatim() {
        let err = ValidationError::OutOfRange("Age must be {0} - {1}".to_string());
        assert_eq!(format!("{}", err), "Age must be {0} - {1}");

        let err = ValidationError::Invalid(String::new());
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn test_message_accessors() {
        let err = ValidationError::Invalid("missing".to_string());
        assert_eq!(err.message(), "missing");
        assert!(!err.is_out_of_range());
        assert_eq!(err.into_message(), "missing");
    }

    #[test]
    fn test_error_trait() {
        let err = ValidationError::OutOfRange("r".to_string());
        let dyn_err: &dyn StdError = &err;
        assert!(dyn_err.source().is_none());
        assert_eq!(dyn_err.to_string(), "r");
    }

    #[test]
    fn test_boxed_error_propagation() {
        fn check(age: i32) -> Result<i32, Box<dyn StdError>> {
            crate::n(age).is_equal_or_greater_than(18, "must be an adult")?;
            Ok(age)
        }

        assert_eq!(check(30).unwrap(), 30);
        assert_eq!(check(12).unwrap_err().to_string(), "must be an adult");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::Invalid.to_string(), "invalid");
        assert_eq!(ErrorKind::OutOfRange.to_string(), "out of range");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let err = ValidationError::OutOfRange("too big".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"OutOfRange":"too big"}"#);
        let restored: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, err);
    }
}
