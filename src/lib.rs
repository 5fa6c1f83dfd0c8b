//! # Plumbline
//!
//! > *"True by the line"*
//!
//! Fluent, fail-fast assertions for input validation.
//!
//! ## Philosophy
//!
//! Every check is a pure predicate from [`predicate`] wrapped by an assertion
//! that returns `Err(ValidationError)` carrying your message when it fails.
//! A second, negated view of the very same assertions is one [`not()`] away:
//! it fails exactly when the normal view would pass.
//!
//! - **Static chain**: `is_defined`, `is_null`, `is_nullish`, `is_true` take
//!   their subject per call.
//! - **Numeric chain**: [`n()`] binds one number, then range, threshold and
//!   equality checks all run against it.
//! - **Fail fast**: the first failed check ends the chain through `?`. No
//!   errors are aggregated and the message is never reformatted.
//!
//! ## Quick Example
//!
//! ```rust
//! use plumbline::{Subject, ValidationError};
//!
//! struct Signup {
//!     email: Subject<String>,
//!     age: u32,
//!     accepted_terms: bool,
//! }
//!
//! fn validate_signup(form: &Signup) -> Result<(), ValidationError> {
//!     plumbline::not()
//!         .is_nullish(&form.email, "Email is required")?;
//!     plumbline::is_true(form.accepted_terms, "Terms must be accepted")?;
//!     plumbline::n(form.age)
//!         .is_equal_or_greater_than(18, "Must be 18 or older")?
//!         .is_less_than(150, "Age is not plausible")?;
//!     Ok(())
//! }
//!
//! let form = Signup {
//!     email: Subject::Value("ada@example.com".to_string()),
//!     age: 36,
//!     accepted_terms: true,
//! };
//! assert!(validate_signup(&form).is_ok());
//!
//! let minor = Signup { age: 12, ..form };
//! let err = validate_signup(&minor).unwrap_err();
//! assert!(err.is_out_of_range());
//! assert_eq!(err.to_string(), "Must be 18 or older");
//! ```
//!
//! ## Feature flags
//!
//! - `tracing`: emit a `TRACE` event for each rejected assertion
//! - `serde`: `Serialize`/`Deserialize` for [`Subject`], [`Interval`] and the
//!   error types
//! - `proptest`: `Arbitrary` for [`Subject`] and [`Interval`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod polarity;
pub mod predicate;
pub mod testing;
pub mod validator;

// Re-exports
pub use error::{ErrorKind, ValidationError};
pub use polarity::{Affirm, Negate, Polarity};
pub use predicate::{Interval, Subject};
pub use validator::{NumberValidator, StaticChain, Validator};

/// The affirmative root validator.
///
/// ```rust
/// assert!(plumbline::validate().is_true(true, "m").is_ok());
/// ```
pub const fn validate() -> Validator<Affirm> {
    Validator::new()
}

/// Assert that `value` is defined. See [`StaticChain::is_defined`].
pub fn is_defined<T>(value: &Subject<T>, message: &str) -> Result<StaticChain, ValidationError> {
    validate().is_defined(value, message)
}

/// Assert that `value` is null. See [`StaticChain::is_null`].
pub fn is_null<T>(value: &Subject<T>, message: &str) -> Result<StaticChain, ValidationError> {
    validate().is_null(value, message)
}

/// Assert that `value` is null or undefined. See [`StaticChain::is_nullish`].
pub fn is_nullish<T>(value: &Subject<T>, message: &str) -> Result<StaticChain, ValidationError> {
    validate().is_nullish(value, message)
}

/// Assert that `expression` is `true`. See [`StaticChain::is_true`].
pub fn is_true(expression: bool, message: &str) -> Result<StaticChain, ValidationError> {
    validate().is_true(expression, message)
}

/// Bind `value` and enter the numeric chain.
///
/// ```rust
/// let five = plumbline::n(5)
///     .is_greater_than(3, "m")
///     .and_then(|c| c.is_less_than(10, "m"))
///     .unwrap();
/// assert_eq!(*five.subject(), 5);
/// ```
pub fn n<T>(value: T) -> NumberValidator<T> {
    validate().n(value)
}

/// The negated view of every assertion.
///
/// ```rust
/// use plumbline::Subject;
///
/// assert!(plumbline::not().is_null(&Subject::Value(5), "m").is_ok());
/// assert!(plumbline::not().is_null(&Subject::<i32>::Null, "m").is_err());
/// ```
///
/// Negation does not nest:
///
/// ```compile_fail
/// plumbline::not().not().is_true(true, "m");
/// ```
pub const fn not() -> Validator<Negate> {
    validate().not()
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ErrorKind, ValidationError};
    pub use crate::polarity::{Affirm, Negate, Polarity};
    pub use crate::predicate::{Interval, Subject};
    pub use crate::validator::{NumberValidator, StaticChain, Validator};
    pub use crate::{is_defined, is_null, is_nullish, is_true, n, not, validate};
}
