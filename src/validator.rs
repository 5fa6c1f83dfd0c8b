//! Fluent assertion chains
//!
//! [`Validator`] is the root of a validation sequence. Its static assertions
//! take their subject as an argument and, on success, hand back a
//! [`StaticChain`]: a handle exposing exactly those four assertions and
//! nothing else, so a chain started on one subject class stays on it.
//! [`Validator::n`] binds one number and enters the numeric chain,
//! [`NumberValidator`].
//!
//! Every handle is generic over a [`Polarity`]. `Validator<Affirm>` fails when
//! a predicate is `false`; `Validator<Negate>`, obtained once through
//! [`Validator::not`], fails when the very same predicate is `true`. Negation
//! does not nest and cannot be entered mid-chain: `not` only exists on the
//! affirmative root.
//!
//! # Example
//!
//! ```rust
//! use plumbline::{Subject, ValidationError};
//!
//! fn check(name: Subject<&str>, active: bool) -> Result<(), ValidationError> {
//!     plumbline::is_defined(&name, "name is required")?
//!         .is_true(active, "account is inactive")?;
//!     plumbline::not().is_null(&name, "name must not be null")?;
//!     Ok(())
//! }
//!
//! assert!(check(Subject::Value("ada"), true).is_ok());
//! assert_eq!(
//!     check(Subject::Null, true).unwrap_err().message(),
//!     "name must not be null"
//! );
//! ```

mod number;

pub use number::NumberValidator;

use std::marker::PhantomData;

use crate::error::{ErrorKind, ValidationError};
use crate::polarity::{ensure, Affirm, Negate, Polarity};
use crate::predicate::{self, Subject};

/// Root of a validation sequence.
///
/// Zero-sized; copying it is free. Offers the static assertions, [`n`](Self::n)
/// and, on the affirmative root only, [`not`](Self::not).
#[derive(Debug)]
pub struct Validator<P: Polarity = Affirm> {
    _polarity: PhantomData<P>,
}

impl<P: Polarity> Clone for Validator<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Polarity> Copy for Validator<P> {}

impl<P: Polarity> Default for Validator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Polarity> Validator<P> {
    /// Create a validator of this polarity.
    pub const fn new() -> Self {
        Validator {
            _polarity: PhantomData,
        }
    }

    /// Returns `true` if this is the negated view.
    pub const fn is_negated(&self) -> bool {
        P::NEGATED
    }

    /// Assert that `value` is not [`Subject::Undefined`]. See [`StaticChain::is_defined`].
    pub fn is_defined<T>(
        self,
        value: &Subject<T>,
        message: &str,
    ) -> Result<StaticChain<P>, ValidationError> {
        StaticChain::new().is_defined(value, message)
    }

    /// Assert that `value` is exactly [`Subject::Null`]. See [`StaticChain::is_null`].
    pub fn is_null<T>(
        self,
        value: &Subject<T>,
        message: &str,
    ) -> Result<StaticChain<P>, ValidationError> {
        StaticChain::new().is_null(value, message)
    }

    /// Assert that `value` is null or undefined. See [`StaticChain::is_nullish`].
    pub fn is_nullish<T>(
        self,
        value: &Subject<T>,
        message: &str,
    ) -> Result<StaticChain<P>, ValidationError> {
        StaticChain::new().is_nullish(value, message)
    }

    /// Assert that `expression` is `true`. See [`StaticChain::is_true`].
    pub fn is_true(self, expression: bool, message: &str) -> Result<StaticChain<P>, ValidationError> {
        StaticChain::new().is_true(expression, message)
    }

    /// Bind `n` and enter the numeric chain with this validator's polarity.
    pub fn n<T>(self, n: T) -> NumberValidator<T, P> {
        NumberValidator::new(n)
    }
}

impl Validator<Affirm> {
    /// The negated view: every assertion fails exactly when the normal one
    /// would pass.
    ///
    /// ```rust
    /// use plumbline::{Subject, Validator};
    ///
    /// let negated = Validator::new().not();
    /// assert!(negated.is_null(&Subject::Value(5), "m").is_ok());
    /// assert!(negated.is_null(&Subject::<i32>::Null, "m").is_err());
    /// ```
    ///
    /// The negated view cannot be negated again:
    ///
    /// ```compile_fail
    /// let _ = plumbline::not().not();
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub const fn not(self) -> Validator<Negate> {
        Validator::new()
    }
}

/// Handle returned by a passing static assertion.
///
/// Exposes only `is_defined`, `is_null`, `is_nullish` and `is_true`, each
/// returning the same handle. The numeric chain and the negated view are
/// entered from the root [`Validator`], never from here:
///
/// ```compile_fail
/// # fn run() -> Result<(), plumbline::ValidationError> {
/// plumbline::is_true(true, "m")?.n(5);
/// # Ok(())
/// # }
/// ```
///
/// ```compile_fail
/// # fn run() -> Result<(), plumbline::ValidationError> {
/// plumbline::is_true(true, "m")?.not();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StaticChain<P: Polarity = Affirm> {
    _polarity: PhantomData<P>,
}

impl<P: Polarity> Clone for StaticChain<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Polarity> Copy for StaticChain<P> {}

impl<P: Polarity> StaticChain<P> {
    const fn new() -> Self {
        StaticChain {
            _polarity: PhantomData,
        }
    }

    /// Returns `true` if this chain is negated.
    pub const fn is_negated(&self) -> bool {
        P::NEGATED
    }

    #[inline]
    fn check(self, outcome: bool, message: &str) -> Result<Self, ValidationError> {
        ensure::<P>(outcome, ErrorKind::Invalid, message).map(|()| self)
    }

    /// Assert that `value` is not [`Subject::Undefined`]. Null counts as defined.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Invalid`] with `message` if the value is undefined
    /// (negated: if it is defined).
    pub fn is_defined<T>(self, value: &Subject<T>, message: &str) -> Result<Self, ValidationError> {
        self.check(predicate::is_defined(value), message)
    }

    /// Assert that `value` is exactly [`Subject::Null`].
    ///
    /// # Errors
    ///
    /// [`ValidationError::Invalid`] with `message` if the value is not null
    /// (negated: if it is null).
    pub fn is_null<T>(self, value: &Subject<T>, message: &str) -> Result<Self, ValidationError> {
        self.check(predicate::is_null(value), message)
    }

    /// Assert that `value` is null or undefined.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Invalid`] with `message` if the value is present
    /// (negated: if it is null or undefined).
    pub fn is_nullish<T>(self, value: &Subject<T>, message: &str) -> Result<Self, ValidationError> {
        self.check(predicate::is_nullish(value), message)
    }

    /// Assert that `expression` is `true`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Invalid`] with `message` if the expression is `false`
    /// (negated: if it is `true`).
    pub fn is_true(self, expression: bool, message: &str) -> Result<Self, ValidationError> {
        self.check(predicate::is_true(expression), message)
    }
}
