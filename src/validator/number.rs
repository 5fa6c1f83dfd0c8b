//! Numeric assertion chain
//!
//! A [`NumberValidator`] owns one subject number. Every assertion compares that
//! number against its arguments and, on success, returns the validator so more
//! checks on the same number can follow.

use std::marker::PhantomData;

use crate::error::{ErrorKind, ValidationError};
use crate::polarity::{ensure, Affirm, Polarity};
use crate::predicate::{self, Interval};

/// Assertion chain bound to a single number.
///
/// # Example
///
/// ```rust
/// use plumbline::ValidationError;
///
/// fn check_percentage(value: f64) -> Result<f64, ValidationError> {
///     let value = plumbline::n(value)
///         .inclusive_between(0.0, 100.0, "percentage out of range")?
///         .into_subject();
///     Ok(value)
/// }
///
/// assert_eq!(check_percentage(42.5), Ok(42.5));
/// assert!(check_percentage(f64::NAN).unwrap_err().is_out_of_range());
/// ```
#[derive(Debug)]
pub struct NumberValidator<T, P: Polarity = Affirm> {
    n: T,
    _polarity: PhantomData<P>,
}

impl<T: Clone, P: Polarity> Clone for NumberValidator<T, P> {
    fn clone(&self) -> Self {
        NumberValidator::new(self.n.clone())
    }
}

impl<T: Copy, P: Polarity> Copy for NumberValidator<T, P> {}

impl<T, P: Polarity> NumberValidator<T, P> {
    /// Bind `n` as the subject of every following assertion.
    pub const fn new(n: T) -> Self {
        NumberValidator {
            n,
            _polarity: PhantomData,
        }
    }

    /// The bound subject.
    pub fn subject(&self) -> &T {
        &self.n
    }

    /// Consume the chain and return the bound subject.
    pub fn into_subject(self) -> T {
        self.n
    }

    /// Returns `true` if this chain is negated.
    pub const fn is_negated(&self) -> bool {
        P::NEGATED
    }

    #[inline]
    fn check(self, outcome: bool, kind: ErrorKind, message: &str) -> Result<Self, ValidationError> {
        ensure::<P>(outcome, kind, message).map(|()| self)
    }
}

impl<T: PartialEq, P: Polarity> NumberValidator<T, P> {
    /// Assert that the subject equals `value`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Invalid`] with `message` if they differ
    /// (negated: if they are equal).
    pub fn is(self, value: T, message: &str) -> Result<Self, ValidationError> {
        let outcome = self.n == value;
        self.check(outcome, ErrorKind::Invalid, message)
    }
}

impl<T: PartialOrd, P: Polarity> NumberValidator<T, P> {
    #[inline]
    fn range(self, outcome: bool, message: &str) -> Result<Self, ValidationError> {
        self.check(outcome, ErrorKind::OutOfRange, message)
    }

    /// Assert that `start < subject < end`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::OutOfRange`] with `message` if the subject is outside
    /// the open interval or on a bound (negated: if it is strictly inside).
    pub fn exclusive_between(self, start: T, end: T, message: &str) -> Result<Self, ValidationError> {
        let outcome = predicate::exclusive_between(&Interval::new(start, end), &self.n);
        self.range(outcome, message)
    }

    /// Assert that `start <= subject <= end`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::OutOfRange`] with `message` if the subject is outside
    /// the closed interval (negated: if it is inside or on a bound).
    pub fn inclusive_between(self, start: T, end: T, message: &str) -> Result<Self, ValidationError> {
        let outcome = predicate::inclusive_between(&Interval::new(start, end), &self.n);
        self.range(outcome, message)
    }

    /// Same as [`exclusive_between`](Self::exclusive_between) with a prebuilt interval.
    pub fn exclusive_within(
        self,
        interval: &Interval<T>,
        message: &str,
    ) -> Result<Self, ValidationError> {
        let outcome = predicate::exclusive_between(interval, &self.n);
        self.range(outcome, message)
    }

    /// Same as [`inclusive_between`](Self::inclusive_between) with a prebuilt interval.
    pub fn inclusive_within(
        self,
        interval: &Interval<T>,
        message: &str,
    ) -> Result<Self, ValidationError> {
        let outcome = predicate::inclusive_between(interval, &self.n);
        self.range(outcome, message)
    }

    /// Assert that `subject >= value`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::OutOfRange`] with `message` on failure.
    pub fn is_equal_or_greater_than(self, value: T, message: &str) -> Result<Self, ValidationError> {
        let outcome = predicate::is_equal_or_greater_than(&value, &self.n);
        self.range(outcome, message)
    }

    /// Assert that `subject <= value`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::OutOfRange`] with `message` on failure.
    pub fn is_equal_or_less_than(self, value: T, message: &str) -> Result<Self, ValidationError> {
        let outcome = predicate::is_equal_or_less_than(&value, &self.n);
        self.range(outcome, message)
    }

    /// Assert that `subject > value`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::OutOfRange`] with `message` on failure.
    pub fn is_greater_than(self, value: T, message: &str) -> Result<Self, ValidationError> {
        let outcome = predicate::is_greater_than(&value, &self.n);
        self.range(outcome, message)
    }

    /// Assert that `subject < value`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::OutOfRange`] with `message` on failure.
    pub fn is_less_than(self, value: T, message: &str) -> Result<Self, ValidationError> {
        let outcome = predicate::is_less_than(&value, &self.n);
        self.range(outcome, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polarity::Negate;
    use crate::{assert_passes, assert_rejects};

    fn n<T>(value: T) -> NumberValidator<T> {
        NumberValidator::new(value)
    }

    fn not_n<T>(value: T) -> NumberValidator<T, Negate> {
        NumberValidator::new(value)
    }

    #[test]
    fn test_chain_reuses_subject() {
        let chain = n(5)
            .is_greater_than(3, "m")
            .and_then(|c| c.is_less_than(10, "m"))
            .unwrap();
        assert_eq!(*chain.subject(), 5);
        assert_passes!(chain.is_equal_or_less_than(5, "m"));
    }

    #[test]
    fn test_equality_and_bounds_on_same_number() {
        let result = n(5)
            .is(5, "m")
            .and_then(|c| c.is_equal_or_greater_than(5, "m"))
            .and_then(|c| c.is_equal_or_less_than(5, "m"));
        assert_eq!(result.map(NumberValidator::into_subject), Ok(5));
    }

    #[test]
    fn test_exclusive_between() {
        assert_rejects!(n(0).exclusive_between(0, 10, "r"), OutOfRange, "r");
        assert_rejects!(n(10).exclusive_between(0, 10, "r"), OutOfRange, "r");
        assert_passes!(n(1).exclusive_between(0, 10, "r"));
        assert_passes!(n(9).exclusive_between(0, 10, "r"));
    }

    #[test]
    fn test_exclusive_between_negated() {
        assert_passes!(not_n(0).exclusive_between(0, 10, "r"));
        assert_passes!(not_n(10).exclusive_between(0, 10, "r"));
        assert_passes!(not_n(-1).exclusive_between(0, 10, "r"));
        assert_rejects!(not_n(5).exclusive_between(0, 10, "r"), OutOfRange, "r");
    }

    #[test]
    fn test_inclusive_between() {
        assert_passes!(n(0).inclusive_between(0, 10, "r"));
        assert_passes!(n(10).inclusive_between(0, 10, "r"));
        assert_rejects!(n(-1).inclusive_between(0, 10, "r"), OutOfRange, "r");
        assert_rejects!(n(11).inclusive_between(0, 10, "r"), OutOfRange, "r");
    }

    #[test]
    fn test_inclusive_between_negated() {
        assert_rejects!(not_n(0).inclusive_between(0, 10, "r"), OutOfRange);
        assert_rejects!(not_n(10).inclusive_between(0, 10, "r"), OutOfRange);
        assert_passes!(not_n(11).inclusive_between(0, 10, "r"));
    }

    #[test]
    fn test_within_prebuilt_interval() {
        let band = Interval::new(1.5, 2.5);
        assert_passes!(n(2.0).exclusive_within(&band, "r"));
        assert_rejects!(n(2.5).exclusive_within(&band, "r"), OutOfRange);
        assert_passes!(n(2.5).inclusive_within(&band, "r"));
        assert_rejects!(not_n(2.5).inclusive_within(&band, "r"), OutOfRange);
    }

    #[test]
    fn test_is() {
        assert_passes!(n(5).is(5, "m"));
        assert_rejects!(n(5).is(6, "m"), Invalid, "m");
        assert_passes!(not_n(5).is(6, "m"));
        assert_rejects!(not_n(5).is(5, "m"), Invalid, "m");
    }

    #[test]
    fn test_thresholds() {
        assert_passes!(n(5).is_greater_than(4, "m"));
        assert_rejects!(n(5).is_greater_than(5, "m"), OutOfRange);
        assert_passes!(n(5).is_less_than(6, "m"));
        assert_rejects!(n(5).is_less_than(5, "m"), OutOfRange);
        assert_passes!(n(5).is_equal_or_greater_than(5, "m"));
        assert_rejects!(n(5).is_equal_or_greater_than(6, "m"), OutOfRange);
        assert_passes!(n(5).is_equal_or_less_than(5, "m"));
        assert_rejects!(n(5).is_equal_or_less_than(4, "m"), OutOfRange);
    }

    #[test]
    fn test_thresholds_negated() {
        assert_rejects!(not_n(5).is_greater_than(4, "m"), OutOfRange);
        assert_passes!(not_n(5).is_greater_than(5, "m"));
        assert_rejects!(not_n(5).is_less_than(6, "m"), OutOfRange);
        assert_passes!(not_n(5).is_less_than(5, "m"));
        assert_rejects!(not_n(5).is_equal_or_greater_than(5, "m"), OutOfRange);
        assert_passes!(not_n(5).is_equal_or_greater_than(6, "m"));
        assert_rejects!(not_n(5).is_equal_or_less_than(5, "m"), OutOfRange);
        assert_passes!(not_n(5).is_equal_or_less_than(4, "m"));
    }

    #[test]
    fn test_nan_subject() {
        let nan = f64::NAN;
        assert_rejects!(n(nan).inclusive_between(f64::MIN, f64::MAX, "r"), OutOfRange);
        assert_rejects!(n(nan).is(nan, "m"), Invalid);
        // Negation inverts the same predicate, so NaN passes every negated check
        assert_passes!(not_n(nan).inclusive_between(f64::MIN, f64::MAX, "r"));
        assert_passes!(not_n(nan).is_greater_than(0.0, "r"));
        assert_passes!(not_n(nan).is_less_than(0.0, "r"));
    }

    #[test]
    fn test_non_copy_subject() {
        let chain = n(String::from("m"))
            .inclusive_between(String::from("a"), String::from("z"), "r")
            .and_then(|c| c.is(String::from("m"), "m"))
            .unwrap();
        assert_eq!(chain.clone().into_subject(), "m");
    }

    #[test]
    fn test_first_failure_message_wins() {
        let result = n(50)
            .is_greater_than(0, "must be positive")
            .and_then(|c| c.is_less_than(10, "must be below 10"))
            .and_then(|c| c.is(7, "must be seven"));
        assert_rejects!(result, OutOfRange, "must be below 10");
    }
}
