//! Assertion polarity
//!
//! A [`Polarity`] decides whether a predicate outcome passes. [`Affirm`] passes
//! when the predicate holds; [`Negate`] passes when it does not. Both validator
//! types are generic over the polarity, so the normal and negated APIs share
//! one implementation and one predicate set. [`ensure`] is the single place
//! where an outcome is turned into success or a [`ValidationError`].

use crate::error::{ErrorKind, ValidationError};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Affirm {}
    impl Sealed for super::Negate {}
}

/// Whether a validator accepts or rejects when its predicate holds.
///
/// Sealed: the only polarities are [`Affirm`] and [`Negate`].
pub trait Polarity: sealed::Sealed + Copy + Default + std::fmt::Debug {
    /// `true` for the negated view.
    const NEGATED: bool;

    /// Returns `true` if a predicate outcome passes under this polarity.
    #[inline]
    fn accepts(outcome: bool) -> bool {
        outcome != Self::NEGATED
    }
}

/// Normal polarity: fail when the predicate is `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Affirm;

/// Negated polarity: fail when the predicate is `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Negate;

impl Polarity for Affirm {
    const NEGATED: bool = false;
}

impl Polarity for Negate {
    const NEGATED: bool = true;
}

/// Turn a predicate outcome into a pass or a failure of `kind`.
///
/// The message is only copied when the check fails.
///
/// # Example
///
/// ```rust
/// use plumbline::polarity::{ensure, Affirm, Negate};
/// use plumbline::ErrorKind;
///
/// assert!(ensure::<Affirm>(true, ErrorKind::Invalid, "m").is_ok());
/// assert!(ensure::<Negate>(true, ErrorKind::Invalid, "m").is_err());
/// ```
#[inline]
pub fn ensure<P: Polarity>(
    outcome: bool,
    kind: ErrorKind,
    message: &str,
) -> Result<(), ValidationError> {
    if P::accepts(outcome) {
        return Ok(());
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        negated = P::NEGATED,
        kind = %kind,
        detail = message,
        "assertion rejected"
    );

    Err(ValidationError::new(kind, message))
}
