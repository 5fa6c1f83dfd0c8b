//! Number predicates
//!
//! Comparisons use the type's own `PartialOrd`. For floats this means any
//! comparison against NaN is `false`, so NaN is never inside an interval and
//! never passes a threshold check.

use std::cmp::PartialOrd;

/// A pair of bounds consumed by the interval predicates.
///
/// Whether the bounds count as members depends on the predicate:
/// [`exclusive_between`] leaves them out, [`inclusive_between`] keeps them.
/// Bounds are not reordered; an interval whose start lies above its end
/// contains nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    /// Lower bound.
    pub start: T,
    /// Upper bound.
    pub end: T,
}

impl<T> Interval<T> {
    /// Create an interval from its bounds.
    pub const fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }
}

impl<T> From<(T, T)> for Interval<T> {
    fn from((start, end): (T, T)) -> Self {
        Interval { start, end }
    }
}

/// Returns `true` if `value` lies strictly inside the interval.
///
/// # Example
///
/// ```rust
/// use plumbline::predicate::{exclusive_between, Interval};
///
/// assert!(exclusive_between(&Interval::new(3, 5), &4));
/// assert!(!exclusive_between(&Interval::new(3, 5), &5));
/// ```
#[inline]
pub fn exclusive_between<T: PartialOrd>(interval: &Interval<T>, value: &T) -> bool {
    *value > interval.start && *value < interval.end
}

/// Returns `true` if `value` lies inside the interval or on one of its bounds.
///
/// # Example
///
/// ```rust
/// use plumbline::predicate::{inclusive_between, Interval};
///
/// assert!(!inclusive_between(&Interval::new(3, 5), &2));
/// assert!(inclusive_between(&Interval::new(3, 5), &3));
/// ```
#[inline]
pub fn inclusive_between<T: PartialOrd>(interval: &Interval<T>, value: &T) -> bool {
    *value >= interval.start && *value <= interval.end
}

/// Returns `true` if `value >= threshold`.
///
/// ```rust
/// assert!(plumbline::predicate::is_equal_or_greater_than(&2, &3));
/// ```
#[inline]
pub fn is_equal_or_greater_than<T: PartialOrd>(threshold: &T, value: &T) -> bool {
    *value >= *threshold
}

/// Returns `true` if `value <= threshold`.
///
/// ```rust
/// assert!(!plumbline::predicate::is_equal_or_less_than(&2, &3));
/// ```
#[inline]
pub fn is_equal_or_less_than<T: PartialOrd>(threshold: &T, value: &T) -> bool {
    *value <= *threshold
}

/// Returns `true` if `value > threshold`.
#[inline]
pub fn is_greater_than<T: PartialOrd>(threshold: &T, value: &T) -> bool {
    *value > *threshold
}

/// Returns `true` if `value < threshold`.
#[inline]
pub fn is_less_than<T: PartialOrd>(threshold: &T, value: &T) -> bool {
    *value < *threshold
}
