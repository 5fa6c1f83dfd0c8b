//! Boolean predicates shared by both assertion polarities
//!
//! Every assertion in this crate is a thin wrapper over one of these functions.
//! They are pure and total and never fail; the assertion layer decides what a
//! `true` or `false` means.
//!
//! Argument order is fixed: the parameter (threshold or interval) comes first,
//! the value under test second.
//!
//! # Example
//!
//! ```rust
//! use plumbline::predicate::*;
//! use plumbline::Subject;
//!
//! assert!(exclusive_between(&Interval::new(3, 5), &4));
//! assert!(!exclusive_between(&Interval::new(3, 5), &5));
//! assert!(inclusive_between(&Interval::new(3, 5), &5));
//!
//! assert!(is_greater_than(&2, &3));
//! assert!(is_defined(&Subject::<i32>::Null));
//! assert!(!is_null(&Subject::Value(0)));
//! ```

mod number;
mod presence;

pub use number::{
    exclusive_between, inclusive_between, is_equal_or_greater_than, is_equal_or_less_than,
    is_greater_than, is_less_than, Interval,
};
pub use presence::{is_defined, is_null, is_nullish, is_true, Subject};
