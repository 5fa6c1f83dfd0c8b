//! Testing utilities for code built on plumbline
//!
//! Assertion macros for the `Result` values returned by every check, plus
//! property-based testing support behind the `proptest` feature.
//!
//! # Assertion Macros
//!
//! ```rust
//! use plumbline::{assert_passes, assert_rejects};
//!
//! assert_passes!(plumbline::n(5).is_greater_than(3, "too small"));
//! assert_rejects!(plumbline::n(5).is_greater_than(8, "too small"));
//! assert_rejects!(plumbline::n(5).is_greater_than(8, "too small"), OutOfRange);
//! assert_rejects!(plumbline::is_true(false, "off"), Invalid, "off");
//! ```

/// Assert that a check passed.
///
/// Panics with the failure's kind and message if the check was rejected.
///
/// # Example
///
/// ```rust
/// use plumbline::assert_passes;
///
/// assert_passes!(plumbline::is_true(true, "must hold"));
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Ok(_) => {}
            ::core::result::Result::Err(e) => {
                let e: $crate::ValidationError = e;
                panic!("Expected pass, got {} failure: {:?}", e.kind(), e.message());
            }
        }
    };
}

/// Assert that a check was rejected.
///
/// Optionally also asserts the [`ErrorKind`](crate::ErrorKind) variant and the
/// exact message.
///
/// # Example
///
/// ```rust
/// use plumbline::assert_rejects;
///
/// let result = plumbline::n(0).exclusive_between(0, 10, "out of range");
/// assert_rejects!(result, OutOfRange, "out of range");
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Err(_) => {}
            ::core::result::Result::Ok(_) => {
                panic!("Expected rejection, got pass");
            }
        }
    };
    ($result:expr, $kind:ident) => {
        match $result {
            ::core::result::Result::Err(e) => {
                let e: $crate::ValidationError = e;
                assert_eq!(
                    e.kind(),
                    $crate::ErrorKind::$kind,
                    "Unexpected failure kind for {:?}",
                    e
                );
            }
            ::core::result::Result::Ok(_) => {
                panic!(
                    "Expected {} rejection, got pass",
                    $crate::ErrorKind::$kind
                );
            }
        }
    };
    ($result:expr, $kind:ident, $message:expr) => {
        match $result {
            ::core::result::Result::Err(e) => {
                let e: $crate::ValidationError = e;
                assert_eq!(
                    e.kind(),
                    $crate::ErrorKind::$kind,
                    "Unexpected failure kind for {:?}",
                    e
                );
                assert_eq!(e.message(), $message);
            }
            ::core::result::Result::Ok(_) => {
                panic!(
                    "Expected {} rejection with message {:?}, got pass",
                    $crate::ErrorKind::$kind,
                    $message
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::predicate::{Interval, Subject};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Subject<T>
where
    T: Arbitrary + Clone + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            1 => Just(Subject::Undefined),
            1 => Just(Subject::Null),
            4 => any_with::<T>(args).prop_map(Subject::Value),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Interval<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (start_params, end_params) = args;
        (any_with::<T>(start_params), any_with::<T>(end_params))
            .prop_map(|(start, end)| Interval::new(start, end))
            .boxed()
    }
}
