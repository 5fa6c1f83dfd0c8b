//! Presence predicates
//!
//! [`Subject`] models an input that may be undefined, explicitly null, or a
//! concrete value. Null counts as defined; only [`Subject::Undefined`] does not.
//! Falsy-looking values such as `0`, `false`, `""` or an empty `Vec` are plain
//! [`Subject::Value`]s and are neither null nor nullish.

/// An input that may be missing, explicitly null, or present.
///
/// # Example
///
/// ```rust
/// use plumbline::Subject;
///
/// let missing: Subject<i32> = Subject::Undefined;
/// let cleared: Subject<i32> = None.into();
/// let set = Subject::Value(0);
///
/// assert!(missing.is_undefined());
/// assert!(cleared.is_null());
/// assert_eq!(set.value(), Some(&0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subject<T> {
    /// No value was supplied at all.
    #[default]
    Undefined,
    /// A value was supplied and it is explicitly null.
    Null,
    /// A concrete value.
    Value(T),
}

impl<T> Subject<T> {
    /// Returns `true` for [`Subject::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Subject::Undefined)
    }

    /// Returns `true` for [`Subject::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Subject::Null)
    }

    /// Returns `true` for [`Subject::Value`].
    pub fn is_value(&self) -> bool {
        matches!(self, Subject::Value(_))
    }

    /// The concrete value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Subject::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Consume the subject and return the concrete value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Subject::Value(value) => Some(value),
            _ => None,
        }
    }
}

/// `None` becomes [`Subject::Null`]: the caller had a slot and left it empty.
impl<T> From<Option<T>> for Subject<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Subject::Value(value),
            None => Subject::Null,
        }
    }
}

/// Returns `true` unless the subject is undefined. Null is defined.
///
/// ```rust
/// use plumbline::{predicate::is_defined, Subject};
///
/// assert!(!is_defined(&Subject::<()>::Undefined));
/// assert!(is_defined(&Subject::<()>::Null));
/// ```
#[inline]
pub fn is_defined<T>(value: &Subject<T>) -> bool {
    !value.is_undefined()
}

/// Returns `true` only for an explicit null.
#[inline]
pub fn is_null<T>(value: &Subject<T>) -> bool {
    value.is_null()
}

/// Returns `true` for null or undefined.
///
/// ```rust
/// use plumbline::{predicate::is_nullish, Subject};
///
/// assert!(is_nullish(&Subject::<&str>::Null));
/// assert!(is_nullish(&Subject::<&str>::Undefined));
/// assert!(!is_nullish(&Subject::Value("")));
/// ```
#[inline]
pub fn is_nullish<T>(value: &Subject<T>) -> bool {
    !value.is_value()
}

/// Returns the expression itself.
#[inline]
pub fn is_true(expression: bool) -> bool {
    expression
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_is_defined() {
        assert!(is_defined(&Subject::Value(0)));
        assert!(is_defined(&Subject::Value(false)));
        assert!(is_defined(&Subject::<i32>::Null));
        assert!(!is_defined(&Subject::<i32>::Undefined));
    }

    #[test]
    fn test_is_null() {
        assert!(is_null(&Subject::<i32>::Null));
        assert!(!is_null(&Subject::<i32>::Undefined));
        assert!(!is_null(&Subject::Value(0)));
        assert!(!is_null(&Subject::Value(f64::NAN)));
        assert!(!is_null(&Subject::Value(false)));
        assert!(!is_null(&Subject::Value(Vec::<i32>::new())));
        assert!(!is_null(&Subject::Value(HashMap::<String, i32>::new())));
    }

    #[test]
    fn test_is_nullish() {
        assert!(is_nullish(&Subject::<i32>::Null));
        assert!(is_nullish(&Subject::<i32>::Undefined));
        assert!(!is_nullish(&Subject::Value(0)));
        assert!(!is_nullish(&Subject::Value(false)));
        assert!(!is_nullish(&Subject::Value("")));
        assert!(!is_nullish(&Subject::Value(Vec::<u8>::new())));
    }

    #[test]
    fn test_is_true() {
        assert!(is_true(1 + 1 == 2));
        assert!(!is_true(false));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Subject::from(Some(3)), Subject::Value(3));
        assert_eq!(Subject::<i32>::from(None), Subject::Null);
    }

    #[test]
    fn test_default_is_undefined() {
        assert!(Subject::<String>::default().is_undefined());
    }

    #[test]
    fn test_value_accessors() {
        let subject = Subject::Value(String::from("x"));
        assert_eq!(subject.value().map(String::as_str), Some("x"));
        assert_eq!(subject.into_value(), Some(String::from("x")));
        assert_eq!(Subject::<u8>::Null.into_value(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&Subject::Value(5)).unwrap();
        assert_eq!(json, r#"{"Value":5}"#);
        let null: Subject<i32> = serde_json::from_str(r#""Null""#).unwrap();
        assert!(null.is_null());
    }
}
