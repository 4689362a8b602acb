//! Equality rule.

use core::fmt::Display;

use crate::validator::Validator;

/// Accepts values equal to `expected`. Fails with `"must be equal to {expected}"`.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::is_equal_to;
///
/// let rule = is_equal_to("yes".to_string());
/// assert!(rule.is_valid(&"yes".to_string()));
/// assert_eq!(rule.validate("no".into()).into_errors().unwrap(), ["must be equal to yes"]);
/// ```
pub fn is_equal_to<T>(expected: T) -> Validator<T>
where
    T: PartialEq + Display + Send + Sync + 'static,
{
    let error = format!("must be equal to {expected}");
    Validator::from_predicate(move |value: &T| *value == expected, error)
}
