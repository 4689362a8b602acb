//! Ordering rules for any `PartialOrd` value.
//!
//! Bounds are captured at construction and rendered with `Display` in the
//! error message, e.g. `"must be greater than 4"` or `"must be in range 1...5"`.

use core::fmt::Display;
use core::ops::{Range, RangeInclusive};

use crate::validator::Validator;

/// Accepts values strictly greater than `bound`.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::is_greater_than;
///
/// let rule = is_greater_than(4);
/// assert!(rule.is_valid(&5));
/// assert_eq!(rule.validate(4).into_errors().unwrap(), ["must be greater than 4"]);
/// ```
pub fn is_greater_than<T>(bound: T) -> Validator<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    let error = format!("must be greater than {bound}");
    Validator::from_predicate(move |value: &T| *value > bound, error)
}

/// Accepts values strictly less than `bound`.
pub fn is_less_than<T>(bound: T) -> Validator<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    let error = format!("must be less than {bound}");
    Validator::from_predicate(move |value: &T| *value < bound, error)
}

/// Accepts values greater than or equal to `bound`.
pub fn is_at_least<T>(bound: T) -> Validator<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    let error = format!("must be at least {bound}");
    Validator::from_predicate(move |value: &T| *value >= bound, error)
}

/// Accepts values less than or equal to `bound`.
pub fn is_at_most<T>(bound: T) -> Validator<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    let error = format!("must be at most {bound}");
    Validator::from_predicate(move |value: &T| *value <= bound, error)
}

/// Accepts values inside the closed range `start..=end`.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::is_in_range;
///
/// let rule = is_in_range(1..=5);
/// assert!(rule.is_valid(&5));
/// assert_eq!(rule.validate(6).into_errors().unwrap(), ["must be in range 1...5"]);
/// ```
pub fn is_in_range<T>(range: RangeInclusive<T>) -> Validator<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    let error = format!("must be in range {}...{}", range.start(), range.end());
    Validator::from_predicate(move |value: &T| range.contains(value), error)
}

/// Accepts values inside the half-open range `start..end`.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::is_in_half_open_range;
///
/// let rule = is_in_half_open_range(1..5);
/// assert!(rule.is_valid(&1));
/// assert_eq!(rule.validate(5).into_errors().unwrap(), ["must be in range 1..<5"]);
/// ```
pub fn is_in_half_open_range<T>(range: Range<T>) -> Validator<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    let error = format!("must be in range {}..<{}", range.start, range.end);
    Validator::from_predicate(move |value: &T| range.contains(value), error)
}
