//! Macros for building validators and bindings from variadic arguments.
//!
//! - [`macro@crate::combine`] - conjoins any number of validators, in order
//! - [`macro@crate::validating`] - builds a [`Validating`](crate::binding::Validating)
//!   from a value and any number of validators
//!
//! # Examples
//!
//! ```
//! use validation_rail::rules::{is_even, is_greater_than, is_less_than};
//! use validation_rail::{combine, validating};
//!
//! let rule = combine![is_greater_than(2), is_less_than(10), is_even()];
//! assert_eq!(
//!     rule.validate(11).into_errors().unwrap(),
//!     ["must be less than 10", "must be even"]
//! );
//!
//! let mut field = validating!(4, is_greater_than(2), is_even());
//! field.set(3);
//! assert_eq!(field.errors().unwrap(), ["must be even"]);
//! ```

/// Conjoins validators with [`Validator::combine`](crate::Validator::combine).
///
/// `combine![]` with no arguments is not accepted because the input type could
/// not be inferred; call `Validator::combine([])` instead.
///
/// # Examples
///
/// ```
/// use validation_rail::combine;
/// use validation_rail::rules::{is_at_least, is_odd};
///
/// let rule = combine![is_at_least(1), is_odd()];
/// assert!(rule.is_valid(&3));
/// ```
#[macro_export]
macro_rules! combine {
    ($($validator:expr),+ $(,)?) => {
        $crate::Validator::combine([$($validator),+])
    };
}

/// Builds a [`Validating`](crate::binding::Validating) binding from an initial
/// value and one or more validators, combined in order.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::is_true;
/// use validation_rail::validating;
///
/// let accepted = validating!(false, is_true());
/// assert!(accepted.is_invalid());
/// ```
#[macro_export]
macro_rules! validating {
    ($value:expr, $($validator:expr),+ $(,)?) => {
        $crate::binding::Validating::with_validators($value, [$($validator),+])
    };
}
