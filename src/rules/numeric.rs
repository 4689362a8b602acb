//! Numeric rules.

use core::fmt::Display;

use crate::types::alloc_type::String;
use crate::validator::Validator;

/// Integer types whose parity can be checked.
pub trait Integer: Copy + Send + Sync + 'static {
    fn is_even(self) -> bool;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Integer for $t {
                #[inline]
                fn is_even(self) -> bool {
                    self % 2 == 0
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Accepts exactly `expected`. Fails with `"must be exactly {expected}"`.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::is_exactly;
///
/// assert!(is_exactly(3).is_valid(&3));
/// assert_eq!(is_exactly(3).validate(2).into_errors().unwrap(), ["must be exactly 3"]);
/// ```
pub fn is_exactly<T>(expected: T) -> Validator<T>
where
    T: PartialEq + Display + Send + Sync + 'static,
{
    let error = format!("must be exactly {expected}");
    Validator::from_predicate(move |value: &T| *value == expected, error)
}

/// Accepts odd integers, negative ones included.
pub fn is_odd<T: Integer>() -> Validator<T> {
    Validator::from_predicate(|value: &T| !value.is_even(), String::from("must be odd"))
}

/// Accepts even integers, zero included.
pub fn is_even<T: Integer>() -> Validator<T> {
    Validator::from_predicate(|value: &T| value.is_even(), String::from("must be even"))
}
