//! Boolean rules.

use crate::types::alloc_type::String;
use crate::validator::Validator;

/// Accepts only `true`. Fails with `"must be true"`.
pub fn is_true() -> Validator<bool> {
    Validator::from_predicate(|value: &bool| *value, String::from("must be true"))
}

/// Accepts only `false`. Fails with `"must be false"`.
pub fn is_false() -> Validator<bool> {
    Validator::from_predicate(|value: &bool| !*value, String::from("must be false"))
}
