//! Lifting validators into the `Option` domain.
//!
//! A present value is always delegated to the wrapped validator untouched.
//! Only absence is decided by policy: either it fails with a caller-chosen
//! error, or it is accepted without running the wrapped validator at all.
use crate::types::alloc_type::String;
use crate::validation::Validation;
use crate::validator::core::Validator;

/// Error reported for a missing value when absence is not allowed and no
/// explicit error was supplied.
pub const REQUIRED_MESSAGE: &str = "is required";

impl<V: 'static, E: 'static> Validator<V, E> {
    /// Lifts this validator to `Option<V>`.
    ///
    /// `Some` values are checked by this validator. `None` is invalid with
    /// `error_on_none` when one is given, and valid otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::rules::is_greater_than;
    ///
    /// let maybe = is_greater_than(10).optional(Some("is required".to_string()));
    ///
    /// assert_eq!(maybe.validate(Some(11)).into_value(), Some(Some(11)));
    /// assert_eq!(
    ///     maybe.validate(Some(10)).into_errors().unwrap(),
    ///     ["must be greater than 10"]
    /// );
    /// assert_eq!(maybe.validate(None).into_errors().unwrap(), ["is required"]);
    /// ```
    pub fn optional(self, error_on_none: Option<E>) -> Validator<Option<V>, E>
    where
        E: Clone + Send + Sync,
    {
        Validator::new(move |value: &Option<V>| match (value, &error_on_none) {
            (Some(present), _) => self.check(present),
            (None, Some(error)) => Validation::invalid(error.clone()),
            (None, None) => Validation::valid(()),
        })
    }
}

impl<V: 'static> Validator<V, String> {
    /// Lifts this validator to `Option<V>` with a boolean absence policy.
    ///
    /// With `allow_none` set, `None` is valid. Otherwise `None` fails with
    /// [`REQUIRED_MESSAGE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::rules::is_even;
    ///
    /// let required = is_even().optional_allowing_none(false);
    /// assert_eq!(required.validate(None::<i32>).into_errors().unwrap(), ["is required"]);
    ///
    /// let lenient = is_even().optional_allowing_none(true);
    /// assert!(lenient.is_valid(&None::<i32>));
    /// assert!(!lenient.is_valid(&Some(3)));
    /// ```
    pub fn optional_allowing_none(self, allow_none: bool) -> Validator<Option<V>, String> {
        let error_on_none = (!allow_none).then(|| String::from(REQUIRED_MESSAGE));
        self.optional(error_on_none)
    }
}
