use core::mem;

use crate::binding::record_outcome;
use crate::types::alloc_type::String;
use crate::types::ErrorList;
use crate::validation::Validation;
use crate::validator::Validator;

/// [`Validating`](crate::binding::Validating) for a value that may be absent.
///
/// The supplied validator is written for `V` and is lifted with
/// [`Validator::optional`]. Whether absence is acceptable is decided once, at
/// construction, and cannot be changed afterwards:
///
/// - required: `None` is invalid (with [`REQUIRED_MESSAGE`] for string
///   errors, or the caller's error);
/// - not required: `None` is valid and the validator is not invoked.
///
/// Present values are always checked by the wrapped validator.
///
/// [`REQUIRED_MESSAGE`]: crate::validator::REQUIRED_MESSAGE
///
/// # Examples
///
/// ```
/// use validation_rail::binding::OptionalValidating;
/// use validation_rail::rules::is_greater_than;
///
/// let mut limit = OptionalValidating::required(Some(11), is_greater_than(10));
/// assert!(limit.is_valid());
///
/// limit.set(None);
/// assert_eq!(limit.errors().unwrap(), ["is required"]);
///
/// let mut lenient = OptionalValidating::allowing_none(None, is_greater_than(10));
/// assert!(lenient.is_valid());
/// lenient.set(Some(3));
/// assert_eq!(lenient.errors().unwrap(), ["must be greater than 10"]);
/// ```
#[derive(Clone, Debug)]
pub struct OptionalValidating<V, E = String> {
    value: Option<V>,
    required: bool,
    validator: Validator<Option<V>, E>,
    outcome: Validation<E, ()>,
}

impl<V: 'static, E: 'static> OptionalValidating<V, E> {
    /// Binds an optional value with an explicit absence error.
    ///
    /// The binding is required exactly when `error_on_none` is `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::binding::OptionalValidating;
    /// use validation_rail::Validator;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// enum FieldError {
    ///     Missing,
    ///     Negative,
    /// }
    ///
    /// let non_negative = Validator::from_predicate(|n: &i64| *n >= 0, FieldError::Negative);
    /// let balance = OptionalValidating::new(None, non_negative, Some(FieldError::Missing));
    ///
    /// assert!(balance.is_required());
    /// assert_eq!(balance.errors().unwrap(), [FieldError::Missing]);
    /// ```
    pub fn new(value: Option<V>, validator: Validator<V, E>, error_on_none: Option<E>) -> Self
    where
        E: Clone + Send + Sync,
    {
        let required = error_on_none.is_some();
        Self::from_lifted(value, validator.optional(error_on_none), required)
    }

    fn from_lifted(value: Option<V>, validator: Validator<Option<V>, E>, required: bool) -> Self {
        let outcome = validator.check(&value);
        record_outcome(&outcome);
        Self {
            value,
            required,
            validator,
            outcome,
        }
    }

    /// Whether absence is treated as a failure.
    #[inline]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The current value, if present.
    #[inline]
    pub fn get(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Replaces the value and re-validates.
    pub fn set(&mut self, value: Option<V>) {
        self.value = value;
        self.revalidate();
    }

    /// Replaces the value, re-validates, and returns the previous value.
    pub fn replace(&mut self, value: Option<V>) -> Option<V> {
        let previous = mem::replace(&mut self.value, value);
        self.revalidate();
        previous
    }

    /// Takes the value out, leaving `None`, and re-validates.
    pub fn take(&mut self) -> Option<V> {
        self.replace(None)
    }

    /// Sets the value to `None` and re-validates.
    pub fn clear(&mut self) {
        self.set(None);
    }

    /// Mutates the optional value in place and re-validates.
    pub fn update<F>(&mut self, mutate: F)
    where
        F: FnOnce(&mut Option<V>),
    {
        mutate(&mut self.value);
        self.revalidate();
    }

    /// The lifted validator fixed at construction.
    #[inline]
    pub fn validator(&self) -> &Validator<Option<V>, E> {
        &self.validator
    }

    /// The outcome of the latest evaluation.
    #[inline]
    pub fn validation(&self) -> &Validation<E, ()> {
        &self.outcome
    }

    /// The latest outcome paired with the current value.
    pub fn result(&self) -> Validation<&E, Option<&V>> {
        self.outcome.as_ref().map(|_| self.value.as_ref())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.outcome.is_invalid()
    }

    /// Errors of the latest evaluation, `None` when valid.
    #[inline]
    pub fn errors(&self) -> Option<&ErrorList<E>> {
        self.outcome.errors()
    }

    #[inline]
    pub fn into_inner(self) -> Option<V> {
        self.value
    }

    fn revalidate(&mut self) {
        self.outcome = self.validator.check(&self.value);
        record_outcome(&self.outcome);
    }
}

impl<V: 'static> OptionalValidating<V, String> {
    /// Binds an optional value that must be present.
    ///
    /// Absence fails with [`REQUIRED_MESSAGE`](crate::validator::REQUIRED_MESSAGE).
    pub fn required(value: Option<V>, validator: Validator<V, String>) -> Self {
        Self::with_policy(value, validator, true)
    }

    /// Binds an optional value for which `None` is always valid.
    pub fn allowing_none(value: Option<V>, validator: Validator<V, String>) -> Self {
        Self::with_policy(value, validator, false)
    }

    /// Binds an optional value with the given required policy.
    pub fn with_policy(value: Option<V>, validator: Validator<V, String>, required: bool) -> Self {
        Self::from_lifted(value, validator.optional_allowing_none(!required), required)
    }
}
