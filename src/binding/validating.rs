use core::mem;

use crate::binding::record_outcome;
use crate::types::alloc_type::String;
use crate::types::ErrorList;
use crate::validation::Validation;
use crate::validator::Validator;

/// A value kept in sync with the outcome of its validator.
///
/// The validator is fixed at construction and evaluated immediately, so there
/// is never an "unvalidated" state. Every mutation ([`set`], [`replace`],
/// [`update`]) re-runs the validator before returning and the new outcome
/// replaces the old one. Reads never evaluate anything.
///
/// A failing value is stored like any other; the binding never rejects an
/// assignment. Callers inspect [`is_valid`] or [`errors`] afterwards.
///
/// The binding performs no locking. Sharing it between threads requires
/// external synchronisation around each mutation.
///
/// [`set`]: Validating::set
/// [`replace`]: Validating::replace
/// [`update`]: Validating::update
/// [`is_valid`]: Validating::is_valid
/// [`errors`]: Validating::errors
///
/// # Examples
///
/// ```
/// use validation_rail::binding::Validating;
/// use validation_rail::rules::is_even;
///
/// let mut count = Validating::new(0, is_even());
/// assert!(count.is_valid());
///
/// count.set(1);
/// assert_eq!(count.errors().unwrap(), ["must be even"]);
///
/// count.set(2);
/// assert!(count.is_valid());
/// ```
#[derive(Clone, Debug)]
pub struct Validating<V, E = String> {
    value: V,
    validator: Validator<V, E>,
    outcome: Validation<E, ()>,
}

impl<V: 'static, E: 'static> Validating<V, E> {
    /// Binds `value` to `validator` and evaluates it right away.
    pub fn new(value: V, validator: Validator<V, E>) -> Self {
        let outcome = validator.check(&value);
        record_outcome(&outcome);
        Self {
            value,
            validator,
            outcome,
        }
    }

    /// Binds `value` to all of `validators`, combined in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::binding::Validating;
    /// use validation_rail::rules::{is_even, is_greater_than};
    ///
    /// let quantity = Validating::with_validators(1, [is_greater_than(2), is_even()]);
    /// assert_eq!(
    ///     quantity.errors().unwrap(),
    ///     ["must be greater than 2", "must be even"]
    /// );
    /// ```
    pub fn with_validators<I>(value: V, validators: I) -> Self
    where
        I: IntoIterator<Item = Validator<V, E>>,
    {
        Self::new(value, Validator::combine(validators))
    }

    /// The current value.
    #[inline]
    pub fn get(&self) -> &V {
        &self.value
    }

    /// Replaces the value and re-validates.
    pub fn set(&mut self, value: V) {
        self.value = value;
        self.revalidate();
    }

    /// Replaces the value, re-validates, and returns the previous value.
    pub fn replace(&mut self, value: V) -> V {
        let previous = mem::replace(&mut self.value, value);
        self.revalidate();
        previous
    }

    /// Mutates the value in place and re-validates.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::binding::Validating;
    /// use validation_rail::rules::is_at_most;
    ///
    /// let mut items = Validating::new(vec![1], is_at_most(1usize).pullback(Vec::len));
    /// items.update(|items| items.push(2));
    /// assert_eq!(items.errors().unwrap(), ["must be at most 1"]);
    /// ```
    pub fn update<F>(&mut self, mutate: F)
    where
        F: FnOnce(&mut V),
    {
        mutate(&mut self.value);
        self.revalidate();
    }

    /// The validator fixed at construction.
    #[inline]
    pub fn validator(&self) -> &Validator<V, E> {
        &self.validator
    }

    /// The outcome of the latest evaluation.
    #[inline]
    pub fn validation(&self) -> &Validation<E, ()> {
        &self.outcome
    }

    /// The latest outcome paired with the current value.
    pub fn result(&self) -> Validation<&E, &V> {
        self.outcome.as_ref().map(|_| &self.value)
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

    /// Unwraps the binding into its value.
    #[inline]
    pub fn into_inner(self) -> V {
        self.value
    }

    /// Unwraps the binding into its value and latest outcome.
    #[inline]
    pub fn into_parts(self) -> (V, Validation<E, ()>) {
        (self.value, self.outcome)
    }

    fn revalidate(&mut self) {
        self.outcome = self.validator.check(&self.value);
        record_outcome(&self.outcome);
    }
}
