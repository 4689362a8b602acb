use crate::types::alloc_type::{Arc, String};
use crate::validation::Validation;
use core::fmt;

type CheckFn<V, E> = dyn Fn(&V) -> Validation<E, ()> + Send + Sync;

/// An immutable, shareable rule deciding whether a value is acceptable.
///
/// A `Validator` wraps a single pure check function. The check only ever sees
/// the value by reference and reports `Validation<E, ()>`; [`validate`]
/// hands the caller's own value back on success, so a validator can never
/// alter the value it accepts.
///
/// Cloning is cheap (the check lives behind an [`Arc`]) and validators are
/// `Send + Sync`, so one instance can be shared freely. Configuration captured
/// by the check at construction time (a bound, a pattern) is immutable for
/// the validator's lifetime.
///
/// The check must be deterministic and free of side effects. Bindings such
/// as [`Validating`](crate::binding::Validating) cache its result and rely on
/// a fresh call returning the same outcome for an equal value.
///
/// `V` may be unsized (`str`, `[T]`); [`check`] works for any `V`, while
/// [`validate`] needs an owned, sized value.
///
/// [`validate`]: Validator::validate
/// [`check`]: Validator::check
///
/// # Examples
///
/// ```
/// use validation_rail::validation::Validation;
/// use validation_rail::Validator;
///
/// let positive = Validator::new(|n: &i32| {
///     if *n > 0 {
///         Validation::valid(())
///     } else {
///         Validation::invalid("must be positive")
///     }
/// });
///
/// assert_eq!(positive.validate(3).into_value(), Some(3));
/// assert_eq!(positive.validate(-1).into_errors().unwrap(), ["must be positive"]);
/// ```
pub struct Validator<V: ?Sized, E = String> {
    check: Arc<CheckFn<V, E>>,
}

impl<V: ?Sized + 'static, E: 'static> Validator<V, E> {
    /// Wraps a check function. Nothing runs until the validator is invoked.
    #[inline]
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&V) -> Validation<E, ()> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    /// Builds a validator that fails with `error` whenever `predicate` is false.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::Validator;
    ///
    /// let non_empty = Validator::<str, _>::from_predicate(|s: &str| !s.is_empty(), "is empty");
    /// assert!(non_empty.is_valid("x"));
    /// assert!(!non_empty.is_valid(""));
    /// ```
    #[inline]
    pub fn from_predicate<P>(predicate: P, error: E) -> Self
    where
        P: Fn(&V) -> bool + Send + Sync + 'static,
        E: Clone + Send + Sync,
    {
        Self::new(move |value| {
            if predicate(value) {
                Validation::valid(())
            } else {
                Validation::invalid(error.clone())
            }
        })
    }

    /// A validator that accepts every value.
    #[inline]
    pub fn always_valid() -> Self {
        Self::new(|_| Validation::valid(()))
    }

    /// A validator that rejects every value with `error`.
    #[inline]
    pub fn always_invalid(error: E) -> Self
    where
        E: Clone + Send + Sync,
    {
        Self::new(move |_| Validation::invalid(error.clone()))
    }

    /// Runs the check against a borrowed value.
    ///
    /// Each call evaluates the wrapped function exactly once; nothing is cached.
    #[inline]
    pub fn check(&self, value: &V) -> Validation<E, ()> {
        (self.check)(value)
    }

    /// Returns `true` if `value` passes the check.
    #[inline]
    pub fn is_valid(&self, value: &V) -> bool {
        self.check(value).is_valid()
    }

    /// Runs the check and returns the input value itself when it passes.
    #[inline]
    pub fn validate(&self, value: V) -> Validation<E, V>
    where
        V: Sized,
    {
        self.check(&value).map(|()| value)
    }
}

impl<V: ?Sized, E> Clone for Validator<V, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<V: ?Sized, E> fmt::Debug for Validator<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

impl<V: ?Sized + 'static, E: 'static> Default for Validator<V, E> {
    /// Same as [`Validator::always_valid`].
    fn default() -> Self {
        Self::always_valid()
    }
}
