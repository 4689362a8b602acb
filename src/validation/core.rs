use crate::types::ErrorList;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of running a validator: either the accepted value or a non-empty
/// list of errors.
///
/// `Validation<E, A>` is applicative rather than monadic at heart. Where
/// `Result` stops at the first failure, [`Validation::zip`] keeps going and
/// concatenates the errors of both sides, which is what lets combined
/// validators report every violated rule in one pass.
///
/// The invalid branch holds an [`ErrorList`], so an invalid result always
/// carries at least one error.
///
/// # Serde Support
///
/// `Validation` implements `Serialize` and `Deserialize` when `E` and `A` do.
/// Deserializing an `Invalid` with an empty error array fails.
///
/// # Type Parameters
///
/// * `E` - The error type
/// * `A` - The success value type
///
/// # Examples
///
/// ```
/// use validation_rail::validation::Validation;
///
/// let valid = Validation::<&str, i32>::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validation::<&str, i32>::invalid("error");
/// assert!(invalid.is_invalid());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Validation<E, A> {
    Valid(A),
    Invalid(ErrorList<E>),
}

impl<E, A> Validation<E, A> {
    /// Creates a valid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value from a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid("missing field");
    /// assert!(v.is_invalid());
    /// ```
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(ErrorList::new(error))
    }

    /// Creates an invalid value from a leading error and any further errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid_many("missing", ["invalid"]);
    /// assert_eq!(v.into_errors().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn invalid_many<I>(first: E, rest: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Invalid(ErrorList::with_rest(first, rest))
    }

    /// Returns `true` if the validation contains a value.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if the validation contains errors.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrows the success value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Borrows the error list, if any.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> Option<&ErrorList<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Converts from `&Validation<E, A>` to `Validation<&E, &A>`.
    #[inline]
    pub fn as_ref(&self) -> Validation<&E, &A> {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.as_refs()),
        }
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the validation is invalid, the errors are preserved unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(21);
    /// let doubled = v.map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Chains computations that may produce additional validation errors.
    ///
    /// Behaves like [`Result::and_then`], propagating invalid states while
    /// invoking `f` only when the current validation is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::validation::Validation;
    ///
    /// fn parse_even(input: i32) -> Validation<&'static str, i32> {
    ///     if input % 2 == 0 {
    ///         Validation::valid(input)
    ///     } else {
    ///         Validation::invalid("not even")
    ///     }
    /// }
    ///
    /// let result = Validation::valid(4).and_then(parse_even);
    /// assert_eq!(result.into_value(), Some(4));
    ///
    /// let invalid = Validation::valid(3).and_then(parse_even);
    /// assert!(invalid.is_invalid());
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Calls `op` if the validation is invalid, otherwise returns the `Valid` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// let res = v.or_else(|_errs| Validation::valid(42));
    /// assert_eq!(res.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn or_else<F>(self, op: F) -> Validation<E, A>
    where
        F: FnOnce(ErrorList<E>) -> Validation<E, A>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => op(errors),
        }
    }

    /// Combines two validations into a tuple, accumulating all errors.
    ///
    /// If both validations are valid, returns a tuple of both values.
    /// Otherwise the result is invalid with `self`'s errors followed by
    /// `other`'s errors; a valid side contributes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::validation::Validation;
    ///
    /// let v1 = Validation::<&str, i32>::valid(42);
    /// let v2 = Validation::<&str, i32>::valid(21);
    /// assert_eq!(v1.zip(v2).into_value(), Some((42, 21)));
    ///
    /// let v3 = Validation::<&str, i32>::invalid("error1");
    /// let v4 = Validation::<&str, i32>::invalid("error2");
    /// let errors = v3.zip(v4).into_errors().unwrap();
    /// assert_eq!(errors, ["error1", "error2"]);
    /// ```
    #[inline]
    pub fn zip<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Validation::Invalid(e), Validation::Valid(_)) => Validation::Invalid(e),
            (Validation::Valid(_), Validation::Invalid(e)) => Validation::Invalid(e),
            (Validation::Invalid(mut e1), Validation::Invalid(e2)) => {
                e1.append(e2);
                Validation::Invalid(e1)
            }
        }
    }

    /// Like [`zip`](Self::zip), but merges the two success values with `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::validation::Validation;
    ///
    /// let sum = Validation::<&str, i32>::valid(2).zip_with(Validation::valid(3), |a, b| a + b);
    /// assert_eq!(sum.into_value(), Some(5));
    /// ```
    #[inline]
    pub fn zip_with<B, C, F>(self, other: Validation<E, B>, f: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Maps each error while preserving the success branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// let mapped = v.map_err(|e| format!("Error: {}", e));
    /// assert_eq!(mapped.into_errors().unwrap()[0], "Error: error");
    /// ```
    #[inline]
    pub fn map_err<F, G>(self, f: F) -> Validation<G, A>
    where
        F: FnMut(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.map(f)),
        }
    }

    /// Collapses all errors into a single accumulated error.
    ///
    /// The reducer runs over the errors in order, starting from `initial`. A
    /// valid result is passed through and `initial` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid_many("a", ["b"]);
    /// let joined = v.fold_errors(String::new(), |acc, e| acc + e);
    /// assert_eq!(joined.into_errors().unwrap()[0], "ab");
    /// ```
    #[inline]
    pub fn fold_errors<B, F>(self, initial: B, reducer: F) -> Validation<B, A>
    where
        F: FnMut(B, E) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::invalid(errors.fold(initial, reducer)),
        }
    }

    /// Converts into a `Result` carrying the whole error list.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.to_result(), Ok(42));
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// assert!(v.to_result().is_err());
    /// ```
    #[inline]
    pub fn to_result(self) -> Result<A, ErrorList<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Wraps a normal `Result`, turning the error side into a single-error list.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::validation::Validation;
    ///
    /// let result: Result<i32, &str> = Ok(42);
    /// let v = Validation::from_result(result);
    /// assert!(v.is_valid());
    /// ```
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    /// Extracts the error list, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorList<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Extracts the value, if valid.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        Self::from_result(result)
    }
}
