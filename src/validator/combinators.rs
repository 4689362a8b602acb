//! The algebra over [`Validator`]: adapting its input, conjoining, negating
//! and reshaping its errors.
//!
//! Combinators work at the function level. They never run the validators they
//! are given; the composed check runs once per call to
//! [`Validator::check`] or [`Validator::validate`].
//!
//! # Examples
//!
//! ```
//! use validation_rail::rules::{is_at_most, is_even, is_greater_than};
//! use validation_rail::Validator;
//!
//! let rule = Validator::combine([is_greater_than(2), is_at_most(10), is_even()]);
//!
//! assert!(rule.validate(4).is_valid());
//! assert_eq!(
//!     rule.validate(11).into_errors().unwrap(),
//!     ["must be at most 10", "must be even"]
//! );
//! ```
use crate::types::alloc_type::Vec;
use crate::validation::Validation;
use crate::validator::core::Validator;

impl<V: ?Sized + 'static, E: 'static> Validator<V, E> {
    /// Reuses this validator for another input type through an owned projection.
    ///
    /// `transform` derives the checked quantity from the new input (a length,
    /// a computed total). Errors pass through unchanged and, on success,
    /// [`validate`](Validator::validate) returns the caller's original input
    /// rather than the projected value.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::rules::is_at_least;
    ///
    /// let at_least_two = is_at_least(2usize).pullback(|items: &Vec<u8>| items.len());
    ///
    /// assert_eq!(at_least_two.validate(vec![1, 2]).into_value(), Some(vec![1, 2]));
    /// assert_eq!(
    ///     at_least_two.validate(vec![1]).into_errors().unwrap(),
    ///     ["must be at least 2"]
    /// );
    /// ```
    pub fn pullback<L, F>(self, transform: F) -> Validator<L, E>
    where
        L: ?Sized + 'static,
        V: Sized,
        F: Fn(&L) -> V + Send + Sync + 'static,
    {
        Validator::new(move |local: &L| self.check(&transform(local)))
    }

    /// Reuses this validator for another input type through a borrowing
    /// projection, typically a field access.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::rules::begins_with;
    /// use validation_rail::Validator;
    ///
    /// struct Account {
    ///     handle: String,
    /// }
    ///
    /// let handle: Validator<Account> =
    ///     begins_with::<String>("@").pullback_ref(|account: &Account| &account.handle);
    ///
    /// assert!(handle.is_valid(&Account { handle: "@rail".into() }));
    /// assert!(!handle.is_valid(&Account { handle: "rail".into() }));
    /// ```
    pub fn pullback_ref<L, F>(self, transform: F) -> Validator<L, E>
    where
        L: ?Sized + 'static,
        F: for<'a> Fn(&'a L) -> &'a V + Send + Sync + 'static,
    {
        Validator::new(move |local: &L| self.check(transform(local)))
    }

    /// Conjoins validators over the same input.
    ///
    /// Every validator runs against the same value, in order, without
    /// short-circuiting. The result is valid only if all of them pass;
    /// otherwise its errors are every failing branch's errors in list order.
    /// An empty list yields a validator that accepts everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::Validator;
    ///
    /// let both = Validator::<i32, &str>::combine([
    ///     Validator::always_invalid("a"),
    ///     Validator::always_valid(),
    ///     Validator::always_invalid("b"),
    /// ]);
    /// assert_eq!(both.validate(0).into_errors().unwrap(), ["a", "b"]);
    ///
    /// let nothing = Validator::<i32, &str>::combine([]);
    /// assert!(nothing.is_valid(&0));
    /// ```
    pub fn combine<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = Validator<V, E>>,
    {
        let validators: Vec<Validator<V, E>> = validators.into_iter().collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(branches = validators.len(), "combining validators");

        Validator::new(move |value: &V| {
            validators
                .iter()
                .fold(Validation::valid(()), |merged, validator| {
                    merged.zip_with(validator.check(value), |(), ()| ())
                })
        })
    }

    /// Conjoins `self` with `other`; `self`'s errors come first.
    #[inline]
    pub fn and(self, other: Validator<V, E>) -> Self {
        Self::combine([self, other])
    }

    /// Inverts this validator.
    ///
    /// The negated validator passes exactly when this one fails, whatever its
    /// errors were. When this one passes, the negated validator fails with the
    /// single `error` supplied here; the original messages never describe the
    /// inverted rule, so they are not reused.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::rules::is_even;
    ///
    /// let odd = is_even().negated("must not be even".to_string());
    ///
    /// assert!(odd.is_valid(&3));
    /// assert_eq!(odd.validate(4).into_errors().unwrap(), ["must not be even"]);
    /// ```
    pub fn negated(self, error: E) -> Self
    where
        E: Clone + Send + Sync,
    {
        Validator::new(move |value: &V| match self.check(value) {
            Validation::Valid(()) => Validation::invalid(error.clone()),
            Validation::Invalid(_) => Validation::valid(()),
        })
    }

    /// Transforms every error this validator reports, keeping order and count.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::rules::is_less_than;
    ///
    /// let age = is_less_than(130).map_errors(|e| format!("age {e}"));
    /// assert_eq!(age.validate(200).into_errors().unwrap(), ["age must be less than 130"]);
    /// ```
    pub fn map_errors<G, F>(self, transform: F) -> Validator<V, G>
    where
        G: 'static,
        F: Fn(E) -> G + Send + Sync + 'static,
    {
        Validator::new(move |value: &V| self.check(value).map_err(&transform))
    }

    /// Folds all reported errors into one accumulated error.
    ///
    /// On failure, `reducer` runs over the errors in order, starting from a
    /// clone of `initial`, and the result carries the final accumulator as its
    /// only error.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::rules::{is_even, is_greater_than};
    /// use validation_rail::Validator;
    ///
    /// let summary = Validator::combine([is_greater_than(2), is_even()])
    ///     .reduce_errors(String::new(), |acc, e| {
    ///         if acc.is_empty() { e } else { acc + ", " + &e }
    ///     });
    ///
    /// assert_eq!(
    ///     summary.validate(1).into_errors().unwrap(),
    ///     ["must be greater than 2, must be even"]
    /// );
    /// ```
    pub fn reduce_errors<B, F>(self, initial: B, reducer: F) -> Validator<V, B>
    where
        B: Clone + Send + Sync + 'static,
        F: Fn(B, E) -> B + Send + Sync + 'static,
    {
        Validator::new(move |value: &V| self.check(value).fold_errors(initial.clone(), &reducer))
    }
}
