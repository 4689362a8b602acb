//! Rules over collections: their length and their elements.

use core::fmt::Display;

use crate::rules::numeric::is_exactly;
use crate::types::alloc_type::{BTreeSet, String, Vec};
use crate::validator::Validator;

/// Anything with a countable number of elements.
///
/// Strings count `char`s, not bytes.
pub trait Length {
    fn length(&self) -> usize;
}

impl Length for str {
    #[inline]
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl Length for String {
    #[inline]
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T> Length for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

impl<T> Length for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for BTreeSet<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "std")]
impl<T, S> Length for std::collections::HashSet<T, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Length for std::collections::HashMap<K, V, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

/// Accepts collections with exactly `length` elements.
///
/// Fails with `"length must be exactly {length}"`.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::has_length_of;
///
/// let rule = has_length_of::<Vec<u8>>(3);
/// assert!(rule.is_valid(&vec![1, 2, 3]));
/// assert_eq!(rule.validate(vec![1]).into_errors().unwrap(), ["length must be exactly 3"]);
/// ```
pub fn has_length_of<C>(length: usize) -> Validator<C>
where
    C: Length + ?Sized + 'static,
{
    is_exactly(length)
        .pullback(|collection: &C| collection.length())
        .map_errors(|error| format!("length {error}"))
}

/// Accepts collections holding at least one element equal to `element`.
///
/// Fails with `"must contain {element}"`.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::contains;
///
/// let rule = contains::<Vec<i32>, _>(7);
/// assert!(rule.is_valid(&vec![1, 7]));
/// assert_eq!(rule.validate(vec![1, 2]).into_errors().unwrap(), ["must contain 7"]);
/// ```
pub fn contains<C, T>(element: T) -> Validator<C>
where
    C: ?Sized + 'static,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    T: PartialEq + Display + Send + Sync + 'static,
{
    let error = format!("must contain {element}");
    Validator::from_predicate(
        move |collection: &C| collection.into_iter().any(|item| *item == element),
        error,
    )
}
