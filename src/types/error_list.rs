use crate::types::alloc_type::Vec;
use crate::types::ErrorVec;
use core::fmt;
use core::ops::Deref;
use smallvec::smallvec;

/// Ordered collection of validation errors that is never empty.
///
/// `ErrorList` is the payload of [`Validation::Invalid`](crate::validation::Validation::Invalid).
/// Its storage is private and every infallible constructor takes at least one
/// error, so an invalid result without errors cannot be built. Fallible
/// conversions from plain collections ([`ErrorList::try_from_iter`],
/// `TryFrom<Vec<E>>`) reject empty input.
///
/// Order is insertion order. It is kept stable so that aggregated failures
/// compare deterministically, but carries no priority meaning.
///
/// The list dereferences to `[E]`, so slice methods (`len`, `first`, `iter`,
/// indexing) are available directly.
///
/// # Examples
///
/// ```
/// use validation_rail::types::ErrorList;
///
/// let mut errors = ErrorList::new("too short");
/// errors.push("missing digit");
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0], "too short");
/// assert_eq!(errors.first(), &"too short");
///
/// assert!(ErrorList::<&str>::try_from_iter([]).is_none());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ErrorList<E> {
    items: ErrorVec<E>,
}

impl<E> ErrorList<E> {
    /// Creates a list holding a single error.
    #[inline]
    pub fn new(first: E) -> Self {
        Self {
            items: smallvec![first],
        }
    }

    /// Creates a list from a leading error followed by any number of others.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::types::ErrorList;
    ///
    /// let errors = ErrorList::with_rest("a", ["b", "c"]);
    /// assert_eq!(errors.as_slice(), &["a", "b", "c"]);
    /// ```
    #[inline]
    pub fn with_rest<I>(first: E, rest: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut list = Self::new(first);
        list.items.extend(rest);
        list
    }

    /// Collects errors from an iterator, returning `None` when it yields nothing.
    #[inline]
    pub fn try_from_iter<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let items: ErrorVec<E> = errors.into_iter().collect();
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Appends one error at the end.
    #[inline]
    pub fn push(&mut self, error: E) {
        self.items.push(error);
    }

    /// Appends every error of `other`, keeping its order.
    #[inline]
    pub fn append(&mut self, other: ErrorList<E>) {
        self.items.extend(other.items);
    }

    /// Returns the first error. Always present.
    #[inline]
    pub fn first(&self) -> &E {
        &self.items[0]
    }

    /// Returns the last error. Always present.
    #[inline]
    pub fn last(&self) -> &E {
        &self.items[self.items.len() - 1]
    }

    /// Borrows the errors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        self.items.as_slice()
    }

    /// Borrows every error into a new list of references.
    #[inline]
    pub fn as_refs(&self) -> ErrorList<&E> {
        ErrorList {
            items: self.items.iter().collect(),
        }
    }

    /// Mutably iterates the errors. The length cannot change through this.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, E> {
        self.items.iter_mut()
    }

    /// Transforms every error, preserving order and count.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::types::ErrorList;
    ///
    /// let lengths = ErrorList::with_rest("ab", ["abcd"]).map(str::len);
    /// assert_eq!(lengths.as_slice(), &[2, 4]);
    /// ```
    #[inline]
    pub fn map<G, F>(self, f: F) -> ErrorList<G>
    where
        F: FnMut(E) -> G,
    {
        ErrorList {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Folds the errors in order, starting from `initial`.
    #[inline]
    pub fn fold<B, F>(self, initial: B, f: F) -> B
    where
        F: FnMut(B, E) -> B,
    {
        self.items.into_iter().fold(initial, f)
    }

    /// Consumes the list into a `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<E> {
        self.items.into_vec()
    }

    /// Consumes the list into its `SmallVec` storage.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<E> {
        self.items
    }
}

impl<E> Deref for ErrorList<E> {
    type Target = [E];

    #[inline]
    fn deref(&self) -> &[E] {
        self.items.as_slice()
    }
}

impl<E> AsRef<[E]> for ErrorList<E> {
    #[inline]
    fn as_ref(&self) -> &[E] {
        self.items.as_slice()
    }
}

impl<E> TryFrom<Vec<E>> for ErrorList<E> {
    type Error = EmptyErrorList;

    fn try_from(errors: Vec<E>) -> Result<Self, Self::Error> {
        Self::try_from_iter(errors).ok_or(EmptyErrorList)
    }
}

impl<E> TryFrom<ErrorVec<E>> for ErrorList<E> {
    type Error = EmptyErrorList;

    fn try_from(items: ErrorVec<E>) -> Result<Self, Self::Error> {
        if items.is_empty() {
            Err(EmptyErrorList)
        } else {
            Ok(Self { items })
        }
    }
}

impl<E> Extend<E> for ErrorList<E> {
    #[inline]
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<E> IntoIterator for ErrorList<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; 1]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ErrorList<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E, U> PartialEq<[U]> for ErrorList<E>
where
    E: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.items.as_slice() == other
    }
}

impl<E, U, const N: usize> PartialEq<[U; N]> for ErrorList<E>
where
    E: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.items.as_slice() == other.as_slice()
    }
}

impl<E, U, const N: usize> PartialEq<[U; N]> for &ErrorList<E>
where
    E: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.items.as_slice() == other.as_slice()
    }
}

impl<E, U> PartialEq<Vec<U>> for ErrorList<E>
where
    E: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.items.as_slice() == other.as_slice()
    }
}

/// Returned when an empty collection is turned into an [`ErrorList`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct EmptyErrorList;

impl fmt::Display for EmptyErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an error list must contain at least one error")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyErrorList {}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{EmptyErrorList, ErrorList};
    use crate::types::ErrorVec;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<E: Serialize> Serialize for ErrorList<E> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.items.serialize(serializer)
        }
    }

    impl<'de, E: Deserialize<'de>> Deserialize<'de> for ErrorList<E> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let items = ErrorVec::<E>::deserialize(deserializer)?;
            ErrorList::try_from(items).map_err(|_| D::Error::custom(EmptyErrorList))
        }
    }
}
