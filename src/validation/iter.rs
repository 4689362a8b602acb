use crate::validation::core::Validation;
use core::iter::FusedIterator;

/// Borrowing iterator over the success value of a [`Validation`].
///
/// Yields at most one item.
pub struct Iter<'a, A> {
    inner: Option<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<A> ExactSizeIterator for Iter<'_, A> {}
impl<A> FusedIterator for Iter<'_, A> {}

/// Mutable iterator over the success value of a [`Validation`].
pub struct IterMut<'a, A> {
    inner: Option<&'a mut A>,
}

impl<'a, A> Iterator for IterMut<'a, A> {
    type Item = &'a mut A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<A> ExactSizeIterator for IterMut<'_, A> {}
impl<A> FusedIterator for IterMut<'_, A> {}

/// Owning iterator over the success value of a [`Validation`].
pub struct IntoIter<A> {
    inner: Option<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<A> ExactSizeIterator for IntoIter<A> {}
impl<A> FusedIterator for IntoIter<A> {}

impl<E, A> IntoIterator for Validation<E, A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, E, A> IntoIterator for &'a Validation<E, A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E, A> IntoIterator for &'a mut Validation<E, A> {
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<E, A> Validation<E, A> {
    /// Iterates the success value, if any.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            inner: self.value(),
        }
    }

    /// Mutably iterates the success value, if any.
    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        match self {
            Validation::Valid(a) => IterMut { inner: Some(a) },
            Validation::Invalid(_) => IterMut { inner: None },
        }
    }

    /// Iterates the accumulated errors in order. Empty when valid.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, E> {
        match self {
            Self::Valid(_) => Default::default(),
            Self::Invalid(errors) => errors.iter(),
        }
    }

    /// Mutably iterates the accumulated errors in order. Empty when valid.
    pub fn iter_errors_mut(&mut self) -> core::slice::IterMut<'_, E> {
        match self {
            Self::Valid(_) => Default::default(),
            Self::Invalid(errors) => errors.iter_mut(),
        }
    }
}
