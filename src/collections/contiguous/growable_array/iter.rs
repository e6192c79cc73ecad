use std::iter::FusedIterator;
use std::slice;
use std::vec;

use super::GrowableArray;

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.slots[..self.len].iter(),
        }
    }
}

/// A borrowed iterator over the occupied slots of a [`GrowableArray`]. See
/// [`GrowableArray::iter`].
pub struct Iter<'a, T> {
    pub(crate) inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// Every slot below len is occupied, so the slot count is the exact remaining length.
impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = Vec::from(self.slots);
        slots.truncate(self.len);
        IntoIter {
            inner: slots.into_iter(),
        }
    }
}

/// An owned iterator over the elements of a [`GrowableArray`], in index order.
pub struct IntoIter<T> {
    pub(crate) inner: vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().flatten()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
