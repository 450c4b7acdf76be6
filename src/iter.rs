// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`SimpleVector`](crate::SimpleVector).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&SimpleVector` and `&mut SimpleVector` iterate as slices over `[0, len)`.
//!
//! Borrowing iterators hold a borrow of the vector, so the compiler rejects any
//! reallocating or shifting call while one is alive.

mod from_iterator;

// Crate imports
use crate::vec::SimpleVector;

// Alloc imports
use alloc::vec;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `SimpleVector::into_iter()`.
///
/// Yields the live elements by value from front to back and supports
/// double-ended iteration via [`DoubleEndedIterator`]. Stale slots behind the
/// vector's length are dropped when the iterator is created.
pub struct IntoIter<T> {
    pub(crate) inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        let len = self.len;
        let mut slots = self.buf.into_boxed_slice().into_vec();
        slots.truncate(len);
        IntoIter {
            inner: slots.into_iter(),
        }
    }
}
