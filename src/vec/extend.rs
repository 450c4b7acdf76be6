// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T: Default> Extend<T> for SimpleVector<T> {
    /// Appends every item with [`push_back`](SimpleVector::push_back), so the
    /// buffer grows by the usual doubling rule.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Appends clones of every element of `src`.
    ///
    /// Reserves `len + src.len()` up front when there is not enough headroom,
    /// so at most one reallocation happens.
    pub fn extend_from_slice(&mut self, src: &[T]) {
        if src.len() > self.spare_capacity() {
            self.reserve(self.len + src.len());
        }
        for item in src {
            self.push_back(item.clone());
        }
    }
}
