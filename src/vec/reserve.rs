// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T: Default> SimpleVector<T> {
    /// Ensures `capacity >= new_capacity`.
    ///
    /// No-op if the vector already has that many slots; otherwise moves the
    /// live elements into a buffer of exactly `new_capacity` slots. `len` is
    /// unchanged.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity, "reserve");
        }
    }
}
