// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T: Default> SimpleVector<T> {
    /// Appends `value` at index `len`.
    ///
    /// When there is no headroom the buffer grows to
    /// [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY) (from zero) or by
    /// [`GROWTH_FACTOR`](Self::GROWTH_FACTOR), so pushing is amortized `O(1)`.
    /// To push a copy, pass `value.clone()`.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.grow_for_one("push_back");
        self.buf[self.len] = value;
        self.len += 1;
    }
}
