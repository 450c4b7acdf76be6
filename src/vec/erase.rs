// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T> SimpleVector<T> {
    /// Removes the element at `index`, shifting `(index, len)` one slot to the left.
    ///
    /// Returns `index`, which now names the erased element's successor, or
    /// equals the new `len` if the last element was erased. The erased value
    /// is left in the vacated slot past `len` and dropped when overwritten or
    /// when the buffer is released.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`. Erasing is unchecked by contract; use
    /// [`get`](Self::get) first when the position is not known to be valid.
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.len;
        if index >= len {
            panic!("erase index {index} out of range for length {len}");
        }

        self.buf.as_mut_slice()[index..len].rotate_left(1);
        self.len = len - 1;
        index
    }
}
