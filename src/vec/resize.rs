// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{SimpleVector, capacity_overflow};

impl<T> SimpleVector<T> {
    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }
}

impl<T: Default> SimpleVector<T> {
    /// Resizes to `new_len`, filling newly exposed positions with `T::default()`.
    ///
    /// - `new_len <= len`: shrinks in place.
    /// - `len < new_len < capacity`: resets `[len, new_len)` to the default, no reallocation.
    /// - `new_len >= capacity`: reallocates to `new_len * `[`RESIZE_FACTOR`](Self::RESIZE_FACTOR) slots.
    pub fn resize(&mut self, new_len: usize) {
        let len = self.len;
        if new_len <= len {
            self.len = new_len;
            return;
        }

        if new_len < self.capacity() {
            for slot in &mut self.buf.as_mut_slice()[len..new_len] {
                *slot = T::default();
            }
        } else {
            let new_capacity = new_len
                .checked_mul(Self::RESIZE_FACTOR)
                .unwrap_or_else(|| capacity_overflow());
            // Fresh slots are already default-valued.
            self.reallocate(new_capacity, "resize");
        }
        self.len = new_len;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::SimpleVector;

    #[test]
    fn test_resize_shrink_keeps_capacity() {
        let mut v = SimpleVector::from([1, 2, 3, 4]);
        v.resize(2);
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 4);
        v.resize(2);
        assert_eq!(v.len(), 2);
        v.resize(0);
        assert!(v.is_empty());
    }

    #[test]
    fn test_resize_within_capacity_resets_stale_slots() {
        let mut v = SimpleVector::from([1, 2, 3, 4]);
        v.truncate(1);
        v.resize(3);
        assert_eq!(v.as_slice(), &[1, 0, 0]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_resize_past_capacity_doubles_requested_len() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.resize(5);
        assert_eq!(v.as_slice(), &[1, 2, 3, 0, 0]);
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn test_resize_to_exact_capacity_reallocates() {
        let mut v: SimpleVector<i32> = SimpleVector::with_capacity(4);
        v.push_back(1);
        v.resize(4);
        assert_eq!(v.as_slice(), &[1, 0, 0, 0]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_resize_empty_unallocated() {
        let mut v: SimpleVector<u8> = SimpleVector::new();
        v.resize(0);
        assert_eq!(v.capacity(), 0);
        v.resize(1);
        assert_eq!(v.as_slice(), &[0]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_truncate() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.truncate(5);
        assert_eq!(v.len(), 3);
        v.truncate(1);
        assert_eq!(v.as_slice(), &[1]);
        assert_eq!(v.capacity(), 3);
    }
}
