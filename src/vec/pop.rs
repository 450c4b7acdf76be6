// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T> SimpleVector<T> {
    /// Drops the last element from the live range. No-op on an empty vector.
    ///
    /// The value stays in its slot until overwritten or until the buffer is released.
    #[inline]
    pub fn pop_back(&mut self) {
        if self.len > 0 {
            self.len -= 1;
        }
    }
}

impl<T: Default> SimpleVector<T> {
    /// Takes the last element out, leaving `T::default()` in its slot.
    ///
    /// Returns `None` on an empty vector.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(core::mem::take(&mut self.buf[self.len]))
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::SimpleVector;

    #[test]
    fn test_pop_back_is_permissive() {
        let mut v = SimpleVector::from([1, 2]);
        v.pop_back();
        assert_eq!(v.as_slice(), &[1]);
        v.pop_back();
        v.pop_back();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_pop_returns_values() {
        let mut v = SimpleVector::from([1, 2]);
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
        assert_eq!(v.capacity(), 2);
    }
}
