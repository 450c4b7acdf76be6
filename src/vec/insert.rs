// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::SimpleVector};

impl<T: Default> SimpleVector<T> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot to the right.
    ///
    /// `index == len` appends. Returns the position of the inserted element,
    /// which is always `index`.
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len`; the vector is unchanged.
    /// - Grows like [`push_back`](Self::push_back) when there is no headroom.
    ///   The position is carried across the reallocation as an index.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, Error> {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfRange { index, len });
        }
        self.grow_for_one("insert");

        // Place at the end, then rotate it down into position: [index..=len].
        let slots = self.buf.as_mut_slice();
        slots[len] = value;
        slots[index..=len].rotate_right(1);

        self.len = len + 1;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, SimpleVector};
    use alloc::string::String;

    #[test]
    fn test_insert_at_bounds_and_shift_correctly() {
        let mut v: SimpleVector<i32> = SimpleVector::new();
        assert_eq!(v.insert(0, 1), Ok(0)); // front of empty
        assert_eq!(v.insert(1, 3), Ok(1)); // tail
        assert_eq!(v.insert(1, 2), Ok(1)); // middle, shifts right
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.insert(3, 4), Ok(3)); // exactly at len
        assert_eq!(v.insert(0, 0), Ok(0));
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_err_is_noop() {
        let mut v = SimpleVector::from([1, 2]);
        assert_eq!(v.insert(3, 9), Err(Error::OutOfRange { index: 3, len: 2 }));
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 2);

        let mut e: SimpleVector<i32> = SimpleVector::new();
        assert!(e.insert(1, 9).is_err());
        assert_eq!(e.capacity(), 0);
    }

    #[test]
    fn test_insert_growth_matches_push() {
        let mut v: SimpleVector<i32> = SimpleVector::new();
        v.insert(0, 1).unwrap();
        assert_eq!(v.capacity(), 1);
        v.insert(0, 2).unwrap();
        assert_eq!(v.capacity(), 2);
        v.insert(1, 3).unwrap();
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.as_slice(), &[2, 3, 1]);
    }

    #[test]
    fn test_insert_into_full_vector_keeps_order() {
        let mut v = SimpleVector::from([1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);
        let pos = v.insert(2, 99).unwrap();
        assert_eq!(pos, 2);
        assert_eq!(v[pos], 99);
        assert_eq!(v.as_slice(), &[1, 2, 99, 3, 4]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_insert_with_headroom_does_not_reallocate() {
        let mut v: SimpleVector<i32> = SimpleVector::with_capacity(4);
        v.extend([1, 2]);
        let ptr = v.as_slice().as_ptr();
        v.insert(1, 5).unwrap();
        assert_eq!(v.as_slice(), &[1, 5, 2]);
        assert_eq!(v.as_slice().as_ptr(), ptr);
    }

    #[test]
    fn test_insert_moves_owned_values() {
        let mut v: SimpleVector<String> =
            SimpleVector::from([String::from("a"), String::from("c")]);
        v.insert(1, String::from("b")).unwrap();
        assert_eq!(v.as_slice(), &["a", "b", "c"]);
    }
}
