// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::RawBuffer, reserve::ReserveRequest, vec::SimpleVector};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    /// Moves the array in; `len == capacity == N`.
    fn from(arr: [T; N]) -> Self {
        let slots: Box<[T]> = Box::new(arr);
        Self {
            buf: RawBuffer::from(slots),
            len: N,
        }
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    /// Clones the slice in order; `len == capacity == src.len()`.
    fn from(src: &[T]) -> Self {
        Self {
            buf: RawBuffer::from(Box::<[T]>::from(src)),
            len: src.len(),
        }
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    /// Adopts the vector's elements; `len == capacity == v.len()`.
    fn from(v: Vec<T>) -> Self {
        let len = v.len();
        Self {
            buf: RawBuffer::from(v.into_boxed_slice()),
            len,
        }
    }
}

impl<T: Default> From<ReserveRequest> for SimpleVector<T> {
    /// Empty vector with exactly `request.capacity()` allocated slots.
    fn from(request: ReserveRequest) -> Self {
        Self::with_capacity(request.capacity())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{SimpleVector, reserve};
    use alloc::vec;

    #[test]
    fn test_from_array_slice_and_vec() {
        let a = SimpleVector::from([1, 2, 3]);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(a.capacity(), 3);

        let s = SimpleVector::from(&[4, 5][..]);
        assert_eq!(s.as_slice(), &[4, 5]);
        assert_eq!(s.capacity(), 2);

        let mut raw = vec![6, 7];
        raw.reserve(100);
        let v = SimpleVector::from(raw);
        assert_eq!(v.as_slice(), &[6, 7]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_from_empty_array_does_not_allocate() {
        let v: SimpleVector<i32> = SimpleVector::from([]);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_from_reserve_request() {
        let mut v: SimpleVector<i32> = SimpleVector::from(reserve(3));
        assert_eq!((v.len(), v.capacity()), (0, 3));
        v.push_back(1);
        v.push_back(2);
        v.push_back(3);
        assert_eq!(v.capacity(), 3);

        let z: SimpleVector<i32> = reserve(0).into();
        assert_eq!(z.capacity(), 0);
    }
}
