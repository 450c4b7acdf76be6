// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::RawBuffer, vec::SimpleVector};

// Alloc imports
use alloc::boxed::Box;

impl<T> SimpleVector<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: RawBuffer::empty(),
            len: 0,
        }
    }

    /// Constructs a vector of `len` clones of `value`, with `capacity == len`.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let slots: Box<[T]> = core::iter::repeat_n(value, len).collect();
        Self {
            buf: RawBuffer::from(slots),
            len,
        }
    }
}

impl<T: Default> SimpleVector<T> {
    /// Constructs a vector of `len` default values, with `capacity == len`.
    #[inline]
    pub fn with_size(len: usize) -> Self {
        Self {
            buf: RawBuffer::new(len),
            len,
        }
    }

    /// Constructs an empty vector with exactly `capacity` allocated slots.
    ///
    /// Same as `SimpleVector::from(reserve(capacity))`.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuffer::new(capacity),
            len: 0,
        }
    }
}
