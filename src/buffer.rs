// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The raw, fixed-size slot storage behind [`SimpleVector`](crate::SimpleVector).
//!
//! A [`RawBuffer<T>`] exclusively owns one heap block of `capacity` slots. It is
//! move-only: there is no `Clone`, so every element copy has to be done
//! explicitly by the owner. Ownership changes hands in `O(1)` through
//! [`RawBuffer::swap`] or [`RawBuffer::take`]; no element is touched.

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    fmt,
    ops::{Index, IndexMut},
};

/// A move-only block of `capacity` contiguous, default-initialized slots.
///
/// The buffer knows nothing about which slots are "live"; that bookkeeping
/// belongs to its owner. A zero-capacity buffer performs no allocation.
pub struct RawBuffer<T> {
    slots: Box<[T]>,
}

impl<T: Default> RawBuffer<T> {
    /// Allocates `capacity` slots, each holding `T::default()`.
    ///
    /// `capacity == 0` does not allocate.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| T::default()).collect(),
        }
    }
}

impl<T> RawBuffer<T> {
    /// Returns an empty buffer owning zero slots.
    #[inline]
    pub fn empty() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Exchanges ownership of the two blocks without moving any element.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Moves the block out, leaving `self` owning zero slots.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Releases the block as a boxed slice of all `capacity` slots.
    #[inline]
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.slots
    }

    /// All slots, live or not.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// All slots, live or not, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<[T]>> for RawBuffer<T> {
    /// Adopts an existing block; every slot becomes owned by the buffer.
    fn from(slots: Box<[T]>) -> Self {
        Self { slots }
    }
}

impl<T> Index<usize> for RawBuffer<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.slots[i]
    }
}

impl<T> IndexMut<usize> for RawBuffer<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.slots[i]
    }
}

impl<T> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Slot contents past the owner's length are unspecified, so only the size is shown.
        f.debug_struct("RawBuffer")
            .field("capacity", &self.capacity())
            .finish()
    }
}
