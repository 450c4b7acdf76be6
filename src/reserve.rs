// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity-only construction requests.

/// A request to build an empty [`SimpleVector`](crate::SimpleVector) with a
/// pre-allocated capacity.
///
/// Produced by [`reserve`] and consumed by `SimpleVector::from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    /// Creates a request for `capacity` slots.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity.
    #[inline]
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveRequest::new`].
///
/// ```rust
/// use simple_vector::{SimpleVector, reserve};
///
/// let v: SimpleVector<i32> = SimpleVector::from(reserve(8));
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 8);
/// ```
#[inline]
pub const fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}
