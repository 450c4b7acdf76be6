// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `SimpleVector` type and its inherent API.
//!
//! `SimpleVector<T>` is a growable vector backed by a single [`RawBuffer`].
//! It tracks a logical length inside the buffer's slot count and reallocates
//! according to a fixed growth policy when it runs out of room.

mod default;
mod erase;
mod extend;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod reserve;
mod resize;
mod slice;

// Crate imports
use crate::{buffer::RawBuffer, error::Error};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A contiguous, growable, heap-allocated vector.
///
/// `SimpleVector<T>` owns one [`RawBuffer<T>`] of `capacity` slots and tracks a
/// logical length `len ∈ 0..=capacity`. Only the prefix `[0, len)` holds
/// caller-visible values; the slots behind it are allocated but their contents
/// are unspecified (stale, default or moved-from) and are never exposed.
///
/// # Layout and invariants
///
/// - `len <= capacity` after every public operation.
/// - `capacity` is always exactly the number of slots the buffer owns.
/// - Slots are default-initialized when a buffer is allocated, which is why
///   every operation that may allocate requires `T: Default`.
///
/// # Growth policy
///
/// | operation | when | new capacity |
/// |---|---|---|
/// | [`push_back`] / [`insert`] | `len == capacity == 0` | [`INITIAL_CAPACITY`] |
/// | [`push_back`] / [`insert`] | `len == capacity > 0` | `capacity * `[`GROWTH_FACTOR`] |
/// | [`resize`] | `new_len >= capacity` | `new_len * `[`RESIZE_FACTOR`] |
/// | [`reserve`] | `new_capacity > capacity` | exactly `new_capacity` |
///
/// Appending is therefore amortized `O(1)`; a single reallocation is `O(len)`.
/// Nothing ever shrinks the buffer: [`clear`], [`truncate`], [`pop_back`] and
/// [`erase`] only move the length boundary.
///
/// # Positions and invalidation
///
/// Positions are plain indices into `[0, len)` (or `len` itself for
/// [`insert`] at the end). Any operation that reallocates (growth in
/// [`push_back`], [`insert`], [`resize`], [`reserve`]) or shifts elements
/// ([`insert`], [`erase`]) invalidates every position obtained before it: an
/// old index may now name a different element. References and slice iterators
/// borrow the vector, so the compiler already rejects their use across such a
/// call; stored indices have to be re-derived by the caller.
///
/// # Checked and unchecked access
///
/// - [`at`] / [`at_mut`] and [`insert`] are checked and return
///   [`Error::OutOfRange`].
/// - Indexing (`v[i]`) and [`erase`] are unchecked by contract and **panic**
///   on an out-of-range position, like slices.
/// - [`pop_back`] on an empty vector and [`clear`] are no-ops.
///
/// # Examples
///
/// ```rust
/// use simple_vector::SimpleVector;
///
/// let mut v = SimpleVector::from([1, 2, 3]);
/// assert_eq!(v.insert(1, 99), Ok(1));
/// assert_eq!(v.as_slice(), &[1, 99, 2, 3]);
///
/// assert_eq!(v.erase(1), 1);
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
///
/// v.resize(5);
/// assert_eq!(v.as_slice(), &[1, 2, 3, 0, 0]);
/// assert!(v.at(10).is_err());
/// ```
///
/// [`push_back`]: SimpleVector::push_back
/// [`insert`]: SimpleVector::insert
/// [`resize`]: SimpleVector::resize
/// [`reserve`]: SimpleVector::reserve
/// [`clear`]: SimpleVector::clear
/// [`truncate`]: SimpleVector::truncate
/// [`pop_back`]: SimpleVector::pop_back
/// [`erase`]: SimpleVector::erase
/// [`at`]: SimpleVector::at
/// [`at_mut`]: SimpleVector::at_mut
/// [`INITIAL_CAPACITY`]: SimpleVector::INITIAL_CAPACITY
/// [`GROWTH_FACTOR`]: SimpleVector::GROWTH_FACTOR
/// [`RESIZE_FACTOR`]: SimpleVector::RESIZE_FACTOR
pub struct SimpleVector<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> SimpleVector<T> {
    /// Capacity adopted by the first growth of an empty, unallocated vector.
    pub const INITIAL_CAPACITY: usize = 1;

    /// Multiplier applied to the capacity when `push_back`/`insert` find no headroom.
    pub const GROWTH_FACTOR: usize = 2;

    /// Multiplier applied to the requested length when `resize` reallocates.
    pub const RESIZE_FACTOR: usize = 2;

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of pushes that will not reallocate.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Returns `Some(&T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns `Some(&mut T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// Sets `len = 0`. Capacity and the allocated slots are untouched.
    ///
    /// The old elements stay in their slots until overwritten or until the
    /// buffer is released.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchanges buffers, lengths and capacities with `other` in `O(1)`.
    ///
    /// No element is copied or moved.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` with `len == 0` and `capacity == 0`.
    ///
    /// Equivalent to `core::mem::take(self)`.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}

impl<T: Default> SimpleVector<T> {
    /// Moves the live prefix into a fresh buffer of `new_capacity` slots and adopts it.
    ///
    /// `new_capacity` must be at least `len`. The new buffer's slots past `len`
    /// hold `T::default()`.
    pub(crate) fn reallocate(&mut self, new_capacity: usize, op: &'static str) {
        let len = self.len;
        debug_assert!(new_capacity >= len);

        let mut fresh = RawBuffer::new(new_capacity);
        fresh.as_mut_slice()[..len].swap_with_slice(&mut self.buf.as_mut_slice()[..len]);

        log::trace!(
            "{op}: reallocating from {} to {new_capacity} slots (len {len})",
            self.capacity()
        );
        self.buf.swap(&mut fresh);
    }

    /// Guarantees room for one more element using the push/insert growth rule.
    pub(crate) fn grow_for_one(&mut self, op: &'static str) {
        if self.len < self.capacity() {
            return;
        }
        let new_capacity = match self.capacity() {
            0 => Self::INITIAL_CAPACITY,
            cap => cap
                .checked_mul(Self::GROWTH_FACTOR)
                .unwrap_or_else(|| capacity_overflow()),
        };
        self.reallocate(new_capacity, op);
    }
}

#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleVector")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for SimpleVector<T> {}
impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

/// Copies the live elements into a buffer of exactly `len` slots.
///
/// The clone's capacity is its own allocation size, not the source's capacity.
impl<T: Clone> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
