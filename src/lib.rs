// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `simple-vector`
//!
//! A `no_std` + `alloc`, growable, contiguous vector **with no `unsafe`**.
//!
//! The core type, [`SimpleVector<T>`], stores its elements in a single
//! heap block owned by a [`RawBuffer<T>`] and tracks a logical length
//! `len ∈ 0..=capacity`. It grows by an explicit, documented policy and never
//! exposes more than its live prefix.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want the capacity arithmetic of a vector to be part of its contract
//!   (exact `reserve`, doubling on push, `resize` over-allocation).
//! - You need a vector in a `no_std` environment with a global allocator.
//! - You want a fully safe implementation you can audit in one sitting.
//!
//! It may not be the best fit if:
//!
//! - Your element type has no meaningful `Default`: every allocation
//!   default-initializes its slots, so growing operations require `T: Default`.
//! - You need the buffer to shrink, or custom allocators.
//!
//! ## Components
//!
//! - [`RawBuffer`]: a move-only block of `capacity` default-initialized slots.
//!   It exchanges ownership in `O(1)` and never duplicates itself.
//! - [`ReserveRequest`] / [`reserve()`]: builds an empty vector with a given
//!   capacity via `SimpleVector::from(reserve(n))`.
//! - [`SimpleVector`]: length/capacity bookkeeping, growth, positional
//!   insert/erase, iteration and comparisons.
//!
//! ## Growth policy
//!
//! - `push_back` / `insert` without headroom: `0 → 1`, otherwise double.
//! - `resize(n)` with `n >= capacity`: reallocate to `2 * n`.
//! - `reserve(c)` with `c > capacity`: reallocate to exactly `c`.
//! - Nothing ever shrinks the buffer.
//!
//! Every reallocation is reported through the [`log`] facade at `trace`
//! level. The crate installs no logger.
//!
//! ## Checked vs unchecked operations
//!
//! - Checked, returning [`Error::OutOfRange`]: [`SimpleVector::at`],
//!   [`SimpleVector::at_mut`], [`SimpleVector::insert`].
//! - Unchecked by contract, **panicking** on misuse: indexing (`v[i]`, ranges)
//!   and [`SimpleVector::erase`].
//! - Permissive no-ops: [`SimpleVector::pop_back`] on an empty vector and
//!   [`SimpleVector::clear`].
//!
//! Positions are indices. Any reallocation or shift invalidates previously
//! obtained positions; see [`SimpleVector`] for the full contract.
//!
//! ## Example
//!
//! ```rust
//! use simple_vector::{SimpleVector, reserve};
//!
//! let mut v: SimpleVector<u8> = SimpleVector::from(reserve(4));
//! v.push_back(1);
//! v.extend_from_slice(&[2, 3]);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(v.capacity(), 4);
//!
//! v.push_back(4);
//! v.push_back(5);
//! assert_eq!(v.capacity(), 8);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod buffer;
mod error;
mod index;
mod iter;
mod reserve;
mod vec;

// Public exports (crate API surface)
pub use buffer::RawBuffer;
pub use error::Error;
pub use iter::IntoIter;
pub use reserve::{ReserveRequest, reserve};
pub use vec::SimpleVector;
