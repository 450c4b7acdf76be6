// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unchecked indexing for [`SimpleVector`](crate::SimpleVector).
//!
//! `v[i]` is the unchecked accessor: it does not return an error, it panics
//! when `i >= len`, exactly like a slice. Use [`at`](crate::SimpleVector::at)
//! for a checked lookup. All range forms are supported and only ever see the
//! live prefix `[0, len)`; slots behind `len` are unreachable even when allocated.

// Crate imports
use crate::vec::SimpleVector;

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}

// Read-only ranges
impl<T> Index<Range<usize>> for SimpleVector<T> {
    type Output = [T];
    fn index(&self, r: Range<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeFrom<usize>> for SimpleVector<T> {
    type Output = [T];
    fn index(&self, r: RangeFrom<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeTo<usize>> for SimpleVector<T> {
    type Output = [T];
    fn index(&self, r: RangeTo<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeToInclusive<usize>> for SimpleVector<T> {
    type Output = [T];
    fn index(&self, r: RangeToInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeInclusive<usize>> for SimpleVector<T> {
    type Output = [T];
    fn index(&self, r: RangeInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeFull> for SimpleVector<T> {
    type Output = [T];
    fn index(&self, _: RangeFull) -> &Self::Output {
        self.as_slice()
    }
}

// Mutable ranges
impl<T> IndexMut<usize> for SimpleVector<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
impl<T> IndexMut<Range<usize>> for SimpleVector<T> {
    fn index_mut(&mut self, r: Range<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeFrom<usize>> for SimpleVector<T> {
    fn index_mut(&mut self, r: RangeFrom<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeTo<usize>> for SimpleVector<T> {
    fn index_mut(&mut self, r: RangeTo<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeToInclusive<usize>> for SimpleVector<T> {
    fn index_mut(&mut self, r: RangeToInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeInclusive<usize>> for SimpleVector<T> {
    fn index_mut(&mut self, r: RangeInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeFull> for SimpleVector<T> {
    fn index_mut(&mut self, _: RangeFull) -> &mut Self::Output {
        self.as_mut_slice()
    }
}
