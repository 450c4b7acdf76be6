// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T: Default> FromIterator<T> for SimpleVector<T> {
    /// Collects with repeated `push_back`; the final capacity follows the growth
    /// policy rather than the exact item count.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
