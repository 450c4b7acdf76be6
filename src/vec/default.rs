// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T> Default for SimpleVector<T> {
    /// Empty vector with zero capacity.
    fn default() -> Self {
        Self::new()
    }
}
