// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `SimpleVector`.
//!
//! Only bounds conditions are reported as errors. Allocation failure is left to
//! the global allocator's handler, and intentionally unchecked operations
//! (indexing, [`erase`](crate::SimpleVector::erase)) panic instead.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by checked operations on [`SimpleVector`](crate::SimpleVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index or insertion position was outside the current logical bounds.
    ///
    /// Returned by [`at`](crate::SimpleVector::at) when `index >= len`, and by
    /// [`insert`](crate::SimpleVector::insert) when `index > len`.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The length of the vector at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange { index: 10, len: 3 });
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_display_names_index_and_len() {
        let e = Error::OutOfRange { index: 7, len: 2 };
        assert_eq!(e.to_string(), "index 7 out of range for length 2");
    }
}
