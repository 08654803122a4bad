use std::fmt;

/// Error type shared by all fallible `DynamicArray` and `Cursor` operations.
///
/// Every error is detected before the container is touched, i.e., a failed
/// operation never leaves a partially mutated container behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicArrayError {
    /// An index was outside the valid bound of the operation.
    ///
    /// For `get`, `set`, `remove_at` and `swap` the valid range is `0 .. len`,
    /// for `insert_at` it is `0 ..= len`.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the container at the time of the call.
        len: usize,
    },

    /// `Cursor::advance` was called although no element is left.
    NoSuchElement,

    /// `Cursor::remove_current` was called without a preceding `advance`.
    IllegalIteratorState,
}

impl fmt::Display for DynamicArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DynamicArrayError::OutOfRange { index, len } => {
                write!(f, "index {} is out of range for length {}", index, len)
            }
            DynamicArrayError::NoSuchElement => {
                write!(f, "cursor has no further element")
            }
            DynamicArrayError::IllegalIteratorState => {
                write!(f, "remove_current requires a preceding advance")
            }
        }
    }
}

impl std::error::Error for DynamicArrayError {}
