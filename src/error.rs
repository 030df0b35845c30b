use std::fmt::{Display, Formatter};

/// Failures reported by `GrowableArray` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// The index is not strictly less than the array length.
    IndexOutOfRange { index: usize, len: usize },
    /// `pop` was called on an empty array.
    EmptyContainer,
}

impl Display for ArrayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrayError::IndexOutOfRange { index, len } => write!(f, "Index {} is out of range for array of length {}", index, len),
            ArrayError::EmptyContainer => Display::fmt("Array is empty", f),
        }
    }
}

impl std::error::Error for ArrayError {}
