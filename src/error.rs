use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    #[error("{buffer} buffer has length {actual}, expected {expected}")]
    LengthMismatch {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Reasons a sorted key/value pair of buffers fails [`crate::verify::check_sorted`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    #[error("{buffer} has length {actual}, expected {expected}")]
    LengthMismatch {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("key at index {index} is smaller than the key before it")]
    Unsorted { index: usize },
    #[error("key at index {index} does not match the original key its value points to")]
    Unpaired { index: usize },
    #[error("value at index {index} is not a valid index into the original keys")]
    IndexOutOfRange { index: usize },
    #[error("value at index {index} repeats an index seen earlier")]
    DuplicateIndex { index: usize },
}
