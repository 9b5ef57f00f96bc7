use thiserror::Error;

/// Custom error type for the linfit crates.
///
/// Shape compatibility of arithmetic operands is checked by the compiler, so the
/// only runtime failures are list lengths that disagree with a declared shape and
/// sub-block requests that run past the end of a matrix.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum LinfitError {
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Index out of range: block of {size} starting at {index} exceeds dimension {dim} during operation {operation}")]
    OutOfRange {
        index: usize,
        size: usize,
        dim: usize,
        operation: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl LinfitError {
    pub(crate) fn shape(expected: usize, actual: usize, operation: &str) -> Self {
        LinfitError::ShapeMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        }
    }
}
