use thiserror::Error;

/// Errors raised by the array implementations being benchmarked.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArrayOpError {
    #[error("Empty array not supported")]
    EmptyArray,

    #[error("Shape mismatch: {left:?} != {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("Index {indices:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        indices: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Invalid shape {shape:?} for {len} elements: {message}")]
    InvalidShape {
        shape: Vec<usize>,
        len: usize,
        message: String,
    },
}
