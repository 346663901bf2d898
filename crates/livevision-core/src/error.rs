//! Error types for tensor and transform operations.

use thiserror::Error;

/// Errors raised by the tensor view operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TensorError {
    /// The data length does not match the product of the requested shape.
    #[error("shape {shape:?} requires {expected} elements but {actual} were given")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// A dimension index past the tensor's rank was requested.
    #[error("dimension {dim} out of range for tensor of rank {rank}")]
    DimensionOutOfRange { dim: usize, rank: usize },

    /// The tensor has fewer dimensions than the operation needs.
    #[error("expected a tensor with at least {required} dimensions, got {rank}")]
    InsufficientRank { required: usize, rank: usize },

    /// A narrow request falls outside the bounds of the dimension.
    #[error("slice [{start}, {start} + {length}) out of range for dimension {dim} of size {size}")]
    SliceOutOfRange {
        dim: usize,
        start: i64,
        length: i64,
        size: usize,
    },
}

/// Errors raised by a bound transform when it is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The operation was called with the wrong number of arguments.
    #[error("Tensor required as argument (expected {expected}, got {actual})")]
    ArgumentCount { expected: usize, actual: usize },

    /// The underlying tensor operation failed.
    #[error(transparent)]
    Tensor(#[from] TensorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_error_message() {
        let err = TensorError::SliceOutOfRange {
            dim: 2,
            start: -25,
            length: 150,
            size: 100,
        };
        assert_eq!(
            err.to_string(),
            "slice [-25, -25 + 150) out of range for dimension 2 of size 100"
        );
    }

    #[test]
    fn test_argument_count_message() {
        let err = TransformError::ArgumentCount {
            expected: 1,
            actual: 0,
        };
        assert!(err.to_string().starts_with("Tensor required as argument"));
    }

    #[test]
    fn test_tensor_error_is_transparent() {
        let inner = TensorError::InsufficientRank {
            required: 2,
            rank: 1,
        };
        let err: TransformError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, TransformError::Tensor(inner));
    }
}
