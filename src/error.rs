//! Error types for sparsekit

use crate::dtype::DType;
use crate::verify::Mismatch;
use thiserror::Error;

/// Result type alias using sparsekit's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sparsekit operations
#[derive(Error, Debug)]
pub enum Error {
    /// Shape mismatch between two matrix views
    #[error("Shape mismatch: expected {expected:?}, got {got:?} (m, n, lda)")]
    ShapeMismatch {
        /// Expected (m, n, lda)
        expected: [usize; 3],
        /// Actual (m, n, lda)
        got: [usize; 3],
    },

    /// DType mismatch between a buffer tag and the requested element type
    #[error("DType mismatch: {lhs:?} vs {rhs:?}")]
    DTypeMismatch {
        /// Left-hand side dtype
        lhs: DType,
        /// Right-hand side dtype
        rhs: DType,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A numerical comparison found differing elements
    #[error("{0}")]
    Mismatch(#[from] Mismatch),
}

impl Error {
    /// Create a shape mismatch error from two (m, n, lda) triples
    pub fn shape_mismatch(expected: [usize; 3], got: [usize; 3]) -> Self {
        Self::ShapeMismatch { expected, got }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
