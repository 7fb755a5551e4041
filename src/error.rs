//! Error types for redacc

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using redacc's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in redacc operations
///
/// Floating-point overflow and NaN are not errors: they propagate through the
/// arithmetic as IEEE-754 special values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Operand lengths do not agree
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
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
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
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

    /// Error for a reduction over an empty sequence
    pub(crate) fn empty_input(arg: &'static str) -> Self {
        Self::invalid_argument(arg, "reduction over an empty sequence is undefined")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::invalid_argument("n", "must be at least 1");
        assert_eq!(err.to_string(), "Invalid argument 'n': must be at least 1");

        let err = Error::shape_mismatch(&[4], &[3]);
        assert_eq!(err.to_string(), "Shape mismatch: expected [4], got [3]");

        let err = Error::unsupported_dtype(DType::F64, "cast_narrow");
        assert_eq!(
            err.to_string(),
            "Unsupported dtype F64 for operation 'cast_narrow'"
        );
    }
}
