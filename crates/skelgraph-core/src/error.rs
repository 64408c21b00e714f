//! Error types for array and image operations.
//!
//! Every invalid argument is reported at the call that introduces it:
//! wrong component counts are `Shape` errors, values outside their domain
//! (negative extents, non-positive spacing, zero vectors) are `Domain`
//! errors and out-of-range component or voxel indices are `Index` errors.

use thiserror::Error;

/// Main error type for skelgraph core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Wrong number of components for a vector, point or matrix argument.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    Shape {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// A value lies outside the domain the operation accepts.
    #[error("Domain error: {0}")]
    Domain(String),

    /// Component or voxel index out of range.
    #[error("Index error: {0}")]
    Index(String),

    /// Unknown buffer layout name.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Dense array construction failed.
    #[error("Array error: {0}")]
    Array(#[from] ndarray::ShapeError),

    /// Tensor data could not be read back.
    #[error("Tensor error: {0}")]
    Tensor(String),
}

/// Result type for skelgraph core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create a shape error.
    pub fn shape(expected: impl Into<Vec<usize>>, actual: impl Into<Vec<usize>>) -> Self {
        Self::Shape {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a domain error.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::Index(msg.into())
    }

    /// Create a tensor error.
    pub fn tensor(msg: impl Into<String>) -> Self {
        Self::Tensor(msg.into())
    }

    /// Check that a slice argument has exactly `expected` components.
    pub fn check_len<T>(values: &[T], expected: usize) -> Result<()> {
        if values.len() != expected {
            return Err(Self::shape([expected], [values.len()]));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CoreError::domain("negative size");
        assert!(matches!(err, CoreError::Domain(_)));
    }

    #[test]
    fn test_error_display() {
        let err = CoreError::index("component 3 out of range");
        assert_eq!(err.to_string(), "Index error: component 3 out of range");
    }

    #[test]
    fn test_shape_mismatch() {
        let err = CoreError::shape([3, 3], [2, 3]);
        let err_str = err.to_string();
        assert!(err_str.contains("expected [3, 3]"));
        assert!(err_str.contains("got [2, 3]"));
    }

    #[test]
    fn test_check_len() {
        assert!(CoreError::check_len(&[1.0, 2.0, 3.0], 3).is_ok());
        let err = CoreError::check_len(&[1.0, 2.0], 3).unwrap_err();
        assert!(matches!(err, CoreError::Shape { .. }));
    }
}
