//! Direction type for representing image orientation.
//!
//! Direction matrices represent orientation of image axes in physical space.

use nalgebra::SMatrix;
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use super::Vector;
use crate::error::{CoreError, Result};

/// Determinants below this magnitude are treated as singular.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Direction matrix representing image orientation.
///
/// The direction matrix is a D×D matrix where column i is the direction of
/// the i-th image axis in physical space. Orthonormal columns are the
/// convention, but any invertible matrix is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction<const D: usize>(pub SMatrix<f64, D, D>);

impl<const D: usize> Direction<D> {
    /// Create an identity direction matrix (no rotation).
    pub fn identity() -> Self {
        Self(SMatrix::identity())
    }

    /// Create a direction from row-major rows.
    pub fn from_rows(rows: [[f64; D]; D]) -> Self {
        Self(SMatrix::from_fn(|r, c| rows[r][c]))
    }

    /// Create a direction from a 2-D array, failing unless it is exactly D×D.
    pub fn try_from_array(matrix: ArrayView2<'_, f64>) -> Result<Self> {
        if matrix.dim() != (D, D) {
            return Err(CoreError::shape([D, D], matrix.shape()));
        }
        Ok(Self(SMatrix::from_fn(|r, c| matrix[[r, c]])))
    }

    /// Row-major rows of the matrix.
    pub fn to_rows(&self) -> [[f64; D]; D] {
        let mut rows = [[0.0; D]; D];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.0[(r, c)];
            }
        }
        rows
    }

    /// Check if direction matrix is orthogonal (rotation or reflection).
    pub fn is_orthogonal(&self) -> bool {
        let product = self.0 * self.0.transpose();
        (product - SMatrix::<f64, D, D>::identity()).amax() < 1e-6
    }

    /// Compute the determinant by Gaussian elimination with partial pivoting.
    pub fn determinant(&self) -> f64 {
        let mut m = self.0;
        let mut det = 1.0;
        for col in 0..D {
            let pivot = (col..D)
                .max_by(|&a, &b| m[(a, col)].abs().total_cmp(&m[(b, col)].abs()))
                .unwrap_or(col);
            if m[(pivot, col)] == 0.0 {
                return 0.0;
            }
            if pivot != col {
                m.swap_rows(pivot, col);
                det = -det;
            }
            det *= m[(col, col)];
            for row in (col + 1)..D {
                let factor = m[(row, col)] / m[(col, col)];
                for k in col..D {
                    m[(row, k)] -= factor * m[(col, k)];
                }
            }
        }
        det
    }

    /// Check if the matrix cannot be inverted.
    pub fn is_singular(&self) -> bool {
        self.determinant().abs() < SINGULAR_TOLERANCE
    }

    /// Compute the inverse, failing for singular or non-finite matrices.
    pub fn inverse(&self) -> Result<Self> {
        if self.0.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::domain("direction matrix has non-finite entries"));
        }
        if self.is_singular() {
            return Err(CoreError::domain("direction matrix is singular"));
        }
        self.0
            .try_inverse()
            .map(Self)
            .ok_or_else(|| CoreError::domain("direction matrix is singular"))
    }
}

impl<const D: usize> std::ops::Index<(usize, usize)> for Direction<D> {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.0[index]
    }
}

impl<const D: usize> std::ops::Mul<Vector<D>> for Direction<D> {
    type Output = Vector<D>;

    fn mul(self, vector: Vector<D>) -> Self::Output {
        Vector(self.0 * vector.0)
    }
}
