//! Spacing between adjacent voxel centers along each axis.

use super::Vector;
use crate::error::{CoreError, Result};

/// Spacing is a vector of physical distances, one per image axis.
pub type Spacing<const D: usize> = Vector<D>;

impl<const D: usize> Spacing<D> {
    /// Create uniform spacing (same value for all dimensions).
    pub fn uniform(value: f64) -> Self {
        Self::new([value; D])
    }

    /// Fail unless every component is finite and strictly positive.
    ///
    /// Zero or negative spacing makes the index to physical map non-invertible.
    pub fn validate(&self) -> Result<()> {
        match self.0.iter().position(|s| !(s.is_finite() && *s > 0.0)) {
            Some(axis) => Err(CoreError::domain(format!(
                "spacing must be positive, axis {} has {}",
                axis, self.0[axis]
            ))),
            None => Ok(()),
        }
    }

    /// Check if spacing is uniform (all components equal).
    pub fn is_uniform(&self) -> bool {
        self.0.iter().all(|s| (s - self.0[0]).abs() < 1e-9)
    }
}
