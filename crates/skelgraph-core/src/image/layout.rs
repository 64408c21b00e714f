//! Axis-order conventions for exchanging voxel buffers as dense arrays.
//!
//! Voxels are stored once, x-fastest (`x + size_x * (y + size_y * z)`).
//! A layout only decides how the axes of an exported or imported array map
//! to x, y, z; the permutation happens at the boundary and never produces a
//! second stored copy.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array3, ArrayView3};
use serde::{Deserialize, Serialize};

use super::region::Size3;
use crate::error::{CoreError, Result};

/// Axis order of an exchanged array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// `"F"`: axes reversed, array shape `(size_z, size_y, size_x)` and
    /// element `[z, y, x]` is voxel `(x, y, z)`.
    #[default]
    #[serde(rename = "F")]
    ReversedAxes,
    /// `"C"`: natural axes, array shape `(size_x, size_y, size_z)` and
    /// element `[x, y, z]` is voxel `(x, y, z)`.
    #[serde(rename = "C")]
    NaturalAxes,
}

impl Layout {
    /// Shape of the exchanged array for an image of the given size.
    pub fn array_shape(self, size: Size3) -> [usize; 3] {
        match self {
            Layout::ReversedAxes => [size[2], size[1], size[0]],
            Layout::NaturalAxes => size,
        }
    }

    /// Image size described by an exchanged array of the given shape.
    pub fn image_size(self, shape: [usize; 3]) -> Size3 {
        // the permutation is its own inverse
        self.array_shape(shape)
    }

    /// Wrap an x-fastest buffer as an array in this layout.
    pub fn export<T: Clone>(self, size: Size3, buffer: Vec<T>) -> Result<Array3<T>> {
        let reversed = Array3::from_shape_vec((size[2], size[1], size[0]), buffer)?;
        Ok(match self {
            Layout::ReversedAxes => reversed,
            Layout::NaturalAxes => reversed.reversed_axes(),
        })
    }

    /// Read an array in this layout into an x-fastest buffer.
    ///
    /// Works for any strides of `array`.
    pub fn import<T: Clone>(self, array: ArrayView3<'_, T>) -> (Size3, Vec<T>) {
        let reversed = match self {
            Layout::ReversedAxes => array,
            Layout::NaturalAxes => array.reversed_axes(),
        };
        let (z, y, x) = reversed.dim();
        ([x, y, z], reversed.iter().cloned().collect())
    }
}

impl FromStr for Layout {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "F" | "f" => Ok(Layout::ReversedAxes),
            "C" | "c" => Ok(Layout::NaturalAxes),
            other => Err(CoreError::InvalidLayout(format!(
                "expected \"F\" or \"C\", got {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::ReversedAxes => write!(f, "F"),
            Layout::NaturalAxes => write!(f, "C"),
        }
    }
}
