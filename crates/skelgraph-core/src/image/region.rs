//! Rectangular voxel regions and coordinates that can be tested against them.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::spatial::Point;

/// Discrete voxel index.
pub type Index3 = [i64; 3];

/// Voxel extents along x, y, z.
pub type Size3 = [usize; 3];

/// A coordinate in index space, discrete or continuous.
pub trait GridCoordinate {
    fn to_continuous(&self) -> [f64; 3];
}

impl GridCoordinate for Index3 {
    fn to_continuous(&self) -> [f64; 3] {
        self.map(|c| c as f64)
    }
}

impl GridCoordinate for [f64; 3] {
    fn to_continuous(&self) -> [f64; 3] {
        *self
    }
}

impl GridCoordinate for Point<3> {
    fn to_continuous(&self) -> [f64; 3] {
        self.to_array()
    }
}

/// Start index and extent of a block of voxels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub index: Index3,
    pub size: Size3,
}

impl Region {
    pub fn new(index: Index3, size: Size3) -> Self {
        Self { index, size }
    }

    /// Region starting at index zero.
    pub fn from_size(size: Size3) -> Self {
        Self::new([0; 3], size)
    }

    /// Parse a start index from a slice of exactly three components.
    pub fn parse_index(index: &[i64]) -> Result<Index3> {
        CoreError::check_len(index, 3)?;
        Ok([index[0], index[1], index[2]])
    }

    /// Parse an extent, rejecting wrong component counts and negative values.
    pub fn parse_size(size: &[i64]) -> Result<Size3> {
        CoreError::check_len(size, 3)?;
        let mut parsed = [0usize; 3];
        for (axis, (&s, out)) in size.iter().zip(parsed.iter_mut()).enumerate() {
            *out = usize::try_from(s).map_err(|_| {
                CoreError::domain(format!("size must be non-negative, axis {} has {}", axis, s))
            })?;
        }
        Self::checked_voxel_count(parsed)?;
        Ok(parsed)
    }

    /// Voxel count of an extent, failing when the product overflows `usize`.
    pub fn checked_voxel_count(size: Size3) -> Result<usize> {
        if size.contains(&0) {
            return Ok(0);
        }
        size.iter()
            .try_fold(1usize, |count, &s| count.checked_mul(s))
            .ok_or_else(|| CoreError::domain(format!("size {:?} overflows the voxel count", size)))
    }

    /// Total number of voxels.
    ///
    /// Regions built through [`Region::parse_size`] never overflow; a
    /// hand-built region whose extents do saturates at `usize::MAX`.
    pub fn number_of_voxels(&self) -> usize {
        Self::checked_voxel_count(self.size).unwrap_or(usize::MAX)
    }

    /// Half-open containment test `index_i <= c_i < index_i + size_i` on every axis.
    pub fn contains<C: GridCoordinate + ?Sized>(&self, coordinate: &C) -> bool {
        let c = coordinate.to_continuous();
        (0..3).all(|axis| {
            let start = self.index[axis] as f64;
            c[axis] >= start && c[axis] < start + self.size[axis] as f64
        })
    }

    /// Linear offset of `index` into a buffer laid out x-fastest, if inside.
    pub fn offset(&self, index: &Index3) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let [x, y, z] = [0, 1, 2].map(|axis| (index[axis] - self.index[axis]) as usize);
        Some(x + self.size[0] * (y + self.size[1] * z))
    }
}
