//! Positions in physical space or continuous index space.

use std::ops::{Add, Index, Sub};

use nalgebra::{Point as NaPoint, SVector};
use serde::{Deserialize, Serialize};

use super::Vector;
use crate::error::{CoreError, Result};

/// A D-dimensional position.
///
/// Image origins and physical points are `Point<3>`; so are continuous
/// indices, which keep the fractional part a discrete index rounds away.
/// Differences of points are [`Vector`]s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point<const D: usize>(pub NaPoint<f64, D>);

impl<const D: usize> Point<D> {
    pub fn new(coords: [f64; D]) -> Self {
        Self(NaPoint::from(coords))
    }

    /// All coordinates zero.
    pub fn origin() -> Self {
        Self(NaPoint::origin())
    }

    /// Read exactly D coordinates from a slice.
    pub fn try_from_slice(coords: &[f64]) -> Result<Self> {
        CoreError::check_len(coords, D)?;
        Ok(Self(NaPoint::from(SVector::from_column_slice(coords))))
    }

    pub fn to_array(&self) -> [f64; D] {
        self.0.coords.into()
    }

    /// Fail unless every coordinate is finite.
    pub fn check_finite(&self) -> Result<()> {
        match self.0.coords.iter().position(|c| !c.is_finite()) {
            Some(axis) => Err(CoreError::domain(format!(
                "coordinates must be finite, axis {} has {}",
                axis, self.0.coords[axis]
            ))),
            None => Ok(()),
        }
    }
}

impl<const D: usize> From<[f64; D]> for Point<D> {
    fn from(coords: [f64; D]) -> Self {
        Self::new(coords)
    }
}

impl<const D: usize> Index<usize> for Point<D> {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.0.coords[axis]
    }
}

/// Displacement from `origin` to `self`.
impl<const D: usize> Sub for Point<D> {
    type Output = Vector<D>;

    fn sub(self, origin: Self) -> Vector<D> {
        Vector(self.0 - origin.0)
    }
}

impl<const D: usize> Add<Vector<D>> for Point<D> {
    type Output = Self;

    fn add(self, offset: Vector<D>) -> Self {
        Self(self.0 + offset.0)
    }
}
