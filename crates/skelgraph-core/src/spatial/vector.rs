//! Displacements between points, and per-axis quantities such as spacing.

use std::ops::{Add, Index, Mul, Sub};

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A D-dimensional displacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector<const D: usize>(pub SVector<f64, D>);

impl<const D: usize> Vector<D> {
    pub fn new(components: [f64; D]) -> Self {
        Self(SVector::from(components))
    }

    /// Read exactly D components from a slice.
    pub fn try_from_slice(components: &[f64]) -> Result<Self> {
        CoreError::check_len(components, D)?;
        Ok(Self(SVector::from_column_slice(components)))
    }

    /// Per-axis product, e.g. a continuous index scaled by spacing.
    pub fn component_mul(&self, other: &Self) -> Self {
        Self(self.0.component_mul(&other.0))
    }

    /// Per-axis quotient, e.g. a physical offset divided by spacing.
    pub fn component_div(&self, other: &Self) -> Self {
        Self(self.0.component_div(&other.0))
    }

    pub fn norm(&self) -> f64 {
        self.0.norm()
    }
}

impl<const D: usize> Index<usize> for Vector<D> {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.0[axis]
    }
}

impl<const D: usize> Add for Vector<D> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<const D: usize> Sub for Vector<D> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl<const D: usize> Mul<f64> for Vector<D> {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self(self.0 * scalar)
    }
}
