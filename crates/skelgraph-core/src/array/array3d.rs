//! The `Array3D` value type.

use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::spatial::Point;

/// Three numeric components addressable as `x`, `y`, `z` or by index 0, 1, 2.
///
/// Equality and ordering are derived over the fields in declaration order,
/// so `a < b` compares `x` first, then `y`, then `z` (lexicographic, not by
/// magnitude).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Array3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Array3D {
    /// Number of components of every `Array3D`.
    pub const LEN: usize = 3;

    /// Create an array from its three components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Read component `i`, failing for `i` outside 0..3.
    pub fn get(&self, i: usize) -> Result<f64> {
        match i {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(Self::out_of_range(i)),
        }
    }

    /// Write component `i`, failing for `i` outside 0..3.
    pub fn set(&mut self, i: usize, value: f64) -> Result<()> {
        *self.component_mut(i).ok_or_else(|| Self::out_of_range(i))? = value;
        Ok(())
    }

    /// Always 3.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        Self::LEN
    }

    /// Set every component to `value`.
    pub fn fill(&mut self, value: f64) {
        *self = Self::new(value, value, value);
    }

    /// Iterate over copies of the components in index order.
    ///
    /// The iterator owns its values; nothing yielded aliases `self`.
    pub fn iter(&self) -> std::array::IntoIter<f64, 3> {
        self.to_array().into_iter()
    }

    /// Components as a fixed array.
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    fn component_mut(&mut self, i: usize) -> Option<&mut f64> {
        match i {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            2 => Some(&mut self.z),
            _ => None,
        }
    }

    fn out_of_range(i: usize) -> CoreError {
        CoreError::index(format!("component {} out of range 0..{}", i, Self::LEN))
    }
}

impl std::ops::Index<usize> for Array3D {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Array3D index {} out of range 0..3", index),
        }
    }
}

impl std::ops::IndexMut<usize> for Array3D {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.component_mut(index)
            .unwrap_or_else(|| panic!("Array3D index {} out of range 0..3", index))
    }
}

impl IntoIterator for Array3D {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Array3D {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<[f64; 3]> for Array3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Array3D> for [f64; 3] {
    fn from(a: Array3D) -> Self {
        a.to_array()
    }
}

impl From<Array3D> for Vector3<f64> {
    fn from(a: Array3D) -> Self {
        Vector3::new(a.x, a.y, a.z)
    }
}

impl From<Vector3<f64>> for Array3D {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point<3>> for Array3D {
    fn from(p: Point<3>) -> Self {
        Self::from(p.to_array())
    }
}

impl fmt::Display for Array3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl std::ops::Add for Array3D {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        super::plus(&self, &other)
    }
}

impl std::ops::Sub for Array3D {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        super::minus(&self, &other)
    }
}

impl std::ops::Mul<f64> for Array3D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Neg for Array3D {
    type Output = Self;

    fn neg(self) -> Self::Output {
        super::negate(&self)
    }
}
