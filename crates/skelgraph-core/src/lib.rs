//! Core types for skeleton and spatial-graph analysis of 3D images.
//!
//! * [`array`]: the fixed three-component [`Array3D`] and free geometry functions
//! * [`spatial`]: points, vectors, spacing and direction matrices over nalgebra
//! * [`image`]: [`ImageBuffer3D`], a dense scalar volume with physical metadata
//! * [`polyline`]: length and ordering helpers for edge points

pub mod array;
pub mod error;
pub mod image;
pub mod polyline;
pub mod spatial;

pub use array::Array3D;
pub use error::{CoreError, Result};
pub use image::{BinaryImage, FloatImage, ImageBuffer3D, Layout};
pub use spatial::{Direction, Point, Spacing, Vector};
