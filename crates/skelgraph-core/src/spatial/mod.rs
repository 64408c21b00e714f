//! Spatial types for representing points, vectors, spacing, and direction matrices.
//!
//! These are thin wrappers over nalgebra used for image geometry. Image code
//! uses them at `D = 3`; the types stay generic over the dimension.

pub mod point;
pub mod vector;
pub mod spacing;
pub mod direction;

pub use point::Point;
pub use vector::Vector;
pub use spacing::Spacing;
pub use direction::Direction;
