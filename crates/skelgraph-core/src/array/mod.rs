//! Fixed three-component arrays and the free geometry functions over them.
//!
//! [`Array3D`] only exposes data access. Norms, products, angles and
//! arithmetic live in [`utilities`] as free functions so the value type
//! stays minimal.

pub mod array3d;
pub mod utilities;

pub use array3d::Array3D;
pub use utilities::{
    angle, cos_director, cross_product, distance, dot_product, minus, minus_scalar, negate,
    negate_in_place, norm, plus, plus_scalar,
};
