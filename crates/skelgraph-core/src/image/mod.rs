//! Image types and operations.
//!
//! This module provides [`ImageBuffer3D`], a dense scalar volume with
//! physical metadata, plus the layout, masking and tensor helpers built on it.

pub mod image;
pub mod layout;
pub mod mask;
pub mod metadata;
pub mod pixel;
pub mod region;
pub mod tensor;

pub use image::{BinaryImage, FloatImage, ImageBuffer3D};
pub use layout::Layout;
pub use mask::mask_image;
pub use metadata::ImageMetadata;
pub use pixel::Pixel;
pub use region::{GridCoordinate, Index3, Region, Size3};
pub use tensor::index_grid;
