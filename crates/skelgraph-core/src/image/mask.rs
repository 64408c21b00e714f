//! Masking one image by another of the same size.

use rayon::prelude::*;

use super::image::ImageBuffer3D;
use super::pixel::Pixel;
use crate::error::{CoreError, Result};

/// Keep the voxels of `image` where `mask` is foreground, background elsewhere.
///
/// Both images must have the same size. The result carries the region and
/// metadata of `image`. Typical use is restricting a distance map to the
/// voxels of its thin image.
pub fn mask_image<T: Pixel, M: Pixel>(
    image: &ImageBuffer3D<T>,
    mask: &ImageBuffer3D<M>,
) -> Result<ImageBuffer3D<T>> {
    if image.size() != mask.size() {
        return Err(CoreError::shape(image.size(), mask.size()));
    }

    let masked: Vec<T> = image
        .as_slice()
        .par_iter()
        .zip(mask.as_slice().par_iter())
        .map(|(&value, &m)| if m.is_foreground() { value } else { T::default() })
        .collect();

    ImageBuffer3D::from_buffer(*image.region(), image.metadata().clone(), masked)
}
