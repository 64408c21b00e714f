//! 3D image buffer with physical metadata and coordinate transformations.
//!
//! [`ImageBuffer3D`] owns a dense x-fastest voxel buffer together with its
//! region (start index and size) and its physical metadata (origin, spacing,
//! direction).
//!
//! # Coordinate Systems
//! * **Index Space**: discrete voxel indices, or continuous indices before rounding
//! * **Physical Space**: continuous coordinates in mm or other units

use ndarray::{Array3, ArrayView2, ArrayView3};

use super::layout::Layout;
use super::metadata::ImageMetadata;
use super::pixel::Pixel;
use super::region::{GridCoordinate, Index3, Region, Size3};
use crate::error::{CoreError, Result};
use crate::spatial::{Direction, Point, Spacing};

/// Binary (thin or segmented) image.
pub type BinaryImage = ImageBuffer3D<u8>;

/// Floating point image such as a distance map.
pub type FloatImage = ImageBuffer3D<f32>;

/// Three-dimensional scalar image.
///
/// A default image is empty: zero size, zero origin, unit spacing and
/// identity direction. Metadata can be set before or after voxel data; the
/// buffer always holds exactly `size_x * size_y * size_z` voxels.
///
/// # Examples
/// ```rust
/// use skelgraph_core::image::{BinaryImage, Layout};
///
/// let mut image = BinaryImage::new();
/// image.set_size(&[50, 50, 7]).unwrap();
/// image.set_spacing(&[0.352734, 0.352734, 1.0]).unwrap();
///
/// let index = image.transform_physical_point_to_index(&[1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(index, [3, 3, 1]);
/// assert!(image.is_inside(&index));
///
/// image.set_pixel(&index, 23).unwrap();
/// let array = image.to_ndarray(Layout::ReversedAxes).unwrap();
/// assert_eq!(array.shape(), &[7, 50, 50]);
/// assert_eq!(array[[1, 3, 3]], 23);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer3D<T: Pixel> {
    region: Region,
    metadata: ImageMetadata,
    buffer: Vec<T>,
}

impl<T: Pixel> Default for ImageBuffer3D<T> {
    fn default() -> Self {
        Self {
            region: Region::default(),
            metadata: ImageMetadata::default(),
            buffer: Vec::new(),
        }
    }
}

impl<T: Pixel> ImageBuffer3D<T> {
    /// Number of spatial dimensions.
    pub const DIMENSION: usize = 3;

    /// Create an empty image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a background-filled image of the given size with default metadata.
    pub fn with_size(size: Size3) -> Self {
        Self::from_parts(Region::from_size(size), ImageMetadata::default())
    }

    /// Create a background-filled image with the given region and metadata.
    pub fn from_parts(region: Region, metadata: ImageMetadata) -> Self {
        Self {
            buffer: vec![T::default(); region.number_of_voxels()],
            region,
            metadata,
        }
    }

    /// Create an image from an x-fastest buffer.
    pub fn from_buffer(region: Region, metadata: ImageMetadata, buffer: Vec<T>) -> Result<Self> {
        if buffer.len() != region.number_of_voxels() {
            return Err(CoreError::shape([region.number_of_voxels()], [buffer.len()]));
        }
        Ok(Self {
            region,
            metadata,
            buffer,
        })
    }

    /// Always 3.
    pub fn dimension(&self) -> usize {
        Self::DIMENSION
    }

    /// Voxel extents along x, y, z.
    pub fn size(&self) -> Size3 {
        self.region.size
    }

    /// Region start index and extents.
    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn metadata(&self) -> &ImageMetadata {
        &self.metadata
    }

    pub fn origin(&self) -> &Point<3> {
        self.metadata.origin()
    }

    pub fn spacing(&self) -> &Spacing<3> {
        self.metadata.spacing()
    }

    pub fn direction(&self) -> &Direction<3> {
        self.metadata.direction()
    }

    /// Voxels in x-fastest order.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Set the extents, keeping the start index at zero.
    ///
    /// Fails for anything but three non-negative components. A changed
    /// extent reallocates a background-filled buffer.
    pub fn set_size(&mut self, size: &[i64]) -> Result<()> {
        let size = Region::parse_size(size)?;
        self.set_region_checked(Region::from_size(size))
    }

    /// Set start index and extents together.
    pub fn set_region(&mut self, index: &[i64], size: &[i64]) -> Result<()> {
        let index = Region::parse_index(index)?;
        let size = Region::parse_size(size)?;
        self.set_region_checked(Region::new(index, size))
    }

    fn set_region_checked(&mut self, region: Region) -> Result<()> {
        if region.size != self.region.size {
            let voxels = Region::checked_voxel_count(region.size)?;
            let fits = voxels
                .checked_mul(std::mem::size_of::<T>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize);
            if !fits {
                return Err(CoreError::domain(format!(
                    "size {:?} exceeds the largest allocatable buffer",
                    region.size
                )));
            }
            tracing::debug!(
                "Reallocating image buffer: {:?} -> {:?}",
                self.region.size,
                region.size
            );
            self.buffer = vec![T::default(); voxels];
        }
        self.region = region;
        Ok(())
    }

    /// Set the origin from exactly three finite coordinates.
    pub fn set_origin(&mut self, origin: &[f64]) -> Result<()> {
        self.metadata.set_origin(Point::try_from_slice(origin)?)
    }

    /// Set the spacing from exactly three positive components.
    pub fn set_spacing(&mut self, spacing: &[f64]) -> Result<()> {
        self.metadata.set_spacing(Spacing::try_from_slice(spacing)?)
    }

    /// Set the direction from an invertible 3×3 matrix.
    pub fn set_direction(&mut self, direction: ArrayView2<'_, f64>) -> Result<()> {
        self.metadata.set_direction(Direction::try_from_array(direction)?)
    }

    /// Replace all physical metadata at once.
    pub fn set_metadata(&mut self, metadata: ImageMetadata) {
        self.metadata = metadata;
    }

    /// Read the voxel at `index`.
    pub fn get_pixel(&self, index: &[i64]) -> Result<T> {
        let offset = self.checked_offset(index)?;
        Ok(self.buffer[offset])
    }

    /// Write the voxel at `index`.
    pub fn set_pixel(&mut self, index: &[i64], value: T) -> Result<()> {
        let offset = self.checked_offset(index)?;
        self.buffer[offset] = value;
        Ok(())
    }

    fn checked_offset(&self, index: &[i64]) -> Result<usize> {
        let index = Region::parse_index(index)?;
        self.region.offset(&index).ok_or_else(|| {
            CoreError::index(format!(
                "voxel {:?} outside region starting at {:?} with size {:?}",
                index, self.region.index, self.region.size
            ))
        })
    }

    /// Map a physical point to the nearest discrete index.
    ///
    /// Continuous indices are rounded half up, so 2.5 becomes 3 and -2.5
    /// becomes -2. Fails when a rounded coordinate does not fit in `i64`.
    pub fn transform_physical_point_to_index(&self, point: &[f64]) -> Result<Index3> {
        let continuous = self.transform_physical_point_to_continuous_index(point)?;
        let mut index = [0i64; 3];
        for (axis, (c, out)) in continuous.to_array().iter().zip(index.iter_mut()).enumerate() {
            let rounded = (c + 0.5).floor();
            // i64::MAX as f64 rounds up to 2^63, which is already out of range
            if !(i64::MIN as f64..i64::MAX as f64).contains(&rounded) {
                return Err(CoreError::domain(format!(
                    "continuous index {} on axis {} is outside the discrete index range",
                    c, axis
                )));
            }
            *out = rounded as i64;
        }
        Ok(index)
    }

    /// Map a physical point to a continuous index.
    ///
    /// Fails for NaN or infinite coordinates.
    pub fn transform_physical_point_to_continuous_index(&self, point: &[f64]) -> Result<Point<3>> {
        let point = Point::try_from_slice(point)?;
        point.check_finite()?;
        Ok(self.metadata.physical_to_index(&point))
    }

    /// Map a discrete index to its physical point.
    pub fn transform_index_to_physical_point(&self, index: &[i64]) -> Result<Point<3>> {
        let index = Region::parse_index(index)?;
        Ok(self.metadata.index_to_physical(index.to_continuous()))
    }

    /// Map a continuous index to a physical point.
    pub fn transform_continuous_index_to_physical_point(&self, index: &Point<3>) -> Point<3> {
        self.metadata.index_to_physical(index.to_array())
    }

    /// True iff every coordinate lies in `[start_i, start_i + size_i)`.
    ///
    /// Accepts discrete indices and continuous indices alike.
    pub fn is_inside<C: GridCoordinate + ?Sized>(&self, index: &C) -> bool {
        self.region.contains(index)
    }

    /// Export the voxels as a dense array with the given axis order.
    pub fn to_ndarray(&self, layout: Layout) -> Result<Array3<T>> {
        tracing::debug!("Exporting image of size {:?} with layout {}", self.size(), layout);
        layout.export(self.size(), self.buffer.clone())
    }

    /// Replace size and voxels with the contents of `array`.
    ///
    /// The array is read in the given axis order; origin, spacing and
    /// direction are kept and the start index is reset to zero.
    pub fn import_ndarray(&mut self, array: ArrayView3<'_, T>, layout: Layout) -> Result<()> {
        let (size, buffer) = layout.import(array);
        if size != self.size() && self.region.number_of_voxels() > 0 {
            tracing::warn!(
                "Imported array replaces image of size {:?} with size {:?}",
                self.size(),
                size
            );
        }
        tracing::debug!("Imported image of size {:?} with layout {}", size, layout);
        self.region = Region::from_size(size);
        self.buffer = buffer;
        Ok(())
    }

    /// Build a new image from `array`, with default metadata.
    pub fn from_ndarray(array: ArrayView3<'_, T>, layout: Layout) -> Result<Self> {
        let mut image = Self::new();
        image.import_ndarray(array, layout)?;
        Ok(image)
    }
}
