//! Physical-space metadata of a 3D image.
//!
//! Origin, spacing and direction define the affine map between voxel
//! indices and physical points. Setters validate eagerly so the map is
//! always invertible.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::spatial::{Direction, Point, Spacing, Vector};

/// Image metadata containing physical space information.
///
/// Serializes as plain arrays (`origin`, `spacing`, row-major `direction`);
/// deserialization runs the same validation as the setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MetadataRecord", into = "MetadataRecord")]
pub struct ImageMetadata {
    /// Physical coordinate of the voxel at index (0, 0, 0).
    origin: Point<3>,
    /// Physical distance between voxel centers along each axis.
    spacing: Spacing<3>,
    /// Orientation of the image axes.
    direction: Direction<3>,
    /// Cached inverse of `direction`.
    inverse_direction: Direction<3>,
}

impl ImageMetadata {
    /// Create validated image metadata.
    pub fn new(origin: Point<3>, spacing: Spacing<3>, direction: Direction<3>) -> Result<Self> {
        origin.check_finite()?;
        spacing.validate()?;
        let inverse_direction = direction.inverse()?;
        Ok(Self {
            origin,
            spacing,
            direction,
            inverse_direction,
        })
    }

    /// Get the origin.
    pub fn origin(&self) -> &Point<3> {
        &self.origin
    }

    /// Get the spacing.
    pub fn spacing(&self) -> &Spacing<3> {
        &self.spacing
    }

    /// Get the direction.
    pub fn direction(&self) -> &Direction<3> {
        &self.direction
    }

    /// Set the origin, rejecting NaN or infinite coordinates.
    pub fn set_origin(&mut self, origin: Point<3>) -> Result<()> {
        origin.check_finite()?;
        self.origin = origin;
        Ok(())
    }

    /// Set the spacing, rejecting non-positive or non-finite components.
    pub fn set_spacing(&mut self, spacing: Spacing<3>) -> Result<()> {
        spacing.validate()?;
        self.spacing = spacing;
        Ok(())
    }

    /// Set the direction, rejecting singular matrices.
    pub fn set_direction(&mut self, direction: Direction<3>) -> Result<()> {
        self.inverse_direction = direction.inverse()?;
        self.direction = direction;
        Ok(())
    }

    /// Map a continuous index to a physical point.
    ///
    /// `point = origin + Direction * (index * spacing)`
    pub fn index_to_physical(&self, index: [f64; 3]) -> Point<3> {
        let scaled = Vector::new(index).component_mul(&self.spacing);
        self.origin + self.direction * scaled
    }

    /// Map a physical point to a continuous index.
    ///
    /// `index = (Direction^-1 * (point - origin)) / spacing`
    pub fn physical_to_index(&self, point: &Point<3>) -> Point<3> {
        let rotated = self.inverse_direction * (*point - self.origin);
        Point(rotated.component_div(&self.spacing).0.into())
    }

    /// Row-major matrix taking `[N, 3]` rows of continuous indices to
    /// physical offsets: `M[r][c] = spacing_r * direction[c][r]`.
    pub(crate) fn index_to_physical_matrix(&self) -> [[f64; 3]; 3] {
        let mut m = [[0.0; 3]; 3];
        for (r, row) in m.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.spacing[r] * self.direction[(c, r)];
            }
        }
        m
    }

    /// Row-major matrix taking `[N, 3]` rows of physical offsets to
    /// continuous indices: `T[r][c] = inverse_direction[c][r] / spacing_c`.
    pub(crate) fn physical_to_index_matrix(&self) -> [[f64; 3]; 3] {
        let mut t = [[0.0; 3]; 3];
        for (r, row) in t.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.inverse_direction[(c, r)] / self.spacing[c];
            }
        }
        t
    }
}

impl Default for ImageMetadata {
    /// Identity transform, unit spacing, zero origin.
    fn default() -> Self {
        Self {
            origin: Point::origin(),
            spacing: Spacing::uniform(1.0),
            direction: Direction::identity(),
            inverse_direction: Direction::identity(),
        }
    }
}

/// Plain serialized form of [`ImageMetadata`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MetadataRecord {
    origin: [f64; 3],
    spacing: [f64; 3],
    direction: [[f64; 3]; 3],
}

impl TryFrom<MetadataRecord> for ImageMetadata {
    type Error = CoreError;

    fn try_from(record: MetadataRecord) -> Result<Self> {
        Self::new(
            Point::new(record.origin),
            Spacing::new(record.spacing),
            Direction::from_rows(record.direction),
        )
    }
}

impl From<ImageMetadata> for MetadataRecord {
    fn from(metadata: ImageMetadata) -> Self {
        Self {
            origin: metadata.origin.to_array(),
            spacing: [metadata.spacing[0], metadata.spacing[1], metadata.spacing[2]],
            direction: metadata.direction.to_rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Point3 = Point<3>;
    type Spacing3 = Spacing<3>;
    type Direction3 = Direction<3>;

    fn assert_close(a: &Point3, b: [f64; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-9, "axis {}: {} vs {}", i, a[i], b[i]);
        }
    }

    #[test]
    fn test_metadata_default() {
        let metadata = ImageMetadata::default();
        assert_eq!(metadata.origin(), &Point3::origin());
        assert_eq!(metadata.spacing(), &Spacing3::uniform(1.0));
        assert_eq!(metadata.direction(), &Direction3::identity());
    }

    #[test]
    fn test_metadata_rejects_invalid_geometry() {
        let mut metadata = ImageMetadata::default();
        assert!(matches!(
            metadata.set_spacing(Spacing3::new([1.0, 0.0, 1.0])),
            Err(CoreError::Domain(_))
        ));
        assert_eq!(metadata.spacing(), &Spacing3::uniform(1.0));

        let singular = Direction3::from_rows([[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(metadata.set_direction(singular).is_err());
        assert_eq!(metadata.direction(), &Direction3::identity());

        assert!(matches!(
            metadata.set_origin(Point3::new([f64::NAN, 0.0, 0.0])),
            Err(CoreError::Domain(_))
        ));
        assert!(metadata.set_origin(Point3::new([0.0, 0.0, f64::INFINITY])).is_err());
        assert_eq!(metadata.origin(), &Point3::origin());
    }

    #[test]
    fn test_metadata_transforms() {
        let mut metadata = ImageMetadata::default();
        metadata.set_origin(Point3::new([10.0, 20.0, 30.0])).unwrap();
        metadata.set_spacing(Spacing3::new([2.0, 2.0, 2.0])).unwrap();

        let index = metadata.physical_to_index(&Point3::new([20.0, 30.0, 40.0]));
        assert_close(&index, [5.0, 5.0, 5.0]);
        assert_close(&metadata.index_to_physical([5.0, 5.0, 5.0]), [20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_metadata_transforms_with_rotation() {
        let mut metadata = ImageMetadata::default();
        // 90 degrees around Z: x -> y, y -> -x
        metadata
            .set_direction(Direction3::from_rows([
                [0.0, -1.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0],
            ]))
            .unwrap();

        let index = metadata.physical_to_index(&Point3::new([1.0, 0.0, 0.0]));
        assert_close(&index, [0.0, -1.0, 0.0]);
        assert_close(&metadata.index_to_physical([0.0, -1.0, 0.0]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_metadata_serde_roundtrip() {
        let metadata = ImageMetadata::new(
            Point3::new([1.0, 2.0, 0.0]),
            Spacing3::new([0.352734, 0.352734, 1.0]),
            Direction3::from_rows([[1.0, 1.0, 0.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]]),
        )
        .unwrap();
        let json = serde_json::to_string(&metadata).unwrap();
        let back: ImageMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metadata);
    }

    #[test]
    fn test_metadata_deserialize_validates() {
        let json = r#"{
            "origin": [0.0, 0.0, 0.0],
            "spacing": [1.0, -1.0, 1.0],
            "direction": [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
        }"#;
        let err = serde_json::from_str::<ImageMetadata>(json).unwrap_err();
        assert!(err.to_string().contains("spacing must be positive"));
    }
}
