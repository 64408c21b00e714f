//! Bridge between image buffers and burn tensors.
//!
//! Tensors use the `[D, H, W]` = `[size_z, size_y, size_x]` convention, which
//! matches the x-fastest voxel buffer without any permutation. Batched
//! coordinate transforms work on `[N, 3]` tensors whose rows are `(x, y, z)`.

use burn::tensor::backend::Backend;
use burn::tensor::{Shape, Tensor, TensorData};
use rayon::prelude::*;

use super::image::ImageBuffer3D;
use super::metadata::ImageMetadata;
use super::pixel::Pixel;
use super::region::{Region, Size3};
use crate::error::{CoreError, Result};

fn matrix_tensor<B: Backend>(m: [[f64; 3]; 3], device: &B::Device) -> Tensor<B, 2> {
    let data: Vec<f32> = m.iter().flatten().map(|&v| v as f32).collect();
    Tensor::from_data(TensorData::new(data, Shape::new([3, 3])), device)
}

fn row_tensor<B: Backend>(row: [f64; 3], device: &B::Device) -> Tensor<B, 2> {
    let data: Vec<f32> = row.iter().map(|&v| v as f32).collect();
    Tensor::from_data(TensorData::new(data, Shape::new([1, 3])), device)
}

/// Every voxel index of an image of the given size as an `[N, 3]` tensor,
/// rows ordered like the voxel buffer.
pub fn index_grid<B: Backend>(size: Size3, device: &B::Device) -> Tensor<B, 2> {
    let [w, h, d] = size;
    let total = w * h * d;

    let mut grid = Vec::with_capacity(total * 3);
    for z in 0..d {
        for y in 0..h {
            for x in 0..w {
                grid.push(x as f32);
                grid.push(y as f32);
                grid.push(z as f32);
            }
        }
    }

    Tensor::from_data(TensorData::new(grid, Shape::new([total, 3])), device)
}

impl<T: Pixel> ImageBuffer3D<T> {
    /// Copy the voxels into a float tensor of shape `[size_z, size_y, size_x]`.
    pub fn to_tensor<B: Backend>(&self, device: &B::Device) -> Tensor<B, 3> {
        let [w, h, d] = self.size();
        let data: Vec<f32> = self.as_slice().par_iter().map(|v| v.to_f32()).collect();
        Tensor::from_data(TensorData::new(data, Shape::new([d, h, w])), device)
    }

    /// Build an image from a `[size_z, size_y, size_x]` tensor.
    ///
    /// Values are converted with [`Pixel::from_f32`], which saturates for
    /// integer pixel types.
    pub fn from_tensor<B: Backend>(tensor: Tensor<B, 3>, metadata: ImageMetadata) -> Result<Self> {
        let [d, h, w] = tensor.dims();
        let values = tensor
            .into_data()
            .convert::<f32>()
            .to_vec::<f32>()
            .map_err(|e| CoreError::tensor(format!("{:?}", e)))?;
        let buffer = values.into_par_iter().map(T::from_f32).collect();
        Self::from_buffer(Region::from_size([w, h, d]), metadata, buffer)
    }

    /// Batch transform physical points to continuous indices.
    ///
    /// `points` has shape `[N, 3]`; so does the result.
    pub fn world_to_index_tensor<B: Backend>(&self, points: Tensor<B, 2>) -> Tensor<B, 2> {
        let device = points.device();
        let origin = row_tensor::<B>(self.origin().to_array(), &device);
        let t = matrix_tensor::<B>(self.metadata().physical_to_index_matrix(), &device);
        (points - origin).matmul(t)
    }

    /// Batch transform continuous indices to physical points.
    ///
    /// `indices` has shape `[N, 3]`; so does the result.
    pub fn index_to_world_tensor<B: Backend>(&self, indices: Tensor<B, 2>) -> Tensor<B, 2> {
        let device = indices.device();
        let origin = row_tensor::<B>(self.origin().to_array(), &device);
        let m = matrix_tensor::<B>(self.metadata().index_to_physical_matrix(), &device);
        indices.matmul(m) + origin
    }

    /// Physical point of every voxel as an `[N, 3]` tensor, in buffer order.
    pub fn physical_grid<B: Backend>(&self, device: &B::Device) -> Tensor<B, 2> {
        self.index_to_world_tensor(index_grid::<B>(self.size(), device))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{BinaryImage, FloatImage};
    use crate::spatial::{Direction, Point, Spacing};
    use burn_ndarray::NdArray;

    type Backend = NdArray<f32>;

    fn tensor_values(tensor: Tensor<Backend, 2>) -> Vec<f32> {
        tensor.into_data().to_vec::<f32>().unwrap()
    }

    #[test]
    fn test_index_grid_order() {
        let device = Default::default();
        let grid = index_grid::<Backend>([2, 1, 2], &device);
        assert_eq!(grid.dims(), [4, 3]);
        assert_eq!(
            tensor_values(grid),
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_tensor_roundtrip() {
        let device = Default::default();
        let mut image = BinaryImage::with_size([4, 3, 2]);
        image.set_pixel(&[3, 2, 1], 200).unwrap();
        image.set_pixel(&[1, 0, 0], 7).unwrap();

        let tensor = image.to_tensor::<Backend>(&device);
        assert_eq!(tensor.dims(), [2, 3, 4]);

        let back = BinaryImage::from_tensor(tensor, image.metadata().clone()).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn test_from_tensor_saturates_integers() {
        let device = Default::default();
        let tensor = Tensor::<Backend, 3>::from_floats([[[-3.0, 300.0]]], &device);
        let image = BinaryImage::from_tensor(tensor, ImageMetadata::default()).unwrap();
        assert_eq!(image.size(), [2, 1, 1]);
        assert_eq!(image.as_slice(), &[0, 255]);
    }

    #[test]
    fn test_batch_transforms_match_pointwise() {
        let device = Default::default();
        let metadata = ImageMetadata::new(
            Point::new([10.0, -5.0, 2.0]),
            Spacing::new([0.5, 2.0, 1.5]),
            Direction::from_rows([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]),
        )
        .unwrap();
        let mut image = FloatImage::with_size([4, 4, 4]);
        image.set_metadata(metadata);

        let points = Tensor::<Backend, 2>::from_floats([[1.0, 2.0, 3.0], [12.5, -4.0, 0.0]], &device);
        let indices = tensor_values(image.world_to_index_tensor(points));
        for (row, p) in [[1.0, 2.0, 3.0], [12.5, -4.0, 0.0]].iter().enumerate() {
            let expected = image.transform_physical_point_to_continuous_index(p).unwrap();
            for axis in 0..3 {
                assert!((indices[row * 3 + axis] as f64 - expected[axis]).abs() < 1e-4);
            }
        }

        let physical = tensor_values(image.physical_grid::<Backend>(&device));
        assert_eq!(physical.len(), 64 * 3);
        let expected = image.transform_index_to_physical_point(&[1, 0, 0]).unwrap();
        for axis in 0..3 {
            assert!((physical[3 + axis] as f64 - expected[axis]).abs() < 1e-4);
        }
    }
}
