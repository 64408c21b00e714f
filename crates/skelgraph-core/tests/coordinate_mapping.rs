use burn::tensor::{Shape, Tensor, TensorData};
use burn_ndarray::NdArray;
use nalgebra::Rotation3;
use proptest::prelude::*;
use skelgraph_core::array::Array3D;
use skelgraph_core::image::{FloatImage, ImageMetadata, Layout};
use skelgraph_core::{Direction, Point, Spacing};

type Backend = NdArray<f32>;

fn make_rotation(angle_x: f64, angle_y: f64, angle_z: f64) -> Direction<3> {
    let rotation = Rotation3::from_euler_angles(angle_x, angle_y, angle_z);
    Direction(*rotation.matrix())
}

fn make_image(origin: [f64; 3], spacing: [f64; 3], direction: Direction<3>) -> FloatImage {
    let metadata = ImageMetadata::new(Point::new(origin), Spacing::new(spacing), direction).unwrap();
    let mut image = FloatImage::with_size([4, 3, 2]);
    image.set_metadata(metadata);
    image
}

proptest! {
    #[test]
    fn test_coordinate_roundtrip(
        ox in -100.0f64..100.0, oy in -100.0f64..100.0, oz in -100.0f64..100.0,
        sx in 0.1f64..5.0, sy in 0.1f64..5.0, sz in 0.1f64..5.0,
        ax in -3.0f64..3.0, ay in -3.0f64..3.0, az in -3.0f64..3.0,
        px in -50.0f64..50.0, py in -50.0f64..50.0, pz in -50.0f64..50.0
    ) {
        let image = make_image([ox, oy, oz], [sx, sy, sz], make_rotation(ax, ay, az));

        let continuous = image.transform_physical_point_to_continuous_index(&[px, py, pz]).unwrap();
        let back = image.transform_continuous_index_to_physical_point(&continuous);

        prop_assert!((back[0] - px).abs() < 1e-6);
        prop_assert!((back[1] - py).abs() < 1e-6);
        prop_assert!((back[2] - pz).abs() < 1e-6);
    }

    #[test]
    fn test_discrete_index_roundtrip(
        ix in -20i64..20, iy in -20i64..20, iz in -20i64..20,
        sx in 0.1f64..5.0, sy in 0.1f64..5.0, sz in 0.1f64..5.0,
        angle in -3.0f64..3.0
    ) {
        let image = make_image([1.0, -2.0, 3.0], [sx, sy, sz], make_rotation(0.0, 0.0, angle));

        let point = image.transform_index_to_physical_point(&[ix, iy, iz]).unwrap();
        let index = image.transform_physical_point_to_index(&point.to_array()).unwrap();
        prop_assert_eq!(index, [ix, iy, iz]);
    }

    #[test]
    fn test_layout_roundtrip(
        sx in 1usize..6, sy in 1usize..6, sz in 1usize..6,
        natural in any::<bool>(),
        seed in any::<u16>()
    ) {
        let layout = if natural { Layout::NaturalAxes } else { Layout::ReversedAxes };
        let mut image = FloatImage::with_size([sx, sy, sz]);
        let marked = [
            (seed as usize) % sx,
            (seed as usize / 7) % sy,
            (seed as usize / 49) % sz,
        ];
        let marked = marked.map(|v| v as i64);
        image.set_pixel(&marked, 1.0).unwrap();

        let array = image.to_ndarray(layout).unwrap();
        prop_assert_eq!(array.shape(), &layout.array_shape([sx, sy, sz])[..]);

        let copy = FloatImage::from_ndarray(array.view(), layout).unwrap();
        prop_assert_eq!(copy.size(), [sx, sy, sz]);
        prop_assert_eq!(copy.get_pixel(&marked).unwrap(), 1.0);
        prop_assert_eq!(copy.as_slice(), image.as_slice());
    }

    #[test]
    fn test_ordering_matches_array_comparison(
        a in prop::array::uniform3(-3i32..3),
        b in prop::array::uniform3(-3i32..3)
    ) {
        let fa = a.map(f64::from);
        let fb = b.map(f64::from);
        prop_assert_eq!(Array3D::from(fa).partial_cmp(&Array3D::from(fb)), fa.partial_cmp(&fb));
    }
}

#[test]
fn test_tensor_transforms_match_scalar_path() {
    let device = Default::default();
    let image = make_image([10.0, -5.0, 2.0], [0.5, 1.5, 2.0], make_rotation(0.3, -0.2, 1.1));

    let points = [[1.0f64, 2.0, 3.0], [-4.0, 0.5, 7.25]];
    let data: Vec<f32> = points.iter().flatten().map(|&v| v as f32).collect();
    let tensor = Tensor::<Backend, 2>::from_data(TensorData::new(data, Shape::new([2, 3])), &device);

    let indices = image.world_to_index_tensor(tensor.clone());
    let values = indices.clone().into_data().to_vec::<f32>().unwrap();
    for (row, point) in points.iter().enumerate() {
        let expected = image.transform_physical_point_to_continuous_index(point).unwrap();
        for axis in 0..3 {
            assert!((values[row * 3 + axis] as f64 - expected[axis]).abs() < 1e-3);
        }
    }

    let back = image.index_to_world_tensor(indices).into_data().to_vec::<f32>().unwrap();
    let original = tensor.into_data().to_vec::<f32>().unwrap();
    for (b, o) in back.iter().zip(original.iter()) {
        assert!((b - o).abs() < 1e-3);
    }
}
