//! Scalar voxel types.

use std::fmt::Debug;

/// A scalar voxel value.
///
/// `Default` is the background value: a freshly allocated buffer is filled
/// with it and masking treats any other value as foreground. Conversions
/// through `f32` back the tensor bridge; `from_f32` saturates for integer
/// types.
pub trait Pixel: Copy + Default + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    fn to_f32(self) -> f32;
    fn from_f32(value: f32) -> Self;

    /// True for any value other than the background.
    fn is_foreground(self) -> bool {
        self != Self::default()
    }
}

macro_rules! impl_pixel {
    ($($t:ty),*) => {
        $(
            impl Pixel for $t {
                fn to_f32(self) -> f32 {
                    self as f32
                }

                fn from_f32(value: f32) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_pixel!(u8, u16, i16, u32, i32, f32, f64);
