//! Free geometry functions over [`Array3D`].
//!
//! All functions are pure except [`negate_in_place`], which mutates the
//! array it is given and hands the same array back.

use nalgebra::Vector3;

use super::Array3D;
use crate::error::{CoreError, Result};

fn as_vector(a: &Array3D) -> Vector3<f64> {
    Vector3::from(*a)
}

/// Euclidean length.
pub fn norm(a: &Array3D) -> f64 {
    as_vector(a).norm()
}

/// Euclidean distance between two positions.
pub fn distance(a: &Array3D, b: &Array3D) -> f64 {
    norm(&minus(a, b))
}

pub fn dot_product(a: &Array3D, b: &Array3D) -> f64 {
    as_vector(a).dot(&as_vector(b))
}

pub fn cross_product(a: &Array3D, b: &Array3D) -> Array3D {
    as_vector(a).cross(&as_vector(b)).into()
}

/// Cosine of the angle between `a` and `b`.
///
/// Fails when either operand is the zero vector.
pub fn cos_director(a: &Array3D, b: &Array3D) -> Result<f64> {
    let norms = norm(a) * norm(b);
    if norms == 0.0 {
        return Err(CoreError::domain(format!(
            "direction cosine undefined for zero vector ({}, {})",
            a, b
        )));
    }
    Ok(dot_product(a, b) / norms)
}

/// Angle between `a` and `b` in radians, in `[0, pi]`.
///
/// Fails when either operand is the zero vector.
pub fn angle(a: &Array3D, b: &Array3D) -> Result<f64> {
    // rounding can push the cosine of parallel vectors past 1
    Ok(cos_director(a, b)?.clamp(-1.0, 1.0).acos())
}

pub fn plus(a: &Array3D, b: &Array3D) -> Array3D {
    Array3D::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

pub fn minus(a: &Array3D, b: &Array3D) -> Array3D {
    Array3D::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Add `scalar` to every component.
pub fn plus_scalar(a: &Array3D, scalar: f64) -> Array3D {
    Array3D::new(a.x + scalar, a.y + scalar, a.z + scalar)
}

/// Subtract `scalar` from every component.
pub fn minus_scalar(a: &Array3D, scalar: f64) -> Array3D {
    Array3D::new(a.x - scalar, a.y - scalar, a.z - scalar)
}

/// New array with every component sign-flipped; `a` is left untouched.
pub fn negate(a: &Array3D) -> Array3D {
    Array3D::new(-a.x, -a.y, -a.z)
}

/// Flip the sign of every component of `a` and return `a` itself.
pub fn negate_in_place(a: &mut Array3D) -> &mut Array3D {
    *a = negate(a);
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPS: f64 = 1e-12;

    #[test]
    fn test_norm_and_distance() {
        let a1 = Array3D::new(1.0, 1.0, 1.0);
        let ax = Array3D::new(1.0, 0.0, 0.0);
        assert!((norm(&a1) - 3.0_f64.sqrt()).abs() < EPS);
        assert!((norm(&Array3D::new(3.0, 4.0, 0.0)) - 5.0).abs() < EPS);
        assert!((distance(&a1, &ax) - 2.0_f64.sqrt()).abs() < EPS);
        assert_eq!(distance(&a1, &a1), 0.0);
    }

    #[test]
    fn test_products() {
        let a1 = Array3D::new(1.0, 1.0, 1.0);
        let ax = Array3D::new(1.0, 0.0, 0.0);
        assert_eq!(dot_product(&a1, &ax), 1.0);
        assert_eq!(cross_product(&a1, &ax), Array3D::new(0.0, 1.0, -1.0));

        let ey = Array3D::new(0.0, 1.0, 0.0);
        assert_eq!(cross_product(&ax, &ey), Array3D::new(0.0, 0.0, 1.0));
        assert_eq!(cross_product(&ey, &ax), Array3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_angle_and_cos_director() {
        let ax = Array3D::new(1.0, 0.0, 0.0);
        let ey = Array3D::new(0.0, 1.0, 0.0);
        let diagonal = Array3D::new(1.0, 1.0, 0.0);

        assert!((angle(&ax, &ey).unwrap() - FRAC_PI_2).abs() < EPS);
        assert!((angle(&ax, &diagonal).unwrap() - FRAC_PI_4).abs() < EPS);
        assert!(cos_director(&ax, &ey).unwrap().abs() < EPS);
        assert!((cos_director(&ax, &diagonal).unwrap() - FRAC_PI_4.cos()).abs() < EPS);

        let a1 = Array3D::new(1.0, 1.0, 1.0);
        assert!((cos_director(&a1, &ax).unwrap() - 1.0 / 3.0_f64.sqrt()).abs() < EPS);

        // parallel vectors do not produce NaN
        let tilted = Array3D::new(0.1, 0.7, 0.3);
        let parallel = angle(&tilted, &(tilted * 3.0)).unwrap();
        assert!(!parallel.is_nan());
        assert!(parallel < 1e-6);
    }

    #[test]
    fn test_angle_with_zero_vector_fails() {
        let zero = Array3D::default();
        let ax = Array3D::new(1.0, 0.0, 0.0);
        assert!(matches!(angle(&zero, &ax), Err(CoreError::Domain(_))));
        assert!(matches!(cos_director(&ax, &zero), Err(CoreError::Domain(_))));
    }

    #[test]
    fn test_elementwise_arithmetic() {
        let a1 = Array3D::new(1.0, 1.0, 1.0);
        let ax = Array3D::new(1.0, 0.0, 0.0);
        assert_eq!(plus(&a1, &ax), Array3D::new(2.0, 1.0, 1.0));
        assert_eq!(minus(&a1, &ax), Array3D::new(0.0, 1.0, 1.0));
        assert_eq!(plus_scalar(&a1, 1.0), Array3D::new(2.0, 2.0, 2.0));
        assert_eq!(minus_scalar(&a1, 1.0), Array3D::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_negate_leaves_input_untouched() {
        let a1 = Array3D::new(1.0, 2.0, 3.0);
        let negated = negate(&a1);
        for i in 0..3 {
            assert_eq!(negated[i], -a1[i]);
        }
        assert_eq!(a1, Array3D::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_negate_in_place_returns_same_array() {
        let mut ax = Array3D::new(1.0, 0.0, 0.0);
        let ptr: *const Array3D = &ax;
        let returned = negate_in_place(&mut ax);
        assert!(std::ptr::eq(returned, ptr));
        assert_eq!(ax[0], -1.0);
        assert_eq!(ax, Array3D::new(-1.0, -0.0, -0.0));
    }
}
