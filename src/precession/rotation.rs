//! Elementary frame rotations
//!
//! Rotations are active (they turn vectors counter-clockwise about the
//! positive axis) and built entry by entry so that a zero angle yields the
//! identity matrix exactly.

use crate::coordinates::cartesian::Cartesian3;
use crate::framelib::InertialFrame;
use nalgebra::{Matrix3, Rotation3};

/// Rotation about the x-axis
pub(crate) fn rot_x(angle: f64) -> Rotation3<f64> {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0,   c,  -s,
        0.0,   s,   c,
    );
    Rotation3::from_matrix_unchecked(m)
}

/// Rotation about the y-axis
pub(crate) fn rot_y(angle: f64) -> Rotation3<f64> {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
          c, 0.0,   s,
        0.0, 1.0, 0.0,
         -s, 0.0,   c,
    );
    Rotation3::from_matrix_unchecked(m)
}

/// Rotation about the z-axis
pub(crate) fn rot_z(angle: f64) -> Rotation3<f64> {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
          c,  -s, 0.0,
          s,   c, 0.0,
        0.0, 0.0, 1.0,
    );
    Rotation3::from_matrix_unchecked(m)
}

/// Rotate a spherical position through its unit vector
pub(crate) fn rotate<F: InertialFrame>(rotation: &Rotation3<f64>, position: &F) -> F {
    let v = rotation * position.to_cartesian().to_vector3();
    F::from_cartesian(Cartesian3::from_vector3(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_zero_angle_is_exact_identity() {
        for r in [rot_x(0.0), rot_y(0.0), rot_z(0.0)] {
            assert_eq!(r.matrix(), &Matrix3::identity());
        }
    }

    #[test]
    fn test_rotations_are_active() {
        let x = nalgebra::Vector3::new(1.0, 0.0, 0.0);
        let y = rot_z(PI / 2.0) * x;
        assert_relative_eq!(y, nalgebra::Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);

        let z = nalgebra::Vector3::new(0.0, 0.0, 1.0);
        let x_back = rot_y(PI / 2.0) * z;
        assert_relative_eq!(x_back, x, epsilon = 1e-15);

        let y_axis = nalgebra::Vector3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(rot_x(PI / 2.0) * y_axis, z, epsilon = 1e-15);
    }

    #[test]
    fn test_composition_is_orthonormal() {
        let r = rot_z(0.3) * rot_y(-1.1) * rot_x(2.7);
        let product = r.matrix().transpose() * r.matrix();
        assert_relative_eq!(product, Matrix3::identity(), epsilon = 1e-15);
        assert_relative_eq!(r.matrix().determinant(), 1.0, epsilon = 1e-15);
    }
}
