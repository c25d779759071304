//! Pose6 ↔ homogeneous transform conversion.
//!
//! KUKA A-B-C is the intrinsic Z-Y'-X'' Euler convention:
//! - A: rotation around Z (first)
//! - B: rotation around Y' (second)
//! - C: rotation around X'' (third)
//!
//! so the rotation block is `R = Rz(A) · Ry(B) · Rx(C)`:
//!
//! ```text
//!     | cA·cB   cA·sB·sC − sA·cC   cA·sB·cC + sA·sC |
//! R = | sA·cB   sA·sB·sC + cA·cC   sA·sB·cC − cA·sC |
//!     | −sB     cB·sC              cB·cC            |
//! ```

use nalgebra::{Matrix4, Point3, Rotation3, Vector3};
use tracing::trace;

use crate::error::PoseError;
use crate::pose::Pose6;

/// 4x4 homogeneous transform. Rotation in the top-left 3x3 block,
/// translation in the last column, bottom row `[0, 0, 0, 1]`.
pub type Transform = Matrix4<f64>;

/// Below this value of `sqrt(T00² + T10²)` B is treated as ±90°.
pub const SINGULARITY_THRESHOLD: f64 = 1e-6;

/// Build the homogeneous transform of a pose.
pub fn to_transform(pose: &Pose6) -> Transform {
    let a = pose.a.to_radians();
    let b = pose.b.to_radians();
    let c = pose.c.to_radians();

    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), a);
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), b);
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), c);
    let rotation = rz * ry * rx;

    trace!("[to_transform] {:?}", pose);

    Matrix4::new_translation(&Vector3::new(pose.x, pose.y, pose.z)) * rotation.to_homogeneous()
}

/// Recover X, Y, Z, A, B, C from a homogeneous transform.
///
/// # Gimbal Lock
/// When B = ±90°, A and C rotate about the same axis and only their
/// difference (B = +90°) or sum (B = −90°) is defined. C is pinned to 0
/// and the combined rotation is reported in A, so that feeding the result
/// back into [`to_transform`] gives the same matrix.
pub fn from_transform(t: &Transform) -> Pose6 {
    let sy = (t[(0, 0)] * t[(0, 0)] + t[(1, 0)] * t[(1, 0)]).sqrt();

    let (a, b, c) = if sy >= SINGULARITY_THRESHOLD {
        (
            t[(1, 0)].atan2(t[(0, 0)]),
            (-t[(2, 0)]).atan2(sy),
            t[(2, 1)].atan2(t[(2, 2)]),
        )
    } else {
        // With C = 0: T01 = −sin(A'), T11 = cos(A') for both signs of B.
        (
            (-t[(0, 1)]).atan2(t[(1, 1)]),
            (-t[(2, 0)]).atan2(sy),
            0.0,
        )
    };

    Pose6::new(
        t[(0, 3)],
        t[(1, 3)],
        t[(2, 3)],
        a.to_degrees(),
        b.to_degrees(),
        c.to_degrees(),
    )
}

/// Exact inverse of a homogeneous transform.
///
/// Uses the general 4x4 inverse so it stays correct for any invertible
/// input, not only rigid ones.
pub fn invert(t: &Transform) -> Result<Transform, PoseError> {
    t.try_inverse().ok_or(PoseError::NotInvertible)
}

/// Translation column as a point.
pub fn translation(t: &Transform) -> Point3<f64> {
    Point3::new(t[(0, 3)], t[(1, 3)], t[(2, 3)])
}

/// Column `k` (0 = X, 1 = Y, 2 = Z) of the rotation block.
pub fn axis(t: &Transform, k: usize) -> Vector3<f64> {
    Vector3::new(t[(0, k)], t[(1, k)], t[(2, k)])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;
    const ANGLE_TOLERANCE: f64 = 1e-6; // degrees

    fn assert_matrix_close(lhs: &Transform, rhs: &Transform, tol: f64) {
        for r in 0..4 {
            for c in 0..4 {
                assert!(
                    (lhs[(r, c)] - rhs[(r, c)]).abs() < tol,
                    "element ({}, {}) differs: {} vs {}",
                    r,
                    c,
                    lhs[(r, c)],
                    rhs[(r, c)]
                );
            }
        }
    }

    #[test]
    fn test_zero_pose_is_identity() {
        let t = to_transform(&Pose6::default());
        assert_matrix_close(&t, &Transform::identity(), TOLERANCE);
    }

    #[test]
    fn test_translation_column_and_bottom_row() {
        let t = to_transform(&Pose6::new(101.0, -20.0, 2200.0, 90.0, -10.0, -90.0));
        assert_eq!(translation(&t), Point3::new(101.0, -20.0, 2200.0));
        assert_eq!(t[(3, 0)], 0.0);
        assert_eq!(t[(3, 1)], 0.0);
        assert_eq!(t[(3, 2)], 0.0);
        assert_eq!(t[(3, 3)], 1.0);
    }

    #[test]
    fn test_a_rotates_about_z() {
        let t = to_transform(&Pose6::new(0.0, 0.0, 0.0, 90.0, 0.0, 0.0));
        let x = axis(&t, 0);
        assert!((x - Vector3::y()).norm() < TOLERANCE, "X axis should map to +Y, got {:?}", x);
    }

    #[test]
    fn test_rotation_order_is_z_then_y_then_x() {
        // Rz(90)·Rx(90) sends Z to +X; Rx(90)·Rz(90) would send it to −Y.
        let t = to_transform(&Pose6::new(0.0, 0.0, 0.0, 90.0, 0.0, 90.0));
        let z = axis(&t, 2);
        assert!((z - Vector3::x()).norm() < TOLERANCE, "Z axis should map to +X, got {:?}", z);
    }

    #[test]
    fn test_rotation_block_is_orthonormal() {
        let t = to_transform(&Pose6::new(5.0, 6.0, 7.0, 33.0, -71.0, 142.0));
        let r = t.fixed_view::<3, 3>(0, 0).into_owned();
        assert!((r.determinant() - 1.0).abs() < TOLERANCE);
        let rtr = r.transpose() * r;
        assert!((rtr - nalgebra::Matrix3::identity()).norm() < TOLERANCE);
    }

    #[test]
    fn test_roundtrip_away_from_singularity() {
        let cases = [
            Pose6::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            Pose6::new(-350.5, 2954.42, 2720.94, 0.0, 0.0, -80.0),
            Pose6::new(101.0, 0.0, 2200.0, 90.0, -10.0, -90.0),
            Pose6::new(1.0, 2.0, 3.0, 45.0, 30.0, 15.0),
            Pose6::new(-1.0, -2.0, -3.0, -45.0, -30.0, -15.0),
            Pose6::new(0.0, 0.0, 0.0, 179.0, 89.0, -179.0),
            Pose6::new(0.0, 0.0, 0.0, -120.0, -60.0, 170.0),
        ];

        for pose in cases {
            let back = from_transform(&to_transform(&pose));
            for (i, (want, got)) in pose.to_array().iter().zip(back.to_array()).enumerate() {
                assert!(
                    (want - got).abs() < ANGLE_TOLERANCE,
                    "component {} of {:?} came back as {}",
                    i,
                    pose,
                    got
                );
            }
        }
    }

    #[test]
    fn test_singularity_positive_b() {
        let pose = Pose6::new(0.0, 0.0, 0.0, 45.0, 90.0, 30.0);
        let t = to_transform(&pose);
        let back = from_transform(&t);

        assert!(back.c.abs() < ANGLE_TOLERANCE, "C should be pinned to 0, got {}", back.c);
        assert!((back.b - 90.0).abs() < ANGLE_TOLERANCE, "B should be 90, got {}", back.b);
        assert!((back.a - 15.0).abs() < ANGLE_TOLERANCE, "A should absorb A − C, got {}", back.a);
        assert_matrix_close(&to_transform(&back), &t, TOLERANCE);
    }

    #[test]
    fn test_singularity_negative_b() {
        let pose = Pose6::new(10.0, 20.0, 30.0, 20.0, -90.0, 25.0);
        let t = to_transform(&pose);
        let back = from_transform(&t);

        assert!(back.c.abs() < ANGLE_TOLERANCE);
        assert!((back.b + 90.0).abs() < ANGLE_TOLERANCE);
        assert!((back.a - 45.0).abs() < ANGLE_TOLERANCE, "A should absorb A + C, got {}", back.a);
        assert_matrix_close(&to_transform(&back), &t, TOLERANCE);
    }

    #[test]
    fn test_unclamped_angles_are_accepted() {
        let wrapped = to_transform(&Pose6::new(0.0, 0.0, 0.0, 370.0, -30.0, -270.0));
        let plain = to_transform(&Pose6::new(0.0, 0.0, 0.0, 10.0, -30.0, 90.0));
        assert_matrix_close(&wrapped, &plain, TOLERANCE);
    }

    #[test]
    fn test_invert_composes_to_identity() {
        let t = to_transform(&Pose6::new(3000.0, -12.5, 451.5, 12.0, 47.0, -133.0));
        let inv = invert(&t).unwrap();
        assert_matrix_close(&(t * inv), &Transform::identity(), TOLERANCE);
        assert_matrix_close(&(inv * t), &Transform::identity(), TOLERANCE);
    }

    #[test]
    fn test_invert_singular_matrix() {
        assert_eq!(invert(&Transform::zeros()), Err(PoseError::NotInvertible));
    }
}
