//! Rigid transform algebra used by the kinematic tree.
//!
//! All transforms are `nalgebra::Isometry3<f64>` (aliased as [`Pose`]): a unit quaternion
//! rotation and a translation, acting on points as `p -> R * p + t`. Composition follows
//! the nalgebra product, so `compose(a, b)` applied to a point is `a(b(p))`.
//!
//! ```
//! use nalgebra::Vector3;
//! use rs_tree_kinematics::transform::{compose, from_axis_angle, from_translation, inverse};
//!
//! let z = Vector3::z_axis();
//! let turn = from_axis_angle(&z, std::f64::consts::FRAC_PI_2);
//! let step = from_translation(&Vector3::x_axis(), 1.0);
//!
//! // Turn first, then step along the rotated x axis
//! let pose = compose(&turn, &step);
//! assert!((pose.translation.vector - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
//!
//! let back = compose(&pose, &inverse(&pose));
//! assert!(back.translation.vector.norm() < 1e-12);
//! ```

use nalgebra::{Isometry3, Matrix3, Rotation3, Translation3, Unit, UnitQuaternion, Vector3};

/// Pose of one frame expressed in another frame.
pub type Pose = Isometry3<f64>;

/// Unit direction of a joint axis.
pub type Axis = Unit<Vector3<f64>>;

/// The transform that leaves every point where it is.
pub fn identity() -> Pose {
    Pose::identity()
}

/// `a` after `b`: the returned transform maps `p` to `a(b(p))`.
pub fn compose(a: &Pose, b: &Pose) -> Pose {
    a * b
}

/// Inverse rigid transform (`R^T`, `-R^T t`).
pub fn inverse(a: &Pose) -> Pose {
    a.inverse()
}

/// Rotation of `angle` radians about `axis`, no translation.
pub fn from_axis_angle(axis: &Axis, angle: f64) -> Pose {
    Isometry3::from_parts(
        Translation3::identity(),
        UnitQuaternion::from_axis_angle(axis, angle),
    )
}

/// Translation of `distance` meters along `axis`, no rotation.
pub fn from_translation(axis: &Axis, distance: f64) -> Pose {
    Isometry3::from_parts(
        Translation3::from(axis.into_inner() * distance),
        UnitQuaternion::identity(),
    )
}

/// Transform from a rotation matrix and a translation vector. The matrix is assumed
/// to be orthonormal; it is converted to the nearest unit quaternion.
pub fn from_rigid(rotation: &Rotation3<f64>, translation: &Vector3<f64>) -> Pose {
    Isometry3::from_parts(
        Translation3::from(*translation),
        UnitQuaternion::from_rotation_matrix(rotation),
    )
}

/// Transform as written in URDF `<origin xyz=".." rpy=".."/>`: fixed axis roll, pitch
/// and yaw (rotation `Rz(yaw) * Ry(pitch) * Rx(roll)`), then the translation.
pub fn from_xyz_rpy(xyz: &Vector3<f64>, rpy: &Vector3<f64>) -> Pose {
    Isometry3::from_parts(
        Translation3::from(*xyz),
        UnitQuaternion::from_euler_angles(rpy.x, rpy.y, rpy.z),
    )
}

/// Frobenius norm of `R^T R - I` for the rotation part of the pose. Zero for an exact
/// rotation; grows as floating point drift accumulates.
pub fn orthonormality_error(pose: &Pose) -> f64 {
    let r = pose.rotation.to_rotation_matrix().into_inner();
    (r.transpose() * r - Matrix3::identity()).norm()
}
