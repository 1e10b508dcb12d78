//! Axis-angle rotation matrices (Rodrigues' formula)

use crate::core::types::{Mat3, Vec3};

/// Build the rotation of `angle` radians about the unit `axis`.
///
/// `R = I cos t + [a]x sin t + (a (x) a)(1 - cos t)`. The axis is not
/// normalized here. An angle of exactly zero yields exactly the identity.
pub fn axis_angle(axis: Vec3, angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    let Vec3 { x, y, z } = axis;

    // Columns of I*c + [a]x*s + (a a^T)*t
    Mat3::from_cols(
        Vec3::new(c + x * x * t, z * s + y * x * t, -y * s + z * x * t),
        Vec3::new(-z * s + x * y * t, c + y * y * t, x * s + z * y * t),
        Vec3::new(y * s + x * z * t, -x * s + y * z * t, c + z * z * t),
    )
}

/// Blade bend: twist about the local up axis by `yaw`, then tip the blade
/// towards `forward` by `pitch`.
///
/// `forward` must be a unit vector in the local ground plane (y = 0).
/// The pitch axis is `up x forward`, which carries +Y towards `forward`.
pub fn bend_rotation(forward: Vec3, pitch: f32, yaw: f32) -> Mat3 {
    let pitch_axis = Vec3::Y.cross(forward);
    axis_angle(pitch_axis, pitch) * axis_angle(Vec3::Y, yaw)
}
