use glam::{Mat4, Vec3, Vec4};

/// World-up hint used to derive the camera basis
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Orthonormal camera frame
///
/// `forward` points from the target back towards the eye, so the camera
/// looks down its local -Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl Basis {
    /// Derive the frame from eye, target and an up hint
    ///
    /// Undefined (NaN) when `position == target` or when the view direction is
    /// parallel to `up_hint`.
    pub fn look_at(position: Vec3, target: Vec3, up_hint: Vec3) -> Self {
        let forward = (position - target).normalize();
        let right = up_hint.cross(forward).normalize();
        let up = forward.cross(right).normalize();
        Self { right, up, forward }
    }
}

/// View matrix assembled by hand from the look-at basis
///
/// The rows of the upper 3x3 are right, up and forward; the last column holds
/// the eye position projected onto each axis, negated.
pub fn view_matrix(position: Vec3, target: Vec3, up_hint: Vec3) -> Mat4 {
    let Basis { right, up, forward } = Basis::look_at(position, target, up_hint);

    let tx = position.dot(right);
    let ty = position.dot(up);
    let tz = position.dot(forward);

    Mat4::from_cols(
        Vec4::new(right.x, up.x, forward.x, 0.0),
        Vec4::new(right.y, up.y, forward.y, 0.0),
        Vec4::new(right.z, up.z, forward.z, 0.0),
        Vec4::new(-tx, -ty, -tz, 1.0),
    )
}

/// Right-handed perspective with a [0, 1] depth range
pub fn perspective(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fov_y_radians, aspect, near, far)
}

/// Orbit `position` around `target` by rotating about world X, then Y, then Z
///
/// Recovers the eye from the inverse of `view` and composes
/// `T(target) * Rx * Ry * Rz * T(-target)` on top of it; the translation
/// column of the result is the new eye position.
pub fn orbit(view: Mat4, target: Vec3, rotation: Vec3) -> Vec3 {
    let to_origin = Mat4::from_translation(-target);
    let back = Mat4::from_translation(target);
    let spin = Mat4::from_rotation_x(rotation.x)
        * Mat4::from_rotation_y(rotation.y)
        * Mat4::from_rotation_z(rotation.z);

    let eye = back * spin * to_origin * view.inverse();
    eye.w_axis.truncate()
}
