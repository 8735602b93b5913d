//! Model transform composition
//!
//! A model matrix is built from scale, per-axis rotations in degrees and a
//! translation, always in the order
//!
//! ```text
//! M = T * Rz * Ry * Rx * S
//! ```
//!
//! applied to column vectors: scale first, then rotate about X, Y and Z, then
//! translate. The rotation order is part of the scene contract; swapping axes
//! moves geometry. Inputs are not validated, so negative or zero scale passes
//! through and produces mirrored or flattened geometry.

use crate::foundation::math::{utils::deg_to_rad, Mat4, Mat4Ext, Vec3};

/// Per-draw transform parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    /// Scale along X, Y, Z
    pub scale: [f32; 3],
    /// Rotation about X, Y, Z in degrees
    pub rotation_degrees: [f32; 3],
    /// Translation
    pub position: [f32; 3],
}

impl TransformParams {
    /// Identity transform
    pub const IDENTITY: Self = Self::new([1.0, 1.0, 1.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);

    /// Create transform parameters
    pub const fn new(scale: [f32; 3], rotation_degrees: [f32; 3], position: [f32; 3]) -> Self {
        Self {
            scale,
            rotation_degrees,
            position,
        }
    }

    /// Compose the model matrix
    pub fn to_matrix(&self) -> Mat4 {
        let [x_degrees, y_degrees, z_degrees] = self.rotation_degrees;
        compose_model_matrix(
            &Vec3::from(self.scale),
            x_degrees,
            y_degrees,
            z_degrees,
            &Vec3::from(self.position),
        )
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Compose `T * Rz * Ry * Rx * S` from degrees
pub fn compose_model_matrix(
    scale: &Vec3,
    x_rotation_degrees: f32,
    y_rotation_degrees: f32,
    z_rotation_degrees: f32,
    position: &Vec3,
) -> Mat4 {
    let scale = Mat4::new_nonuniform_scaling(scale);
    let rotation_x = Mat4::rotation_x(deg_to_rad(x_rotation_degrees));
    let rotation_y = Mat4::rotation_y(deg_to_rad(y_rotation_degrees));
    let rotation_z = Mat4::rotation_z(deg_to_rad(z_rotation_degrees));
    let translation = Mat4::new_translation(position);

    translation * rotation_z * rotation_y * rotation_x * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::{assert_relative_eq, assert_relative_ne};

    fn rx(degrees: f32) -> Mat4 {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Mat4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c, -s, 0.0,
            0.0, s, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn ry(degrees: f32) -> Mat4 {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Mat4::new(
            c, 0.0, s, 0.0,
            0.0, 1.0, 0.0, 0.0,
            -s, 0.0, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn rz(degrees: f32) -> Mat4 {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Mat4::new(
            c, -s, 0.0, 0.0,
            s, c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[test]
    fn test_identity() {
        assert_relative_eq!(TransformParams::IDENTITY.to_matrix(), Mat4::identity(), epsilon = 1e-6);
    }

    #[test]
    fn test_scale_then_rotate_about_z() {
        let model = TransformParams::new([2.0, 1.0, 1.0], [0.0, 0.0, 90.0], [0.0, 0.0, 0.0]).to_matrix();

        let origin = model.transform_point(&Point3::origin());
        assert_relative_eq!(origin, Point3::origin(), epsilon = 1e-6);

        let x = model.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(x, Point3::new(0.0, 2.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_translation_applies_last() {
        let model = TransformParams::new([3.0, 3.0, 3.0], [0.0, 90.0, 0.0], [1.0, 2.0, 3.0]).to_matrix();
        let p = model.transform_point(&Point3::new(0.0, 0.0, 1.0));
        // (0,0,1) scaled to (0,0,3), rotated about Y to (3,0,0), then moved
        assert_relative_eq!(p, Point3::new(4.0, 2.0, 3.0), epsilon = 1e-5);
    }

    #[test]
    fn test_rotation_order_matches_hand_product() {
        let scale = Vec3::new(1.5, 0.5, 2.0);
        let position = Vec3::new(-4.0, 1.25, 0.5);
        let (x, y, z) = (30.0, 45.0, 60.0);

        let expected = Mat4::new_translation(&position)
            * rz(z)
            * ry(y)
            * rx(x)
            * Mat4::new_nonuniform_scaling(&scale);

        let model = compose_model_matrix(&scale, x, y, z, &position);
        assert_relative_eq!(model, expected, epsilon = 1e-5);

        // Any other axis order gives a different matrix
        let reordered = Mat4::new_translation(&position)
            * rx(x)
            * ry(y)
            * rz(z)
            * Mat4::new_nonuniform_scaling(&scale);
        assert_relative_ne!(model, reordered, epsilon = 1e-3);
    }

    #[test]
    fn test_separate_axis_calls_do_not_commute() {
        let unit = Vec3::new(1.0, 1.0, 1.0);
        let zero = Vec3::zeros();

        let x_only = compose_model_matrix(&unit, 90.0, 0.0, 0.0, &zero);
        let z_only = compose_model_matrix(&unit, 0.0, 0.0, 90.0, &zero);
        let both = compose_model_matrix(&unit, 90.0, 0.0, 90.0, &zero);

        // X rotation happens first in a single call
        assert_relative_eq!(z_only * x_only, both, epsilon = 1e-6);
        assert_relative_ne!(x_only * z_only, both, epsilon = 1e-3);
    }

    #[test]
    fn test_negative_scale_passes_through() {
        let model = TransformParams::new([-1.0, 0.0, 1.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]).to_matrix();
        let p = model.transform_point(&Point3::new(2.0, 5.0, 1.0));
        assert_relative_eq!(p, Point3::new(-2.0, 0.0, 1.0), epsilon = 1e-6);
    }
}
