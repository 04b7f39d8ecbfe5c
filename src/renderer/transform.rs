use glam::{Mat4, Vec3};

/// Scale, XYZ Euler rotation in degrees, and translation of one mesh
/// instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Vec3,
    pub rotation_degrees: Vec3,
    pub translation: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: Vec3::ONE,
        rotation_degrees: Vec3::ZERO,
        translation: Vec3::ZERO,
    };

    pub const fn new(scale: Vec3, rotation_degrees: Vec3, translation: Vec3) -> Transform {
        Transform {
            scale,
            rotation_degrees,
            translation,
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        compose_model_matrix(self.scale, self.rotation_degrees, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

/// Builds `translation * rot_x * rot_y * rot_z * scale`.
///
/// The order matters: points are scaled first, then rotated about Z, Y and X
/// in that order, and translated last.
pub fn compose_model_matrix(scale: Vec3, rotation_degrees: Vec3, translation: Vec3) -> Mat4 {
    Mat4::from_translation(translation)
        * Mat4::from_rotation_x(rotation_degrees.x.to_radians())
        * Mat4::from_rotation_y(rotation_degrees.y.to_radians())
        * Mat4::from_rotation_z(rotation_degrees.z.to_radians())
        * Mat4::from_scale(scale)
}
