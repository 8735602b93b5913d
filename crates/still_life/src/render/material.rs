//! Phong material block

use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec3;
use crate::render::shader::{uniforms, ShaderInterface};

/// Material properties pushed to the shader's `material` block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialValues {
    /// Diffuse color (RGB)
    pub diffuse_color: [f32; 3],
    /// Specular color (RGB)
    pub specular_color: [f32; 3],
    /// Specular exponent
    pub shininess: f32,
}

impl MaterialValues {
    /// Create a material block
    pub const fn new(diffuse_color: [f32; 3], specular_color: [f32; 3], shininess: f32) -> Self {
        Self {
            diffuse_color,
            specular_color,
            shininess,
        }
    }

    /// Push diffuse, specular and shininess uniforms
    pub fn apply(&self, shader: &mut dyn ShaderInterface) {
        shader.set_vec3(uniforms::MATERIAL_DIFFUSE, Vec3::from(self.diffuse_color));
        shader.set_vec3(uniforms::MATERIAL_SPECULAR, Vec3::from(self.specular_color));
        shader.set_float(uniforms::MATERIAL_SHININESS, self.shininess);
    }
}

impl Default for MaterialValues {
    fn default() -> Self {
        Self::new([1.0, 1.0, 1.0], [0.5, 0.5, 0.5], 32.0)
    }
}
