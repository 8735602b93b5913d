//! Shader uniform interface
//!
//! Shader state is a set of named slots with exactly one current value each.
//! Every draw uses whatever was pushed last, so callers must push state in
//! the order they want it observed.

use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};

/// Named-uniform setters for the active shader program
pub trait ShaderInterface {
    /// Set an integer (or boolean flag) uniform
    fn set_int(&mut self, name: &str, value: i32);

    /// Set a float uniform
    fn set_float(&mut self, name: &str, value: f32);

    /// Set a 2-component vector uniform
    fn set_vec2(&mut self, name: &str, value: Vec2);

    /// Set a 3-component vector uniform
    fn set_vec3(&mut self, name: &str, value: Vec3);

    /// Set a 4-component vector uniform
    fn set_vec4(&mut self, name: &str, value: Vec4);

    /// Set a 4x4 matrix uniform
    fn set_mat4(&mut self, name: &str, value: &Mat4);

    /// Point a 2D sampler uniform at a texture unit
    fn set_sampler_2d(&mut self, name: &str, unit: u32);

    /// Set a boolean flag, encoded as 0/1
    fn set_bool(&mut self, name: &str, value: bool) {
        self.set_int(name, i32::from(value));
    }
}

/// Uniform names understood by the scene shader
pub mod uniforms {
    /// Model matrix
    pub const MODEL: &str = "model";
    /// Flat RGBA color used when texturing is off
    pub const OBJECT_COLOR: &str = "objectColor";
    /// Sampler for the object texture
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    /// Texture-enabled flag
    pub const USE_TEXTURE: &str = "bUseTexture";
    /// Lighting-enabled flag
    pub const USE_LIGHTING: &str = "bUseLighting";
    /// Texture coordinate tiling multiplier
    pub const UV_SCALE: &str = "UVscale";

    /// Material diffuse color
    pub const MATERIAL_DIFFUSE: &str = "material.diffuseColor";
    /// Material specular color
    pub const MATERIAL_SPECULAR: &str = "material.specularColor";
    /// Material shininess exponent
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    /// Name of a field in the directional light block
    pub fn directional_light(field: &str) -> String {
        format!("directionalLight.{field}")
    }

    /// Name of a field in the `index`-th point light block
    pub fn point_light(index: usize, field: &str) -> String {
        format!("pointLights[{index}].{field}")
    }

    /// Name of a field in the spot light block
    pub fn spot_light(field: &str) -> String {
        format!("spotLight.{field}")
    }

}
