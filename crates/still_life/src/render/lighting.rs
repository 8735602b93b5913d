//! Lighting state for the scene shader
//!
//! The shader exposes one directional light, a fixed array of point lights and
//! one spot light. Every block has a `bActive` flag; a light that is `None`
//! here is pushed as inactive so no stale parameters from an earlier frame
//! stay switched on.

use crate::foundation::math::Vec3;
use crate::render::shader::{uniforms, ShaderInterface};

/// Point light slots in the shader
pub const MAX_POINT_LIGHTS: usize = 5;

/// Directional light (parallel rays, like sunlight through a window)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels
    pub direction: Vec3,
    /// Ambient contribution
    pub ambient: Vec3,
    /// Diffuse color
    pub diffuse: Vec3,
    /// Specular color
    pub specular: Vec3,
}

/// Point light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World position
    pub position: Vec3,
    /// Ambient contribution
    pub ambient: Vec3,
    /// Diffuse color
    pub diffuse: Vec3,
    /// Specular color
    pub specular: Vec3,
}

/// Spot light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    /// World position
    pub position: Vec3,
    /// Cone axis
    pub direction: Vec3,
    /// Ambient contribution
    pub ambient: Vec3,
    /// Diffuse color
    pub diffuse: Vec3,
    /// Specular color
    pub specular: Vec3,
    /// Cosine of the inner cone angle
    pub cut_off: f32,
    /// Cosine of the outer cone angle
    pub outer_cut_off: f32,
}

/// Complete lighting setup pushed once per frame
#[derive(Debug, Clone, PartialEq)]
pub struct LightingEnvironment {
    /// Global lighting switch
    pub use_lighting: bool,
    /// Directional light, if any
    pub directional: Option<DirectionalLight>,
    /// Point light slots
    pub point_lights: [Option<PointLight>; MAX_POINT_LIGHTS],
    /// Spot light, if any
    pub spot_light: Option<SpotLight>,
}

impl LightingEnvironment {
    /// Lighting enabled with every light switched off
    pub fn new() -> Self {
        Self {
            use_lighting: true,
            directional: None,
            point_lights: [None; MAX_POINT_LIGHTS],
            spot_light: None,
        }
    }

    /// Set the directional light
    pub fn with_directional(mut self, light: DirectionalLight) -> Self {
        self.directional = Some(light);
        self
    }

    /// Place a point light in `slot`; out-of-range slots are ignored with a warning
    pub fn with_point_light(mut self, slot: usize, light: PointLight) -> Self {
        match self.point_lights.get_mut(slot) {
            Some(entry) => *entry = Some(light),
            None => log::warn!("Point light slot {} out of range (max {})", slot, MAX_POINT_LIGHTS),
        }
        self
    }

    /// Set the spot light
    pub fn with_spot_light(mut self, light: SpotLight) -> Self {
        self.spot_light = Some(light);
        self
    }

    /// Warm window light plus an orange fill point light over the tabletop
    pub fn tabletop_warm() -> Self {
        Self::new()
            .with_directional(DirectionalLight {
                direction: Vec3::new(-0.35, -1.0, -0.25),
                ambient: Vec3::new(0.20, 0.18, 0.14),
                diffuse: Vec3::new(0.90, 0.78, 0.62),
                specular: Vec3::new(0.90, 0.90, 0.90),
            })
            .with_point_light(0, PointLight {
                position: Vec3::new(4.5, 6.5, 4.5),
                ambient: Vec3::new(0.10, 0.08, 0.06),
                diffuse: Vec3::new(0.85, 0.55, 0.30),
                specular: Vec3::new(0.60, 0.55, 0.50),
            })
    }

    /// Number of lights that will be pushed as active
    pub fn active_light_count(&self) -> usize {
        usize::from(self.directional.is_some())
            + self.point_lights.iter().flatten().count()
            + usize::from(self.spot_light.is_some())
    }

    /// Push every light block to the shader
    pub fn apply(&self, shader: &mut dyn ShaderInterface) {
        shader.set_bool(uniforms::USE_LIGHTING, self.use_lighting);

        match &self.directional {
            Some(light) => {
                shader.set_vec3(&uniforms::directional_light("direction"), light.direction);
                shader.set_vec3(&uniforms::directional_light("ambient"), light.ambient);
                shader.set_vec3(&uniforms::directional_light("diffuse"), light.diffuse);
                shader.set_vec3(&uniforms::directional_light("specular"), light.specular);
                shader.set_bool(&uniforms::directional_light("bActive"), true);
            }
            None => shader.set_bool(&uniforms::directional_light("bActive"), false),
        }

        for (index, slot) in self.point_lights.iter().enumerate() {
            match slot {
                Some(light) => {
                    shader.set_vec3(&uniforms::point_light(index, "position"), light.position);
                    shader.set_vec3(&uniforms::point_light(index, "ambient"), light.ambient);
                    shader.set_vec3(&uniforms::point_light(index, "diffuse"), light.diffuse);
                    shader.set_vec3(&uniforms::point_light(index, "specular"), light.specular);
                    shader.set_bool(&uniforms::point_light(index, "bActive"), true);
                }
                None => shader.set_bool(&uniforms::point_light(index, "bActive"), false),
            }
        }

        match &self.spot_light {
            Some(light) => {
                shader.set_vec3(&uniforms::spot_light("position"), light.position);
                shader.set_vec3(&uniforms::spot_light("direction"), light.direction);
                shader.set_vec3(&uniforms::spot_light("ambient"), light.ambient);
                shader.set_vec3(&uniforms::spot_light("diffuse"), light.diffuse);
                shader.set_vec3(&uniforms::spot_light("specular"), light.specular);
                shader.set_float(&uniforms::spot_light("cutOff"), light.cut_off);
                shader.set_float(&uniforms::spot_light("outerCutOff"), light.outer_cut_off);
                shader.set_bool(&uniforms::spot_light("bActive"), true);
            }
            None => shader.set_bool(&uniforms::spot_light("bActive"), false),
        }
    }
}

impl Default for LightingEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
