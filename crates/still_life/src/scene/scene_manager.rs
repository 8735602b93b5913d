//! Scene preparation and per-frame drawing
//!
//! [`SceneManager`] owns the texture and material registries and the lighting
//! setup. Shader uniforms are pushed through small helpers in a fixed order per
//! object, because every draw reads whatever value each uniform last received.
//!
//! ```text
//! new             register configured materials
//! prepare_scene   meshes -> textures -> bind
//! render_scene    lighting -> per object: state, transform, surface, uv, draw
//! destroy_textures
//! ```
//!
//! Neither `prepare_scene` nor `render_scene` returns an error. Failures are
//! logged, counted in the returned report and the scene degrades: a missing
//! texture becomes the fallback color, a failed draw is skipped.

use std::path::Path;

use crate::core::ApplicationConfig;
use crate::core::config::AssetConfig;
use crate::foundation::math::{Mat4, Vec2, Vec4};
use crate::render::lighting::LightingEnvironment;
use crate::render::material::MaterialValues;
use crate::render::primitives::MeshLibrary;
use crate::render::shader::{uniforms, ShaderInterface};
use crate::render::texture::{TextureBackend, TextureHandle};
use crate::render::transform::TransformParams;
use crate::scene::layout::{MaterialSource, SceneObject, Surface, SCENE_MESHES, SCENE_TEXTURES, STILL_LIFE};
use crate::scene::material_registry::{MaterialRegistry, ObjectMaterial};
use crate::scene::texture_registry::TextureRegistry;
use crate::scene::{SceneError, SceneResult};

/// Outcome of [`SceneManager::prepare_scene`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrepareReport {
    /// Meshes tessellated
    pub meshes_loaded: usize,
    /// Meshes that failed to load
    pub meshes_failed: usize,
    /// Materials available for tagged lookup
    pub materials_available: usize,
    /// Textures registered
    pub textures_loaded: usize,
    /// Textures skipped
    pub textures_failed: usize,
    /// Textures bound to units
    pub textures_bound: usize,
}

impl PrepareReport {
    /// Whether every resource loaded
    pub fn is_complete(&self) -> bool {
        self.meshes_failed == 0 && self.textures_failed == 0
    }
}

/// Outcome of one rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Draw calls that succeeded
    pub draws_issued: usize,
    /// Draw calls the mesh library rejected
    pub draws_failed: usize,
    /// Triangles submitted
    pub triangles: usize,
    /// Objects drawn in the fallback color because their texture was missing
    pub texture_fallbacks: usize,
}

/// Scene resource owner and frame driver
#[derive(Debug)]
pub struct SceneManager {
    textures: TextureRegistry,
    materials: MaterialRegistry,
    lighting: LightingEnvironment,
    assets: AssetConfig,
    fallback_color: [f32; 4],
}

impl SceneManager {
    /// Create a manager from the application configuration
    ///
    /// Configured materials are registered here, once.
    pub fn new(config: &ApplicationConfig) -> Self {
        let mut materials = MaterialRegistry::new();
        materials.extend(config.scene.materials.iter().cloned());

        Self {
            textures: TextureRegistry::with_capacity(config.scene.max_texture_units),
            materials,
            lighting: LightingEnvironment::tabletop_warm(),
            assets: config.assets.clone(),
            fallback_color: config.scene.fallback_color,
        }
    }

    /// Replace the lighting pushed at the start of each frame
    pub fn with_lighting(mut self, lighting: LightingEnvironment) -> Self {
        self.lighting = lighting;
        self
    }

    /// Texture registry
    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    /// Material registry
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// Mutable material registry
    pub fn materials_mut(&mut self) -> &mut MaterialRegistry {
        &mut self.materials
    }

    /// Lighting pushed at the start of each frame
    pub fn lighting(&self) -> &LightingEnvironment {
        &self.lighting
    }

    /// Color used when a texture tag doesn't resolve
    pub fn fallback_color(&self) -> [f32; 4] {
        self.fallback_color
    }

    /// Load an image file into the next texture slot under `tag`
    pub fn create_texture(
        &mut self,
        backend: &mut dyn TextureBackend,
        path: impl AsRef<Path>,
        tag: &str,
    ) -> SceneResult<usize> {
        self.textures.load_texture(backend, path, tag)
    }

    /// Bind every registered texture to the unit matching its slot
    pub fn bind_textures(&self, backend: &mut dyn TextureBackend) -> usize {
        self.textures.bind_all(backend)
    }

    /// Release every texture and empty the registry
    pub fn destroy_textures(&mut self, backend: &mut dyn TextureBackend) -> usize {
        let released = self.textures.destroy_all(backend);
        log::info!("Released {} textures", released);
        released
    }

    /// Texture handle registered under `tag`
    pub fn find_texture_id(&self, tag: &str) -> Option<TextureHandle> {
        self.textures.find_handle(tag)
    }

    /// Texture slot (and unit) registered under `tag`
    pub fn find_texture_slot(&self, tag: &str) -> Option<usize> {
        self.textures.find_slot(tag)
    }

    /// Material registered under `tag`
    pub fn find_material(&self, tag: &str) -> Option<&ObjectMaterial> {
        self.materials.find(tag)
    }

    /// Compose the model matrix and push it to `model`
    pub fn set_transformations(&self, shader: &mut dyn ShaderInterface, transform: &TransformParams) -> Mat4 {
        let model = transform.to_matrix();
        shader.set_mat4(uniforms::MODEL, &model);
        model
    }

    /// Disable texturing and push a flat color
    pub fn set_shader_color(&self, shader: &mut dyn ShaderInterface, color: [f32; 4]) {
        shader.set_bool(uniforms::USE_TEXTURE, false);
        shader.set_vec4(uniforms::OBJECT_COLOR, Vec4::from(color));
    }

    /// Enable texturing and point the sampler at the unit registered for `tag`
    ///
    /// An unknown tag pushes nothing, so the shader keeps its previous surface
    /// state; callers are expected to fall back to a color.
    pub fn set_shader_texture(&self, shader: &mut dyn ShaderInterface, tag: &str) -> SceneResult<usize> {
        let slot = self
            .textures
            .find_slot(tag)
            .ok_or_else(|| SceneError::UnknownTexture(tag.to_string()))?;

        shader.set_bool(uniforms::USE_TEXTURE, true);
        shader.set_sampler_2d(uniforms::OBJECT_TEXTURE, slot as u32);
        Ok(slot)
    }

    /// Push the texture coordinate scale
    pub fn set_texture_uv_scale(&self, shader: &mut dyn ShaderInterface, u: f32, v: f32) {
        shader.set_vec2(uniforms::UV_SCALE, Vec2::new(u, v));
    }

    /// Push the material registered under `tag`
    ///
    /// Returns `false` and pushes nothing when no material matches, leaving the
    /// previous material in effect.
    pub fn set_shader_material(&self, shader: &mut dyn ShaderInterface, tag: &str) -> bool {
        match self.materials.find(tag) {
            Some(material) => {
                material.values().apply(shader);
                true
            }
            None => {
                log::debug!("No material tagged '{}'; keeping current material", tag);
                false
            }
        }
    }

    /// Push an untagged material block
    pub fn set_material_values(&self, shader: &mut dyn ShaderInterface, values: &MaterialValues) {
        values.apply(shader);
    }

    /// Push the lighting switch
    pub fn set_lighting(&self, shader: &mut dyn ShaderInterface, enabled: bool) {
        shader.set_bool(uniforms::USE_LIGHTING, enabled);
    }

    /// Load meshes and textures, then bind the textures
    ///
    /// Failures are logged and counted; whatever loaded is usable. Calling this
    /// again appends duplicate textures while slots remain.
    pub fn prepare_scene(
        &mut self,
        meshes: &mut dyn MeshLibrary,
        textures: &mut dyn TextureBackend,
    ) -> PrepareReport {
        let mut report = PrepareReport::default();

        for (kind, params) in SCENE_MESHES {
            match meshes.load_mesh(kind, params) {
                Ok(()) => report.meshes_loaded += 1,
                Err(e) => {
                    log::error!("Failed to load mesh {:?}: {}", kind, e);
                    report.meshes_failed += 1;
                }
            }
        }

        report.materials_available = self.materials.len();

        for source in SCENE_TEXTURES {
            let path = self.assets.texture_path(source.file);
            match self.textures.load_texture(textures, &path, source.tag) {
                Ok(_) => report.textures_loaded += 1,
                Err(e) => {
                    log::warn!("Skipping texture '{}': {}", source.tag, e);
                    report.textures_failed += 1;
                }
            }
        }

        report.textures_bound = self.textures.bind_all(textures);

        log::info!(
            "Scene prepared: {} meshes ({} failed), {} materials, {} textures ({} failed, {} bound)",
            report.meshes_loaded,
            report.meshes_failed,
            report.materials_available,
            report.textures_loaded,
            report.textures_failed,
            report.textures_bound
        );

        report
    }

    /// Push the lighting environment and draw the still life
    pub fn render_scene(&self, shader: &mut dyn ShaderInterface, meshes: &mut dyn MeshLibrary) -> FrameStats {
        self.lighting.apply(shader);
        self.render_objects(shader, meshes, &STILL_LIFE)
    }

    /// Draw `objects` in order
    ///
    /// Each object pushes its lighting flag and material (when it sets them),
    /// then its transform, surface and UV scale, and is then drawn.
    pub fn render_objects(
        &self,
        shader: &mut dyn ShaderInterface,
        meshes: &mut dyn MeshLibrary,
        objects: &[SceneObject],
    ) -> FrameStats {
        let mut stats = FrameStats::default();

        for object in objects {
            if let Some(enabled) = object.lighting {
                self.set_lighting(shader, enabled);
            }

            match object.material {
                MaterialSource::Inherit => {}
                MaterialSource::Inline(values) => self.set_material_values(shader, &values),
                MaterialSource::Tagged(tag) => {
                    self.set_shader_material(shader, tag);
                }
            }

            self.set_transformations(shader, &object.transform);

            match object.surface {
                Surface::Texture(tag) => {
                    if let Err(e) = self.set_shader_texture(shader, tag) {
                        log::debug!("{}: {}; drawing in fallback color", object.name, e);
                        self.set_shader_color(shader, self.fallback_color);
                        stats.texture_fallbacks += 1;
                    }
                }
                Surface::Color(color) => self.set_shader_color(shader, color),
            }

            self.set_texture_uv_scale(shader, object.uv_scale[0], object.uv_scale[1]);

            match meshes.draw_mesh(object.mesh, object.faces) {
                Ok(info) => {
                    stats.draws_issued += 1;
                    stats.triangles += info.triangle_count() as usize;
                }
                Err(e) => {
                    log::error!("Failed to draw {}: {}", object.name, e);
                    stats.draws_failed += 1;
                }
            }
        }

        stats
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new(&ApplicationConfig::default())
    }
}
