//! Headless backends
//!
//! [`RecordingShader`] keeps the current value of every uniform plus the
//! ordered write history. [`HeadlessTextures`] hands out texture handles and
//! tracks unit bindings without touching a GPU. Both are used by the headless
//! application and as injected doubles in tests.

use std::collections::HashMap;

use crate::assets::ImageData;
use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use crate::render::shader::ShaderInterface;
use crate::render::texture::{
    mip_level_count, TextureBackend, TextureFormat, TextureHandle, TextureParams,
};
use crate::render::{RenderError, RenderResult};

/// A value written to a named uniform
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    /// Integer or flag
    Int(i32),
    /// Scalar
    Float(f32),
    /// 2-vector
    Vec2(Vec2),
    /// 3-vector
    Vec3(Vec3),
    /// 4-vector
    Vec4(Vec4),
    /// 4x4 matrix
    Mat4(Mat4),
    /// Sampler bound to a texture unit
    Sampler2D(u32),
}

/// Shader double that records uniform writes
#[derive(Debug, Default)]
pub struct RecordingShader {
    current: HashMap<String, UniformValue>,
    history: Vec<(String, UniformValue)>,
}

impl RecordingShader {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a uniform
    pub fn value(&self, name: &str) -> Option<&UniformValue> {
        self.current.get(name)
    }

    /// Current value of an integer uniform
    pub fn int(&self, name: &str) -> Option<i32> {
        match self.current.get(name) {
            Some(UniformValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Current unit of a sampler uniform
    pub fn sampler(&self, name: &str) -> Option<u32> {
        match self.current.get(name) {
            Some(UniformValue::Sampler2D(unit)) => Some(*unit),
            _ => None,
        }
    }

    /// Current value of a matrix uniform
    pub fn mat4(&self, name: &str) -> Option<&Mat4> {
        match self.current.get(name) {
            Some(UniformValue::Mat4(value)) => Some(value),
            _ => None,
        }
    }

    /// Every write in issue order
    pub fn history(&self) -> &[(String, UniformValue)] {
        &self.history
    }

    /// Number of writes since the last clear
    pub fn write_count(&self) -> usize {
        self.history.len()
    }

    /// Forget the write history, keeping current values
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn record(&mut self, name: &str, value: UniformValue) {
        log::trace!("uniform {} = {:?}", name, value);
        self.history.push((name.to_string(), value.clone()));
        self.current.insert(name.to_string(), value);
    }
}

impl ShaderInterface for RecordingShader {
    fn set_int(&mut self, name: &str, value: i32) {
        self.record(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, UniformValue::Float(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.record(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.record(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.record(name, UniformValue::Vec4(value));
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.record(name, UniformValue::Mat4(*value));
    }

    fn set_sampler_2d(&mut self, name: &str, unit: u32) {
        self.record(name, UniformValue::Sampler2D(unit));
    }
}

/// Information about a live headless texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Internal format
    pub format: TextureFormat,
    /// Sampling parameters
    pub params: TextureParams,
    /// Mip levels allocated
    pub mip_levels: u32,
}

/// Texture backend that tracks handles and unit bindings in memory
#[derive(Debug)]
pub struct HeadlessTextures {
    live: HashMap<TextureHandle, TextureInfo>,
    units: Vec<Option<TextureHandle>>,
    next_id: u32,
    created: usize,
    deleted: usize,
}

impl HeadlessTextures {
    /// Create a backend exposing `max_units` texture units
    pub fn new(max_units: usize) -> Self {
        Self {
            live: HashMap::new(),
            units: vec![None; max_units],
            next_id: 1, // 0 is never a valid texture name
            created: 0,
            deleted: 0,
        }
    }

    /// Info for a live texture
    pub fn texture(&self, handle: TextureHandle) -> Option<&TextureInfo> {
        self.live.get(&handle)
    }

    /// Texture currently bound to `unit`
    pub fn bound(&self, unit: usize) -> Option<TextureHandle> {
        self.units.get(unit).copied().flatten()
    }

    /// Number of textures alive
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total textures ever created
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Total textures deleted
    pub fn deleted_count(&self) -> usize {
        self.deleted
    }
}

impl Default for HeadlessTextures {
    fn default() -> Self {
        Self::new(crate::render::texture::DEFAULT_MAX_TEXTURE_UNITS)
    }
}

impl TextureBackend for HeadlessTextures {
    fn create_texture(
        &mut self,
        image: &ImageData,
        format: TextureFormat,
        params: &TextureParams,
    ) -> RenderResult<TextureHandle> {
        let expected = image.width as usize * image.height as usize * usize::from(format.channels());
        if image.data.len() != expected {
            return Err(RenderError::ResourceCreationFailed(format!(
                "{}x{} {:?} upload expects {} bytes, got {}",
                image.width,
                image.height,
                format,
                expected,
                image.data.len()
            )));
        }

        let handle = TextureHandle(self.next_id);
        self.next_id += 1;

        let mip_levels = if params.generate_mipmaps {
            mip_level_count(image.width, image.height)
        } else {
            1
        };

        self.live.insert(handle, TextureInfo {
            width: image.width,
            height: image.height,
            format,
            params: params.clone(),
            mip_levels,
        });
        self.created += 1;

        log::debug!("Created texture {:?} ({}x{} {:?}, {} mips)", handle, image.width, image.height, format, mip_levels);
        Ok(handle)
    }

    fn bind_texture(&mut self, unit: u32, handle: TextureHandle) -> RenderResult<()> {
        let max = self.units.len();
        if !self.live.contains_key(&handle) {
            return Err(RenderError::UnknownTexture(handle));
        }

        let slot = self
            .units
            .get_mut(unit as usize)
            .ok_or(RenderError::InvalidTextureUnit { unit, max })?;
        *slot = Some(handle);
        Ok(())
    }

    fn delete_texture(&mut self, handle: TextureHandle) -> RenderResult<()> {
        self.live
            .remove(&handle)
            .ok_or(RenderError::UnknownTexture(handle))?;

        for slot in &mut self.units {
            if *slot == Some(handle) {
                *slot = None;
            }
        }
        self.deleted += 1;
        Ok(())
    }

    fn max_texture_units(&self) -> usize {
        self.units.len()
    }
}
