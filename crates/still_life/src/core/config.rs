//! # Unified Configuration System
//!
//! All configuration structures for the scene composer live here. Every
//! section carries `#[serde(default)]`, so a config file only needs to name
//! the values it changes and a missing file means defaults throughout.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: logging and how many frames the headless runner renders
//! - **Asset Config**: where texture images are resolved from
//! - **Scene Config**: texture unit ceiling, fallback color, material library

use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigError};
use crate::render::texture::DEFAULT_MAX_TEXTURE_UNITS;
use crate::scene::material_registry::ObjectMaterial;

/// # Engine Configuration
///
/// Core behavior: log verbosity and the number of frames a headless run
/// renders before tearing the scene down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the process (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Frames to render before shutting down
    pub frames: u32,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            frames: 1,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the number of frames to render
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Asset Configuration
///
/// Texture images are loaded by file name relative to `textures_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory the scene's texture files are resolved against
    pub textures_dir: String,
}

impl AssetConfig {
    /// Create a new asset configuration
    pub fn new() -> Self {
        Self {
            textures_dir: "textures".to_string(),
        }
    }

    /// Set textures directory
    pub fn with_textures_dir(mut self, dir: impl Into<String>) -> Self {
        self.textures_dir = dir.into();
        self
    }

    /// Resolve a texture file name against the textures directory
    pub fn texture_path(&self, file_name: &str) -> PathBuf {
        Path::new(&self.textures_dir).join(file_name)
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Scene Configuration
///
/// Settings consumed by the scene manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Texture registry capacity; also the number of texture units bound
    pub max_texture_units: usize,
    /// RGBA color drawn when an object's texture tag is not registered
    pub fallback_color: [f32; 4],
    /// Materials registered during scene preparation
    pub materials: Vec<ObjectMaterial>,
}

impl SceneConfig {
    /// Create a new scene configuration
    pub fn new() -> Self {
        Self {
            max_texture_units: DEFAULT_MAX_TEXTURE_UNITS,
            fallback_color: [0.8, 0.8, 0.8, 1.0],
            materials: Vec::new(),
        }
    }

    /// Set the texture unit ceiling
    pub fn with_max_texture_units(mut self, units: usize) -> Self {
        self.max_texture_units = units;
        self
    }

    /// Set the fallback color for unresolved textures
    pub fn with_fallback_color(mut self, color: [f32; 4]) -> Self {
        self.fallback_color = color;
        self
    }

    /// Add a material definition
    pub fn with_material(mut self, material: ObjectMaterial) -> Self {
        self.materials.push(material);
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all subsystems.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Asset configuration
    pub assets: AssetConfig,
    /// Scene configuration
    pub scene: SceneConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scene.max_texture_units == 0 {
            return Err(ConfigError::Invalid(
                "max_texture_units must be at least 1".to_string(),
            ));
        }

        if self.scene.max_texture_units > DEFAULT_MAX_TEXTURE_UNITS {
            return Err(ConfigError::Invalid(format!(
                "max_texture_units must not exceed {DEFAULT_MAX_TEXTURE_UNITS}"
            )));
        }

        if self.scene.fallback_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(ConfigError::Invalid(
                "fallback_color components must be within [0, 1]".to_string(),
            ));
        }

        if let Some(material) = self.scene.materials.iter().find(|m| m.tag.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "material with empty tag (shininess {})",
                material.shininess
            )));
        }

        Ok(())
    }
}

impl Config for ApplicationConfig {}
