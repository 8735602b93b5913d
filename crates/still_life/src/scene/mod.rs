//! Scene management
//!
//! Registries for textures and materials, the constant tabletop layout, and
//! the [`SceneManager`] that prepares resources and drives each frame.

pub mod texture_registry;
pub mod material_registry;
pub mod layout;
pub mod scene_manager;

#[cfg(test)]
mod tests;

pub use texture_registry::{TextureRegistry, TextureRecord, MAX_TEXTURE_SLOTS};
pub use material_registry::{MaterialRegistry, ObjectMaterial};
pub use layout::{SceneObject, Surface, MaterialSource, TextureSource, STILL_LIFE, SCENE_MESHES, SCENE_TEXTURES};
pub use scene_manager::{SceneManager, PrepareReport, FrameStats};

use thiserror::Error;

use crate::assets::AssetError;
use crate::render::RenderError;

/// Scene-level errors
///
/// None of these stop a frame; the scene manager logs them and carries on
/// with whatever resources did load.
#[derive(Error, Debug)]
pub enum SceneError {
    /// Image decoded with a channel layout textures can't use
    #[error("Texture '{tag}' has {channels} color channels; only 3 (RGB) and 4 (RGBA) are supported")]
    UnsupportedFormat {
        /// Tag the texture was to be registered under
        tag: String,
        /// Channels found in the image
        channels: u8,
    },

    /// Image file missing or undecodable
    #[error("Could not load texture '{tag}': {source}")]
    Asset {
        /// Tag the texture was to be registered under
        tag: String,
        /// Underlying decode error
        #[source]
        source: AssetError,
    },

    /// No free registry slot
    #[error("Texture registry is full ({capacity} slots)")]
    RegistryFull {
        /// Registry capacity
        capacity: usize,
    },

    /// No texture registered under the tag
    #[error("No texture registered under tag '{0}'")]
    UnknownTexture(String),

    /// Backend failure
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;
