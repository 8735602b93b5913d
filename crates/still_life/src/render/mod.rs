//! Rendering interfaces
//!
//! The scene composer never talks to a graphics API directly. It drives three
//! seams, each a trait taken by `&mut dyn` so ordering dependencies stay visible
//! at every call site:
//!
//! - [`ShaderInterface`]: named uniform setters for the active program
//! - [`TextureBackend`]: GPU texture object lifetime and unit binding
//! - [`MeshLibrary`]: tessellated primitive shapes and their draw calls
//!
//! The headless implementations in [`headless`] and [`primitives`] record what
//! they are asked to do, which is what the application and tests run against.

pub mod shader;
pub mod texture;
pub mod transform;
pub mod lighting;
pub mod material;
pub mod primitives;
pub mod headless;

pub use shader::{ShaderInterface, uniforms};
pub use texture::{
    TextureBackend, TextureHandle, TextureFormat, TextureParams,
    FilterMode, WrapMode,
};
pub use transform::{TransformParams, compose_model_matrix};
pub use lighting::{LightingEnvironment, DirectionalLight, PointLight, SpotLight};
pub use material::MaterialValues;
pub use primitives::{MeshLibrary, MeshKind, ShapeFaces, ShapeMeshes, ShapeParams, DrawInfo};
pub use headless::{RecordingShader, UniformValue, HeadlessTextures};

use thiserror::Error;

/// Rendering system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Resource creation or management failed
    #[error("Resource creation failed: {0}")]
    ResourceCreationFailed(String),

    /// A draw was requested for a shape that was never loaded
    #[error("Mesh {0:?} has not been loaded")]
    MeshNotLoaded(MeshKind),

    /// A texture unit beyond the backend ceiling was addressed
    #[error("Texture unit {unit} exceeds the {max} available units")]
    InvalidTextureUnit {
        /// Requested unit
        unit: u32,
        /// Units the backend exposes
        max: usize,
    },

    /// A texture handle that is not (or no longer) alive was used
    #[error("Unknown texture handle {0:?}")]
    UnknownTexture(TextureHandle),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
