//! # Still Life
//!
//! Composes a fixed tabletop still life (jug, plate, cup, bread basket and
//! bread) out of primitive shapes, tagged textures and Phong materials, and
//! drives it through a pluggable immediate-mode graphics interface.
//!
//! ## Features
//!
//! - **Texture Registry**: tag-indexed, append-only, slot == texture unit
//! - **Material Registry**: tagged Phong materials, optionally from config
//! - **Transform Composer**: scale, XYZ rotation in degrees, translation
//! - **Scene Director**: a constant layout table drawn by one generic loop
//! - **Headless Backends**: recording shader, texture and mesh doubles
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use still_life::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::default();
//!     let mut scene = SceneManager::new(&config);
//!
//!     let mut shader = RecordingShader::new();
//!     let mut textures = HeadlessTextures::default();
//!     let mut meshes = ShapeMeshes::new();
//!
//!     scene.prepare_scene(&mut meshes, &mut textures);
//!     let stats = scene.render_scene(&mut shader, &mut meshes);
//!     println!("{} draws", stats.draws_issued);
//!
//!     scene.destroy_textures(&mut textures);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Configuration
pub mod core;
pub mod config;

pub mod foundation;
pub mod assets;
pub mod render;
pub mod scene;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        core::{ApplicationConfig, EngineConfig, AssetConfig, SceneConfig, Config, ConfigError},
        foundation::math::{Vec2, Vec3, Vec4, Mat4},
        assets::{AssetError, ImageData},
        render::{
            ShaderInterface, TextureBackend, MeshLibrary,
            RecordingShader, HeadlessTextures, ShapeMeshes,
            MeshKind, ShapeFaces, TransformParams, MaterialValues,
            LightingEnvironment, RenderError,
        },
        scene::{
            SceneManager, SceneError, PrepareReport, FrameStats,
            TextureRegistry, MaterialRegistry, ObjectMaterial,
        },
    };
}
