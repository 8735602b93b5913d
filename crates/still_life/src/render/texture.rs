//! GPU texture interface
//!
//! Textures are created from decoded [`ImageData`] with explicit sampling
//! parameters, bound to numbered texture units, and deleted at teardown.

use crate::assets::ImageData;
use crate::render::RenderResult;

/// Texture units exposed by the reference pipeline; also the registry capacity
pub const DEFAULT_MAX_TEXTURE_UNITS: usize = 16;

/// Handle for a GPU texture resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Texture filtering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Nearest neighbor filtering
    Nearest,
    /// Bilinear filtering
    Linear,
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Repeat the texture
    Repeat,
    /// Mirror the texture
    MirroredRepeat,
    /// Clamp to edge
    ClampToEdge,
}

/// Internal pixel format of an uploaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    /// 8-bit RGB
    Rgb8,
    /// 8-bit RGBA
    Rgba8,
}

impl TextureFormat {
    /// Pick the internal format for a channel count; only 3 and 4 are uploadable
    pub fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(Self::Rgb8),
            4 => Some(Self::Rgba8),
            _ => None,
        }
    }

    /// Bytes per pixel
    pub fn channels(self) -> u8 {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

/// Texture creation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureParams {
    /// Minification filter
    pub min_filter: FilterMode,
    /// Magnification filter
    pub mag_filter: FilterMode,
    /// Wrap mode along U
    pub wrap_s: WrapMode,
    /// Wrap mode along V
    pub wrap_t: WrapMode,
    /// Generate a full mipmap chain after upload
    pub generate_mipmaps: bool,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Linear,
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            generate_mipmaps: true,
        }
    }
}

/// Number of levels in a full mipmap chain down to 1x1
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    let largest = width.max(height).max(1);
    u32::BITS - largest.leading_zeros()
}

/// GPU texture object operations
pub trait TextureBackend {
    /// Allocate a texture, upload `image` in `format` and apply `params`
    fn create_texture(
        &mut self,
        image: &ImageData,
        format: TextureFormat,
        params: &TextureParams,
    ) -> RenderResult<TextureHandle>;

    /// Bind `handle` to texture unit `unit`
    fn bind_texture(&mut self, unit: u32, handle: TextureHandle) -> RenderResult<()>;

    /// Release a texture object
    fn delete_texture(&mut self, handle: TextureHandle) -> RenderResult<()>;

    /// Number of texture units available for binding
    fn max_texture_units(&self) -> usize;
}
