//! Tag-indexed texture registry
//!
//! Records are appended in load order and never removed individually, so a
//! record's index is stable for the registry's lifetime and doubles as the
//! texture unit it is bound to. Lookups are linear, first match wins, with
//! exact case-sensitive tag comparison; a second record with the same tag is
//! stored but unreachable.
//!
//! Registration stops at the smaller of the registry capacity and the
//! backend's texture unit count, so every slot that resolves has a unit.

use std::path::Path;

use crate::assets::ImageData;
use crate::render::texture::{TextureBackend, TextureFormat, TextureHandle, TextureParams, DEFAULT_MAX_TEXTURE_UNITS};
use crate::scene::{SceneError, SceneResult};

/// Registry capacity, kept in lockstep with the texture unit ceiling
pub const MAX_TEXTURE_SLOTS: usize = DEFAULT_MAX_TEXTURE_UNITS;

/// A registered texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureRecord {
    /// Lookup key
    pub tag: String,
    /// GPU texture
    pub handle: TextureHandle,
}

/// Append-only, fixed-capacity texture registry
#[derive(Debug)]
pub struct TextureRegistry {
    records: Vec<TextureRecord>,
    capacity: usize,
    params: TextureParams,
}

impl TextureRegistry {
    /// Registry with [`MAX_TEXTURE_SLOTS`] slots
    pub fn new() -> Self {
        Self::with_capacity(MAX_TEXTURE_SLOTS)
    }

    /// Registry with a custom slot count
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
            params: TextureParams::default(),
        }
    }

    /// Decode `path` (flipped vertically) and register it under `tag`
    ///
    /// Returns the slot index. On any failure nothing is registered.
    pub fn load_texture(
        &mut self,
        backend: &mut dyn TextureBackend,
        path: impl AsRef<Path>,
        tag: &str,
    ) -> SceneResult<usize> {
        let path = path.as_ref();
        self.ensure_free_slot(backend.max_texture_units())?;

        let image = ImageData::from_file_flipped(path).map_err(|source| {
            log::error!("Could not load image {}: {}", path.display(), source);
            SceneError::Asset { tag: tag.to_string(), source }
        })?;

        log::info!(
            "Loaded image {} ({}x{}, {} channels)",
            path.display(),
            image.width,
            image.height,
            image.channels
        );

        self.load_image(backend, &image, tag)
    }

    /// Upload already-decoded pixels and register them under `tag`
    pub fn load_image(
        &mut self,
        backend: &mut dyn TextureBackend,
        image: &ImageData,
        tag: &str,
    ) -> SceneResult<usize> {
        self.ensure_free_slot(backend.max_texture_units())?;

        let format = TextureFormat::from_channels(image.channels).ok_or_else(|| {
            log::error!("Texture '{}': {} channel images are not supported", tag, image.channels);
            SceneError::UnsupportedFormat { tag: tag.to_string(), channels: image.channels }
        })?;

        let handle = backend.create_texture(image, format, &self.params).map_err(|e| {
            log::error!("Texture '{}': upload failed: {}", tag, e);
            SceneError::from(e)
        })?;

        let slot = self.records.len();
        self.records.push(TextureRecord { tag: tag.to_string(), handle });
        log::debug!("Registered texture '{}' in slot {} as {:?}", tag, slot, handle);

        Ok(slot)
    }

    /// Bind every record to the texture unit equal to its slot
    ///
    /// Records past the backend's unit ceiling are skipped. Returns the number
    /// bound.
    pub fn bind_all(&self, backend: &mut dyn TextureBackend) -> usize {
        let units = backend.max_texture_units();
        if self.records.len() > units {
            log::warn!(
                "{} textures registered but only {} texture units; the rest stay unbound",
                self.records.len(),
                units
            );
        }

        let mut bound = 0;
        for (unit, record) in self.records.iter().enumerate().take(units) {
            let unit = unit as u32;
            match backend.bind_texture(unit, record.handle) {
                Ok(()) => bound += 1,
                Err(e) => log::error!("Binding texture '{}' to unit {} failed: {}", record.tag, unit, e),
            }
        }
        bound
    }

    /// Slot (and texture unit) of the first record tagged `tag`
    pub fn find_slot(&self, tag: &str) -> Option<usize> {
        self.records.iter().position(|record| record.tag == tag)
    }

    /// Handle of the first record tagged `tag`
    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.records
            .iter()
            .find(|record| record.tag == tag)
            .map(|record| record.handle)
    }

    /// Delete every texture object and empty the registry
    ///
    /// Returns the number of textures released.
    pub fn destroy_all(&mut self, backend: &mut dyn TextureBackend) -> usize {
        let mut released = 0;
        for record in self.records.drain(..) {
            match backend.delete_texture(record.handle) {
                Ok(()) => released += 1,
                Err(e) => log::warn!("Releasing texture '{}' failed: {}", record.tag, e),
            }
        }
        released
    }

    /// Registered records in slot order
    pub fn records(&self) -> &[TextureRecord] {
        &self.records
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether every slot is taken
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    fn ensure_free_slot(&self, units: usize) -> SceneResult<()> {
        let limit = self.capacity.min(units);
        if self.records.len() >= limit {
            log::error!(
                "Texture registry is full ({} slots, {} texture units)",
                self.capacity,
                units
            );
            return Err(SceneError::RegistryFull { capacity: limit });
        }
        Ok(())
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
