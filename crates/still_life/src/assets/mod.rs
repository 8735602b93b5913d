//! Asset loading
//!
//! Decodes image files into CPU-side pixel buffers ready for texture upload.

pub mod image_loader;

pub use image_loader::ImageData;

use std::path::PathBuf;

use thiserror::Error;

/// Image loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// No file at the path
    #[error("Image not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File exists but couldn't be decoded
    #[error("Decode failed: {0}")]
    Decode(String),

    /// Pixel parameters don't describe a valid image
    #[error("Invalid image data: {0}")]
    InvalidData(String),

    /// Reading the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
