//! Image loading utilities for texture data
//!
//! Decodes PNG and JPEG files with the `image` crate. Unlike a generic RGBA
//! loader, the native channel count is preserved so callers can decide which
//! layouts they accept. Pixel data can be flipped on load so that row 0 is the
//! bottom of the image, matching texture coordinates with a bottom-left origin.

use std::path::Path;

use image::DynamicImage;

use crate::assets::AssetError;

/// Loaded image data ready for GPU upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw 8-bit pixel data, tightly packed rows
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path, top row first
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        Self::open(path.as_ref(), false)
    }

    /// Load an image from a file path with rows flipped vertically
    ///
    /// The first row of `data` is the bottom row of the source image.
    pub fn from_file_flipped<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        Self::open(path.as_ref(), true)
    }

    /// Load image from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::Decode(format!("in-memory image: {e}")))?;

        let image = Self::from_dynamic(img);
        log::debug!(
            "Loaded image {}x{} ({} channels) from memory",
            image.width,
            image.height,
            image.channels
        );
        Ok(image)
    }

    /// Create a solid color image; the channel count is `color.len()`
    pub fn solid_color(width: u32, height: u32, color: &[u8]) -> Result<Self, AssetError> {
        let channels = u8::try_from(color.len())
            .ok()
            .filter(|c| (1..=4).contains(c))
            .ok_or_else(|| {
                AssetError::InvalidData(format!("{} color components per pixel", color.len()))
            })?;

        let pixel_count = width as usize * height as usize;
        let data = color.repeat(pixel_count);

        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    fn open(path: &Path, flip: bool) -> Result<Self, AssetError> {
        log::debug!("Loading image from: {:?}", path);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }

        let img = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(io) => AssetError::Io(io),
            other => AssetError::Decode(format!("{}: {other}", path.display())),
        })?;

        let img = if flip { img.flipv() } else { img };
        let image = Self::from_dynamic(img);

        log::debug!(
            "Decoded image {}x{} ({} channels) from {:?}",
            image.width,
            image.height,
            image.channels,
            path
        );
        Ok(image)
    }

    /// Convert to 8 bits per channel, keeping the channel count
    fn from_dynamic(img: DynamicImage) -> Self {
        let channels = img.color().channel_count();
        let (width, height) = (img.width(), img.height());

        let data = match channels {
            1 => img.into_luma8().into_raw(),
            2 => img.into_luma_alpha8().into_raw(),
            3 => img.into_rgb8().into_raw(),
            _ => img.into_rgba8().into_raw(),
        };

        Self {
            data,
            width,
            height,
            channels: channels.min(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_solid_color_image() {
        let img = ImageData::solid_color(4, 4, &[255, 0, 0, 255]).unwrap();
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.channels, 4);
        assert_eq!(img.data.len(), 4 * 4 * 4);

        // First pixel is red
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_solid_color_rejects_bad_component_count() {
        assert!(ImageData::solid_color(2, 2, &[]).is_err());
        assert!(ImageData::solid_color(2, 2, &[1, 2, 3, 4, 5]).is_err());
    }

    #[test]
    fn test_load_preserves_channel_count() {
        let dir = tempfile::tempdir().unwrap();

        let rgb_path = dir.path().join("rgb.png");
        RgbImage::from_pixel(3, 2, Rgb([10, 20, 30])).save(&rgb_path).unwrap();
        let rgb = ImageData::from_file(&rgb_path).unwrap();
        assert_eq!((rgb.width, rgb.height, rgb.channels), (3, 2, 3));
        assert_eq!(rgb.data.len(), 3 * 2 * 3);

        let rgba_path = dir.path().join("rgba.png");
        RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4])).save(&rgba_path).unwrap();
        let rgba = ImageData::from_file(&rgba_path).unwrap();
        assert_eq!(rgba.channels, 4);
        assert_eq!(&rgba.data[0..4], &[1, 2, 3, 4]);

        let gray_path = dir.path().join("gray.png");
        GrayImage::from_pixel(2, 2, Luma([7])).save(&gray_path).unwrap();
        let gray = ImageData::from_file(&gray_path).unwrap();
        assert_eq!(gray.channels, 1);
    }

    #[test]
    fn test_flipped_load_puts_bottom_row_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stripes.png");

        // Top row red, bottom row blue
        let mut img = RgbImage::new(1, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(0, 1, Rgb([0, 0, 255]));
        img.save(&path).unwrap();

        let upright = ImageData::from_file(&path).unwrap();
        assert_eq!(&upright.data[0..3], &[255, 0, 0]);

        let flipped = ImageData::from_file_flipped(&path).unwrap();
        assert_eq!(&flipped.data[0..3], &[0, 0, 255]);
        assert_eq!(&flipped.data[3..6], &[255, 0, 0]);
    }

    #[test]
    fn test_nonexistent_file() {
        let result = ImageData::from_file("nonexistent_file.png");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_garbage_file_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(ImageData::from_file(&path).is_err());
    }

    #[test]
    fn test_from_bytes_round_trip_through_png_encoder() {
        let mut bytes = Vec::new();
        RgbImage::from_pixel(2, 1, Rgb([5, 6, 7]))
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let img = ImageData::from_bytes(&bytes).unwrap();
        assert_eq!(img.channels, 3);
        assert_eq!(img.data, vec![5, 6, 7, 5, 6, 7]);
    }
}
