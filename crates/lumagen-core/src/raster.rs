//! Pixel buffer type and source image decoding.

use std::io::Cursor;

use image::ImageReader;
use thiserror::Error;

/// Errors raised when loading source bytes into a drawable form.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The source bytes are not a decodable image.
    #[error("could not load source image: {0}")]
    Undecodable(String),
}

/// An in-memory raster with RGB pixel data.
///
/// Pixels are stored row-major, 3 bytes per pixel. The generated source image
/// is decoded into one of these once and then treated as immutable; every
/// edit stays descriptive until the export compositor flattens the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGB pixel data, length `width * height * 3`.
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster from dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height * 3) as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Decode encoded image bytes (JPEG or PNG) into an RGB raster.
    pub fn decode(bytes: &[u8]) -> Result<Self, RasterError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| RasterError::Undecodable(e.to_string()))?;
        let img = reader
            .decode()
            .map_err(|e| RasterError::Undecodable(e.to_string()))?;

        Ok(Self::from_rgb_image(img.into_rgb8()))
    }

    /// Create a raster from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert into an `image::RgbImage` for encoding.
    ///
    /// Returns `None` if the buffer shape does not match the dimensions.
    pub fn into_rgb_image(self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels)
    }

    /// Check if this is an empty/invalid raster.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
