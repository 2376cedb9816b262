//! Wrapper types for image data crossing the JS boundary.

use lumagen_core::Raster;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// Wraps the core `Raster` type. The host uses this to learn the native
/// dimensions of a generated image (the displayed size comes from layout,
/// the native size from here).
///
/// # Memory Management
///
/// The pixel data lives in WASM memory; `pixels()` copies it out as a
/// `Uint8Array`. wasm-bindgen's finalizer releases the WASM side when the JS
/// handle is collected.
#[wasm_bindgen]
pub struct JsRaster {
    inner: Raster,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a raster from dimensions and RGB pixel data (3 bytes per
    /// pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRaster {
        JsRaster {
            inner: Raster::new(width, height, pixels),
        }
    }

    /// Native width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Native height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Returns RGB pixel data as a Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }
}

impl JsRaster {
    pub(crate) fn from_raster(inner: Raster) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_wrapper_exposes_dimensions() {
        let raster = JsRaster::new(3, 2, vec![7u8; 3 * 2 * 3]);
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.pixels().len(), 18);
    }

    #[test]
    fn test_from_raster() {
        let raster = JsRaster::from_raster(Raster::new(2, 2, vec![0u8; 12]));
        assert_eq!(raster.width(), 2);
    }
}
