//! Export bindings.
//!
//! The page hands over the original source bytes, the session, and the size
//! the preview rendered the image at; it gets back JPEG bytes to persist
//! under [`export_file_name`]. The download trigger itself stays on the JS
//! side.

use lumagen_core::{compose_export, DisplaySize, Raster};
use wasm_bindgen::prelude::*;

use crate::session::JsEditSession;
use crate::types::JsRaster;

/// Decode encoded image bytes (JPEG or PNG) into a raster.
///
/// The host calls this once per generated image to learn its native
/// dimensions; the displayed dimensions come from layout.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    Raster::decode(bytes)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Flatten the session's edits onto the source image and encode for
/// download.
///
/// `display_width`/`display_height` are the dimensions the preview element
/// rendered the image at; the applied crop is interpreted in that space.
#[wasm_bindgen]
pub fn export_edited(
    source: &[u8],
    session: &JsEditSession,
    display_width: f32,
    display_height: f32,
) -> Result<Vec<u8>, JsValue> {
    compose_export(
        source,
        session.inner(),
        DisplaySize {
            width: display_width,
            height: display_height,
        },
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The filename the exported bytes should be saved under:
/// `edited-image.jpeg` for a composed export, `generated-image.jpeg` for an
/// unedited original download.
#[wasm_bindgen]
pub fn export_file_name(edited: bool) -> String {
    lumagen_core::export_file_name(edited).to_string()
}
