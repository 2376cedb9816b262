//! Edit session bindings.
//!
//! `JsEditSession` wraps the core session so the page can drive sliders,
//! presets, geometry and the crop lifecycle, and read back the derived
//! preview style. One instance per editor invocation; construct a fresh one
//! whenever the editor opens on a new image.

use lumagen_core::{render_style, EditSession, Preset};
use wasm_bindgen::prelude::*;

use crate::selector::JsCropSelector;

/// The pending edits for one open editor.
#[wasm_bindgen]
pub struct JsEditSession {
    inner: EditSession,
}

#[wasm_bindgen]
impl JsEditSession {
    /// Create a session at the identity state.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: EditSession::new(),
        }
    }

    // ----- color sliders -----

    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.adjustments.brightness
    }

    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.set_brightness(value);
    }

    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.adjustments.contrast
    }

    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.set_contrast(value);
    }

    #[wasm_bindgen(getter)]
    pub fn saturate(&self) -> f32 {
        self.inner.adjustments.saturate
    }

    #[wasm_bindgen(setter)]
    pub fn set_saturate(&mut self, value: f32) {
        self.inner.set_saturate(value);
    }

    #[wasm_bindgen(getter)]
    pub fn grayscale(&self) -> f32 {
        self.inner.adjustments.grayscale
    }

    #[wasm_bindgen(setter)]
    pub fn set_grayscale(&mut self, value: f32) {
        self.inner.set_grayscale(value);
    }

    #[wasm_bindgen(getter)]
    pub fn sepia(&self) -> f32 {
        self.inner.adjustments.sepia
    }

    #[wasm_bindgen(setter)]
    pub fn set_sepia(&mut self, value: f32) {
        self.inner.set_sepia(value);
    }

    #[wasm_bindgen(getter)]
    pub fn invert(&self) -> f32 {
        self.inner.adjustments.invert
    }

    #[wasm_bindgen(setter)]
    pub fn set_invert(&mut self, value: f32) {
        self.inner.set_invert(value);
    }

    // ----- presets -----

    /// Apply a named preset ("grayscale", "sepia" or "invert"), replacing
    /// the whole slider stack.
    pub fn apply_preset(&mut self, name: &str) -> Result<(), JsValue> {
        let preset = match name {
            "grayscale" => Preset::Grayscale,
            "sepia" => Preset::Sepia,
            "invert" => Preset::Invert,
            other => return Err(JsValue::from_str(&format!("unknown preset: {other}"))),
        };
        self.inner.apply_preset(preset);
        Ok(())
    }

    /// Reset every slider to its default (the "Reset All" button).
    pub fn reset_adjustments(&mut self) {
        self.inner.reset_adjustments();
    }

    // ----- geometry -----

    /// Rotate a quarter turn clockwise.
    pub fn rotate_cw(&mut self) {
        self.inner.rotate_cw();
    }

    /// Mirror left-to-right.
    pub fn flip_horizontal(&mut self) {
        self.inner.flip_horizontal();
    }

    /// Mirror top-to-bottom.
    pub fn flip_vertical(&mut self) {
        self.inner.flip_vertical();
    }

    /// Current rotation in degrees (0, 90, 180 or 270).
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> u16 {
        self.inner.transform.rotation.degrees()
    }

    // ----- crop lifecycle -----

    /// Whether a crop selection is in progress.
    #[wasm_bindgen(getter)]
    pub fn is_cropping(&self) -> bool {
        self.inner.is_cropping
    }

    /// Enter cropping mode. Pair with a fresh [`JsCropSelector`] sized to
    /// the preview surface.
    pub fn begin_crop(&mut self) {
        self.inner.begin_crop();
    }

    /// Promote the selector's draft to the applied crop (if it has positive
    /// area) and exit cropping mode. Consumes the selector.
    pub fn confirm_crop(&mut self, selector: JsCropSelector) {
        self.inner.confirm_crop(selector.into_inner().confirm());
    }

    /// Exit cropping mode, leaving any previously applied crop in place.
    pub fn cancel_crop(&mut self) {
        self.inner.cancel_crop();
    }

    /// The applied crop rectangle as `{x, y, width, height}`, or
    /// `undefined` when the full frame is selected.
    pub fn applied_crop(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.crop).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // ----- derived preview style -----

    /// The CSS `filter` value for the preview element.
    pub fn preview_filter(&self) -> String {
        render_style(&self.inner.adjustments, &self.inner.transform).filter
    }

    /// The CSS `transform` value for the preview element.
    pub fn preview_transform(&self) -> String {
        render_style(&self.inner.adjustments, &self.inner.transform).transform
    }

    // ----- persistence across the boundary -----

    /// Serialize the session state to a plain JS object.
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Rebuild a session from [`JsEditSession::to_json`] output.
    pub fn from_json(value: JsValue) -> Result<JsEditSession, JsValue> {
        let inner: EditSession =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for JsEditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl JsEditSession {
    /// Borrow the core session for the export bindings.
    pub(crate) fn inner(&self) -> &EditSession {
        &self.inner
    }
}


/// WASM-specific tests that construct `JsValue`s; run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_unknown_preset_is_an_error() {
        let mut session = JsEditSession::new();
        assert!(session.apply_preset("vignette").is_err());
    }

    #[wasm_bindgen_test]
    fn test_session_json_round_trip() {
        let mut session = JsEditSession::new();
        session.set_brightness(130.0);
        session.rotate_cw();

        let value = session.to_json().unwrap();
        let restored = JsEditSession::from_json(value).unwrap();
        assert_eq!(restored.brightness(), 130.0);
        assert_eq!(restored.rotation(), 90);
    }
}
