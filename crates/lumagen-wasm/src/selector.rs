//! Crop selector bindings.
//!
//! The page forwards pointer events from the preview surface; the selector
//! keeps the draft rectangle clamped to the surface. Confirm by passing the
//! selector to `JsEditSession.confirm_crop`, which consumes it.

use lumagen_core::CropSelector;
use wasm_bindgen::prelude::*;

/// Pointer-event surface for drawing a crop rectangle.
#[wasm_bindgen]
pub struct JsCropSelector {
    inner: CropSelector,
}

#[wasm_bindgen]
impl JsCropSelector {
    /// Create a selector for a preview surface of the given displayed size.
    /// Build a fresh one every time cropping mode is entered.
    #[wasm_bindgen(constructor)]
    pub fn new(surface_width: f32, surface_height: f32) -> Self {
        Self {
            inner: CropSelector::new(surface_width, surface_height),
        }
    }

    /// Pointer pressed at (x, y) relative to the surface's top-left.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.inner.pointer_down(x, y);
    }

    /// Pointer moved; ignored unless a drag is in progress.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.inner.pointer_move(x, y);
    }

    /// Pointer released; the draft rectangle persists.
    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }

    /// Whether a drag is in progress.
    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// The draft rectangle as `{x, y, width, height}`, or `undefined`, for
    /// drawing the selection overlay.
    pub fn draft(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.draft())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsCropSelector {
    pub(crate) fn into_inner(self) -> CropSelector {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_updates_draft() {
        let mut selector = JsCropSelector::new(300.0, 200.0);
        selector.pointer_down(20.0, 30.0);
        selector.pointer_move(120.0, 90.0);
        assert!(selector.is_dragging());

        selector.pointer_up();
        assert!(!selector.is_dragging());

        let draft = selector.into_inner().confirm().unwrap();
        assert_eq!(draft.x, 20.0);
        assert_eq!(draft.width, 100.0);
    }

    #[test]
    fn test_clamps_to_surface() {
        let mut selector = JsCropSelector::new(300.0, 200.0);
        selector.pointer_down(10.0, 10.0);
        selector.pointer_move(800.0, 20.0);

        let draft = selector.into_inner().confirm().unwrap();
        assert_eq!(draft.x + draft.width, 300.0);
    }
}
