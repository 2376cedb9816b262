//! Lumagen WASM - WebAssembly bindings for Lumagen
//!
//! This crate exposes the lumagen-core editing pipeline to the browser UI.
//!
//! # Module Structure
//!
//! - `session` - The edit session: sliders, presets, geometry, crop lifecycle
//! - `selector` - Pointer-event surface for drawing a crop rectangle
//! - `export` - Export compositing and download filenames
//! - `generate` - The remote image-generation client
//! - `flight` - Per-operation lifecycle state for disabling controls
//! - `types` - Wrapper types for decoded image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditSession, export_edited } from '@lumagen/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsEditSession();
//! session.brightness = 120;
//! preview.style.filter = session.preview_filter();
//! ```

use wasm_bindgen::prelude::*;

mod export;
mod flight;
mod generate;
mod logger;
mod selector;
mod session;
mod types;

// Re-export public types
pub use export::{decode_image, export_edited, export_file_name};
pub use flight::JsFlight;
pub use generate::JsImageService;
pub use selector::JsCropSelector;
pub use session::JsEditSession;
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
