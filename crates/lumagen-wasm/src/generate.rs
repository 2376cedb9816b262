//! Generation client bindings.
//!
//! The host constructs one `JsImageService` at startup from its settings
//! object and keeps it for the life of the page. Each `generate` call is a
//! single attempt; pair it with a [`crate::JsFlight`] so only one request is
//! in flight at a time.

use js_sys::Uint8Array;
use lumagen_core::{AspectRatio, ImageService, ServiceConfig};
use wasm_bindgen::prelude::*;

/// Handle to the remote text-to-image service.
#[wasm_bindgen]
pub struct JsImageService {
    inner: ImageService,
}

#[wasm_bindgen]
impl JsImageService {
    /// Create a service handle from a config object:
    /// `{apiKey, model?, baseUrl?}`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsImageService, JsValue> {
        let config: ServiceConfig =
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner: ImageService::new(config),
        })
    }

    /// Request one generated image.
    ///
    /// `aspect_ratio` is one of `"1:1"`, `"3:4"`, `"4:3"`, `"9:16"`,
    /// `"16:9"`. Resolves to the encoded image bytes, or rejects with a
    /// user-facing message. Blank prompts are rejected locally without
    /// contacting the service.
    pub async fn generate(
        &self,
        prompt: String,
        aspect_ratio: String,
    ) -> Result<Uint8Array, JsValue> {
        let ratio: AspectRatio = aspect_ratio
            .parse()
            .map_err(|e: String| JsValue::from_str(&e))?;
        let bytes = self
            .inner
            .generate(&prompt, ratio)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Uint8Array::from(bytes.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use lumagen_core::AspectRatio;

    #[test]
    fn test_ratio_strings_cover_the_ui_options() {
        for label in ["1:1", "3:4", "4:3", "9:16", "16:9"] {
            assert!(label.parse::<AspectRatio>().is_ok());
        }
    }
}
