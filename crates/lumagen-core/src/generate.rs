//! Remote image-generation client.
//!
//! One prompt in, one encoded image out. The service handle is constructed
//! once at startup from an explicit [`ServiceConfig`] and passed to whoever
//! issues requests; requests are single-attempt with no retry and no timeout,
//! and the caller reports failures whenever the call rejects.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model requested from the generation service by default.
pub const DEFAULT_MODEL: &str = "imagen-4.0-generate-001";

/// Default API root for the generation service.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Errors raised by prompt validation or a generation attempt.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The prompt is blank. Raised locally, never contacts the service.
    #[error("please enter a prompt to generate an image")]
    EmptyPrompt,

    /// The request could not be sent or the transport failed mid-flight.
    #[error("failed to generate image: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("failed to generate image: service returned status {0}")]
    Status(u16),

    /// The service answered, but with no usable image.
    #[error("no image was generated; the response was empty")]
    EmptyResponse,

    /// The response body or its image payload could not be read.
    #[error("could not read the generated image: {0}")]
    BadPayload(String),
}

/// Supported output aspect ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "3:4")]
    Portrait,
    #[serde(rename = "4:3")]
    Landscape,
    #[serde(rename = "9:16")]
    Tall,
    #[serde(rename = "16:9")]
    Wide,
}

impl AspectRatio {
    /// Every supported ratio, in the order the UI offers them.
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Portrait,
        AspectRatio::Landscape,
        AspectRatio::Tall,
        AspectRatio::Wide,
    ];

    /// The ratio label, e.g. `"16:9"`.
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Tall => "9:16",
            AspectRatio::Wide => "16:9",
        }
    }
}

impl std::str::FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectRatio::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == s)
            .ok_or_else(|| format!("unsupported aspect ratio: {s}"))
    }
}

/// Connection settings for the generation service.
///
/// Built once by the host at startup (deserialized from whatever it keeps
/// its settings in) and handed to [`ImageService::new`]; nothing here reads
/// the environment or any global.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Reject blank or whitespace-only prompts before any request is issued.
pub fn validate_prompt(prompt: &str) -> Result<&str, GenerateError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(GenerateError::EmptyPrompt);
    }
    Ok(trimmed)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateImagesRequest<'a> {
    prompt: &'a str,
    aspect_ratio: AspectRatio,
    number_of_images: u32,
    output_mime_type: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateImagesResponse {
    #[serde(default)]
    generated_images: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    image: GeneratedImageData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedImageData {
    image_bytes: String,
}

/// Handle to the remote text-to-image service.
#[derive(Debug, Clone)]
pub struct ImageService {
    config: ServiceConfig,
    client: reqwest::Client,
}

impl ImageService {
    /// Create a service handle from explicit configuration.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Request one generated image for the prompt.
    ///
    /// Returns the encoded image bytes on success. A single attempt: any
    /// transport failure, error status, empty result set, or unreadable
    /// payload surfaces as a [`GenerateError`] for the caller to report.
    pub async fn generate(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<Vec<u8>, GenerateError> {
        let prompt = validate_prompt(prompt)?;
        let url = format!(
            "{}/models/{}:generateImages",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        log::debug!("requesting {} image for prompt", aspect_ratio.as_str());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateImagesRequest {
                prompt,
                aspect_ratio,
                number_of_images: 1,
                output_mime_type: "image/jpeg",
            })
            .send()
            .await
            .map_err(|e| GenerateError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("generation request rejected with status {status}");
            return Err(GenerateError::Status(status.as_u16()));
        }

        let body: GenerateImagesResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::BadPayload(e.to_string()))?;
        first_image_bytes(body)
    }
}

/// Pull the first image out of a response and decode its base64 payload.
fn first_image_bytes(body: GenerateImagesResponse) -> Result<Vec<u8>, GenerateError> {
    let first = body
        .generated_images
        .into_iter()
        .next()
        .ok_or(GenerateError::EmptyResponse)?;
    BASE64
        .decode(first.image.image_bytes.as_bytes())
        .map_err(|e| GenerateError::BadPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_labels() {
        assert_eq!(AspectRatio::Square.as_str(), "1:1");
        assert_eq!(AspectRatio::Wide.as_str(), "16:9");
    }

    #[test]
    fn test_aspect_ratio_parse_round_trip() {
        for ratio in AspectRatio::ALL {
            assert_eq!(ratio.as_str().parse::<AspectRatio>().unwrap(), ratio);
        }
        assert!("2:1".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_validate_prompt_rejects_blank() {
        assert!(matches!(
            validate_prompt(""),
            Err(GenerateError::EmptyPrompt)
        ));
        assert!(matches!(
            validate_prompt("   \n\t"),
            Err(GenerateError::EmptyPrompt)
        ));
    }

    #[test]
    fn test_validate_prompt_trims() {
        assert_eq!(validate_prompt("  a red cube  ").unwrap(), "a red cube");
    }

    #[test]
    fn test_request_matches_wire_contract() {
        let request = GenerateImagesRequest {
            prompt: "a red cube",
            aspect_ratio: AspectRatio::Square,
            number_of_images: 1,
            output_mime_type: "image/jpeg",
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "prompt": "a red cube",
                "aspectRatio": "1:1",
                "numberOfImages": 1,
                "outputMimeType": "image/jpeg",
            })
        );
    }

    #[test]
    fn test_response_payload_decodes() {
        let encoded = BASE64.encode([0xFFu8, 0xD8, 0xFF, 0xD9]);
        let body: GenerateImagesResponse = serde_json::from_str(&format!(
            r#"{{"generatedImages":[{{"image":{{"imageBytes":"{encoded}"}}}}]}}"#
        ))
        .unwrap();

        let bytes = first_image_bytes(body).unwrap();
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xD9]);
    }

    #[test]
    fn test_empty_result_set_is_an_error() {
        let body: GenerateImagesResponse =
            serde_json::from_str(r#"{"generatedImages":[]}"#).unwrap();
        assert!(matches!(
            first_image_bytes(body),
            Err(GenerateError::EmptyResponse)
        ));

        // A body with the field missing entirely behaves the same.
        let body: GenerateImagesResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            first_image_bytes(body),
            Err(GenerateError::EmptyResponse)
        ));
    }

    #[test]
    fn test_corrupt_base64_is_a_payload_error() {
        let body: GenerateImagesResponse = serde_json::from_str(
            r#"{"generatedImages":[{"image":{"imageBytes":"not base64!!"}}]}"#,
        )
        .unwrap();
        assert!(matches!(
            first_image_bytes(body),
            Err(GenerateError::BadPayload(_))
        ));
    }

    #[test]
    fn test_generated_payload_exports_square() {
        use crate::{compose_export, encode_jpeg, DisplaySize, EditSession, Raster};

        // A square "generated" image, wrapped the way the service returns it.
        let jpeg = encode_jpeg(&vec![200u8; 32 * 32 * 3], 32, 32, 95).unwrap();
        let encoded = BASE64.encode(&jpeg);
        let body: GenerateImagesResponse = serde_json::from_str(&format!(
            r#"{{"generatedImages":[{{"image":{{"imageBytes":"{encoded}"}}}}]}}"#
        ))
        .unwrap();
        let bytes = first_image_bytes(body).unwrap();

        // A fresh session is the identity; an immediate export re-encodes
        // the full frame and keeps it square.
        let session = EditSession::new();
        let display = DisplaySize {
            width: 32.0,
            height: 32.0,
        };
        let out = compose_export(&bytes, &session, display).unwrap();
        let decoded = Raster::decode(&out).unwrap();
        assert_eq!((decoded.width, decoded.height), (32, 32));
    }

    #[test]
    fn test_config_defaults() {
        let config: ServiceConfig = serde_json::from_str(r#"{"apiKey":"secret"}"#).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_overrides() {
        let config: ServiceConfig = serde_json::from_str(
            r#"{"apiKey":"secret","model":"imagen-3.0","baseUrl":"https://proxy.local/v1"}"#,
        )
        .unwrap();
        assert_eq!(config.model, "imagen-3.0");
        assert_eq!(config.base_url, "https://proxy.local/v1");
    }
}
