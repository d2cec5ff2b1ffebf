//! Blocking client for the Gemini/Imagen REST API.
//!
//! Generation uses the Imagen `:predict` endpoint, edits the Gemini
//! `:generateContent` endpoint with an inline image part. Image bytes are
//! base64 on the wire and raw bytes everywhere else. Any failure is
//! logged with its cause and surfaced as one of the fixed user-facing
//! messages below.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ImageService;
use crate::config::GatewayConfig;
use crate::error::{DarkroomError, Result};
use crate::payload::ImagePayload;

/// User-facing message for any generation failure.
pub const ERR_GENERATE_FAILED: &str =
    "Failed to generate image. Please check your prompt or API key.";
/// User-facing message for any edit failure.
pub const ERR_EDIT_FAILED: &str =
    "Failed to edit image. The revision might be too complex or there was an API issue.";

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http: reqwest::blocking::Client,
    config: GatewayConfig,
}

impl GeminiClient {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("darkroom/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{model}:{method}", self.config.api_base)
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or(DarkroomError::MissingApiKey)
    }

    fn post<Req, Resp>(&self, url: &str, key: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, key)
            .json(body)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}

impl ImageService for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<ImagePayload> {
        let key = self.api_key()?;
        let url = self.endpoint(&self.config.generate_model, "predict");
        let request = GenerateRequest {
            instances: [GenerateInstance { prompt }],
            parameters: GenerateParameters {
                sample_count: 1,
                aspect_ratio: "1:1",
                output_mime_type: "image/png",
            },
        };

        debug!(model = %self.config.generate_model, "requesting image generation");
        let outcome = self
            .post::<_, GenerateResponse>(&url, key, &request)
            .and_then(extract_generated);
        match outcome {
            Ok(payload) => {
                debug!(mime = payload.mime(), bytes = payload.len(), "generation succeeded");
                Ok(payload)
            }
            Err(err) => {
                warn!(error = %err, "image generation failed");
                Err(DarkroomError::Gateway(ERR_GENERATE_FAILED.to_string()))
            }
        }
    }

    fn edit(&self, source: &ImagePayload, prompt: &str) -> Result<ImagePayload> {
        let key = self.api_key()?;
        let url = self.endpoint(&self.config.edit_model, "generateContent");
        let request = EditRequest {
            contents: [Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: source.mime().to_string(),
                            data: source.encode_base64(),
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some(prompt.to_string()),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["IMAGE", "TEXT"],
            },
        };

        debug!(model = %self.config.edit_model, source_mime = source.mime(), "requesting image edit");
        let outcome = self
            .post::<_, EditResponse>(&url, key, &request)
            .and_then(extract_edited);
        match outcome {
            Ok(payload) => {
                debug!(mime = payload.mime(), bytes = payload.len(), "edit succeeded");
                Ok(payload)
            }
            Err(err) => {
                warn!(error = %err, "image edit failed");
                Err(DarkroomError::Gateway(ERR_EDIT_FAILED.to_string()))
            }
        }
    }
}

fn extract_generated(response: GenerateResponse) -> Result<ImagePayload> {
    let prediction = response.predictions.into_iter().next().ok_or_else(|| {
        DarkroomError::Gateway("Image generation failed, no images were returned.".to_string())
    })?;
    ImagePayload::from_base64(&prediction.bytes_base64_encoded, prediction.mime_type)
}

fn extract_edited(response: EditResponse) -> Result<ImagePayload> {
    // Only the first candidate is consulted; the image may sit after a
    // text part, so scan for the first inline-data part.
    let image = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().find_map(|p| p.inline_data))
        .ok_or_else(|| {
            DarkroomError::Gateway(
                "Image editing failed. The model did not return an image.".to_string(),
            )
        })?;
    ImagePayload::from_base64(&image.data, image.mime_type)
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    instances: [GenerateInstance<'a>; 1],
    parameters: GenerateParameters<'a>,
}

#[derive(Serialize)]
struct GenerateInstance<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateParameters<'a> {
    sample_count: u32,
    aspect_ratio: &'a str,
    output_mime_type: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: String,
    mime_type: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditRequest<'a> {
    contents: [Content; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'a str; 2],
}

#[derive(Deserialize)]
struct EditResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}
