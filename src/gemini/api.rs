//! Gemini REST client.
//!
//! Structured text generation through `generateContent` and image generation
//! through Imagen `predict`, authenticated with an API key header.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;
use crate::constants::service::IMAGE_ASPECT_RATIO;
use crate::enrichment::ImageModel;
use crate::error::{Error, Result};
use crate::gemini::types::*;
use crate::generation::TextModel;
use crate::slide::ImageData;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// MIME type assumed when the image service does not name one.
const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Client for the Gemini text and Imagen image endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    text_model: String,
    image_model: String,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client from config
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Check if an API key is configured
    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Make an authenticated POST request to a model endpoint
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        if !self.is_configured() {
            return Err(Error::config(
                "Gemini client not configured",
                "Set the GEMINI_API_KEY environment variable",
            ));
        }

        let url = format!("{BASE_URL}{path}");
        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {path} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %detail, "service error body");
            return Err(Error::service_status(
                format!("Request to {path} returned {status}"),
                status.as_u16(),
            ));
        }

        resp.json()
            .await
            .map_err(|e| Error::service(format!("Invalid JSON envelope from {path}: {e}")))
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt.to_string()) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema.clone(),
            },
        };

        let path = format!("/models/{}:generateContent", self.text_model);
        let response: GenerateContentResponse = self.post(&path, &request).await?;

        if let Some(reason) = response.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            tracing::debug!(finish_reason = reason, "text generation finished");
        }

        response.text().ok_or_else(|| match &response.prompt_feedback {
            Some(feedback) => Error::format(format!("response blocked: {feedback}")),
            None => Error::format("response contained no text"),
        })
    }
}

#[async_trait]
impl ImageModel for GeminiClient {
    async fn generate_image(&self, prompt: &str) -> Result<Option<ImageData>> {
        let request = PredictRequest {
            instances: vec![PredictInstance { prompt: prompt.to_string() }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: IMAGE_ASPECT_RATIO.to_string(),
            },
        };

        let path = format!("/models/{}:predict", self.image_model);
        let response: PredictResponse = self.post(&path, &request).await?;

        let Some(prediction) = response.predictions.into_iter().next() else {
            return Ok(None);
        };
        let Some(bytes) = prediction.bytes_base64_encoded else {
            return Ok(None);
        };

        let mime = prediction.mime_type.as_deref().unwrap_or(DEFAULT_IMAGE_MIME);
        ImageData::from_payload(&bytes, mime).map(Some)
    }
}
