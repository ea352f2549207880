//! Gemini REST payload types.
//!
//! Only the fields this crate reads or writes are modelled; everything else
//! in a response is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; a single user turn here.
    pub contents: Vec<Content>,
    /// Structured output settings.
    pub generation_config: GenerationConfig,
}

/// Content container used in both requests and responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Author of the turn (`user` or `model`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts in order.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single content part. Non-text parts deserialize with `text: None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    /// Text of the part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Output constraints for structured generation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always `application/json` for slide generation.
    pub response_mime_type: String,
    /// Schema the response must follow.
    pub response_schema: Value,
}

/// `generateContent` response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate completions; only the first is used.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Present when the prompt itself was blocked.
    #[serde(default)]
    pub prompt_feedback: Option<Value>,
}

/// One candidate completion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content, absent when filtered.
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped, e.g. `STOP` or `SAFETY`.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

/// Imagen `predict` request body.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    /// One instance per prompt.
    pub instances: Vec<PredictInstance>,
    /// Shared generation parameters.
    pub parameters: PredictParameters,
}

/// A single image prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PredictInstance {
    /// Image prompt.
    pub prompt: String,
}

/// Image generation parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    /// Number of images to return.
    pub sample_count: u32,
    /// Aspect ratio such as `16:9`.
    pub aspect_ratio: String,
}

/// Imagen `predict` response envelope.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    /// Generated images; empty when everything was filtered.
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// One generated image.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Image bytes, base64 encoded.
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,
    /// MIME type of the image.
    #[serde(default)]
    pub mime_type: Option<String>,
}
