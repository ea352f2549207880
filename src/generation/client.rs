//! Structured generation client.
//!
//! One round trip per request: the prompt and the response schema go out, a
//! JSON array of slide records comes back and is validated as a whole.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::prompt::build_prompt;
use super::schema::{presentation_schema, SCHEMA_VERSION};
use super::TextModel;
use crate::error::{Error, Result};
use crate::slide::{validate_slides, RawSlide, Slide};
use crate::types::GenerationOptions;

/// Regex matching a response wrapped in a Markdown code fence.
#[allow(clippy::expect_used)]
static RE_CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[a-zA-Z]*\s*(.*?)\s*```\s*$").expect("valid regex: RE_CODE_FENCE")
});

/// Turns raw source text into validated slide drafts.
pub struct SlideGenerator<M> {
    model: M,
}

impl<M: TextModel> SlideGenerator<M> {
    /// Create a generator backed by a text model.
    pub const fn new(model: M) -> Self {
        Self { model }
    }

    /// The underlying model.
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Generate slide drafts for `text`.
    ///
    /// Fails with `GenerationFormat` on a malformed response and with
    /// `EmptyPresentation` when the response holds no slides. No retry is
    /// attempted here.
    pub async fn generate(&self, text: &str, options: &GenerationOptions) -> Result<Vec<Slide>> {
        ensure_text(text)?;

        let prompt = build_prompt(text, options);
        let schema = presentation_schema();

        tracing::info!(
            style = %options.style(),
            chars = text.len(),
            schema_version = SCHEMA_VERSION,
            "requesting slide structure"
        );
        let raw = self.model.generate_structured(&prompt, &schema).await?;

        let slides = parse_response(&raw).inspect_err(|e| {
            tracing::warn!("Failed to parse slide structure: {e}");
            tracing::debug!(response = %raw, "unparseable response");
        })?;

        tracing::info!(slides = slides.len(), "slide structure received");
        Ok(slides)
    }
}

/// Reject blank source text before any service call.
pub(crate) fn ensure_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::InvalidInput(
            "Please enter some text to generate a presentation.".to_string(),
        ));
    }
    Ok(())
}

/// Strip a surrounding Markdown code fence, if any.
fn strip_code_fence(raw: &str) -> &str {
    RE_CODE_FENCE
        .captures(raw)
        .and_then(|c| c.get(1))
        .map_or(raw, |m| m.as_str())
}

/// Parse and validate a raw response body into slide drafts.
pub fn parse_response(raw: &str) -> Result<Vec<Slide>> {
    let body = strip_code_fence(raw);

    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::format(format!("response is not valid JSON: {e}")))?;

    let items = value
        .as_array()
        .ok_or_else(|| Error::format("response is not a JSON array of slides"))?;

    if items.is_empty() {
        return Err(Error::EmptyPresentation);
    }

    let records = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            RawSlide::deserialize(item)
                .map_err(|e| Error::format(format!("slide {index} has an invalid shape: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    validate_slides(&records)
}
