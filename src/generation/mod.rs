//! Structured slide generation.
//!
//! Sends the source text, a style-conditioned instruction and the response
//! schema to a text model, then validates the reply into slide drafts.

/// Generation client
pub mod client;
/// Instruction builder
pub mod prompt;
/// Response schema
pub mod schema;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use client::{parse_response, SlideGenerator};

/// A text-generation service that can be constrained by a response schema.
///
/// Implementations return the raw response body; parsing and validation stay
/// with [`SlideGenerator`].
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Run one schema-constrained generation and return the raw text body.
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String>;
}

#[async_trait]
impl<T: TextModel + ?Sized> TextModel for std::sync::Arc<T> {
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String> {
        (**self).generate_structured(prompt, schema).await
    }
}
