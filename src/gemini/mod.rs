//! Gemini API integration.
//!
//! Concrete text and image models backed by the Gemini REST API. Both sit
//! behind [`crate::generation::TextModel`] and [`crate::enrichment::ImageModel`].

/// API client for Gemini requests
pub mod api;
/// Request and response payloads
pub mod types;

pub use api::GeminiClient;
