//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::service::{
    DEFAULT_IMAGE_CONCURRENCY, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, DEFAULT_TIMEOUT_SECS,
};
use crate::error::Result;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Gemini API key
    pub api_key: String,
    /// Model used for structured slide generation
    pub text_model: String,
    /// Model used for slide illustrations
    pub image_model: String,
    /// Image requests allowed in flight at once (at least 1)
    pub image_concurrency: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Directory exported decks are written to
    pub output_dir: PathBuf,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            api_key: String::new(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            image_concurrency: DEFAULT_IMAGE_CONCURRENCY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Build a config from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(key) = non_blank("GEMINI_API_KEY").or_else(|| non_blank("API_KEY")) {
            config.api_key = key.trim().to_string();
        }

        if let Some(model) = lookup("SLIDECRAFT_TEXT_MODEL").filter(|m| !m.trim().is_empty()) {
            config.text_model = model;
        }

        if let Some(model) = lookup("SLIDECRAFT_IMAGE_MODEL").filter(|m| !m.trim().is_empty()) {
            config.image_model = model;
        }

        if let Some(n) = lookup("SLIDECRAFT_IMAGE_CONCURRENCY").and_then(|v| v.parse::<usize>().ok()) {
            config.image_concurrency = n.max(1);
        }

        if let Some(secs) = lookup("SLIDECRAFT_TIMEOUT_SECS").and_then(|v| v.parse::<u64>().ok()) {
            config.timeout_secs = secs;
        }

        if let Some(dir) = lookup("SLIDECRAFT_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(shellexpand::tilde(&dir).to_string());
        }

        config
    }

    /// Check if a Gemini API key is configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
