//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.
//! Per-slide image failures are deliberately absent: they are recovered inside
//! the enrichment stage and surface as [`crate::enrichment::ImageOutcome`] values.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown for any failure of the generation request.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate presentation. Please check your API key and try again.";

/// Message shown for any failure while exporting.
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to export presentation.";

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// The text-generation response could not be parsed or validated against the slide model.
    #[error("Generation format error: {message}")]
    GenerationFormat {
        /// What was wrong with the response.
        message: String,
    },

    /// The response was well formed but contained no slides.
    #[error("No slides were generated from the provided text.")]
    EmptyPresentation,

    /// A slide violated the slide model invariants at export time.
    #[error("Export mapping error on slide {slide}: {message}")]
    ExportMapping {
        /// Zero-based index of the offending slide.
        slide: usize,
        /// Which invariant was violated.
        message: String,
    },

    /// The deck could not be serialized or packaged.
    #[error("Export error: {0}")]
    Export(String),

    /// Caller-supplied input was rejected before any service call.
    #[error("{0}")]
    InvalidInput(String),

    /// A layout edit referenced a slide that does not exist.
    #[error("Slide index {index} out of range (presentation has {len} slides)")]
    SlideIndex {
        /// Requested index.
        index: usize,
        /// Number of slides in the presentation.
        len: usize,
    },

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Generative service error with status context
    #[error("Generative service error: {message}")]
    Service {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a generation format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::GenerationFormat { message: message.into() }
    }

    /// Create a generative service error with HTTP status
    pub fn service_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            400 => Some("The request was rejected - check the model name and input size"),
            401 | 403 => Some("Check the GEMINI_API_KEY environment variable"),
            404 => Some("The requested model was not found"),
            429 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("Generative service error - try again later"),
            _ => None,
        };
        Self::Service {
            message: message.into(),
            status: Some(status),
            hint,
        }
    }

    /// Create a generative service error without an HTTP status
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
            status: None,
            hint: None,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create an export mapping error for a slide
    pub fn export_mapping(slide: usize, message: impl Into<String>) -> Self {
        Self::ExportMapping { slide, message: message.into() }
    }

    /// True for failures that abort a generation request.
    pub const fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Self::GenerationFormat { .. }
                | Self::EmptyPresentation
                | Self::Network(_)
                | Self::Service { .. }
                | Self::Config { .. }
        )
    }

    /// True for failures raised while exporting.
    pub const fn is_export_failure(&self) -> bool {
        matches!(self, Self::ExportMapping { .. } | Self::Export(_) | Self::Io { .. })
    }

    /// The single human-readable message the presentation surface shows.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => msg.clone(),
            Self::SlideIndex { .. } => self.to_string(),
            e if e.is_export_failure() => EXPORT_FAILED_MESSAGE.to_string(),
            _ => GENERATION_FAILED_MESSAGE.to_string(),
        }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn service_status_provides_hints() {
        let err = Error::service_status("Unauthorized", 401);
        match err {
            Error::Service { hint: Some(h), .. } => {
                assert!(h.contains("GEMINI_API_KEY"));
            }
            _ => panic!("Expected Service error with hint"),
        }
    }

    #[test]
    fn request_failures_share_one_message() {
        assert_eq!(Error::EmptyPresentation.user_message(), GENERATION_FAILED_MESSAGE);
        assert_eq!(Error::format("not json").user_message(), GENERATION_FAILED_MESSAGE);
        assert!(Error::EmptyPresentation.is_request_failure());
    }

    #[test]
    fn export_failures_have_distinct_message() {
        let err = Error::export_mapping(2, "empty title");
        assert!(err.is_export_failure());
        assert!(!err.is_request_failure());
        assert_eq!(err.user_message(), EXPORT_FAILED_MESSAGE);
    }

    #[test]
    fn packaging_failures_are_export_failures() {
        let err = Error::Export("Failed to serialize instructions".into());
        assert!(err.is_export_failure());
        assert!(!err.is_request_failure());
        assert_eq!(err.user_message(), EXPORT_FAILED_MESSAGE);
    }

    #[test]
    fn invalid_input_is_shown_verbatim() {
        let err = Error::InvalidInput("Please enter some text".into());
        assert_eq!(err.user_message(), "Please enter some text");
    }
}
