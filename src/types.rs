//! Generation request types.
//!
//! The style tag and the language / tone directives that condition a single
//! generation request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::defaults;
use crate::error::{Error, Result};

/// Presentation style: the policy communicated to the text-generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PresentationStyle {
    /// Mix of text and visuals.
    #[default]
    Balanced,
    /// Dense text, no generated images.
    TextFocused,
    /// Minimal text, an image on most slides.
    VisualFocused,
}

impl PresentationStyle {
    /// Returns all style variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Balanced, Self::TextFocused, Self::VisualFocused]
    }

    /// Returns the wire tag of this style.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Balanced => "BALANCED",
            Self::TextFocused => "TEXT_FOCUSED",
            Self::VisualFocused => "VISUAL_FOCUSED",
        }
    }

    /// Whether the image enrichment stage runs for this style.
    #[must_use]
    pub const fn allows_images(self) -> bool {
        !matches!(self, Self::TextFocused)
    }
}

impl fmt::Display for PresentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PresentationStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|style| style.tag() == normalized)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown presentation style: {s}")))
    }
}

/// A language or tone selection: one of the offered presets, or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directive {
    /// A value picked from the preset list.
    Preset(String),
    /// A user-typed value; must not be blank.
    Custom(String),
}

impl Directive {
    /// The effective text of this directive, or `None` if a custom value is blank.
    fn resolve(&self) -> Option<&str> {
        match self {
            Self::Preset(value) => Some(value.as_str()),
            Self::Custom(value) => {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
        }
    }
}

/// Validated directives for one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    style: PresentationStyle,
    language: String,
    tone: String,
}

impl GenerationOptions {
    /// Resolve language and tone selections.
    ///
    /// A blank custom language or tone is rejected before any service call.
    pub fn new(style: PresentationStyle, language: &Directive, tone: &Directive) -> Result<Self> {
        match (language.resolve(), tone.resolve()) {
            (Some(language), Some(tone)) => Ok(Self {
                style,
                language: language.to_string(),
                tone: tone.to_string(),
            }),
            _ => Err(Error::InvalidInput(
                "Please specify the custom language and tone.".to_string(),
            )),
        }
    }

    /// Options with the default language and tone.
    pub fn with_style(style: PresentationStyle) -> Self {
        Self {
            style,
            language: defaults::LANGUAGE.to_string(),
            tone: defaults::TONE.to_string(),
        }
    }

    /// The presentation style.
    pub const fn style(&self) -> PresentationStyle {
        self.style
    }

    /// Output language for titles, bullets and notes.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Tone directive.
    pub fn tone(&self) -> &str {
        &self.tone
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::with_style(PresentationStyle::default())
    }
}
