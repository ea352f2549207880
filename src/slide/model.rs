//! Slide data model.
//!
//! A slide's layout tag selects which content fields exist. The body is a
//! tagged union over the five layouts so a slide cannot carry bullets its
//! layout does not display.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Closed set of slide layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Layout {
    /// Title alone, centered.
    TitleOnly,
    /// Title and a full-width bullet list.
    TextOnly,
    /// Title, bullets on the left, image on the right.
    TextWithImage,
    /// Title and two bullet columns.
    TwoColumns,
    /// Full-bleed image with an overlay title.
    ImageFocused,
}

impl Layout {
    /// Returns all layouts in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::TitleOnly,
            Self::TextOnly,
            Self::TextWithImage,
            Self::TwoColumns,
            Self::ImageFocused,
        ]
    }

    /// Returns the wire tag of this layout.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::TitleOnly => "TITLE_ONLY",
            Self::TextOnly => "TEXT_ONLY",
            Self::TextWithImage => "TEXT_WITH_IMAGE",
            Self::TwoColumns => "TWO_COLUMNS",
            Self::ImageFocused => "IMAGE_FOCUSED",
        }
    }

    /// Look up a layout by its exact wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|layout| layout.tag() == tag)
    }

    /// Whether slides with this layout display an image.
    #[must_use]
    pub const fn allows_image(self) -> bool {
        matches!(self, Self::TextWithImage | Self::ImageFocused)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Layout-specific slide content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideBody {
    /// No content fields.
    TitleOnly,
    /// Single bullet list.
    TextOnly {
        /// Bullets in display order.
        content: Vec<String>,
    },
    /// Single bullet list beside an image.
    TextWithImage {
        /// Bullets in display order.
        content: Vec<String>,
    },
    /// Two bullet lists; column 1 precedes column 2.
    TwoColumns {
        /// Left column bullets.
        column1: Vec<String>,
        /// Right column bullets.
        column2: Vec<String>,
    },
    /// No text bullets.
    ImageFocused,
}

impl SlideBody {
    /// An empty body for the given layout.
    pub const fn empty(layout: Layout) -> Self {
        match layout {
            Layout::TitleOnly => Self::TitleOnly,
            Layout::TextOnly => Self::TextOnly { content: Vec::new() },
            Layout::TextWithImage => Self::TextWithImage { content: Vec::new() },
            Layout::TwoColumns => Self::TwoColumns { column1: Vec::new(), column2: Vec::new() },
            Layout::ImageFocused => Self::ImageFocused,
        }
    }

    /// The layout tag this body belongs to.
    pub const fn layout(&self) -> Layout {
        match self {
            Self::TitleOnly => Layout::TitleOnly,
            Self::TextOnly { .. } => Layout::TextOnly,
            Self::TextWithImage { .. } => Layout::TextWithImage,
            Self::TwoColumns { .. } => Layout::TwoColumns,
            Self::ImageFocused => Layout::ImageFocused,
        }
    }

    /// The single `content` list, if this layout has one.
    pub fn content(&self) -> Option<&[String]> {
        match self {
            Self::TextOnly { content } | Self::TextWithImage { content } => Some(content),
            _ => None,
        }
    }

    /// Total bullet count across all content fields.
    pub fn bullet_count(&self) -> usize {
        match self {
            Self::TextOnly { content } | Self::TextWithImage { content } => content.len(),
            Self::TwoColumns { column1, column2 } => column1.len() + column2.len(),
            Self::TitleOnly | Self::ImageFocused => 0,
        }
    }
}

/// Encoded image payload attached by the enrichment stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

impl ImageData {
    /// Build from raw base64 or a `data:<mime>;base64,<payload>` URL.
    pub fn from_payload(payload: &str, default_mime: &str) -> Result<Self> {
        let payload = payload.trim();
        let (mime_type, data) = match payload.strip_prefix("data:") {
            Some(rest) => {
                let (header, data) = rest
                    .split_once(',')
                    .ok_or_else(|| Error::service("Malformed data URL in image payload"))?;
                let mime = header.strip_suffix(";base64").unwrap_or(header);
                (if mime.is_empty() { default_mime } else { mime }, data)
            }
            None => (default_mime, payload),
        };

        if data.is_empty() {
            return Err(Error::service("Empty image payload"));
        }
        base64::decode(data).map_err(|e| Error::service(format!("Invalid image payload: {e}")))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    /// Render as a `data:` URL.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the payload to raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        base64::decode(&self.data).map_err(|e| Error::service(format!("Invalid image payload: {e}")))
    }

    /// File extension matching the MIME type.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpeg",
            "image/gif" => "gif",
            "image/webp" => "webp",
            _ => "png",
        }
    }
}

/// One slide of a presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Short, non-empty title.
    pub title: String,
    /// Layout-specific content.
    pub body: SlideBody,
    /// English illustration prompt; only kept for image layouts.
    pub image_description: Option<String>,
    /// Generated image, absent until enrichment succeeds.
    pub image: Option<ImageData>,
    /// Presenter-only notes.
    pub speaker_notes: Option<String>,
}

impl Slide {
    /// Create a slide without image or notes.
    pub fn new(title: impl Into<String>, body: SlideBody) -> Self {
        Self {
            title: title.into(),
            body,
            image_description: None,
            image: None,
            speaker_notes: None,
        }
    }

    /// Set the illustration prompt.
    #[must_use]
    pub fn with_image_description(mut self, description: impl Into<String>) -> Self {
        self.image_description = Some(description.into());
        self
    }

    /// Set the speaker notes.
    #[must_use]
    pub fn with_speaker_notes(mut self, notes: impl Into<String>) -> Self {
        self.speaker_notes = Some(notes.into());
        self
    }

    /// Attach a generated image.
    #[must_use]
    pub fn with_image(mut self, image: ImageData) -> Self {
        self.image = Some(image);
        self
    }

    /// The slide's layout tag.
    pub const fn layout(&self) -> Layout {
        self.body.layout()
    }

    /// The prompt to send to the image service, if this slide wants an image.
    pub fn image_request(&self) -> Option<&str> {
        if !self.layout().allows_image() {
            return None;
        }
        self.image_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Check the slide model invariants, describing the first violation.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("slide has an empty title".to_string());
        }
        if self.image.is_some() && self.image_description.is_none() {
            return Err("slide has an image but no image description".to_string());
        }
        if !self.layout().allows_image() && (self.image.is_some() || self.image_description.is_some()) {
            return Err(format!("layout {} cannot carry an image", self.layout()));
        }
        Ok(())
    }
}

/// The ordered slides of one generation request.
///
/// Slide order is presentation order. The only mutation is a single-slide
/// layout change, which replaces that slide in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    slides: Vec<Slide>,
}

impl Presentation {
    /// Wrap an ordered slide sequence; an empty sequence is rejected.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::EmptyPresentation);
        }
        Ok(Self { slides })
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide at `index`.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a constructed presentation.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Number of slides that carry a generated image.
    pub fn image_count(&self) -> usize {
        self.slides.iter().filter(|s| s.image.is_some()).count()
    }

    /// Change the layout of one slide, replacing it in place.
    pub fn set_layout(&mut self, index: usize, layout: Layout) -> Result<&Slide> {
        let len = self.slides.len();
        let slide = self
            .slides
            .get_mut(index)
            .ok_or(Error::SlideIndex { index, len })?;
        *slide = super::transform::change_layout(slide, layout);
        Ok(slide)
    }

    /// Consume into the slide vector.
    pub fn into_slides(self) -> Vec<Slide> {
        self.slides
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn bullets(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn layout_tags_round_trip() {
        for layout in Layout::all() {
            assert_eq!(Layout::from_tag(layout.tag()), Some(*layout));
        }
        assert_eq!(Layout::from_tag("three_columns"), None);
        assert_eq!(Layout::from_tag("text_only"), None);
    }

    #[test]
    fn only_image_layouts_request_images() {
        let text = Slide::new("Intro", SlideBody::TextOnly { content: bullets(&["a"]) })
            .with_image_description("a lighthouse");
        assert_eq!(text.image_request(), None);

        let visual = Slide::new("Intro", SlideBody::ImageFocused)
            .with_image_description("  a lighthouse at dawn ");
        assert_eq!(visual.image_request(), Some("a lighthouse at dawn"));

        let blank = Slide::new("Intro", SlideBody::ImageFocused).with_image_description("   ");
        assert_eq!(blank.image_request(), None);
    }

    #[test]
    fn invariants_reject_orphan_images() {
        let image = ImageData::from_payload("iVBORw0KGgo=", "image/png").unwrap();
        let slide = Slide::new("Chart", SlideBody::TextWithImage { content: vec![] }).with_image(image);
        assert!(slide.check_invariants().is_err());

        let blank_title = Slide::new("  ", SlideBody::TitleOnly);
        assert!(blank_title.check_invariants().is_err());
    }

    #[test]
    fn image_payload_accepts_data_urls() {
        let image = ImageData::from_payload("data:image/jpeg;base64,/9j/4AAQ", "image/png").unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, "/9j/4AAQ");
        assert_eq!(image.extension(), "jpeg");
        assert_eq!(image.data_url(), "data:image/jpeg;base64,/9j/4AAQ");

        let raw = ImageData::from_payload("aGVsbG8=", "image/png").unwrap();
        assert_eq!(raw.mime_type, "image/png");
        assert_eq!(raw.decode().unwrap(), b"hello");

        assert!(ImageData::from_payload("", "image/png").is_err());
        assert!(ImageData::from_payload("not*base64!!", "image/png").is_err());
        assert!(ImageData::from_payload("data:image/png;base64,%%%", "image/png").is_err());
    }

    #[test]
    fn empty_presentation_is_rejected() {
        assert!(matches!(Presentation::new(Vec::new()), Err(Error::EmptyPresentation)));
    }

    #[test]
    fn set_layout_replaces_in_place() {
        let mut presentation = Presentation::new(vec![
            Slide::new("Cover", SlideBody::TitleOnly),
            Slide::new("Points", SlideBody::TextOnly { content: bullets(&["a", "b", "c"]) }),
            Slide::new("End", SlideBody::TitleOnly),
        ])
        .unwrap();

        let slide = presentation.set_layout(1, Layout::TwoColumns).unwrap();
        assert_eq!(slide.layout(), Layout::TwoColumns);

        assert_eq!(presentation.len(), 3);
        assert_eq!(presentation.slides()[0].title, "Cover");
        assert_eq!(presentation.slides()[2].title, "End");
        assert!(matches!(
            presentation.set_layout(3, Layout::TextOnly),
            Err(Error::SlideIndex { index: 3, len: 3 })
        ));
    }
}
