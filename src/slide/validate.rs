//! Validation of slide records returned by the text-generation service.
//!
//! A record missing `title` or `layout`, or carrying an unknown layout tag, is
//! rejected. Content fields that do not belong to the chosen layout are dropped
//! rather than treated as errors; unknown fields are ignored.

use serde::{Deserialize, Serialize};

use super::model::{Layout, Slide, SlideBody};
use crate::error::{Error, Result};

/// A slide record as it appears on the wire, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSlide {
    /// Slide title.
    #[serde(default)]
    pub title: Option<String>,
    /// Layout tag.
    #[serde(default)]
    pub layout: Option<String>,
    /// Bullets for single-list layouts.
    #[serde(default)]
    pub content: Option<Vec<String>>,
    /// Left column bullets.
    #[serde(default, rename = "contentColumn1")]
    pub content_column1: Option<Vec<String>>,
    /// Right column bullets.
    #[serde(default, rename = "contentColumn2")]
    pub content_column2: Option<Vec<String>>,
    /// English illustration prompt.
    #[serde(default, rename = "imageDescription")]
    pub image_description: Option<String>,
    /// Presenter notes.
    #[serde(default, rename = "speakerNotes")]
    pub speaker_notes: Option<String>,
}

impl RawSlide {
    /// Validate into a [`Slide`]; `index` is used in error messages only.
    pub fn validate(&self, index: usize) -> Result<Slide> {
        let title = self
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::format(format!("slide {index} is missing a title")))?;

        let tag = self
            .layout
            .as_deref()
            .ok_or_else(|| Error::format(format!("slide {index} is missing a layout")))?;
        let layout = Layout::from_tag(tag)
            .ok_or_else(|| Error::format(format!("slide {index} has unknown layout tag {tag:?}")))?;

        self.log_dropped_fields(index, layout);

        let body = match layout {
            Layout::TitleOnly => SlideBody::TitleOnly,
            Layout::TextOnly => SlideBody::TextOnly { content: self.content.clone().unwrap_or_default() },
            Layout::TextWithImage => {
                SlideBody::TextWithImage { content: self.content.clone().unwrap_or_default() }
            }
            Layout::TwoColumns => SlideBody::TwoColumns {
                column1: self.content_column1.clone().unwrap_or_default(),
                column2: self.content_column2.clone().unwrap_or_default(),
            },
            Layout::ImageFocused => SlideBody::ImageFocused,
        };

        let image_description = if layout.allows_image() {
            non_blank(self.image_description.as_deref())
        } else {
            None
        };

        Ok(Slide {
            title: title.to_string(),
            body,
            image_description,
            image: None,
            speaker_notes: non_blank(self.speaker_notes.as_deref()),
        })
    }

    fn log_dropped_fields(&self, index: usize, layout: Layout) {
        let has_content = self.content.as_ref().is_some_and(|c| !c.is_empty());
        let has_columns = self.content_column1.as_ref().is_some_and(|c| !c.is_empty())
            || self.content_column2.as_ref().is_some_and(|c| !c.is_empty());

        if has_content && layout.content_field_count() != 1 {
            tracing::debug!(slide = index, %layout, "dropping content not shown by layout");
        }
        if has_columns && layout != Layout::TwoColumns {
            tracing::debug!(slide = index, %layout, "dropping columns not shown by layout");
        }
        if self.image_description.is_some() && !layout.allows_image() {
            tracing::debug!(slide = index, %layout, "dropping image description for text layout");
        }
    }
}

impl Layout {
    /// Number of bullet lists this layout displays.
    pub(crate) const fn content_field_count(self) -> usize {
        match self {
            Self::TitleOnly | Self::ImageFocused => 0,
            Self::TextOnly | Self::TextWithImage => 1,
            Self::TwoColumns => 2,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Validate a whole batch; the first invalid record fails the batch.
pub fn validate_slides(records: &[RawSlide]) -> Result<Vec<Slide>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}
