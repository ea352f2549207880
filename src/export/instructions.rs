//! Drawing instructions handed to a file writer.
//!
//! Instructions carry geometry in inches on the slide canvas and already
//! resolved styling. A writer only has to place them; it never looks at
//! layouts or slide fields.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::slide::{ImageData, Layout};

/// Box placement in inches from the top-left corner of the slide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

impl Rect {
    /// Create a box from its top-left corner and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    /// Flush left
    Left,
    /// Centered
    Center,
}

/// Vertical anchoring of text inside its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    /// Top edge
    Top,
    /// Vertically centered
    Middle,
    /// Bottom edge
    Bottom,
}

/// Resolved text styling for one box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    /// Point size.
    pub font_size: u32,
    /// Bold weight.
    pub bold: bool,
    /// Hex RGB without `#`.
    pub color: String,
    /// Horizontal alignment.
    pub align: TextAlignment,
    /// Vertical anchoring.
    pub anchor: VerticalAnchor,
    /// Render each paragraph as a bullet.
    pub bullets: bool,
    /// Optional hex RGB box fill.
    pub fill: Option<String>,
}

/// One primitive on a slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawingInstruction {
    /// A text box; each paragraph is one line or bullet.
    Text {
        /// Placement.
        rect: Rect,
        /// Lines of text in order.
        paragraphs: Vec<String>,
        /// Resolved styling.
        style: TextStyle,
    },
    /// A picture stretched to fill its box.
    Image {
        /// Placement.
        rect: Rect,
        /// Encoded picture.
        image: ImageData,
        /// Alternative text.
        description: String,
    },
    /// Presenter-only notes.
    Notes {
        /// Notes text.
        text: String,
    },
}

impl DrawingInstruction {
    /// True for image boxes.
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }

    /// True for notes.
    pub const fn is_notes(&self) -> bool {
        matches!(self, Self::Notes { .. })
    }
}

/// Instructions for one slide, in drawing order (back to front, notes last).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideInstructions {
    /// Layout the slide was mapped from.
    pub layout: Layout,
    /// Primitives in drawing order.
    pub items: Vec<DrawingInstruction>,
}

impl SlideInstructions {
    /// Number of image boxes on this slide.
    pub fn image_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_image()).count()
    }

    /// The notes text, if any.
    pub fn notes(&self) -> Option<&str> {
        self.items.iter().find_map(|i| match i {
            DrawingInstruction::Notes { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Drawable items, excluding notes.
    pub fn shapes(&self) -> impl Iterator<Item = &DrawingInstruction> {
        self.items.iter().filter(|i| !i.is_notes())
    }
}

/// A complete deck ready for a file writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckInstructions {
    /// Target aspect ratio, e.g. `16:9`.
    pub aspect_ratio: String,
    /// Slide width in inches.
    pub width: f64,
    /// Slide height in inches.
    pub height: f64,
    /// Hex RGB background of every slide.
    pub background: String,
    /// Document title, taken from the first slide.
    pub title: String,
    /// Output file name.
    pub file_name: String,
    /// Per-slide instructions in presentation order.
    pub slides: Vec<SlideInstructions>,
}

impl DeckInstructions {
    /// Serialize to canonical JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| Error::Export(format!("Failed to serialize instructions: {e}")))
    }
}
