//! Presentation export.
//!
//! Maps a finished presentation to layout-free drawing instructions and
//! hands them to a file writer.

/// Drawing instruction types
pub mod instructions;
/// Presentation to instruction mapping
pub mod mapper;
/// PowerPoint package writer
pub mod pptx;

pub use instructions::{DeckInstructions, DrawingInstruction, Rect, SlideInstructions};
pub use mapper::{map_presentation, map_slide};
pub use pptx::{DeckWriter, PptxWriter};
