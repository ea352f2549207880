//! Slide model, validation and layout transformation.

/// Slide, layout and presentation types
pub mod model;
/// Layout transformer
pub mod transform;
/// Wire record validation
pub mod validate;

pub use model::{ImageData, Layout, Presentation, Slide, SlideBody};
pub use transform::change_layout;
pub use validate::{validate_slides, RawSlide};
