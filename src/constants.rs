//! Application constants.
//!
//! Centralizes model names, progress strings and export geometry.

/// Generative service defaults.
pub mod service {
    /// Default structured text-generation model.
    pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-pro";

    /// Default image-generation model.
    pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

    /// Aspect ratio requested for every generated image.
    pub const IMAGE_ASPECT_RATIO: &str = "16:9";

    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Default number of image requests in flight at once.
    pub const DEFAULT_IMAGE_CONCURRENCY: usize = 1;
}

/// Progress messages reported to the presentation surface.
pub mod progress {
    /// First message of every request.
    pub const INITIALIZING: &str = "Initializing generation...";

    /// Reported before the text-generation round trip.
    pub const ANALYZING: &str = "Analyzing your text and structuring slides...";

    /// Reported once every slide has been processed.
    pub const FINALIZING: &str = "Finalizing presentation...";

    /// Message reported before image `index` of `total` is requested (1-based).
    pub fn generating_image(index: usize, total: usize) -> String {
        format!("Generating image {index} of {total}...")
    }
}

/// Default generation directives.
pub mod defaults {
    /// Output language when none is chosen.
    pub const LANGUAGE: &str = "Chinese (中文)";

    /// Tone when none is chosen.
    pub const TONE: &str = "Book Club (读书会)";

    /// Language image descriptions are always written in.
    pub const IMAGE_DESCRIPTION_LANGUAGE: &str = "English";

    /// Default exported file name.
    pub const OUTPUT_FILE_NAME: &str = "presentation.pptx";
}

/// Export geometry in inches on a 16:9 slide.
pub mod layout {
    /// Slide width.
    pub const SLIDE_WIDTH: f64 = 10.0;

    /// Slide height.
    pub const SLIDE_HEIGHT: f64 = 5.625;

    /// Horizontal page margin.
    pub const MARGIN: f64 = 0.5;

    /// Top of the title box.
    pub const TITLE_Y: f64 = 0.25;

    /// Height of the title box.
    pub const TITLE_HEIGHT: f64 = 1.0;

    /// Top of body boxes.
    pub const BODY_Y: f64 = 1.5;

    /// Height of body boxes.
    pub const BODY_HEIGHT: f64 = 3.5;

    /// Width of a full-width box (90% of the slide).
    pub const FULL_WIDTH: f64 = 9.0;

    /// Width of a half-width body box (45% of the slide).
    pub const HALF_WIDTH: f64 = 4.5;

    /// Width of each column in the two-column layout.
    pub const COLUMN_WIDTH: f64 = 4.4;

    /// Left edge of the second column.
    pub const COLUMN_2_X: f64 = 5.1;

    /// Left edge of the side image.
    pub const IMAGE_X: f64 = 5.2;

    /// Side image width.
    pub const IMAGE_WIDTH: f64 = 4.3;

    /// Side image height (keeps 16:9).
    pub const IMAGE_HEIGHT: f64 = 2.42;

    /// Height of the overlay title on image-focused slides.
    pub const OVERLAY_TITLE_HEIGHT: f64 = 1.0;
}

/// Export styling.
pub mod style {
    /// Slide background color.
    pub const BACKGROUND: &str = "F1F1F1";

    /// Title and body text color.
    pub const TEXT_COLOR: &str = "363636";

    /// Overlay title color on image-focused slides.
    pub const OVERLAY_TEXT_COLOR: &str = "FFFFFF";

    /// Title font size in points.
    pub const TITLE_FONT_SIZE: u32 = 36;

    /// Title-only slide font size in points.
    pub const COVER_TITLE_FONT_SIZE: u32 = 44;

    /// Body size next to an image or in a column.
    pub const HALF_BODY_FONT_SIZE: u32 = 18;

    /// Body size for full-width text.
    pub const FULL_BODY_FONT_SIZE: u32 = 20;
}
