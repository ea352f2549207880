//! `Slidecraft` - turn free-form text into an illustrated slide deck.
//!
//! A text model structures the source into typed slides, an image model
//! illustrates the slides that ask for it, and the result can be previewed,
//! re-laid-out slide by slide, and exported to PowerPoint.


// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod enrichment;
pub mod error;
pub mod export;
pub mod gemini;
pub mod generation;
pub mod pipeline;
pub mod preview;
pub mod session;
pub mod slide;
pub mod types;

pub use error::{Error, Result};
pub use pipeline::DeckPipeline;
pub use session::DeckSession;
