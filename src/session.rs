//! Interactive deck session.
//!
//! Owns the current presentation between requests. A new request replaces it
//! only when it succeeds; layout edits and exports never touch other slides.

use std::path::{Path, PathBuf};

use crate::enrichment::{ImageModel, ProgressReporter};
use crate::error::{Error, Result};
use crate::export::{map_presentation, DeckInstructions, DeckWriter};
use crate::generation::TextModel;
use crate::pipeline::DeckPipeline;
use crate::slide::{Layout, Presentation, Slide};
use crate::types::GenerationOptions;

/// Holds at most one presentation and the pipeline that produces it.
pub struct DeckSession<T, I> {
    pipeline: DeckPipeline<T, I>,
    current: Option<Presentation>,
}

impl<T: TextModel, I: ImageModel> DeckSession<T, I> {
    /// Start an empty session.
    pub const fn new(pipeline: DeckPipeline<T, I>) -> Self {
        Self { pipeline, current: None }
    }

    /// The current presentation, if one has been generated.
    pub const fn presentation(&self) -> Option<&Presentation> {
        self.current.as_ref()
    }

    /// The pipeline backing this session.
    pub const fn pipeline(&self) -> &DeckPipeline<T, I> {
        &self.pipeline
    }

    /// Generate a new presentation, replacing the current one on success.
    ///
    /// On failure the previous presentation is kept as it was.
    pub async fn generate(
        &mut self,
        text: &str,
        options: &GenerationOptions,
        progress: &dyn ProgressReporter,
    ) -> Result<&Presentation> {
        match self.pipeline.generate(text, options, progress).await {
            Ok(presentation) => Ok(&*self.current.insert(presentation)),
            Err(e) => {
                tracing::warn!("Generation failed: {e}");
                Err(e)
            }
        }
    }

    /// Change the layout of slide `index` in place.
    pub fn set_layout(&mut self, index: usize, layout: Layout) -> Result<&Slide> {
        let presentation = self.current.as_mut().ok_or(Error::SlideIndex { index, len: 0 })?;
        presentation.set_layout(index, layout)
    }

    /// Map the current presentation to drawing instructions.
    pub fn instructions(&self, file_name: Option<&str>) -> Result<DeckInstructions> {
        let presentation = self
            .current
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("Generate a presentation before exporting.".to_string()))?;
        map_presentation(presentation, file_name)
    }

    /// Export the current presentation into `dir` with `writer`.
    pub fn export(
        &self,
        writer: &dyn DeckWriter,
        dir: &Path,
        file_name: Option<&str>,
    ) -> Result<PathBuf> {
        let instructions = self.instructions(file_name)?;
        writer.write_to_dir(&instructions, dir).inspect_err(|e| {
            tracing::warn!("Export failed: {e}");
        })
    }

    /// Drop the current presentation.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
