//! Two-stage generation pipeline.
//!
//! Text generation runs to completion first; image enrichment only starts
//! once a full set of slide drafts exists. Any text-stage failure aborts the
//! request before a [`Presentation`] is built.

use tracing::Instrument;
use uuid::Uuid;

use crate::config::Config;
use crate::constants::progress::{ANALYZING, FINALIZING, INITIALIZING};
use crate::enrichment::{ImageEnricher, ImageModel, ProgressReporter};
use crate::error::Result;
use crate::gemini::GeminiClient;
use crate::generation::client::ensure_text;
use crate::generation::{SlideGenerator, TextModel};
use crate::slide::Presentation;
use crate::types::GenerationOptions;

/// Orchestrates structured generation followed by image enrichment.
pub struct DeckPipeline<T, I> {
    generator: SlideGenerator<T>,
    enricher: ImageEnricher<I>,
}

impl DeckPipeline<GeminiClient, GeminiClient> {
    /// Build a pipeline backed by the Gemini API.
    pub fn from_config(config: &Config) -> Self {
        let client = GeminiClient::new(config);
        Self::new(client.clone(), client).with_image_concurrency(config.image_concurrency)
    }
}

impl<T: TextModel, I: ImageModel> DeckPipeline<T, I> {
    /// Create a pipeline from a text model and an image model.
    pub const fn new(text_model: T, image_model: I) -> Self {
        Self {
            generator: SlideGenerator::new(text_model),
            enricher: ImageEnricher::new(image_model),
        }
    }

    /// Allow several image requests in flight at once.
    #[must_use]
    pub fn with_image_concurrency(mut self, concurrency: usize) -> Self {
        self.enricher = self.enricher.with_concurrency(concurrency);
        self
    }

    /// The text-generation stage.
    pub const fn generator(&self) -> &SlideGenerator<T> {
        &self.generator
    }

    /// The image-enrichment stage.
    pub const fn enricher(&self) -> &ImageEnricher<I> {
        &self.enricher
    }

    /// Run one generation request end to end.
    pub async fn generate(
        &self,
        text: &str,
        options: &GenerationOptions,
        progress: &dyn ProgressReporter,
    ) -> Result<Presentation> {
        let span = tracing::info_span!("generate", request_id = %Uuid::new_v4(), style = %options.style());
        self.run(text, options, progress).instrument(span).await
    }

    async fn run(
        &self,
        text: &str,
        options: &GenerationOptions,
        progress: &dyn ProgressReporter,
    ) -> Result<Presentation> {
        ensure_text(text)?;
        progress.report(INITIALIZING);
        progress.report(ANALYZING);
        let drafts = self.generator.generate(text, options).await?;

        let slides = if options.style().allows_images() {
            self.enricher.enrich(drafts, progress).await
        } else {
            tracing::info!(slides = drafts.len(), "style excludes images, skipping enrichment");
            progress.report(FINALIZING);
            drafts
        };

        let presentation = Presentation::new(slides)?;
        tracing::info!(
            slides = presentation.len(),
            images = presentation.image_count(),
            "presentation ready"
        );
        Ok(presentation)
    }
}
