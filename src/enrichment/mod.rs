//! Image enrichment stage.
//!
//! Requests one illustration per slide that wants one. A failed request leaves
//! that slide without an image and the batch carries on; the stage itself
//! never fails because of an individual image.

/// Progress reporting port
pub mod progress;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::constants::progress::{generating_image, FINALIZING};
use crate::error::Result;
use crate::slide::{ImageData, Slide};

pub use progress::{ChannelProgress, NoProgress, ProgressReporter};

/// An image-generation service.
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Generate one image for `prompt`. `Ok(None)` means the service returned nothing.
    async fn generate_image(&self, prompt: &str) -> Result<Option<ImageData>>;
}

#[async_trait]
impl<T: ImageModel + ?Sized> ImageModel for std::sync::Arc<T> {
    async fn generate_image(&self, prompt: &str) -> Result<Option<ImageData>> {
        (**self).generate_image(prompt).await
    }
}

/// What happened to one slide during enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// The slide's layout or description did not call for an image.
    NotRequested,
    /// An image was attached.
    Generated,
    /// The request failed; the slide keeps no image.
    Failed {
        /// Diagnostic reason, logged and otherwise ignored.
        reason: String,
    },
}

/// Slides after enrichment together with the per-slide outcomes, index-aligned.
#[derive(Debug, Clone)]
pub struct EnrichedSlides {
    /// Slides in their original order.
    pub slides: Vec<Slide>,
    /// Outcome for each slide.
    pub outcomes: Vec<ImageOutcome>,
}

impl EnrichedSlides {
    /// Number of images attached.
    pub fn generated(&self) -> usize {
        self.outcomes.iter().filter(|o| **o == ImageOutcome::Generated).count()
    }

    /// Indices of slides whose image request failed.
    pub fn failed_indices(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| matches!(o, ImageOutcome::Failed { .. }))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Attaches generated images to slide drafts.
pub struct ImageEnricher<M> {
    model: M,
    concurrency: usize,
}

impl<M: ImageModel> ImageEnricher<M> {
    /// Create an enricher issuing one request at a time.
    pub const fn new(model: M) -> Self {
        Self { model, concurrency: 1 }
    }

    /// Allow up to `concurrency` requests in flight; results are still
    /// reported in slide order.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// The underlying model.
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Enrich `drafts`, returning the slides in the same order.
    pub async fn enrich(&self, drafts: Vec<Slide>, progress: &dyn ProgressReporter) -> Vec<Slide> {
        self.enrich_with_outcomes(drafts, progress).await.slides
    }

    /// Enrich `drafts` and report what happened to each slide.
    pub async fn enrich_with_outcomes(
        &self,
        drafts: Vec<Slide>,
        progress: &dyn ProgressReporter,
    ) -> EnrichedSlides {
        let total = drafts.iter().filter(|s| s.image_request().is_some()).count();
        tracing::info!(slides = drafts.len(), images = total, "enriching slides");

        let mut ordinal = 0;
        // `buffered` pulls drafts in order and yields results in order, so each
        // progress message is reported just before its request is dispatched.
        let results: Vec<(Slide, ImageOutcome)> = stream::iter(drafts.into_iter().enumerate())
            .map(|(index, slide)| {
                if slide.image_request().is_some() {
                    ordinal += 1;
                    progress.report(&generating_image(ordinal, total));
                }
                self.enrich_one(index, slide)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        progress.report(FINALIZING);

        let (slides, outcomes): (Vec<_>, Vec<_>) = results.into_iter().unzip();
        let enriched = EnrichedSlides { slides, outcomes };
        tracing::info!(
            generated = enriched.generated(),
            failed = enriched.failed_indices().len(),
            "enrichment finished"
        );
        enriched
    }

    async fn enrich_one(&self, index: usize, slide: Slide) -> (Slide, ImageOutcome) {
        let Some(prompt) = slide.image_request().map(str::to_string) else {
            return (slide, ImageOutcome::NotRequested);
        };

        match self.model.generate_image(&prompt).await {
            Ok(Some(image)) => (slide.with_image(image), ImageOutcome::Generated),
            Ok(None) => {
                tracing::warn!(slide = index + 1, "Image service returned no image");
                (slide, ImageOutcome::Failed { reason: "empty result".to_string() })
            }
            Err(e) => {
                tracing::warn!(slide = index + 1, "Failed to generate image: {e}");
                (slide, ImageOutcome::Failed { reason: e.to_string() })
            }
        }
    }
}
