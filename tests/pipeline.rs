//! End-to-end pipeline tests against scripted text and image models.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use slidecraft::enrichment::{ImageModel, NoProgress};
use slidecraft::error::{Error, Result};
use slidecraft::export::{map_presentation, DeckWriter, DrawingInstruction, PptxWriter};
use slidecraft::generation::TextModel;
use slidecraft::slide::{change_layout, ImageData, Layout, Slide, SlideBody};
use slidecraft::types::{GenerationOptions, PresentationStyle};
use slidecraft::{DeckPipeline, DeckSession};

/// Returns one canned body and records each schema it was sent.
struct ScriptedText {
    body: String,
    schemas: Mutex<Vec<Value>>,
}

impl ScriptedText {
    fn new(body: &str) -> Self {
        Self { body: body.to_string(), schemas: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl TextModel for ScriptedText {
    async fn generate_structured(&self, _prompt: &str, schema: &Value) -> Result<String> {
        self.schemas.lock().unwrap().push(schema.clone());
        Ok(self.body.clone())
    }
}

/// Counts calls; fails for prompts containing "fail".
#[derive(Default)]
struct CountingImages {
    calls: AtomicUsize,
}

#[async_trait]
impl ImageModel for CountingImages {
    async fn generate_image(&self, prompt: &str) -> Result<Option<ImageData>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if prompt.contains("fail") {
            return Err(Error::service_status("Request returned 500", 500));
        }
        Ok(Some(ImageData::from_payload("data:image/png;base64,aGVsbG8=", "image/png")?))
    }
}

fn pipeline(body: &str) -> (DeckPipeline<Arc<ScriptedText>, Arc<CountingImages>>, Arc<CountingImages>) {
    let images = Arc::new(CountingImages::default());
    (DeckPipeline::new(Arc::new(ScriptedText::new(body)), Arc::clone(&images)), images)
}

const THREE_BENEFITS_TEXT_FOCUSED: &str = r#"[
    {"title": "Three Benefits of Cycling", "layout": "TEXT_ONLY", "content": ["Why cycling pays off"]},
    {"title": "Health", "layout": "TEXT_ONLY", "content": ["Stronger heart", "Better sleep"], "speakerNotes": "Cite the study"},
    {"title": "Savings", "layout": "TWO_COLUMNS", "contentColumn1": ["No fuel"], "contentColumn2": ["No parking"]},
    {"title": "Environment", "layout": "TEXT_ONLY", "content": ["Zero emissions"], "imageDescription": "a green city"}
]"#;

#[tokio::test]
async fn text_focused_scenario_has_no_images() {
    let (pipeline, images) = pipeline(THREE_BENEFITS_TEXT_FOCUSED);
    let options = GenerationOptions::with_style(PresentationStyle::TextFocused);

    let presentation = pipeline.generate("three benefits of cycling", &options, &NoProgress).await.unwrap();

    assert_eq!(presentation.len(), 4);
    assert!(presentation
        .slides()
        .iter()
        .all(|s| matches!(s.layout(), Layout::TextOnly | Layout::TwoColumns)));
    assert_eq!(images.calls.load(Ordering::SeqCst), 0);

    let instructions = map_presentation(&presentation, None).unwrap();
    assert_eq!(instructions.slides.len(), 4);
    assert!(instructions.slides.iter().all(|s| s.image_count() == 0));
}

#[tokio::test]
async fn one_failed_image_is_contained() {
    let body = r#"[
        {"title": "A", "layout": "IMAGE_FOCUSED", "imageDescription": "a mountain"},
        {"title": "B", "layout": "TEXT_WITH_IMAGE", "content": ["x"], "imageDescription": "please fail"},
        {"title": "C", "layout": "IMAGE_FOCUSED", "imageDescription": "a lake"}
    ]"#;
    let (pipeline, images) = pipeline(body);

    let presentation = pipeline
        .generate("landscapes", &GenerationOptions::default(), &NoProgress)
        .await
        .unwrap();

    assert_eq!(images.calls.load(Ordering::SeqCst), 3);
    let with_image: Vec<bool> = presentation.slides().iter().map(|s| s.image.is_some()).collect();
    assert_eq!(with_image, [true, false, true]);
}

/// Answers every request with a payload that is not base64.
struct CorruptImages;

#[async_trait]
impl ImageModel for CorruptImages {
    async fn generate_image(&self, _prompt: &str) -> Result<Option<ImageData>> {
        ImageData::from_payload("not*base64!!", "image/png").map(Some)
    }
}

#[tokio::test]
async fn corrupt_image_does_not_break_export() {
    let body = r#"[
        {"title": "A", "layout": "IMAGE_FOCUSED", "imageDescription": "a mountain"},
        {"title": "B", "layout": "TEXT_ONLY", "content": ["x"]}
    ]"#;
    let pipeline = DeckPipeline::new(ScriptedText::new(body), CorruptImages);
    let mut session = DeckSession::new(pipeline);

    let presentation = session.generate("peaks", &GenerationOptions::default(), &NoProgress).await.unwrap();
    assert_eq!(presentation.image_count(), 0);

    let instructions = session.instructions(None).unwrap();
    assert!(instructions.slides.iter().all(|s| s.image_count() == 0));
    assert!(!PptxWriter::new().render(&instructions).unwrap().is_empty());
}

#[tokio::test]
async fn progress_messages_are_ordered() {
    let body = r#"[
        {"title": "Intro", "layout": "TITLE_ONLY"},
        {"title": "A", "layout": "IMAGE_FOCUSED", "imageDescription": "a mountain"},
        {"title": "B", "layout": "TEXT_WITH_IMAGE", "content": ["x"], "imageDescription": "a river"}
    ]"#;
    let (pipeline, _) = pipeline(body);
    let log = Mutex::new(Vec::new());
    let reporter = |m: &str| log.lock().unwrap().push(m.to_string());

    pipeline.generate("rivers", &GenerationOptions::default(), &reporter).await.unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        [
            "Initializing generation...",
            "Analyzing your text and structuring slides...",
            "Generating image 1 of 2...",
            "Generating image 2 of 2...",
            "Finalizing presentation...",
        ]
    );
}

#[tokio::test]
async fn unknown_layout_rejects_whole_request() {
    let body = r#"[
        {"title": "A", "layout": "TEXT_ONLY", "content": ["x"]},
        {"title": "B", "layout": "FULL_SCREEN_VIDEO"}
    ]"#;
    let (pipeline, images) = pipeline(body);

    let err = pipeline.generate("text", &GenerationOptions::default(), &NoProgress).await.unwrap_err();

    assert!(matches!(err, Error::GenerationFormat { .. }));
    assert_eq!(images.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_layout_rejects_whole_request() {
    let (pipeline, _) = pipeline(r#"[{"title": "A", "content": ["x"]}]"#);
    let err = pipeline.generate("text", &GenerationOptions::default(), &NoProgress).await.unwrap_err();
    assert!(matches!(err, Error::GenerationFormat { .. }));
}

#[tokio::test]
async fn empty_response_is_empty_presentation() {
    let (pipeline, _) = pipeline("[]");
    let err = pipeline.generate("text", &GenerationOptions::default(), &NoProgress).await.unwrap_err();
    assert!(matches!(err, Error::EmptyPresentation));
    assert_eq!(err.user_message(), slidecraft::error::GENERATION_FAILED_MESSAGE);
}

#[tokio::test]
async fn schema_is_sent_with_every_request() {
    let text = Arc::new(ScriptedText::new(r#"[{"title": "A", "layout": "TITLE_ONLY"}]"#));
    let pipeline = DeckPipeline::new(Arc::clone(&text), CountingImages::default());

    for style in PresentationStyle::all() {
        let options = GenerationOptions::with_style(*style);
        pipeline.generate("text", &options, &NoProgress).await.unwrap();
    }

    let schemas = text.schemas.lock().unwrap();
    assert_eq!(schemas.len(), 3);
    assert!(schemas.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn column_round_trip_preserves_content() {
    for n in 0_usize..8 {
        let content: Vec<String> = (0..n).map(|i| format!("point {i}")).collect();
        let slide = Slide::new("T", SlideBody::TextOnly { content: content.clone() });

        let split = change_layout(&slide, Layout::TwoColumns);
        match &split.body {
            SlideBody::TwoColumns { column1, column2 } => {
                assert_eq!(column1.len(), n.div_ceil(2));
                assert_eq!(column2.len(), n / 2);
            }
            other => panic!("unexpected body {other:?}"),
        }

        let merged = change_layout(&split, Layout::TextOnly);
        assert_eq!(merged.body, SlideBody::TextOnly { content });
    }
}

#[tokio::test]
async fn session_exports_pptx_to_disk() {
    let (pipeline, _) = pipeline(THREE_BENEFITS_TEXT_FOCUSED);
    let mut session = DeckSession::new(pipeline);
    session
        .generate("cycling", &GenerationOptions::default(), &NoProgress)
        .await
        .unwrap();
    session.set_layout(1, Layout::TwoColumns).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = session.export(&PptxWriter::new(), dir.path(), Some("cycling.pptx")).unwrap();

    assert!(path.ends_with("cycling.pptx"));
    let bytes = fs_err::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn export_keeps_presentation_intact() {
    let body = r#"[{"title": "A", "layout": "IMAGE_FOCUSED", "imageDescription": "a mountain", "speakerNotes": "hi"}]"#;
    let (pipeline, _) = pipeline(body);
    let mut session = DeckSession::new(pipeline);
    session.generate("text", &GenerationOptions::default(), &NoProgress).await.unwrap();
    let before = session.presentation().cloned();

    let instructions = session.instructions(None).unwrap();
    let rendered = PptxWriter::new().render(&instructions).unwrap();

    assert!(!rendered.is_empty());
    assert_eq!(session.presentation().cloned(), before);
    let slide = &instructions.slides[0];
    assert!(slide.items[0].is_image());
    assert!(matches!(slide.items.last(), Some(DrawingInstruction::Notes { .. })));
}
