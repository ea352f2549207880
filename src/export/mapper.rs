//! Export mapper: presentation to drawing instructions.
//!
//! Geometry comes from fixed per-layout constants. The same presentation
//! always yields the same instructions.

use crate::constants::defaults::OUTPUT_FILE_NAME;
use crate::constants::layout::*;
use crate::constants::service::IMAGE_ASPECT_RATIO;
use crate::constants::style::*;
use crate::error::{Error, Result};
use crate::export::instructions::{
    DeckInstructions, DrawingInstruction, Rect, SlideInstructions, TextAlignment, TextStyle,
    VerticalAnchor,
};
use crate::slide::{ImageData, Presentation, Slide, SlideBody};
use std::path::Path;

/// Map a presentation to drawing instructions for a file named `file_name`
/// (defaults to `presentation.pptx`).
pub fn map_presentation(presentation: &Presentation, file_name: Option<&str>) -> Result<DeckInstructions> {
    let slides = presentation
        .slides()
        .iter()
        .enumerate()
        .map(|(index, slide)| map_slide(index, slide))
        .collect::<Result<Vec<_>>>()?;

    Ok(DeckInstructions {
        aspect_ratio: IMAGE_ASPECT_RATIO.to_string(),
        width: SLIDE_WIDTH,
        height: SLIDE_HEIGHT,
        background: BACKGROUND.to_string(),
        title: presentation
            .get(0)
            .map(|s| s.title.trim().to_string())
            .unwrap_or_default(),
        file_name: check_file_name(file_name.unwrap_or(OUTPUT_FILE_NAME))?.to_string(),
        slides,
    })
}

/// Accept only a bare file name with no directory components.
pub(crate) fn check_file_name(name: &str) -> Result<&str> {
    let bare = Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name);
    if !bare || name.contains(['/', '\\']) {
        return Err(Error::InvalidInput(format!(
            "Output file name must not contain a directory: {name:?}"
        )));
    }
    Ok(name)
}

/// Map one slide. Fails only if the slide breaks the model invariants.
pub fn map_slide(index: usize, slide: &Slide) -> Result<SlideInstructions> {
    slide
        .check_invariants()
        .map_err(|message| Error::export_mapping(index, message))?;

    let mut items = Vec::new();
    let title = slide.title.trim();
    let description = slide.image_description.as_deref().unwrap_or_default();

    match &slide.body {
        SlideBody::TitleOnly => {
            items.push(text_box(
                Rect::new(0.0, 0.0, SLIDE_WIDTH, SLIDE_HEIGHT),
                vec![title.to_string()],
                heading(COVER_TITLE_FONT_SIZE, VerticalAnchor::Middle),
            ));
        }
        SlideBody::TextOnly { content } => {
            items.push(title_box(title));
            push_bullets(
                &mut items,
                Rect::new(MARGIN, BODY_Y, FULL_WIDTH, BODY_HEIGHT),
                content,
                FULL_BODY_FONT_SIZE,
            );
        }
        SlideBody::TextWithImage { content } => {
            items.push(title_box(title));
            push_bullets(
                &mut items,
                Rect::new(MARGIN, BODY_Y, HALF_WIDTH, BODY_HEIGHT),
                content,
                HALF_BODY_FONT_SIZE,
            );
            if let Some(image) = &slide.image {
                items.push(image_box(
                    Rect::new(IMAGE_X, BODY_Y, IMAGE_WIDTH, IMAGE_HEIGHT),
                    image,
                    description,
                ));
            }
        }
        SlideBody::TwoColumns { column1, column2 } => {
            items.push(title_box(title));
            push_bullets(
                &mut items,
                Rect::new(MARGIN, BODY_Y, COLUMN_WIDTH, BODY_HEIGHT),
                column1,
                HALF_BODY_FONT_SIZE,
            );
            push_bullets(
                &mut items,
                Rect::new(COLUMN_2_X, BODY_Y, COLUMN_WIDTH, BODY_HEIGHT),
                column2,
                HALF_BODY_FONT_SIZE,
            );
        }
        SlideBody::ImageFocused => {
            let overlay = Rect::new(
                0.0,
                SLIDE_HEIGHT - OVERLAY_TITLE_HEIGHT,
                SLIDE_WIDTH,
                OVERLAY_TITLE_HEIGHT,
            );
            let mut style = heading(TITLE_FONT_SIZE, VerticalAnchor::Bottom);
            if let Some(image) = &slide.image {
                items.push(image_box(
                    Rect::new(0.0, 0.0, SLIDE_WIDTH, SLIDE_HEIGHT),
                    image,
                    description,
                ));
                style.color = OVERLAY_TEXT_COLOR.to_string();
                style.fill = Some(TEXT_COLOR.to_string());
            }
            items.push(text_box(overlay, vec![title.to_string()], style));
        }
    }

    if let Some(notes) = slide.speaker_notes.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        items.push(DrawingInstruction::Notes { text: notes.to_string() });
    }

    Ok(SlideInstructions { layout: slide.layout(), items })
}

fn heading(font_size: u32, anchor: VerticalAnchor) -> TextStyle {
    TextStyle {
        font_size,
        bold: true,
        color: TEXT_COLOR.to_string(),
        align: TextAlignment::Center,
        anchor,
        bullets: false,
        fill: None,
    }
}

fn title_box(title: &str) -> DrawingInstruction {
    text_box(
        Rect::new(MARGIN, TITLE_Y, FULL_WIDTH, TITLE_HEIGHT),
        vec![title.to_string()],
        heading(TITLE_FONT_SIZE, VerticalAnchor::Middle),
    )
}

/// Push a bulleted body box; an empty list draws nothing.
fn push_bullets(items: &mut Vec<DrawingInstruction>, rect: Rect, bullets: &[String], font_size: u32) {
    if bullets.is_empty() {
        return;
    }
    items.push(text_box(
        rect,
        bullets.to_vec(),
        TextStyle {
            font_size,
            bold: false,
            color: TEXT_COLOR.to_string(),
            align: TextAlignment::Left,
            anchor: VerticalAnchor::Top,
            bullets: true,
            fill: None,
        },
    ));
}

const fn text_box(rect: Rect, paragraphs: Vec<String>, style: TextStyle) -> DrawingInstruction {
    DrawingInstruction::Text { rect, paragraphs, style }
}

fn image_box(rect: Rect, image: &ImageData, description: &str) -> DrawingInstruction {
    DrawingInstruction::Image {
        rect,
        image: image.clone(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::slide::Layout;

    fn bullets(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn png() -> ImageData {
        ImageData::from_payload("aGVsbG8=", "image/png").unwrap()
    }

    fn text_of(item: &DrawingInstruction) -> Vec<String> {
        match item {
            DrawingInstruction::Text { paragraphs, .. } => paragraphs.clone(),
            other => panic!("expected text box, got {other:?}"),
        }
    }

    fn deck(slides: Vec<Slide>) -> Presentation {
        Presentation::new(slides).unwrap()
    }

    #[test]
    fn title_only_is_single_full_bleed_box() {
        let mapped = map_slide(0, &Slide::new("Welcome", SlideBody::TitleOnly)).unwrap();
        assert_eq!(mapped.items.len(), 1);
        match &mapped.items[0] {
            DrawingInstruction::Text { rect, style, .. } => {
                assert_eq!(*rect, Rect::new(0.0, 0.0, SLIDE_WIDTH, SLIDE_HEIGHT));
                assert_eq!(style.align, TextAlignment::Center);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn text_with_image_omits_missing_image() {
        let slide = Slide::new("Trees", SlideBody::TextWithImage { content: bullets(&["oak"]) })
            .with_image_description("an oak tree");
        let mapped = map_slide(0, &slide).unwrap();
        assert_eq!(mapped.items.len(), 2);
        assert_eq!(mapped.image_count(), 0);

        let mapped = map_slide(0, &slide.with_image(png())).unwrap();
        assert_eq!(mapped.image_count(), 1);
        match &mapped.items[2] {
            DrawingInstruction::Image { rect, description, .. } => {
                assert_eq!(rect.x, IMAGE_X);
                assert_eq!(description, "an oak tree");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn two_columns_map_to_half_width_boxes() {
        let slide = Slide::new(
            "Compare",
            SlideBody::TwoColumns { column1: bullets(&["a", "b"]), column2: bullets(&["c"]) },
        );
        let mapped = map_slide(0, &slide).unwrap();
        assert_eq!(mapped.items.len(), 3);
        assert_eq!(text_of(&mapped.items[1]), bullets(&["a", "b"]));
        assert_eq!(text_of(&mapped.items[2]), bullets(&["c"]));
    }

    #[test]
    fn image_focused_puts_title_at_bottom_over_image() {
        let slide = Slide::new("Sky", SlideBody::ImageFocused)
            .with_image_description("a blue sky")
            .with_image(png());
        let mapped = map_slide(0, &slide).unwrap();
        assert!(mapped.items[0].is_image());
        match &mapped.items[1] {
            DrawingInstruction::Text { rect, style, .. } => {
                assert!((rect.y + rect.height - SLIDE_HEIGHT).abs() < f64::EPSILON);
                assert_eq!(style.anchor, VerticalAnchor::Bottom);
                assert_eq!(style.color, OVERLAY_TEXT_COLOR);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn notes_attach_regardless_of_layout() {
        for layout in Layout::all() {
            let slide = Slide::new("T", SlideBody::empty(*layout)).with_speaker_notes("say hello");
            let mapped = map_slide(0, &slide).unwrap();
            assert_eq!(mapped.notes(), Some("say hello"));
            assert!(mapped.items.last().unwrap().is_notes());
        }
    }

    #[test]
    fn invariant_violation_is_export_error() {
        let mut slide = Slide::new("T", SlideBody::TextOnly { content: vec![] });
        slide.image = Some(png());
        let err = map_slide(3, &slide).unwrap_err();
        assert!(matches!(err, Error::ExportMapping { slide: 3, .. }));
    }

    #[test]
    fn mapping_is_byte_for_byte_deterministic() {
        let presentation = deck(vec![
            Slide::new("Intro", SlideBody::TitleOnly),
            Slide::new("List", SlideBody::TextOnly { content: bullets(&["one", "two"]) })
                .with_speaker_notes("notes"),
            Slide::new("Pic", SlideBody::ImageFocused)
                .with_image_description("a cat")
                .with_image(png()),
        ]);

        let first = map_presentation(&presentation, None).unwrap().to_json().unwrap();
        let second = map_presentation(&presentation, None).unwrap().to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn deck_metadata_is_16_9() {
        let presentation = deck(vec![Slide::new("Intro", SlideBody::TitleOnly)]);
        let instructions = map_presentation(&presentation, Some("talk.pptx")).unwrap();
        assert_eq!(instructions.aspect_ratio, "16:9");
        assert_eq!(instructions.file_name, "talk.pptx");
        assert!((instructions.width / instructions.height - 16.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn file_name_must_be_bare() {
        let presentation = deck(vec![Slide::new("Intro", SlideBody::TitleOnly)]);
        for name in ["../escape.pptx", "nested/talk.pptx", "..", "", "C:\\talk.pptx"] {
            let err = map_presentation(&presentation, Some(name)).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{name:?} was accepted");
        }
        assert!(map_presentation(&presentation, Some("my talk.pptx")).is_ok());
    }
}
