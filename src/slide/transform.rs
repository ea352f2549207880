//! Layout transformer.
//!
//! Reshapes a slide's content when its layout changes, keeping every bullet
//! wherever the destination layout has somewhere to put it.

use super::model::{Layout, Slide, SlideBody};

/// Split a bullet list into two columns.
///
/// Column 1 receives `ceil(n / 2)` items; order is preserved across both.
pub fn split_columns(items: &[String]) -> (Vec<String>, Vec<String>) {
    let half = items.len().div_ceil(2);
    let (first, second) = items.split_at(half);
    (first.to_vec(), second.to_vec())
}

/// Concatenate two columns, column 1 first.
pub fn merge_columns(column1: &[String], column2: &[String]) -> Vec<String> {
    column1.iter().chain(column2).cloned().collect()
}

/// Return a copy of `slide` reshaped for `layout`.
///
/// Pure: the input slide is untouched and no other slide is consulted.
/// Applying the same destination twice yields the same slide as applying it once.
pub fn change_layout(slide: &Slide, layout: Layout) -> Slide {
    let body = reshape_body(&slide.body, layout);

    // Image fields survive only where the destination shows an image.
    let (image_description, image) = if layout.allows_image() {
        (slide.image_description.clone(), slide.image.clone())
    } else {
        (None, None)
    };

    Slide {
        title: slide.title.clone(),
        body,
        image_description,
        image,
        speaker_notes: slide.speaker_notes.clone(),
    }
}

fn reshape_body(body: &SlideBody, layout: Layout) -> SlideBody {
    if body.layout() == layout {
        return body.clone();
    }

    match (body, layout) {
        (
            SlideBody::TextOnly { content } | SlideBody::TextWithImage { content },
            Layout::TwoColumns,
        ) => {
            let (column1, column2) = split_columns(content);
            SlideBody::TwoColumns { column1, column2 }
        }
        (SlideBody::TwoColumns { column1, column2 }, Layout::TextOnly) => SlideBody::TextOnly {
            content: merge_columns(column1, column2),
        },
        (SlideBody::TwoColumns { column1, column2 }, Layout::TextWithImage) => {
            SlideBody::TextWithImage { content: merge_columns(column1, column2) }
        }
        (SlideBody::TextWithImage { content }, Layout::TextOnly) => {
            SlideBody::TextOnly { content: content.clone() }
        }
        (SlideBody::TextOnly { content }, Layout::TextWithImage) => {
            SlideBody::TextWithImage { content: content.clone() }
        }
        // Nothing carries over into or out of the bullet-free layouts.
        (_, layout) => SlideBody::empty(layout),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::slide::model::ImageData;

    fn bullets(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("point {i}")).collect()
    }

    fn text_slide(n: usize) -> Slide {
        Slide::new("Benefits", SlideBody::TextOnly { content: bullets(n) })
    }

    #[test]
    fn split_gives_larger_half_to_first_column() {
        for n in 0..9 {
            let (c1, c2) = split_columns(&bullets(n));
            assert_eq!(c1.len(), n.div_ceil(2), "n = {n}");
            assert_eq!(c2.len(), n / 2, "n = {n}");
        }
    }

    #[test]
    fn split_edge_cases() {
        let (c1, c2) = split_columns(&[]);
        assert!(c1.is_empty() && c2.is_empty());

        let (c1, c2) = split_columns(&["only".to_string()]);
        assert_eq!(c1, vec!["only".to_string()]);
        assert!(c2.is_empty());
    }

    #[test]
    fn two_columns_round_trip_preserves_content() {
        for n in 0..8 {
            let original = text_slide(n);
            let columns = change_layout(&original, Layout::TwoColumns);
            assert_eq!(columns.layout(), Layout::TwoColumns);
            assert!(columns.body.content().is_none());

            let back = change_layout(&columns, Layout::TextOnly);
            assert_eq!(back, original, "n = {n}");
        }
    }

    #[test]
    fn transform_is_idempotent() {
        let slide = text_slide(5).with_speaker_notes("remember the demo");
        for layout in Layout::all() {
            let once = change_layout(&slide, *layout);
            let twice = change_layout(&once, *layout);
            assert_eq!(once, twice, "layout = {layout}");
        }
    }

    #[test]
    fn text_layouts_swap_content_unchanged() {
        let slide = text_slide(3);
        let with_image = change_layout(&slide, Layout::TextWithImage);
        assert_eq!(with_image.body.content(), Some(bullets(3).as_slice()));
        assert!(with_image.image.is_none(), "layout change never invents an image");
    }

    #[test]
    fn leaving_image_layout_drops_image_fields() {
        let image = ImageData::from_payload("aGVsbG8=", "image/png").unwrap();
        let slide = Slide::new("Vision", SlideBody::TextWithImage { content: bullets(2) })
            .with_image_description("a mountain summit")
            .with_image(image.clone())
            .with_speaker_notes("pause here");

        let focused = change_layout(&slide, Layout::ImageFocused);
        assert_eq!(focused.image, Some(image));
        assert!(focused.body.content().is_none());

        let text = change_layout(&slide, Layout::TextOnly);
        assert!(text.image.is_none());
        assert!(text.image_description.is_none());
        assert_eq!(text.speaker_notes.as_deref(), Some("pause here"));
        assert!(text.check_invariants().is_ok());
    }

    #[test]
    fn title_only_drops_all_content() {
        let columns = change_layout(&text_slide(4), Layout::TwoColumns);
        let title = change_layout(&columns, Layout::TitleOnly);
        assert_eq!(title.body, SlideBody::TitleOnly);
        assert_eq!(title.title, "Benefits");
    }

    #[test]
    fn input_slide_is_untouched() {
        let slide = text_slide(3);
        let snapshot = slide.clone();
        let _ = change_layout(&slide, Layout::TwoColumns);
        assert_eq!(slide, snapshot);
    }
}
