//! Markdown preview of a presentation.
//!
//! Slides are separated by horizontal rules and rendered one arm per layout.

use std::fmt::Write as _;

use crate::slide::{Presentation, Slide, SlideBody};

/// Rendering options for [`render_markdown`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewOptions {
    /// Inline generated images as `data:` URLs instead of a placeholder line.
    pub embed_images: bool,
    /// Include speaker notes as a block quote.
    pub include_notes: bool,
}

/// Render the whole presentation.
pub fn render_markdown(presentation: &Presentation, options: PreviewOptions) -> String {
    presentation
        .slides()
        .iter()
        .enumerate()
        .map(|(i, slide)| render_slide(i, slide, options))
        .collect::<Vec<_>>()
        .join("\n---\n\n")
}

/// Render one slide; `index` is zero-based.
pub fn render_slide(index: usize, slide: &Slide, options: PreviewOptions) -> String {
    let mut out = String::new();
    let number = index + 1;

    match &slide.body {
        SlideBody::TitleOnly => {
            let _ = writeln!(out, "# {}\n", slide.title);
        }
        SlideBody::TextOnly { content } => {
            let _ = writeln!(out, "## {number}. {}\n", slide.title);
            push_bullets(&mut out, content);
        }
        SlideBody::TextWithImage { content } => {
            let _ = writeln!(out, "## {number}. {}\n", slide.title);
            push_bullets(&mut out, content);
            push_image(&mut out, slide, options);
        }
        SlideBody::TwoColumns { column1, column2 } => {
            let _ = writeln!(out, "## {number}. {}\n", slide.title);
            out.push_str("**Column 1**\n\n");
            push_bullets(&mut out, column1);
            out.push_str("**Column 2**\n\n");
            push_bullets(&mut out, column2);
        }
        SlideBody::ImageFocused => {
            push_image(&mut out, slide, options);
            let _ = writeln!(out, "## {number}. {}\n", slide.title);
        }
    }

    if options.include_notes {
        if let Some(notes) = slide.speaker_notes.as_deref().filter(|n| !n.trim().is_empty()) {
            for line in notes.lines() {
                let _ = writeln!(out, "> {line}");
            }
            out.push('\n');
        }
    }

    out
}

fn push_bullets(out: &mut String, bullets: &[String]) {
    if bullets.is_empty() {
        return;
    }
    for bullet in bullets {
        let _ = writeln!(out, "- {bullet}");
    }
    out.push('\n');
}

fn push_image(out: &mut String, slide: &Slide, options: PreviewOptions) {
    match (&slide.image, options.embed_images) {
        (Some(image), true) => {
            let _ = writeln!(out, "![AI generated for {}]({})\n", slide.title, image.data_url());
        }
        (Some(_), false) => {
            let description = slide.image_description.as_deref().unwrap_or_default();
            let _ = writeln!(out, "_[image: {description}]_\n");
        }
        (None, _) => {}
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::slide::ImageData;

    fn sample() -> Presentation {
        Presentation::new(vec![
            Slide::new("Cycling", SlideBody::TitleOnly),
            Slide::new(
                "Costs",
                SlideBody::TwoColumns { column1: vec!["fuel".into()], column2: vec!["parking".into()] },
            )
            .with_speaker_notes("Compare monthly totals"),
            Slide::new("Sky", SlideBody::ImageFocused)
                .with_image_description("a blue sky")
                .with_image(ImageData::from_payload("aGVsbG8=", "image/png").unwrap()),
        ])
        .unwrap()
    }

    #[test]
    fn renders_each_layout() {
        let md = render_markdown(&sample(), PreviewOptions::default());
        assert!(md.starts_with("# Cycling\n"));
        assert!(md.contains("## 2. Costs"));
        assert!(md.contains("**Column 1**\n\n- fuel"));
        assert!(md.contains("_[image: a blue sky]_"));
        assert_eq!(md.matches("\n---\n").count(), 2);
        assert!(!md.contains("Compare monthly totals"));
    }

    #[test]
    fn notes_and_embedded_images_are_optional() {
        let options = PreviewOptions { embed_images: true, include_notes: true };
        let md = render_markdown(&sample(), options);
        assert!(md.contains("> Compare monthly totals"));
        assert!(md.contains("(data:image/png;base64,aGVsbG8=)"));
    }
}
