//! Instruction text sent with each generation request.
//!
//! The style tag only changes the policy paragraph; the schema and parsing
//! are identical for every style.

use crate::constants::defaults::IMAGE_DESCRIPTION_LANGUAGE;
use crate::types::{GenerationOptions, PresentationStyle};

/// Policy lines for a presentation style.
pub fn style_policy(style: PresentationStyle) -> &'static str {
    match style {
        PresentationStyle::TextFocused => {
            "- Focus on detailed, text-heavy slides.\n\
             - Prioritize information density.\n\
             - Prefer TEXT_ONLY and TWO_COLUMNS layouts; never use IMAGE_FOCUSED.\n\
             - Use more bullet points per slide if necessary."
        }
        PresentationStyle::VisualFocused => {
            "- Focus on visually driven slides with minimal text.\n\
             - Prefer TEXT_WITH_IMAGE and IMAGE_FOCUSED layouts, each with a powerful, descriptive image description.\n\
             - Text content should be very concise, ideally 1-3 short bullet points.\n\
             - Create more slides if needed to cover the content, rather than putting too much text on one slide."
        }
        PresentationStyle::Balanced => {
            "- Create a balanced mix of text and visuals.\n\
             - Each content slide should have a clear title and 3-5 bullet points.\n\
             - Use TEXT_WITH_IMAGE for roughly half of the content slides, with an image description that complements the text.\n\
             - Use TWO_COLUMNS for comparisons and TITLE_ONLY for the opening slide."
        }
    }
}

/// Build the full instruction for one request.
pub fn build_prompt(text: &str, options: &GenerationOptions) -> String {
    format!(
        r"You are an expert presentation creator. Your task is to transform the following raw text into a structured JSON array for a slide presentation. Each object in the array represents a single slide.

**Instructions:**
1. Analyze the provided text to understand its key themes, sections, and points.
2. Divide the content logically into a series of slides, in presentation order.
3. For each slide choose a 'layout': TITLE_ONLY, TEXT_ONLY, TEXT_WITH_IMAGE, TWO_COLUMNS or IMAGE_FOCUSED.
4. Fill only the fields the layout uses: 'content' for TEXT_ONLY and TEXT_WITH_IMAGE, 'contentColumn1' and 'contentColumn2' for TWO_COLUMNS, nothing but the title for TITLE_ONLY.
5. Give TEXT_WITH_IMAGE and IMAGE_FOCUSED slides an 'imageDescription'. It MUST be in {image_language} and detailed enough for an AI image generator to create a high-quality, relevant image.
6. Optionally add brief 'speakerNotes' for the presenter.
7. Write every title, bullet point and speaker note in {language}.
8. Use this tone throughout: {tone}.
9. Adhere to the following presentation style guidelines:
{policy}
10. Ensure the output is a valid JSON array of slide objects. Do not include any text or markdown formatting outside of the JSON structure.

**Raw Text:**
---
{text}
---
",
        image_language = IMAGE_DESCRIPTION_LANGUAGE,
        language = options.language(),
        tone = options.tone(),
        policy = style_policy(options.style()),
    )
}
