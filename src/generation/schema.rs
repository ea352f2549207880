//! Response schema for structured slide generation.
//!
//! The same field names drive the request schema and [`RawSlide`]'s serde
//! names; the tests below keep the two in lockstep.
//!
//! [`RawSlide`]: crate::slide::RawSlide

use serde_json::{json, Map, Value};

use crate::slide::Layout;

/// Bumped whenever a field is renamed, added or removed.
pub const SCHEMA_VERSION: u32 = 3;

/// Wire field names.
pub mod fields {
    /// Slide title.
    pub const TITLE: &str = "title";
    /// Layout tag.
    pub const LAYOUT: &str = "layout";
    /// Single bullet list.
    pub const CONTENT: &str = "content";
    /// Left column.
    pub const CONTENT_COLUMN_1: &str = "contentColumn1";
    /// Right column.
    pub const CONTENT_COLUMN_2: &str = "contentColumn2";
    /// Illustration prompt.
    pub const IMAGE_DESCRIPTION: &str = "imageDescription";
    /// Presenter notes.
    pub const SPEAKER_NOTES: &str = "speakerNotes";

    /// All fields in property order.
    pub const ALL: [&str; 7] = [
        TITLE,
        LAYOUT,
        CONTENT,
        CONTENT_COLUMN_1,
        CONTENT_COLUMN_2,
        IMAGE_DESCRIPTION,
        SPEAKER_NOTES,
    ];

    /// Fields every record must carry.
    pub const REQUIRED: [&str; 2] = [TITLE, LAYOUT];
}

fn string_list(description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" },
        "description": description,
    })
}

/// Schema for a single slide record.
pub fn slide_schema() -> Value {
    let layouts: Vec<&str> = Layout::all().iter().map(|l| l.tag()).collect();

    let mut properties = Map::new();
    properties.insert(
        fields::TITLE.to_string(),
        json!({
            "type": "STRING",
            "description": "The main title of the slide. Should be concise and engaging.",
        }),
    );
    properties.insert(
        fields::LAYOUT.to_string(),
        json!({
            "type": "STRING",
            "enum": layouts,
            "description": "The structural template of the slide.",
        }),
    );
    properties.insert(
        fields::CONTENT.to_string(),
        string_list(
            "Bullet points for TEXT_ONLY and TEXT_WITH_IMAGE slides. Informative but not overly verbose.",
        ),
    );
    properties.insert(
        fields::CONTENT_COLUMN_1.to_string(),
        string_list("Left column bullet points for TWO_COLUMNS slides."),
    );
    properties.insert(
        fields::CONTENT_COLUMN_2.to_string(),
        string_list("Right column bullet points for TWO_COLUMNS slides."),
    );
    properties.insert(
        fields::IMAGE_DESCRIPTION.to_string(),
        json!({
            "type": "STRING",
            "description": "A detailed English prompt for an image generation model, \
                for TEXT_WITH_IMAGE and IMAGE_FOCUSED slides only.",
        }),
    );
    properties.insert(
        fields::SPEAKER_NOTES.to_string(),
        json!({
            "type": "STRING",
            "description": "Optional notes for the presenter.",
        }),
    );

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": fields::REQUIRED,
        "propertyOrdering": fields::ALL,
    })
}

/// Schema for the whole response: an array of slide records.
pub fn presentation_schema() -> Value {
    json!({
        "type": "ARRAY",
        "description": format!("Ordered slide records, schema version {SCHEMA_VERSION}."),
        "items": slide_schema(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::slide::RawSlide;

    #[test]
    fn schema_lists_every_layout_tag() {
        let schema = slide_schema();
        let tags: Vec<&str> = schema["properties"]["layout"]["enum"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(tags, ["TITLE_ONLY", "TEXT_ONLY", "TEXT_WITH_IMAGE", "TWO_COLUMNS", "IMAGE_FOCUSED"]);
    }

    #[test]
    fn schema_fields_match_wire_record() {
        let record = RawSlide {
            title: Some(String::new()),
            layout: Some(String::new()),
            content: Some(vec![]),
            content_column1: Some(vec![]),
            content_column2: Some(vec![]),
            image_description: Some(String::new()),
            speaker_notes: Some(String::new()),
        };
        let value = serde_json::to_value(&record).unwrap();
        let mut wire: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        wire.sort_unstable();

        let schema = slide_schema();
        let mut declared: Vec<&str> = schema["properties"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        declared.sort_unstable();

        assert_eq!(wire, declared);
    }

    #[test]
    fn schema_carries_its_version() {
        let schema = presentation_schema();
        let description = schema["description"].as_str().unwrap();
        assert!(description.ends_with(&format!("schema version {SCHEMA_VERSION}.")));
    }

    #[test]
    fn title_and_layout_are_required() {
        let schema = presentation_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["required"], json!(["title", "layout"]));
    }
}
