use serde::Serialize;

/// Sizing hint for a column spanning the full available width.
pub const FULL_WIDTH: u32 = 100;

/// Title substituted when a text node carries no characters.
pub const DEFAULT_HEADING_TEXT: &str = "Add Your Heading Text Here";

/// The fixed placeholder resource referenced by image widgets. Source fills
/// are never inspected.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400/E2E8F0/AAAAAA?text=Image";

/// Layout settings of a column.
///
/// Only the sizing hint is emitted: every converted container yields a
/// single column occupying the full width. No multi-column fan-out is
/// derived from source layout data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSettings {
    #[serde(rename = "_column_size")]
    pub column_size: u32,
}

impl Default for ColumnSettings {
    fn default() -> Self {
        Self {
            column_size: FULL_WIDTH,
        }
    }
}

/// An image resource reference in the destination schema's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSource {
    pub url: String,
    pub id: String,
}

impl ImageSource {
    /// The fixed placeholder image with an empty resource identifier.
    pub fn placeholder() -> Self {
        Self {
            url: PLACEHOLDER_IMAGE_URL.to_string(),
            id: String::new(),
        }
    }
}

/// Widget settings, shaped per widget kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WidgetSettings {
    Heading { title: String },
    Image { image: ImageSource },
}
