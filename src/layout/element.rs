use super::settings::{ColumnSettings, ImageSource, WidgetSettings};
use serde::Serialize;
use std::fmt;

/// The identifier tagging one destination element.
///
/// Tokens are opaque to the page builder; their only obligation is the
/// schema's shape convention (short, lowercase alphanumeric) and
/// per-conversion freshness, both of which the converter's id provider
/// takes care of.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of a leaf widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Heading,
    Image,
}

/// One node of the destination tree, tagged with `elType` on the wire.
///
/// Structural contract: a `Section` wraps exactly one `Column`; a `Column`
/// holds the converted children of the originating container in source
/// order; a `Widget` is a leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "elType", rename_all = "lowercase")]
pub enum Element {
    Section {
        id: ElementId,
        elements: Vec<Element>,
    },
    Column {
        id: ElementId,
        settings: ColumnSettings,
        elements: Vec<Element>,
    },
    Widget {
        id: ElementId,
        #[serde(rename = "widgetType")]
        widget_type: WidgetKind,
        settings: WidgetSettings,
    },
}

impl Element {
    /// A heading widget carrying the given title text.
    pub fn heading(id: ElementId, title: impl Into<String>) -> Self {
        Element::Widget {
            id,
            widget_type: WidgetKind::Heading,
            settings: WidgetSettings::Heading {
                title: title.into(),
            },
        }
    }

    /// An image widget pointing at the fixed placeholder resource.
    pub fn image_placeholder(id: ElementId) -> Self {
        Element::Widget {
            id,
            widget_type: WidgetKind::Image,
            settings: WidgetSettings::Image {
                image: ImageSource::placeholder(),
            },
        }
    }

    pub fn id(&self) -> &ElementId {
        match self {
            Element::Section { id, .. }
            | Element::Column { id, .. }
            | Element::Widget { id, .. } => id,
        }
    }

    /// The element's children; widgets have none.
    pub fn elements(&self) -> &[Element] {
        match self {
            Element::Section { elements, .. } | Element::Column { elements, .. } => elements,
            Element::Widget { .. } => &[],
        }
    }
}
