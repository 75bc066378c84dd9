use super::definition::SourceNode;
use crate::error::ConvertError;
use serde::Deserialize;

/// The parsed top-level payload of a design file, as returned by the
/// document API's file endpoint.
#[derive(Debug, Deserialize)]
pub struct DocumentFile {
    #[serde(default)]
    pub name: Option<String>,

    /// The document root. Its children are the file's pages.
    pub document: SourceNode,
}

impl DocumentFile {
    /// Parses a raw file payload.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(json).map_err(|e| ConvertError::JsonParseError(e.to_string()))
    }

    /// Parses an already-deserialized JSON value, e.g. one handed over by a
    /// transport layer that has inspected the payload.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConvertError> {
        serde_json::from_value(value).map_err(|e| ConvertError::JsonParseError(e.to_string()))
    }

    /// Resolves the conventional conversion root: the document's first
    /// top-level canvas.
    ///
    /// A document without any page is malformed, not empty; reporting it as
    /// such keeps the condition distinguishable from a page that merely
    /// converts to nothing.
    pub fn first_page(&self) -> Result<&SourceNode, ConvertError> {
        self.document
            .children
            .first()
            .ok_or_else(|| ConvertError::MalformedDocument("document root has no pages".to_string()))
    }
}
