//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! kumiko crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use kumiko::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let payload = std::fs::read_to_string("path/to/document.json")?;
//!
//! let file = DocumentFile::from_json(&payload)?;
//! let elements = convert_document(&file)?;
//!
//! println!("{}", serde_json::to_string(&elements)?);
//! # Ok(())
//! # }
//! ```

// Core conversion
pub use crate::convert::{Converter, ConverterBuilder, convert_document};

// Identifier generation
pub use crate::convert::{ELEMENT_ID_ALPHABET, ELEMENT_ID_LENGTH, IdProvider, RandomIdProvider};

// Source document types
pub use crate::document::{DocumentFile, DocumentSource, NodeType, SourceNode};

// Destination schema types
pub use crate::layout::{
    ColumnSettings, DEFAULT_HEADING_TEXT, Element, ElementId, FULL_WIDTH, ImageSource,
    PLACEHOLDER_IMAGE_URL, WidgetKind, WidgetSettings,
};

// Error types
pub use crate::error::{ConvertError, FetchError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
