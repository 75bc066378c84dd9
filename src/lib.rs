//! # Kumiko - Canvas-to-Page-Builder Conversion Engine
//!
//! **Kumiko** rebuilds design-tool canvas trees as page-builder section
//! layouts. It consumes the node tree a design-authoring tool's document API
//! hands out (frames, components, text, rectangles) and produces the
//! section → column → widget JSON a page builder expects, tagging every
//! produced element with a freshly generated identifier.
//!
//! ## Core Workflow
//!
//! The engine is transport-agnostic. It operates on an in-memory document
//! tree; how that tree is obtained is a collaborator's concern. The primary
//! workflow is:
//!
//! 1.  **Obtain a Document**: Fetch the raw file payload through your own
//!     HTTP layer (or implement the [`DocumentSource`](document::DocumentSource)
//!     trait to give hosts a uniform seam), then parse it with
//!     [`DocumentFile::from_json`](document::DocumentFile::from_json).
//! 2.  **Resolve the Page**: Use [`DocumentFile::first_page`](document::DocumentFile::first_page)
//!     to locate the conventional conversion root, the document's first
//!     top-level canvas.
//! 3.  **Convert**: Feed the page to a [`Converter`](convert::Converter) (or
//!     the [`convert_document`](convert::convert_document) shortcut). The
//!     converter recurses over the tree and returns a flat sequence of
//!     sections.
//! 4.  **Serialize**: The resulting elements serialize directly into the
//!     page builder's JSON schema via serde.
//!
//! ## Quick Start
//!
//! ```rust
//! use kumiko::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let payload = r#"{
//!         "name": "Landing page",
//!         "document": {
//!             "id": "0:0",
//!             "type": "DOCUMENT",
//!             "children": [{
//!                 "id": "0:1",
//!                 "type": "CANVAS",
//!                 "children": [{
//!                     "id": "1:2",
//!                     "type": "FRAME",
//!                     "children": [
//!                         { "id": "1:3", "type": "TEXT", "characters": "Hello" },
//!                         { "id": "1:4", "type": "RECTANGLE" }
//!                     ]
//!                 }]
//!             }]
//!         }
//!     }"#;
//!
//!     let file = DocumentFile::from_json(payload)?;
//!     let elements = convert_document(&file)?;
//!
//!     println!("{}", serde_json::to_string_pretty(&elements)?);
//!     Ok(())
//! }
//! ```
//!
//! Unsupported node types are pruned silently, subtree included; a document
//! that yields no elements at all is reported as
//! [`ConvertError::NothingConvertible`](error::ConvertError::NothingConvertible)
//! so callers can tell "nothing convertible" apart from a malformed payload.

pub mod convert;
pub mod document;
pub mod error;
pub mod layout;
pub mod prelude;
