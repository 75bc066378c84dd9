//! Common test utilities for building source documents and canned payloads.
use kumiko::prelude::*;

/// Identifier provider handing out a predictable "e0", "e1", ... sequence so
/// tests can assert exact output.
#[allow(dead_code)]
pub struct SequentialIds {
    next: usize,
}

#[allow(dead_code)]
impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&mut self) -> ElementId {
        let id = ElementId::new(format!("e{}", self.next));
        self.next += 1;
        id
    }
}

/// Creates a childless node of the given type.
#[allow(dead_code)]
pub fn node(node_type: NodeType, id: &str) -> SourceNode {
    SourceNode {
        id: id.to_string(),
        node_type,
        children: Vec::new(),
        characters: None,
    }
}

/// Creates a frame owning the given children.
#[allow(dead_code)]
pub fn frame(id: &str, children: Vec<SourceNode>) -> SourceNode {
    SourceNode {
        id: id.to_string(),
        node_type: NodeType::Frame,
        children,
        characters: None,
    }
}

/// Creates a canvas owning the given children.
#[allow(dead_code)]
pub fn canvas(id: &str, children: Vec<SourceNode>) -> SourceNode {
    SourceNode {
        id: id.to_string(),
        node_type: NodeType::Canvas,
        children,
        characters: None,
    }
}

/// Creates a text node carrying the given characters.
#[allow(dead_code)]
pub fn text(id: &str, characters: &str) -> SourceNode {
    SourceNode {
        id: id.to_string(),
        node_type: NodeType::Text,
        children: Vec::new(),
        characters: Some(characters.to_string()),
    }
}

/// Creates a rectangle node.
#[allow(dead_code)]
pub fn rectangle(id: &str) -> SourceNode {
    node(NodeType::Rectangle, id)
}

/// Creates a node of a type outside the supported vocabulary.
#[allow(dead_code)]
pub fn unsupported(tag: &str, id: &str, children: Vec<SourceNode>) -> SourceNode {
    SourceNode {
        id: id.to_string(),
        node_type: NodeType::from_tag(tag),
        children,
        characters: None,
    }
}

/// A well-formed file payload: one page holding a frame with a text and a
/// rectangle child.
#[allow(dead_code)]
pub const SIMPLE_DOCUMENT_JSON: &str = r#"{
    "name": "Landing page",
    "document": {
        "id": "0:0",
        "type": "DOCUMENT",
        "children": [{
            "id": "0:1",
            "type": "CANVAS",
            "children": [{
                "id": "1:2",
                "type": "FRAME",
                "children": [
                    { "id": "1:3", "type": "TEXT", "characters": "Hello" },
                    { "id": "1:4", "type": "RECTANGLE" }
                ]
            }]
        }]
    }
}"#;

/// A payload whose document root has no pages at all.
#[allow(dead_code)]
pub const NO_PAGES_DOCUMENT_JSON: &str = r#"{
    "document": { "id": "0:0", "type": "DOCUMENT" }
}"#;

/// A payload whose single page is empty.
#[allow(dead_code)]
pub const EMPTY_PAGE_DOCUMENT_JSON: &str = r#"{
    "document": {
        "id": "0:0",
        "type": "DOCUMENT",
        "children": [{ "id": "0:1", "type": "CANVAS", "children": [] }]
    }
}"#;

/// A payload whose single page holds only unsupported nodes.
#[allow(dead_code)]
pub const UNSUPPORTED_ONLY_DOCUMENT_JSON: &str = r#"{
    "document": {
        "id": "0:0",
        "type": "DOCUMENT",
        "children": [{
            "id": "0:1",
            "type": "CANVAS",
            "children": [
                { "id": "1:2", "type": "STAR" },
                { "id": "1:3", "type": "VECTOR" }
            ]
        }]
    }
}"#;

/// Removes every "id" field in place so structural comparisons ignore the
/// generated tokens.
#[allow(dead_code)]
pub fn strip_ids(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            map.remove("id");
            for child in map.values_mut() {
                strip_ids(child);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                strip_ids(item);
            }
        }
        _ => {}
    }
}
