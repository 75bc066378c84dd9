use serde::Deserialize;

/// The node-type vocabulary of the source document tree.
///
/// The set is closed on purpose: supporting a new source node type means
/// adding a variant here and a matching arm in the converter's dispatch, not
/// registering a handler at runtime. Every tag outside the vocabulary
/// deserializes to [`NodeType::Unsupported`] so foreign documents never fail
/// to parse over an exotic node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum NodeType {
    Frame,
    Component,
    Instance,
    Canvas,
    Text,
    Rectangle,
    /// Any tag outside the supported vocabulary. Nodes of this type are
    /// dropped during conversion, children included.
    Unsupported,
}

impl NodeType {
    /// Maps a wire tag (e.g. `"FRAME"`) to its variant.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "FRAME" => NodeType::Frame,
            "COMPONENT" => NodeType::Component,
            "INSTANCE" => NodeType::Instance,
            "CANVAS" => NodeType::Canvas,
            "TEXT" => NodeType::Text,
            "RECTANGLE" => NodeType::Rectangle,
            _ => NodeType::Unsupported,
        }
    }

    /// Whether nodes of this type own children and convert to a
    /// section/column pair.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            NodeType::Frame | NodeType::Component | NodeType::Instance | NodeType::Canvas
        )
    }
}

impl From<String> for NodeType {
    fn from(tag: String) -> Self {
        NodeType::from_tag(&tag)
    }
}

impl Default for NodeType {
    /// A node without a type tag is treated like any other unsupported node.
    fn default() -> Self {
        NodeType::Unsupported
    }
}

/// A single node of the source document tree, as delivered by the design
/// tool's document API.
///
/// `children` is only populated on container-like nodes; an absent sequence
/// and an empty one are equivalent. `characters` is only carried by text
/// nodes.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceNode {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type", default)]
    pub node_type: NodeType,

    #[serde(default)]
    pub children: Vec<SourceNode>,

    #[serde(default)]
    pub characters: Option<String>,
}
