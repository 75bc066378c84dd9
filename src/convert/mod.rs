use crate::document::{DocumentFile, NodeType, SourceNode};
use crate::error::ConvertError;
use crate::layout::{ColumnSettings, DEFAULT_HEADING_TEXT, Element};

pub mod ids;

pub use ids::{ELEMENT_ID_ALPHABET, ELEMENT_ID_LENGTH, IdProvider, RandomIdProvider};

/// Rebuilds source subtrees as page-builder elements.
///
/// The converter is single-threaded and performs no I/O; apart from the id
/// provider's randomness it is pure, so re-running it over the same tree
/// yields structurally identical output. Conversions on other threads should
/// use their own instance.
pub struct Converter<I: IdProvider = RandomIdProvider> {
    ids: I,
}

/// Configures and builds a [`Converter`] backed by random identifiers.
pub struct ConverterBuilder {
    id_length: usize,
    id_alphabet: String,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self {
            id_length: ELEMENT_ID_LENGTH,
            id_alphabet: ELEMENT_ID_ALPHABET.to_string(),
        }
    }

    pub fn with_id_length(mut self, length: usize) -> Self {
        self.id_length = length;
        self
    }

    pub fn with_id_alphabet(mut self, alphabet: &str) -> Self {
        self.id_alphabet = alphabet.to_string();
        self
    }

    pub fn build(self) -> Converter<RandomIdProvider> {
        Converter {
            ids: RandomIdProvider::new(self.id_length, &self.id_alphabet),
        }
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter<RandomIdProvider> {
    /// A converter with the destination schema's default identifier format.
    pub fn new() -> Self {
        ConverterBuilder::new().build()
    }

    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }
}

impl Default for Converter<RandomIdProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdProvider> Converter<I> {
    /// Wraps a custom identifier provider, e.g. a deterministic sequence in
    /// tests.
    pub fn with_ids(ids: I) -> Self {
        Self { ids }
    }

    /// Maps one source node, and by recursion its subtree, to zero or one
    /// destination element.
    ///
    /// Container-like nodes become a section wrapping a single column whose
    /// elements are the converted children in source order. Text nodes
    /// become heading widgets, rectangles become placeholder image widgets.
    /// Everything else yields `None` and is pruned subtree included; the
    /// converter never recurses into a node it rejected.
    pub fn transform_node(&mut self, node: &SourceNode) -> Option<Element> {
        match node.node_type {
            NodeType::Frame | NodeType::Component | NodeType::Instance | NodeType::Canvas => {
                Some(self.container_to_section(node))
            }
            NodeType::Text => Some(Element::heading(self.ids.next_id(), heading_title(node))),
            NodeType::Rectangle => Some(Element::image_placeholder(self.ids.next_id())),
            NodeType::Unsupported => None,
        }
    }

    fn container_to_section(&mut self, node: &SourceNode) -> Element {
        let children: Vec<Element> = node
            .children
            .iter()
            .filter_map(|child| self.transform_node(child))
            .collect();

        // A childless container still emits its section/column pair.
        let column = Element::Column {
            id: self.ids.next_id(),
            settings: ColumnSettings::default(),
            elements: children,
        };
        Element::Section {
            id: self.ids.next_id(),
            elements: vec![column],
        }
    }

    /// Converts every immediate child of `page` in order, keeping non-empty
    /// results as the flat top-level destination sequence.
    ///
    /// A page that yields no elements at all is reported as
    /// [`ConvertError::NothingConvertible`] rather than an empty success.
    pub fn convert_page(&mut self, page: &SourceNode) -> Result<Vec<Element>, ConvertError> {
        let elements: Vec<Element> = page
            .children
            .iter()
            .filter_map(|child| self.transform_node(child))
            .collect();

        if elements.is_empty() {
            return Err(ConvertError::NothingConvertible);
        }
        Ok(elements)
    }
}

fn heading_title(node: &SourceNode) -> String {
    match node.characters.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => DEFAULT_HEADING_TEXT.to_string(),
    }
}

/// Resolves the payload's first page and converts it with a default
/// converter.
pub fn convert_document(file: &DocumentFile) -> Result<Vec<Element>, ConvertError> {
    Converter::new().convert_page(file.first_page()?)
}
