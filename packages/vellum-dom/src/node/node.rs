use markup5ever::LocalName;

use super::{Attribute, ElementData};
use crate::events::EventListener;

/// A node of the document tree.
///
/// Nodes are arena-allocated by their [`Document`](crate::Document) and addressed by
/// `usize` ids; parent and child links are ids into the same arena.
pub struct Node {
    /// Our Id
    pub id: usize,
    /// Our parent's ID
    pub parent: Option<usize>,
    /// What are our children?
    pub children: Vec<usize>,

    /// Node type (Element, Text, etc) specific data
    pub data: NodeData,

    /// Observers registered on this node, in registration order
    pub(crate) listeners: Vec<EventListener>,
}

impl Node {
    pub(crate) fn new(id: usize, data: NodeData) -> Self {
        Self {
            id,
            parent: None,
            children: Vec::new(),
            data,
            listeners: Vec::new(),
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element { .. })
    }

    pub fn is_text_node(&self) -> bool {
        matches!(self.data, NodeData::Text { .. })
    }

    pub fn element_data(&self) -> Option<&ElementData> {
        self.data.downcast_element()
    }

    pub fn element_data_mut(&mut self) -> Option<&mut ElementData> {
        self.data.downcast_element_mut()
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(data) => Some(&data.content),
            _ => None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    DocumentFragment,
    Element,
    Attribute,
    Text,
    Comment,
    Doctype,
}

/// The different kinds of nodes in the DOM.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// The `Document` itself - the root node of the document.
    Document,

    /// A container for a subtree that has no parent document semantics of its own.
    DocumentFragment,

    /// An element with attributes.
    Element(ElementData),

    /// A standalone attribute node: a name/value pair detached from any element.
    Attribute(Attribute),

    /// A text node.
    Text(TextNodeData),

    /// A comment.
    Comment(CommentData),

    /// A `DOCTYPE` with name, public id, and system id. See
    /// [document type declaration on wikipedia](https://en.wikipedia.org/wiki/Document_type_declaration)
    Doctype(DoctypeData),
}

impl NodeData {
    pub fn downcast_element(&self) -> Option<&ElementData> {
        match self {
            Self::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn downcast_element_mut(&mut self) -> Option<&mut ElementData> {
        match self {
            Self::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_element_with_tag_name(&self, name: &impl PartialEq<LocalName>) -> bool {
        let Some(elem) = self.downcast_element() else {
            return false;
        };
        *name == elem.name.local
    }

    pub fn attrs(&self) -> Option<&[Attribute]> {
        Some(self.downcast_element()?.attrs())
    }

    pub fn attr(&self, name: impl PartialEq<LocalName>) -> Option<&str> {
        self.downcast_element()?.attr(name)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Document => NodeKind::Document,
            NodeData::DocumentFragment => NodeKind::DocumentFragment,
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Attribute(_) => NodeKind::Attribute,
            NodeData::Text(_) => NodeKind::Text,
            NodeData::Comment(_) => NodeKind::Comment,
            NodeData::Doctype(_) => NodeKind::Doctype,
        }
    }
}

/// The data of a text node.
#[derive(Debug, Clone)]
pub struct TextNodeData {
    /// The textual content of the text node
    pub content: String,
}

impl TextNodeData {
    pub fn new(content: String) -> Self {
        Self { content }
    }
}

/// The data of a comment node.
#[derive(Debug, Clone)]
pub struct CommentData {
    /// The comment's character data, excluding the `<!--` / `-->` delimiters
    pub contents: String,
}

impl CommentData {
    pub fn new(contents: String) -> Self {
        Self { contents }
    }
}

/// The data of a doctype node.
#[derive(Debug, Clone)]
pub struct DoctypeData {
    /// The root element name, e.g. `html`
    pub name: String,
    /// The public identifier, if declared
    pub public_id: Option<String>,
    /// The system identifier, if declared
    pub system_id: Option<String>,
}

impl DoctypeData {
    pub fn new(name: String, public_id: Option<String>, system_id: Option<String>) -> Self {
        Self {
            name,
            public_id,
            system_id,
        }
    }
}
