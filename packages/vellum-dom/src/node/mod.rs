mod attributes;
mod element;
mod node;

pub use attributes::{Attribute, Attributes};
pub use element::ElementData;
pub use node::{CommentData, DoctypeData, Node, NodeData, NodeKind, TextNodeData};
