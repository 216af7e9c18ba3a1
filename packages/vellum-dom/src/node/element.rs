use markup5ever::{LocalName, QualName};

use super::{Attribute, Attributes};

/// The element-specific data of a [`NodeData::Element`](super::NodeData::Element) node.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// The element's tag name, namespace and prefix
    pub name: QualName,

    /// The element's attributes
    pub attrs: Attributes,
}

impl ElementData {
    pub fn new(name: QualName, attrs: Vec<Attribute>) -> Self {
        ElementData {
            name,
            attrs: Attributes::new(attrs),
        }
    }

    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    pub fn attr(&self, name: impl PartialEq<LocalName>) -> Option<&str> {
        let attr = self.attrs.iter().find(|attr| name == attr.name.local)?;
        Some(&attr.value)
    }

    pub fn has_attr(&self, name: impl PartialEq<LocalName>) -> bool {
        self.attrs.iter().any(|attr| name == attr.name.local)
    }
}
