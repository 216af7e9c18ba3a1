use std::ops::{Deref, DerefMut};

use markup5ever::{LocalName, QualName};

/// A tag attribute, e.g. `class="test"` in `<div class="test" ...>`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug)]
pub struct Attribute {
    /// The name of the attribute (e.g. the `class` in `<div class="test">`)
    pub name: QualName,
    /// The value of the attribute (e.g. the `"test"` in `<div class="test">`)
    pub value: String,
}

impl Attribute {
    pub fn new(name: QualName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// An element's attributes, in document order.
#[derive(Clone, Debug, Default)]
pub struct Attributes {
    inner: Vec<Attribute>,
}

impl Attributes {
    pub fn new(inner: Vec<Attribute>) -> Self {
        Self { inner }
    }

    /// Looks up an attribute value by local name.
    pub fn get(&self, name: impl PartialEq<LocalName>) -> Option<&str> {
        let attr = self.inner.iter().find(|attr| name == attr.name.local)?;
        Some(&attr.value)
    }

    /// Sets an attribute, replacing the value of an existing attribute with the
    /// same name (the attribute keeps its position) or appending a new one.
    pub fn set(&mut self, name: QualName, value: &str) {
        match self.inner.iter_mut().find(|a| a.name == name) {
            Some(existing_attr) => {
                existing_attr.value.clear();
                existing_attr.value.push_str(value);
            }
            None => self.push(Attribute::new(name, value)),
        }
    }

    pub fn remove(&mut self, name: &QualName) -> Option<Attribute> {
        let idx = self.inner.iter().position(|attr| attr.name == *name)?;
        Some(self.inner.remove(idx))
    }
}

impl Deref for Attributes {
    type Target = Vec<Attribute>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl DerefMut for Attributes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
