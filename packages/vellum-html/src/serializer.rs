use std::collections::HashSet;
use std::fmt::Write;

use vellum_dom::{
    Attribute, DoctypeData, Document, ElementData, Node, NodeData, SERIALIZE_EVENT,
    SerializeCallback, SerializeContext, SerializeEvent, SerializeOverride,
};

use crate::escape;
use crate::void::VOID_ELEMENTS;

/// What a serialization call was asked to render.
#[derive(Debug, Clone)]
pub enum SerializeTarget {
    /// Nothing; yields an empty string.
    None,
    /// A single node.
    Node(usize),
    /// An explicit run of nodes, rendered back to back with no separators.
    List(Vec<usize>),
}

impl From<usize> for SerializeTarget {
    fn from(node_id: usize) -> Self {
        Self::Node(node_id)
    }
}

impl From<Option<usize>> for SerializeTarget {
    fn from(node_id: Option<usize>) -> Self {
        match node_id {
            Some(node_id) => Self::Node(node_id),
            None => Self::None,
        }
    }
}

impl From<Vec<usize>> for SerializeTarget {
    fn from(node_ids: Vec<usize>) -> Self {
        Self::List(node_ids)
    }
}

impl From<&[usize]> for SerializeTarget {
    fn from(node_ids: &[usize]) -> Self {
        Self::List(node_ids.to_vec())
    }
}

/// Serializes [`Document`] nodes to HTML.
///
/// Owns the void-element lookup table; otherwise stateless, so one serializer can
/// be reused across documents and calls.
pub struct HtmlSerializer {
    void_elements: HashSet<&'static str>,
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self {
            void_elements: VOID_ELEMENTS.iter().copied().collect(),
        }
    }

    /// Serialize a target without observers of your own. Observers already
    /// registered on the document's nodes still run.
    pub fn serialize(&self, doc: &Document, target: impl Into<SerializeTarget>) -> String {
        let mut out = String::new();
        let renderer = Renderer {
            doc,
            serializer: self,
            context: None,
        };
        match target.into() {
            SerializeTarget::None => {}
            SerializeTarget::Node(node_id) => renderer.node(node_id, &mut out),
            SerializeTarget::List(node_ids) => renderer.node_list(&node_ids, &mut out),
        }
        out
    }

    /// Serialize a target, forwarding `context` to every notification fired
    /// during the call and scoping `listener` to the top-level node(s).
    ///
    /// The listener is registered as a one-shot `"serialize"` observer on each
    /// top-level node just before that node is dispatched, and deregistered on
    /// every exit path, cancellation included. Descendant nodes never have it
    /// registered directly, though their notifications do bubble past the
    /// top-level node like any others.
    pub fn serialize_with(
        &self,
        doc: &mut Document,
        target: impl Into<SerializeTarget>,
        context: Option<SerializeContext>,
        listener: Option<SerializeCallback>,
    ) -> String {
        let mut out = String::new();
        match target.into() {
            SerializeTarget::None => {}
            SerializeTarget::Node(node_id) => {
                self.serialize_root(doc, node_id, context, listener, &mut out);
            }
            SerializeTarget::List(node_ids) => {
                for node_id in node_ids {
                    self.serialize_root(doc, node_id, context.clone(), listener.clone(), &mut out);
                }
            }
        }
        out
    }

    fn serialize_root(
        &self,
        doc: &mut Document,
        node_id: usize,
        context: Option<SerializeContext>,
        listener: Option<SerializeCallback>,
        out: &mut String,
    ) {
        let registration = listener.map(|callback| {
            doc.add_event_listener_once(node_id, SERIALIZE_EVENT, callback)
        });

        let renderer = Renderer {
            doc,
            serializer: self,
            context,
        };
        renderer.node(node_id, out);

        if let Some(listener_id) = registration {
            doc.remove_event_listener(node_id, listener_id);
        }
    }

    fn is_void(&self, tag_name: &str) -> bool {
        self.void_elements.contains(tag_name)
    }
}

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a node or a run of nodes. See [`HtmlSerializer::serialize`].
pub fn serialize(doc: &Document, target: impl Into<SerializeTarget>) -> String {
    HtmlSerializer::new().serialize(doc, target)
}

/// Serialize with an opaque context and a scoped top-level observer. See
/// [`HtmlSerializer::serialize_with`].
pub fn serialize_with(
    doc: &mut Document,
    target: impl Into<SerializeTarget>,
    context: Option<SerializeContext>,
    listener: Option<SerializeCallback>,
) -> String {
    HtmlSerializer::new().serialize_with(doc, target, context, listener)
}

/// One serialization pass over one document: the tree is borrowed read-only for
/// the lifetime of the pass and the context travels with every notification.
struct Renderer<'doc, 'ser> {
    doc: &'doc Document,
    serializer: &'ser HtmlSerializer,
    context: Option<SerializeContext>,
}

impl Renderer<'_, '_> {
    /// Dispatch one node: fire its notification, then honor cancellation or an
    /// override, falling through to kind-based rendering.
    fn node(&self, node_id: usize, out: &mut String) {
        let Some(node) = self.doc.get_node(node_id) else {
            #[cfg(feature = "tracing")]
            tracing::warn!("serialize target {node_id} is not part of the document");
            return;
        };

        let mut event = SerializeEvent::new(node_id, self.context.clone());
        if !self.doc.dispatch_event(&mut event) {
            // Cancelled: an observer suppressed this subtree.
            return;
        }

        match event.take_override() {
            Some(SerializeOverride::Text(markup)) => out.push_str(&markup),
            Some(SerializeOverride::Node(replacement_id)) => self.node(replacement_id, out),
            Some(SerializeOverride::Value(value)) => {
                let _ = write!(out, "{value}");
            }
            None => match &node.data {
                NodeData::Element(element) => self.element(node, element, out),
                NodeData::Attribute(attr) => self.attribute(attr, out),
                NodeData::Text(text) => out.push_str(&escape::text(&text.content)),
                NodeData::Comment(comment) => {
                    out.push_str("<!--");
                    out.push_str(&comment.contents);
                    out.push_str("-->");
                }
                NodeData::Doctype(doctype) => self.doctype(doctype, out),
                NodeData::Document | NodeData::DocumentFragment => {
                    self.node_list(&node.children, out);
                }
            },
        }
    }

    fn element(&self, node: &Node, element: &ElementData, out: &mut String) {
        let tag_name = element.name.local.to_ascii_lowercase();

        out.push('<');
        out.push_str(&tag_name);
        for attr in element.attrs.iter() {
            out.push(' ');
            self.attribute(attr, out);
        }
        out.push('>');

        self.node_list(&node.children, out);

        if !self.serializer.is_void(&tag_name) {
            out.push_str("</");
            out.push_str(&tag_name);
            out.push('>');
        }
    }

    fn attribute(&self, attr: &Attribute, out: &mut String) {
        out.push_str(&attr.name.local);
        out.push_str("=\"");
        out.push_str(&escape::attribute(&attr.value));
        out.push('"');
    }

    fn doctype(&self, doctype: &DoctypeData, out: &mut String) {
        out.push_str("<!DOCTYPE ");
        out.push_str(&doctype.name);
        if let Some(public_id) = &doctype.public_id {
            out.push_str(" PUBLIC \"");
            out.push_str(public_id);
            out.push('"');
        } else if doctype.system_id.is_some() {
            out.push_str(" SYSTEM");
        }
        if let Some(system_id) = &doctype.system_id {
            out.push_str(" \"");
            out.push_str(system_id);
            out.push('"');
        }
        out.push('>');
    }

    /// Render a run of nodes back to back. The list itself fires no
    /// notification; each member goes through [`Self::node`].
    fn node_list(&self, node_ids: &[usize], out: &mut String) {
        for node_id in node_ids.iter().copied() {
            self.node(node_id, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_dom::qual_name;

    #[test]
    fn empty_element_closes() {
        let mut doc = Document::new();
        let span = doc.create_element(qual_name("span", None), vec![]);
        assert_eq!(serialize(&doc, span), "<span></span>");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let mut doc = Document::new();
        for tag in ["br", "img", "input", "meta", "hr"] {
            let element = doc.create_element(qual_name(tag, None), vec![]);
            assert_eq!(serialize(&doc, element), format!("<{tag}>"));
        }
    }

    #[test]
    fn tag_names_are_lowercased() {
        let mut doc = Document::new();
        let div = doc.create_element(qual_name("DIV", None), vec![]);
        assert_eq!(serialize(&doc, div), "<div></div>");

        // The void lookup happens after lowercasing too.
        let br = doc.create_element(qual_name("BR", None), vec![]);
        assert_eq!(serialize(&doc, br), "<br>");
    }

    #[test]
    fn doctype_forms() {
        let mut doc = Document::new();

        let bare = doc.create_doctype("html", None, None);
        assert_eq!(serialize(&doc, bare), "<!DOCTYPE html>");

        let public_only = doc.create_doctype("html", Some("-//FOO//BAR//EN"), None);
        assert_eq!(
            serialize(&doc, public_only),
            r#"<!DOCTYPE html PUBLIC "-//FOO//BAR//EN">"#
        );

        let system_only = doc.create_doctype("html", None, Some("about:legacy-compat"));
        assert_eq!(
            serialize(&doc, system_only),
            r#"<!DOCTYPE html SYSTEM "about:legacy-compat">"#
        );

        let both = doc.create_doctype("html", Some("-//FOO//BAR//EN"), Some("foo.dtd"));
        assert_eq!(
            serialize(&doc, both),
            r#"<!DOCTYPE html PUBLIC "-//FOO//BAR//EN" "foo.dtd">"#
        );
    }

    #[test]
    fn absent_target_is_empty() {
        let doc = Document::new();
        assert_eq!(serialize(&doc, SerializeTarget::None), "");
        assert_eq!(serialize(&doc, None::<usize>), "");
    }

    #[test]
    fn unknown_node_id_is_empty() {
        let doc = Document::new();
        assert_eq!(serialize(&doc, 4711), "");
    }

    #[test]
    fn serializer_is_reusable() {
        let serializer = HtmlSerializer::new();
        let mut doc = Document::new();
        let br = doc.create_element(qual_name("br", None), vec![]);
        assert_eq!(serializer.serialize(&doc, br), "<br>");
        assert_eq!(serializer.serialize(&doc, br), "<br>");
    }
}
