//! HTML serialization for Vellum DOM trees
//!
//! Turns a [vellum-dom](https://docs.rs/vellum-dom) node tree (or any slice of it) back
//! into its textual markup. The tree is borrowed read-only; output is an in-memory
//! string.
//!
//! Before a node's default rendering runs, a cancelable, bubbling `"serialize"`
//! notification is fired on it. Observers registered on the node or any of its
//! ancestors can cancel the output for that subtree or replace it with a string,
//! another node, or an arbitrary `Display` value, without the serializer knowing
//! anything about that logic. See [`serialize_with`] and
//! [`vellum_dom::SerializeEvent`].
//!
//! ```
//! use vellum_dom::{Document, qual_name};
//! use vellum_html::serialize;
//!
//! let mut doc = Document::new();
//! let div = doc.create_element(qual_name("div", None), vec![]);
//! let text = doc.create_text_node("hello");
//! doc.append_child(div, text);
//!
//! assert_eq!(serialize(&doc, div), "<div>hello</div>");
//! ```

pub mod escape;
mod serializer;
mod void;

pub use serializer::{HtmlSerializer, SerializeTarget, serialize, serialize_with};
