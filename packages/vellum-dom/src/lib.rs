//! The DOM abstraction underpinning Vellum
//!
//! This crate implements a headless DOM ([`Document`]) holding a tree of markup nodes:
//! elements, attributes, text, comments, doctypes and document fragments. The tree is
//! built and owned by the caller; consumers such as the serializer in
//! [vellum-html](https://docs.rs/vellum-html) borrow it read-only.
//!
//! It also provides the per-node notification mechanism that makes serialization
//! interceptable: observers registered with [`Document::add_event_listener`] receive a
//! cancelable, bubbling [`SerializeEvent`] for every node the serializer visits and can
//! cancel or replace the output for that node's subtree.
//!
//! Dispatch is synchronous and single-threaded: every observer callback runs to
//! completion before [`Document::dispatch_event`] returns.

/// The DOM implementation.
///
/// This is the primary entry point for this crate.
mod document;

/// The nodes themselves, and their data.
pub mod node;

mod events;
mod traversal;

pub mod util;

pub use document::Document;
pub use events::{
    EventListener, ListenerId, SERIALIZE_EVENT, SerializeCallback, SerializeContext,
    SerializeEvent, SerializeOverride,
};
pub use markup5ever::{
    LocalName, Namespace, Prefix, QualName, local_name, namespace_prefix, namespace_url, ns,
};
pub use node::{
    Attribute, Attributes, CommentData, DoctypeData, ElementData, Node, NodeData, NodeKind,
    TextNodeData,
};
pub use traversal::{AncestorTraverser, TreeTraverser};
pub use util::qual_name;
