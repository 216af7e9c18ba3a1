use markup5ever::QualName;
use slab::Slab;

use crate::events::{EventListener, ListenerId, SerializeCallback, SerializeEvent};
use crate::node::{
    Attribute, CommentData, DoctypeData, ElementData, Node, NodeData, TextNodeData,
};

/// A tree of markup nodes.
///
/// Nodes live in a slab-backed arena and are addressed by `usize` ids. The document
/// node itself is always id 0. The tree is built through the `create_*` and
/// `append_*` methods and consumed read-only by serializers.
pub struct Document {
    /// A slab-backed tree of nodes
    nodes: Slab<Node>,

    /// Source of unique ids for listener registrations
    next_listener_id: u64,
}

impl Document {
    /// Create a new (empty) [`Document`]. The document node occupies id 0.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Slab::new(),
            next_listener_id: 0,
        };
        doc.create_node(NodeData::Document);
        doc
    }

    pub fn nodes(&self) -> &Slab<Node> {
        &self.nodes
    }

    pub fn root_node(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn get_node(&self, node_id: usize) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn get_node_mut(&mut self, node_id: usize) -> Option<&mut Node> {
        self.nodes.get_mut(node_id)
    }

    pub fn create_node(&mut self, node_data: NodeData) -> usize {
        let entry = self.nodes.vacant_entry();
        let id = entry.key();
        entry.insert(Node::new(id, node_data));
        id
    }

    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> usize {
        self.create_node(NodeData::Element(ElementData::new(name, attrs)))
    }

    pub fn create_text_node(&mut self, text: &str) -> usize {
        self.create_node(NodeData::Text(TextNodeData::new(text.to_string())))
    }

    pub fn create_comment(&mut self, contents: &str) -> usize {
        self.create_node(NodeData::Comment(CommentData::new(contents.to_string())))
    }

    pub fn create_doctype(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> usize {
        self.create_node(NodeData::Doctype(DoctypeData::new(
            name.to_string(),
            public_id.map(str::to_string),
            system_id.map(str::to_string),
        )))
    }

    pub fn create_fragment(&mut self) -> usize {
        self.create_node(NodeData::DocumentFragment)
    }

    pub fn create_attribute(&mut self, name: QualName, value: &str) -> usize {
        self.create_node(NodeData::Attribute(Attribute::new(name, value)))
    }

    pub fn append_child(&mut self, parent_id: usize, child_id: usize) {
        self.append_children(parent_id, &[child_id]);
    }

    /// Append nodes to a parent's child list, detaching each from its previous
    /// parent first.
    pub fn append_children(&mut self, parent_id: usize, child_ids: &[usize]) {
        for child_id in child_ids.iter().copied() {
            if let Some(old_parent_id) = self.nodes[child_id].parent.take() {
                self.nodes[old_parent_id]
                    .children
                    .retain(|id| *id != child_id);
            }
            self.nodes[child_id].parent = Some(parent_id);
            self.nodes[parent_id].children.push(child_id);
        }
    }

    /// Register an observer on a node. Returns a handle for
    /// [`remove_event_listener`](Self::remove_event_listener).
    pub fn add_event_listener(
        &mut self,
        node_id: usize,
        name: &str,
        callback: SerializeCallback,
    ) -> ListenerId {
        self.push_listener(node_id, name, callback, false)
    }

    /// Register an observer that is delivered at most one event, no matter how
    /// many notifications pass through the node before it is removed.
    pub fn add_event_listener_once(
        &mut self,
        node_id: usize,
        name: &str,
        callback: SerializeCallback,
    ) -> ListenerId {
        self.push_listener(node_id, name, callback, true)
    }

    fn push_listener(
        &mut self,
        node_id: usize,
        name: &str,
        callback: SerializeCallback,
        once: bool,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.nodes[node_id]
            .listeners
            .push(EventListener::new(id, name.to_string(), callback, once));
        id
    }

    /// Deregister an observer. Returns false if no matching registration was
    /// found on the node.
    pub fn remove_event_listener(&mut self, node_id: usize, listener_id: ListenerId) -> bool {
        let Some(node) = self.nodes.get_mut(node_id) else {
            return false;
        };
        let before = node.listeners.len();
        node.listeners.retain(|listener| listener.id != listener_id);
        let removed = node.listeners.len() != before;
        #[cfg(feature = "tracing")]
        if !removed {
            tracing::debug!("no listener {listener_id:?} registered on node {node_id}");
        }
        removed
    }

    /// Fire an event on its target and let it bubble towards the root.
    ///
    /// Listeners run in registration order per node; a listener may stop further
    /// propagation or, for cancelable events, prevent the default action. Returns
    /// true if the default action should proceed (i.e. the event was not cancelled).
    pub fn dispatch_event(&self, event: &mut SerializeEvent) -> bool {
        let path = if event.bubbles {
            self.node_chain(event.target)
        } else {
            vec![event.target]
        };

        for node_id in path {
            let Some(node) = self.get_node(node_id) else {
                continue;
            };
            event.current_target = Some(node_id);
            // Clone the callback handles out first: a callback only sees the
            // event, never the listener list it is stored in.
            let callbacks: Vec<SerializeCallback> = node
                .listeners
                .iter()
                .filter(|listener| listener.name == event.name() && listener.take_delivery())
                .map(|listener| SerializeCallback::clone(&listener.callback))
                .collect();
            for callback in callbacks {
                callback(event);
            }
            if event.propagation_stopped() {
                break;
            }
        }
        event.current_target = None;

        !event.default_prevented()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
