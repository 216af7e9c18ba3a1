use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// The name of the notification fired for every node the serializer visits.
pub const SERIALIZE_EVENT: &str = "serialize";

/// Opaque caller-supplied value forwarded unchanged to every notification fired
/// during one serialization call. Observers downcast it to whatever they agreed
/// on with the caller; it has no effect on default rendering.
pub type SerializeContext = Rc<dyn Any>;

/// An observer callback. Runs synchronously while the notification is being
/// dispatched and may cancel the event or write an override into it.
pub type SerializeCallback = Rc<dyn Fn(&mut SerializeEvent)>;

/// How an observer replaces the default serialization of a node.
pub enum SerializeOverride {
    /// Final markup, returned verbatim (not re-escaped).
    Text(String),
    /// Another node to serialize in place of the target. This is the one
    /// override that re-enters kind dispatch instead of terminating it.
    Node(usize),
    /// An arbitrary value; its `Display` output is returned verbatim.
    Value(Box<dyn fmt::Display>),
}

impl fmt::Debug for SerializeOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(markup) => f.debug_tuple("Text").field(markup).finish(),
            Self::Node(id) => f.debug_tuple("Node").field(id).finish(),
            Self::Value(_) => f.write_str("Value(..)"),
        }
    }
}

/// A cancelable, bubbling notification fired on a node before its default
/// serialization runs.
///
/// Observers along the bubbling path may call [`prevent_default`](Self::prevent_default)
/// to suppress the node's output entirely, or [`set_override`](Self::set_override)
/// to replace it. Cancellation wins over an override.
pub struct SerializeEvent {
    /// The node the notification was fired on
    pub target: usize,
    /// Which is true if the event bubbles up through the DOM tree.
    pub bubbles: bool,
    /// Which is true if the event can be canceled.
    pub cancelable: bool,
    /// The node whose listeners are currently being invoked, while dispatch is
    /// in progress
    pub current_target: Option<usize>,

    /// Where true indicates that the default serialization was prevented,
    /// and false indicates that it was not.
    default_prevented: bool,
    propagation_stopped: bool,

    override_payload: Option<SerializeOverride>,
    context: Option<SerializeContext>,
}

impl SerializeEvent {
    pub fn new(target: usize, context: Option<SerializeContext>) -> Self {
        Self {
            target,
            bubbles: true,
            cancelable: true,
            current_target: None,
            default_prevented: false,
            propagation_stopped: false,
            override_payload: None,
            context,
        }
    }

    /// Returns the name of the event
    pub fn name(&self) -> &'static str {
        SERIALIZE_EVENT
    }

    pub fn prevent_default(&mut self) {
        if !self.cancelable {
            return;
        }
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// The opaque context value supplied to the serialization call, if any.
    pub fn context(&self) -> Option<&SerializeContext> {
        self.context.as_ref()
    }

    pub fn set_override(&mut self, payload: SerializeOverride) {
        self.override_payload = Some(payload);
    }

    pub fn override_payload(&self) -> Option<&SerializeOverride> {
        self.override_payload.as_ref()
    }

    pub fn take_override(&mut self) -> Option<SerializeOverride> {
        self.override_payload.take()
    }
}

impl fmt::Debug for SerializeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializeEvent")
            .field("target", &self.target)
            .field("bubbles", &self.bubbles)
            .field("cancelable", &self.cancelable)
            .field("current_target", &self.current_target)
            .field("default_prevented", &self.default_prevented)
            .field("propagation_stopped", &self.propagation_stopped)
            .field("override_payload", &self.override_payload)
            .finish_non_exhaustive()
    }
}

/// Handle for a registered observer, used to deregister it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(pub(crate) u64);

/// An observer registered on a node.
pub struct EventListener {
    /// Name of the event the observer subscribed to
    pub name: String,
    pub(crate) id: ListenerId,
    pub(crate) callback: SerializeCallback,
    pub(crate) once: bool,
    spent: Cell<bool>,
}

impl EventListener {
    pub(crate) fn new(id: ListenerId, name: String, callback: SerializeCallback, once: bool) -> Self {
        Self {
            name,
            id,
            callback,
            once,
            spent: Cell::new(false),
        }
    }

    /// Whether this listener should be invoked for the next delivery. One-shot
    /// listeners report true exactly once.
    pub(crate) fn take_delivery(&self) -> bool {
        if !self.once {
            return true;
        }
        !self.spent.replace(true)
    }
}
