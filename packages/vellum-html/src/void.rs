//! The HTML void elements: element names whose grammar forbids a closing tag.

/// Void element names. Lookups must use lower-cased tag names.
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];
