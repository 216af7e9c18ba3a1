use markup5ever::{LocalName, Namespace, QualName, namespace_url, ns};

/// Creates a markup5ever `QualName` from a local name and an optional namespace,
/// defaulting to the HTML namespace.
pub fn qual_name(local_name: &str, namespace: Option<&str>) -> QualName {
    QualName {
        prefix: None,
        ns: namespace.map(Namespace::from).unwrap_or(ns!(html)),
        local: LocalName::from(local_name),
    }
}
