//! Escaping profiles for serialized output.
//!
//! Thin call-throughs to the `html-escape` entity encoder. Two profiles exist:
//! attribute values additionally need their quote characters escaped, while text
//! content always gets `<`, `>` and `&` escaped.

use std::borrow::Cow;

/// Escape a string for use inside a quoted attribute value.
///
/// Covers `&`, `<`, `>`, `"` and `'`. Characters outside the encoder's table
/// pass through unchanged.
pub fn attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_safe(value)
}

/// Escape character data for use as element text content.
///
/// `&`, `<` and `>` are always escaped; quote characters are left alone.
pub fn text(data: &str) -> Cow<'_, str> {
    html_escape::encode_text(data)
}
