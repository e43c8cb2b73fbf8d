//! HTML entity escaping.
//!
//! Every string leaf of the document tree passes through here before it is
//! inserted into markup, whether as text content or as an attribute value.
//! This is the subsystem's only defense against content injection: the tree
//! shape is trusted (it comes from our editor), the strings inside it are not.

/// Escape HTML special characters in text.
///
/// Ampersand is replaced first so already-produced entities are not
/// re-escaped into `&amp;lt;`.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
