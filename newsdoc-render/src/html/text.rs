//! Inline formatting: bitmask → nested inline tags.
//!
//! Each bit of a text node's `format` toggles one independent style axis.
//! Input order of the bits never matters; the wrap order below is fixed, so a
//! given mask always produces byte-identical markup.

use crate::common::escape::escape_html;

pub const FORMAT_BOLD: u32 = 1;
pub const FORMAT_ITALIC: u32 = 1 << 1;
pub const FORMAT_STRIKETHROUGH: u32 = 1 << 2;
pub const FORMAT_UNDERLINE: u32 = 1 << 3;
pub const FORMAT_CODE: u32 = 1 << 4;
pub const FORMAT_SUBSCRIPT: u32 = 1 << 5;
pub const FORMAT_SUPERSCRIPT: u32 = 1 << 6;

/// Wrap order, outermost first. Bits outside this table are ignored.
const WRAP_ORDER: [(u32, &str); 7] = [
    (FORMAT_BOLD, "strong"),
    (FORMAT_ITALIC, "em"),
    (FORMAT_STRIKETHROUGH, "s"),
    (FORMAT_UNDERLINE, "u"),
    (FORMAT_CODE, "code"),
    (FORMAT_SUBSCRIPT, "sub"),
    (FORMAT_SUPERSCRIPT, "sup"),
];

/// Escape `text` and wrap it per the format bitmask, bold outermost.
///
/// A present `style` string wraps the fully-formatted result once more in a
/// styled `<span>`, outermost of all. The style value is escaped like any
/// other attribute; it is not CSS-validated.
pub fn format_text(text: &str, format: u32, style: Option<&str>) -> String {
    let mut out = escape_html(text);
    for (bit, tag) in WRAP_ORDER.iter().rev() {
        if format & bit != 0 {
            out = format!("<{tag}>{out}</{tag}>");
        }
    }
    if let Some(style) = style.filter(|s| !s.trim().is_empty()) {
        out = format!("<span style=\"{}\">{}</span>", escape_html(style), out);
    }
    out
}
