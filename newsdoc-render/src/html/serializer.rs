//! HTML serialization (document tree → HTML string)
//!
//! Dispatch is by node type: children (if any) serialize in order into the
//! buffer, then get wrapped per type. The whole path is pure and infallible;
//! a page render can never be failed from here. All text content and all
//! attribute values pass through the escaper before insertion.

use tracing::debug;

use crate::common::escape::escape_html;
use crate::common::storage::normalize_media_src;
use crate::html::embeds;
use crate::html::text::format_text;
use crate::html::RenderOptions;
use crate::model::{Document, DocumentNode, ImageNode, LinkNode};

/// Render a raw editor JSON payload to HTML.
///
/// Invalid JSON or a missing root yields an empty string, never an error.
pub fn render_document(json: &str) -> String {
    render_document_with(json, &RenderOptions::default())
}

/// [`render_document`] with explicit options.
pub fn render_document_with(json: &str, options: &RenderOptions) -> String {
    match Document::from_json(json) {
        Ok(doc) => render_tree_with(&doc, options),
        Err(err) => {
            debug!(error = %err, "dropping unrenderable document payload");
            String::new()
        }
    }
}

/// Render an already-parsed document tree to HTML.
pub fn render_tree(doc: &Document) -> String {
    render_tree_with(doc, &RenderOptions::default())
}

/// [`render_tree`] with explicit options.
pub fn render_tree_with(doc: &Document, options: &RenderOptions) -> String {
    let mut out = String::new();
    for child in &doc.children {
        write_node(child, &mut out, options);
    }
    out
}

/// Render a single node to HTML.
pub fn render_node(node: &DocumentNode) -> String {
    render_node_with(node, &RenderOptions::default())
}

/// [`render_node`] with explicit options.
pub fn render_node_with(node: &DocumentNode, options: &RenderOptions) -> String {
    let mut out = String::new();
    write_node(node, &mut out, options);
    out
}

fn write_node(node: &DocumentNode, out: &mut String, options: &RenderOptions) {
    match node {
        DocumentNode::Text(text) => {
            out.push_str(&format_text(&text.text, text.format, text.style.as_deref()));
        }
        DocumentNode::Paragraph(p) => write_wrapped(out, "p", &p.children, options),
        DocumentNode::Quote(q) => write_wrapped(out, "blockquote", &q.children, options),
        DocumentNode::Heading(h) => {
            let tag = format!("h{}", h.level);
            write_wrapped(out, &tag, &h.children, options);
        }
        DocumentNode::List(l) => {
            let tag = if l.ordered { "ol" } else { "ul" };
            write_wrapped(out, tag, &l.children, options);
        }
        DocumentNode::ListItem(li) => write_wrapped(out, "li", &li.children, options),
        DocumentNode::Link(link) => write_link(link, out, options),
        DocumentNode::Image(image) => write_image(image, out),
        DocumentNode::Linebreak => out.push_str("<br>"),
        DocumentNode::HorizontalRule => out.push_str("<hr>"),
        DocumentNode::Code(code) => {
            out.push_str("<pre><code>");
            out.push_str(&escape_html(&code.text));
            out.push_str("</code></pre>");
        }
        DocumentNode::CodeHighlight(code) => {
            match code.language.as_deref() {
                Some(language) => {
                    out.push_str("<pre><code class=\"language-");
                    out.push_str(&escape_html(language));
                    out.push_str("\">");
                }
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&escape_html(&code.text));
            out.push_str("</code></pre>");
        }
        // Tables serialize structurally; the scroll wrapper is a presentation
        // concern added at mount time by the content enhancer.
        DocumentNode::Table(t) => write_wrapped(out, "table", &t.children, options),
        DocumentNode::TableRow(r) => write_wrapped(out, "tr", &r.children, options),
        DocumentNode::TableCell(cell) => {
            let tag = if cell.header { "th" } else { "td" };
            write_wrapped(out, tag, &cell.children, options);
        }
        DocumentNode::Youtube(video) => out.push_str(&embeds::youtube_markup(video, options)),
        DocumentNode::Tweet(tweet) => out.push_str(&embeds::tweet_markup(tweet, options)),
        DocumentNode::Unknown(unknown) => {
            if !unknown.children.is_empty() {
                debug!(node_type = %unknown.node_type, "flattening unknown node type");
                for child in &unknown.children {
                    write_node(child, out, options);
                }
            } else if let Some(text) = unknown.text.as_deref() {
                debug!(node_type = %unknown.node_type, "rendering unknown node as raw text");
                out.push_str(&escape_html(text));
            }
        }
    }
}

fn write_wrapped(out: &mut String, tag: &str, children: &[DocumentNode], options: &RenderOptions) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    for child in children {
        write_node(child, out, options);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_link(link: &LinkNode, out: &mut String, options: &RenderOptions) {
    out.push_str("<a href=\"");
    out.push_str(&escape_html(&link.url));
    out.push('"');
    if let Some(target) = link.target.as_deref() {
        out.push_str(" target=\"");
        out.push_str(&escape_html(target));
        out.push('"');
        if target == "_blank" {
            out.push_str(" rel=\"noopener noreferrer\"");
        }
    }
    out.push('>');
    for child in &link.children {
        write_node(child, out, options);
    }
    out.push_str("</a>");
}

fn write_image(image: &ImageNode, out: &mut String) {
    out.push_str("<img src=\"");
    out.push_str(&escape_html(&normalize_media_src(&image.src)));
    out.push_str("\" alt=\"");
    out.push_str(&escape_html(&image.alt_text));
    out.push('"');
    // Both dimensions or neither: a lone width/height is a broken aspect hint
    // that causes layout shift.
    if let (Some(width), Some(height)) = (image.width, image.height) {
        if width > 0 && height > 0 {
            out.push_str(&format!(" width=\"{width}\" height=\"{height}\""));
        }
    }
    out.push_str(" loading=\"lazy\" decoding=\"async\" style=\"");
    out.push_str(&responsive_image_style(image.max_width));
    out.push_str("\">");
}

fn responsive_image_style(max_width: Option<i64>) -> String {
    match max_width {
        Some(mw) if mw >= 300 => {
            format!("max-width:min(100%, {mw}px);height:auto;width:auto;object-fit:contain")
        }
        _ => "max-width:100%;height:auto;width:auto;object-fit:contain".to_string(),
    }
}
