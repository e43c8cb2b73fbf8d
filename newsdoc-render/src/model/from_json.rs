//! Graceful JSON decoding for the document tree.
//!
//! The editor contract is structural, not schema-validated: dispatch on the
//! `type` field, read the attributes each variant cares about, and default
//! anything missing or mistyped. Below the root nothing here can fail; an
//! unrecognized or absent `type` decodes to [`UnknownNode`] and malformed
//! attributes fall back to their zero values. The only errors surface at the
//! document boundary: unparseable JSON and a missing `root` object.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::RenderError;
use crate::model::nodes::*;

impl Document {
    /// Decode an editor payload of the form `{"root": {"children": [...]}}`.
    pub fn from_json(json: &str) -> Result<Document, RenderError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| RenderError::InvalidJson(e.to_string()))?;
        document_from_value(&value)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        document_from_value(&value).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for DocumentNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(node_from_value(&Value::deserialize(deserializer)?))
    }
}

/// Decode a parsed payload. The value must carry a `root` object; its
/// `children` array (missing or malformed means empty) becomes the top-level
/// block sequence.
pub fn document_from_value(value: &Value) -> Result<Document, RenderError> {
    let root = value.get("root").ok_or(RenderError::MissingRoot)?;
    let obj = root.as_object().ok_or(RenderError::MissingRoot)?;
    Ok(Document {
        children: children_of(obj),
    })
}

/// Decode a single node. Total: anything unrecognizable becomes `Unknown`.
pub fn node_from_value(value: &Value) -> DocumentNode {
    let Some(obj) = value.as_object() else {
        return DocumentNode::Unknown(UnknownNode::default());
    };

    let node_type = obj.get("type").and_then(Value::as_str).unwrap_or("");
    match node_type {
        "text" => DocumentNode::Text(TextNode {
            text: str_field(obj, "text").unwrap_or_default(),
            format: int_field(obj, "format").filter(|f| *f >= 0).unwrap_or(0) as u32,
            style: str_field(obj, "style").filter(|s| !s.trim().is_empty()),
        }),
        "paragraph" => DocumentNode::Paragraph(ParagraphNode {
            children: children_of(obj),
        }),
        "quote" => DocumentNode::Quote(QuoteNode {
            children: children_of(obj),
        }),
        "heading" => DocumentNode::Heading(HeadingNode {
            level: heading_level(obj),
            children: children_of(obj),
        }),
        "list" => DocumentNode::List(ListNode {
            ordered: str_field(obj, "listType").as_deref() == Some("number"),
            children: children_of(obj),
        }),
        "listitem" => DocumentNode::ListItem(ListItemNode {
            children: children_of(obj),
        }),
        // Autolinks carry the same attributes as authored links.
        "link" | "autolink" => DocumentNode::Link(LinkNode {
            url: str_field(obj, "url").unwrap_or_default(),
            target: str_field(obj, "target").filter(|t| !t.is_empty()),
            children: children_of(obj),
        }),
        "image" => DocumentNode::Image(ImageNode {
            src: str_field(obj, "src").unwrap_or_default(),
            alt_text: str_field(obj, "altText").unwrap_or_default(),
            width: int_field(obj, "width"),
            height: int_field(obj, "height"),
            max_width: int_field(obj, "maxWidth"),
        }),
        "linebreak" => DocumentNode::Linebreak,
        "horizontalrule" => DocumentNode::HorizontalRule,
        "code" => DocumentNode::Code(CodeNode {
            text: str_field(obj, "text").unwrap_or_default(),
        }),
        "codehighlight" => DocumentNode::CodeHighlight(CodeHighlightNode {
            text: str_field(obj, "text").unwrap_or_default(),
            language: str_field(obj, "language").filter(|l| !l.is_empty()),
        }),
        "table" => DocumentNode::Table(TableNode {
            children: children_of(obj),
        }),
        "tablerow" => DocumentNode::TableRow(TableRowNode {
            children: children_of(obj),
        }),
        "tablecell" => DocumentNode::TableCell(TableCellNode {
            header: truthy(obj.get("header")),
            children: children_of(obj),
        }),
        "youtube" => DocumentNode::Youtube(YoutubeNode {
            video_id: str_field(obj, "videoID").filter(|id| !id.is_empty()),
        }),
        "tweet" => DocumentNode::Tweet(TweetNode {
            id: str_field(obj, "id").filter(|id| !id.is_empty()),
        }),
        other => DocumentNode::Unknown(UnknownNode {
            node_type: other.to_string(),
            text: str_field(obj, "text"),
            children: children_of(obj),
        }),
    }
}

fn children_of(obj: &Map<String, Value>) -> Vec<DocumentNode> {
    obj.get("children")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(node_from_value).collect())
        .unwrap_or_default()
}

fn str_field(obj: &Map<String, Value>, name: &str) -> Option<String> {
    obj.get(name).and_then(Value::as_str).map(str::to_string)
}

fn int_field(obj: &Map<String, Value>, name: &str) -> Option<i64> {
    let value = obj.get(name)?;
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

/// Heading `tag` is one of `h1`..`h6`; anything else clamps to level 2.
fn heading_level(obj: &Map<String, Value>) -> u8 {
    match str_field(obj, "tag").as_deref() {
        Some("h1") => 1,
        Some("h2") | None => 2,
        Some("h3") => 3,
        Some("h4") => 4,
        Some("h5") => 5,
        Some("h6") => 6,
        Some(_) => 2,
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}
