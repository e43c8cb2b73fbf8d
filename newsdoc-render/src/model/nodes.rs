//! Core data structures for the document tree.
//!
//! The taxonomy is open on the editor side: new node types appear without a
//! coordinated deploy. It is modeled here as a closed enum over the known
//! variants plus one explicit [`UnknownNode`] fallback carrying raw fields,
//! which keeps dispatch static while preserving forward compatibility.

/// One node of the editor-produced document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    Text(TextNode),
    Paragraph(ParagraphNode),
    Quote(QuoteNode),
    Heading(HeadingNode),
    List(ListNode),
    ListItem(ListItemNode),
    Link(LinkNode),
    Image(ImageNode),
    Linebreak,
    HorizontalRule,
    Code(CodeNode),
    CodeHighlight(CodeHighlightNode),
    Table(TableNode),
    TableRow(TableRowNode),
    TableCell(TableCellNode),
    Youtube(YoutubeNode),
    Tweet(TweetNode),
    Unknown(UnknownNode),
}

/// The root of a document: the ordered top-level block sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub children: Vec<DocumentNode>,
}

/// A text leaf with an inline formatting bitmask and optional inline CSS.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub format: u32,
    pub style: Option<String>,
}

/// A paragraph of inline content.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphNode {
    pub children: Vec<DocumentNode>,
}

/// A block quote.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteNode {
    pub children: Vec<DocumentNode>,
}

/// A heading. `level` is always in 1..=6.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingNode {
    pub level: u8,
    pub children: Vec<DocumentNode>,
}

/// An ordered or bullet list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListNode {
    pub ordered: bool,
    pub children: Vec<DocumentNode>,
}

/// An item in a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItemNode {
    pub children: Vec<DocumentNode>,
}

/// An anchor wrapping inline content.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkNode {
    pub url: String,
    pub target: Option<String>,
    pub children: Vec<DocumentNode>,
}

/// An image leaf.
///
/// `width`/`height` are the editor-measured intrinsic dimensions; they are
/// only emitted when both are present and positive. `max_width` narrows the
/// responsive style when it is at least 300px.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    pub src: String,
    pub alt_text: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub max_width: Option<i64>,
}

/// A plain code block.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeNode {
    pub text: String,
}

/// A code block with an optional language hint for client-side highlighting.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeHighlightNode {
    pub text: String,
    pub language: Option<String>,
}

/// A table; children are rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TableNode {
    pub children: Vec<DocumentNode>,
}

/// A table row; children are cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRowNode {
    pub children: Vec<DocumentNode>,
}

/// A table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCellNode {
    pub header: bool,
    pub children: Vec<DocumentNode>,
}

/// A YouTube embed leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct YoutubeNode {
    pub video_id: Option<String>,
}

/// A tweet embed leaf, hydrated at mount time by the widget loader.
#[derive(Debug, Clone, PartialEq)]
pub struct TweetNode {
    pub id: Option<String>,
}

/// Fallback for node types this build does not recognize.
///
/// Serialization flattens it to its children, then to its raw `text`, then to
/// nothing, so an unrecognized node degrades to plain content instead of
/// breaking the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnknownNode {
    pub node_type: String,
    pub text: Option<String>,
    pub children: Vec<DocumentNode>,
}
