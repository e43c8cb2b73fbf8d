//! HTML serialization (document tree → HTML string)

pub mod embeds;
pub mod serializer;
pub mod text;

pub use serializer::{
    render_document, render_document_with, render_node, render_node_with, render_tree,
    render_tree_with,
};

/// Default embed base for YouTube videos (privacy-enhanced host).
pub const DEFAULT_YOUTUBE_EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed/";

/// Default status URL base for tweet placeholders.
pub const DEFAULT_TWEET_STATUS_BASE: &str = "https://twitter.com/i/status/";

/// Options for HTML serialization.
///
/// The defaults match production; overrides normally come from
/// `newsdoc-config` rather than being built by hand.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Base URL the YouTube iframe `src` is built from.
    pub youtube_embed_base: String,
    /// Base URL tweet placeholders link to.
    pub tweet_status_base: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            youtube_embed_base: DEFAULT_YOUTUBE_EMBED_BASE.to_string(),
            tweet_status_base: DEFAULT_TWEET_STATUS_BASE.to_string(),
        }
    }
}
