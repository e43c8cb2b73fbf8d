//! Markup shells for third-party embeds.
//!
//! Serialization emits plain placeholder markup only; no external script is
//! referenced here. Tweet placeholders are hydrated later by the content
//! enhancer's widget loader, video iframes are self-sufficient.

use crate::common::escape::escape_html;
use crate::html::RenderOptions;
use crate::model::{TweetNode, YoutubeNode};

/// 16:9 padding-box wrapper with a privacy-enhanced, lazy-loaded iframe.
/// A missing video id yields nothing.
pub fn youtube_markup(node: &YoutubeNode, options: &RenderOptions) -> String {
    let Some(id) = node.video_id.as_deref() else {
        return String::new();
    };
    format!(
        concat!(
            "<div class=\"newsdoc-embed-video\" style=\"position:relative;",
            "padding-bottom:56.25%;height:0;overflow:hidden;max-width:100%\">",
            "<iframe src=\"{base}{id}\" ",
            "style=\"position:absolute;top:0;left:0;width:100%;height:100%\" ",
            "title=\"YouTube video\" frameborder=\"0\" ",
            "allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; ",
            "gyroscope; picture-in-picture\" allowfullscreen=\"\" loading=\"lazy\">",
            "</iframe></div>"
        ),
        base = escape_html(&options.youtube_embed_base),
        id = escape_html(id),
    )
}

/// Placeholder block-quote the widget script upgrades in the browser.
/// A missing tweet id yields nothing.
pub fn tweet_markup(node: &TweetNode, options: &RenderOptions) -> String {
    let Some(id) = node.id.as_deref() else {
        return String::new();
    };
    format!(
        "<blockquote class=\"twitter-tweet\" data-tweet-id=\"{id}\"><a href=\"{base}{id}\"></a></blockquote>",
        base = escape_html(&options.tweet_status_base),
        id = escape_html(id),
    )
}
