//! Injection-safety tests: string leaves are user input, and none of them
//! may reach the output as live markup.

use newsdoc_render::html::text::format_text;
use newsdoc_render::render_document;
use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;

static RAW_IMG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<img\b").unwrap());

#[test]
fn test_text_content_cannot_smuggle_markup() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"paragraph","children":[
            {"type":"text","text":"<img src=x onerror=alert(1)>","format":0}
        ]}]}}"#,
    );
    assert!(!RAW_IMG_TAG.is_match(&html));
    assert_eq!(
        html,
        "<p>&lt;img src=x onerror=alert(1)&gt;</p>"
    );
}

#[test]
fn test_link_url_cannot_break_out_of_attribute() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"paragraph","children":[
            {"type":"link","url":"/x\" onmouseover=\"alert(1)","children":[
                {"type":"text","text":"x","format":0}
            ]}
        ]}]}}"#,
    );
    assert!(html.contains("href=\"/x&quot; onmouseover=&quot;alert(1)\""));
    assert!(!html.contains("onmouseover=\"alert"));
}

#[test]
fn test_text_style_cannot_break_out_of_attribute() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"paragraph","children":[
            {"type":"text","text":"x","format":0,"style":"color:red\" onclick=\"alert(1)"}
        ]}]}}"#,
    );
    assert!(html.contains("style=\"color:red&quot; onclick=&quot;alert(1)\""));
    assert!(!html.contains("onclick=\"alert"));
}

#[test]
fn test_formatted_hostile_text_stays_inert() {
    let html = format_text("</strong><script>", 1, None);
    assert_eq!(html, "<strong>&lt;/strong&gt;&lt;script&gt;</strong>");
}

proptest! {
    // Plain formatted text must never contain an unescaped special, whatever
    // the input string was.
    #[test]
    fn prop_formatted_text_has_no_raw_specials(text in ".*") {
        let html = format_text(&text, 0, None);
        prop_assert!(!html.contains('<'));
        prop_assert!(!html.contains('>'));
        prop_assert!(!html.contains('"'));
        prop_assert!(!html.contains('\''));
    }

    // The same mask always yields the same markup, and bold stays outermost
    // no matter which other bits ride along.
    #[test]
    fn prop_format_mask_is_deterministic(text in ".{0,40}", mask in 0u32..128) {
        let first = format_text(&text, mask, None);
        let second = format_text(&text, mask, None);
        prop_assert_eq!(&first, &second);
        if mask & 1 != 0 {
            prop_assert!(first.starts_with("<strong>"));
        }
    }

    #[test]
    fn prop_normalizer_is_idempotent(path in ".{0,80}") {
        use newsdoc_render::common::storage::normalize_media_src;
        let once = normalize_media_src(&path).into_owned();
        let twice = normalize_media_src(&once).into_owned();
        prop_assert_eq!(once, twice);
    }
}
