//! Export tests for the HTML serializer (document JSON → HTML)
//!
//! These verify the per-type wrapping rules and the graceful-degradation
//! contract: bad payloads and unknown nodes must never fail a render.

use insta::assert_snapshot;
use newsdoc_render::render_document;

#[test]
fn test_paragraph_with_formatted_text() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"paragraph","children":[{"type":"text","text":"Hello","format":1}]}]}}"#,
    );
    assert_eq!(html, "<p><strong>Hello</strong></p>");
}

#[test]
fn test_heading_levels() {
    let html = render_document(
        r#"{"root":{"children":[
            {"type":"heading","tag":"h2","children":[{"type":"text","text":"Section","format":0}]},
            {"type":"heading","tag":"h3","children":[{"type":"text","text":"Sub","format":0}]}
        ]}}"#,
    );
    assert_eq!(html, "<h2>Section</h2><h3>Sub</h3>");
}

#[test]
fn test_heading_with_bad_tag_clamps() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"heading","tag":"div","children":[{"type":"text","text":"X","format":0}]}]}}"#,
    );
    assert_eq!(html, "<h2>X</h2>");
}

#[test]
fn test_bullet_list() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"list","listType":"bullet","children":[
            {"type":"listitem","children":[{"type":"text","text":"One","format":0}]},
            {"type":"listitem","children":[{"type":"text","text":"Two","format":0}]}
        ]}]}}"#,
    );
    assert_eq!(html, "<ul><li>One</li><li>Two</li></ul>");
}

#[test]
fn test_numbered_list() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"list","listType":"number","children":[
            {"type":"listitem","children":[{"type":"text","text":"First","format":0}]}
        ]}]}}"#,
    );
    assert_eq!(html, "<ol><li>First</li></ol>");
}

#[test]
fn test_quote() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"quote","children":[{"type":"text","text":"Said","format":0}]}]}}"#,
    );
    assert_eq!(html, "<blockquote>Said</blockquote>");
}

#[test]
fn test_link_with_target() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"paragraph","children":[
            {"type":"link","url":"https://example.com","target":"_blank","children":[
                {"type":"text","text":"here","format":0}
            ]}
        ]}]}}"#,
    );
    assert_eq!(
        html,
        "<p><a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">here</a></p>"
    );
}

#[test]
fn test_linebreak_and_rule() {
    let html = render_document(
        r#"{"root":{"children":[
            {"type":"paragraph","children":[
                {"type":"text","text":"a","format":0},
                {"type":"linebreak"},
                {"type":"text","text":"b","format":0}
            ]},
            {"type":"horizontalrule"}
        ]}}"#,
    );
    assert_eq!(html, "<p>a<br>b</p><hr>");
}

#[test]
fn test_code_block() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"code","text":"let x = 1 < 2;"}]}}"#,
    );
    assert_eq!(html, "<pre><code>let x = 1 &lt; 2;</code></pre>");
}

#[test]
fn test_code_highlight_block() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"codehighlight","text":"fn main() {}","language":"rust"}]}}"#,
    );
    assert_eq!(
        html,
        "<pre><code class=\"language-rust\">fn main() {}</code></pre>"
    );
}

#[test]
fn test_code_highlight_without_language() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"codehighlight","text":"plain"}]}}"#,
    );
    assert_eq!(html, "<pre><code>plain</code></pre>");
}

#[test]
fn test_table_is_structural_with_no_wrapper() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"table","children":[
            {"type":"tablerow","children":[
                {"type":"tablecell","header":true,"children":[{"type":"text","text":"H","format":0}]}
            ]},
            {"type":"tablerow","children":[
                {"type":"tablecell","children":[{"type":"text","text":"C","format":0}]}
            ]}
        ]}]}}"#,
    );
    assert_eq!(html, "<table><tr><th>H</th></tr><tr><td>C</td></tr></table>");
}

#[test]
fn test_unknown_node_flattens_to_children() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"customWidget","children":[{"type":"text","text":"x","format":0}]}]}}"#,
    );
    assert_eq!(html, "x");
}

#[test]
fn test_unknown_node_falls_back_to_text() {
    let html = render_document(
        r#"{"root":{"children":[{"type":"customWidget","text":"<raw>"}]}}"#,
    );
    assert_eq!(html, "&lt;raw&gt;");
}

#[test]
fn test_unknown_node_without_content_is_empty() {
    let html = render_document(r#"{"root":{"children":[{"type":"customWidget"}]}}"#);
    assert_eq!(html, "");
}

#[test]
fn test_bad_payloads_render_empty() {
    assert_eq!(render_document(""), "");
    assert_eq!(render_document("{"), "");
    assert_eq!(render_document("[1,2,3]"), "");
    assert_eq!(render_document(r#"{"root":null}"#), "");
    assert_eq!(render_document(r#"{"notroot":{}}"#), "");
}

#[test]
fn test_kitchen_sink() {
    let html = render_document(
        r#"{"root":{"children":[
            {"type":"heading","tag":"h2","children":[{"type":"text","text":"Title","format":0}]},
            {"type":"paragraph","children":[
                {"type":"text","text":"Hello ","format":0},
                {"type":"text","text":"world","format":3}
            ]},
            {"type":"list","listType":"bullet","children":[
                {"type":"listitem","children":[{"type":"text","text":"One","format":0}]},
                {"type":"listitem","children":[{"type":"text","text":"Two","format":16}]}
            ]},
            {"type":"quote","children":[{"type":"text","text":"Said","format":0}]},
            {"type":"horizontalrule"}
        ]}}"#,
    );
    assert_snapshot!(html, @"<h2>Title</h2><p>Hello <strong><em>world</em></strong></p><ul><li>One</li><li><code>Two</code></li></ul><blockquote>Said</blockquote><hr>");
}
