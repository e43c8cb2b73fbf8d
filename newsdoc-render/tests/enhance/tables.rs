//! Table wrapping: one scroll wrapper per table, no matter how often the
//! pass runs.

use std::rc::Rc;

use newsdoc_render::enhance::{dom, loader::WidgetScriptLoader, ContentEnhancer, EnhanceOptions, Page};
use newsdoc_render::enhance::DEFAULT_TABLE_WRAPPER_CLASS;

fn enhancer() -> ContentEnhancer {
    ContentEnhancer::with_options(
        Rc::new(WidgetScriptLoader::new("https://example.com/widgets.js")),
        EnhanceOptions::default(),
    )
}

fn wrapper_count(page: &Page) -> usize {
    dom::descendant_elements(&page.document(), "div")
        .iter()
        .filter(|div| dom::has_class(div, DEFAULT_TABLE_WRAPPER_CLASS))
        .count()
}

#[test]
fn test_table_gets_wrapped() {
    let page = Page::new();
    let container = page.mount("<table><tr><td>1</td></tr></table>");
    enhancer().enhance(&container, "v1");

    assert_eq!(wrapper_count(&page), 1);
    let table = dom::descendant_elements(&container, "table").remove(0);
    let parent = dom::parent_of(&table).unwrap();
    assert!(dom::has_class(&parent, DEFAULT_TABLE_WRAPPER_CLASS));
}

#[test]
fn test_rewrapping_is_idempotent() {
    let page = Page::new();
    let container = page.mount("<table><tr><td>1</td></tr></table>");

    let first = enhancer();
    first.enhance(&container, "v1");
    // A second enhancer (fresh content key) re-walks the same fragment; the
    // parent-class check must keep it from nesting wrappers.
    let second = enhancer();
    second.enhance(&container, "v1");

    assert_eq!(wrapper_count(&page), 1);
}

#[test]
fn test_each_table_gets_its_own_wrapper() {
    let page = Page::new();
    let container = page.mount(
        "<table><tr><td>1</td></tr></table><p>between</p><table><tr><td>2</td></tr></table>",
    );
    enhancer().enhance(&container, "v1");

    assert_eq!(wrapper_count(&page), 2);
}

#[test]
fn test_custom_wrapper_class() {
    let page = Page::new();
    let container = page.mount("<table><tr><td>1</td></tr></table>");
    let enhancer = ContentEnhancer::with_options(
        Rc::new(WidgetScriptLoader::new("https://example.com/widgets.js")),
        EnhanceOptions {
            table_wrapper_class: "scroll-x".to_string(),
            ..EnhanceOptions::default()
        },
    );
    enhancer.enhance(&container, "v1");

    let table = dom::descendant_elements(&container, "table").remove(0);
    assert!(dom::has_class(&dom::parent_of(&table).unwrap(), "scroll-x"));
}
