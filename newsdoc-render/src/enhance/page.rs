//! Mounted-page model for the enhancer.
//!
//! The enhancer's subject in production is a browser DOM fragment that the
//! hosting page filled with serializer output. Here the page is an rcdom
//! tree: [`Page::mount`] plays the role of the host injecting HTML into a
//! container element, and the enhancer then mutates that container in place.

use markup5ever_rcdom::{Handle, RcDom};

use crate::enhance::dom;

/// Class carried by every mounted content container.
pub const CONTENT_CONTAINER_CLASS: &str = "newsdoc-content";

/// One page-level DOM that content fragments mount into.
pub struct Page {
    dom: RcDom,
}

impl Page {
    /// An empty page with the usual head/body skeleton.
    pub fn new() -> Self {
        Self::from_html("<!DOCTYPE html><html><head></head><body></body></html>")
    }

    /// A page parsed from existing markup.
    pub fn from_html(html: &str) -> Self {
        Self {
            dom: dom::parse_html(html),
        }
    }

    /// The document node.
    pub fn document(&self) -> Handle {
        self.dom.document.clone()
    }

    /// The body element, when the parse produced one.
    pub fn body(&self) -> Option<Handle> {
        dom::first_descendant_element(&self.dom.document, "body")
    }

    /// Mount a rendered HTML fragment under the body inside a fresh container
    /// element, returning the container.
    pub fn mount(&self, html: &str) -> Handle {
        let container = dom::create_element("div", vec![("class", CONTENT_CONTAINER_CLASS)]);

        let fragment = dom::parse_html(html);
        if let Some(fragment_body) = dom::first_descendant_element(&fragment.document, "body") {
            let children: Vec<Handle> = fragment_body.children.borrow_mut().drain(..).collect();
            for child in children {
                dom::append_child(&container, &child);
            }
        }

        match self.body() {
            Some(body) => dom::append_child(&body, &container),
            None => dom::append_child(&self.document(), &container),
        }
        container
    }

    /// Serialize the whole page back to HTML.
    pub fn to_html(&self) -> String {
        dom::inner_html(&self.dom.document)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
