//! rcdom element helpers for the content enhancer.
//!
//! Parent links are maintained on every mutation here so the enhancer's
//! existence checks (detached element, already-wrapped table) stay reliable
//! across repeated passes.

use html5ever::tendril::TendrilSink;
use html5ever::{
    ns, parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute,
    LocalName, ParseOpts, QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Parse an HTML string into an rcdom tree. Never fails: unparseable input
/// degrades to an empty document.
pub fn parse_html(html: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .unwrap_or_default()
}

/// Create an HTML element with attributes.
pub fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node.
pub fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Append `child` to `parent`, keeping the parent link consistent.
pub fn append_child(parent: &Handle, child: &Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child.clone());
}

/// The node's parent, if it is still attached.
pub fn parent_of(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(|w| w.upgrade());
    node.parent.set(weak);
    parent
}

/// Walk parent links up to the document node. `None` means the node sits in a
/// detached subtree.
pub fn owning_document(node: &Handle) -> Option<Handle> {
    let mut current = node.clone();
    loop {
        if matches!(current.data, NodeData::Document) {
            return Some(current);
        }
        current = parent_of(&current)?;
    }
}

/// Whether the node is an element with the given tag name.
pub fn is_element(node: &Handle, tag: &str) -> bool {
    match &node.data {
        NodeData::Element { name, .. } => name.local.as_ref() == tag,
        _ => false,
    }
}

/// Read an attribute value.
pub fn get_attr(node: &Handle, name: &str) -> Option<String> {
    let NodeData::Element { attrs, .. } = &node.data else {
        return None;
    };
    attrs
        .borrow()
        .iter()
        .find(|a| a.name.local.as_ref() == name)
        .map(|a| a.value.to_string())
}

/// Whether the attribute is present, regardless of value.
pub fn has_attr(node: &Handle, name: &str) -> bool {
    get_attr(node, name).is_some()
}

/// Set an attribute, replacing any existing value.
pub fn set_attr(node: &Handle, name: &str, value: &str) {
    let NodeData::Element { attrs, .. } = &node.data else {
        return;
    };
    let mut attrs = attrs.borrow_mut();
    if let Some(existing) = attrs.iter_mut().find(|a| a.name.local.as_ref() == name) {
        existing.value = value.to_string().into();
        return;
    }
    attrs.push(Attribute {
        name: QualName::new(None, ns!(), LocalName::from(name)),
        value: value.to_string().into(),
    });
}

/// Whether the element's `class` attribute contains the given class token.
pub fn has_class(node: &Handle, class: &str) -> bool {
    get_attr(node, "class")
        .map(|value| value.split_whitespace().any(|token| token == class))
        .unwrap_or(false)
}

/// All descendant elements with the given tag, in document order.
pub fn descendant_elements(root: &Handle, tag: &str) -> Vec<Handle> {
    let mut found = Vec::new();
    collect_elements(root, tag, &mut found);
    found
}

/// First descendant element with the given tag, in document order.
pub fn first_descendant_element(root: &Handle, tag: &str) -> Option<Handle> {
    for child in root.children.borrow().iter() {
        if is_element(child, tag) {
            return Some(child.clone());
        }
        if let Some(found) = first_descendant_element(child, tag) {
            return Some(found);
        }
    }
    None
}

fn collect_elements(node: &Handle, tag: &str, found: &mut Vec<Handle>) {
    for child in node.children.borrow().iter() {
        if is_element(child, tag) {
            found.push(child.clone());
        }
        collect_elements(child, tag, found);
    }
}

/// Insert `wrapper` at `target`'s position and move `target` inside it.
/// Returns false (and does nothing) when `target` is detached or not found
/// under its recorded parent.
pub fn wrap_element(target: &Handle, wrapper: &Handle) -> bool {
    let Some(parent) = parent_of(target) else {
        return false;
    };
    {
        let mut children = parent.children.borrow_mut();
        let Some(index) = children.iter().position(|c| Rc::ptr_eq(c, target)) else {
            return false;
        };
        children[index] = wrapper.clone();
    }
    wrapper.parent.set(Some(Rc::downgrade(&parent)));
    wrapper.children.borrow_mut().push(target.clone());
    target.parent.set(Some(Rc::downgrade(wrapper)));
    true
}

/// Replace `old` with `new` under `parent`. `old` ends up detached.
pub fn replace_child(parent: &Handle, old: &Handle, new: &Handle) -> bool {
    {
        let mut children = parent.children.borrow_mut();
        let Some(index) = children.iter().position(|c| Rc::ptr_eq(c, old)) else {
            return false;
        };
        children[index] = new.clone();
    }
    new.parent.set(Some(Rc::downgrade(parent)));
    old.parent.set(None);
    true
}

/// Serialize the node's children to an HTML string.
pub fn inner_html(node: &Handle) -> String {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    for child in node.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        if serialize(&mut output, &serializable, opts.clone()).is_err() {
            return String::new();
        }
    }
    String::from_utf8(output).unwrap_or_default()
}
