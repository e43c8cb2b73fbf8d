//! The runtime content pass over mounted serializer output.
//!
//! The hosting page runs a [`ContentEnhancer`] once the rendered HTML is in
//! the DOM, and again only when the mounted content itself changes — the
//! enhancer keys on a content identity string the way a UI effect keys on its
//! dependencies, and [`ContentEnhancer::teardown`] is the cleanup half. The
//! pass itself is idempotent regardless: every element it touches is marked
//! or structurally recognizable, so running it twice never duplicates work.
//!
//! Nothing in the pass is allowed to fail. Detached elements are skipped,
//! missing pieces degrade to no-ops.

pub mod dom;
pub mod loader;
pub mod page;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use markup5ever_rcdom::Handle;

use crate::enhance::loader::HydrationTicket;

pub use loader::{ScriptPhase, WidgetScriptLoader};
pub use page::Page;

/// Marker attribute on elements the enhancer already processed.
pub const PROCESSED_ATTR: &str = "data-newsdoc-processed";

/// Class of the scroll wrapper inserted around tables.
pub const DEFAULT_TABLE_WRAPPER_CLASS: &str = "newsdoc-table-wrap";

/// Class of the inline placeholder swapped in for a broken image.
pub const IMAGE_FALLBACK_CLASS: &str = "newsdoc-image-fallback";

/// Text shown inside the broken-image placeholder.
pub const DEFAULT_IMAGE_FALLBACK_TEXT: &str = "Image unavailable";

/// Options for the enhancer pass.
///
/// The widget script URL is not here: it belongs to the
/// [`WidgetScriptLoader`] the enhancer is constructed with.
#[derive(Debug, Clone)]
pub struct EnhanceOptions {
    pub table_wrapper_class: String,
    pub image_fallback_text: String,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            table_wrapper_class: DEFAULT_TABLE_WRAPPER_CLASS.to_string(),
            image_fallback_text: DEFAULT_IMAGE_FALLBACK_TEXT.to_string(),
        }
    }
}

/// Runs the per-mount fixups over a content container.
pub struct ContentEnhancer {
    options: EnhanceOptions,
    loader: Rc<WidgetScriptLoader>,
    content_key: RefCell<Option<String>>,
    pending: Cell<Option<HydrationTicket>>,
}

impl ContentEnhancer {
    /// An enhancer on the shared widget loader with default options.
    pub fn new() -> Self {
        Self::with_options(WidgetScriptLoader::shared(), EnhanceOptions::default())
    }

    pub fn with_options(loader: Rc<WidgetScriptLoader>, options: EnhanceOptions) -> Self {
        Self {
            options,
            loader,
            content_key: RefCell::new(None),
            pending: Cell::new(None),
        }
    }

    pub fn loader(&self) -> &Rc<WidgetScriptLoader> {
        &self.loader
    }

    /// Run the pass over a mounted container.
    ///
    /// `content_key` identifies the mounted content version (a document id
    /// plus revision works). When it matches the previous call this is a
    /// no-op; when it changes, any hydration registration left by the
    /// previous content is cancelled before the new pass runs.
    pub fn enhance(&self, container: &Handle, content_key: &str) {
        if self.content_key.borrow().as_deref() == Some(content_key) {
            return;
        }
        if let Some(ticket) = self.pending.take() {
            self.loader.cancel(ticket);
        }
        *self.content_key.borrow_mut() = Some(content_key.to_string());

        self.fix_images(container);
        self.wrap_tables(container);
        self.bootstrap_embeds(container);
    }

    /// Cleanup half of the mount/update lifecycle: cancels any pending
    /// hydration registration so the script-load callback cannot touch an
    /// unmounted container.
    pub fn teardown(&self) {
        if let Some(ticket) = self.pending.take() {
            self.loader.cancel(ticket);
        }
        self.content_key.borrow_mut().take();
    }

    /// Load-error path for an image the pass processed. Swaps the broken
    /// image for an inline placeholder, exactly once; an already-detached
    /// image is left alone.
    pub fn on_image_error(&self, img: &Handle) {
        let Some(parent) = dom::parent_of(img) else {
            return;
        };
        let placeholder = dom::create_element("span", vec![("class", IMAGE_FALLBACK_CLASS)]);
        dom::append_child(&placeholder, &dom::create_text(&self.options.image_fallback_text));
        dom::replace_child(&parent, img, &placeholder);
    }

    fn fix_images(&self, container: &Handle) {
        for img in dom::descendant_elements(container, "img") {
            if dom::has_attr(&img, PROCESSED_ATTR) {
                continue;
            }
            dom::set_attr(&img, PROCESSED_ATTR, "true");
            dom::set_attr(&img, "loading", "lazy");
            let style = dom::get_attr(&img, "style").unwrap_or_default();
            dom::set_attr(
                &img,
                "style",
                &merge_style(&style, &[("height", "auto"), ("max-width", "100%")]),
            );
        }
    }

    fn wrap_tables(&self, container: &Handle) {
        for table in dom::descendant_elements(container, "table") {
            let Some(parent) = dom::parent_of(&table) else {
                continue;
            };
            if dom::has_class(&parent, &self.options.table_wrapper_class) {
                continue;
            }
            let wrapper = dom::create_element(
                "div",
                vec![("class", self.options.table_wrapper_class.as_str())],
            );
            dom::wrap_element(&table, &wrapper);
        }
    }

    fn bootstrap_embeds(&self, container: &Handle) {
        if loader::has_unhydrated_embeds(container) {
            self.pending.set(self.loader.request_hydration(container));
        }
    }
}

impl Default for ContentEnhancer {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge forced declarations into an inline style string, overriding matching
/// properties and keeping the rest untouched.
fn merge_style(existing: &str, forced: &[(&str, &str)]) -> String {
    let mut declarations: Vec<(String, String)> = Vec::new();
    for piece in existing.split(';') {
        let Some((prop, value)) = piece.split_once(':') else {
            continue;
        };
        let (prop, value) = (prop.trim(), value.trim());
        if prop.is_empty() || value.is_empty() {
            continue;
        }
        declarations.push((prop.to_string(), value.to_string()));
    }
    for (prop, value) in forced {
        match declarations
            .iter_mut()
            .find(|(existing_prop, _)| existing_prop.eq_ignore_ascii_case(prop))
        {
            Some(declaration) => declaration.1 = value.to_string(),
            None => declarations.push((prop.to_string(), value.to_string())),
        }
    }
    declarations
        .iter()
        .map(|(prop, value)| format!("{prop}:{value}"))
        .collect::<Vec<_>>()
        .join(";")
}
