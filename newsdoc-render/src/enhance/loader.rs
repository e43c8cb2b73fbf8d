//! Single-flight loading of the third-party widget script.
//!
//! Tweet placeholders need one external script to upgrade into real embeds.
//! Any number of content blocks can mount concurrently and each will ask for
//! hydration; the page must still end up with exactly one script tag, and a
//! block that mounts after the script finished loading must still get its
//! embeds hydrated. The loader owns that coordination behind an explicit
//! `Idle -> Loading -> Loaded` lifecycle.
//!
//! Script-load failure is not retried. Affected placeholders simply stay
//! unhydrated block-quotes, which is acceptable for supplementary content.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use markup5ever_rcdom::Handle;
use tracing::debug;

use crate::enhance::dom;

/// The widget script requested for tweet hydration.
pub const DEFAULT_WIDGET_SCRIPT_URL: &str = "https://platform.twitter.com/widgets.js";

/// Marker attribute on the injected script tag.
pub const WIDGET_SCRIPT_ATTR: &str = "data-newsdoc-widget-script";

/// Marker attribute set on a placeholder once it has been handed to the
/// widget library's hydration entry point.
pub const HYDRATED_ATTR: &str = "data-newsdoc-hydrated";

/// Class the serializer puts on tweet placeholders.
pub const TWEET_PLACEHOLDER_CLASS: &str = "twitter-tweet";

/// Lifecycle of the widget script within a page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptPhase {
    /// No one has needed the script yet.
    Idle,
    /// The script tag is in the document, load callback not fired yet.
    Loading,
    /// The script loaded; hydration can run immediately.
    Loaded,
}

/// Registration handle for a container awaiting hydration. Cancelling it
/// (enhancer teardown) keeps the load callback from touching an unmounted
/// container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrationTicket(u64);

/// Process-wide coordinator for the widget script.
///
/// Both pipeline halves are single-threaded, so "process-wide" is a
/// thread-local shared instance ([`WidgetScriptLoader::shared`]); tests build
/// their own instances to get resettable state.
pub struct WidgetScriptLoader {
    script_url: String,
    phase: Cell<ScriptPhase>,
    next_ticket: Cell<u64>,
    pending: RefCell<Vec<(u64, Handle)>>,
}

thread_local! {
    static SHARED: Rc<WidgetScriptLoader> =
        Rc::new(WidgetScriptLoader::new(DEFAULT_WIDGET_SCRIPT_URL));
}

impl WidgetScriptLoader {
    pub fn new(script_url: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
            phase: Cell::new(ScriptPhase::Idle),
            next_ticket: Cell::new(0),
            pending: RefCell::new(Vec::new()),
        }
    }

    /// The shared per-page-session instance.
    pub fn shared() -> Rc<Self> {
        SHARED.with(Rc::clone)
    }

    pub fn phase(&self) -> ScriptPhase {
        self.phase.get()
    }

    pub fn script_url(&self) -> &str {
        &self.script_url
    }

    /// Ask for the container's embed placeholders to be hydrated.
    ///
    /// Already loaded: hydrates immediately, no ticket. Otherwise the
    /// container is registered for the load callback, and on the first
    /// request the script tag is injected into the owning document — unless
    /// an equivalent tag is already present there. A detached container is a
    /// no-op.
    pub fn request_hydration(&self, container: &Handle) -> Option<HydrationTicket> {
        match self.phase.get() {
            ScriptPhase::Loaded => {
                hydrate_embeds(container);
                None
            }
            ScriptPhase::Loading => Some(self.register(container)),
            ScriptPhase::Idle => {
                let document = dom::owning_document(container)?;
                if find_widget_script(&document, &self.script_url).is_none() {
                    self.inject_script(&document);
                }
                self.phase.set(ScriptPhase::Loading);
                Some(self.register(container))
            }
        }
    }

    /// The host's script `load` callback: mark loaded and hydrate every
    /// still-registered container that is still attached.
    pub fn notify_loaded(&self) {
        self.phase.set(ScriptPhase::Loaded);
        let pending: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for (_, container) in pending {
            if dom::owning_document(&container).is_some() {
                hydrate_embeds(&container);
            }
        }
    }

    /// Drop a pending registration.
    pub fn cancel(&self, ticket: HydrationTicket) {
        self.pending.borrow_mut().retain(|(id, _)| *id != ticket.0);
    }

    /// Forget all state. Test hook; a real page session never goes back from
    /// `Loaded`.
    pub fn reset(&self) {
        self.phase.set(ScriptPhase::Idle);
        self.pending.borrow_mut().clear();
    }

    fn register(&self, container: &Handle) -> HydrationTicket {
        let id = self.next_ticket.get();
        self.next_ticket.set(id + 1);
        self.pending.borrow_mut().push((id, container.clone()));
        HydrationTicket(id)
    }

    fn inject_script(&self, document: &Handle) {
        let script = dom::create_element(
            "script",
            vec![
                ("src", self.script_url.as_str()),
                ("async", ""),
                (WIDGET_SCRIPT_ATTR, ""),
            ],
        );
        let target = dom::first_descendant_element(document, "head")
            .or_else(|| dom::first_descendant_element(document, "body"))
            .unwrap_or_else(|| document.clone());
        dom::append_child(&target, &script);
        debug!(url = %self.script_url, "injected widget script tag");
    }
}

/// The page's existing widget script tag, if any. Matches either the loader's
/// marker attribute or the script URL itself, so a tag present in the initial
/// markup also counts.
pub fn find_widget_script(document: &Handle, url: &str) -> Option<Handle> {
    dom::descendant_elements(document, "script")
        .into_iter()
        .find(|script| {
            dom::has_attr(script, WIDGET_SCRIPT_ATTR)
                || dom::get_attr(script, "src").as_deref() == Some(url)
        })
}

/// Whether the container holds at least one placeholder awaiting hydration.
pub fn has_unhydrated_embeds(container: &Handle) -> bool {
    dom::descendant_elements(container, "blockquote")
        .iter()
        .any(|quote| {
            dom::has_class(quote, TWEET_PLACEHOLDER_CLASS) && !dom::has_attr(quote, HYDRATED_ATTR)
        })
}

/// Hand every unhydrated placeholder in the container to the widget library,
/// recording that in the tree. Idempotent per placeholder.
pub fn hydrate_embeds(container: &Handle) {
    for quote in dom::descendant_elements(container, "blockquote") {
        if dom::has_class(&quote, TWEET_PLACEHOLDER_CLASS) && !dom::has_attr(&quote, HYDRATED_ATTR)
        {
            dom::set_attr(&quote, HYDRATED_ATTR, "true");
        }
    }
}
