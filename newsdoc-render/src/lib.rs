//! Rich-document rendering for the newsdoc publishing stack
//!
//!     This crate turns editor-produced document trees (an arbitrarily nested,
//!     JSON-encoded node taxonomy) into safe HTML for public article pages, and
//!     provides the companion runtime pass that makes that HTML behave once it
//!     is mounted: lazy images, broken-image recovery, responsive tables, and
//!     third-party embed hydration.
//!
//!     TLDR for integrators:
//!         - Call [`render_document`] with the raw editor JSON; you get back a
//!           single HTML string safe to inject as page content, or `""` when the
//!           payload is unusable. Rendering never fails a page.
//!         - After the HTML is mounted, run a [`ContentEnhancer`] over the
//!           mounted container once per content version. The pass is idempotent;
//!           re-running it on unchanged content is a guaranteed no-op.
//!         - The enhancer coordinates the external widget script through
//!           [`WidgetScriptLoader`], which injects at most one script tag per
//!           page no matter how many content blocks request it.
//!
//! Architecture
//!
//!     The serializer half is a pure function over the node model: dispatch by
//!     node type, serialize children in order, wrap per type. Unknown node
//!     types degrade to their children (or raw text) instead of breaking the
//!     page, which is what keeps the taxonomy open: a future editor node
//!     renders as plain content on old deployments.
//!
//!     The enhancer half operates on a DOM tree (html5ever / rcdom). Every
//!     mutation is guarded by a per-element processed marker or a structural
//!     check, so the pass can run any number of times without duplicating
//!     work, and every step tolerates detached nodes.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # RenderError
//!     ├── common
//!     │   ├── escape.rs           # the single HTML escaper
//!     │   └── storage.rs          # media URL canonicalization
//!     ├── model
//!     │   ├── nodes.rs            # the document node taxonomy
//!     │   └── from_json.rs        # graceful JSON -> tree decoding
//!     ├── html
//!     │   ├── serializer.rs       # tree -> HTML string
//!     │   ├── text.rs             # inline formatting bitmask
//!     │   └── embeds.rs           # youtube / tweet markup shells
//!     └── enhance
//!         ├── dom.rs              # rcdom element helpers
//!         ├── page.rs             # mounted page / fragment model
//!         ├── loader.rs           # single-flight widget script loader
//!         └── mod.rs              # the enhancer pass itself
//!
//! Trust model
//!
//!     The tree comes from our own editor, so the *structure* is trusted; the
//!     string leaves are arbitrary user input and every one of them (text,
//!     urls, alt text, inline styles) goes through the escaper in
//!     common/escape.rs before it reaches the output. This is not a general
//!     HTML sanitizer: a hostile tree shape is out of scope, hostile text
//!     content is not.

pub mod common;
pub mod enhance;
pub mod error;
pub mod html;
pub mod model;

pub use enhance::{ContentEnhancer, EnhanceOptions, Page, WidgetScriptLoader};
pub use error::RenderError;
pub use html::{render_document, render_document_with, render_node, render_tree, RenderOptions};
pub use model::{Document, DocumentNode};
