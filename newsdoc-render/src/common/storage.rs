//! Media URL canonicalization.
//!
//! The media subsystem has historically stored both relative and absolute
//! references to locally uploaded files. Normalization happens once, at
//! serialization time, so every consumer of the HTML sees one canonical form.

use std::borrow::Cow;
use url::Url;

/// Canonical route prefix for locally stored media.
pub const STORAGE_ROUTE: &str = "/storage/";

/// Legacy relative form of [`STORAGE_ROUTE`], rewritten on sight.
pub const STORAGE_RELATIVE_ROUTE: &str = "./storage/";

/// Canonicalize a media source URL.
///
/// `./storage/...` rewrites to `/storage/...`. Absolute URLs (anything the
/// `url` crate parses, i.e. anything with a scheme) and all other paths pass
/// through unchanged. The function is idempotent.
pub fn normalize_media_src(src: &str) -> Cow<'_, str> {
    if Url::parse(src).is_ok() {
        return Cow::Borrowed(src);
    }
    if let Some(rest) = src.strip_prefix(STORAGE_RELATIVE_ROUTE) {
        let mut canonical = String::with_capacity(STORAGE_ROUTE.len() + rest.len());
        canonical.push_str(STORAGE_ROUTE);
        canonical.push_str(rest);
        return Cow::Owned(canonical);
    }
    Cow::Borrowed(src)
}
