//! Error types for document rendering

use std::fmt;

/// Errors that can occur while decoding an editor document.
///
/// The rendering path itself never surfaces these: [`crate::render_document`]
/// absorbs them and returns an empty string so a bad payload cannot fail a
/// page render. They are only visible through the explicit parsing API
/// ([`crate::model::Document::from_json`]).
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The payload was not valid JSON
    InvalidJson(String),
    /// The payload had no `root` object
    MissingRoot,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidJson(msg) => write!(f, "Invalid document JSON: {msg}"),
            RenderError::MissingRoot => write!(f, "Document has no root node"),
        }
    }
}

impl std::error::Error for RenderError {}
