//! Shared configuration loader for the newsdoc rendering pipeline.
//!
//! `defaults/newsdoc.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer deployment-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`NewsdocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use newsdoc_render::enhance::EnhanceOptions;
use newsdoc_render::html::RenderOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/newsdoc.default.toml");

/// Top-level configuration consumed by newsdoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsdocConfig {
    pub render: RenderConfig,
    pub enhance: EnhanceConfig,
}

/// Mirrors the knobs exposed by the HTML serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub youtube_embed_base: String,
    pub tweet_status_base: String,
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions {
            youtube_embed_base: config.youtube_embed_base,
            tweet_status_base: config.tweet_status_base,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            youtube_embed_base: config.youtube_embed_base.clone(),
            tweet_status_base: config.tweet_status_base.clone(),
        }
    }
}

/// Mirrors the knobs exposed by the content enhancer. The widget script URL
/// is consumed separately when constructing the page's
/// [`newsdoc_render::enhance::loader::WidgetScriptLoader`].
#[derive(Debug, Clone, Deserialize)]
pub struct EnhanceConfig {
    pub table_wrapper_class: String,
    pub image_fallback_text: String,
    pub widget_script_url: String,
}

impl From<EnhanceConfig> for EnhanceOptions {
    fn from(config: EnhanceConfig) -> Self {
        EnhanceOptions {
            table_wrapper_class: config.table_wrapper_class,
            image_fallback_text: config.image_fallback_text,
        }
    }
}

impl From<&EnhanceConfig> for EnhanceOptions {
    fn from(config: &EnhanceConfig) -> Self {
        EnhanceOptions {
            table_wrapper_class: config.table_wrapper_class.clone(),
            image_fallback_text: config.image_fallback_text.clone(),
        }
    }
}

/// Helper for layering deployment overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for per-tenant settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NewsdocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NewsdocConfig, ConfigError> {
    Loader::new().build()
}
