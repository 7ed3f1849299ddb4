//! Shared configuration loader for the leafmark toolchain.
//!
//! `defaults/leafmark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`LeafmarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use leafmark::document::{DocumentOptions, InvalidBlockPolicy};
use leafmark::inline::{DelimiterRule, InlineRules};
use leafmark::SpanKind;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/leafmark.default.toml");

/// Top-level configuration consumed by leafmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct LeafmarkConfig {
    #[serde(default)]
    pub inline: InlineConfig,
    pub document: DocumentConfig,
    pub logging: LoggingConfig,
}

/// Delimiter passes for the inline pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct InlineConfig {
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<DelimiterConfig>,
}

impl Default for InlineConfig {
    fn default() -> Self {
        InlineConfig {
            delimiters: default_delimiters(),
        }
    }
}

fn default_delimiters() -> Vec<DelimiterConfig> {
    [
        ("`", DelimiterStyle::Code),
        ("**", DelimiterStyle::Bold),
        ("_", DelimiterStyle::Italic),
    ]
    .into_iter()
    .map(|(delimiter, style)| DelimiterConfig {
        delimiter: delimiter.to_string(),
        style,
    })
    .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DelimiterConfig {
    pub delimiter: String,
    pub style: DelimiterStyle,
}

/// Styles a delimiter can produce. Links and images have their own syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterStyle {
    Code,
    Bold,
    Italic,
}

impl From<DelimiterStyle> for SpanKind {
    fn from(style: DelimiterStyle) -> Self {
        match style {
            DelimiterStyle::Code => SpanKind::Code,
            DelimiterStyle::Bold => SpanKind::Bold,
            DelimiterStyle::Italic => SpanKind::Italic,
        }
    }
}

impl From<&InlineConfig> for InlineRules {
    fn from(config: &InlineConfig) -> Self {
        InlineRules {
            delimiters: config
                .delimiters
                .iter()
                .map(|d| DelimiterRule::new(d.delimiter.clone(), d.style.into()))
                .collect(),
        }
    }
}

/// Document assembly knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub root_tag: String,
    pub paragraph_tag: String,
    pub on_invalid_block: InvalidBlockConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidBlockConfig {
    Abort,
    Skip,
}

impl From<InvalidBlockConfig> for InvalidBlockPolicy {
    fn from(config: InvalidBlockConfig) -> Self {
        match config {
            InvalidBlockConfig::Abort => InvalidBlockPolicy::Abort,
            InvalidBlockConfig::Skip => InvalidBlockPolicy::Skip,
        }
    }
}

impl From<&DocumentConfig> for DocumentOptions {
    fn from(config: &DocumentConfig) -> Self {
        DocumentOptions {
            root_tag: config.root_tag.clone(),
            paragraph_tag: config.paragraph_tag.clone(),
            on_invalid_block: config.on_invalid_block.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<LeafmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LeafmarkConfig, ConfigError> {
    Loader::new().build()
}
