//! Inline span model
//!
//! A [`Span`] is one contiguous run of source text carrying exactly one style.
//! Link and image targets live inside the [`SpanKind`] variant that needs them,
//! so a link can never exist without its URL.

use serde::{Deserialize, Serialize};

/// The style of an inline span, with style-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Normal,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String, alt: String },
}

impl SpanKind {
    /// Lowercase style name (e.g. "bold", "link").
    pub fn name(&self) -> &'static str {
        match self {
            SpanKind::Normal => "normal",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link { .. } => "link",
            SpanKind::Image { .. } => "image",
        }
    }
}

/// A run of text with a single inline style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
}

impl Span {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Span {
            text: text.into(),
            kind,
        }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Span::new(text, SpanKind::Normal)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Span::new(text, SpanKind::Link { url: url.into() })
    }

    /// Image span. The alt text doubles as the span text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        let alt = alt.into();
        let kind = SpanKind::Image {
            url: url.into(),
            alt: alt.clone(),
        };
        Span::new(alt, kind)
    }

    pub fn is_normal(&self) -> bool {
        matches!(self.kind, SpanKind::Normal)
    }
}
