//! Inline text → span pipeline
//!
//! Raw text goes through a fixed sequence of splitting passes:
//!
//!     1. images (`![alt](url)`)
//!     2. links (`[label](url)`)
//!     3. each delimiter rule, in the order given by [`InlineRules`]
//!
//! Images and links go first so that URLs containing delimiter characters
//! (`_` is common) are already out of the normal runs when delimiters are
//! counted.

pub mod extract;
pub mod span;
pub mod split;

pub use extract::{extract_markdown_images, extract_markdown_links};
pub use span::{Span, SpanKind};
pub use split::{split_spans_delimiter, split_spans_image, split_spans_link};

use crate::error::Result;

/// A delimiter and the style it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterRule {
    pub delimiter: String,
    pub kind: SpanKind,
}

impl DelimiterRule {
    pub fn new(delimiter: impl Into<String>, kind: SpanKind) -> Self {
        DelimiterRule {
            delimiter: delimiter.into(),
            kind,
        }
    }
}

/// Ordered delimiter passes applied by [`text_to_spans`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRules {
    pub delimiters: Vec<DelimiterRule>,
}

impl Default for InlineRules {
    /// Code first, so `**` and `_` inside backticks stay literal.
    fn default() -> Self {
        InlineRules {
            delimiters: vec![
                DelimiterRule::new("`", SpanKind::Code),
                DelimiterRule::new("**", SpanKind::Bold),
                DelimiterRule::new("_", SpanKind::Italic),
            ],
        }
    }
}

/// Convert one run of raw Markdown text into typed inline spans.
pub fn text_to_spans(text: &str, rules: &InlineRules) -> Result<Vec<Span>> {
    let spans = vec![Span::normal(text)];
    let spans = split_spans_image(&spans);
    let mut spans = split_spans_link(&spans);
    for rule in &rules.delimiters {
        spans = split_spans_delimiter(&spans, &rule.delimiter, rule.kind.clone())?;
    }
    tracing::debug!(spans = spans.len(), "converted text to spans");
    Ok(spans)
}
