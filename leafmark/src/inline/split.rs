//! Span splitting
//!
//! Each function takes a span sequence and returns a new one in which the
//! normal-style spans have been cut into smaller, typed runs. Spans that
//! already carry a style pass through untouched, so delimiters inside a code
//! span are never re-read. Splitting is single-level: callers thread the
//! output of one pass into the next, one delimiter at a time.

use super::extract::find_targets;
use super::span::{Span, SpanKind};
use crate::error::{LeafmarkError, Result};

/// Split normal spans on `delimiter`, styling every enclosed run as `style`.
///
/// Pieces at even positions stay normal, pieces at odd positions take `style`,
/// and empty pieces are dropped. An odd number of delimiters in a normal span
/// is a syntax error.
pub fn split_spans_delimiter(
    spans: &[Span],
    delimiter: &str,
    style: SpanKind,
) -> Result<Vec<Span>> {
    if delimiter.is_empty() {
        return Ok(spans.to_vec());
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_normal() {
            out.push(span.clone());
            continue;
        }

        if span.text.matches(delimiter).count() % 2 != 0 {
            return Err(LeafmarkError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, piece) in span.text.split(delimiter).enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Span::normal(piece));
            } else {
                out.push(Span::new(piece, style.clone()));
            }
        }
    }

    tracing::trace!(
        delimiter,
        style = style.name(),
        spans = out.len(),
        "split delimiter"
    );
    Ok(out)
}

/// Cut normal spans around every `![alt](url)` into image spans.
pub fn split_spans_image(spans: &[Span]) -> Vec<Span> {
    split_targets(spans, true)
}

/// Cut normal spans around every `[label](url)` into link spans.
pub fn split_spans_link(spans: &[Span]) -> Vec<Span> {
    split_targets(spans, false)
}

fn split_targets(spans: &[Span], images: bool) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_normal() {
            out.push(span.clone());
            continue;
        }

        let text = span.text.as_str();
        let mut cursor = 0;
        for target in find_targets(text).filter(|m| m.is_image == images) {
            push_text(&mut out, &text[cursor..target.range.start]);
            out.push(if images {
                Span::image(target.label, target.url)
            } else {
                Span::link(target.label, target.url)
            });
            cursor = target.range.end;
        }
        push_text(&mut out, &text[cursor..]);
    }
    out
}

fn push_text(out: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        out.push(Span::normal(text));
    }
}
