//! Span → HTML node mapping

use super::node::{Attributes, LeafNode};
use crate::inline::{Span, SpanKind};

/// Map one inline span to the leaf node that renders it.
///
/// | kind   | tag    | value     | attributes     |
/// |--------|--------|-----------|----------------|
/// | normal | -      | text      | -              |
/// | bold   | `b`    | text      | -              |
/// | italic | `i`    | text      | -              |
/// | code   | `code` | text      | -              |
/// | link   | `a`    | text      | `href`         |
/// | image  | `img`  | empty     | `src`, `alt`   |
pub fn span_to_html_node(span: &Span) -> LeafNode {
    match &span.kind {
        SpanKind::Normal => LeafNode::text(&span.text),
        SpanKind::Bold => LeafNode::new("b", &span.text),
        SpanKind::Italic => LeafNode::new("i", &span.text),
        SpanKind::Code => LeafNode::new("code", &span.text),
        SpanKind::Link { url } => {
            let attributes = Attributes::new().with("href", url);
            LeafNode::new("a", &span.text).with_attributes(attributes)
        }
        SpanKind::Image { url, alt } => {
            let attributes = Attributes::new().with("src", url).with("alt", alt);
            LeafNode::new("img", "").with_attributes(attributes)
        }
    }
}
