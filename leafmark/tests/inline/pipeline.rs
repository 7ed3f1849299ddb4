//! Text → span tests through the public pipeline

use leafmark::inline::{
    extract_markdown_images, extract_markdown_links, split_spans_delimiter, text_to_spans,
    DelimiterRule, InlineRules, Span, SpanKind,
};
use leafmark::{ErrorKind, LeafmarkError};

#[test]
fn test_threading_delimiter_passes_by_hand() {
    let spans = vec![Span::normal("**bold** and _italic_ and `code`")];
    let spans = split_spans_delimiter(&spans, "**", SpanKind::Bold).unwrap();
    let spans = split_spans_delimiter(&spans, "_", SpanKind::Italic).unwrap();
    let spans = split_spans_delimiter(&spans, "`", SpanKind::Code).unwrap();
    assert_eq!(
        spans,
        vec![
            Span::new("bold", SpanKind::Bold),
            Span::normal(" and "),
            Span::new("italic", SpanKind::Italic),
            Span::normal(" and "),
            Span::new("code", SpanKind::Code),
        ]
    );
}

#[test]
fn test_styled_span_is_untouched_by_any_delimiter() {
    let spans = vec![Span::new("**not bold** _nor italic_", SpanKind::Code)];
    let delimiters = [
        ("**", SpanKind::Bold),
        ("_", SpanKind::Italic),
        ("*", SpanKind::Italic),
    ];
    for (delimiter, kind) in delimiters {
        let out = split_spans_delimiter(&spans, delimiter, kind).unwrap();
        assert_eq!(out, spans);
    }
}

#[test]
fn test_unbalanced_delimiter_reports_syntax_error() {
    let spans = vec![Span::normal("unbalanced **text")];
    let err = split_spans_delimiter(&spans, "**", SpanKind::Bold).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(
        err,
        LeafmarkError::UnbalancedDelimiter {
            delimiter: "**".to_string(),
            text: "unbalanced **text".to_string(),
        }
    );
}

#[test]
fn test_extractors_on_mixed_text() {
    let text = "![img one](a.png) [link one](/one) ![img two](b.png) [link two](/two)";
    assert_eq!(
        extract_markdown_images(text),
        vec![
            ("img one".to_string(), "a.png".to_string()),
            ("img two".to_string(), "b.png".to_string()),
        ]
    );
    assert_eq!(
        extract_markdown_links(text),
        vec![
            ("link one".to_string(), "/one".to_string()),
            ("link two".to_string(), "/two".to_string()),
        ]
    );
}

#[test]
fn test_link_text_is_not_styled() {
    let spans = text_to_spans("[**not bold**](/x) but **bold**", &InlineRules::default()).unwrap();
    assert_eq!(
        spans,
        vec![
            Span::link("**not bold**", "/x"),
            Span::normal(" but "),
            Span::new("bold", SpanKind::Bold),
        ]
    );
}

#[test]
fn test_rule_order_matters() {
    // With `*` first, the `**` markers are consumed as empty italic runs.
    let italic_first = InlineRules {
        delimiters: vec![
            DelimiterRule::new("*", SpanKind::Italic),
            DelimiterRule::new("**", SpanKind::Bold),
        ],
    };
    let bold_first = InlineRules {
        delimiters: vec![
            DelimiterRule::new("**", SpanKind::Bold),
            DelimiterRule::new("*", SpanKind::Italic),
        ],
    };
    let text = "**b** and *i*";
    assert_eq!(
        text_to_spans(text, &bold_first).unwrap(),
        vec![
            Span::new("b", SpanKind::Bold),
            Span::normal(" and "),
            Span::new("i", SpanKind::Italic),
        ]
    );
    assert_eq!(
        text_to_spans(text, &italic_first).unwrap(),
        vec![
            Span::normal("b"),
            Span::normal(" and "),
            Span::new("i", SpanKind::Italic),
        ]
    );
}

#[test]
fn test_spans_serialize_to_json() {
    let spans = text_to_spans("a [b](/c)", &InlineRules::default()).unwrap();
    let json = serde_json::to_string(&spans).unwrap();
    assert_eq!(
        json,
        r#"[{"text":"a ","kind":"normal"},{"text":"b","kind":{"link":{"url":"/c"}}}]"#
    );
}
