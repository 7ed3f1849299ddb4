//! Property tests for splitting and extraction

use leafmark::inline::{
    extract_markdown_images, extract_markdown_links, split_spans_delimiter, Span, SpanKind,
};
use proptest::prelude::*;

/// Alternating plain / bold pieces with no `*` in them.
fn pieces() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec(("[a-z ]{1,6}", any::<bool>()), 0..8)
}

/// Links and images with labels and urls free of brackets.
fn targets() -> impl Strategy<Value = Vec<(String, String, bool)>> {
    prop::collection::vec(("[a-z ]{0,6}", "[a-z/.:]{0,8}", any::<bool>()), 0..6)
}

proptest! {
    #[test]
    fn test_split_extracts_exactly_the_wrapped_pieces(pieces in pieces()) {
        let text: String = pieces
            .iter()
            .map(|(s, bold)| if *bold { format!("**{s}**") } else { s.clone() })
            .collect();
        let spans = vec![Span::normal(text.clone())];
        let out = split_spans_delimiter(&spans, "**", SpanKind::Bold).unwrap();

        let bold_out: Vec<&str> = out
            .iter()
            .filter(|s| s.kind == SpanKind::Bold)
            .map(|s| s.text.as_str())
            .collect();
        let bold_in: Vec<&str> = pieces
            .iter()
            .filter(|(_, bold)| *bold)
            .map(|(s, _)| s.as_str())
            .collect();
        prop_assert_eq!(bold_out, bold_in);

        let joined: String = out.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(joined, text.replace("**", ""));
        prop_assert!(out.iter().all(|s| !s.text.is_empty()));
    }

    #[test]
    fn test_odd_delimiter_count_always_fails(prefix in "[a-z ]{0,6}", suffix in "[a-z ]{0,6}") {
        let text = format!("{prefix}`{suffix}");
        let spans = vec![Span::normal(text)];
        prop_assert!(split_spans_delimiter(&spans, "`", SpanKind::Code).is_err());
    }

    #[test]
    fn test_links_and_images_are_mutually_exclusive(targets in targets()) {
        let text = targets
            .iter()
            .map(|(label, url, image)| {
                let bang = if *image { "!" } else { "" };
                format!("{bang}[{label}]({url})")
            })
            .collect::<Vec<_>>()
            .join(" ");

        let expected_images: Vec<(String, String)> = targets
            .iter()
            .filter(|(_, _, image)| *image)
            .map(|(l, u, _)| (l.clone(), u.clone()))
            .collect();
        let expected_links: Vec<(String, String)> = targets
            .iter()
            .filter(|(_, _, image)| !*image)
            .map(|(l, u, _)| (l.clone(), u.clone()))
            .collect();

        prop_assert_eq!(extract_markdown_images(&text), expected_images);
        prop_assert_eq!(extract_markdown_links(&text), expected_links);
    }
}
