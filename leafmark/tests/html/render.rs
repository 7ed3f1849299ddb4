//! Rendering tests for hand-built node trees
//!
//! These build trees the way a site driver would (mapper output grouped under
//! parents) and check the resulting markup.

use insta::assert_snapshot;
use leafmark::html::{span_to_html_node, Attributes, HtmlNode, LeafNode, ParentNode, ToHtml};
use leafmark::inline::{Span, SpanKind};
use leafmark::ErrorKind;

fn leaves(spans: &[Span]) -> Vec<HtmlNode> {
    spans.iter().map(|s| span_to_html_node(s).into()).collect()
}

#[test]
fn test_paragraph_of_mapped_spans() {
    let spans = vec![
        Span::normal("Read "),
        Span::link("the guide", "https://example.com/guide"),
        Span::normal(" or look at "),
        Span::image("a diagram", "/img/diagram.png"),
        Span::normal(", then run "),
        Span::new("make", SpanKind::Code),
        Span::normal("."),
    ];
    let html = ParentNode::new("p", leaves(&spans)).to_html().unwrap();
    assert_snapshot!(html, @r#"<p>Read <a href="https://example.com/guide">the guide</a> or look at <img src="/img/diagram.png" alt="a diagram">, then run <code>make</code>.</p>"#);
}

#[test]
fn test_deeply_nested_tree() {
    let one = ParentNode::new("li", vec![LeafNode::new("b", "one").into()]);
    let two = ParentNode::new("li", vec![LeafNode::text("two").into()]);
    let list = ParentNode::new("ul", vec![one.into(), two.into()]);

    let attrs = Attributes::new()
        .with("id", "main")
        .with("class", "content");
    let children = vec![LeafNode::new("h1", "Title").into(), list.into()];
    let section = ParentNode::new("section", children).with_attributes(attrs);
    let root = ParentNode::new("body", vec![section.into()]);

    assert_snapshot!(root.to_html().unwrap(), @r#"<body><section id="main" class="content"><h1>Title</h1><ul><li><b>one</b></li><li>two</li></ul></section></body>"#);
}

#[test]
fn test_missing_field_deep_in_tree_fails_whole_render() {
    let broken = ParentNode {
        tag: Some("li".to_string()),
        children: None,
        attributes: None,
    };
    let fine = ParentNode::new("li", vec![LeafNode::text("fine").into()]);
    let root = ParentNode::new("ul", vec![fine.into(), broken.into()]);
    let err = root.to_html().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert_eq!(err.to_string(), "parent node <li> must have children");
}

#[test]
fn test_rendering_is_repeatable() {
    let attrs = Attributes::new().with("a", "1").with("b", "2");
    let node = ParentNode::new("p", vec![LeafNode::text("same").into()]);
    let node = node.with_attributes(attrs);
    assert_eq!(node.to_html().unwrap(), node.to_html().unwrap());
}
