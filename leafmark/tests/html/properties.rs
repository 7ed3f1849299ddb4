//! Property tests for attribute rendering

use leafmark::html::{Attributes, LeafNode, ToHtml};
use proptest::prelude::*;
use std::collections::BTreeMap;

proptest! {
    #[test]
    fn test_one_pair_per_attribute(map in prop::collection::btree_map("[a-z]{1,8}", "[a-zA-Z0-9 ./:]{0,12}", 0..6)) {
        let attrs: Attributes = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let rendered = attrs.render();

        prop_assert_eq!(rendered.is_empty(), map.is_empty());
        for (name, value) in &map {
            let pair = format!(" {name}=\"{value}\"");
            prop_assert_eq!(rendered.matches(pair.as_str()).count(), 1);
        }
        let expected: String = map.iter().map(|(k, v)| format!(" {k}=\"{v}\"")).collect();
        prop_assert_eq!(rendered, expected);
    }

    #[test]
    fn test_untagged_leaf_renders_value(value in "\\PC*") {
        prop_assert_eq!(LeafNode::text(value.clone()).to_html().unwrap(), value);
    }

    #[test]
    fn test_tagged_leaf_wraps_value(tag in "[a-z]{1,6}", value in "[^<>]{1,20}") {
        let html = LeafNode::new(tag.clone(), value.clone()).to_html().unwrap();
        prop_assert_eq!(html, format!("<{tag}>{value}</{tag}>"));
    }
}

#[test]
fn test_render_is_stable_for_same_map() {
    let map: BTreeMap<&str, &str> = [("src", "a.png"), ("alt", "A"), ("width", "10")]
        .into_iter()
        .collect();
    let first: Attributes = map.iter().map(|(k, v)| (*k, *v)).collect();
    let second: Attributes = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(first.render(), second.render());
}
