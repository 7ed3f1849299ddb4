//! Markdown link and image extraction
//!
//! Both extractors share one pattern. The optional leading `!` is captured
//! rather than excluded with a look-behind, which keeps adjacent matches such
//! as `[a](x)[b](y)` working and makes link and image matches mutually
//! exclusive: every `[label](url)` occurrence is classified exactly once.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static TARGET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(!?)\[([^\]]*)\]\(([^)]*)\)").expect("valid target regex"));

/// One link or image occurrence in a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TargetMatch<'a> {
    /// Byte range of the whole construct, including the `!` for images
    pub range: Range<usize>,
    pub is_image: bool,
    pub label: &'a str,
    pub url: &'a str,
}

/// Scan `text` left to right for `[label](url)` and `![alt](url)` constructs.
pub(crate) fn find_targets(text: &str) -> impl Iterator<Item = TargetMatch<'_>> {
    TARGET_RE.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some(TargetMatch {
            range: whole.range(),
            is_image: caps.get(1).is_some_and(|bang| bang.as_str() == "!"),
            label: caps.get(2)?.as_str(),
            url: caps.get(3)?.as_str(),
        })
    })
}

/// Extract `(alt, url)` pairs for every `![alt](url)` in `text`, in order.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_targets(text)
        .filter(|m| m.is_image)
        .map(|m| (m.label.to_string(), m.url.to_string()))
        .collect()
}

/// Extract `(label, url)` pairs for every `[label](url)` in `text`, in order.
///
/// Image syntax is never reported as a link.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_targets(text)
        .filter(|m| !m.is_image)
        .map(|m| (m.label.to_string(), m.url.to_string()))
        .collect()
}
