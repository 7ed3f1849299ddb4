//! HTML node tree
//!
//! Two node shapes cover everything the converter emits:
//!
//! - [`LeafNode`]: no children. Renders as bare text when it has no tag, or as a
//!   single element wrapping its value.
//! - [`ParentNode`]: a tag wrapping an ordered list of child nodes.
//!
//! Both implement [`ToHtml`]. [`HtmlNode`] is the owned, heterogeneous child
//! type a parent holds. Required fields are `Option`s so that a tree built
//! without them reports a [`LeafmarkError`] at render time instead of
//! producing broken markup.
//!
//! Attribute values are written verbatim. Nothing here escapes HTML; callers
//! that take untrusted input must escape it before building nodes.

use crate::error::{LeafmarkError, Result};

/// HTML elements that have no closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Ordered element attributes.
///
/// Attributes render in insertion order. Setting a name that is already
/// present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as ` name="value"` pairs, each with one leading space.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

/// Anything that renders to an HTML string.
pub trait ToHtml {
    /// Attributes of this node, if any.
    fn attributes(&self) -> Option<&Attributes>;

    /// Render the node and everything below it.
    fn to_html(&self) -> Result<String>;

    /// Rendered attributes; empty when there are none.
    fn render_attributes(&self) -> String {
        match self.attributes() {
            Some(attributes) => attributes.render(),
            None => String::new(),
        }
    }
}

/// A childless node holding a literal value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Option<Attributes>,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        LeafNode {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: None,
        }
    }

    /// Untagged leaf: renders its value as-is.
    pub fn text(value: impl Into<String>) -> Self {
        LeafNode {
            tag: None,
            value: Some(value.into()),
            attributes: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

impl ToHtml for LeafNode {
    fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    fn to_html(&self) -> Result<String> {
        let Some(value) = self.value.as_deref() else {
            return Err(LeafmarkError::MissingValue {
                tag: self.tag.clone(),
            });
        };

        let Some(tag) = self.tag.as_deref() else {
            return Ok(value.to_string());
        };

        let attrs = self.render_attributes();
        if value.is_empty() && VOID_ELEMENTS.contains(&tag) {
            return Ok(format!("<{tag}{attrs}>"));
        }
        Ok(format!("<{tag}{attrs}>{value}</{tag}>"))
    }
}

/// A tagged node wrapping an ordered list of children.
///
/// An empty `children` list is valid and renders `<tag></tag>`; a missing list
/// is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub attributes: Option<Attributes>,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        ParentNode {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

impl ToHtml for ParentNode {
    fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    fn to_html(&self) -> Result<String> {
        let tag = self.tag.as_deref().ok_or(LeafmarkError::MissingTag)?;
        let Some(children) = self.children.as_ref() else {
            return Err(LeafmarkError::MissingChildren {
                tag: tag.to_string(),
            });
        };

        let mut inner = String::new();
        for child in children {
            inner.push_str(&child.to_html()?);
        }
        tracing::trace!(tag, children = children.len(), "rendered parent node");
        let attrs = self.render_attributes();
        Ok(format!("<{tag}{attrs}>{inner}</{tag}>"))
    }
}

/// Either node shape, as owned by a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl ToHtml for HtmlNode {
    fn attributes(&self) -> Option<&Attributes> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.attributes(),
            HtmlNode::Parent(parent) => parent.attributes(),
        }
    }

    fn to_html(&self) -> Result<String> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(node: LeafNode) -> Self {
        HtmlNode::Leaf(node)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(node: ParentNode) -> Self {
        HtmlNode::Parent(node)
    }
}
