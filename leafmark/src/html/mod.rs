//! HTML node model and span mapping

pub mod mapper;
pub mod node;

pub use mapper::span_to_html_node;
pub use node::{Attributes, HtmlNode, LeafNode, ParentNode, ToHtml};
