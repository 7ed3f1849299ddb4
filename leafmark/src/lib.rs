//! Markdown to HTML node trees for static site generation
//!
//!     This crate turns a small subset of Markdown into a tree of HTML nodes that render
//!     themselves to strings. It is a pure lib: no file access, no printing, no env vars.
//!     Reading sources, walking directories and writing output belong to the caller (see
//!     the leafmark-cli crate for one such caller).
//!
//! Architecture
//!
//!     The work happens in two stages:
//!
//!     1. Text → spans (./inline). Raw text is cut into typed runs ([`inline::Span`]):
//!        images and links are pulled out first, then each delimiter rule splits the
//!        remaining normal runs. Every pass is single level: a run that already has a
//!        style is never split again, so nested styles are not supported.
//!     2. Spans → nodes (./html). Each span maps to one [`html::LeafNode`]; the caller
//!        groups leaves under [`html::ParentNode`]s and calls [`html::ToHtml::to_html`].
//!
//!     ./document.rs is the thin glue a static site driver needs on top: blank-line blocks
//!     become paragraphs under one root node.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # LeafmarkError, ErrorKind
//!     ├── document.rs             # blocks → paragraphs → root node
//!     ├── inline
//!     │   ├── span.rs             # Span, SpanKind
//!     │   ├── split.rs            # delimiter / image / link splitting
//!     │   ├── extract.rs          # link and image extraction
//!     │   └── mod.rs              # text_to_spans pipeline
//!     └── html
//!         ├── node.rs             # LeafNode, ParentNode, HtmlNode, ToHtml
//!         └── mapper.rs           # Span → LeafNode
//!
//! Errors
//!
//!     Malformed Markdown (an unbalanced delimiter) is a [`ErrorKind::Syntax`] error. A node
//!     tree missing a required field is a [`ErrorKind::Value`] error: that is a bug in
//!     whatever built the tree, not bad input.
//!
//! Escaping
//!
//!     Text and attribute values are emitted verbatim. Escape untrusted input before it
//!     reaches the node tree.

pub mod document;
pub mod error;
pub mod html;
pub mod inline;

pub use document::{markdown_to_html, markdown_to_html_node, DocumentOptions, InvalidBlockPolicy};
pub use error::{ErrorKind, LeafmarkError, Result};
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode, ToHtml};
pub use inline::{InlineRules, Span, SpanKind};
