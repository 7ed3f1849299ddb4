//! Document assembly
//!
//! Splits Markdown source into blank-line separated blocks, runs each block
//! through the inline pipeline and wraps the result in paragraph nodes under a
//! single root node. No other block constructs are recognised.

use crate::error::{ErrorKind, Result};
use crate::html::{span_to_html_node, HtmlNode, ParentNode, ToHtml};
use crate::inline::{text_to_spans, InlineRules, Span};
use serde::Serialize;

/// What to do with a block whose inline markup is malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidBlockPolicy {
    /// Fail the whole document with the block's error
    #[default]
    Abort,
    /// Log the error and leave the block out
    Skip,
}

/// Options for document assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub root_tag: String,
    pub paragraph_tag: String,
    pub on_invalid_block: InvalidBlockPolicy,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        DocumentOptions {
            root_tag: "div".to_string(),
            paragraph_tag: "p".to_string(),
            on_invalid_block: InvalidBlockPolicy::Abort,
        }
    }
}

/// Split Markdown into blocks separated by blank lines.
///
/// Lines inside a block are trimmed and joined with single spaces; blocks that
/// end up empty are dropped.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join(" "));
    }
    blocks
}

/// Inline spans for one blank-line separated block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSpans {
    /// 1-based block number in the source
    pub block: usize,
    pub spans: Vec<Span>,
}

/// Run the inline pipeline over every block of a document.
///
/// A block with malformed markup either fails the document or, under
/// [`InvalidBlockPolicy::Skip`], is logged and left out. Block numbers keep
/// counting skipped blocks.
pub fn markdown_to_block_spans(
    markdown: &str,
    rules: &InlineRules,
    options: &DocumentOptions,
) -> Result<Vec<BlockSpans>> {
    let blocks = markdown_to_blocks(markdown);
    tracing::debug!(blocks = blocks.len(), "split markdown into blocks");

    let mut out = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.iter().enumerate() {
        match text_to_spans(block, rules) {
            Ok(spans) => out.push(BlockSpans {
                block: index + 1,
                spans,
            }),
            Err(err)
                if err.kind() == ErrorKind::Syntax
                    && options.on_invalid_block == InvalidBlockPolicy::Skip =>
            {
                tracing::warn!(block = index + 1, error = %err, "skipping invalid block");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(out)
}

/// Build the paragraph node for one block.
pub fn block_to_html_node(
    block: &str,
    rules: &InlineRules,
    options: &DocumentOptions,
) -> Result<ParentNode> {
    let spans = text_to_spans(block, rules)?;
    Ok(paragraph_node(&spans, options))
}

fn paragraph_node(spans: &[Span], options: &DocumentOptions) -> ParentNode {
    let children = spans
        .iter()
        .map(|span| HtmlNode::from(span_to_html_node(span)))
        .collect();
    ParentNode::new(options.paragraph_tag.clone(), children)
}

/// Convert a Markdown document into a node tree.
pub fn markdown_to_html_node(
    markdown: &str,
    rules: &InlineRules,
    options: &DocumentOptions,
) -> Result<ParentNode> {
    let children: Vec<HtmlNode> = markdown_to_block_spans(markdown, rules, options)?
        .iter()
        .map(|block| paragraph_node(&block.spans, options).into())
        .collect();
    Ok(ParentNode::new(options.root_tag.clone(), children))
}

/// Convert a Markdown document straight to an HTML string.
pub fn markdown_to_html(
    markdown: &str,
    rules: &InlineRules,
    options: &DocumentOptions,
) -> Result<String> {
    markdown_to_html_node(markdown, rules, options)?.to_html()
}
