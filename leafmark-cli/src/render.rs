//! Rendering entry points for the CLI
//!
//! The binary only handles arguments, files and exit codes. Everything that
//! touches the converter goes through here so it can be tested without
//! spawning a process.

use leafmark::document::{markdown_to_block_spans, markdown_to_html, BlockSpans, DocumentOptions};
use leafmark::inline::InlineRules;
use leafmark::{ErrorKind, LeafmarkError};
use leafmark_config::LeafmarkConfig;

/// Exit status for malformed Markdown
pub const EXIT_INVALID_MARKDOWN: i32 = 2;
/// Exit status for a node tree that failed to render
pub const EXIT_INTERNAL_ERROR: i32 = 3;

/// Convert a Markdown source into an HTML string using `config`.
pub fn render_html(source: &str, config: &LeafmarkConfig) -> Result<String, LeafmarkError> {
    let rules = InlineRules::from(&config.inline);
    let options = DocumentOptions::from(&config.document);
    markdown_to_html(source, &rules, &options)
}

/// Run the inline pipeline over each block without building nodes.
///
/// Invalid blocks follow the configured policy, same as [`render_html`].
pub fn block_spans(
    source: &str,
    config: &LeafmarkConfig,
) -> Result<Vec<BlockSpans>, LeafmarkError> {
    let rules = InlineRules::from(&config.inline);
    let options = DocumentOptions::from(&config.document);
    markdown_to_block_spans(source, &rules, &options)
}

/// Serialize block spans as JSON.
pub fn spans_to_json(blocks: &[BlockSpans], compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(blocks)
    } else {
        serde_json::to_string_pretty(blocks)
    }
}

/// User-facing message for a conversion error.
pub fn describe_error(err: &LeafmarkError) -> String {
    match err.kind() {
        ErrorKind::Syntax => format!("Invalid Markdown: {err}"),
        ErrorKind::Value => format!("Internal error: {err} (please report this as a bug)"),
    }
}

pub fn exit_code(err: &LeafmarkError) -> i32 {
    match err.kind() {
        ErrorKind::Syntax => EXIT_INVALID_MARKDOWN,
        ErrorKind::Value => EXIT_INTERNAL_ERROR,
    }
}
