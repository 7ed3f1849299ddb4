//! Error types for span splitting and HTML rendering

/// Broad classification of a [`LeafmarkError`].
///
/// Drivers use this to tell bad input apart from construction bugs: `Syntax`
/// errors come from malformed Markdown and are worth showing to the author,
/// `Value` errors mean a node tree was built without a required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Value,
}

/// Errors that can occur while converting Markdown to HTML
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeafmarkError {
    /// A delimiter appears an odd number of times in a normal text run
    #[error("unbalanced delimiter '{delimiter}' in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },
    /// Leaf node rendered without a value
    #[error("leaf node <{}> must have a value", .tag.as_deref().unwrap_or("text"))]
    MissingValue { tag: Option<String> },
    /// Parent node rendered without a tag
    #[error("parent node must have a tag")]
    MissingTag,
    /// Parent node rendered without a children sequence
    #[error("parent node <{tag}> must have children")]
    MissingChildren { tag: String },
}

impl LeafmarkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LeafmarkError::UnbalancedDelimiter { .. } => ErrorKind::Syntax,
            LeafmarkError::MissingValue { .. }
            | LeafmarkError::MissingTag
            | LeafmarkError::MissingChildren { .. } => ErrorKind::Value,
        }
    }
}

pub type Result<T> = std::result::Result<T, LeafmarkError>;
