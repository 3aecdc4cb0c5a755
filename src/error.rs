//! Errors raised while turning a document tree into blocks.
//!
//! Every variant aborts the whole conversion; nothing is skipped or
//! replaced, because dropped markup would silently change the message.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A node of a specific kind was required at this position.
    #[error("expected a {expected} node, found {found}")]
    Structure { expected: &'static str, found: String },

    /// The markup construct has no rich text equivalent.
    #[error("unsupported node kind: {kind}")]
    UnsupportedNode { kind: String },

    /// A rendered element cannot be flattened into its container.
    #[error("unsupported element type: {element}")]
    UnsupportedElement { element: &'static str },

    #[error("nested blockquotes are not supported")]
    NestedQuote,
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;

impl RenderError {
    pub(crate) fn unsupported_node(kind: &crate::ast::NodeKind) -> Self {
        RenderError::UnsupportedNode {
            kind: kind.name().to_string(),
        }
    }
}
