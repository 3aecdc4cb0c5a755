//! Block-level rendering of a document tree into rich text blocks.
//!
//! Rendering is a single recursive walk. Each rule receives the node and a
//! [`RenderContext`] by value; nested rules get an updated copy, so leaving a
//! heading, list or quote (normally or through `?`) restores the outer
//! context without any bookkeeping.

use tracing::{debug, trace};

use crate::ast::{Node, NodeKind};
use crate::blocks::{InlineElement, RichTextBlock, Style};
use crate::error::{RenderError, RenderResult};
use crate::{inline, list, quote};

/// Trailing whitespace that keeps consecutive sections visually apart
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// State inherited from enclosing nodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RenderContext {
    pub inside_heading: bool,
    pub blockquote_depth: usize,
    pub list_depth: usize,
    /// Style contributed by enclosing emphasis nodes
    pub style: Style,
}

impl RenderContext {
    pub fn in_heading(self) -> Self {
        Self {
            inside_heading: true,
            ..self
        }
    }

    pub fn in_blockquote(self) -> Self {
        Self {
            blockquote_depth: self.blockquote_depth + 1,
            ..self
        }
    }

    pub fn in_list(self) -> Self {
        Self {
            list_depth: self.list_depth + 1,
            ..self
        }
    }

    pub fn with_style(self, style: Style) -> Self {
        Self {
            style: self.style | style,
            ..self
        }
    }

    /// Zero-based indent of the innermost list
    pub fn list_indent(&self) -> usize {
        self.list_depth.saturating_sub(1)
    }

    /// Headings force bold on everything inside them
    pub fn heading_style(&self) -> Style {
        if self.inside_heading {
            Style::BOLD
        } else {
            Style::PLAIN
        }
    }
}

/// Render a parsed document into its ordered sequence of blocks.
pub fn render(document: &Node) -> RenderResult<Vec<RichTextBlock>> {
    expect_kind(document, "Document", |kind| matches!(kind, NodeKind::Document))?;

    debug!(children = document.children.len(), "rendering document");
    let blocks = render_blocks(&document.children, RenderContext::default()).inspect_err(|e| {
        debug!(error = %e, "conversion failed");
    })?;
    debug!(blocks = blocks.len(), "rendered document");

    Ok(blocks)
}

pub(crate) fn expect_kind(
    node: &Node,
    expected: &'static str,
    is_expected: impl Fn(&NodeKind) -> bool,
) -> RenderResult<()> {
    if is_expected(&node.kind) {
        Ok(())
    } else {
        Err(RenderError::Structure {
            expected,
            found: node.kind.name().to_string(),
        })
    }
}

pub(crate) fn render_blocks(nodes: &[Node], ctx: RenderContext) -> RenderResult<Vec<RichTextBlock>> {
    nodes.iter().map(|node| render_block(node, ctx)).collect()
}

fn render_block(node: &Node, ctx: RenderContext) -> RenderResult<RichTextBlock> {
    trace!(kind = %node.kind, "rendering block");
    match &node.kind {
        NodeKind::Heading { .. } => render_section(node, ctx.in_heading()),
        NodeKind::Paragraph | NodeKind::TextBlock => render_section(node, ctx),
        NodeKind::Blockquote => quote::render_blockquote(node, ctx),
        NodeKind::List { ordered } => list::render_list(node, *ordered, ctx),

        NodeKind::Document
        | NodeKind::ListItem
        | NodeKind::Text(_)
        | NodeKind::Emphasis { .. }
        | NodeKind::Link { .. }
        | NodeKind::CodeBlock
        | NodeKind::CodeSpan
        | NodeKind::HtmlBlock
        | NodeKind::RawHtml
        | NodeKind::Image
        | NodeKind::ThematicBreak
        | NodeKind::Table
        | NodeKind::TableHead
        | NodeKind::TableRow
        | NodeKind::TableCell
        | NodeKind::Strikethrough
        | NodeKind::TaskCheckBox
        | NodeKind::FootnoteDefinition
        | NodeKind::FootnoteReference
        | NodeKind::Math
        | NodeKind::MetadataBlock
        | NodeKind::Other(_) => Err(RenderError::unsupported_node(&node.kind)),
    }
}

/// Headings, paragraphs and text blocks all become one section ending in a
/// paragraph break.
fn render_section(node: &Node, ctx: RenderContext) -> RenderResult<RichTextBlock> {
    let mut elements = inline::render_inlines(&node.children, ctx)?;
    elements.push(InlineElement::text(PARAGRAPH_BREAK, Style::PLAIN));

    Ok(RichTextBlock::section(elements))
}
