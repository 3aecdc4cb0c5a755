use tracing::trace;

use crate::ast::Node;
use crate::blocks::{RichTextBlock, RichTextElement};
use crate::error::{RenderError, RenderResult};
use crate::render::{render_blocks, RenderContext};

/// Render a blockquote as a single `rich_text_quote`.
///
/// The quoted blocks are rendered normally and their sections' inline
/// elements concatenated, since a quote holds inline content only. Nested
/// quotes and lists inside quotes are rejected.
pub(crate) fn render_blockquote(node: &Node, ctx: RenderContext) -> RenderResult<RichTextBlock> {
    if ctx.blockquote_depth > 0 {
        return Err(RenderError::NestedQuote);
    }

    let blocks = render_blocks(&node.children, ctx.in_blockquote())?;

    let mut elements = Vec::new();
    for element in blocks.into_iter().flat_map(|block| block.elements) {
        match element {
            RichTextElement::Section { elements: section } => elements.extend(section),
            RichTextElement::List { .. } | RichTextElement::Quote { .. } => {
                return Err(RenderError::UnsupportedElement {
                    element: element.type_name(),
                });
            }
        }
    }

    trace!(elements = elements.len(), "rendered blockquote");
    Ok(RichTextBlock::new(vec![RichTextElement::Quote { elements }]))
}
