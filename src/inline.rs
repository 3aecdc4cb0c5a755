//! Inline rendering: text, emphasis and links inside a section.
//!
//! Emphasis is not flattened. Its children are rendered with the emphasis
//! style added to the context, so `_a **b** c_` yields three elements with
//! italic, italic+bold and italic styles.

use crate::ast::{Node, NodeKind};
use crate::blocks::{InlineElement, Style};
use crate::error::{RenderError, RenderResult};
use crate::render::RenderContext;

/// Render inline children in document order. Adjacent elements are never merged.
pub(crate) fn render_inlines(nodes: &[Node], ctx: RenderContext) -> RenderResult<Vec<InlineElement>> {
    let mut out = Vec::new();
    for node in nodes {
        render_inline(node, ctx, &mut out)?;
    }
    Ok(out)
}

fn render_inline(node: &Node, ctx: RenderContext, out: &mut Vec<InlineElement>) -> RenderResult<()> {
    match &node.kind {
        NodeKind::Text(text) => {
            let mut content = text.content.clone();
            if text.has_line_break() {
                content.push('\n');
            }
            out.push(InlineElement::text(content, ctx.style | ctx.heading_style()));
        }
        NodeKind::Emphasis { level } => {
            let ctx = ctx.with_style(emphasis_style(*level, ctx.inside_heading));
            for child in &node.children {
                render_inline(child, ctx, out)?;
            }
        }
        // Links take only the heading's bold, never the surrounding emphasis
        NodeKind::Link { destination } => {
            out.push(InlineElement::link(
                destination.clone(),
                node.text(),
                ctx.heading_style(),
            ));
        }

        NodeKind::Document
        | NodeKind::Heading { .. }
        | NodeKind::Paragraph
        | NodeKind::TextBlock
        | NodeKind::Blockquote
        | NodeKind::List { .. }
        | NodeKind::ListItem
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
        | NodeKind::Other(_) => return Err(RenderError::unsupported_node(&node.kind)),
    }
    Ok(())
}

fn emphasis_style(level: u8, inside_heading: bool) -> Style {
    let mut style = Style::PLAIN;
    if level == 1 {
        style |= Style::ITALIC;
    }
    if level == 2 || inside_heading {
        style |= Style::BOLD;
    }
    style
}
