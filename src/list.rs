//! Lists.
//!
//! Block Kit cannot nest a list inside a list item. A nested list is emitted
//! as a sibling `rich_text_list` with a larger `indent`, placed right after
//! the parent items rendered so far; the parent's remaining items start a new
//! list at the parent's indent.

use std::mem;

use tracing::trace;

use crate::ast::{Node, NodeKind};
use crate::blocks::{ListStyle, RichTextBlock, RichTextElement};
use crate::error::{RenderError, RenderResult};
use crate::render::{expect_kind, render_blocks, RenderContext};

pub(crate) fn render_list(
    node: &Node,
    ordered: bool,
    ctx: RenderContext,
) -> RenderResult<RichTextBlock> {
    let style = if ordered {
        ListStyle::Ordered
    } else {
        ListStyle::Bullet
    };
    let ctx = ctx.in_list();
    let indent = ctx.list_indent();

    let mut elements = Vec::new();
    let mut pending = Vec::new();

    for item in &node.children {
        expect_kind(item, "ListItem", |kind| matches!(kind, NodeKind::ListItem))?;

        for block in render_blocks(&item.children, ctx)? {
            for element in block.elements {
                match element {
                    RichTextElement::Section { .. } => pending.push(element),
                    RichTextElement::List { .. } => {
                        flush(&mut elements, &mut pending, style, indent);
                        elements.push(element);
                    }
                    RichTextElement::Quote { .. } => {
                        return Err(RenderError::UnsupportedElement {
                            element: element.type_name(),
                        });
                    }
                }
            }
        }
    }
    if !pending.is_empty() {
        flush(&mut elements, &mut pending, style, indent);
    }

    trace!(indent, lists = elements.len(), "rendered list");
    Ok(RichTextBlock::new(elements))
}

/// Close the current run of items. Before a nested list this happens even
/// when the run is empty, so the nested list always follows a parent run.
fn flush(
    elements: &mut Vec<RichTextElement>,
    pending: &mut Vec<RichTextElement>,
    style: ListStyle,
    indent: usize,
) {
    elements.push(RichTextElement::List {
        style,
        indent,
        elements: mem::take(pending),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{InlineElement, Style};
    use crate::markdown_to_blocks;
    use pretty_assertions::assert_eq;

    /// A tight list item renders as its text plus the paragraph break
    fn item(content: &str) -> RichTextElement {
        RichTextElement::Section {
            elements: vec![
                InlineElement::text(content, Style::PLAIN),
                InlineElement::text("\n\n", Style::PLAIN),
            ],
        }
    }

    fn list(style: ListStyle, indent: usize, items: &[&str]) -> RichTextElement {
        RichTextElement::List {
            style,
            indent,
            elements: items.iter().map(|c| item(c)).collect(),
        }
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            markdown_to_blocks("- one\n- two").unwrap(),
            vec![RichTextBlock::new(vec![list(ListStyle::Bullet, 0, &["one", "two"])])]
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            markdown_to_blocks("1. one\n2. two\n3. three").unwrap(),
            vec![RichTextBlock::new(vec![list(
                ListStyle::Ordered,
                0,
                &["one", "two", "three"]
            )])]
        );
    }

    #[test]
    fn flat_list_is_a_single_element() {
        let blocks = markdown_to_blocks("- a\n- *b*\n- [c](https://c.example)").unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].elements.len(), 1);
        match &blocks[0].elements[0] {
            RichTextElement::List { elements, .. } => assert_eq!(elements.len(), 3),
            other => panic!("expected a list, got {other:?}"),
        }
    }

    #[test]
    fn nested_list_becomes_indented_sibling() {
        assert_eq!(
            markdown_to_blocks("- one\n- two\n  - inner\n- three").unwrap(),
            vec![RichTextBlock::new(vec![
                list(ListStyle::Bullet, 0, &["one", "two"]),
                list(ListStyle::Bullet, 1, &["inner"]),
                list(ListStyle::Bullet, 0, &["three"]),
            ])]
        );
    }

    #[test]
    fn nested_list_at_end_leaves_no_trailing_list() {
        assert_eq!(
            markdown_to_blocks("1. one\n   - inner a\n   - inner b").unwrap(),
            vec![RichTextBlock::new(vec![
                list(ListStyle::Ordered, 0, &["one"]),
                list(ListStyle::Bullet, 1, &["inner a", "inner b"]),
            ])]
        );
    }

    #[test]
    fn three_levels() {
        let md = "- a\n  - b\n    - c\n  - d\n- e";
        assert_eq!(
            markdown_to_blocks(md).unwrap(),
            vec![RichTextBlock::new(vec![
                list(ListStyle::Bullet, 0, &["a"]),
                list(ListStyle::Bullet, 1, &["b"]),
                list(ListStyle::Bullet, 2, &["c"]),
                list(ListStyle::Bullet, 1, &["d"]),
                list(ListStyle::Bullet, 0, &["e"]),
            ])]
        );
    }

    #[test]
    fn depth_resets_between_top_level_lists() {
        let blocks = markdown_to_blocks("- a\n  - b\n\ntext\n\n- c").unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[2], RichTextBlock::new(vec![list(ListStyle::Bullet, 0, &["c"])]));
    }

    #[test]
    fn item_with_only_a_nested_list() {
        assert_eq!(
            markdown_to_blocks("- - inner\n- after").unwrap(),
            vec![RichTextBlock::new(vec![
                list(ListStyle::Bullet, 0, &[]),
                list(ListStyle::Bullet, 1, &["inner"]),
                list(ListStyle::Bullet, 0, &["after"]),
            ])]
        );
    }

    #[test]
    fn consecutive_nested_lists_are_separated_by_empty_runs() {
        let node = Node::with_children(
            NodeKind::List { ordered: true },
            vec![Node::with_children(
                NodeKind::ListItem,
                vec![
                    Node::with_children(
                        NodeKind::List { ordered: false },
                        vec![Node::with_children(
                            NodeKind::ListItem,
                            vec![Node::with_children(NodeKind::TextBlock, vec![Node::text_node("a")])],
                        )],
                    ),
                    Node::with_children(
                        NodeKind::List { ordered: false },
                        vec![Node::with_children(
                            NodeKind::ListItem,
                            vec![Node::with_children(NodeKind::TextBlock, vec![Node::text_node("b")])],
                        )],
                    ),
                ],
            )],
        );
        assert_eq!(
            render_list(&node, true, RenderContext::default()).unwrap(),
            RichTextBlock::new(vec![
                list(ListStyle::Ordered, 0, &[]),
                list(ListStyle::Bullet, 1, &["a"]),
                list(ListStyle::Ordered, 0, &[]),
                list(ListStyle::Bullet, 1, &["b"]),
            ])
        );
    }

    #[test]
    fn quote_in_list_item_is_rejected() {
        assert_eq!(
            markdown_to_blocks("- item\n\n  > quoted"),
            Err(RenderError::UnsupportedElement {
                element: "rich_text_quote"
            })
        );
    }

    #[test]
    fn list_children_must_be_items() {
        let node = Node::with_children(
            NodeKind::List { ordered: false },
            vec![Node::with_children(NodeKind::Paragraph, vec![Node::text_node("x")])],
        );
        assert_eq!(
            render_list(&node, false, RenderContext::default()),
            Err(RenderError::Structure {
                expected: "ListItem",
                found: "Paragraph".to_string(),
            })
        );
    }
}
