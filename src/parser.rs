use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};
use tracing::debug;

use crate::ast::{Node, NodeKind};
use crate::config::ParserConfig;

/// Parse markdown text into a document tree using the default options
pub fn parse(markdown: &str) -> Node {
    parse_with_config(markdown, &ParserConfig::default())
}

/// Parse markdown text into a document tree
pub fn parse_with_config(markdown: &str, config: &ParserConfig) -> Node {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    // A YAML block needs a closing `---`/`...` line; anything else stays
    // markup (a leading `---` is a thematic break).
    if config.strip_frontmatter {
        options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
    }
    let parser = Parser::new_ext(markdown, options);
    let mut tree = TreeBuilder::new();

    for event in parser {
        process_event(event, &mut tree);
    }

    tree.finish()
}

/// Stack of nodes still waiting for their end event; the bottom is the document
struct TreeBuilder {
    stack: Vec<Node>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Node::new(NodeKind::Document)],
        }
    }

    fn current(&mut self) -> &mut Node {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn open(&mut self, kind: NodeKind) {
        if kind.is_inline() {
            self.open_text_block();
        } else {
            self.close_text_block();
        }
        self.stack.push(Node::new(kind));
    }

    fn close(&mut self) {
        self.close_text_block();
        self.pop_into_parent();
    }

    fn leaf(&mut self, node: Node) {
        if node.kind.is_inline() {
            self.open_text_block();
        } else {
            self.close_text_block();
        }
        self.current().children.push(node);
    }

    fn text(&mut self, content: &str) {
        self.open_text_block();
        if let Some(NodeKind::Text(text)) = self.current().children.last_mut().map(|n| &mut n.kind)
        {
            if !text.has_line_break() {
                text.content.push_str(content);
                return;
            }
        }
        self.current().children.push(Node::text_node(content));
    }

    fn line_break(&mut self, hard: bool) {
        self.open_text_block();
        let parent = self.current();
        let needs_carrier = !matches!(
            parent.children.last().map(|n| &n.kind),
            Some(NodeKind::Text(text)) if !text.has_line_break()
        );
        if needs_carrier {
            parent.children.push(Node::text_node(""));
        }
        if let Some(NodeKind::Text(text)) = parent.children.last_mut().map(|n| &mut n.kind) {
            if hard {
                text.hard_line_break = true;
            } else {
                text.soft_line_break = true;
            }
        }
    }

    // Tight list items carry inline content directly; give it a TextBlock parent.
    fn open_text_block(&mut self) {
        if self.current().kind == NodeKind::ListItem {
            self.stack.push(Node::new(NodeKind::TextBlock));
        }
    }

    fn close_text_block(&mut self) {
        if self.current().kind == NodeKind::TextBlock {
            self.pop_into_parent();
        }
    }

    fn pop_into_parent(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(node) = self.stack.pop() {
            // Front matter is document metadata, not content
            if node.kind == NodeKind::MetadataBlock {
                debug!(bytes = node.text().len(), "dropped frontmatter");
                return;
            }
            self.current().children.push(node);
        }
    }

    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack
            .pop()
            .unwrap_or_else(|| Node::new(NodeKind::Document))
    }
}

fn process_event(event: Event, tree: &mut TreeBuilder) {
    match event {
        Event::Start(tag) => tree.open(kind_for_tag(tag)),
        Event::End(_) => tree.close(),

        Event::Text(text) => tree.text(&text),

        // Inline code keeps its literal so links wrapping it still have text
        Event::Code(code) => tree.leaf(Node::with_children(
            NodeKind::CodeSpan,
            vec![Node::text_node(code.into_string())],
        )),
        Event::InlineMath(math) | Event::DisplayMath(math) => tree.leaf(Node::with_children(
            NodeKind::Math,
            vec![Node::text_node(math.into_string())],
        )),
        Event::Html(html) | Event::InlineHtml(html) => tree.leaf(Node::with_children(
            NodeKind::RawHtml,
            vec![Node::text_node(html.into_string())],
        )),
        Event::FootnoteReference(_) => tree.leaf(Node::new(NodeKind::FootnoteReference)),
        Event::TaskListMarker(_) => tree.leaf(Node::new(NodeKind::TaskCheckBox)),

        Event::SoftBreak => tree.line_break(false),
        Event::HardBreak => tree.line_break(true),

        Event::Rule => tree.leaf(Node::new(NodeKind::ThematicBreak)),
    }
}

fn kind_for_tag(tag: Tag) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { level, .. } => NodeKind::Heading {
            level: heading_level_to_u8(level),
        },
        Tag::BlockQuote(_) => NodeKind::Blockquote,
        Tag::CodeBlock(_) => NodeKind::CodeBlock,
        Tag::HtmlBlock => NodeKind::HtmlBlock,
        Tag::List(first_item) => NodeKind::List {
            ordered: first_item.is_some(),
        },
        Tag::Item => NodeKind::ListItem,
        Tag::FootnoteDefinition(_) => NodeKind::FootnoteDefinition,
        Tag::Table(_) => NodeKind::Table,
        Tag::TableHead => NodeKind::TableHead,
        Tag::TableRow => NodeKind::TableRow,
        Tag::TableCell => NodeKind::TableCell,
        Tag::Emphasis => NodeKind::Emphasis { level: 1 },
        Tag::Strong => NodeKind::Emphasis { level: 2 },
        Tag::Strikethrough => NodeKind::Strikethrough,
        Tag::Link { dest_url, .. } => NodeKind::Link {
            destination: dest_url.into_string(),
        },
        Tag::Image { .. } => NodeKind::Image,
        Tag::MetadataBlock(_) => NodeKind::MetadataBlock,
        // Extensions that are never enabled here
        other => NodeKind::Other(tag_name(&other)),
    }
}

fn tag_name(tag: &Tag) -> String {
    format!("{tag:?}")
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect()
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
