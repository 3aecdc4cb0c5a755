use std::fmt;

/// Literal text plus the line break that followed it in the source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNode {
    pub content: String,
    pub soft_line_break: bool,
    pub hard_line_break: bool,
}

impl TextNode {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn has_line_break(&self) -> bool {
        self.soft_line_break || self.hard_line_break
    }
}

/// Every node kind the parser can produce.
///
/// Only the first group has a rendering rule; the rest exist so the renderer
/// can reject them by name instead of losing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Heading { level: u8 },
    Paragraph,
    /// Inline content of a tight list item, which has no paragraph of its own
    TextBlock,
    Blockquote,
    List { ordered: bool },
    ListItem,
    Text(TextNode),
    /// Level 1 is `*light*`, level 2 is `**strong**`
    Emphasis { level: u8 },
    Link { destination: String },

    CodeBlock,
    CodeSpan,
    HtmlBlock,
    RawHtml,
    Image,
    ThematicBreak,
    Table,
    TableHead,
    TableRow,
    TableCell,
    Strikethrough,
    TaskCheckBox,
    FootnoteDefinition,
    FootnoteReference,
    Math,
    MetadataBlock,
    Other(String),
}

impl NodeKind {
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::TextBlock => "TextBlock",
            NodeKind::Blockquote => "Blockquote",
            NodeKind::List { .. } => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::Text(_) => "Text",
            NodeKind::Emphasis { .. } => "Emphasis",
            NodeKind::Link { .. } => "Link",
            NodeKind::CodeBlock => "CodeBlock",
            NodeKind::CodeSpan => "CodeSpan",
            NodeKind::HtmlBlock => "HtmlBlock",
            NodeKind::RawHtml => "RawHtml",
            NodeKind::Image => "Image",
            NodeKind::ThematicBreak => "ThematicBreak",
            NodeKind::Table => "Table",
            NodeKind::TableHead => "TableHead",
            NodeKind::TableRow => "TableRow",
            NodeKind::TableCell => "TableCell",
            NodeKind::Strikethrough => "Strikethrough",
            NodeKind::TaskCheckBox => "TaskCheckBox",
            NodeKind::FootnoteDefinition => "FootnoteDefinition",
            NodeKind::FootnoteReference => "FootnoteReference",
            NodeKind::Math => "Math",
            NodeKind::MetadataBlock => "MetadataBlock",
            NodeKind::Other(name) => name,
        }
    }

    /// Whether the kind lives inside a paragraph rather than alongside one
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            NodeKind::Text(_)
                | NodeKind::Emphasis { .. }
                | NodeKind::Link { .. }
                | NodeKind::CodeSpan
                | NodeKind::RawHtml
                | NodeKind::Image
                | NodeKind::Strikethrough
                | NodeKind::TaskCheckBox
                | NodeKind::FootnoteReference
                | NodeKind::Math
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the parsed markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    pub fn text_node(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(TextNode::new(content)))
    }

    /// The raw text covered by this node: a text literal, or the
    /// concatenation of every descendant literal.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let NodeKind::Text(text) = &self.kind {
            out.push_str(&text.content);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}
