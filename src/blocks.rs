//! Slack Block Kit rich text values.
//!
//! These mirror the `rich_text` block schema closely enough that serializing
//! them with `serde_json` yields a payload Slack accepts as-is.

use std::ops::{BitOr, BitOrAssign};

use serde::Serialize;

/// Text styling flags; the default is "no style".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        bold: false,
        italic: false,
    };
    pub const BOLD: Style = Style {
        bold: true,
        italic: false,
    };
    pub const ITALIC: Style = Style {
        bold: false,
        italic: true,
    };

    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

impl BitOr for Style {
    type Output = Style;

    fn bitor(self, rhs: Style) -> Style {
        Style {
            bold: self.bold || rhs.bold,
            italic: self.italic || rhs.italic,
        }
    }
}

impl BitOrAssign for Style {
    fn bitor_assign(&mut self, rhs: Style) {
        *self = *self | rhs;
    }
}

/// Leaf content of a section or quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineElement {
    Text {
        text: String,
        #[serde(skip_serializing_if = "Style::is_plain")]
        style: Style,
    },
    Link {
        url: String,
        text: String,
        #[serde(skip_serializing_if = "Style::is_plain")]
        style: Style,
    },
}

impl InlineElement {
    pub fn text(text: impl Into<String>, style: Style) -> Self {
        InlineElement::Text {
            text: text.into(),
            style,
        }
    }

    pub fn link(url: impl Into<String>, text: impl Into<String>, style: Style) -> Self {
        InlineElement::Link {
            url: url.into(),
            text: text.into(),
            style,
        }
    }

    pub fn style(&self) -> Style {
        match self {
            InlineElement::Text { style, .. } | InlineElement::Link { style, .. } => *style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    Bullet,
    Ordered,
}

/// Structural content of a rich text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum RichTextElement {
    #[serde(rename = "rich_text_section")]
    Section { elements: Vec<InlineElement> },
    /// A run of list items at one depth. Nested lists follow as siblings
    /// with a larger `indent`, never as children.
    #[serde(rename = "rich_text_list")]
    List {
        style: ListStyle,
        indent: usize,
        elements: Vec<RichTextElement>,
    },
    #[serde(rename = "rich_text_quote")]
    Quote { elements: Vec<InlineElement> },
}

impl RichTextElement {
    /// The schema's `type` tag, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            RichTextElement::Section { .. } => "rich_text_section",
            RichTextElement::List { .. } => "rich_text_list",
            RichTextElement::Quote { .. } => "rich_text_quote",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "rich_text")]
pub struct RichTextBlock {
    pub elements: Vec<RichTextElement>,
}

impl RichTextBlock {
    pub fn new(elements: Vec<RichTextElement>) -> Self {
        Self { elements }
    }

    pub fn section(elements: Vec<InlineElement>) -> Self {
        Self::new(vec![RichTextElement::Section { elements }])
    }
}

/// The `{"blocks": [...]}` payload handed to Slack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    pub blocks: Vec<RichTextBlock>,
}

impl Message {
    pub fn new(blocks: Vec<RichTextBlock>) -> Self {
        Self { blocks }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
