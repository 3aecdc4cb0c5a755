mod ast;
mod blocks;
mod config;
mod error;
mod inline;
mod list;
mod parser;
mod quote;
mod render;

pub use ast::{Node, NodeKind, TextNode};
pub use blocks::{InlineElement, ListStyle, Message, RichTextBlock, RichTextElement, Style};
pub use config::{Config, ConfigError, LoggingConfig, OutputConfig, ParserConfig};
pub use error::{RenderError, RenderResult};
pub use parser::{parse, parse_with_config};
pub use render::{PARAGRAPH_BREAK, render};

/// Convert markdown to rich text blocks using default config.
pub fn markdown_to_blocks(markdown: &str) -> RenderResult<Vec<RichTextBlock>> {
    markdown_to_blocks_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to rich text blocks with custom config.
pub fn markdown_to_blocks_with_config(
    markdown: &str,
    config: &Config,
) -> RenderResult<Vec<RichTextBlock>> {
    let document = parse_with_config(markdown, &config.parser);
    render(&document)
}

/// Convert markdown to a `{"blocks": [...]}` message using default config.
pub fn markdown_to_message(markdown: &str) -> RenderResult<Message> {
    markdown_to_blocks(markdown).map(Message::new)
}

/// Convert markdown to a `{"blocks": [...]}` message with custom config.
pub fn markdown_to_message_with_config(markdown: &str, config: &Config) -> RenderResult<Message> {
    markdown_to_blocks_with_config(markdown, config).map(Message::new)
}
