mod config;
mod error;
mod escape;
mod html;
mod inline;
mod loader;
mod node;
mod parser;

pub use config::{Config, ParserConfig, PathsConfig, StampConfig};
pub use error::{Error, Result};
pub use escape::escape_html;
pub use html::STYLESHEET;
pub use inline::{CODE_SPAN_PATTERN, InlineTagger};
pub use loader::{Stamp, emit, load, stamp_document};
pub use node::{Node, NodeId, NodeKind, Tree};
pub use parser::{ParseOptions, parse_with_tagger};

use std::path::Path;

use chrono::NaiveDate;

/// Parse markdown text into a tree. Constructs not followed by a blank line
/// or closing fence before the end of input are dropped.
pub fn parse(markdown: &str) -> Tree {
    parser::parse(markdown, &ParseOptions::default())
}

/// Parse markdown text into a tree with explicit options.
pub fn parse_with_options(markdown: &str, options: &ParseOptions) -> Tree {
    parser::parse(markdown, options)
}

/// Render a tree as a complete HTML document.
pub fn render(tree: &Tree) -> String {
    html::tree_to_html(tree)
}

/// Convert markdown to HTML using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    render(&parse(markdown))
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    render(&parse_with_options(markdown, &config.parser.options()))
}

/// Read `input`, stamp it dated `date`, convert it, and write `output`.
pub fn convert_file(input: &Path, output: &Path, config: &Config, date: NaiveDate) -> Result<()> {
    let stamp = config
        .stamp
        .enabled
        .then(|| Stamp::new(&config.stamp, date));
    let markdown = load(input, stamp.as_ref())?;
    let html = markdown_to_html_with_config(&markdown, config);
    emit(output, &html)
}
