//! Markdown rendering for a restricted dialect.
//!
//! Supports bold, italic, inline code, fenced code blocks, ATX headings,
//! bullet and numbered lists (both rendered as bullets) and paragraphs.
//! Parsing produces a [`Block`] sequence; [`MarkdownRenderer`] turns it into
//! maud markup decorated for a light or dark [`Variant`].

mod block;
mod inline;
mod parser;
mod renderer;
mod variant;

pub use block::{Block, Span, plain_text};
pub use renderer::{MarkdownRenderer, render_blocks};
pub use variant::{Decoration, UnknownVariant, Variant};

/// Parses markdown into decorated blocks.
///
/// Pure and total: identical arguments always produce equal output and no
/// input can make it fail.
pub fn render(content: &str, variant: Variant) -> Vec<Block> {
    parser::parse(content, variant)
}
