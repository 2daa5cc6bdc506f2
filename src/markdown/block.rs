//! Block and inline types produced by the markdown parser.

use super::variant::Decoration;

/// Inline fragment of a heading, paragraph, or list item.
///
/// Styled fragments carry their text with delimiters stripped. Plain
/// fragments are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
}

impl Span {
    /// Returns the literal text of the fragment without delimiters.
    pub fn text(&self) -> &str {
        match self {
            Span::Text(t) | Span::Bold(t) | Span::Italic(t) | Span::Code(t) => t,
        }
    }

    /// Returns true for fragments not touched by any formatting pass.
    pub fn is_plain(&self) -> bool {
        matches!(self, Span::Text(_))
    }
}

/// Structural unit of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Fenced region, trimmed, never inline formatted.
    CodeBlock {
        text: String,
        decoration: Decoration,
    },
    Heading {
        level: u8,
        content: Vec<Span>,
        decoration: Decoration,
    },
    /// Coalesced run of bullet or numbered items, rendered unordered.
    List { items: Vec<Vec<Span>> },
    Paragraph {
        content: Vec<Span>,
        decoration: Decoration,
    },
}

impl Block {
    /// Returns the variant decoration, if this block kind carries one.
    pub fn decoration(&self) -> Option<Decoration> {
        match self {
            Block::CodeBlock { decoration, .. }
            | Block::Heading { decoration, .. }
            | Block::Paragraph { decoration, .. } => Some(*decoration),
            Block::List { .. } => None,
        }
    }
}

/// Concatenates the literal text of all fragments.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}
