//! Fence and line segmentation.
//!
//! The document is split on the literal fence delimiter first. Because the
//! split consumes the delimiter, segments alternate between outside text
//! (even indices) and fence contents (odd indices). An odd number of fences
//! therefore classifies the trailing segment as code; fences are not
//! rebalanced.

use once_cell::sync::Lazy;
use regex::Regex;

use super::block::{Block, Span};
use super::inline;
use super::variant::Variant;

const FENCE: &str = "```";

// Blank characters: Unicode white space plus the byte order mark, minus NEL.
// Line text excludes the line and paragraph separators as well as CR/LF.
static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#{1,6})[[\s\x{FEFF}]&&[^\x{85}]]+([^\n\r\x{2028}\x{2029}]*)$")
        .expect("heading pattern")
});
static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*][[\s\x{FEFF}]&&[^\x{85}]]+").expect("bullet pattern"));
static NUMBERED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.[[\s\x{FEFF}]&&[^\x{85}]]+").expect("numbered pattern")
});

/// Parses markdown into blocks decorated for the given variant.
///
/// Total over all inputs: malformed markup degrades to paragraphs.
pub fn parse(content: &str, variant: Variant) -> Vec<Block> {
    let mut blocks = Vec::new();

    for (index, segment) in content.split(FENCE).enumerate() {
        if index % 2 == 1 {
            blocks.push(Block::CodeBlock {
                text: trim_blank(segment).to_string(),
                decoration: variant.code_block(),
            });
        } else {
            parse_segment(segment, variant, &mut blocks);
        }
    }

    blocks
}

/// Walks the lines of one non-fence segment.
fn parse_segment(segment: &str, variant: Variant, blocks: &mut Vec<Block>) {
    let mut pending: Vec<Vec<Span>> = Vec::new();

    for line in segment.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let trimmed = trim_blank(line);

        if trimmed.is_empty() {
            flush_list(&mut pending, blocks);
            continue;
        }

        if let Some(caps) = HEADING.captures(trimmed) {
            flush_list(&mut pending, blocks);
            let level = caps[1].len().min(6) as u8;
            blocks.push(Block::Heading {
                level,
                content: inline::format(&caps[2]),
                decoration: variant.heading(),
            });
            continue;
        }

        if let Some(item) = list_item(trimmed) {
            pending.push(inline::format(item));
            continue;
        }

        flush_list(&mut pending, blocks);
        blocks.push(Block::Paragraph {
            content: inline::format(line),
            decoration: variant.paragraph(),
        });
    }

    flush_list(&mut pending, blocks);
}

/// Trims white space and byte order marks from both ends.
///
/// `str::trim` keeps a leading U+FEFF, so a BOM-prefixed file would lose its
/// first heading or list item.
fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank)
}

fn is_blank(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Strips a bullet or numbered marker; numbering is discarded.
fn list_item(trimmed: &str) -> Option<&str> {
    BULLET
        .find(trimmed)
        .or_else(|| NUMBERED.find(trimmed))
        .map(|marker| &trimmed[marker.end()..])
}

fn flush_list(pending: &mut Vec<Vec<Span>>, blocks: &mut Vec<Block>) {
    if pending.is_empty() {
        return;
    }
    blocks.push(Block::List {
        items: std::mem::take(pending),
    });
}
