//! Inline formatting passes.
//!
//! Three independent delimiter passes run in a fixed order: bold, italic,
//! then inline code. Each pass splits a plain fragment around its pattern
//! matches, then styles every resulting piece that both starts and ends with
//! the delimiter, whether or not the pattern matched it. A styled fragment is
//! never re-scanned.
//!
//! Pieces too short to hold two delimiters style as empty. So `***x***`
//! becomes an empty italic, bold `x`, and another empty italic: the bold pass
//! leaves a lone `*` on each side and the italic pass claims each one.

use once_cell::sync::Lazy;
use regex::Regex;

use super::block::Span;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*[^*]+\*\*").expect("bold pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*[^*]+\*").expect("italic pattern"));
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`]+`").expect("code pattern"));

/// Applies bold, italic, and code passes to a line of text.
///
/// # Arguments
///
/// * `text`: Heading, paragraph, or list item text
///
/// # Returns
///
/// Fragments in source order. Empty input yields no fragments.
pub fn format(text: &str) -> Vec<Span> {
    let spans = vec![Span::Text(text.to_string())];
    let spans = apply(spans, &BOLD, "**", Span::Bold);
    let spans = apply(spans, &ITALIC, "*", Span::Italic);
    apply(spans, &CODE, "`", Span::Code)
}

fn apply(
    spans: Vec<Span>,
    pattern: &Regex,
    delimiter: &str,
    style: fn(String) -> Span,
) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            Span::Text(text) => split_into(&text, pattern, delimiter, style, &mut out),
            styled => out.push(styled),
        }
    }
    out
}

/// Splits `text` around pattern matches, keeping both the matches and the
/// pieces between them.
fn split_into(
    text: &str,
    pattern: &Regex,
    delimiter: &str,
    style: fn(String) -> Span,
    out: &mut Vec<Span>,
) {
    let mut last = 0;
    for m in pattern.find_iter(text) {
        push_piece(out, &text[last..m.start()], delimiter, style);
        push_piece(out, m.as_str(), delimiter, style);
        last = m.end();
    }
    push_piece(out, &text[last..], delimiter, style);
}

fn push_piece(out: &mut Vec<Span>, piece: &str, delimiter: &str, style: fn(String) -> Span) {
    if piece.is_empty() {
        return;
    }
    if piece.starts_with(delimiter) && piece.ends_with(delimiter) {
        let width = delimiter.len();
        // Delimiters are ASCII, so slicing by width stays on char boundaries
        let inner = if piece.len() >= 2 * width {
            &piece[width..piece.len() - width]
        } else {
            ""
        };
        out.push(style(inner.to_string()));
    } else {
        out.push(Span::Text(piece.to_string()));
    }
}
