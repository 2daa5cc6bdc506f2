//! Markup stage: blocks to HTML nodes.

use anyhow::{Context, Result};
use maud::{Markup, html};
use std::path::Path;

use super::block::{Block, Span};
use super::parser;
use super::variant::Variant;

const CODE_BLOCK_BASE: &str = "rounded-lg p-3 overflow-auto text-sm";
const HEADING_BASE: &str = "font-bold mt-3 mb-1";
const PARAGRAPH_BASE: &str = "mb-2";
const LIST_CLASS: &str = "list-disc pl-6 my-2 space-y-1";
const INLINE_CODE_CLASS: &str = "px-1 py-0.5 bg-slate-100 rounded text-slate-800";

/// Renders the restricted markdown dialect to HTML markup.
///
/// Parsing is delegated to [`parser::parse`]; this type only decides how
/// each block and inline fragment is materialized. All text goes through
/// maud escaping, so document content can never inject markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    variant: Variant,
}

impl MarkdownRenderer {
    /// Creates renderer for the given presentation variant.
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Parses and renders markdown content.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown source, any string
    ///
    /// # Returns
    ///
    /// Markup for the block sequence, wrapped in nothing
    pub fn render(&self, content: &str) -> Markup {
        let blocks = parser::parse(content, self.variant);
        log::debug!(
            "Rendered {} bytes of markdown into {} blocks ({})",
            content.len(),
            blocks.len(),
            self.variant
        );
        render_blocks(&blocks)
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<Markup> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }
}

/// Materializes already parsed blocks in order.
pub fn render_blocks(blocks: &[Block]) -> Markup {
    html! {
        @for block in blocks {
            (render_block(block))
        }
    }
}

fn render_block(block: &Block) -> Markup {
    match block {
        Block::CodeBlock { text, decoration } => html! {
            pre class=(format!("{} {}", CODE_BLOCK_BASE, decoration.classes())) {
                code { (text) }
            }
        },
        Block::Heading {
            level,
            content,
            decoration,
        } => {
            let class = format!("{} {}", HEADING_BASE, decoration.classes());
            let inner = render_spans(content);
            match *level {
                1 => html! { h1 class=(class) { (inner) } },
                2 => html! { h2 class=(class) { (inner) } },
                3 => html! { h3 class=(class) { (inner) } },
                4 => html! { h4 class=(class) { (inner) } },
                5 => html! { h5 class=(class) { (inner) } },
                _ => html! { h6 class=(class) { (inner) } },
            }
        }
        Block::List { items } => html! {
            ul class=(LIST_CLASS) {
                @for item in items {
                    li { (render_spans(item)) }
                }
            }
        },
        Block::Paragraph {
            content,
            decoration,
        } => html! {
            p class=(format!("{} {}", PARAGRAPH_BASE, decoration.classes())) {
                (render_spans(content))
            }
        },
    }
}

fn render_spans(spans: &[Span]) -> Markup {
    html! {
        @for span in spans {
            @match span {
                Span::Text(t) => { (t) }
                Span::Bold(t) => { strong { (t) } }
                Span::Italic(t) => { em { (t) } }
                Span::Code(t) => { code class=(INLINE_CODE_CLASS) { (t) } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_document() {
        // Arrange
        let renderer = MarkdownRenderer::new(Variant::Light);

        // Act
        let html = renderer.render("").into_string();

        // Assert
        assert!(html.is_empty(), "Empty markdown should render nothing");
    }

    #[test]
    fn test_render_heading_dark() {
        // Arrange
        let renderer = MarkdownRenderer::new(Variant::Dark);

        // Act
        let html = renderer.render("## Holding").into_string();

        // Assert
        assert_eq!(
            html,
            r#"<h2 class="font-bold mt-3 mb-1 text-white">Holding</h2>"#
        );
    }

    #[test]
    fn test_render_list_and_paragraph() {
        // Arrange
        let renderer = MarkdownRenderer::new(Variant::Light);

        // Act
        let html = renderer.render("- a\n- *b*\n\nc").into_string();

        // Assert
        assert_eq!(
            html,
            concat!(
                r#"<ul class="list-disc pl-6 my-2 space-y-1"><li>a</li><li><em>b</em></li></ul>"#,
                r#"<p class="mb-2 text-slate-800">c</p>"#
            )
        );
    }

    #[test]
    fn test_render_code_block_light() {
        // Arrange
        let renderer = MarkdownRenderer::new(Variant::Light);

        // Act
        let html = renderer.render("```\nlet x = 1;\n```").into_string();

        // Assert
        assert_eq!(
            html,
            r#"<pre class="rounded-lg p-3 overflow-auto text-sm bg-slate-900 text-slate-100"><code>let x = 1;</code></pre>"#
        );
    }

    #[test]
    fn test_render_inline_code_class() {
        // Arrange
        let renderer = MarkdownRenderer::default();

        // Act
        let html = renderer.render("see `42 U.S.C.`").into_string();

        // Assert
        assert!(
            html.contains(r#"<code class="px-1 py-0.5 bg-slate-100 rounded text-slate-800">42 U.S.C.</code>"#),
            "Inline code should carry fixed class: {}",
            html
        );
    }

    #[test]
    fn test_render_escapes_html() {
        // Arrange
        let renderer = MarkdownRenderer::default();

        // Act
        let html = renderer
            .render("<script>alert('x')</script>\n```\n<b>&</b>\n```")
            .into_string();

        // Assert
        assert!(!html.contains("<script>"), "Raw HTML must be escaped");
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
    }

    #[test]
    fn test_render_file_missing() {
        // Arrange
        let renderer = MarkdownRenderer::default();

        // Act
        let result = renderer.render_file("/nonexistent/brief.md");

        // Assert
        assert!(result.is_err(), "Missing file should error");
    }

    #[test]
    fn test_render_large_document() {
        // Arrange
        let renderer = MarkdownRenderer::new(Variant::Dark);
        let section = "# Opinion\n\nThe **court** held *per curiam*.\n\n- one\n- two\n\n```\ncite\n```\n";
        let large = section.repeat(5_000);

        // Act
        let html = renderer.render(&large).into_string();

        // Assert
        assert_eq!(html.matches("<h1").count(), 5_000);
        assert_eq!(html.matches("<pre").count(), 5_000);
    }
}
