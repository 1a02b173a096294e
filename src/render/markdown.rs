//! Markdown rendering for report documents.

use crate::error::Result;
use crate::model::{Alignment, Block, BlockRole, Document, Paragraph};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
///
/// Left-aligned left-to-right blocks are plain Markdown. Centered, right-aligned
/// and right-to-left blocks are wrapped in a `<div>` carrying `align` and `dir`
/// so pandoc and HTML viewers keep the layout.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
            output.push('\n');
        }

        for block in &doc.blocks {
            self.render_block(&mut output, block);
        }

        Ok(output.trim().to_string() + "\n")
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Heading { level, paragraph } => {
                if paragraph.is_empty() {
                    return;
                }
                let text = escape_markdown(&paragraph.text);
                let line = if *level == 0 {
                    format!("**{}**", text)
                } else {
                    format!("{} {}", "#".repeat(*level as usize), text)
                };
                self.write_wrapped(output, paragraph, &line);
            }
            Block::Paragraph(p) => {
                if p.is_empty() {
                    return;
                }
                // Reference entries are already escaped inline Markdown.
                let text = if p.role == BlockRole::Reference {
                    p.text.clone()
                } else {
                    escape_markdown(&p.text)
                };
                self.write_wrapped(output, p, &text);
            }
            Block::Bullet(p) => {
                if p.is_empty() {
                    return;
                }
                let line = format!("{} {}", self.options.list_marker, escape_markdown(&p.text));
                self.write_wrapped(output, p, &line);
            }
            Block::PageBreak => {
                output.push_str(&self.options.page_break_marker);
                output.push_str("\n\n");
            }
        }
    }

    fn write_wrapped(&self, output: &mut String, para: &Paragraph, content: &str) {
        let style = &para.style;
        let needs_div = style.direction.is_rtl()
            || matches!(style.alignment, Alignment::Center | Alignment::Right);

        if needs_div {
            output.push_str(&format!(
                "<div align=\"{}\" dir=\"{}\">\n\n{}\n\n</div>\n\n",
                style.alignment.as_html(),
                style.direction.as_html(),
                content
            ));
        } else {
            output.push_str(content);
            output.push_str("\n\n");
        }
    }
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
pub(crate) fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::TextDirection;
    use crate::model::{Metadata, StyleConfig};
    use crate::spec::{Language, ReferenceStyle};

    fn empty_doc() -> Document {
        Document::new(Metadata {
            title: "Test Doc".to_string(),
            authors: vec!["Sara".to_string()],
            professor: "Dr. Ali".to_string(),
            institution: "U, C, D".to_string(),
            language: Language::En,
            reference_style: ReferenceStyle::Apa,
            target_pages: 5,
            year: 2024,
            created: None,
        })
    }

    fn plain() -> RenderOptions {
        RenderOptions::new().with_frontmatter(false)
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("[link]"), "\\[link\\]");
    }

    #[test]
    fn test_render_headings_and_bullets() {
        let style = StyleConfig::default();
        let mut doc = empty_doc();
        doc.push(Block::heading(1, "Introduction", BlockRole::Body, style.heading(1, TextDirection::Ltr)));
        doc.push(Block::heading(2, "Key Findings", BlockRole::Body, style.heading(2, TextDirection::Ltr)));
        doc.push(Block::bullet("First point", BlockRole::Body, style.contents_entry(TextDirection::Ltr)));

        let md = to_markdown(&doc, &plain()).unwrap();
        assert!(md.contains("# Introduction\n\n"));
        assert!(md.contains("## Key Findings\n\n"));
        assert!(md.contains("- First point\n"));
    }

    #[test]
    fn test_centered_and_rtl_blocks_wrapped() {
        let style = StyleConfig::default();
        let mut doc = empty_doc();
        doc.push(Block::heading(0, "Report Title", BlockRole::Cover, style.title(TextDirection::Ltr)));
        doc.push(Block::paragraph("المقدمة", BlockRole::Body, style.body(TextDirection::Rtl)));

        let md = to_markdown(&doc, &plain()).unwrap();
        assert!(md.contains("<div align=\"center\" dir=\"ltr\">\n\n**Report Title**\n\n</div>"));
        assert!(md.contains("<div align=\"right\" dir=\"rtl\">\n\nالمقدمة\n\n</div>"));
    }

    #[test]
    fn test_page_break_and_references() {
        let style = StyleConfig::default();
        let mut doc = empty_doc();
        doc.push(Block::PageBreak);
        doc.push(Block::paragraph(
            "Smith (2020). Title. *Journal*, 1, 1-2.",
            BlockRole::Reference,
            style.reference(TextDirection::Ltr),
        ));

        let md = to_markdown(&doc, &plain()).unwrap();
        assert!(md.starts_with("\\newpage\n\n"));
        assert!(md.contains("*Journal*"));
    }

    #[test]
    fn test_render_with_frontmatter() {
        let md = to_markdown(&empty_doc(), &RenderOptions::new()).unwrap();
        assert!(md.starts_with("---\n"));
        assert!(md.contains("title: \"Test Doc\""));
    }
}
