//! Plain text rendering for report documents.

use crate::error::Result;
use crate::model::{Block, BlockRole, Document};
use crate::references::plain_text;

use super::RenderOptions;

/// Convert a document to plain text.
///
/// Headings are underlined, bullets use the list marker, reference emphasis
/// markers are dropped and page breaks become form feeds.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    for block in &doc.blocks {
        match block {
            Block::Heading { level, paragraph } => {
                let text = paragraph.text.trim();
                if text.is_empty() {
                    continue;
                }
                let rule = if *level <= 1 { '=' } else { '-' };
                output.push_str(text);
                output.push('\n');
                output.extend(std::iter::repeat(rule).take(text.chars().count()));
                output.push_str("\n\n");
            }
            Block::Paragraph(p) => {
                if p.is_empty() {
                    continue;
                }
                let text = if p.role == BlockRole::Reference {
                    plain_text(&p.text)
                } else {
                    p.text.clone()
                };
                output.push_str(&wrap(&text, options.line_width));
                output.push_str("\n\n");
            }
            Block::Bullet(p) => {
                if p.is_empty() {
                    continue;
                }
                let line = format!("{} {}", options.list_marker, p.text);
                output.push_str(&wrap(&line, options.line_width));
                output.push('\n');
            }
            Block::PageBreak => {
                if !output.ends_with("\n\n") {
                    output.push('\n');
                }
                output.push_str("\x0C\n");
            }
        }
    }

    Ok(output.trim().to_string() + "\n")
}

/// Greedy word wrap; `width == 0` leaves the text alone.
fn wrap(text: &str, width: u32) -> String {
    if width == 0 {
        return text.to_string();
    }
    let width = width as usize;
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}
