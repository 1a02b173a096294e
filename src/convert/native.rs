//! PDF rendering of the full document model.

use super::pdf::{
    encode_win_ansi, text_width, wrap_words, write_pdf, Font, PageCursor, PdfPage,
    StreamCompression, MARGIN, PAGE_WIDTH,
};
use super::{ConversionInput, ConvertOptions, SecondaryConverter};
use crate::error::{Error, Result};
use crate::model::{Alignment, Block, BlockRole, Document, Paragraph};
use crate::references::plain_text;

const BULLET_PREFIX: &str = "• ";

/// Lays out every block of the document with the standard Times fonts.
///
/// Only WinAnsi text can be set this way, so Arabic reports fail here and
/// fall through to the next converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePdfConverter;

impl NativePdfConverter {
    /// Create a new native converter.
    pub fn new() -> Self {
        Self
    }
}

impl SecondaryConverter for NativePdfConverter {
    fn name(&self) -> &str {
        "native-pdf"
    }

    fn convert(&self, input: &ConversionInput<'_>, _options: &ConvertOptions) -> Result<Vec<u8>> {
        let pages = layout(input.document).map_err(|c| {
            Error::conversion(
                self.name(),
                format!(
                    "character '{}' (U+{:04X}) is not available in the standard fonts",
                    c, c as u32
                ),
            )
        })?;
        log::debug!("Native PDF layout produced {} pages", pages.len());

        let metadata = &input.document.metadata;
        write_pdf(
            &pages,
            &metadata.title,
            &metadata.authors.join(", "),
            StreamCompression::Document,
        )
    }
}

/// Lay the document out into pages, or return the first unencodable character.
fn layout(doc: &Document) -> std::result::Result<Vec<PdfPage>, char> {
    let mut cursor = PageCursor::new();

    for block in &doc.blocks {
        match block {
            Block::PageBreak => cursor.break_page(),
            Block::Heading { paragraph, .. } => place_paragraph(&mut cursor, paragraph, "")?,
            Block::Paragraph(p) => place_paragraph(&mut cursor, p, "")?,
            Block::Bullet(p) => place_paragraph(&mut cursor, p, BULLET_PREFIX)?,
        }
    }

    Ok(cursor.finish())
}

fn place_paragraph(
    cursor: &mut PageCursor,
    para: &Paragraph,
    prefix: &str,
) -> std::result::Result<(), char> {
    if para.is_empty() {
        return Ok(());
    }
    let style = &para.style;
    let size = style.font_size;
    let leading = size * style.line_spacing;
    let font = if style.bold { Font::Bold } else { Font::Regular };
    let indent = style.hanging_indent.unwrap_or(0.0);
    let full_width = PAGE_WIDTH - 2.0 * MARGIN;

    let text = if para.role == BlockRole::Reference {
        plain_text(&para.text)
    } else {
        para.text.clone()
    };
    let text = format!("{}{}", prefix, text);

    cursor.skip(style.space_before);
    let lines = wrap_words(&text, size, full_width, full_width - indent);
    for (i, line) in lines.iter().enumerate() {
        let offset = if i == 0 { 0.0 } else { indent };
        let width = text_width(line, size);
        let x = match style.alignment {
            Alignment::Left | Alignment::Justify => MARGIN + offset,
            Alignment::Center => ((PAGE_WIDTH - width) / 2.0).max(MARGIN),
            Alignment::Right => (PAGE_WIDTH - MARGIN - width).max(MARGIN),
        };
        cursor.place(font, size, leading, x, encode_win_ansi(line)?);
    }
    cursor.skip(style.space_after);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::TextDirection;
    use crate::model::{Metadata, StyleConfig};
    use crate::spec::{Language, ReferenceStyle};

    fn doc(language: Language) -> Document {
        Document::new(Metadata {
            title: "Water Policy".to_string(),
            authors: vec!["Sara".to_string()],
            professor: "Dr. Ali".to_string(),
            institution: "U, C, D".to_string(),
            language,
            reference_style: ReferenceStyle::Apa,
            target_pages: 5,
            year: 2024,
            created: None,
        })
    }

    #[test]
    fn test_layout_breaks_pages() {
        let style = StyleConfig::default();
        let mut doc = doc(Language::En);
        doc.push(Block::heading(0, "Water Policy", BlockRole::Cover, style.title(TextDirection::Ltr)));
        doc.push(Block::PageBreak);
        doc.push(Block::heading(1, "Introduction", BlockRole::Body, style.heading(1, TextDirection::Ltr)));
        doc.push(Block::bullet("A point", BlockRole::Body, style.body(TextDirection::Ltr)));
        doc.push(Block::PageBreak);
        doc.push(Block::paragraph(
            "Smith, J. (2020). Title. *Journal*, 1, 1-2.",
            BlockRole::Reference,
            style.reference(TextDirection::Ltr),
        ));

        let pages = layout(&doc).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].lines[1].bytes, b"\x95 A point".to_vec());
        assert!(!pages[2].lines[0].bytes.contains(&b'*'));
        // Centered title sits right of the margin.
        assert!(pages[0].lines[0].x > MARGIN);
    }

    #[test]
    fn test_reference_keeps_literal_asterisk() {
        let style = StyleConfig::default();
        let mut doc = doc(Language::En);
        doc.push(Block::paragraph(
            "Lee, K. (2019). *C\\*-Algebras*.",
            BlockRole::Reference,
            style.reference(TextDirection::Ltr),
        ));

        let pages = layout(&doc).unwrap();
        assert_eq!(pages[0].lines[0].bytes, b"Lee, K. (2019). C*-Algebras.".to_vec());
    }

    #[test]
    fn test_long_paragraph_overflows() {
        let style = StyleConfig::default();
        let mut doc = doc(Language::En);
        let text = "word ".repeat(2000);
        doc.push(Block::paragraph(text, BlockRole::Body, style.body(TextDirection::Ltr)));

        let pages = layout(&doc).unwrap();
        assert!(pages.len() > 1);
        for page in &pages {
            assert!(page.lines.iter().all(|l| l.y >= MARGIN));
        }
    }

    #[test]
    fn test_hanging_indent() {
        let style = StyleConfig::default();
        let mut doc = doc(Language::En);
        let entry = "Author ".repeat(40);
        doc.push(Block::paragraph(entry, BlockRole::Reference, style.reference(TextDirection::Ltr)));

        let pages = layout(&doc).unwrap();
        let lines = &pages[0].lines;
        assert!(lines.len() > 1);
        assert_eq!(lines[0].x, MARGIN);
        assert_eq!(lines[1].x, MARGIN + 36.0);
    }

    #[test]
    fn test_arabic_is_rejected() {
        let style = StyleConfig::default();
        let mut doc = doc(Language::Ar);
        doc.push(Block::paragraph("المقدمة", BlockRole::Body, style.body(TextDirection::Rtl)));
        assert_eq!(layout(&doc).unwrap_err(), 'ا');
    }
}
