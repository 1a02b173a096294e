//! Last-resort PDF built from the request alone.

use super::pdf::{
    encode_win_ansi_lossy, text_width, wrap_words, write_pdf, Font, PageCursor, PdfPage,
    StreamCompression, MARGIN, PAGE_WIDTH,
};
use super::{ConversionInput, ConvertOptions, SecondaryConverter};
use crate::content::templates;
use crate::error::Result;
use crate::spec::{Language, ReportSpec};

const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 12.0;
const LEADING: f32 = 1.5;

/// Summary of the request: title, cover fields and targets.
///
/// Labels are English and characters outside WinAnsi are printed as `?`,
/// so this converter succeeds for any valid request. The summary usually
/// fits one page; long fields wrap and continue on the next.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalPdfConverter;

impl MinimalPdfConverter {
    /// Create a new minimal converter.
    pub fn new() -> Self {
        Self
    }
}

impl SecondaryConverter for MinimalPdfConverter {
    fn name(&self) -> &str {
        "minimal-pdf"
    }

    fn convert(&self, input: &ConversionInput<'_>, _options: &ConvertOptions) -> Result<Vec<u8>> {
        let spec = input.spec;
        let pages = summary_pages(spec);
        write_pdf(
            &pages,
            spec.title(),
            &spec.participants().join(", "),
            StreamCompression::Deflate,
        )
    }
}

fn summary_lines(spec: &ReportSpec) -> Vec<String> {
    let labels = &templates(Language::En).cover;
    vec![
        format!("{}: {}", labels.participants, spec.participants_display()),
        format!("{}: {}", labels.professor, spec.professor()),
        format!("{}: {}", labels.university, spec.university()),
        format!("{}: {}", labels.college, spec.college()),
        format!("{}: {}", labels.department, spec.department()),
        format!("{}: {}", labels.year, spec.year()),
        String::new(),
        format!("Target length: {} pages", spec.pages()),
        format!("Reference style: {}", spec.reference_style().name()),
        format!("Language: {}", spec.language().code()),
    ]
}

fn summary_pages(spec: &ReportSpec) -> Vec<PdfPage> {
    let width = PAGE_WIDTH - 2.0 * MARGIN;
    let mut cursor = PageCursor::new();

    for line in wrap_words(spec.title(), TITLE_SIZE, width, width) {
        let x = ((PAGE_WIDTH - text_width(&line, TITLE_SIZE)) / 2.0).max(MARGIN);
        cursor.place(
            Font::Bold,
            TITLE_SIZE,
            TITLE_SIZE * LEADING,
            x,
            encode_win_ansi_lossy(&line),
        );
    }
    cursor.skip(TITLE_SIZE);

    for entry in summary_lines(spec) {
        if entry.is_empty() {
            cursor.skip(BODY_SIZE * LEADING);
            continue;
        }
        for line in wrap_words(&entry, BODY_SIZE, width, width) {
            cursor.place(
                Font::Regular,
                BODY_SIZE,
                BODY_SIZE * LEADING,
                MARGIN,
                encode_win_ansi_lossy(&line),
            );
        }
    }
    cursor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(title: &str, language: &str) -> ReportSpec {
        ReportSpec::builder()
            .title(title)
            .language(language)
            .participant("Sara")
            .professor("Dr. Ali")
            .university("Cairo University")
            .college("Engineering")
            .department("Computing")
            .year(2024)
            .pages(5)
            .reference_style("ieee")
            .build()
            .unwrap()
    }

    #[test]
    fn test_summary_lines() {
        let lines = summary_lines(&spec("Water Policy", "en"));
        assert!(lines.contains(&"Professor: Dr. Ali".to_string()));
        assert!(lines.contains(&"Target length: 5 pages".to_string()));
        assert!(lines.contains(&"Reference style: IEEE".to_string()));
    }

    #[test]
    fn test_arabic_title_is_lossy() {
        let pages = summary_pages(&spec("سياسة المياه", "ar"));
        assert_eq!(pages.len(), 1);
        let page = &pages[0];
        assert_eq!(page.lines[0].font, Font::Bold);
        assert!(page.lines[0].bytes.iter().all(|b| *b == b'?' || *b == b' '));
        assert!(page.lines.iter().all(|l| l.y > MARGIN));
    }

    #[test]
    fn test_long_fields_stay_on_the_page() {
        let title = "Urban Water Policy ".repeat(60);
        let spec = ReportSpec::builder()
            .title(title.trim())
            .language("en")
            .participant("Sara Ahmed ".repeat(60).trim())
            .professor("Dr. Ali")
            .university("Cairo University")
            .college("Engineering")
            .department("Computing")
            .year(2024)
            .pages(5)
            .reference_style("apa")
            .build()
            .unwrap();

        let pages = summary_pages(&spec);
        assert!(pages.len() > 1);
        for line in pages.iter().flat_map(|p| &p.lines) {
            assert!(line.y >= MARGIN);
            assert!(line.x + text_width_of(line) <= PAGE_WIDTH - MARGIN + 0.5);
        }
    }

    fn text_width_of(line: &crate::convert::pdf::TextLine) -> f32 {
        line.bytes.len() as f32 * line.size * 0.5
    }
}
