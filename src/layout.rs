//! Document layout.
//!
//! [`DocumentRenderer`] turns synthesized sections and formatted references
//! into a styled [`Document`]: cover, table of contents, body and references,
//! each part on its own page. Direction is detected per block; references
//! stay left-aligned whatever their script.

use crate::content::{templates, TemplateSet};
use crate::detect::TextDirection;
use crate::model::{Block, BlockRole, ContentBlock, Document, Metadata, Section, StyleConfig};
use crate::spec::ReportSpec;

/// Lays out report content with a fixed style configuration.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    style: StyleConfig,
}

impl DocumentRenderer {
    /// Create a renderer.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Style configuration in use.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Lay out a report.
    pub fn render(&self, spec: &ReportSpec, sections: &[Section], references: &[String]) -> Document {
        let labels = templates(spec.language());
        let mut doc = Document::new(Metadata::from_spec(spec));

        self.cover(&mut doc, spec, labels);
        doc.push(Block::PageBreak);

        self.contents(&mut doc, sections, labels);
        doc.push(Block::PageBreak);

        for section in sections {
            self.section(&mut doc, section);
        }
        doc.push(Block::PageBreak);

        self.references(&mut doc, references, labels);

        log::debug!(
            "Laid out {} blocks in {} parts",
            doc.blocks.len(),
            doc.part_count()
        );
        doc
    }

    fn cover(&self, doc: &mut Document, spec: &ReportSpec, labels: &TemplateSet) {
        let title = spec.title();
        doc.push(Block::heading(
            0,
            title,
            BlockRole::Cover,
            self.style.title(TextDirection::of(title)),
        ));

        let cover = &labels.cover;
        let year = spec.year().to_string();
        let participants = spec.participants_display();
        let lines = [
            (cover.participants, participants.as_str()),
            (cover.professor, spec.professor()),
            (cover.university, spec.university()),
            (cover.college, spec.college()),
            (cover.department, spec.department()),
            (cover.year, year.as_str()),
        ];
        for (label, value) in lines {
            let text = format!("{}: {}", label, value);
            let style = self.style.cover_line(TextDirection::of(&text));
            doc.push(Block::paragraph(text, BlockRole::Cover, style));
        }
    }

    fn contents(&self, doc: &mut Document, sections: &[Section], labels: &TemplateSet) {
        let title = labels.contents_title;
        doc.push(Block::heading(
            0,
            title,
            BlockRole::Contents,
            self.style.title(TextDirection::of(title)),
        ));

        let entries = sections
            .iter()
            .filter(|s| s.level == 1)
            .map(|s| s.heading.as_str())
            .chain(std::iter::once(labels.references_heading));
        for entry in entries {
            let style = self.style.contents_entry(TextDirection::of(entry));
            doc.push(Block::paragraph(format!("• {}", entry), BlockRole::Contents, style));
        }
    }

    fn section(&self, doc: &mut Document, section: &Section) {
        let heading = &section.heading;
        doc.push(Block::heading(
            section.level,
            heading.as_str(),
            BlockRole::Body,
            self.style.heading(section.level, TextDirection::of(heading)),
        ));

        for block in &section.blocks {
            let text = block.text();
            let style = self.style.body(TextDirection::of(text));
            doc.push(match block {
                ContentBlock::Paragraph(_) => Block::paragraph(text, BlockRole::Body, style),
                ContentBlock::Bullet(_) => Block::bullet(text, BlockRole::Body, style),
            });
        }
    }

    fn references(&self, doc: &mut Document, references: &[String], labels: &TemplateSet) {
        let heading = labels.references_heading;
        doc.push(Block::heading(
            1,
            heading,
            BlockRole::Body,
            self.style.heading(1, TextDirection::of(heading)),
        ));

        for entry in references {
            let style = self.style.reference(TextDirection::of(entry));
            doc.push(Block::paragraph(entry.as_str(), BlockRole::Reference, style));
        }
    }
}

/// Lay out a report with the given style configuration.
pub fn render(
    spec: &ReportSpec,
    sections: &[Section],
    references: &[String],
    style: &StyleConfig,
) -> Document {
    DocumentRenderer::new(style.clone()).render(spec, sections, references)
}
