//! Section synthesis.
//!
//! [`ContentSynthesizer`] picks the template table for the report language
//! once and fills it with the title and subsection names.

mod templates;

pub use templates::{templates, BodyTemplate, CoverLabels, TemplateSet};

use crate::model::{ContentBlock, Section, SectionKind};
use crate::spec::{Language, ReportSpec};

/// Produces report sections from a request.
#[derive(Debug, Clone, Copy)]
pub struct ContentSynthesizer {
    templates: &'static TemplateSet,
}

impl ContentSynthesizer {
    /// Create a synthesizer for one language.
    pub fn new(language: Language) -> Self {
        Self {
            templates: templates(language),
        }
    }

    /// Create a synthesizer for the language of a request.
    pub fn for_spec(spec: &ReportSpec) -> Self {
        Self::new(spec.language())
    }

    /// Templates in use.
    pub fn templates(&self) -> &'static TemplateSet {
        self.templates
    }

    /// Synthesize all sections in report order.
    ///
    /// Introduction, then the four body sections each followed by their
    /// subsections, then the conclusion.
    pub fn synthesize(&self, spec: &ReportSpec) -> Vec<Section> {
        let t = self.templates;
        let title = self.prose_title(spec);
        let mut sections = Vec::with_capacity(2 + t.body.len() * 4);

        sections.push(Section::new(
            t.introduction_heading,
            1,
            SectionKind::Introduction,
            paragraphs(t.introduction, &title, ""),
        ));

        for body in &t.body {
            sections.push(Section::new(
                body.heading,
                1,
                body.kind,
                vec![ContentBlock::Paragraph(fill(body.lead, &title, ""))],
            ));

            for subsection in body.subsections {
                let name = if t.lowercase_in_prose {
                    subsection.to_lowercase()
                } else {
                    subsection.to_string()
                };
                let mut blocks = paragraphs(&t.subsection_paragraphs, &title, &name);
                blocks.extend(
                    t.subsection_bullets
                        .iter()
                        .map(|b| ContentBlock::Bullet(fill(b, &title, &name))),
                );
                sections.push(Section::new(subsection, 2, SectionKind::Subsection, blocks));
            }
        }

        sections.push(Section::new(
            t.conclusion_heading,
            1,
            SectionKind::Conclusion,
            paragraphs(t.conclusion, &title, ""),
        ));

        log::debug!(
            "Synthesized {} sections for '{}' ({})",
            sections.len(),
            spec.title(),
            spec.language()
        );
        sections
    }

    fn prose_title(&self, spec: &ReportSpec) -> String {
        if self.templates.lowercase_in_prose {
            spec.title().to_lowercase()
        } else {
            spec.title().to_string()
        }
    }
}

/// Synthesize the sections of a request with the templates of its language.
pub fn synthesize(spec: &ReportSpec) -> Vec<Section> {
    ContentSynthesizer::for_spec(spec).synthesize(spec)
}

fn paragraphs(templates: &[&str], title: &str, subsection: &str) -> Vec<ContentBlock> {
    templates
        .iter()
        .map(|p| ContentBlock::Paragraph(fill(p, title, subsection)))
        .collect()
}

fn fill(template: &str, title: &str, subsection: &str) -> String {
    template
        .replace("{title}", title)
        .replace("{subsection}", subsection)
}
