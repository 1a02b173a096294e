//! Synthesized report sections.

use crate::detect::TextDirection;
use crate::length::word_count;
use serde::{Deserialize, Serialize};

/// Kind of section, used to pick templates and to order the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Opening section
    Introduction,
    /// Review of prior work
    LiteratureReview,
    /// Research design
    Methodology,
    /// Findings
    Results,
    /// Interpretation
    Discussion,
    /// Level 2 part of one of the body sections
    Subsection,
    /// Closing section
    Conclusion,
}

/// A content block inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Prose paragraph
    Paragraph(String),
    /// Bullet item
    Bullet(String),
}

impl ContentBlock {
    /// Text of the block.
    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Paragraph(t) | ContentBlock::Bullet(t) => t,
        }
    }

    /// Check if this is a prose paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, ContentBlock::Paragraph(_))
    }
}

/// One titled part of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text
    pub heading: String,

    /// Heading level (1 or 2)
    pub level: u8,

    /// Section kind
    pub kind: SectionKind,

    /// Ordered content blocks
    pub blocks: Vec<ContentBlock>,

    /// Direction derived from the heading and content script
    pub direction: TextDirection,
}

impl Section {
    /// Create a section, detecting its direction from heading and blocks.
    pub fn new(
        heading: impl Into<String>,
        level: u8,
        kind: SectionKind,
        blocks: Vec<ContentBlock>,
    ) -> Self {
        let heading = heading.into();
        let rtl = TextDirection::of(&heading).is_rtl()
            || blocks.iter().any(|b| TextDirection::of(b.text()).is_rtl());
        Self {
            heading,
            level: level.clamp(1, 2),
            kind,
            blocks,
            direction: if rtl {
                TextDirection::Rtl
            } else {
                TextDirection::Ltr
            },
        }
    }

    /// Words in all content blocks (heading excluded).
    pub fn word_count(&self) -> usize {
        self.blocks.iter().map(|b| word_count(b.text())).sum()
    }

    /// Words in prose paragraphs only.
    pub fn paragraph_word_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.is_paragraph())
            .map(|b| word_count(b.text()))
            .sum()
    }

    /// Prose paragraphs joined by blank lines.
    pub fn paragraph_text(&self) -> String {
        self.blocks
            .iter()
            .filter(|b| b.is_paragraph())
            .map(|b| b.text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Replace the prose paragraphs with the paragraphs of `text`.
    ///
    /// The new paragraphs take the place of the first original paragraph;
    /// bullets keep their relative order. A section without paragraphs gets
    /// the new text prepended.
    pub fn replace_paragraph_text(&mut self, text: &str) {
        let replacement: Vec<ContentBlock> = text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| ContentBlock::Paragraph(p.to_string()))
            .collect();

        let insert_at = self
            .blocks
            .iter()
            .position(ContentBlock::is_paragraph)
            .unwrap_or(0);
        let mut rebuilt = Vec::with_capacity(self.blocks.len() + replacement.len());
        let mut pending = Some(replacement);
        for (i, block) in self.blocks.drain(..).enumerate() {
            if i == insert_at {
                if let Some(new_blocks) = pending.take() {
                    rebuilt.extend(new_blocks);
                }
            }
            if !block.is_paragraph() {
                rebuilt.push(block);
            }
        }
        if let Some(new_blocks) = pending.take() {
            rebuilt.extend(new_blocks);
        }
        self.blocks = rebuilt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Section {
        Section::new(
            "Methodology",
            1,
            SectionKind::Methodology,
            vec![
                ContentBlock::Paragraph("First paragraph here.".to_string()),
                ContentBlock::Paragraph("Key findings include:".to_string()),
                ContentBlock::Bullet("One point".to_string()),
                ContentBlock::Bullet("Another point".to_string()),
            ],
        )
    }

    #[test]
    fn test_word_counts() {
        let section = sample();
        assert_eq!(section.word_count(), 3 + 3 + 2 + 2);
        assert_eq!(section.paragraph_word_count(), 6);
    }

    #[test]
    fn test_paragraph_text() {
        assert_eq!(
            sample().paragraph_text(),
            "First paragraph here.\n\nKey findings include:"
        );
    }

    #[test]
    fn test_replace_paragraph_text_keeps_bullets() {
        let mut section = sample();
        section.replace_paragraph_text("New one.\n\nNew two.\n\nNew three.");
        let texts: Vec<&str> = section.blocks.iter().map(|b| b.text()).collect();
        assert_eq!(
            texts,
            vec!["New one.", "New two.", "New three.", "One point", "Another point"]
        );
    }

    #[test]
    fn test_direction_detected() {
        let section = Section::new("المنهجية", 1, SectionKind::Methodology, vec![]);
        assert_eq!(section.direction, TextDirection::Rtl);
        assert_eq!(sample().direction, TextDirection::Ltr);
    }

    #[test]
    fn test_level_clamped() {
        let section = Section::new("X", 7, SectionKind::Subsection, vec![]);
        assert_eq!(section.level, 2);
    }
}
