//! Typed content blocks.

use super::{BlockRole, Paragraph, ParagraphStyle};
use serde::{Deserialize, Serialize};

/// A content block of the document model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading (level 1 or 2; level 0 is the report title)
    Heading {
        /// Heading level
        level: u8,
        /// Heading text and style
        paragraph: Paragraph,
    },

    /// A paragraph of prose
    Paragraph(Paragraph),

    /// A bulleted list item
    Bullet(Paragraph),

    /// A page break marker
    PageBreak,
}

impl Block {
    /// Create a heading block.
    pub fn heading(level: u8, text: impl Into<String>, role: BlockRole, style: ParagraphStyle) -> Self {
        Block::Heading {
            level,
            paragraph: Paragraph::new(text, role, style),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>, role: BlockRole, style: ParagraphStyle) -> Self {
        Block::Paragraph(Paragraph::new(text, role, style))
    }

    /// Create a bullet block.
    pub fn bullet(text: impl Into<String>, role: BlockRole, style: ParagraphStyle) -> Self {
        Block::Bullet(Paragraph::new(text, role, style))
    }

    /// The text-bearing paragraph, if any.
    pub fn paragraph_ref(&self) -> Option<&Paragraph> {
        match self {
            Block::Heading { paragraph, .. } => Some(paragraph),
            Block::Paragraph(p) | Block::Bullet(p) => Some(p),
            Block::PageBreak => None,
        }
    }

    /// Text of the block (empty for page breaks).
    pub fn text(&self) -> &str {
        self.paragraph_ref().map(|p| p.text.as_str()).unwrap_or("")
    }

    /// Role of the block, if it carries text.
    pub fn role(&self) -> Option<BlockRole> {
        self.paragraph_ref().map(|p| p.role)
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Heading level, if this block is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Block::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Check if this block is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_variants() {
        let h = Block::heading(1, "Introduction", BlockRole::Body, ParagraphStyle::default());
        assert!(h.is_heading());
        assert_eq!(h.heading_level(), Some(1));
        assert_eq!(h.text(), "Introduction");

        let b = Block::PageBreak;
        assert!(b.is_page_break());
        assert_eq!(b.text(), "");
        assert_eq!(b.role(), None);
    }

    #[test]
    fn test_block_serde_tag() {
        let block = Block::bullet("Point", BlockRole::Body, ParagraphStyle::default());
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"type\":\"bullet\""));
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
