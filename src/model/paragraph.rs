//! Paragraph and text-level types.

use crate::detect::TextDirection;
use serde::{Deserialize, Serialize};

/// A run of text with its resolved layout style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// The text content
    pub text: String,

    /// Which part of the document the paragraph belongs to
    pub role: BlockRole,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a paragraph with the given role and style.
    pub fn new(text: impl Into<String>, role: BlockRole, style: ParagraphStyle) -> Self {
        Self {
            text: text.into(),
            role,
            style,
        }
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Check for right-to-left layout.
    pub fn is_rtl(&self) -> bool {
        self.style.direction.is_rtl()
    }
}

/// Part of the document a block belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockRole {
    /// Cover page (title, institution and participant lines)
    Cover,
    /// Table of contents
    Contents,
    /// Section headings and prose
    #[default]
    Body,
    /// Reference list
    Reference,
}

/// Resolved paragraph styling.
///
/// Produced by [`StyleConfig`](super::StyleConfig); blocks never share or
/// mutate a style object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Font family name
    pub font_family: String,

    /// Font size in points
    pub font_size: f32,

    /// Bold text
    pub bold: bool,

    /// Text alignment
    pub alignment: Alignment,

    /// Line spacing multiplier (1.0 = single, 1.5 = one and a half)
    pub line_spacing: f32,

    /// Text direction
    pub direction: TextDirection,

    /// Space before paragraph in points
    pub space_before: f32,

    /// Space after paragraph in points
    pub space_after: f32,

    /// Hanging indent in points (first line outdented by this amount)
    pub hanging_indent: Option<f32>,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            font_size: 14.0,
            bold: false,
            alignment: Alignment::Left,
            line_spacing: 1.5,
            direction: TextDirection::Ltr,
            space_before: 0.0,
            space_after: 6.0,
            hanging_indent: None,
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// HTML `align` attribute value.
    pub fn as_html(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_empty() {
        let p = Paragraph::new("   ", BlockRole::Body, ParagraphStyle::default());
        assert!(p.is_empty());

        let p = Paragraph::new("Text", BlockRole::Body, ParagraphStyle::default());
        assert!(!p.is_empty());
    }

    #[test]
    fn test_default_style() {
        let style = ParagraphStyle::default();
        assert_eq!(style.line_spacing, 1.5);
        assert_eq!(style.direction, TextDirection::Ltr);
        assert!(!style.bold);
    }
}
