//! Immutable style configuration applied per block.

use super::{Alignment, ParagraphStyle};
use crate::detect::TextDirection;

/// Style rules for the whole document.
///
/// The renderer asks this configuration for a fresh [`ParagraphStyle`] per
/// block; nothing is modified after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Font family for all text
    pub font_family: String,

    /// Body text size in points
    pub body_size: f32,

    /// Level 1 heading size in points
    pub heading1_size: f32,

    /// Level 2 heading size in points
    pub heading2_size: f32,

    /// Report title size in points
    pub title_size: f32,

    /// Line spacing multiplier for body text
    pub line_spacing: f32,

    /// Space after each paragraph in points
    pub space_after: f32,

    /// Space before headings in points
    pub heading_space_before: f32,

    /// Hanging indent for reference entries in points
    pub reference_indent: f32,
}

impl StyleConfig {
    /// Create the default style configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the body font size.
    pub fn with_body_size(mut self, size: f32) -> Self {
        self.body_size = size;
        self
    }

    /// Set the body line spacing.
    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Style for body paragraphs and bullets.
    pub fn body(&self, direction: TextDirection) -> ParagraphStyle {
        self.base(self.body_size, false, Alignment::Justify, direction)
    }

    /// Style for level 1 and level 2 section headings.
    pub fn heading(&self, level: u8, direction: TextDirection) -> ParagraphStyle {
        let size = if level <= 1 {
            self.heading1_size
        } else {
            self.heading2_size
        };
        ParagraphStyle {
            space_before: self.heading_space_before,
            ..self.base(size, true, Alignment::Left, direction)
        }
    }

    /// Style for title-level headings (report title, contents title).
    pub fn title(&self, direction: TextDirection) -> ParagraphStyle {
        self.base(self.title_size, true, Alignment::Center, direction)
    }

    /// Style for centered cover lines.
    pub fn cover_line(&self, direction: TextDirection) -> ParagraphStyle {
        self.base(self.body_size, false, Alignment::Center, direction)
    }

    /// Style for table of contents entries.
    pub fn contents_entry(&self, direction: TextDirection) -> ParagraphStyle {
        self.base(self.body_size, false, Alignment::Left, direction)
    }

    /// Style for reference entries: always left-aligned with a hanging indent.
    pub fn reference(&self, direction: TextDirection) -> ParagraphStyle {
        ParagraphStyle {
            alignment: Alignment::Left,
            hanging_indent: Some(self.reference_indent),
            ..self.base(self.body_size, false, Alignment::Left, direction)
        }
    }

    fn base(
        &self,
        size: f32,
        bold: bool,
        alignment: Alignment,
        direction: TextDirection,
    ) -> ParagraphStyle {
        let alignment = if direction.is_rtl() {
            Alignment::Right
        } else {
            alignment
        };
        ParagraphStyle {
            font_family: self.font_family.clone(),
            font_size: size,
            bold,
            alignment,
            line_spacing: self.line_spacing,
            direction,
            space_before: 0.0,
            space_after: self.space_after,
            hanging_indent: None,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            body_size: 14.0,
            heading1_size: 16.0,
            heading2_size: 15.0,
            title_size: 18.0,
            line_spacing: 1.5,
            space_after: 6.0,
            heading_space_before: 12.0,
            reference_indent: 36.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_sizes_exceed_body() {
        let config = StyleConfig::default();
        let h1 = config.heading(1, TextDirection::Ltr);
        let h2 = config.heading(2, TextDirection::Ltr);
        let body = config.body(TextDirection::Ltr);
        assert!(h1.font_size > h2.font_size);
        assert!(h2.font_size > body.font_size);
        assert!(h1.bold && h2.bold && !body.bold);
        assert_eq!(h1.alignment, Alignment::Left);
        assert_eq!(h1.font_family, body.font_family);
    }

    #[test]
    fn test_rtl_forces_right_alignment() {
        let config = StyleConfig::default();
        assert_eq!(config.body(TextDirection::Rtl).alignment, Alignment::Right);
        assert_eq!(config.title(TextDirection::Rtl).alignment, Alignment::Right);
        assert_eq!(config.title(TextDirection::Ltr).alignment, Alignment::Center);
    }

    #[test]
    fn test_reference_always_left() {
        let config = StyleConfig::default();
        let style = config.reference(TextDirection::Rtl);
        assert_eq!(style.alignment, Alignment::Left);
        assert_eq!(style.direction, TextDirection::Rtl);
        assert_eq!(style.hanging_indent, Some(36.0));
    }

    #[test]
    fn test_body_line_spacing() {
        let config = StyleConfig::new().with_line_spacing(2.0);
        assert_eq!(config.body(TextDirection::Ltr).line_spacing, 2.0);
        assert_eq!(StyleConfig::default().body(TextDirection::Ltr).line_spacing, 1.5);
    }
}
