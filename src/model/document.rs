//! Document-level types.

use super::{Block, BlockRole};
use crate::spec::{Language, ReferenceStyle, ReportSpec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A laid-out report, independent of any output format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, authors, language)
    pub metadata: Metadata,

    /// Blocks in reading order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document.
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            blocks: Vec::new(),
        }
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of page-separated parts.
    pub fn part_count(&self) -> usize {
        if self.blocks.is_empty() {
            0
        } else {
            1 + self.blocks.iter().filter(|b| b.is_page_break()).count()
        }
    }

    /// Heading texts with their levels.
    pub fn headings(&self) -> impl Iterator<Item = (u8, &str)> {
        self.blocks
            .iter()
            .filter_map(|b| b.heading_level().map(|level| (level, b.text())))
    }

    /// Blocks with the given role.
    pub fn blocks_with_role(&self, role: BlockRole) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(move |b| b.role() == Some(role))
    }

    /// Words in body blocks (headings excluded).
    pub fn body_word_count(&self) -> usize {
        self.blocks_with_role(BlockRole::Body)
            .filter(|b| !b.is_heading())
            .map(|b| crate::length::word_count(b.text()))
            .sum()
    }

    /// Plain text of all blocks, one block per paragraph.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter(|b| !b.is_page_break())
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Report title
    pub title: String,

    /// Participant names
    pub authors: Vec<String>,

    /// Supervising professor
    pub professor: String,

    /// Institution line (university, college, department)
    pub institution: String,

    /// Report language
    pub language: Language,

    /// Citation style of the reference list
    pub reference_style: ReferenceStyle,

    /// Requested page count
    pub target_pages: u32,

    /// Academic year
    pub year: i32,

    /// Generation time
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Metadata describing a request.
    pub fn from_spec(spec: &ReportSpec) -> Self {
        Self {
            title: spec.title().to_string(),
            authors: spec.participants().to_vec(),
            professor: spec.professor().to_string(),
            institution: format!(
                "{}, {}, {}",
                spec.university(),
                spec.college(),
                spec.department()
            ),
            language: spec.language(),
            reference_style: spec.reference_style(),
            target_pages: spec.pages(),
            year: spec.year(),
            created: None,
        }
    }

    /// Set the generation time.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Convert metadata to YAML frontmatter (as read by pandoc).
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        lines.push(format!("title: \"{}\"", escape_yaml(&self.title)));
        if !self.authors.is_empty() {
            lines.push("author:".to_string());
            for author in &self.authors {
                lines.push(format!("  - \"{}\"", escape_yaml(author)));
            }
        }
        lines.push(format!("lang: {}", self.language.code().to_lowercase()));
        if self.language.is_rtl() {
            lines.push("dir: rtl".to_string());
        }
        lines.push(format!("year: {}", self.year));
        lines.push(format!("reference_style: {}", self.reference_style));
        if let Some(ref created) = self.created {
            lines.push(format!("date: {}", created.to_rfc3339()));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
