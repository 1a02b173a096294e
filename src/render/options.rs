//! Rendering options and configuration.

use super::JsonFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary output format, always produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryFormat {
    /// Markdown with YAML frontmatter (default)
    #[default]
    Markdown,
    /// Plain text
    Text,
    /// The document model as JSON
    Json,
}

impl PrimaryFormat {
    /// All primary formats.
    pub const ALL: [PrimaryFormat; 3] =
        [PrimaryFormat::Markdown, PrimaryFormat::Text, PrimaryFormat::Json];

    /// Canonical file extension (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            PrimaryFormat::Markdown => "md",
            PrimaryFormat::Text => "txt",
            PrimaryFormat::Json => "json",
        }
    }

    /// MIME type of the serialized artifact.
    pub fn mime(&self) -> &'static str {
        match self {
            PrimaryFormat::Markdown => "text/markdown",
            PrimaryFormat::Text => "text/plain",
            PrimaryFormat::Json => "application/json",
        }
    }

    /// Short name.
    pub fn name(&self) -> &'static str {
        match self {
            PrimaryFormat::Markdown => "markdown",
            PrimaryFormat::Text => "text",
            PrimaryFormat::Json => "json",
        }
    }
}

impl fmt::Display for PrimaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimaryFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(PrimaryFormat::Markdown),
            "text" | "txt" | "plain" => Ok(PrimaryFormat::Text),
            "json" => Ok(PrimaryFormat::Json),
            other => Err(Error::Other(format!("unknown output format '{}'", other))),
        }
    }
}

/// Options for serializing a document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Include YAML frontmatter with metadata (Markdown)
    pub include_frontmatter: bool,

    /// Line written for each page break (Markdown)
    pub page_break_marker: String,

    /// Character to use for bullet markers
    pub list_marker: char,

    /// Width for wrapping long lines in plain text (0 = no wrap)
    pub line_width: u32,

    /// JSON layout
    pub json_format: JsonFormat,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the page break marker.
    pub fn with_page_break_marker(mut self, marker: impl Into<String>) -> Self {
        self.page_break_marker = marker.into();
        self
    }

    /// Set the bullet marker.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Set the plain-text wrap width.
    pub fn with_line_width(mut self, width: u32) -> Self {
        self.line_width = width;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: true,
            page_break_marker: "\\newpage".to_string(),
            list_marker: '-',
            line_width: 0,
            json_format: JsonFormat::Pretty,
        }
    }
}
