//! # reportgen
//!
//! Academic report generation library for Rust.
//!
//! This library synthesizes a complete academic report (cover page, table
//! of contents, body sections, references) from a handful of request fields,
//! adjusts the prose toward a requested page count and writes it as
//! Markdown, plain text or JSON plus a best-effort PDF.
//!
//! ## Quick Start
//!
//! ```no_run
//! use reportgen::{generate, ReportSpec};
//!
//! fn main() -> reportgen::Result<()> {
//!     let report = generate(
//!         ReportSpec::builder()
//!             .title("Artificial Intelligence in Modern Education")
//!             .language("en")
//!             .participant("Sara Ahmed")
//!             .professor("Dr. Hassan Ali")
//!             .university("Cairo University")
//!             .college("Faculty of Engineering")
//!             .department("Computer Science")
//!             .year(2024)
//!             .pages(10)
//!             .reference_style("APA"),
//!     )?;
//!
//!     for path in report.write_all("out")? {
//!         println!("{}", path.display());
//!     }
//!     for warning in &report.warnings {
//!         eprintln!("warning: {}", warning);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two languages**: English and Arabic, with right-to-left layout
//! - **Length control**: prose expanded or trimmed toward a word band
//! - **Five citation styles**: APA, IEEE, MLA, Harvard, Chicago
//! - **Primary formats**: Markdown, plain text, JSON
//! - **PDF fallback chain**: native writer, external commands, minimal summary

pub mod content;
pub mod convert;
pub mod detect;
pub mod error;
pub mod layout;
pub mod length;
pub mod model;
pub mod pipeline;
pub mod references;
pub mod render;
pub mod spec;

// Re-export commonly used types
pub use content::ContentSynthesizer;
pub use convert::{
    Artifact, ConversionAttempt, ConversionOutcome, ConvertOptions, ConverterChain, ConverterKind,
    OutputConverter, SecondaryConverter,
};
pub use detect::TextDirection;
pub use error::{Error, Result};
pub use layout::DocumentRenderer;
pub use length::{LengthController, LengthOptions, WordBand};
pub use model::{
    Alignment, Block, BlockRole, ContentBlock, Document, Metadata, Paragraph, ParagraphStyle,
    Section, SectionKind, StyleConfig,
};
pub use pipeline::{Pipeline, PipelineOptions, Report, ReportStats, Warning};
pub use references::{ReferenceRecord, ReferenceSource, SourceKind};
pub use render::{JsonFormat, PrimaryFormat, RenderOptions};
pub use spec::{Language, ReferenceStyle, ReportSpec, ReportSpecBuilder, SpecLimits};

use std::time::Duration;

/// Validate a request and generate its report with default options.
///
/// # Example
///
/// ```no_run
/// use reportgen::{generate, ReportSpec};
///
/// let builder = ReportSpec::builder()
///     .title("Renewable Energy")
///     .language("ar")
///     .participants(["Ali", "Mona"])
///     .professor("Dr. Omar")
///     .university("Cairo University")
///     .college("Engineering")
///     .department("Power")
///     .year(2024)
///     .pages(5)
///     .reference_style("ieee");
/// let report = generate(builder).unwrap();
/// println!("{} artifacts", report.artifacts.len());
/// ```
pub fn generate(builder: ReportSpecBuilder) -> Result<Report> {
    Pipeline::default().generate_from(builder)
}

/// Generate a report for a validated request with custom options.
pub fn generate_with_options(spec: &ReportSpec, options: PipelineOptions) -> Result<Report> {
    Pipeline::new(options).generate(spec)
}

/// Parse a JSON request and validate it.
///
/// # Example
///
/// ```no_run
/// use reportgen::spec_from_json;
///
/// let spec = spec_from_json(r#"{"title": "Water", "language": "EN"}"#);
/// assert!(spec.is_err());
/// ```
pub fn spec_from_json(json: &str) -> Result<ReportSpec> {
    let builder: ReportSpecBuilder = serde_json::from_str(json)?;
    builder.build()
}

/// Builder for configuring report generation.
///
/// # Example
///
/// ```no_run
/// use reportgen::{PrimaryFormat, ReportGen, ReportSpec};
///
/// let report = ReportGen::new()
///     .with_format(PrimaryFormat::Text)
///     .with_seed(42)
///     .without_pdf()
///     .generate(
///         ReportSpec::builder()
///             .title("Water")
///             .language("en")
///             .participant("Sara")
///             .professor("Dr. Ali")
///             .university("U")
///             .college("C")
///             .department("D")
///             .year(2024)
///             .pages(5)
///             .reference_style("mla"),
///     )?;
/// # Ok::<(), reportgen::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportGen {
    options: PipelineOptions,
}

impl ReportGen {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary output format.
    pub fn with_format(mut self, format: PrimaryFormat) -> Self {
        self.options.convert = self.options.convert.with_primary(format);
        self
    }

    /// Omit YAML frontmatter from Markdown output.
    pub fn without_frontmatter(mut self) -> Self {
        let render = self.options.convert.render.clone().with_frontmatter(false);
        self.options.convert = self.options.convert.with_render_options(render);
        self
    }

    /// Fix the sample reference seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options = self.options.with_seed(seed);
        self
    }

    /// Set the number of references.
    pub fn with_reference_count(mut self, count: usize) -> Self {
        self.options = self.options.with_reference_count(count);
        self
    }

    /// Set the length adjustment pass budget.
    pub fn with_max_passes(mut self, passes: u32) -> Self {
        self.options.length = self.options.length.with_max_passes(passes);
        self
    }

    /// Set the external converter timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.convert = self.options.convert.with_timeout(timeout);
        self
    }

    /// Select the PDF converter families.
    pub fn with_converters(mut self, converters: Vec<ConverterKind>) -> Self {
        self.options.convert = self.options.convert.with_converters(converters);
        self
    }

    /// Skip PDF conversion entirely.
    pub fn without_pdf(self) -> Self {
        self.with_converters(Vec::new())
    }

    /// Set validation limits.
    pub fn with_limits(mut self, limits: SpecLimits) -> Self {
        self.options = self.options.with_limits(limits);
        self
    }

    /// Options collected so far.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Build the pipeline.
    pub fn build(self) -> Pipeline {
        Pipeline::new(self.options)
    }

    /// Validate and generate in one step.
    pub fn generate(self, builder: ReportSpecBuilder) -> Result<Report> {
        self.build().generate_from(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ReportSpecBuilder {
        ReportSpec::builder()
            .title("Water Policy")
            .language("en")
            .participant("Sara")
            .professor("Dr. Ali")
            .university("Cairo University")
            .college("Engineering")
            .department("Civil")
            .year(2024)
            .pages(5)
            .reference_style("chicago")
    }

    #[test]
    fn test_report_gen_builder() {
        let gen = ReportGen::new()
            .with_format(PrimaryFormat::Json)
            .with_seed(3)
            .with_max_passes(5)
            .without_frontmatter()
            .without_pdf();

        let options = gen.options();
        assert_eq!(options.convert.primary, PrimaryFormat::Json);
        assert_eq!(options.seed, Some(3));
        assert_eq!(options.length.max_passes, 5);
        assert!(!options.convert.render.include_frontmatter);
        assert!(options.convert.converters.is_empty());
    }

    #[test]
    fn test_report_gen_without_pdf() {
        let report = ReportGen::new()
            .with_format(PrimaryFormat::Text)
            .with_seed(1)
            .without_pdf()
            .generate(builder())
            .unwrap();

        assert_eq!(report.artifacts.len(), 1);
        assert_eq!(report.primary().unwrap().name, "Water Policy.txt");
        assert!(report
            .warnings
            .iter()
            .any(|w| matches!(w, Warning::ConversionFailure { attempts } if attempts.is_empty())));
    }

    #[test]
    fn test_spec_from_json() {
        let json = r#"{
            "title": "Water Policy",
            "language": "Arabic",
            "student_names": "Sara, Ali",
            "professor": "Dr. Omar",
            "university": "U",
            "college": "C",
            "department": "D",
            "year": 2024,
            "pages": 6,
            "reference_style": "ieee"
        }"#;
        let spec = spec_from_json(json).unwrap();
        assert_eq!(spec.language(), Language::Ar);
        assert_eq!(spec.participants(), ["Sara", "Ali"]);
        assert_eq!(spec.reference_style(), ReferenceStyle::Ieee);
    }

    #[test]
    fn test_spec_from_json_rejects_invalid() {
        let err = spec_from_json(r#"{"title": "Water", "language": "fr"}"#).unwrap_err();
        assert!(err.is_invalid_spec());
        assert!(matches!(spec_from_json("not json"), Err(Error::Json(_))));
    }
}
