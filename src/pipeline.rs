//! End-to-end report generation.
//!
//! A [`Pipeline`] runs the stages in order for one validated request:
//! synthesis, length adjustment, reference formatting, layout and output
//! conversion. Instances hold no per-request state and can be shared across
//! threads.

use crate::content::ContentSynthesizer;
use crate::convert::{Artifact, ConversionAttempt, ConvertOptions, ConverterChain, OutputConverter};
use crate::error::Result;
use crate::layout::DocumentRenderer;
use crate::length::{LengthController, LengthOptions, WordBand};
use crate::model::{Document, StyleConfig};
use crate::references::{self, ReferenceSource, SampleReferences};
use crate::spec::{ReportSpec, ReportSpecBuilder, SpecLimits};
use chrono::Utc;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Number of sample references cited by default.
pub const DEFAULT_REFERENCE_COUNT: usize = 8;

/// Options for the whole pipeline.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Validation limits for requests built by the pipeline
    pub limits: SpecLimits,

    /// Length controller options
    pub length: LengthOptions,

    /// Layout style
    pub style: StyleConfig,

    /// Output conversion options
    pub convert: ConvertOptions,

    /// Number of sample references
    pub reference_count: usize,

    /// Seed for sample references; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            limits: SpecLimits::default(),
            length: LengthOptions::default(),
            style: StyleConfig::default(),
            convert: ConvertOptions::default(),
            reference_count: DEFAULT_REFERENCE_COUNT,
            seed: None,
        }
    }
}

impl PipelineOptions {
    /// Create default pipeline options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set validation limits.
    pub fn with_limits(mut self, limits: SpecLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set length controller options.
    pub fn with_length(mut self, length: LengthOptions) -> Self {
        self.length = length;
        self
    }

    /// Set the layout style.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Set output conversion options.
    pub fn with_convert(mut self, convert: ConvertOptions) -> Self {
        self.convert = convert;
        self
    }

    /// Set the number of sample references.
    pub fn with_reference_count(mut self, count: usize) -> Self {
        self.reference_count = count;
        self
    }

    /// Fix the sample reference seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A recoverable condition reported alongside the artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The body did not reach the word band within the pass budget.
    LengthAdjustmentIncomplete {
        /// Lower bound of the band
        target_min: usize,
        /// Upper bound of the band
        target_max: usize,
        /// Words actually produced
        achieved: usize,
        /// Passes run
        passes: u32,
    },

    /// Every secondary converter failed; only the primary artifact exists.
    ConversionFailure {
        /// One entry per converter tried
        attempts: Vec<ConversionAttempt>,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::LengthAdjustmentIncomplete {
                target_min,
                target_max,
                achieved,
                passes,
            } => write!(
                f,
                "body has {} words after {} passes, outside the {}..={} band",
                achieved, passes, target_min, target_max
            ),
            Warning::ConversionFailure { attempts } => {
                write!(f, "PDF not produced (")?;
                for (i, attempt) in attempts.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", attempt)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Figures describing a generated report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStats {
    /// Words in the report body (headings excluded)
    pub word_count: usize,
    /// Estimated page count of the body
    pub estimated_pages: f64,
    /// Band aimed for
    pub target: WordBand,
    /// Synthesized sections
    pub section_count: usize,
    /// Cited references
    pub reference_count: usize,
    /// Length adjustment passes
    pub adjustment_passes: u32,
}

/// Everything produced for one request.
#[derive(Debug, Clone)]
pub struct Report {
    /// Output files, primary first
    pub artifacts: Vec<Artifact>,

    /// Soft failures
    pub warnings: Vec<Warning>,

    /// Statistics
    pub stats: ReportStats,

    /// Secondary converter log
    pub attempts: Vec<ConversionAttempt>,

    /// The laid-out document
    pub document: Document,
}

impl Report {
    /// The primary artifact.
    pub fn primary(&self) -> Option<&Artifact> {
        self.artifacts.first()
    }

    /// The PDF artifact, if produced.
    pub fn secondary(&self) -> Option<&Artifact> {
        self.artifacts.get(1)
    }

    /// Whether every format was produced and the length target was met.
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Write all artifacts into `dir`.
    pub fn write_all(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        self.artifacts.iter().map(|a| a.write_to(dir)).collect()
    }
}

/// The report generation pipeline.
#[derive(Clone)]
pub struct Pipeline {
    options: PipelineOptions,
    references: Arc<dyn ReferenceSource>,
    converter: OutputConverter,
}

impl Pipeline {
    /// Pipeline with sample references and the built-in converter chain.
    pub fn new(options: PipelineOptions) -> Self {
        let mut source = SampleReferences::new(options.reference_count);
        if let Some(seed) = options.seed {
            source = source.with_seed(seed);
        }
        let converter = OutputConverter::new(options.convert.clone());
        Self {
            options,
            references: Arc::new(source),
            converter,
        }
    }

    /// Replace the reference source.
    pub fn with_reference_source(mut self, source: Arc<dyn ReferenceSource>) -> Self {
        self.references = source;
        self
    }

    /// Replace the secondary converter chain.
    pub fn with_converter_chain(mut self, chain: ConverterChain) -> Self {
        self.converter = OutputConverter::with_chain(self.options.convert.clone(), chain);
        self
    }

    /// Pipeline options.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Validate a request against this pipeline's limits.
    pub fn build_spec(&self, builder: ReportSpecBuilder) -> Result<ReportSpec> {
        builder.build_with_limits(&self.options.limits)
    }

    /// Validate and generate.
    pub fn generate_from(&self, builder: ReportSpecBuilder) -> Result<Report> {
        let spec = self.build_spec(builder)?;
        self.generate(&spec)
    }

    /// Generate a report for a validated request.
    pub fn generate(&self, spec: &ReportSpec) -> Result<Report> {
        log::info!(
            "Generating '{}' ({}, {} pages, {})",
            spec.title(),
            spec.language(),
            spec.pages(),
            spec.reference_style()
        );
        let mut warnings = Vec::new();

        let mut sections = ContentSynthesizer::for_spec(spec).synthesize(spec);

        let controller = LengthController::new(self.options.length.clone(), spec.language());
        let adjustment = controller.adjust_sections(&mut sections, spec.pages());
        if !adjustment.within_band {
            log::warn!(
                "Length target not reached: {} words, band {}..={}",
                adjustment.final_words,
                adjustment.band.min,
                adjustment.band.max
            );
            warnings.push(Warning::LengthAdjustmentIncomplete {
                target_min: adjustment.band.min,
                target_max: adjustment.band.max,
                achieved: adjustment.final_words,
                passes: adjustment.passes,
            });
        }

        let records = self.references.references(spec);
        let references = references::format(&records, spec.reference_style());

        let mut document = DocumentRenderer::new(self.options.style.clone()).render(
            spec,
            &sections,
            &references,
        );
        document.metadata.created = Some(Utc::now());

        let outcome = self.converter.convert(&document, spec)?;
        if !outcome.is_complete() {
            warnings.push(Warning::ConversionFailure {
                attempts: outcome.attempts.clone(),
            });
        }

        let stats = ReportStats {
            word_count: adjustment.final_words,
            estimated_pages: adjustment.final_words as f64
                / self.options.length.words_per_page as f64,
            target: adjustment.band,
            section_count: sections.len(),
            reference_count: references.len(),
            adjustment_passes: adjustment.passes,
        };
        log::info!(
            "Generated '{}': {} words, {} warnings",
            spec.title(),
            stats.word_count,
            warnings.len()
        );

        let attempts = outcome.attempts.clone();
        Ok(Report {
            artifacts: outcome.into_artifacts(),
            warnings,
            stats,
            attempts,
            document,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineOptions::default())
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("options", &self.options)
            .field("converter", &self.converter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ConverterKind;

    fn builder() -> ReportSpecBuilder {
        ReportSpec::builder()
            .title("Urban Water Management")
            .language("en")
            .participant("Sara Ahmed")
            .professor("Dr. Hassan Ali")
            .university("Cairo University")
            .college("Engineering")
            .department("Civil Engineering")
            .year(2024)
            .pages(5)
            .reference_style("harvard")
    }

    fn minimal_only() -> PipelineOptions {
        PipelineOptions::new()
            .with_seed(7)
            .with_convert(ConvertOptions::new().with_converters(vec![ConverterKind::Minimal]))
    }

    #[test]
    fn test_options_builder() {
        let options = PipelineOptions::new().with_reference_count(3).with_seed(42);
        assert_eq!(options.reference_count, 3);
        assert_eq!(options.seed, Some(42));
        assert_eq!(PipelineOptions::default().reference_count, DEFAULT_REFERENCE_COUNT);
    }

    #[test]
    fn test_generate_stats() {
        let pipeline = Pipeline::new(minimal_only());
        let report = pipeline.generate_from(builder()).unwrap();

        assert_eq!(report.stats.reference_count, DEFAULT_REFERENCE_COUNT);
        assert_eq!(report.stats.section_count, 18);
        assert!(report.stats.adjustment_passes <= 3);
        assert_eq!(report.artifacts.len(), 2);
        assert_eq!(report.primary().unwrap().name, "Urban Water Management.md");
        assert!(report.document.metadata.created.is_some());
    }

    #[test]
    fn test_unreachable_band_warns() {
        let options = minimal_only().with_length(LengthOptions::new().with_words_per_page(100_000));
        let report = Pipeline::new(options).generate_from(builder()).unwrap();

        assert!(report.warnings.iter().any(|w| matches!(
            w,
            Warning::LengthAdjustmentIncomplete { target_min, .. } if *target_min == 475_000
        )));
        assert!(!report.is_complete());
    }

    #[test]
    fn test_invalid_spec_aborts() {
        let err = Pipeline::default()
            .generate_from(builder().pages(41))
            .unwrap_err();
        assert!(err.is_invalid_spec());
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::ConversionFailure {
            attempts: vec![
                ConversionAttempt {
                    converter: "a".to_string(),
                    error: Some("boom".to_string()),
                },
                ConversionAttempt {
                    converter: "b".to_string(),
                    error: Some("timeout".to_string()),
                },
            ],
        };
        assert_eq!(warning.to_string(), "PDF not produced (a: boom; b: timeout)");
    }
}
