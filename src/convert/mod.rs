//! Output conversion: the primary artifact plus a secondary PDF.
//!
//! The document is always serialized to the primary format. A PDF is then
//! attempted through an ordered [`ConverterChain`]; the first converter that
//! succeeds wins and every failure is recorded as a [`ConversionAttempt`].
//! When the whole chain fails only the primary artifact is returned.
//!
//! # Example
//!
//! ```no_run
//! use reportgen::convert::{ConvertOptions, ConverterKind, OutputConverter};
//! use reportgen::{layout, ReportSpec};
//!
//! fn main() -> reportgen::Result<()> {
//!     let spec = ReportSpec::builder()
//!         .title("Renewable Energy")
//!         .language("en")
//!         .participant("Sara")
//!         .professor("Dr. Ali")
//!         .university("Cairo University")
//!         .college("Engineering")
//!         .department("Power")
//!         .year(2024)
//!         .pages(5)
//!         .reference_style("apa")
//!         .build()?;
//!     let doc = layout::render(&spec, &[], &[], &Default::default());
//!
//!     let options = ConvertOptions::new().with_converters(vec![ConverterKind::Minimal]);
//!     let outcome = OutputConverter::new(options).convert(&doc, &spec)?;
//!     println!("{} artifacts", outcome.artifacts().len());
//!     Ok(())
//! }
//! ```

mod external;
mod minimal;
mod native;
mod pdf;

pub use external::ExternalCommandConverter;
pub use minimal::MinimalPdfConverter;
pub use native::NativePdfConverter;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::{self, PrimaryFormat, RenderOptions};
use crate::spec::ReportSpec;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// MIME type of the secondary artifact.
pub const PDF_MIME: &str = "application/pdf";

/// Default time budget for one external converter.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A named output file held in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// File name including extension
    pub name: String,
    /// MIME type
    pub mime: &'static str,
    /// File contents
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Create an artifact.
    pub fn new(name: impl Into<String>, mime: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime,
            bytes,
        }
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the artifact has no content.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the artifact into a directory, returning the full path.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// What a secondary converter gets to work with.
#[derive(Debug, Clone, Copy)]
pub struct ConversionInput<'a> {
    /// Laid-out document
    pub document: &'a Document,
    /// The request
    pub spec: &'a ReportSpec,
    /// Already serialized primary artifact
    pub primary: &'a Artifact,
    /// Format of the primary artifact
    pub format: PrimaryFormat,
}

/// Trait for secondary-format converters.
///
/// Implement this trait to add a PDF strategy to a [`ConverterChain`].
pub trait SecondaryConverter: Send + Sync {
    /// Name used in logs and [`ConversionAttempt`]s.
    fn name(&self) -> &str;

    /// Produce the secondary file.
    fn convert(&self, input: &ConversionInput<'_>, options: &ConvertOptions) -> Result<Vec<u8>>;
}

/// Built-in converter families, in the order they are usually chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConverterKind {
    /// [`NativePdfConverter`]
    Native,
    /// `pandoc` then the office suite, see [`ExternalCommandConverter`]
    External,
    /// [`MinimalPdfConverter`]
    Minimal,
}

impl ConverterKind {
    /// All kinds in default chain order.
    pub const ALL: [ConverterKind; 3] = [
        ConverterKind::Native,
        ConverterKind::External,
        ConverterKind::Minimal,
    ];

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            ConverterKind::Native => "native",
            ConverterKind::External => "external",
            ConverterKind::Minimal => "minimal",
        }
    }
}

impl fmt::Display for ConverterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConverterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ConverterKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::Other(format!(
                    "Unknown converter '{}' (expected native, external or minimal)",
                    s
                ))
            })
    }
}

/// Options for output conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Primary format
    pub primary: PrimaryFormat,

    /// Primary rendering options
    pub render: RenderOptions,

    /// Time budget for each external command
    pub timeout: Duration,

    /// `pandoc` executable
    pub pandoc_program: String,

    /// Office suite executable
    pub office_program: String,

    /// Converter families, in chain order
    pub converters: Vec<ConverterKind>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            primary: PrimaryFormat::default(),
            render: RenderOptions::default(),
            timeout: DEFAULT_TIMEOUT,
            pandoc_program: "pandoc".to_string(),
            office_program: "soffice".to_string(),
            converters: ConverterKind::ALL.to_vec(),
        }
    }
}

impl ConvertOptions {
    /// Create default conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary format.
    pub fn with_primary(mut self, format: PrimaryFormat) -> Self {
        self.primary = format;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set the external command timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `pandoc` executable.
    pub fn with_pandoc(mut self, program: impl Into<String>) -> Self {
        self.pandoc_program = program.into();
        self
    }

    /// Set the office suite executable.
    pub fn with_office(mut self, program: impl Into<String>) -> Self {
        self.office_program = program.into();
        self
    }

    /// Select the converter families.
    pub fn with_converters(mut self, converters: Vec<ConverterKind>) -> Self {
        self.converters = converters;
        self
    }
}

/// Outcome of one converter in the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionAttempt {
    /// Converter name
    pub converter: String,
    /// Failure description, `None` on success
    pub error: Option<String>,
}

impl ConversionAttempt {
    /// Whether the converter produced output.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

impl fmt::Display for ConversionAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(f, "{}: ok", self.converter),
            Some(e) => write!(f, "{}: {}", self.converter, e),
        }
    }
}

/// Ordered fallback list of secondary converters.
#[derive(Clone, Default)]
pub struct ConverterChain {
    converters: Vec<Arc<dyn SecondaryConverter>>,
}

impl ConverterChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain of the built-in converters selected in `options`.
    pub fn from_options(options: &ConvertOptions) -> Self {
        let mut chain = Self::new();
        for kind in &options.converters {
            match kind {
                ConverterKind::Native => chain.push(Arc::new(NativePdfConverter::new())),
                ConverterKind::External => {
                    chain.push(Arc::new(ExternalCommandConverter::pandoc(
                        &options.pandoc_program,
                    )));
                    chain.push(Arc::new(ExternalCommandConverter::office(
                        &options.office_program,
                    )));
                }
                ConverterKind::Minimal => chain.push(Arc::new(MinimalPdfConverter::new())),
            }
        }
        chain
    }

    /// Append a converter.
    pub fn push(&mut self, converter: Arc<dyn SecondaryConverter>) {
        self.converters.push(converter);
    }

    /// Append a converter, builder style.
    pub fn with(mut self, converter: Arc<dyn SecondaryConverter>) -> Self {
        self.push(converter);
        self
    }

    /// Converter names in order.
    pub fn names(&self) -> Vec<&str> {
        self.converters.iter().map(|c| c.name()).collect()
    }

    /// Number of converters.
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Try each converter in order until one succeeds.
    pub fn run(
        &self,
        input: &ConversionInput<'_>,
        options: &ConvertOptions,
    ) -> (Option<Vec<u8>>, Vec<ConversionAttempt>) {
        let mut attempts = Vec::with_capacity(self.converters.len());

        for converter in &self.converters {
            let name = converter.name().to_string();
            match converter.convert(input, options) {
                Ok(bytes) => {
                    log::info!("Converter '{}' produced {} bytes", name, bytes.len());
                    attempts.push(ConversionAttempt {
                        converter: name,
                        error: None,
                    });
                    return (Some(bytes), attempts);
                }
                Err(e) => {
                    log::warn!("Converter '{}' failed, trying next: {}", name, e);
                    attempts.push(ConversionAttempt {
                        converter: name,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        (None, attempts)
    }
}

impl fmt::Debug for ConverterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterChain")
            .field("converters", &self.names())
            .finish()
    }
}

/// Primary artifact, optional secondary artifact and the chain's log.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    /// Primary-format artifact
    pub primary: Artifact,
    /// PDF artifact, if any converter succeeded
    pub secondary: Option<Artifact>,
    /// One entry per converter tried
    pub attempts: Vec<ConversionAttempt>,
}

impl ConversionOutcome {
    /// All produced artifacts, primary first.
    pub fn artifacts(&self) -> Vec<&Artifact> {
        std::iter::once(&self.primary)
            .chain(self.secondary.as_ref())
            .collect()
    }

    /// Whether the secondary artifact was produced.
    pub fn is_complete(&self) -> bool {
        self.secondary.is_some()
    }

    /// Consume into the artifact list.
    pub fn into_artifacts(self) -> Vec<Artifact> {
        std::iter::once(self.primary).chain(self.secondary).collect()
    }
}

/// Serializes documents and drives the converter chain.
#[derive(Debug, Clone)]
pub struct OutputConverter {
    options: ConvertOptions,
    chain: ConverterChain,
}

impl OutputConverter {
    /// Converter with the built-in chain selected in `options`.
    pub fn new(options: ConvertOptions) -> Self {
        let chain = ConverterChain::from_options(&options);
        Self { options, chain }
    }

    /// Converter with an explicit chain.
    pub fn with_chain(options: ConvertOptions, chain: ConverterChain) -> Self {
        Self { options, chain }
    }

    /// Options in use.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// The fallback chain.
    pub fn chain(&self) -> &ConverterChain {
        &self.chain
    }

    /// Serialize the primary artifact, then attempt the PDF.
    ///
    /// Only a failure to produce the primary artifact is an error.
    pub fn convert(&self, document: &Document, spec: &ReportSpec) -> Result<ConversionOutcome> {
        let format = self.options.primary;
        let stem = spec.file_stem();
        let content = render::render(document, format, &self.options.render)?;
        let primary = Artifact::new(
            format!("{}.{}", stem, format.extension()),
            format.mime(),
            content.into_bytes(),
        );

        let input = ConversionInput {
            document,
            spec,
            primary: &primary,
            format,
        };
        let (bytes, attempts) = self.chain.run(&input, &self.options);
        let secondary = bytes.map(|b| Artifact::new(format!("{}.pdf", stem), PDF_MIME, b));
        if secondary.is_none() {
            log::warn!(
                "All {} PDF converters failed; returning {} only",
                attempts.len(),
                primary.name
            );
        }

        Ok(ConversionOutcome {
            primary,
            secondary,
            attempts,
        })
    }
}

impl Default for OutputConverter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

/// Convert a document with the built-in chain selected in `options`.
pub fn convert(
    document: &Document,
    spec: &ReportSpec,
    options: &ConvertOptions,
) -> Result<ConversionOutcome> {
    OutputConverter::new(options.clone()).convert(document, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Metadata;

    struct Failing;

    impl SecondaryConverter for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn convert(&self, _: &ConversionInput<'_>, _: &ConvertOptions) -> Result<Vec<u8>> {
            Err(Error::conversion("failing", "always fails"))
        }
    }

    struct Echo;

    impl SecondaryConverter for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn convert(&self, input: &ConversionInput<'_>, _: &ConvertOptions) -> Result<Vec<u8>> {
            Ok(input.primary.bytes.clone())
        }
    }

    fn spec() -> ReportSpec {
        ReportSpec::builder()
            .title("Smart Cities: A Review?")
            .language("en")
            .participant("Sara")
            .professor("Dr. Ali")
            .university("Cairo University")
            .college("Engineering")
            .department("Computing")
            .year(2024)
            .pages(5)
            .reference_style("apa")
            .build()
            .unwrap()
    }

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_primary(PrimaryFormat::Text)
            .with_timeout(Duration::from_secs(5))
            .with_pandoc("/opt/pandoc")
            .with_converters(vec![ConverterKind::Minimal]);

        assert_eq!(options.primary, PrimaryFormat::Text);
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.pandoc_program, "/opt/pandoc");
        assert_eq!(options.converters, vec![ConverterKind::Minimal]);
        assert_eq!(ConvertOptions::default().timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_converter_kind_from_str() {
        assert_eq!("Native".parse::<ConverterKind>().unwrap(), ConverterKind::Native);
        assert_eq!(" minimal ".parse::<ConverterKind>().unwrap(), ConverterKind::Minimal);
        assert!("docx".parse::<ConverterKind>().is_err());
    }

    #[test]
    fn test_default_chain_order() {
        let chain = ConverterChain::from_options(&ConvertOptions::default());
        assert_eq!(chain.names(), vec!["native-pdf", "pandoc", "office", "minimal-pdf"]);
    }

    #[test]
    fn test_chain_falls_back() {
        let spec = spec();
        let doc = Document::new(Metadata::from_spec(&spec));
        let chain = ConverterChain::new()
            .with(Arc::new(Failing))
            .with(Arc::new(Echo))
            .with(Arc::new(Failing));
        let converter = OutputConverter::with_chain(ConvertOptions::default(), chain);

        let outcome = converter.convert(&doc, &spec).unwrap();
        assert_eq!(outcome.primary.name, "Smart Cities A Review.md");
        let secondary = outcome.secondary.as_ref().unwrap();
        assert_eq!(secondary.name, "Smart Cities A Review.pdf");
        assert_eq!(secondary.bytes, outcome.primary.bytes);
        // The third converter is never reached.
        assert_eq!(outcome.attempts.len(), 2);
        assert!(!outcome.attempts[0].succeeded());
        assert!(outcome.attempts[1].succeeded());
    }

    #[test]
    fn test_all_failing_keeps_primary() {
        let spec = spec();
        let doc = Document::new(Metadata::from_spec(&spec));
        let chain = ConverterChain::new().with(Arc::new(Failing));
        let outcome = OutputConverter::with_chain(ConvertOptions::default(), chain)
            .convert(&doc, &spec)
            .unwrap();

        assert!(!outcome.is_complete());
        assert_eq!(outcome.artifacts().len(), 1);
        assert_eq!(
            outcome.attempts[0].to_string(),
            "failing: Converter 'failing' failed: always fails"
        );
    }

    #[test]
    fn test_artifact_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = Artifact::new("a.txt", "text/plain", b"hello".to_vec());
        let path = artifact.write_to(dir.path()).unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"hello");
    }
}
