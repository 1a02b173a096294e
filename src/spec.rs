//! Report request types and validation.
//!
//! A [`ReportSpec`] can only be obtained through [`ReportSpecBuilder::build`]
//! (or [`ReportSpecBuilder::build_with_limits`]), so every value handed to the
//! pipeline has already passed validation. Builders are `Deserialize`, which
//! lets the CLI read requests from JSON and still go through the same checks.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;

/// Language the report is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English, left-to-right
    #[serde(rename = "EN")]
    En,
    /// Arabic, right-to-left
    #[serde(rename = "AR")]
    Ar,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// Parse a language code or name, case-insensitively.
    ///
    /// Accepts `EN`/`English` and `AR`/`Arabic`/`العربية`.
    pub fn parse(s: &str) -> Option<Self> {
        match trim_input(s).to_lowercase().as_str() {
            "en" | "english" => Some(Language::En),
            "ar" | "arabic" | "العربية" => Some(Language::Ar),
            _ => None,
        }
    }

    /// Two-letter code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ar => "AR",
        }
    }

    /// Whether text in this language runs right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::parse(s).ok_or_else(|| {
            Error::invalid("language", format!("unrecognized language '{}'", s.trim()))
        })
    }
}

/// Citation style used for the reference list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReferenceStyle {
    /// American Psychological Association (default)
    #[default]
    Apa,
    /// Institute of Electrical and Electronics Engineers, numbered
    Ieee,
    /// Modern Language Association
    Mla,
    /// Harvard author-date
    Harvard,
    /// Chicago notes-bibliography
    Chicago,
}

impl ReferenceStyle {
    /// All supported styles.
    pub const ALL: [ReferenceStyle; 5] = [
        ReferenceStyle::Apa,
        ReferenceStyle::Ieee,
        ReferenceStyle::Mla,
        ReferenceStyle::Harvard,
        ReferenceStyle::Chicago,
    ];

    /// Parse a style name case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match trim_input(s).to_lowercase().as_str() {
            "apa" => Some(ReferenceStyle::Apa),
            "ieee" => Some(ReferenceStyle::Ieee),
            "mla" => Some(ReferenceStyle::Mla),
            "harvard" => Some(ReferenceStyle::Harvard),
            "chicago" => Some(ReferenceStyle::Chicago),
            _ => None,
        }
    }

    /// Parse a style name, falling back to APA for anything unrecognized.
    ///
    /// The APA fallback is part of the public contract: callers may pass
    /// free-form style names and always get a usable style back.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            log::warn!("Unrecognized reference style '{}', using APA", s.trim());
            ReferenceStyle::Apa
        })
    }

    /// Display name of the style.
    pub fn name(&self) -> &'static str {
        match self {
            ReferenceStyle::Apa => "APA",
            ReferenceStyle::Ieee => "IEEE",
            ReferenceStyle::Mla => "MLA",
            ReferenceStyle::Harvard => "Harvard",
            ReferenceStyle::Chicago => "Chicago",
        }
    }

    /// Whether entries carry a `[n]` prefix.
    pub fn is_numbered(&self) -> bool {
        matches!(self, ReferenceStyle::Ieee)
    }
}

impl fmt::Display for ReferenceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for ReferenceStyle {
    fn from(s: String) -> Self {
        ReferenceStyle::parse_or_default(&s)
    }
}

impl From<ReferenceStyle> for String {
    fn from(style: ReferenceStyle) -> Self {
        style.name().to_string()
    }
}

/// Bounds applied when validating a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecLimits {
    /// Accepted academic years (inclusive)
    pub years: RangeInclusive<i32>,

    /// Accepted target page counts (inclusive)
    pub pages: RangeInclusive<u32>,
}

impl SpecLimits {
    /// Create limits with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accepted year range.
    pub fn with_years(mut self, years: RangeInclusive<i32>) -> Self {
        self.years = years;
        self
    }

    /// Set the accepted page range.
    pub fn with_pages(mut self, pages: RangeInclusive<u32>) -> Self {
        self.pages = pages;
        self
    }
}

impl Default for SpecLimits {
    fn default() -> Self {
        Self {
            years: 1900..=2100,
            pages: 5..=40,
        }
    }
}

/// A validated report request.
///
/// Immutable once built; every pipeline stage reads it by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSpec {
    title: String,
    language: Language,
    participants: Vec<String>,
    professor: String,
    university: String,
    college: String,
    department: String,
    year: i32,
    pages: u32,
    reference_style: ReferenceStyle,
}

impl ReportSpec {
    /// Start building a request.
    pub fn builder() -> ReportSpecBuilder {
        ReportSpecBuilder::new()
    }

    /// Report title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Report language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Participant (student) names, at least one.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Participant names joined for display.
    pub fn participants_display(&self) -> String {
        let separator = match self.language {
            Language::En => ", ",
            Language::Ar => "، ",
        };
        self.participants.join(separator)
    }

    /// Supervising professor.
    pub fn professor(&self) -> &str {
        &self.professor
    }

    /// University name.
    pub fn university(&self) -> &str {
        &self.university
    }

    /// College name.
    pub fn college(&self) -> &str {
        &self.college
    }

    /// Department name.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Academic year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Target page count.
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Citation style.
    pub fn reference_style(&self) -> ReferenceStyle {
        self.reference_style
    }

    /// File stem derived from the title.
    ///
    /// Keeps alphanumerics, space, hyphen and underscore; falls back to
    /// `report` when nothing survives.
    pub fn file_stem(&self) -> String {
        let stem: String = self
            .title
            .chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
            .collect();
        let stem = stem.trim();
        if stem.is_empty() {
            "report".to_string()
        } else {
            stem.to_string()
        }
    }
}

/// Participant names as either a list or one comma-separated string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum NameList {
    One(String),
    Many(Vec<String>),
}

impl Default for NameList {
    fn default() -> Self {
        NameList::Many(Vec::new())
    }
}

/// Builder (and JSON shape) for [`ReportSpec`].
///
/// All fields are collected as loose strings and checked in [`build`](Self::build).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSpecBuilder {
    title: String,
    language: String,
    #[serde(alias = "student_names", alias = "students")]
    participants: NameList,
    professor: String,
    university: String,
    college: String,
    department: String,
    year: i32,
    pages: u32,
    #[serde(alias = "ref_style")]
    reference_style: String,
}

impl ReportSpecBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the language (code or name).
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Add one participant name (may itself be comma-separated).
    pub fn participant(mut self, name: impl Into<String>) -> Self {
        let mut names = match self.participants {
            NameList::One(s) => vec![s],
            NameList::Many(v) => v,
        };
        names.push(name.into());
        self.participants = NameList::Many(names);
        self
    }

    /// Replace the participant list.
    pub fn participants<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = NameList::Many(names.into_iter().map(Into::into).collect());
        self
    }

    /// Set the professor.
    pub fn professor(mut self, professor: impl Into<String>) -> Self {
        self.professor = professor.into();
        self
    }

    /// Set the university.
    pub fn university(mut self, university: impl Into<String>) -> Self {
        self.university = university.into();
        self
    }

    /// Set the college.
    pub fn college(mut self, college: impl Into<String>) -> Self {
        self.college = college.into();
        self
    }

    /// Set the department.
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Set the academic year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Set the target page count.
    pub fn pages(mut self, pages: u32) -> Self {
        self.pages = pages;
        self
    }

    /// Set the reference style name.
    pub fn reference_style(mut self, style: impl Into<String>) -> Self {
        self.reference_style = style.into();
        self
    }

    /// Validate against the default [`SpecLimits`].
    pub fn build(self) -> Result<ReportSpec> {
        self.build_with_limits(&SpecLimits::default())
    }

    /// Validate against the given limits.
    pub fn build_with_limits(self, limits: &SpecLimits) -> Result<ReportSpec> {
        let title = required("title", &self.title)?;
        let language = self.language.parse::<Language>()?;

        let raw_names = match self.participants {
            NameList::One(s) => vec![s],
            NameList::Many(v) => v,
        };
        let participants: Vec<String> = raw_names
            .iter()
            .flat_map(|entry| entry.split([',', '،']))
            .map(normalize)
            .filter(|name| !name.is_empty())
            .collect();
        if participants.is_empty() {
            return Err(Error::invalid(
                "participants",
                "at least one participant name is required",
            ));
        }

        let professor = required("professor", &self.professor)?;
        let university = required("university", &self.university)?;
        let college = required("college", &self.college)?;
        let department = required("department", &self.department)?;

        if !limits.years.contains(&self.year) {
            return Err(Error::invalid(
                "year",
                format!(
                    "must be between {} and {}, got {}",
                    limits.years.start(),
                    limits.years.end(),
                    self.year
                ),
            ));
        }

        if !limits.pages.contains(&self.pages) {
            return Err(Error::invalid(
                "pages",
                format!(
                    "must be between {} and {}, got {}",
                    limits.pages.start(),
                    limits.pages.end(),
                    self.pages
                ),
            ));
        }

        let reference_style = ReferenceStyle::parse_or_default(&self.reference_style);

        Ok(ReportSpec {
            title,
            language,
            participants,
            professor,
            university,
            college,
            department,
            year: self.year,
            pages: self.pages,
            reference_style,
        })
    }
}

/// Pasted text often starts with a byte order mark, which `trim` keeps.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Drop byte order marks, trim and NFC-normalize a user-supplied string.
fn normalize(s: &str) -> String {
    let s: String = s.chars().filter(|&c| c != BYTE_ORDER_MARK).collect();
    s.trim().nfc().collect()
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let value = normalize(value);
    if value.is_empty() {
        Err(Error::invalid(field, "must not be empty"))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_builder() -> ReportSpecBuilder {
        ReportSpec::builder()
            .title("Artificial Intelligence in Modern Education")
            .language("EN")
            .participant("Sara Ahmed")
            .professor("Dr. Hassan Ali")
            .university("Cairo University")
            .college("Faculty of Engineering")
            .department("Computer Science")
            .year(2024)
            .pages(10)
            .reference_style("APA")
    }

    #[test]
    fn test_build_valid_spec() {
        let spec = valid_builder().build().unwrap();
        assert_eq!(spec.title(), "Artificial Intelligence in Modern Education");
        assert_eq!(spec.language(), Language::En);
        assert_eq!(spec.participants(), &["Sara Ahmed".to_string()]);
        assert_eq!(spec.reference_style(), ReferenceStyle::Apa);
    }

    #[test]
    fn test_language_parse_variants() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("English"), Some(Language::En));
        assert_eq!(Language::parse(" AR "), Some(Language::Ar));
        assert_eq!(Language::parse("العربية"), Some(Language::Ar));
        assert_eq!(Language::parse("fr"), None);
    }

    #[test]
    fn test_unrecognized_language_is_invalid() {
        let err = valid_builder().language("klingon").build().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSpec {
                field: "language",
                ..
            }
        ));
    }

    #[test]
    fn test_reference_style_defaults_to_apa() {
        assert_eq!(ReferenceStyle::parse_or_default("klingon"), ReferenceStyle::Apa);
        assert_eq!(ReferenceStyle::parse_or_default("ieee"), ReferenceStyle::Ieee);
        assert_eq!(ReferenceStyle::parse_or_default("HARVARD"), ReferenceStyle::Harvard);

        let spec = valid_builder().reference_style("klingon").build().unwrap();
        assert_eq!(spec.reference_style(), ReferenceStyle::Apa);
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let spec = valid_builder()
            .title("\u{FEFF}Water Policy")
            .language("\u{FEFF}EN")
            .build()
            .unwrap();
        assert_eq!(spec.title(), "Water Policy");
        assert_eq!(spec.language(), Language::En);
        assert_eq!(crate::detect::TextDirection::of(spec.title()), crate::detect::TextDirection::Ltr);

        let err = valid_builder().title("\u{FEFF} ").build().unwrap_err();
        assert!(matches!(err, Error::InvalidSpec { field: "title", .. }));
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = valid_builder().title("   ").build().unwrap_err();
        assert!(matches!(err, Error::InvalidSpec { field: "title", .. }));
    }

    #[test]
    fn test_pages_bounds() {
        assert!(valid_builder().pages(5).build().is_ok());
        assert!(valid_builder().pages(40).build().is_ok());
        assert!(valid_builder().pages(4).build().is_err());
        assert!(valid_builder().pages(41).build().is_err());
    }

    #[test]
    fn test_year_bounds_configurable() {
        let limits = SpecLimits::new().with_years(2000..=2030);
        assert!(valid_builder().year(2031).build_with_limits(&limits).is_err());
        assert!(valid_builder().year(2031).build().is_ok());
        assert!(valid_builder().year(1899).build().is_err());
    }

    #[test]
    fn test_participants_split_on_commas() {
        let spec = valid_builder()
            .participants(["Sara Ahmed, Omar Khaled", " ", "Lina Said"])
            .build()
            .unwrap();
        assert_eq!(
            spec.participants(),
            &[
                "Sara Ahmed".to_string(),
                "Omar Khaled".to_string(),
                "Lina Said".to_string()
            ]
        );
        assert_eq!(
            spec.participants_display(),
            "Sara Ahmed, Omar Khaled, Lina Said"
        );
    }

    #[test]
    fn test_missing_participants_rejected() {
        let err = valid_builder()
            .participants(Vec::<String>::new())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSpec {
                field: "participants",
                ..
            }
        ));
    }

    #[test]
    fn test_file_stem_sanitized() {
        let spec = valid_builder().title("AI: Past/Present & Future?").build().unwrap();
        assert_eq!(spec.file_stem(), "AI PastPresent  Future");

        let spec = valid_builder().title("???").build().unwrap();
        assert_eq!(spec.file_stem(), "report");
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "title": "Renewable Energy",
            "language": "Arabic",
            "student_names": "Omar, Lina",
            "professor": "Dr. Noor",
            "university": "KSU",
            "college": "Science",
            "department": "Physics",
            "year": 2023,
            "pages": 8,
            "ref_style": "chicago"
        }"#;
        let builder: ReportSpecBuilder = serde_json::from_str(json).unwrap();
        let spec = builder.build().unwrap();
        assert_eq!(spec.language(), Language::Ar);
        assert_eq!(spec.participants().len(), 2);
        assert_eq!(spec.reference_style(), ReferenceStyle::Chicago);
    }
}
