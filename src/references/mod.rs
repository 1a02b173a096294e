//! Reference records and citation formatting.
//!
//! Formatting is total over [`ReferenceStyle`] × [`SourceKind`]: every style
//! has one formatting function, and every function handles every source kind.
//! Unrecognized style names resolve to APA.

mod sample;
mod styles;

pub use styles::plain_text;
pub use sample::{generate_sample, sample_references, ReferenceSource, SampleReferences, StaticReferences};

use crate::spec::ReferenceStyle;
use serde::{Deserialize, Serialize};

/// Kind of cited source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Journal article (default)
    #[default]
    Journal,
    /// Book
    Book,
    /// Web page
    Website,
    /// Conference paper
    Conference,
}

impl SourceKind {
    /// All source kinds.
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Journal,
        SourceKind::Book,
        SourceKind::Website,
        SourceKind::Conference,
    ];
}

/// A single cited work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Title of the work
    pub title: String,

    /// Authors in citation order
    pub authors: Vec<String>,

    /// Publication year
    pub year: i32,

    /// Source kind
    pub kind: SourceKind,

    /// Journal, conference or site name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    /// Volume number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,

    /// Page range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,

    /// Publisher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// DOI without the resolver prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

impl ReferenceRecord {
    /// Create a record of the given kind.
    pub fn new<I, S>(kind: SourceKind, title: impl Into<String>, authors: I, year: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            authors: authors.into_iter().map(Into::into).collect(),
            year,
            kind,
            venue: None,
            volume: None,
            pages: None,
            publisher: None,
            url: None,
            doi: None,
        }
    }

    /// Set the venue (journal, conference or site name).
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    /// Set the volume.
    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    /// Set the page range.
    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = Some(pages.into());
        self
    }

    /// Set the publisher.
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Set the URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the DOI.
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }
}

/// Formats one record in one style.
pub type FormatFn = fn(&ReferenceRecord) -> String;

/// Formatting function registered for a style.
pub fn formatter(style: ReferenceStyle) -> FormatFn {
    match style {
        ReferenceStyle::Apa => styles::apa,
        ReferenceStyle::Ieee => styles::ieee,
        ReferenceStyle::Mla => styles::mla,
        ReferenceStyle::Harvard => styles::harvard,
        ReferenceStyle::Chicago => styles::chicago,
    }
}

/// Format records in input order.
///
/// IEEE entries are prefixed with `[n]`, numbered from 1.
pub fn format(records: &[ReferenceRecord], style: ReferenceStyle) -> Vec<String> {
    let format_one = formatter(style);
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let entry = format_one(record);
            if style.is_numbered() {
                format!("[{}] {}", i + 1, entry)
            } else {
                entry
            }
        })
        .collect()
}

/// Format records using a style name; unrecognized names fall back to APA.
pub fn format_named(records: &[ReferenceRecord], style: &str) -> Vec<String> {
    format(records, ReferenceStyle::parse_or_default(style))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ReferenceRecord> {
        vec![
            ReferenceRecord::new(SourceKind::Journal, "Deep Learning", ["Smith, J.A."], 2020)
                .with_venue("Research Quarterly")
                .with_volume("12")
                .with_pages("1-20"),
            ReferenceRecord::new(SourceKind::Book, "Teaching Machines", ["Brown, K.L."], 2018)
                .with_publisher("Academic Press"),
        ]
    }

    #[test]
    fn test_every_style_and_kind_has_title_and_year() {
        for style in ReferenceStyle::ALL {
            for kind in SourceKind::ALL {
                let record = ReferenceRecord::new(kind, "Sample Title", ["Lee, H.K."], 2019);
                let entry = formatter(style)(&record);
                assert!(entry.contains("Sample Title"), "{:?} {:?}: {}", style, kind, entry);
                assert!(entry.contains("2019"), "{:?} {:?}: {}", style, kind, entry);
            }
        }
    }

    #[test]
    fn test_ieee_numbering() {
        let entries = format(&records(), ReferenceStyle::Ieee);
        assert!(entries[0].starts_with("[1] "));
        assert!(entries[1].starts_with("[2] "));
    }

    #[test]
    fn test_other_styles_unnumbered() {
        for style in [ReferenceStyle::Apa, ReferenceStyle::Mla, ReferenceStyle::Chicago] {
            for entry in format(&records(), style) {
                assert!(!entry.starts_with('['));
            }
        }
    }

    #[test]
    fn test_unrecognized_style_is_apa() {
        assert_eq!(
            format_named(&records(), "klingon"),
            format(&records(), ReferenceStyle::Apa)
        );
        assert_eq!(
            format_named(&records(), "Harvard"),
            format(&records(), ReferenceStyle::Harvard)
        );
    }

    #[test]
    fn test_order_preserved() {
        let entries = format(&records(), ReferenceStyle::Mla);
        assert!(entries[0].contains("Deep Learning"));
        assert!(entries[1].contains("Teaching Machines"));
    }
}
