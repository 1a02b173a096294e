//! Word counting and page-length adjustment.
//!
//! The controller measures prose in whitespace-delimited words and moves it
//! toward a word band derived from a page target. Adjustment direction is
//! fixed by the first measurement: text below the band only grows (elaboration
//! sentences are appended), text above it only shrinks (boilerplate connective
//! phrases are stripped). Reaching the band is not guaranteed; the returned
//! [`AdjustmentReport`] says whether it was.

mod phrases;

pub use phrases::{boilerplate_phrases, elaboration_pool};

use crate::model::Section;
use crate::spec::Language;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Words assumed to fill one page at the default style.
pub const TARGET_WORDS_PER_PAGE: u32 = 360;

/// Default relative tolerance around the page target.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Default number of adjustment passes.
pub const DEFAULT_MAX_PASSES: u32 = 3;

const SENTENCE_TERMINATORS: [char; 4] = ['.', '!', '?', '؟'];
const CLAUSE_PUNCTUATION: [char; 10] = [',', '.', ';', ':', '!', '?', '،', '؛', '؟', '-'];

/// Count whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Options for the length controller.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthOptions {
    /// Words per page
    pub words_per_page: u32,

    /// Relative tolerance around the target (0.05 = ±5%)
    pub tolerance: f64,

    /// Maximum adjustment passes
    pub max_passes: u32,
}

impl LengthOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the words-per-page constant.
    pub fn with_words_per_page(mut self, words: u32) -> Self {
        self.words_per_page = words.max(1);
        self
    }

    /// Set the tolerance, clamped to `[0, 1)`.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.clamp(0.0, 0.99);
        self
    }

    /// Set the pass budget.
    pub fn with_max_passes(mut self, passes: u32) -> Self {
        self.max_passes = passes;
        self
    }
}

impl Default for LengthOptions {
    fn default() -> Self {
        Self {
            words_per_page: TARGET_WORDS_PER_PAGE,
            tolerance: DEFAULT_TOLERANCE,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

/// Inclusive word-count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBand {
    /// Minimum word count
    pub min: usize,
    /// Maximum word count
    pub max: usize,
}

impl WordBand {
    /// Create a band; the bounds are swapped if given in the wrong order.
    pub fn new(min: usize, max: usize) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Band of `target · (1 ∓ tolerance)` words, rounded.
    pub fn around(target: f64, tolerance: f64) -> Self {
        let target = target.max(0.0);
        Self::new(
            (target * (1.0 - tolerance)).round() as usize,
            (target * (1.0 + tolerance)).round() as usize,
        )
    }

    /// Check if a word count lies within the band.
    pub fn contains(&self, words: usize) -> bool {
        (self.min..=self.max).contains(&words)
    }

    /// Midpoint of the band.
    pub fn center(&self) -> usize {
        (self.min + self.max) / 2
    }
}

/// Outcome of a length adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentReport {
    /// Band that was aimed for
    pub band: WordBand,

    /// Word count before adjustment
    pub initial_words: usize,

    /// Word count after adjustment
    pub final_words: usize,

    /// Passes actually run
    pub passes: u32,

    /// Whether the final count lies within the band
    pub within_band: bool,
}

/// Adjusted text together with its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    /// Adjusted text
    pub text: String,

    /// What happened
    pub report: AdjustmentReport,
}

/// Expands or trims prose toward a word band.
#[derive(Debug, Clone)]
pub struct LengthController {
    options: LengthOptions,
    language: Language,
    boilerplate: Vec<Regex>,
}

impl LengthController {
    /// Create a controller using the phrase pools of `language`.
    pub fn new(options: LengthOptions, language: Language) -> Self {
        let boilerplate = boilerplate_phrases(language)
            .iter()
            .filter_map(|phrase| {
                RegexBuilder::new(&regex::escape(phrase))
                    .case_insensitive(true)
                    .build()
                    .ok()
            })
            .collect();
        Self {
            options,
            language,
            boilerplate,
        }
    }

    /// Controller options.
    pub fn options(&self) -> &LengthOptions {
        &self.options
    }

    /// Language of the phrase pools.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Estimated page count of the text.
    pub fn estimate_pages(&self, text: &str) -> f64 {
        word_count(text) as f64 / self.options.words_per_page as f64
    }

    /// Word band for a page target.
    pub fn target_band(&self, pages: u32) -> WordBand {
        WordBand::around(
            pages as f64 * self.options.words_per_page as f64,
            self.options.tolerance,
        )
    }

    /// Adjust `text` toward the band for `pages`.
    pub fn adjust(&self, text: &str, pages: u32, max_passes: u32) -> Adjustment {
        self.adjust_to_band(text, self.target_band(pages), max_passes)
    }

    /// Adjust `text` toward an explicit band.
    pub fn adjust_to_band(&self, text: &str, band: WordBand, max_passes: u32) -> Adjustment {
        self.adjust_from(text, band, max_passes, 0)
    }

    /// Adjust the prose of a whole report body toward the band for `pages`.
    ///
    /// Bullets are left alone. Paragraph text is adjusted section by section;
    /// each section aims for a share of the remaining target proportional to
    /// its paragraph word count, so earlier deviations are absorbed by later
    /// sections. The last adjustable section aims for whatever the aggregate
    /// band still allows.
    pub fn adjust_sections(&self, sections: &mut [Section], pages: u32) -> AdjustmentReport {
        let band = self.target_band(pages);
        let initial_words: usize = sections.iter().map(Section::word_count).sum();

        if band.contains(initial_words) {
            return AdjustmentReport {
                band,
                initial_words,
                final_words: initial_words,
                passes: 0,
                within_band: true,
            };
        }

        let fixed: usize = sections
            .iter()
            .map(|s| s.word_count() - s.paragraph_word_count())
            .sum();
        let mut remaining_weight: usize = sections.iter().map(Section::paragraph_word_count).sum();
        let mut remaining_target = band.center().saturating_sub(fixed) as f64;
        let last = sections
            .iter()
            .rposition(|s| s.paragraph_word_count() > 0);

        let mut done = 0usize;
        let mut passes = 0u32;

        for (index, section) in sections.iter_mut().enumerate() {
            let weight = section.paragraph_word_count();
            if weight == 0 {
                continue;
            }

            let section_band = if Some(index) == last {
                WordBand::new(
                    band.min.saturating_sub(fixed + done),
                    band.max.saturating_sub(fixed + done),
                )
            } else {
                let share = remaining_target * weight as f64 / remaining_weight as f64;
                WordBand::around(share, self.options.tolerance)
            };

            let original = section.paragraph_text();
            let adjusted =
                self.adjust_from(&original, section_band, self.options.max_passes, index);
            log::debug!(
                "Section '{}': {} -> {} words (band {}..={})",
                section.heading,
                adjusted.report.initial_words,
                adjusted.report.final_words,
                section_band.min,
                section_band.max
            );
            if adjusted.text != original {
                section.replace_paragraph_text(&adjusted.text);
            }

            passes = passes.max(adjusted.report.passes);
            done += adjusted.report.final_words;
            remaining_target = (remaining_target - adjusted.report.final_words as f64).max(0.0);
            remaining_weight -= weight;
        }

        let final_words: usize = sections.iter().map(Section::word_count).sum();
        AdjustmentReport {
            band,
            initial_words,
            final_words,
            passes,
            within_band: band.contains(final_words),
        }
    }

    fn adjust_from(&self, text: &str, band: WordBand, max_passes: u32, offset: usize) -> Adjustment {
        let initial_words = word_count(text);
        let mut current = text.to_string();
        let mut passes = 0;

        if !band.contains(initial_words) {
            let expanding = initial_words < band.min;
            let mut cursor = offset;

            while passes < max_passes {
                let count = word_count(&current);
                if band.contains(count) || (expanding && count > band.max) || (!expanding && count < band.min) {
                    break;
                }

                passes += 1;
                let next = if expanding {
                    self.expand(&current, count, band, &mut cursor)
                } else {
                    self.trim(&current, count, band)
                };
                let next_count = word_count(&next);
                log::debug!("Length pass {}: {} -> {} words", passes, count, next_count);

                let stalled = next_count == count;
                current = next;
                if stalled {
                    break;
                }
            }
        }

        let final_words = word_count(&current);
        Adjustment {
            text: current,
            report: AdjustmentReport {
                band,
                initial_words,
                final_words,
                passes,
                within_band: band.contains(final_words),
            },
        }
    }

    /// Append one paragraph of elaboration sentences.
    ///
    /// Sentences are taken round-robin from the pool; one that would push the
    /// count past the band is skipped. A pass considers at most two full
    /// cycles of the pool.
    fn expand(&self, text: &str, mut count: usize, band: WordBand, cursor: &mut usize) -> String {
        let pool = elaboration_pool(self.language);
        let mut added: Vec<String> = Vec::new();
        let mut considered = 0;

        while count < band.min && considered < pool.len() * 2 {
            let sentence = pool[*cursor % pool.len()];
            *cursor += 1;
            considered += 1;

            let words = word_count(sentence);
            if count + words > band.max {
                continue;
            }
            added.push(format!("{}.", sentence));
            count += words;
        }

        if added.is_empty() {
            return text.to_string();
        }

        let paragraph = added.join(" ");
        if text.trim().is_empty() {
            paragraph
        } else {
            format!("{}\n\n{}", text.trim_end(), paragraph)
        }
    }

    /// Strip boilerplate phrases sentence by sentence until the surplus is
    /// closed, never dropping below the band minimum.
    fn trim(&self, text: &str, mut count: usize, band: WordBand) -> String {
        let mut paragraphs: Vec<Vec<String>> = text
            .split("\n\n")
            .map(|p| split_sentences(p).into_iter().map(String::from).collect())
            .collect();

        'outer: for sentences in paragraphs.iter_mut() {
            for sentence in sentences.iter_mut() {
                for pattern in &self.boilerplate {
                    if count <= band.max {
                        break 'outer;
                    }
                    if !pattern.is_match(sentence) {
                        continue;
                    }

                    let candidate = clean_sentence(&pattern.replace_all(sentence, ""));
                    let removed = word_count(sentence).saturating_sub(word_count(&candidate));
                    if removed == 0 || count - removed < band.min {
                        continue;
                    }
                    *sentence = candidate;
                    count -= removed;
                }
            }
        }

        paragraphs
            .into_iter()
            .map(|sentences| {
                sentences
                    .into_iter()
                    .filter(|s| s.chars().any(char::is_alphanumeric))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Split a paragraph into sentences.
///
/// A sentence ends at a terminator followed by whitespace or the end of the
/// text. Sentences are trimmed; joining them with single spaces keeps the
/// word count unchanged.
fn split_sentences(paragraph: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = paragraph.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !SENTENCE_TERMINATORS.contains(&c) {
            continue;
        }
        let at_boundary = match chars.peek() {
            Some(&(_, next)) => next.is_whitespace(),
            None => true,
        };
        if at_boundary {
            let end = i + c.len_utf8();
            let sentence = paragraph[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = paragraph[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Tidy a sentence after a phrase was cut out of it.
fn clean_sentence(sentence: &str) -> String {
    let mut tokens: Vec<String> = Vec::new();
    for token in sentence.split_whitespace() {
        let punctuation_only = token.chars().all(|c| CLAUSE_PUNCTUATION.contains(&c));
        match tokens.last_mut() {
            Some(previous) if punctuation_only => previous.push_str(token),
            _ => tokens.push(token.to_string()),
        }
    }

    let joined = tokens.join(" ");
    let body = joined.trim_start_matches(|c: char| c.is_whitespace() || CLAUSE_PUNCTUATION.contains(&c));
    capitalize(body)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentBlock, SectionKind};

    fn controller() -> LengthController {
        LengthController::new(LengthOptions::default(), Language::En)
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("  one  two\n\nthree "), 3);
    }

    #[test]
    fn test_collapse_whitespace_preserves_count() {
        let text = "  A  sentence\twith \n\n odd   spacing. ";
        let collapsed = collapse_whitespace(text);
        assert_eq!(collapsed, "A sentence with odd spacing.");
        assert_eq!(word_count(text), word_count(&collapsed));
        assert_eq!(collapse_whitespace(&collapsed), collapsed);
    }

    #[test]
    fn test_target_band() {
        let c = controller();
        assert_eq!(c.target_band(1), WordBand::new(342, 378));
        assert_eq!(c.target_band(5), WordBand::new(1710, 1890));
        assert_eq!(c.target_band(10), WordBand::new(3420, 3780));
    }

    #[test]
    fn test_target_band_strictly_increasing() {
        let c = controller();
        for pages in 1..40 {
            let a = c.target_band(pages);
            let b = c.target_band(pages + 1);
            assert!(a.min < b.min);
            assert!(a.max < b.max);
        }
    }

    #[test]
    fn test_estimate_pages() {
        let c = controller();
        assert_eq!(c.estimate_pages(""), 0.0);
        assert!((c.estimate_pages(&words(720)) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_adjust_within_band_is_identity() {
        let c = controller();
        let text = words(360);
        let result = c.adjust(&text, 1, 3);
        assert_eq!(result.text, text);
        assert_eq!(result.report.passes, 0);
        assert!(result.report.within_band);
    }

    #[test]
    fn test_adjust_expands_short_text() {
        let c = controller();
        let text = "Renewable energy is reshaping power systems.";
        let result = c.adjust(text, 1, 3);
        assert!(result.report.final_words >= word_count(text));
        assert!(result.report.within_band);
        assert!(result.text.starts_with(text));
        assert!(result.report.passes <= 3);
    }

    #[test]
    fn test_adjust_expansion_never_shrinks() {
        let c = controller();
        for passes in 1..=3 {
            let text = "Short.";
            let result = c.adjust(text, 5, passes);
            assert!(result.report.final_words >= 1);
            assert!(result.report.passes <= passes);
        }
    }

    #[test]
    fn test_adjust_empty_text() {
        let c = controller();
        let result = c.adjust("", 1, 3);
        assert_eq!(result.report.initial_words, 0);
        assert!(result.report.final_words > 0);
    }

    #[test]
    fn test_adjust_trims_boilerplate() {
        let c = controller();
        let sentence = "Furthermore, it is worth noting that the method scales well in practice.";
        let text = vec![sentence; 40].join(" ");
        let initial = word_count(&text);
        assert!(initial > 378);

        let result = c.adjust(&text, 1, 3);
        assert!(result.report.final_words <= initial);
        assert!(result.report.within_band);
        assert!(result.text.contains("The method scales well in practice."));
    }

    #[test]
    fn test_trim_without_boilerplate_stops() {
        let c = controller();
        let text = words(500);
        let result = c.adjust(&text, 1, 3);
        assert_eq!(result.text, text);
        assert_eq!(result.report.passes, 1);
        assert!(!result.report.within_band);
    }

    #[test]
    fn test_trim_drops_emptied_sentences() {
        let c = controller();
        let elaboration = "Consequently, we can observe that the implications are far-reaching.";
        let text = format!("Keep this sentence. {}", elaboration);
        let result = c.adjust_to_band(&text, WordBand::new(1, 3), 3);
        assert_eq!(result.text, "Keep this sentence.");
        assert_eq!(result.report.final_words, 3);
    }

    #[test]
    fn test_split_sentences() {
        let parts = split_sentences("First one. Second 3.5 value! Third? Tail");
        assert_eq!(parts, vec!["First one.", "Second 3.5 value!", "Third?", "Tail"]);
        assert_eq!(split_sentences("هذه جملة؟ وهذه أخرى."), vec!["هذه جملة؟", "وهذه أخرى."]);
    }

    #[test]
    fn test_clean_sentence() {
        assert_eq!(clean_sentence(",  the results hold ."), "The results hold.");
        assert_eq!(clean_sentence("."), "");
    }

    #[test]
    fn test_arabic_expansion_uses_arabic_pool() {
        let c = LengthController::new(LengthOptions::default(), Language::Ar);
        let result = c.adjust("نص قصير.", 1, 3);
        assert!(result.report.final_words > 2);
        assert!(crate::detect::contains_arabic(&result.text));
        assert!(!result.text.contains("Furthermore"));
    }

    #[test]
    fn test_adjust_sections_keeps_bullets() {
        let c = controller();
        let mut sections = vec![
            Section::new(
                "Introduction",
                1,
                SectionKind::Introduction,
                vec![ContentBlock::Paragraph(
                    "This report studies the topic in depth.".to_string(),
                )],
            ),
            Section::new(
                "Methods",
                2,
                SectionKind::Subsection,
                vec![
                    ContentBlock::Paragraph("Several methods were compared.".to_string()),
                    ContentBlock::Bullet("Survey data".to_string()),
                    ContentBlock::Bullet("Interviews".to_string()),
                ],
            ),
        ];

        let report = c.adjust_sections(&mut sections, 1);
        assert!(report.final_words >= report.initial_words);
        assert!(report.within_band);

        let bullets: Vec<&str> = sections[1]
            .blocks
            .iter()
            .filter(|b| !b.is_paragraph())
            .map(|b| b.text())
            .collect();
        assert_eq!(bullets, vec!["Survey data", "Interviews"]);
        assert!(sections[0].word_count() > 7);
    }
}
