//! Script and text-direction detection.

use serde::{Deserialize, Serialize};

/// Unicode blocks treated as Arabic script.
pub const ARABIC_RANGES: [(u32, u32); 5] = [
    (0x0600, 0x06FF), // Arabic
    (0x0750, 0x077F), // Arabic Supplement
    (0x08A0, 0x08FF), // Arabic Extended-A
    (0xFB50, 0xFDFF), // Arabic Presentation Forms-A
    (0xFE70, 0xFEFC), // Arabic Presentation Forms-B
];

/// Layout direction of a text run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left-to-right (default)
    #[default]
    Ltr,
    /// Right-to-left
    Rtl,
}

impl TextDirection {
    /// Direction of the given text, by script detection.
    pub fn of(text: &str) -> Self {
        if contains_arabic(text) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    /// Check for right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }

    /// HTML `dir` attribute value.
    pub fn as_html(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Whether a single character lies in one of the Arabic blocks.
pub fn is_arabic_char(c: char) -> bool {
    let code = c as u32;
    ARABIC_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

/// Whether any character of the text lies in one of the Arabic blocks.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_char)
}
