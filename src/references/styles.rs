//! One formatting function per citation style.
//!
//! Entries are inline Markdown: italics are marked with `*…*` and every
//! field value is escaped, so a literal `*` from a title never reads as
//! emphasis. [`plain_text`] turns an entry back into unmarked text.

use super::{ReferenceRecord, SourceKind};
use crate::render::markdown::escape_markdown;

/// APA 7.
pub fn apa(r: &ReferenceRecord) -> String {
    let r = &escaped(r);
    let body = match r.kind {
        SourceKind::Journal => {
            let mut s = format!("{}.", r.title);
            if let Some(venue) = &r.venue {
                s.push_str(&format!(" *{}*", venue));
                s.push_str(&opt(", ", &r.volume));
                s.push_str(&opt(", ", &r.pages));
                s.push('.');
            }
            if let Some(doi) = &r.doi {
                s.push_str(&format!(" https://doi.org/{}", doi));
            }
            s
        }
        SourceKind::Book => {
            let mut s = format!("*{}*.", r.title);
            if let Some(publisher) = &r.publisher {
                s.push_str(&format!(" {}.", publisher));
            }
            s
        }
        SourceKind::Website => {
            let mut s = format!("{}.", r.title);
            if let Some(venue) = &r.venue {
                s.push_str(&format!(" {}.", venue));
            }
            s.push_str(&opt(" Retrieved from ", &r.url));
            s
        }
        SourceKind::Conference => {
            let mut s = format!("{}.", r.title);
            if let Some(venue) = &r.venue {
                s.push_str(&format!(" In *{}*", venue));
                if let Some(pages) = &r.pages {
                    s.push_str(&format!(" (pp. {})", pages));
                }
                s.push('.');
            }
            if let Some(publisher) = &r.publisher {
                s.push_str(&format!(" {}.", publisher));
            }
            s
        }
    };
    spaced(&apa_authors(&r.authors), format!("({}). {}", r.year, body))
}

/// IEEE (numbering is added by the caller).
pub fn ieee(r: &ReferenceRecord) -> String {
    let r = &escaped(r);
    let year = r.year.to_string();
    let body = match r.kind {
        SourceKind::Journal => {
            let mut s = format!(
                "\"{},\" {}.",
                r.title,
                list([
                    r.venue.as_ref().map(|v| format!("*{}*", v)),
                    r.volume.as_ref().map(|v| format!("vol. {}", v)),
                    r.pages.as_ref().map(|p| format!("pp. {}", p)),
                    Some(year),
                ])
            );
            s.push_str(&opt(" doi: ", &r.doi));
            s
        }
        SourceKind::Book => match &r.publisher {
            Some(publisher) => format!("*{}*. {}, {}.", r.title, publisher, year),
            None => format!("*{}*, {}.", r.title, year),
        },
        SourceKind::Website => {
            let mut s = format!(
                "\"{},\" {}.",
                r.title,
                list([r.venue.clone(), Some(year)])
            );
            s.push_str(&opt(" [Online]. Available: ", &r.url));
            s
        }
        SourceKind::Conference => {
            let venue = r.venue.as_ref().map(|v| format!("in *{}*", v));
            format!(
                "\"{},\" {}.",
                r.title,
                list([
                    venue,
                    Some(year),
                    r.pages.as_ref().map(|p| format!("pp. {}", p)),
                ])
            )
        }
    };
    comma(&r.authors.join(", "), body)
}

/// MLA 9.
pub fn mla(r: &ReferenceRecord) -> String {
    let r = &escaped(r);
    let year = r.year.to_string();
    let italic_venue = r.venue.as_ref().map(|v| format!("*{}*", v));
    let body = match r.kind {
        SourceKind::Journal => format!(
            "\"{}.\" {}.",
            r.title,
            list([
                italic_venue,
                r.volume.as_ref().map(|v| format!("vol. {}", v)),
                r.pages.as_ref().map(|p| format!("pp. {}", p)),
                Some(year),
            ])
        ),
        SourceKind::Book => format!(
            "*{}*. {}.",
            r.title,
            list([r.publisher.clone(), Some(year)])
        ),
        SourceKind::Website => format!(
            "\"{}.\" {}.",
            r.title,
            list([italic_venue, Some(year), r.url.clone()])
        ),
        SourceKind::Conference => format!(
            "\"{}.\" {}.",
            r.title,
            list([
                italic_venue,
                Some(year),
                r.pages.as_ref().map(|p| format!("pp. {}", p)),
            ])
        ),
    };
    sentence(&mla_authors(&r.authors), body)
}

/// Harvard author-date.
pub fn harvard(r: &ReferenceRecord) -> String {
    let r = &escaped(r);
    let body = match r.kind {
        SourceKind::Journal => {
            let mut s = format!("{}, '{}'", r.year, r.title);
            if let Some(venue) = &r.venue {
                s.push_str(&format!(", *{}*", venue));
                s.push_str(&opt(", vol. ", &r.volume));
                s.push_str(&opt(", pp. ", &r.pages));
            }
            s
        }
        SourceKind::Book => format!("{}, *{}*{}", r.year, r.title, opt(", ", &r.publisher)),
        SourceKind::Website => format!(
            "{}, *{}*{}",
            r.year,
            r.title,
            opt(", available at: ", &r.url)
        ),
        SourceKind::Conference => {
            let mut s = format!("{}, '{}'", r.year, r.title);
            if let Some(venue) = &r.venue {
                s.push_str(&format!(", paper presented at *{}*", venue));
            }
            s.push_str(&opt(", pp. ", &r.pages));
            s
        }
    };
    spaced(&r.authors.join(", "), format!("{}.", body))
}

/// Chicago notes-bibliography.
pub fn chicago(r: &ReferenceRecord) -> String {
    let r = &escaped(r);
    let body = match r.kind {
        SourceKind::Journal => match &r.venue {
            Some(venue) => format!(
                "\"{}.\" *{}*{} ({}){}.",
                r.title,
                venue,
                opt(" ", &r.volume),
                r.year,
                opt(": ", &r.pages)
            ),
            None => format!("\"{}.\" {}.", r.title, r.year),
        },
        SourceKind::Book => match &r.publisher {
            Some(publisher) => format!("*{}*. {}, {}.", r.title, publisher, r.year),
            None => format!("*{}*. {}.", r.title, r.year),
        },
        SourceKind::Website => {
            let mut s = format!("\"{}.\"", r.title);
            if let Some(venue) = &r.venue {
                s.push_str(&format!(" {}.", venue));
            }
            s.push_str(&format!(" {}.", r.year));
            if let Some(url) = &r.url {
                s.push_str(&format!(" {}.", url));
            }
            s
        }
        SourceKind::Conference => match &r.venue {
            Some(venue) => format!(
                "\"{}.\" Paper presented at *{}*, {}.",
                r.title, venue, r.year
            ),
            None => format!("\"{}.\" {}.", r.title, r.year),
        },
    };
    sentence(&r.authors.join(", "), body)
}

/// Entry text without emphasis markers or escapes.
pub fn plain_text(entry: &str) -> String {
    let mut result = String::with_capacity(entry.len());
    let mut chars = entry.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => result.extend(chars.next()),
            '*' => {}
            _ => result.push(c),
        }
    }
    result
}

fn escaped(r: &ReferenceRecord) -> ReferenceRecord {
    let field = |v: &Option<String>| v.as_deref().map(escape_markdown);
    ReferenceRecord {
        kind: r.kind,
        title: escape_markdown(&r.title),
        authors: r.authors.iter().map(|a| escape_markdown(a)).collect(),
        year: r.year,
        venue: field(&r.venue),
        volume: field(&r.volume),
        pages: field(&r.pages),
        publisher: field(&r.publisher),
        url: field(&r.url),
        doi: field(&r.doi),
    }
}

/// One or two authors literally, three or more as "a, b, & c".
fn apa_authors(authors: &[String]) -> String {
    match authors {
        [] => String::new(),
        [one] => one.clone(),
        [first, second] => format!("{} & {}", first, second),
        [init @ .., last] => format!("{}, & {}", init.join(", "), last),
    }
}

/// "a and b" for two authors, "a, et al." for three or more.
fn mla_authors(authors: &[String]) -> String {
    match authors {
        [] => String::new(),
        [one] => one.clone(),
        [first, second] => format!("{} and {}", first, second),
        [first, ..] => format!("{}, et al.", first),
    }
}

fn opt(prefix: &str, value: &Option<String>) -> String {
    value
        .as_ref()
        .map(|v| format!("{}{}", prefix, v))
        .unwrap_or_default()
}

fn list<const N: usize>(parts: [Option<String>; N]) -> String {
    parts.into_iter().flatten().collect::<Vec<_>>().join(", ")
}

fn spaced(authors: &str, rest: String) -> String {
    if authors.is_empty() {
        rest
    } else {
        format!("{} {}", authors, rest)
    }
}

fn comma(authors: &str, rest: String) -> String {
    if authors.is_empty() {
        rest
    } else {
        format!("{}, {}", authors, rest)
    }
}

/// Authors closed with a period (not doubled), then the rest.
fn sentence(authors: &str, rest: String) -> String {
    if authors.is_empty() {
        rest
    } else if authors.ends_with('.') {
        format!("{} {}", authors, rest)
    } else {
        format!("{}. {}", authors, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn journal() -> ReferenceRecord {
        ReferenceRecord::new(
            SourceKind::Journal,
            "Advanced Methodologies in Education",
            ["Smith, J.A.", "Johnson, M.B."],
            2021,
        )
        .with_venue("Journal of Academic Research")
        .with_volume("12")
        .with_pages("45-150")
    }

    #[test]
    fn test_apa_authors() {
        assert_eq!(apa_authors(&names(&["A"])), "A");
        assert_eq!(apa_authors(&names(&["A", "B"])), "A & B");
        assert_eq!(apa_authors(&names(&["A", "B", "C"])), "A, B, & C");
        assert_eq!(apa_authors(&[]), "");
    }

    #[test]
    fn test_mla_authors() {
        assert_eq!(mla_authors(&names(&["A", "B"])), "A and B");
        assert_eq!(mla_authors(&names(&["A", "B", "C"])), "A, et al.");
    }

    #[test]
    fn test_apa_journal() {
        assert_eq!(
            apa(&journal()),
            "Smith, J.A. & Johnson, M.B. (2021). Advanced Methodologies in Education. \
             *Journal of Academic Research*, 12, 45-150."
        );
    }

    #[test]
    fn test_ieee_journal() {
        assert_eq!(
            ieee(&journal()),
            "Smith, J.A., Johnson, M.B., \"Advanced Methodologies in Education,\" \
             *Journal of Academic Research*, vol. 12, pp. 45-150, 2021."
        );
    }

    #[test]
    fn test_mla_three_authors_single_period() {
        let mut record = journal();
        record.authors = names(&["Davis, R.C.", "Wilson, A.D.", "Miller, S.E."]);
        let entry = mla(&record);
        assert!(entry.starts_with("Davis, R.C., et al. \"Advanced"));
        assert!(!entry.contains(".."));
    }

    #[test]
    fn test_harvard_journal() {
        assert_eq!(
            harvard(&journal()),
            "Smith, J.A., Johnson, M.B. 2021, 'Advanced Methodologies in Education', \
             *Journal of Academic Research*, vol. 12, pp. 45-150."
        );
    }

    #[test]
    fn test_chicago_journal() {
        assert_eq!(
            chicago(&journal()),
            "Smith, J.A., Johnson, M.B. \"Advanced Methodologies in Education.\" \
             *Journal of Academic Research* 12 (2021): 45-150."
        );
    }

    #[test]
    fn test_book_and_website() {
        let book = ReferenceRecord::new(SourceKind::Book, "Learning Systems", ["Brown, K.L."], 2015)
            .with_publisher("Academic Press");
        assert_eq!(apa(&book), "Brown, K.L. (2015). *Learning Systems*. Academic Press.");

        let site = ReferenceRecord::new(SourceKind::Website, "Open Data", ["Lee, H.K."], 2022)
            .with_url("https://example.org/data");
        assert_eq!(
            apa(&site),
            "Lee, H.K. (2022). Open Data. Retrieved from https://example.org/data"
        );
    }

    #[test]
    fn test_literal_asterisks_survive() {
        let record = ReferenceRecord::new(
            SourceKind::Book,
            "C*-Algebras and Operator_Theory",
            ["O'Neil, P."],
            2019,
        );
        let entry = apa(&record);
        assert_eq!(entry, "O'Neil, P. (2019). *C\\*-Algebras and Operator\\_Theory*.");
        assert_eq!(plain_text(&entry), "O'Neil, P. (2019). C*-Algebras and Operator_Theory.");
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(plain_text("A. *Journal*, 1."), "A. Journal, 1.");
        assert_eq!(plain_text("a \\\\ b \\< c"), "a \\ b < c");
        assert_eq!(plain_text("trailing \\"), "trailing ");
    }

    #[test]
    fn test_no_authors() {
        let record = ReferenceRecord::new(SourceKind::Book, "Anonymous Work", Vec::<String>::new(), 2000);
        assert_eq!(apa(&record), "(2000). *Anonymous Work*.");
        assert_eq!(chicago(&record), "*Anonymous Work*. 2000.");
    }
}
