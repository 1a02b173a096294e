//! PDF writing shared by the built-in converters.
//!
//! Pages are lists of positioned text lines set in the standard Times fonts
//! with WinAnsi encoding, so no font program is embedded.

use crate::error::Result;
use flate2::write::ZlibEncoder;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat};
use std::io::Write;

/// A4 width in points.
pub const PAGE_WIDTH: f32 = 595.0;

/// A4 height in points.
pub const PAGE_HEIGHT: f32 = 842.0;

/// Margin on every side in points.
pub const MARGIN: f32 = 72.0;

/// Average Times glyph advance as a fraction of the font size.
const AVERAGE_GLYPH_WIDTH: f32 = 0.5;

/// Standard font used for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Times-Roman
    Regular,
    /// Times-Bold
    Bold,
}

impl Font {
    fn resource(&self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }

    fn base_font(&self) -> &'static str {
        match self {
            Font::Regular => "Times-Roman",
            Font::Bold => "Times-Bold",
        }
    }
}

/// One positioned line of encoded text.
#[derive(Debug, Clone)]
pub struct TextLine {
    /// Font
    pub font: Font,
    /// Size in points
    pub size: f32,
    /// Left edge
    pub x: f32,
    /// Baseline
    pub y: f32,
    /// WinAnsi-encoded text
    pub bytes: Vec<u8>,
}

/// Lines placed on one page.
#[derive(Debug, Clone, Default)]
pub struct PdfPage {
    /// Lines in drawing order
    pub lines: Vec<TextLine>,
}

impl PdfPage {
    /// Check if nothing was placed on the page.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// How content streams are compressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamCompression {
    /// Let lopdf compress the finished document
    Document,
    /// Deflate each content stream up front
    Deflate,
}

/// WinAnsi byte for a character, if it has one.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        ' '..='~' => c as u8,
        '\t' | '\n' | '\r' => b' ',
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// Encode text, or return the first character WinAnsi cannot represent.
pub fn encode_win_ansi(text: &str) -> std::result::Result<Vec<u8>, char> {
    text.chars().map(|c| win_ansi_byte(c).ok_or(c)).collect()
}

/// Encode text, replacing unsupported characters with `?`.
pub fn encode_win_ansi_lossy(text: &str) -> Vec<u8> {
    text.chars().map(|c| win_ansi_byte(c).unwrap_or(b'?')).collect()
}

/// Approximate advance width of a string.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVERAGE_GLYPH_WIDTH
}

/// Greedy word wrap; continuation lines get `rest_width`.
pub fn wrap_words(text: &str, size: f32, first_width: f32, rest_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let limit = if lines.is_empty() { first_width } else { rest_width };
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };
        if !line.is_empty() && text_width(&candidate, size) > limit {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Assemble pages into a PDF file.
pub fn write_pdf(
    pages: &[PdfPage],
    title: &str,
    author: &str,
    compression: StreamCompression,
) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in [Font::Regular, Font::Bold] {
        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(font.base_font().as_bytes().to_vec()));
        font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        let font_id = doc.add_object(Object::Dictionary(font_dict));
        fonts.set(font.resource(), Object::Reference(font_id));
    }
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));
    let resources_id = doc.add_object(Object::Dictionary(resources));

    let empty = [PdfPage::default()];
    let pages = if pages.is_empty() { &empty[..] } else { pages };

    let mut kids = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content {
            operations: page_operations(page),
        };
        let encoded = content.encode()?;
        let stream = match compression {
            StreamCompression::Document => Stream::new(Dictionary::new(), encoded),
            StreamCompression::Deflate => {
                let mut dict = Dictionary::new();
                dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
                Stream::new(dict, deflate(&encoded)?)
            }
        };
        let content_id = doc.add_object(stream);

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(pages_id));
        page_dict.set("Resources", Object::Reference(resources_id));
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(PAGE_WIDTH),
                Object::Real(PAGE_HEIGHT),
            ]),
        );
        kids.push(Object::Reference(doc.add_object(Object::Dictionary(page_dict))));
    }

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Count", Object::Integer(kids.len() as i64));
    pages_dict.set("Kids", Object::Array(kids));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog));

    let mut info = Dictionary::new();
    info.set(
        "Title",
        Object::String(encode_win_ansi_lossy(title), StringFormat::Literal),
    );
    info.set(
        "Author",
        Object::String(encode_win_ansi_lossy(author), StringFormat::Literal),
    );
    info.set("Producer", Object::string_literal("reportgen"));
    let info_id = doc.add_object(Object::Dictionary(info));

    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.trailer.set("Info", Object::Reference(info_id));

    if compression == StreamCompression::Document {
        doc.compress();
    }

    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}

fn page_operations(page: &PdfPage) -> Vec<Operation> {
    let mut ops = Vec::with_capacity(page.lines.len() * 5);
    for line in &page.lines {
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(line.font.resource().as_bytes().to_vec()),
                Object::Real(line.size),
            ],
        ));
        ops.push(Operation::new(
            "Td",
            vec![Object::Real(line.x), Object::Real(line.y)],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(line.bytes.clone(), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
    }
    ops
}

fn deflate(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

/// Top-to-bottom page filler.
pub(crate) struct PageCursor {
    pages: Vec<PdfPage>,
    current: PdfPage,
    y: f32,
}

impl PageCursor {
    pub(crate) fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: PdfPage::default(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    pub(crate) fn break_page(&mut self) {
        if !self.current.is_empty() {
            self.pages.push(std::mem::take(&mut self.current));
        }
        self.y = PAGE_HEIGHT - MARGIN;
    }

    pub(crate) fn skip(&mut self, points: f32) {
        // Vertical space at the top of a page is dropped.
        if !self.current.is_empty() {
            self.y -= points;
        }
    }

    pub(crate) fn place(&mut self, font: Font, size: f32, leading: f32, x: f32, bytes: Vec<u8>) {
        if self.y - leading < MARGIN {
            self.break_page();
        }
        self.y -= leading;
        self.current.lines.push(TextLine {
            font,
            size,
            x,
            y: self.y,
            bytes,
        });
    }

    pub(crate) fn finish(mut self) -> Vec<PdfPage> {
        self.break_page();
        self.pages
    }
}
