//! Rendering module for serializing documents to the primary output formats.

mod json;
pub(crate) mod markdown;
mod options;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{PrimaryFormat, RenderOptions};
pub use text::to_text;

use crate::error::Result;
use crate::model::Document;

/// Serialize a document in the given primary format.
pub fn render(doc: &Document, format: PrimaryFormat, options: &RenderOptions) -> Result<String> {
    match format {
        PrimaryFormat::Markdown => to_markdown(doc, options),
        PrimaryFormat::Text => to_text(doc, options),
        PrimaryFormat::Json => to_json(doc, options.json_format),
    }
}
