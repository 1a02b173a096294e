//! Document model types.
//!
//! Sections are what the synthesizer produces and the length controller
//! edits. The [`Document`] is what the layout stage builds from them: an
//! ordered list of typed, fully styled blocks that every output format
//! serializes from.

mod block;
mod document;
mod paragraph;
mod section;
mod style;

pub use block::Block;
pub use document::{Document, Metadata};
pub use paragraph::{Alignment, BlockRole, Paragraph, ParagraphStyle};
pub use section::{ContentBlock, Section, SectionKind};
pub use style::StyleConfig;
