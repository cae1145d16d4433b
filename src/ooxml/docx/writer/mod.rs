//! WordprocessingML element model.
//!
//! These are the terminal objects the composition builders produce. Each type
//! mirrors one `w:` element, exposes its slots through getters and setters, and
//! knows how to serialize itself into `word/document.xml` markup.

pub mod doc;
pub mod node;
pub mod paragraph;
pub mod run;

use std::borrow::Cow;

pub use doc::{ContentSink, Document};
pub use node::Node;
pub use paragraph::{
    Alignment, Border, Indentation, Paragraph, ParagraphBorders, ParagraphProperties,
    ParagraphStyle, Shading, Spacing,
};
pub use run::{
    Bold, Break, Color, Drawing, FontSize, Highlight, Italic, Run, RunContent, RunFonts,
    RunProperties, Text, Underline,
};

/// Escape XML special characters.
pub(crate) fn escape_xml(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}
