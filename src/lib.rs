//! docx-compose - declarative construction of WordprocessingML content
//!
//! This library builds the element tree of a Word main document part
//! (`word/document.xml`) from ordinary function calls. Each builder accepts a
//! mixed list of arguments and places every argument into the right slot of
//! the element by its kind, so callers never name slots explicitly.
//!
//! # Features
//!
//! - **Element builders**: paragraphs, runs, text, breaks, drawings and their
//!   property blocks (`w:pPr`, `w:rPr` and the elements inside them)
//! - **Fragments**: groups of sibling nodes passed as one argument and
//!   flattened where they are consumed
//! - **Attribute values**: `w:after="150"` style attributes as plain values,
//!   interpreted per element
//! - **Attachment**: append nodes and fragments to a document body
//! - **Serialization**: produce well-formed `document.xml` markup
//!
//! # Example - Building a document body
//!
//! ```
//! use docx_compose::ooxml::docx::compose::attr::{after, fill, val};
//! use docx_compose::ooxml::docx::compose::{attach, jc, ppr, pstyle, spacing};
//! use docx_compose::ooxml::docx::writer::Document;
//! use docx_compose::w_p;
//!
//! # fn main() -> Result<(), docx_compose::ooxml::OoxmlError> {
//! let title = w_p!(ppr([pstyle([val("Title")])?])?, "Annual summary")?;
//! let body = w_p!(
//!     ppr([spacing([after(150)])?])?,
//!     fill("F3F4F6"),
//!     "Revenue grew in every region.",
//! )?;
//! let closing = w_p!(ppr([jc(["right"])?])?, "- Finance")?;
//!
//! let mut doc = Document::new();
//! attach(&mut doc, [title, body, closing]);
//!
//! let xml = doc.to_xml()?;
//! assert!(xml.contains(r#"<w:pStyle w:val="Title"/>"#));
//! # Ok(())
//! # }
//! ```
//!
//! Packaging the markup into a `.docx` container is left to the caller.

pub mod ooxml;
