//! Declarative construction of WordprocessingML trees.
//!
//! Every element has a builder function taking a heterogeneous argument list.
//! Each argument is routed to a slot of the element by its kind alone:
//!
//! - a properties block (`w:pPr`, `w:rPr`) fills the properties slot; a later
//!   one replaces an earlier one
//! - child nodes accumulate in call order
//! - a bare string is shorthand for the text content it stands for
//! - a [`FragmentGroup`] is unwrapped, members dispatched one by one in place
//! - an [`Attr`] is interpreted against the element's attribute vocabulary
//! - a dynamically typed [`Node`](crate::ooxml::docx::writer::Node) is routed
//!   by its runtime kind
//!
//! Builders return the finished element, or the first error met; no partial
//! element escapes. The `w_*!` macros accept the same arguments inline.
//!
//! ```
//! use docx_compose::ooxml::docx::compose::attr::{after, fill, top};
//! use docx_compose::ooxml::docx::compose::{attach, b, pbdr, ppr, rpr, spacing};
//! use docx_compose::ooxml::docx::writer::Document;
//! use docx_compose::{frags, w_p, w_r};
//!
//! let heading = w_p!(
//!     ppr([spacing([after(240)])?])?,
//!     w_r!(rpr([b()])?, "Quarterly report")?,
//! )?;
//! let boxed = w_p!(ppr([pbdr([top("AABBCC:12")])?])?, fill("F3F4F6"), "Totals")?;
//!
//! let mut doc = Document::new();
//! attach(&mut doc, [frags![heading, boxed]]);
//! assert_eq!(doc.len(), 2);
//! assert!(doc.to_xml()?.contains("<w:b/>"));
//! # Ok::<(), docx_compose::ooxml::OoxmlError>(())
//! ```

#[macro_use]
mod macros;

pub mod attach;
pub mod attr;
pub mod frags;
pub mod paragraph;
pub mod run;
mod value;

pub use attach::{Attachment, attach};
pub use attr::{Attr, AttrValue};
pub use frags::{Fragment, FragmentGroup};
pub use paragraph::{
    BorderParse, JustificationArg, ParagraphArg, ParagraphPropertiesArg, ValueArg, ind, jc, p,
    pbdr, pbdr_strict, pbdr_with, ppr, pstyle, shd, spacing,
};
pub use run::{
    RunArg, RunPropertiesArg, SizeArg, UnderlineArg, b, br, color, drawing, highlight, i, r,
    rfonts, rpr, run_from_text, sz, t, text_from_str, u, u_single,
};
pub use value::format_number;

use crate::ooxml::docx::writer::Node;
use crate::ooxml::error::OoxmlError;

/// `kind` cannot be placed inside `element`.
pub(crate) fn unsupported(element: &'static str, node: &Node) -> OoxmlError {
    OoxmlError::UnsupportedArgument {
        element,
        kind: node.kind(),
    }
}

/// `attr` is not in the vocabulary of `element`.
pub(crate) fn unknown_attribute(element: &'static str, attr: &Attr) -> OoxmlError {
    OoxmlError::UnknownAttribute {
        element,
        name: attr.name().to_string(),
    }
}
