//! Word (.docx) main document content.
//!
//! # Architecture
//!
//! - `writer`: the element model (`Paragraph`, `Run`, property blocks) and its
//!   XML serialization
//! - `compose`: builder functions and macros that assemble the element model
//!   from mixed argument lists
//! - `format`: enumerated attribute values shared by both
pub mod compose;
pub mod format;
pub mod writer;

pub use compose::{Attr, Fragment, FragmentGroup, attach};
pub use format::{BorderStyle, BreakType, Justification, UnderlineStyle};
pub use writer::{ContentSink, Document, Node, Paragraph, Run};
