//! Office Open XML (OOXML) content construction.
//!
//! Only WordprocessingML is covered (`docx`). The `error` module holds the
//! error type shared by every builder and serializer.
pub mod docx;
pub mod error;

pub use error::{OoxmlError, Result};
