//! Error types for composing WordprocessingML trees.
use thiserror::Error;

/// Result type for composition operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for composition operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OoxmlError {
    /// An argument whose kind is not accepted by the element being built
    #[error("Cannot add {kind} to {element}")]
    UnsupportedArgument {
        element: &'static str,
        kind: &'static str,
    },

    /// An attribute name outside the element's vocabulary
    #[error("Unknown {element} attribute: {name}")]
    UnknownAttribute { element: &'static str, name: String },

    /// A recognized attribute whose value cannot be interpreted
    #[error("Invalid value for {element} attribute {name}: {value:?}")]
    InvalidAttributeValue {
        element: &'static str,
        name: String,
        value: String,
    },

    /// A compound attribute value that does not have the expected shape
    #[error("Malformed {element} attribute {name}: {value:?}")]
    MalformedAttribute {
        element: &'static str,
        name: String,
        value: String,
    },

    /// XML serialization error
    #[error("XML error: {0}")]
    Xml(String),
}

impl From<std::fmt::Error> for OoxmlError {
    fn from(err: std::fmt::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_argument_message() {
        let err = OoxmlError::UnsupportedArgument {
            element: "w:r",
            kind: "Paragraph",
        };
        assert_eq!(err.to_string(), "Cannot add Paragraph to w:r");
    }

    #[test]
    fn test_unknown_attribute_message() {
        let err = OoxmlError::UnknownAttribute {
            element: "w:spacing",
            name: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown w:spacing attribute: bogus");
    }
}
