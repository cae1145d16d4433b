//! Enumerated WordprocessingML values shared by the builders and the element model.

/// Paragraph justification (`w:jc/@w:val`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Justification {
    Left,
    Start,
    Center,
    Right,
    End,
    Both,
    Distribute,
}

impl Justification {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Start => "start",
            Self::Center => "center",
            Self::Right => "right",
            Self::End => "end",
            Self::Both => "both",
            Self::Distribute => "distribute",
        }
    }

    /// Parse the schema token for a justification value.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "end" => Some(Self::End),
            "both" => Some(Self::Both),
            "distribute" => Some(Self::Distribute),
            _ => None,
        }
    }
}

/// Underline styles for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnderlineStyle {
    #[default]
    Single,
    Words,
    Double,
    Thick,
    Dotted,
    Dashed,
    DotDash,
    DotDotDash,
    Wave,
    None,
}

impl UnderlineStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Words => "words",
            Self::Double => "double",
            Self::Thick => "thick",
            Self::Dotted => "dotted",
            Self::Dashed => "dash",
            Self::DotDash => "dotDash",
            Self::DotDotDash => "dotDotDash",
            Self::Wave => "wave",
            Self::None => "none",
        }
    }

    /// Parse the schema token for an underline style.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "single" => Some(Self::Single),
            "words" => Some(Self::Words),
            "double" => Some(Self::Double),
            "thick" => Some(Self::Thick),
            "dotted" => Some(Self::Dotted),
            "dash" => Some(Self::Dashed),
            "dotDash" => Some(Self::DotDash),
            "dotDotDash" => Some(Self::DotDotDash),
            "wave" => Some(Self::Wave),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Break kinds (`w:br/@w:type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakType {
    Page,
    Column,
    TextWrapping,
}

impl BreakType {
    /// Parse a `w:type` token.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "page" => Some(Self::Page),
            "column" => Some(Self::Column),
            "textWrapping" => Some(Self::TextWrapping),
            _ => None,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Column => "column",
            Self::TextWrapping => "textWrapping",
        }
    }
}

/// Border line styles for paragraph borders. Compound `COLOR:WIDTH` values
/// always produce a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    Single,
}

impl BorderStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justification_tokens() {
        assert_eq!(Justification::from_value("center"), Some(Justification::Center));
        assert_eq!(Justification::from_value("both"), Some(Justification::Both));
        assert_eq!(Justification::from_value("middle"), None);
        assert_eq!(Justification::Distribute.as_str(), "distribute");
    }

    #[test]
    fn test_underline_tokens() {
        assert_eq!(UnderlineStyle::default(), UnderlineStyle::Single);
        assert_eq!(UnderlineStyle::from_value("dash"), Some(UnderlineStyle::Dashed));
        assert_eq!(UnderlineStyle::Dashed.as_str(), "dash");
        assert_eq!(UnderlineStyle::from_value("squiggle"), None);
    }

    #[test]
    fn test_break_tokens() {
        assert_eq!(BreakType::from_value("textWrapping"), Some(BreakType::TextWrapping));
        assert_eq!(BreakType::TextWrapping.as_str(), "textWrapping");
        assert_eq!(BreakType::from_value("line"), None);
    }
}
