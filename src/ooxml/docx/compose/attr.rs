//! Attribute values passed to builders in place of positional parameters.
//!
//! An [`Attr`] is an untyped name/value carrier. Constructing one never fails:
//! the name is checked, and the value interpreted, only when a builder consumes
//! it. Integer inputs are canonicalized to plain base-10 strings.

/// An attribute assignment such as `w:after="150"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attr {
    name: String,
    value: String,
}

impl Attr {
    /// Create an attribute with an arbitrary name.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Values that can be carried by an attribute.
///
/// Text passes through unchanged; integers are rendered in base 10 without
/// grouping or padding.
pub trait AttrValue {
    fn into_attr_value(self) -> String;
}

impl AttrValue for &str {
    fn into_attr_value(self) -> String {
        self.to_string()
    }
}

impl AttrValue for String {
    fn into_attr_value(self) -> String {
        self
    }
}

impl AttrValue for &String {
    fn into_attr_value(self) -> String {
        self.clone()
    }
}

macro_rules! impl_attr_value_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AttrValue for $ty {
                fn into_attr_value(self) -> String {
                    itoa::Buffer::new().format(self).to_string()
                }
            }
        )*
    };
}

impl_attr_value_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn integer<N: itoa::Integer>(value: N) -> String {
    itoa::Buffer::new().format(value).to_string()
}

/// `val`: the single value of simple elements (style, color, size, ...).
pub fn val(value: impl AttrValue) -> Attr {
    Attr::new("val", value.into_attr_value())
}

/// `fill`: shading fill color.
pub fn fill(value: impl Into<String>) -> Attr {
    Attr::new("fill", value)
}

/// `before`: spacing above a paragraph, in twips.
pub fn before<N: itoa::Integer>(value: N) -> Attr {
    Attr::new("before", integer(value))
}

/// `after`: spacing below a paragraph, in twips.
pub fn after<N: itoa::Integer>(value: N) -> Attr {
    Attr::new("after", integer(value))
}

/// `left`: an indentation in twips, or a `"COLOR:WIDTH"` border.
pub fn left(value: impl AttrValue) -> Attr {
    Attr::new("left", value.into_attr_value())
}

/// `right`: an indentation in twips, or a `"COLOR:WIDTH"` border.
pub fn right(value: impl AttrValue) -> Attr {
    Attr::new("right", value.into_attr_value())
}

/// `top`: a `"COLOR:WIDTH"` border.
pub fn top(value: impl AttrValue) -> Attr {
    Attr::new("top", value.into_attr_value())
}

/// `bottom`: a `"COLOR:WIDTH"` border.
pub fn bottom(value: impl AttrValue) -> Attr {
    Attr::new("bottom", value.into_attr_value())
}

/// `ascii`: font for ASCII characters.
pub fn ascii(value: impl Into<String>) -> Attr {
    Attr::new("ascii", value)
}

/// `hAnsi`: font for high-ANSI characters.
pub fn h_ansi(value: impl Into<String>) -> Attr {
    Attr::new("hAnsi", value)
}
