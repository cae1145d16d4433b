//! Interpretation of attribute value strings.
use crate::ooxml::error::{OoxmlError, Result};

use super::attr::Attr;

pub(crate) fn invalid_value(element: &'static str, attr: &Attr) -> OoxmlError {
    OoxmlError::InvalidAttributeValue {
        element,
        name: attr.name().to_string(),
        value: attr.value().to_string(),
    }
}

/// Digits to hand to the integer parser; a single leading `+` is accepted.
fn digits(text: &str) -> &[u8] {
    match text.strip_prefix('+') {
        Some(rest) if !rest.starts_with(['+', '-']) => rest.as_bytes(),
        _ => text.as_bytes(),
    }
}

pub(crate) fn decode_unsigned(text: &str) -> Option<u32> {
    atoi_simd::parse::<u32, false, false>(digits(text)).ok()
}

pub(crate) fn decode_signed(text: &str) -> Option<i32> {
    atoi_simd::parse::<i32, false, false>(digits(text)).ok()
}

/// Decode an unsigned measure (twips, half-points, eighths of a point).
pub(crate) fn parse_unsigned(element: &'static str, attr: &Attr) -> Result<u32> {
    decode_unsigned(attr.value()).ok_or_else(|| invalid_value(element, attr))
}

/// Decode a signed measure (indentation may be negative).
pub(crate) fn parse_signed(element: &'static str, attr: &Attr) -> Result<i32> {
    decode_signed(attr.value()).ok_or_else(|| invalid_value(element, attr))
}

/// Split a compound `a:b` value.
///
/// Trailing empty segments are dropped, so `"AABBCC:"` yields one segment
/// and `":12"` yields two.
pub(crate) fn split_compound(value: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = value.split(':').collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

/// Render an integer with `,` thousands separators.
pub fn format_number<N: itoa::Integer>(value: N) -> String {
    let mut buffer = itoa::Buffer::new();
    let raw = buffer.format(value);
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", raw),
    };

    let mut out = String::with_capacity(raw.len() + digits.len() / 3);
    out.push_str(sign);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
