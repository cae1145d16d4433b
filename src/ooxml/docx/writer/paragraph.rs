//! Paragraph-level elements: `w:p`, `w:pPr` and the property blocks it holds.
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

pub use super::super::format::{BorderStyle, Justification};
use super::escape_xml;
use super::run::Run;

/// A paragraph (`w:p`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Paragraph properties
    pub(crate) properties: Option<ParagraphProperties>,
    /// Runs in document order
    pub(crate) runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the paragraph properties, if any were set.
    pub fn properties(&self) -> Option<&ParagraphProperties> {
        self.properties.as_ref()
    }

    /// Replace the paragraph properties.
    pub fn set_properties(&mut self, properties: ParagraphProperties) {
        self.properties = Some(properties);
    }

    /// Get the paragraph properties, creating an empty block if needed.
    pub fn properties_mut(&mut self) -> &mut ParagraphProperties {
        self.properties.get_or_insert_with(ParagraphProperties::default)
    }

    /// Get the runs of this paragraph.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Append a run.
    pub fn push_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:p>");
        if let Some(ref properties) = self.properties {
            properties.to_xml(xml)?;
        }
        for run in &self.runs {
            run.to_xml(xml)?;
        }
        xml.push_str("</w:p>");
        Ok(())
    }
}

/// Paragraph properties (`w:pPr`).
///
/// Every slot holds at most one block; setting a slot again replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphProperties {
    pub(crate) style: Option<ParagraphStyle>,
    pub(crate) borders: Option<ParagraphBorders>,
    pub(crate) shading: Option<Shading>,
    pub(crate) spacing: Option<Spacing>,
    pub(crate) indentation: Option<Indentation>,
    pub(crate) alignment: Option<Alignment>,
}

impl ParagraphProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> Option<&ParagraphStyle> {
        self.style.as_ref()
    }

    pub fn set_style(&mut self, style: ParagraphStyle) {
        self.style = Some(style);
    }

    pub fn borders(&self) -> Option<&ParagraphBorders> {
        self.borders.as_ref()
    }

    pub fn set_borders(&mut self, borders: ParagraphBorders) {
        self.borders = Some(borders);
    }

    pub fn shading(&self) -> Option<&Shading> {
        self.shading.as_ref()
    }

    pub fn set_shading(&mut self, shading: Shading) {
        self.shading = Some(shading);
    }

    pub fn spacing(&self) -> Option<&Spacing> {
        self.spacing.as_ref()
    }

    pub fn set_spacing(&mut self, spacing: Spacing) {
        self.spacing = Some(spacing);
    }

    pub fn indentation(&self) -> Option<&Indentation> {
        self.indentation.as_ref()
    }

    pub fn set_indentation(&mut self, indentation: Indentation) {
        self.indentation = Some(indentation);
    }

    pub fn alignment(&self) -> Option<&Alignment> {
        self.alignment.as_ref()
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = Some(alignment);
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:pPr>");

        // Children follow the CT_PPrBase sequence order
        if let Some(ref style) = self.style {
            style.to_xml(xml)?;
        }
        if let Some(ref borders) = self.borders {
            borders.to_xml(xml)?;
        }
        if let Some(ref shading) = self.shading {
            shading.to_xml(xml)?;
        }
        if let Some(ref spacing) = self.spacing {
            spacing.to_xml(xml)?;
        }
        if let Some(ref indentation) = self.indentation {
            indentation.to_xml(xml)?;
        }
        if let Some(ref alignment) = self.alignment {
            alignment.to_xml(xml)?;
        }

        xml.push_str("</w:pPr>");
        Ok(())
    }
}

/// Paragraph spacing in twentieths of a point (`w:spacing`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    pub(crate) before: Option<u32>,
    pub(crate) after: Option<u32>,
}

impl Spacing {
    pub fn before(&self) -> Option<u32> {
        self.before
    }

    pub fn set_before(&mut self, twips: u32) {
        self.before = Some(twips);
    }

    pub fn after(&self) -> Option<u32> {
        self.after
    }

    pub fn set_after(&mut self, twips: u32) {
        self.after = Some(twips);
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:spacing");
        if let Some(before) = self.before {
            write!(xml, " w:before=\"{}\"", before)?;
        }
        if let Some(after) = self.after {
            write!(xml, " w:after=\"{}\"", after)?;
        }
        xml.push_str("/>");
        Ok(())
    }
}

/// Paragraph indentation in twentieths of a point (`w:ind`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indentation {
    pub(crate) left: Option<i32>,
    pub(crate) right: Option<i32>,
}

impl Indentation {
    pub fn left(&self) -> Option<i32> {
        self.left
    }

    pub fn set_left(&mut self, twips: i32) {
        self.left = Some(twips);
    }

    pub fn right(&self) -> Option<i32> {
        self.right
    }

    pub fn set_right(&mut self, twips: i32) {
        self.right = Some(twips);
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:ind");
        if let Some(left) = self.left {
            write!(xml, " w:left=\"{}\"", left)?;
        }
        if let Some(right) = self.right {
            write!(xml, " w:right=\"{}\"", right)?;
        }
        xml.push_str("/>");
        Ok(())
    }
}

/// Background shading (`w:shd`), used by both paragraphs and runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shading {
    pub(crate) fill: Option<String>,
}

impl Shading {
    /// Fill color as hex RGB (e.g. "F3F4F6").
    pub fn fill(&self) -> Option<&str> {
        self.fill.as_deref()
    }

    pub fn set_fill(&mut self, fill: impl Into<String>) {
        self.fill = Some(fill.into());
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:shd w:val=\"clear\" w:color=\"auto\"");
        if let Some(ref fill) = self.fill {
            write!(xml, " w:fill=\"{}\"", escape_xml(fill))?;
        }
        xml.push_str("/>");
        Ok(())
    }
}

/// Paragraph borders (`w:pBdr`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphBorders {
    pub(crate) top: Option<Border>,
    pub(crate) left: Option<Border>,
    pub(crate) bottom: Option<Border>,
    pub(crate) right: Option<Border>,
}

impl ParagraphBorders {
    pub fn top(&self) -> Option<&Border> {
        self.top.as_ref()
    }

    pub fn set_top(&mut self, border: Border) {
        self.top = Some(border);
    }

    pub fn left(&self) -> Option<&Border> {
        self.left.as_ref()
    }

    pub fn set_left(&mut self, border: Border) {
        self.left = Some(border);
    }

    pub fn bottom(&self) -> Option<&Border> {
        self.bottom.as_ref()
    }

    pub fn set_bottom(&mut self, border: Border) {
        self.bottom = Some(border);
    }

    pub fn right(&self) -> Option<&Border> {
        self.right.as_ref()
    }

    pub fn set_right(&mut self, border: Border) {
        self.right = Some(border);
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:pBdr>");
        let sides = [
            ("top", &self.top),
            ("left", &self.left),
            ("bottom", &self.bottom),
            ("right", &self.right),
        ];
        for (side, border) in sides {
            if let Some(border) = border {
                border.to_xml(xml, side)?;
            }
        }
        xml.push_str("</w:pBdr>");
        Ok(())
    }
}

/// A single border edge.
///
/// All fields are optional: a border built from a malformed specification
/// carries none of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Border {
    pub(crate) style: Option<BorderStyle>,
    pub(crate) color: Option<String>,
    /// Width in eighths of a point
    pub(crate) size: Option<u32>,
    /// Padding in points
    pub(crate) space: Option<u32>,
}

impl Border {
    pub fn style(&self) -> Option<BorderStyle> {
        self.style
    }

    pub fn set_style(&mut self, style: BorderStyle) {
        self.style = Some(style);
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = Some(color.into());
    }

    pub fn size(&self) -> Option<u32> {
        self.size
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = Some(size);
    }

    pub fn space(&self) -> Option<u32> {
        self.space
    }

    pub fn set_space(&mut self, space: u32) {
        self.space = Some(space);
    }

    /// True when no field has been set.
    pub fn is_unset(&self) -> bool {
        self.style.is_none() && self.color.is_none() && self.size.is_none() && self.space.is_none()
    }

    pub(crate) fn to_xml(&self, xml: &mut String, side: &str) -> Result<()> {
        write!(xml, "<w:{}", side)?;
        if let Some(style) = self.style {
            write!(xml, " w:val=\"{}\"", style.as_str())?;
        }
        if let Some(size) = self.size {
            write!(xml, " w:sz=\"{}\"", size)?;
        }
        if let Some(space) = self.space {
            write!(xml, " w:space=\"{}\"", space)?;
        }
        if let Some(ref color) = self.color {
            write!(xml, " w:color=\"{}\"", escape_xml(color))?;
        }
        xml.push_str("/>");
        Ok(())
    }
}

/// Paragraph style reference (`w:pStyle`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphStyle {
    pub(crate) val: Option<String>,
}

impl ParagraphStyle {
    /// Style ID, e.g. "Heading1".
    pub fn val(&self) -> Option<&str> {
        self.val.as_deref()
    }

    pub fn set_val(&mut self, style_id: impl Into<String>) {
        self.val = Some(style_id.into());
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match self.val {
            Some(ref val) => write!(xml, "<w:pStyle w:val=\"{}\"/>", escape_xml(val))?,
            None => xml.push_str("<w:pStyle/>"),
        }
        Ok(())
    }
}

/// Paragraph justification (`w:jc`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alignment {
    pub(crate) val: Option<Justification>,
}

impl Alignment {
    pub fn val(&self) -> Option<Justification> {
        self.val
    }

    pub fn set_val(&mut self, val: Justification) {
        self.val = Some(val);
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match self.val {
            Some(val) => write!(xml, "<w:jc w:val=\"{}\"/>", val.as_str())?,
            None => xml.push_str("<w:jc/>"),
        }
        Ok(())
    }
}
