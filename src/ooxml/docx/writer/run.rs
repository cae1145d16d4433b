//! Run-level elements: `w:r`, its content and `w:rPr`.
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

pub use super::super::format::{BreakType, UnderlineStyle};
use super::escape_xml;
use super::paragraph::Shading;

/// Run content element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    /// Text (`w:t`)
    Text(Text),
    /// Break (`w:br`)
    Break(Break),
    /// Inline picture (`w:drawing`)
    Drawing(Drawing),
}

impl RunContent {
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match self {
            RunContent::Text(text) => text.to_xml(xml),
            RunContent::Break(br) => br.to_xml(xml),
            RunContent::Drawing(drawing) => drawing.to_xml(xml),
        }
    }
}

/// A run (`w:r`).
///
/// Runs contain text and character formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    /// Run properties
    pub(crate) properties: Option<RunProperties>,
    /// Run content in document order
    pub(crate) content: Vec<RunContent>,
}

impl Run {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the run properties, if any were set.
    pub fn properties(&self) -> Option<&RunProperties> {
        self.properties.as_ref()
    }

    /// Replace the run properties.
    pub fn set_properties(&mut self, properties: RunProperties) {
        self.properties = Some(properties);
    }

    /// Get the run properties, creating an empty block if needed.
    pub fn properties_mut(&mut self) -> &mut RunProperties {
        self.properties.get_or_insert_with(RunProperties::default)
    }

    /// Get the content of this run.
    pub fn content(&self) -> &[RunContent] {
        &self.content
    }

    /// Append a content element.
    pub fn push(&mut self, content: RunContent) {
        self.content.push(content);
    }

    /// Concatenated value of all text elements.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|c| match c {
                RunContent::Text(t) => Some(t.value()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");
        if let Some(ref properties) = self.properties {
            properties.to_xml(xml)?;
        }
        for content in &self.content {
            content.to_xml(xml)?;
        }
        xml.push_str("</w:r>");
        Ok(())
    }
}

/// A text element (`w:t`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub(crate) value: String,
    /// Whether `xml:space="preserve"` is written
    pub(crate) preserve_space: bool,
}

impl Text {
    /// Create a text element that preserves leading and trailing whitespace.
    pub fn preserved(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            preserve_space: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn preserve_space(&self) -> bool {
        self.preserve_space
    }

    pub fn set_preserve_space(&mut self, preserve: bool) {
        self.preserve_space = preserve;
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        if self.preserve_space {
            xml.push_str("<w:t xml:space=\"preserve\">");
        } else {
            xml.push_str("<w:t>");
        }
        xml.push_str(&escape_xml(&self.value));
        xml.push_str("</w:t>");
        Ok(())
    }
}

/// A break (`w:br`). Without a type it is a plain line break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Break {
    pub(crate) kind: Option<BreakType>,
}

impl Break {
    pub fn kind(&self) -> Option<BreakType> {
        self.kind
    }

    pub fn set_kind(&mut self, kind: BreakType) {
        self.kind = Some(kind);
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match self.kind {
            Some(kind) => write!(xml, "<w:br w:type=\"{}\"/>", kind.as_str())?,
            None => xml.push_str("<w:br/>"),
        }
        Ok(())
    }
}

/// An inline picture (`w:drawing`) referencing an image part by relationship ID.
///
/// The image part itself belongs to the package layer; only the reference and
/// the displayed extent live in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    pub(crate) rel_id: String,
    /// Width in EMUs (English Metric Units, 1 inch = 914400 EMUs)
    pub(crate) width_emu: i64,
    /// Height in EMUs
    pub(crate) height_emu: i64,
    /// Image description/alt text
    pub(crate) description: String,
    /// `wp:docPr` id; must be unique within the document part
    pub(crate) id: u32,
}

impl Drawing {
    pub fn new(rel_id: impl Into<String>, width_emu: i64, height_emu: i64) -> Self {
        Self {
            rel_id: rel_id.into(),
            width_emu,
            height_emu,
            description: String::new(),
            id: 1,
        }
    }

    /// Drawing object id written to `wp:docPr`.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn set_id(&mut self, id: u32) -> &mut Self {
        self.id = id;
        self
    }

    pub fn rel_id(&self) -> &str {
        &self.rel_id
    }

    pub fn width_emu(&self) -> i64 {
        self.width_emu
    }

    pub fn height_emu(&self) -> i64 {
        self.height_emu
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the image description/alt text.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        let desc = escape_xml(&self.description);
        let r_id = escape_xml(&self.rel_id);

        write!(
            xml,
            r#"<w:drawing><wp:inline distT="0" distB="0" distL="0" distR="0"><wp:extent cx="{}" cy="{}"/><wp:effectExtent l="0" t="0" r="0" b="0"/><wp:docPr id="{}" name="Picture {}" descr="{}"/><wp:cNvGraphicFramePr><a:graphicFrameLocks xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" noChangeAspect="1"/></wp:cNvGraphicFramePr><a:graphic xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:pic xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:nvPicPr><pic:cNvPr id="0" name="Picture {}" descr="{}"/><pic:cNvPicPr/></pic:nvPicPr><pic:blipFill><a:blip r:embed="{}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill><pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{}" cy="{}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing>"#,
            self.width_emu,
            self.height_emu,
            self.id,
            self.id,
            desc,
            self.id,
            desc,
            r_id,
            self.width_emu,
            self.height_emu
        )?;

        Ok(())
    }
}

/// Run properties (`w:rPr`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunProperties {
    pub(crate) fonts: Option<RunFonts>,
    pub(crate) bold: Option<Bold>,
    pub(crate) italic: Option<Italic>,
    pub(crate) color: Option<Color>,
    pub(crate) size: Option<FontSize>,
    pub(crate) highlight: Option<Highlight>,
    pub(crate) underline: Option<Underline>,
    pub(crate) shading: Option<Shading>,
}

impl RunProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fonts(&self) -> Option<&RunFonts> {
        self.fonts.as_ref()
    }

    pub fn set_fonts(&mut self, fonts: RunFonts) {
        self.fonts = Some(fonts);
    }

    pub fn bold(&self) -> Option<Bold> {
        self.bold
    }

    pub fn set_bold(&mut self, bold: Bold) {
        self.bold = Some(bold);
    }

    pub fn italic(&self) -> Option<Italic> {
        self.italic
    }

    pub fn set_italic(&mut self, italic: Italic) {
        self.italic = Some(italic);
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    pub fn size(&self) -> Option<FontSize> {
        self.size
    }

    pub fn set_size(&mut self, size: FontSize) {
        self.size = Some(size);
    }

    pub fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }

    pub fn set_highlight(&mut self, highlight: Highlight) {
        self.highlight = Some(highlight);
    }

    pub fn underline(&self) -> Option<Underline> {
        self.underline
    }

    pub fn set_underline(&mut self, underline: Underline) {
        self.underline = Some(underline);
    }

    pub fn shading(&self) -> Option<&Shading> {
        self.shading.as_ref()
    }

    pub fn set_shading(&mut self, shading: Shading) {
        self.shading = Some(shading);
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:rPr>");

        // CT_RPr sequence order
        if let Some(ref fonts) = self.fonts {
            fonts.to_xml(xml)?;
        }
        if let Some(bold) = self.bold {
            toggle_xml(xml, "b", bold.on);
        }
        if let Some(italic) = self.italic {
            toggle_xml(xml, "i", italic.on);
        }
        if let Some(ref color) = self.color {
            val_xml(xml, "color", color.val.as_deref());
        }
        if let Some(size) = self.size {
            match size.val {
                Some(val) => write!(xml, "<w:sz w:val=\"{}\"/>", val)?,
                None => xml.push_str("<w:sz/>"),
            }
        }
        if let Some(ref highlight) = self.highlight {
            val_xml(xml, "highlight", highlight.val.as_deref());
        }
        if let Some(underline) = self.underline {
            write!(xml, "<w:u w:val=\"{}\"/>", underline.val.as_str())?;
        }
        if let Some(ref shading) = self.shading {
            shading.to_xml(xml)?;
        }

        xml.push_str("</w:rPr>");
        Ok(())
    }
}

fn toggle_xml(xml: &mut String, tag: &str, on: bool) {
    xml.push_str("<w:");
    xml.push_str(tag);
    if !on {
        xml.push_str(" w:val=\"0\"");
    }
    xml.push_str("/>");
}

fn val_xml(xml: &mut String, tag: &str, val: Option<&str>) {
    xml.push_str("<w:");
    xml.push_str(tag);
    if let Some(val) = val {
        xml.push_str(" w:val=\"");
        xml.push_str(&escape_xml(val));
        xml.push('"');
    }
    xml.push_str("/>");
}

/// Bold toggle (`w:b`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bold {
    pub(crate) on: bool,
}

impl Bold {
    pub fn new(on: bool) -> Self {
        Self { on }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Default for Bold {
    fn default() -> Self {
        Self { on: true }
    }
}

/// Italic toggle (`w:i`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Italic {
    pub(crate) on: bool,
}

impl Italic {
    pub fn new(on: bool) -> Self {
        Self { on }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Default for Italic {
    fn default() -> Self {
        Self { on: true }
    }
}

/// Text color (`w:color`) as hex RGB.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Color {
    pub(crate) val: Option<String>,
}

impl Color {
    pub fn val(&self) -> Option<&str> {
        self.val.as_deref()
    }

    pub fn set_val(&mut self, hex: impl Into<String>) {
        self.val = Some(hex.into());
    }
}

/// Font size in half-points (`w:sz`); 24 is 12pt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontSize {
    pub(crate) val: Option<u32>,
}

impl FontSize {
    pub fn val(&self) -> Option<u32> {
        self.val
    }

    pub fn set_val(&mut self, half_points: u32) {
        self.val = Some(half_points);
    }
}

/// Underline (`w:u`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Underline {
    pub(crate) val: UnderlineStyle,
}

impl Underline {
    pub fn val(&self) -> UnderlineStyle {
        self.val
    }

    pub fn set_val(&mut self, style: UnderlineStyle) {
        self.val = style;
    }
}

/// Text highlight (`w:highlight`), e.g. "yellow".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    pub(crate) val: Option<String>,
}

impl Highlight {
    pub fn val(&self) -> Option<&str> {
        self.val.as_deref()
    }

    pub fn set_val(&mut self, color: impl Into<String>) {
        self.val = Some(color.into());
    }
}

/// Run fonts (`w:rFonts`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunFonts {
    pub(crate) ascii: Option<String>,
    pub(crate) h_ansi: Option<String>,
}

impl RunFonts {
    pub fn ascii(&self) -> Option<&str> {
        self.ascii.as_deref()
    }

    pub fn set_ascii(&mut self, font: impl Into<String>) {
        self.ascii = Some(font.into());
    }

    pub fn h_ansi(&self) -> Option<&str> {
        self.h_ansi.as_deref()
    }

    pub fn set_h_ansi(&mut self, font: impl Into<String>) {
        self.h_ansi = Some(font.into());
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:rFonts");
        if let Some(ref ascii) = self.ascii {
            write!(xml, " w:ascii=\"{}\"", escape_xml(ascii))?;
        }
        if let Some(ref h_ansi) = self.h_ansi {
            write!(xml, " w:hAnsi=\"{}\"", escape_xml(h_ansi))?;
        }
        xml.push_str("/>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_xml() {
        let mut xml = String::new();
        Text::preserved(" a < b ").to_xml(&mut xml).unwrap();
        assert_eq!(xml, r#"<w:t xml:space="preserve"> a &lt; b </w:t>"#);
    }

    #[test]
    fn test_break_xml() {
        let mut xml = String::new();
        Break::default().to_xml(&mut xml).unwrap();
        let mut page = Break::default();
        page.set_kind(BreakType::Page);
        page.to_xml(&mut xml).unwrap();
        assert_eq!(xml, r#"<w:br/><w:br w:type="page"/>"#);
    }

    #[test]
    fn test_run_formatting_xml() {
        let mut run = Run::new();
        let props = run.properties_mut();
        props.set_bold(Bold::default());
        props.set_italic(Italic::new(false));
        let mut size = FontSize::default();
        size.set_val(28);
        props.set_size(size);
        run.push(RunContent::Text(Text::preserved("Bold")));

        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<w:r><w:rPr><w:b/><w:i w:val="0"/><w:sz w:val="28"/></w:rPr><w:t xml:space="preserve">Bold</w:t></w:r>"#
        );
    }

    #[test]
    fn test_run_text_skips_non_text_content() {
        let mut run = Run::new();
        run.push(RunContent::Text(Text::preserved("a")));
        run.push(RunContent::Break(Break::default()));
        run.push(RunContent::Text(Text::preserved("b")));
        assert_eq!(run.text(), "ab");
    }

    #[test]
    fn test_drawing_xml() {
        let mut drawing = Drawing::new("rId7", 914400, 457200);
        drawing.set_description("Logo");

        let mut xml = String::new();
        drawing.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<wp:extent cx="914400" cy="457200"/>"#));
        assert!(xml.contains(r#"r:embed="rId7""#));
        assert!(xml.contains(r#"descr="Logo""#));
        assert!(xml.contains(r#"<wp:docPr id="1" name="Picture 1""#));

        drawing.set_id(4);
        let mut xml = String::new();
        drawing.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<wp:docPr id="4" name="Picture 4""#));
    }
}
