//! Dynamically-typed element node.
use crate::ooxml::error::Result;

use super::paragraph::{
    Alignment, Indentation, Paragraph, ParagraphBorders, ParagraphProperties, ParagraphStyle,
    Shading, Spacing,
};
use super::run::{
    Bold, Break, Color, Drawing, FontSize, Highlight, Italic, Run, RunFonts, RunProperties, Text,
    Underline,
};

/// Any element the builders can produce.
///
/// This is the currency of fragment groups and document content: a value whose
/// element kind is only known at runtime. Builders inspect the variant to decide
/// which slot a node belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Paragraph(Paragraph),
    Run(Run),
    Text(Text),
    Break(Break),
    Drawing(Drawing),
    ParagraphProperties(ParagraphProperties),
    RunProperties(RunProperties),
    Spacing(Spacing),
    Shading(Shading),
    Indentation(Indentation),
    ParagraphBorders(ParagraphBorders),
    ParagraphStyle(ParagraphStyle),
    Alignment(Alignment),
    Bold(Bold),
    Italic(Italic),
    Color(Color),
    FontSize(FontSize),
    Underline(Underline),
    Highlight(Highlight),
    RunFonts(RunFonts),
}

impl Node {
    /// Runtime kind name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Paragraph(_) => "Paragraph",
            Node::Run(_) => "Run",
            Node::Text(_) => "Text",
            Node::Break(_) => "Break",
            Node::Drawing(_) => "Drawing",
            Node::ParagraphProperties(_) => "ParagraphProperties",
            Node::RunProperties(_) => "RunProperties",
            Node::Spacing(_) => "Spacing",
            Node::Shading(_) => "Shading",
            Node::Indentation(_) => "Indentation",
            Node::ParagraphBorders(_) => "ParagraphBorders",
            Node::ParagraphStyle(_) => "ParagraphStyle",
            Node::Alignment(_) => "Alignment",
            Node::Bold(_) => "Bold",
            Node::Italic(_) => "Italic",
            Node::Color(_) => "Color",
            Node::FontSize(_) => "FontSize",
            Node::Underline(_) => "Underline",
            Node::Highlight(_) => "Highlight",
            Node::RunFonts(_) => "RunFonts",
        }
    }

    /// Serialize the node as a standalone element.
    ///
    /// Run-level formatting values are wrapped in a `w:rPr` of their own.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match self {
            Node::Paragraph(p) => p.to_xml(xml),
            Node::Run(r) => r.to_xml(xml),
            Node::Text(t) => t.to_xml(xml),
            Node::Break(br) => br.to_xml(xml),
            Node::Drawing(d) => d.to_xml(xml),
            Node::ParagraphProperties(p) => p.to_xml(xml),
            Node::RunProperties(r) => r.to_xml(xml),
            Node::Spacing(s) => s.to_xml(xml),
            Node::Shading(s) => s.to_xml(xml),
            Node::Indentation(i) => i.to_xml(xml),
            Node::ParagraphBorders(b) => b.to_xml(xml),
            Node::ParagraphStyle(s) => s.to_xml(xml),
            Node::Alignment(a) => a.to_xml(xml),
            Node::Bold(b) => in_run_properties(xml, |props| props.set_bold(*b)),
            Node::Italic(i) => in_run_properties(xml, |props| props.set_italic(*i)),
            Node::Color(c) => in_run_properties(xml, |props| props.set_color(c.clone())),
            Node::FontSize(s) => in_run_properties(xml, |props| props.set_size(*s)),
            Node::Underline(u) => in_run_properties(xml, |props| props.set_underline(*u)),
            Node::Highlight(h) => in_run_properties(xml, |props| props.set_highlight(h.clone())),
            Node::RunFonts(f) => in_run_properties(xml, |props| props.set_fonts(f.clone())),
        }
    }
}

fn in_run_properties(xml: &mut String, set: impl FnOnce(&mut RunProperties)) -> Result<()> {
    let mut props = RunProperties::default();
    set(&mut props);
    props.to_xml(xml)
}

macro_rules! impl_from_for_node {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(value: $variant) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_node!(
    Paragraph,
    Run,
    Text,
    Break,
    Drawing,
    ParagraphProperties,
    RunProperties,
    Spacing,
    Shading,
    Indentation,
    ParagraphBorders,
    ParagraphStyle,
    Alignment,
    Bold,
    Italic,
    Color,
    FontSize,
    Underline,
    Highlight,
    RunFonts,
);
