//! Run-level builders: `w:r`, its content and `w:rPr`.
use crate::ooxml::error::Result;

use super::attr::Attr;
use super::frags::{Fragment, FragmentGroup};
use super::paragraph::{ValueArg, apply_shading_attr, single_value};
use super::value::{invalid_value, parse_unsigned};
use super::{unknown_attribute, unsupported};
use crate::ooxml::docx::format::{BreakType, UnderlineStyle};
use crate::ooxml::docx::writer::{
    Bold, Break, Color, Drawing, FontSize, Highlight, Italic, Node, Run, RunContent, RunFonts,
    RunProperties, Shading, Text, Underline,
};

const W_R: &str = "w:r";
const W_RPR: &str = "w:rPr";
const W_COLOR: &str = "w:color";
const W_SZ: &str = "w:sz";
const W_U: &str = "w:u";
const W_HIGHLIGHT: &str = "w:highlight";
const W_RFONTS: &str = "w:rFonts";

/// Build a text element (`w:t`) that preserves surrounding whitespace.
pub fn t(text: impl Into<String>) -> Text {
    Text::preserved(text)
}

/// The text element a bare string stands for inside a run.
pub fn text_from_str(text: &str) -> Text {
    t(text)
}

/// The run a bare string stands for inside a paragraph: one text element,
/// no properties.
pub fn run_from_text(text: &str) -> Run {
    let mut run = Run::new();
    run.push(RunContent::Text(t(text)));
    run
}

/// Build a break (`w:br`).
///
/// `"page"`, `"column"` and `"textWrapping"` select those break types;
/// anything else yields a plain line break.
pub fn br(kind: &str) -> Break {
    let mut br = Break::default();
    if let Some(kind) = BreakType::from_value(kind) {
        br.set_kind(kind);
    }
    br
}

/// Bold toggle (`w:b`).
pub fn b() -> Bold {
    Bold::default()
}

/// Italic toggle (`w:i`).
pub fn i() -> Italic {
    Italic::default()
}

/// Inline picture (`w:drawing`) for an image part already related as `rel_id`.
///
/// Every drawing starts with `wp:docPr` id 1; [`Document::to_xml`] numbers
/// colliding ids apart. Set ids with [`Drawing::set_id`] when the markup is
/// serialized some other way.
///
/// [`Document::to_xml`]: crate::ooxml::docx::writer::Document::to_xml
pub fn drawing(rel_id: impl Into<String>, width_emu: i64, height_emu: i64) -> Drawing {
    Drawing::new(rel_id, width_emu, height_emu)
}

/// An argument accepted by [`r`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunArg {
    /// Sets the properties slot; the last one wins.
    Properties(RunProperties),
    Text(Text),
    Break(Break),
    Drawing(Drawing),
    /// Wrapped into a text element and appended.
    Str(String),
    /// Each member dispatched as if passed individually.
    Fragment(Fragment),
    /// Applied to the properties block.
    Attr(Attr),
    /// Dispatched by its runtime kind.
    Node(Node),
}

impl RunArg {
    /// Resolve a dynamically-typed node into the variant it stands for.
    pub fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::RunProperties(props) => Ok(Self::Properties(props)),
            Node::Text(text) => Ok(Self::Text(text)),
            Node::Break(br) => Ok(Self::Break(br)),
            Node::Drawing(drawing) => Ok(Self::Drawing(drawing)),
            other => Err(unsupported(W_R, &other)),
        }
    }
}

macro_rules! impl_from_for_arg {
    ($arg:ident { $($ty:ty => $variant:ident),* $(,)? }) => {
        $(
            impl From<$ty> for $arg {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_arg!(RunArg {
    RunProperties => Properties,
    Text => Text,
    Break => Break,
    Drawing => Drawing,
    String => Str,
    Fragment => Fragment,
    Attr => Attr,
    Node => Node,
});

impl From<&str> for RunArg {
    fn from(text: &str) -> Self {
        Self::Str(text.to_string())
    }
}

impl From<FragmentGroup> for RunArg {
    fn from(group: FragmentGroup) -> Self {
        Self::Fragment(group.freeze())
    }
}

impl From<&FragmentGroup> for RunArg {
    fn from(group: &FragmentGroup) -> Self {
        Self::Fragment(group.into())
    }
}

/// Build a run (`w:r`).
pub fn r<I>(args: I) -> Result<Run>
where
    I: IntoIterator,
    I::Item: Into<RunArg>,
{
    let mut run = Run::new();
    for arg in args {
        apply_run_arg(&mut run, arg.into())?;
    }
    Ok(run)
}

fn apply_run_arg(run: &mut Run, arg: RunArg) -> Result<()> {
    match arg {
        RunArg::Properties(props) => run.set_properties(props),
        RunArg::Text(text) => run.push(RunContent::Text(text)),
        RunArg::Break(br) => run.push(RunContent::Break(br)),
        RunArg::Drawing(drawing) => run.push(RunContent::Drawing(drawing)),
        RunArg::Str(text) => run.push(RunContent::Text(text_from_str(&text))),
        RunArg::Fragment(fragment) => {
            for node in fragment {
                apply_run_arg(run, RunArg::from_node(node)?)?;
            }
        },
        RunArg::Attr(attr) => apply_run_properties_attr(W_R, run.properties_mut(), &attr)?,
        RunArg::Node(node) => apply_run_arg(run, RunArg::from_node(node)?)?,
    }
    Ok(())
}

/// An argument accepted by [`rpr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunPropertiesArg {
    Fonts(RunFonts),
    Bold(Bold),
    Italic(Italic),
    Color(Color),
    Size(FontSize),
    Highlight(Highlight),
    Underline(Underline),
    Shading(Shading),
    Attr(Attr),
    Node(Node),
}

impl RunPropertiesArg {
    /// Resolve a dynamically-typed node into the variant it stands for.
    pub fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::RunFonts(fonts) => Ok(Self::Fonts(fonts)),
            Node::Bold(bold) => Ok(Self::Bold(bold)),
            Node::Italic(italic) => Ok(Self::Italic(italic)),
            Node::Color(color) => Ok(Self::Color(color)),
            Node::FontSize(size) => Ok(Self::Size(size)),
            Node::Highlight(highlight) => Ok(Self::Highlight(highlight)),
            Node::Underline(underline) => Ok(Self::Underline(underline)),
            Node::Shading(shading) => Ok(Self::Shading(shading)),
            other => Err(unsupported(W_RPR, &other)),
        }
    }
}

impl_from_for_arg!(RunPropertiesArg {
    RunFonts => Fonts,
    Bold => Bold,
    Italic => Italic,
    Color => Color,
    FontSize => Size,
    Highlight => Highlight,
    Underline => Underline,
    Shading => Shading,
    Attr => Attr,
    Node => Node,
});

/// Build run properties (`w:rPr`).
pub fn rpr<I>(args: I) -> Result<RunProperties>
where
    I: IntoIterator,
    I::Item: Into<RunPropertiesArg>,
{
    let mut props = RunProperties::new();
    for arg in args {
        apply_run_properties_arg(&mut props, arg.into())?;
    }
    Ok(props)
}

fn apply_run_properties_arg(props: &mut RunProperties, arg: RunPropertiesArg) -> Result<()> {
    match arg {
        RunPropertiesArg::Fonts(fonts) => props.set_fonts(fonts),
        RunPropertiesArg::Bold(bold) => props.set_bold(bold),
        RunPropertiesArg::Italic(italic) => props.set_italic(italic),
        RunPropertiesArg::Color(color) => props.set_color(color),
        RunPropertiesArg::Size(size) => props.set_size(size),
        RunPropertiesArg::Highlight(highlight) => props.set_highlight(highlight),
        RunPropertiesArg::Underline(underline) => props.set_underline(underline),
        RunPropertiesArg::Shading(shading) => props.set_shading(shading),
        RunPropertiesArg::Attr(attr) => apply_run_properties_attr(W_RPR, props, &attr)?,
        RunPropertiesArg::Node(node) => {
            apply_run_properties_arg(props, RunPropertiesArg::from_node(node)?)?;
        },
    }
    Ok(())
}

/// Shorthand attributes understood directly by `w:rPr` (and `w:r`):
/// `ascii`/`hAnsi` go to the fonts block, `fill` to shading.
fn apply_run_properties_attr(
    element: &'static str,
    props: &mut RunProperties,
    attr: &Attr,
) -> Result<()> {
    match attr.name() {
        "ascii" | "hAnsi" => {
            apply_fonts_attr(element, props.fonts.get_or_insert_with(RunFonts::default), attr)
        },
        "fill" => {
            apply_shading_attr(element, props.shading.get_or_insert_with(Shading::default), attr)
        },
        _ => Err(unknown_attribute(element, attr)),
    }
}

fn apply_fonts_attr(element: &'static str, fonts: &mut RunFonts, attr: &Attr) -> Result<()> {
    match attr.name() {
        "ascii" => fonts.set_ascii(attr.value()),
        "hAnsi" => fonts.set_h_ansi(attr.value()),
        _ => return Err(unknown_attribute(element, attr)),
    }
    Ok(())
}

/// Build a text color (`w:color`) from `val` or a bare hex string.
pub fn color<I>(args: I) -> Result<Color>
where
    I: IntoIterator,
    I::Item: Into<ValueArg>,
{
    let mut color = Color::default();
    for arg in args {
        color.set_val(single_value(W_COLOR, arg.into())?);
    }
    Ok(color)
}

/// Build a highlight (`w:highlight`) from `val` or a bare color name.
pub fn highlight<I>(args: I) -> Result<Highlight>
where
    I: IntoIterator,
    I::Item: Into<ValueArg>,
{
    let mut highlight = Highlight::default();
    for arg in args {
        highlight.set_val(single_value(W_HIGHLIGHT, arg.into())?);
    }
    Ok(highlight)
}

/// Build run fonts (`w:rFonts`).
///
/// `ascii` and `hAnsi` set one slot each; `val` or a bare font name sets both.
pub fn rfonts<I>(args: I) -> Result<RunFonts>
where
    I: IntoIterator,
    I::Item: Into<ValueArg>,
{
    let mut fonts = RunFonts::default();
    for arg in args {
        match arg.into() {
            ValueArg::Attr(attr) if attr.name() == "val" => {
                fonts.set_ascii(attr.value());
                fonts.set_h_ansi(attr.value());
            },
            ValueArg::Attr(attr) => apply_fonts_attr(W_RFONTS, &mut fonts, &attr)?,
            ValueArg::Text(name) => {
                fonts.set_ascii(name.as_str());
                fonts.set_h_ansi(name);
            },
        }
    }
    Ok(fonts)
}

/// An argument accepted by [`sz`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeArg {
    Attr(Attr),
    HalfPoints(i64),
}

impl From<Attr> for SizeArg {
    fn from(attr: Attr) -> Self {
        Self::Attr(attr)
    }
}

macro_rules! impl_from_int_for_size_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for SizeArg {
                fn from(value: $ty) -> Self {
                    Self::HalfPoints(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int_for_size_arg!(i8, i16, i32, i64, u8, u16, u32);

/// Build a font size (`w:sz`) in half-points from `val` or a bare integer.
pub fn sz<I>(args: I) -> Result<FontSize>
where
    I: IntoIterator,
    I::Item: Into<SizeArg>,
{
    let mut size = FontSize::default();
    for arg in args {
        let half_points = match arg.into() {
            SizeArg::Attr(attr) if attr.name() == "val" => parse_unsigned(W_SZ, &attr)?,
            SizeArg::Attr(attr) => return Err(unknown_attribute(W_SZ, &attr)),
            SizeArg::HalfPoints(value) => u32::try_from(value).map_err(|_| {
                invalid_value(W_SZ, &Attr::new("val", itoa::Buffer::new().format(value)))
            })?,
        };
        size.set_val(half_points);
    }
    Ok(size)
}

/// An argument accepted by [`u`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnderlineArg {
    Attr(Attr),
    Text(String),
    Style(UnderlineStyle),
}

impl From<Attr> for UnderlineArg {
    fn from(attr: Attr) -> Self {
        Self::Attr(attr)
    }
}

impl From<&str> for UnderlineArg {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<UnderlineStyle> for UnderlineArg {
    fn from(style: UnderlineStyle) -> Self {
        Self::Style(style)
    }
}

/// Build an underline (`w:u`). With no arguments the style is `single`.
pub fn u<I>(args: I) -> Result<Underline>
where
    I: IntoIterator,
    I::Item: Into<UnderlineArg>,
{
    let mut underline = Underline::default();
    for arg in args {
        let style = match arg.into() {
            UnderlineArg::Style(style) => style,
            UnderlineArg::Attr(attr) => {
                let token = single_value(W_U, ValueArg::Attr(attr.clone()))?;
                UnderlineStyle::from_value(&token).ok_or_else(|| invalid_value(W_U, &attr))?
            },
            UnderlineArg::Text(token) => UnderlineStyle::from_value(&token)
                .ok_or_else(|| invalid_value(W_U, &Attr::new("val", token.as_str())))?,
        };
        underline.set_val(style);
    }
    Ok(underline)
}

/// Single underline, the common case.
pub fn u_single() -> Underline {
    Underline::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::OoxmlError;
    use crate::ooxml::docx::compose::attr::{ascii, fill, h_ansi, val};

    #[test]
    fn test_string_sugar_matches_explicit_text() {
        assert_eq!(r(["Hi"]).unwrap(), r([t("Hi")]).unwrap());
        assert_eq!(r(["Hi"]).unwrap(), run_from_text("Hi"));
        assert_eq!(text_from_str("Hi"), t("Hi"));
        assert!(t("Hi").preserve_space());
    }

    #[test]
    fn test_children_keep_call_order_around_properties() {
        let props = rpr([b()]).unwrap();
        let run = r([
            RunArg::from("a"),
            RunArg::from(br("page")),
            RunArg::from(props.clone()),
            RunArg::from(t("b")),
        ])
        .unwrap();

        assert_eq!(run.content().len(), 3);
        assert!(matches!(run.content()[1], RunContent::Break(_)));
        assert_eq!(run.text(), "ab");
        assert_eq!(run.properties(), Some(&props));
    }

    #[test]
    fn test_last_properties_block_wins() {
        let bold = rpr([b()]).unwrap();
        let italic = rpr([i()]).unwrap();
        let run = r([RunArg::from(bold), RunArg::from(italic.clone())]).unwrap();
        assert_eq!(run.properties(), Some(&italic));
    }

    #[test]
    fn test_fragment_flattens_into_run() {
        let mut group = FragmentGroup::new();
        group.add(t("x")).add(br("")).add(drawing("rId1", 10, 10));

        let run = r([RunArg::from("<"), RunArg::from(&group), RunArg::from(">")]).unwrap();
        let kinds: Vec<_> = run
            .content()
            .iter()
            .map(|c| match c {
                RunContent::Text(_) => "t",
                RunContent::Break(_) => "br",
                RunContent::Drawing(_) => "drawing",
            })
            .collect();
        assert_eq!(kinds, vec!["t", "t", "br", "drawing", "t"]);
    }

    #[test]
    fn test_run_rejects_paragraph_nodes() {
        let err = r([Node::from(crate::ooxml::docx::writer::Paragraph::new())]).unwrap_err();
        assert_eq!(
            err,
            OoxmlError::UnsupportedArgument {
                element: "w:r",
                kind: "Paragraph"
            }
        );
    }

    #[test]
    fn test_run_attributes_reach_properties() {
        let run = r([ascii("Consolas"), fill("FFFF00")]).unwrap();
        let props = run.properties().unwrap();
        assert_eq!(props.fonts().unwrap().ascii(), Some("Consolas"));
        assert_eq!(props.shading().unwrap().fill(), Some("FFFF00"));

        assert!(matches!(
            r([val("x")]),
            Err(OoxmlError::UnknownAttribute { element: "w:r", .. })
        ));
    }

    #[test]
    fn test_rpr_slots() {
        let props = rpr([
            RunPropertiesArg::from(b()),
            RunPropertiesArg::from(i()),
            RunPropertiesArg::from(color(["FF0000"]).unwrap()),
            RunPropertiesArg::from(sz([28]).unwrap()),
            RunPropertiesArg::from(u([UnderlineStyle::Double]).unwrap()),
            RunPropertiesArg::from(highlight(["yellow"]).unwrap()),
            RunPropertiesArg::from(rfonts(["Arial"]).unwrap()),
        ])
        .unwrap();

        assert!(props.bold().unwrap().is_on());
        assert!(props.italic().unwrap().is_on());
        assert_eq!(props.color().unwrap().val(), Some("FF0000"));
        assert_eq!(props.size().unwrap().val(), Some(28));
        assert_eq!(props.underline().unwrap().val(), UnderlineStyle::Double);
        assert_eq!(props.highlight().unwrap().val(), Some("yellow"));
        assert_eq!(props.fonts().unwrap().h_ansi(), Some("Arial"));
    }

    #[test]
    fn test_rpr_rejects_paragraph_level_nodes() {
        let err = rpr([Node::from(crate::ooxml::docx::writer::Spacing::default())]).unwrap_err();
        assert_eq!(err.to_string(), "Cannot add Spacing to w:rPr");
    }

    #[test]
    fn test_value_variants_agree() {
        assert_eq!(color([val("00FF00")]).unwrap(), color(["00FF00"]).unwrap());
        assert_eq!(highlight([val("green")]).unwrap(), highlight(["green"]).unwrap());
        assert_eq!(sz([val(24)]).unwrap(), sz([24]).unwrap());
        assert_eq!(u([val("wave")]).unwrap(), u(["wave"]).unwrap());
    }

    #[test]
    fn test_value_builders_reject_other_names() {
        assert!(matches!(
            color([fill("00FF00")]),
            Err(OoxmlError::UnknownAttribute { element: "w:color", .. })
        ));
        assert!(matches!(
            sz([Attr::new("size", "24")]),
            Err(OoxmlError::UnknownAttribute { element: "w:sz", .. })
        ));
    }

    #[test]
    fn test_size_rejects_bad_numbers() {
        assert!(matches!(
            sz([val("big")]),
            Err(OoxmlError::InvalidAttributeValue { element: "w:sz", .. })
        ));
        assert!(matches!(
            sz([-4]),
            Err(OoxmlError::InvalidAttributeValue { element: "w:sz", .. })
        ));
    }

    #[test]
    fn test_rfonts() {
        let both = rfonts(["Calibri"]).unwrap();
        assert_eq!(both.ascii(), Some("Calibri"));
        assert_eq!(both.h_ansi(), Some("Calibri"));

        let split = rfonts([ascii("A"), h_ansi("B")]).unwrap();
        assert_eq!(split.ascii(), Some("A"));
        assert_eq!(split.h_ansi(), Some("B"));

        assert_eq!(rfonts([val("Arial")]).unwrap(), rfonts(["Arial"]).unwrap());
        assert!(matches!(
            rfonts([fill("A")]),
            Err(OoxmlError::UnknownAttribute { element: "w:rFonts", .. })
        ));
    }

    #[test]
    fn test_underline_defaults_to_single() {
        let none: [UnderlineArg; 0] = [];
        assert_eq!(u(none).unwrap().val(), UnderlineStyle::Single);
        assert_eq!(u_single().val(), UnderlineStyle::Single);
        assert!(u(["squiggle"]).is_err());
    }

    #[test]
    fn test_break_kinds() {
        assert_eq!(br("page").kind(), Some(BreakType::Page));
        assert_eq!(br("column").kind(), Some(BreakType::Column));
        assert_eq!(br("textWrapping").kind(), Some(BreakType::TextWrapping));
        assert_eq!(br("").kind(), None);
        assert_eq!(br("anything").kind(), None);
    }
}
