//! Paragraph-level builders: `w:p`, `w:pPr` and the blocks it holds.
use crate::ooxml::error::{OoxmlError, Result};

use super::attr::Attr;
use super::frags::{Fragment, FragmentGroup};
use super::run::run_from_text;
use super::value::{
    decode_unsigned, invalid_value, parse_signed, parse_unsigned, split_compound,
};
use super::{unknown_attribute, unsupported};
use crate::ooxml::docx::format::{BorderStyle, Justification};
use crate::ooxml::docx::writer::{
    Alignment, Border, Indentation, Node, Paragraph, ParagraphBorders, ParagraphProperties,
    ParagraphStyle, Run, Shading, Spacing,
};

const W_P: &str = "w:p";
const W_PPR: &str = "w:pPr";
const W_SPACING: &str = "w:spacing";
const W_SHD: &str = "w:shd";
const W_IND: &str = "w:ind";
const W_PBDR: &str = "w:pBdr";
const W_PSTYLE: &str = "w:pStyle";
const W_JC: &str = "w:jc";

/// An argument accepted by [`p`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphArg {
    /// Sets the properties slot; the last one wins.
    Properties(ParagraphProperties),
    /// Appended as a child.
    Run(Run),
    /// Wrapped into a single-text run and appended.
    Text(String),
    /// Each member dispatched as if passed individually.
    Fragment(Fragment),
    /// Applied to the properties block.
    Attr(Attr),
    /// Dispatched by its runtime kind.
    Node(Node),
}

impl ParagraphArg {
    /// Resolve a dynamically-typed node into the variant it stands for.
    pub fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::ParagraphProperties(props) => Ok(Self::Properties(props)),
            Node::Run(run) => Ok(Self::Run(run)),
            other => Err(unsupported(W_P, &other)),
        }
    }
}

impl From<ParagraphProperties> for ParagraphArg {
    fn from(props: ParagraphProperties) -> Self {
        Self::Properties(props)
    }
}

impl From<Run> for ParagraphArg {
    fn from(run: Run) -> Self {
        Self::Run(run)
    }
}

impl From<&str> for ParagraphArg {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ParagraphArg {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Fragment> for ParagraphArg {
    fn from(fragment: Fragment) -> Self {
        Self::Fragment(fragment)
    }
}

impl From<FragmentGroup> for ParagraphArg {
    fn from(group: FragmentGroup) -> Self {
        Self::Fragment(group.freeze())
    }
}

impl From<&FragmentGroup> for ParagraphArg {
    fn from(group: &FragmentGroup) -> Self {
        Self::Fragment(group.into())
    }
}

impl From<Attr> for ParagraphArg {
    fn from(attr: Attr) -> Self {
        Self::Attr(attr)
    }
}

impl From<Node> for ParagraphArg {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

/// Build a paragraph (`w:p`).
///
/// Argument position never decides the slot; the argument's kind does. Runs
/// and text accumulate in call order, a properties block may appear anywhere.
///
/// # Example
///
/// ```
/// use docx_compose::ooxml::docx::compose::{attr::after, ppr, spacing};
/// use docx_compose::w_p;
///
/// let para = w_p!("Hello, ", ppr([spacing([after(150)])?])?, "World")?;
/// assert_eq!(para.text(), "Hello, World");
/// assert_eq!(para.properties().unwrap().spacing().unwrap().after(), Some(150));
/// # Ok::<(), docx_compose::ooxml::OoxmlError>(())
/// ```
pub fn p<I>(args: I) -> Result<Paragraph>
where
    I: IntoIterator,
    I::Item: Into<ParagraphArg>,
{
    let mut paragraph = Paragraph::new();
    for arg in args {
        apply_paragraph_arg(&mut paragraph, arg.into())?;
    }
    Ok(paragraph)
}

fn apply_paragraph_arg(paragraph: &mut Paragraph, arg: ParagraphArg) -> Result<()> {
    match arg {
        ParagraphArg::Properties(props) => paragraph.set_properties(props),
        ParagraphArg::Run(run) => paragraph.push_run(run),
        ParagraphArg::Text(text) => paragraph.push_run(run_from_text(&text)),
        ParagraphArg::Fragment(fragment) => {
            for node in fragment {
                apply_paragraph_arg(paragraph, ParagraphArg::from_node(node)?)?;
            }
        },
        ParagraphArg::Attr(attr) => {
            apply_properties_attr(W_P, paragraph.properties_mut(), &attr)?;
        },
        ParagraphArg::Node(node) => {
            apply_paragraph_arg(paragraph, ParagraphArg::from_node(node)?)?;
        },
    }
    Ok(())
}

/// An argument accepted by [`ppr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphPropertiesArg {
    Style(ParagraphStyle),
    Borders(ParagraphBorders),
    Shading(Shading),
    Spacing(Spacing),
    Indentation(Indentation),
    Alignment(Alignment),
    Attr(Attr),
    Node(Node),
}

impl ParagraphPropertiesArg {
    /// Resolve a dynamically-typed node into the variant it stands for.
    pub fn from_node(node: Node) -> Result<Self> {
        match node {
            Node::ParagraphStyle(style) => Ok(Self::Style(style)),
            Node::ParagraphBorders(borders) => Ok(Self::Borders(borders)),
            Node::Shading(shading) => Ok(Self::Shading(shading)),
            Node::Spacing(spacing) => Ok(Self::Spacing(spacing)),
            Node::Indentation(indentation) => Ok(Self::Indentation(indentation)),
            Node::Alignment(alignment) => Ok(Self::Alignment(alignment)),
            other => Err(unsupported(W_PPR, &other)),
        }
    }
}

macro_rules! impl_from_for_ppr_arg {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ParagraphPropertiesArg {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_ppr_arg!(
    ParagraphStyle => Style,
    ParagraphBorders => Borders,
    Shading => Shading,
    Spacing => Spacing,
    Indentation => Indentation,
    Alignment => Alignment,
    Attr => Attr,
    Node => Node,
);

/// Build paragraph properties (`w:pPr`).
///
/// Each block kind fills its own slot; supplying the same kind twice keeps the
/// last one.
pub fn ppr<I>(args: I) -> Result<ParagraphProperties>
where
    I: IntoIterator,
    I::Item: Into<ParagraphPropertiesArg>,
{
    let mut props = ParagraphProperties::new();
    for arg in args {
        apply_properties_arg(&mut props, arg.into())?;
    }
    Ok(props)
}

fn apply_properties_arg(props: &mut ParagraphProperties, arg: ParagraphPropertiesArg) -> Result<()> {
    match arg {
        ParagraphPropertiesArg::Style(style) => props.set_style(style),
        ParagraphPropertiesArg::Borders(borders) => props.set_borders(borders),
        ParagraphPropertiesArg::Shading(shading) => props.set_shading(shading),
        ParagraphPropertiesArg::Spacing(spacing) => props.set_spacing(spacing),
        ParagraphPropertiesArg::Indentation(indentation) => props.set_indentation(indentation),
        ParagraphPropertiesArg::Alignment(alignment) => props.set_alignment(alignment),
        ParagraphPropertiesArg::Attr(attr) => apply_properties_attr(W_PPR, props, &attr)?,
        ParagraphPropertiesArg::Node(node) => {
            apply_properties_arg(props, ParagraphPropertiesArg::from_node(node)?)?;
        },
    }
    Ok(())
}

/// Shorthand attributes understood directly by `w:pPr` (and `w:p`).
///
/// `before`/`after` go to spacing, `left`/`right` to indentation, `fill` to
/// shading and `val` to the paragraph style. Each edits the existing block
/// in place, creating it if absent.
fn apply_properties_attr(
    element: &'static str,
    props: &mut ParagraphProperties,
    attr: &Attr,
) -> Result<()> {
    match attr.name() {
        "before" | "after" => {
            apply_spacing_attr(element, props.spacing.get_or_insert_with(Spacing::default), attr)
        },
        "left" | "right" => apply_indentation_attr(
            element,
            props.indentation.get_or_insert_with(Indentation::default),
            attr,
        ),
        "fill" => apply_shading_attr(element, props.shading.get_or_insert_with(Shading::default), attr),
        "val" => {
            props
                .style
                .get_or_insert_with(ParagraphStyle::default)
                .set_val(attr.value());
            Ok(())
        },
        _ => Err(unknown_attribute(element, attr)),
    }
}

fn apply_spacing_attr(element: &'static str, spacing: &mut Spacing, attr: &Attr) -> Result<()> {
    match attr.name() {
        "before" => spacing.set_before(parse_unsigned(element, attr)?),
        "after" => spacing.set_after(parse_unsigned(element, attr)?),
        _ => return Err(unknown_attribute(element, attr)),
    }
    Ok(())
}

fn apply_indentation_attr(
    element: &'static str,
    indentation: &mut Indentation,
    attr: &Attr,
) -> Result<()> {
    match attr.name() {
        "left" => indentation.set_left(parse_signed(element, attr)?),
        "right" => indentation.set_right(parse_signed(element, attr)?),
        _ => return Err(unknown_attribute(element, attr)),
    }
    Ok(())
}

pub(crate) fn apply_shading_attr(
    element: &'static str,
    shading: &mut Shading,
    attr: &Attr,
) -> Result<()> {
    match attr.name() {
        "fill" => shading.set_fill(attr.value()),
        _ => return Err(unknown_attribute(element, attr)),
    }
    Ok(())
}

/// Build paragraph spacing (`w:spacing`) from `before` / `after` in twips.
pub fn spacing<I>(attrs: I) -> Result<Spacing>
where
    I: IntoIterator<Item = Attr>,
{
    let mut spacing = Spacing::default();
    for attr in attrs {
        apply_spacing_attr(W_SPACING, &mut spacing, &attr)?;
    }
    Ok(spacing)
}

/// Build shading (`w:shd`) from `fill`.
pub fn shd<I>(attrs: I) -> Result<Shading>
where
    I: IntoIterator<Item = Attr>,
{
    let mut shading = Shading::default();
    for attr in attrs {
        apply_shading_attr(W_SHD, &mut shading, &attr)?;
    }
    Ok(shading)
}

/// Build indentation (`w:ind`) from `left` / `right` in twips.
pub fn ind<I>(attrs: I) -> Result<Indentation>
where
    I: IntoIterator<Item = Attr>,
{
    let mut indentation = Indentation::default();
    for attr in attrs {
        apply_indentation_attr(W_IND, &mut indentation, &attr)?;
    }
    Ok(indentation)
}

/// How strictly border specifications are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderParse {
    /// A specification that is not exactly `COLOR:WIDTH` yields a border
    /// with every field unset.
    #[default]
    Lenient,
    /// A specification that is not exactly `COLOR:WIDTH` is an error.
    Strict,
}

/// Build paragraph borders (`w:pBdr`) from `top` / `left` / `bottom` / `right`,
/// each valued `"COLOR:WIDTH"` (width in eighths of a point).
///
/// Malformed specifications produce an empty border rather than an error; use
/// [`pbdr_strict`] to reject them.
pub fn pbdr<I>(attrs: I) -> Result<ParagraphBorders>
where
    I: IntoIterator<Item = Attr>,
{
    pbdr_with(BorderParse::Lenient, attrs)
}

/// Like [`pbdr`], but a specification that is not exactly `COLOR:WIDTH` is a
/// [`OoxmlError::MalformedAttribute`].
pub fn pbdr_strict<I>(attrs: I) -> Result<ParagraphBorders>
where
    I: IntoIterator<Item = Attr>,
{
    pbdr_with(BorderParse::Strict, attrs)
}

/// Build paragraph borders with an explicit parse mode.
pub fn pbdr_with<I>(mode: BorderParse, attrs: I) -> Result<ParagraphBorders>
where
    I: IntoIterator<Item = Attr>,
{
    let mut borders = ParagraphBorders::default();
    for attr in attrs {
        match attr.name() {
            "top" => borders.set_top(parse_border(mode, &attr)?),
            "left" => borders.set_left(parse_border(mode, &attr)?),
            "bottom" => borders.set_bottom(parse_border(mode, &attr)?),
            "right" => borders.set_right(parse_border(mode, &attr)?),
            _ => return Err(unknown_attribute(W_PBDR, &attr)),
        }
    }
    Ok(borders)
}

fn parse_border(mode: BorderParse, attr: &Attr) -> Result<Border> {
    let mut border = Border::default();
    match split_compound(attr.value()).as_slice() {
        [color, width] => {
            let size = decode_unsigned(width).ok_or_else(|| invalid_value(W_PBDR, attr))?;
            border.set_color(*color);
            border.set_size(size);
            border.set_space(1);
            border.set_style(BorderStyle::Single);
        },
        _ if mode == BorderParse::Strict => {
            return Err(OoxmlError::MalformedAttribute {
                element: W_PBDR,
                name: attr.name().to_string(),
                value: attr.value().to_string(),
            });
        },
        _ => {},
    }
    Ok(border)
}

/// An argument carrying a plain string value: either `val` or the bare string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueArg {
    Attr(Attr),
    Text(String),
}

impl From<Attr> for ValueArg {
    fn from(attr: Attr) -> Self {
        Self::Attr(attr)
    }
}

impl From<&str> for ValueArg {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ValueArg {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Resolve the single `val` of a simple element.
pub(crate) fn single_value(element: &'static str, arg: ValueArg) -> Result<String> {
    match arg {
        ValueArg::Attr(attr) if attr.name() == "val" => Ok(attr.value().to_string()),
        ValueArg::Attr(attr) => Err(unknown_attribute(element, &attr)),
        ValueArg::Text(text) => Ok(text),
    }
}

/// Build a paragraph style reference (`w:pStyle`).
pub fn pstyle<I>(args: I) -> Result<ParagraphStyle>
where
    I: IntoIterator,
    I::Item: Into<ValueArg>,
{
    let mut style = ParagraphStyle::default();
    for arg in args {
        style.set_val(single_value(W_PSTYLE, arg.into())?);
    }
    Ok(style)
}

/// An argument accepted by [`jc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JustificationArg {
    Attr(Attr),
    Text(String),
    Value(Justification),
}

impl From<Attr> for JustificationArg {
    fn from(attr: Attr) -> Self {
        Self::Attr(attr)
    }
}

impl From<&str> for JustificationArg {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for JustificationArg {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Justification> for JustificationArg {
    fn from(value: Justification) -> Self {
        Self::Value(value)
    }
}

/// Build paragraph justification (`w:jc`).
///
/// `val("center")`, `"center"` and `Justification::Center` are equivalent.
pub fn jc<I>(args: I) -> Result<Alignment>
where
    I: IntoIterator,
    I::Item: Into<JustificationArg>,
{
    let mut alignment = Alignment::default();
    for arg in args {
        let value = match arg.into() {
            JustificationArg::Value(value) => value,
            JustificationArg::Attr(attr) => {
                let token = single_value(W_JC, ValueArg::Attr(attr.clone()))?;
                Justification::from_value(&token).ok_or_else(|| invalid_value(W_JC, &attr))?
            },
            JustificationArg::Text(token) => Justification::from_value(&token)
                .ok_or_else(|| invalid_value(W_JC, &Attr::new("val", token.as_str())))?,
        };
        alignment.set_val(value);
    }
    Ok(alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::compose::attr::{after, before, bottom, fill, left, right, top, val};
    use crate::ooxml::docx::compose::run::{r, t};

    #[test]
    fn test_string_sugar_matches_explicit_run() {
        let sugared = p(["Hello"]).unwrap();
        let explicit = p([r([t("Hello")]).unwrap()]).unwrap();
        assert_eq!(sugared, explicit);
        assert_eq!(sugared.runs()[0], run_from_text("Hello"));
    }

    #[test]
    fn test_properties_position_does_not_affect_children() {
        let props = ppr([spacing([after(150)]).unwrap()]).unwrap();
        let para = p([
            ParagraphArg::from("a"),
            ParagraphArg::from(props.clone()),
            ParagraphArg::from("b"),
            ParagraphArg::from("c"),
        ])
        .unwrap();

        let texts: Vec<_> = para.runs().iter().map(Run::text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(para.properties(), Some(&props));
    }

    #[test]
    fn test_last_properties_block_wins() {
        let first = ppr([pstyle(["Title"]).unwrap()]).unwrap();
        let second = ppr([pstyle(["Heading1"]).unwrap()]).unwrap();
        let para = p([first, second.clone()]).unwrap();
        assert_eq!(para.properties(), Some(&second));
    }

    #[test]
    fn test_fragment_flattens_in_place() {
        let mut group = FragmentGroup::new();
        group.add(run_from_text("b")).add(run_from_text("c"));

        let para = p([
            ParagraphArg::from("a"),
            ParagraphArg::from(group),
            ParagraphArg::from("d"),
        ])
        .unwrap();
        assert_eq!(para.text(), "abcd");
        assert_eq!(para.runs().len(), 4);
    }

    #[test]
    fn test_fragment_with_properties_sets_slot() {
        let props = ppr([jc([Justification::Center]).unwrap()]).unwrap();
        let mut group = FragmentGroup::new();
        group.add(props.clone()).add(run_from_text("x"));

        let para = p([group]).unwrap();
        assert_eq!(para.properties(), Some(&props));
        assert_eq!(para.runs().len(), 1);
    }

    #[test]
    fn test_fragment_member_of_wrong_kind_is_rejected() {
        let mut group = FragmentGroup::new();
        group.add(run_from_text("ok")).add(Paragraph::new());

        let err = p([group]).unwrap_err();
        assert_eq!(
            err,
            OoxmlError::UnsupportedArgument {
                element: "w:p",
                kind: "Paragraph"
            }
        );
    }

    #[test]
    fn test_dynamic_node_dispatch() {
        let para = p([Node::from(run_from_text("dyn"))]).unwrap();
        assert_eq!(para.text(), "dyn");

        let err = p([Node::from(Spacing::default())]).unwrap_err();
        assert_eq!(err.to_string(), "Cannot add Spacing to w:p");
    }

    #[test]
    fn test_paragraph_attributes_reach_properties() {
        let para = p([before(10), after(20), left(360), fill("EEEEEE"), val("Quote")]).unwrap();
        let props = para.properties().unwrap();
        assert_eq!(props.spacing().unwrap().before(), Some(10));
        assert_eq!(props.spacing().unwrap().after(), Some(20));
        assert_eq!(props.indentation().unwrap().left(), Some(360));
        assert_eq!(props.shading().unwrap().fill(), Some("EEEEEE"));
        assert_eq!(props.style().unwrap().val(), Some("Quote"));
    }

    #[test]
    fn test_paragraph_rejects_unknown_attribute() {
        let err = p([top("AABBCC:4")]).unwrap_err();
        assert_eq!(
            err,
            OoxmlError::UnknownAttribute {
                element: "w:p",
                name: "top".to_string()
            }
        );
    }

    #[test]
    fn test_ppr_slots_and_dynamic_nodes() {
        let props = ppr([
            ParagraphPropertiesArg::from(spacing([before(1)]).unwrap()),
            ParagraphPropertiesArg::from(Node::from(shd([fill("FF0000")]).unwrap())),
            ParagraphPropertiesArg::from(spacing([before(2)]).unwrap()),
        ])
        .unwrap();
        assert_eq!(props.spacing().unwrap().before(), Some(2));
        assert_eq!(props.shading().unwrap().fill(), Some("FF0000"));

        let err = ppr([Node::from(run_from_text("x"))]).unwrap_err();
        assert_eq!(err.to_string(), "Cannot add Run to w:pPr");
    }

    #[test]
    fn test_spacing_decodes_numbers() {
        let spacing = spacing([after(150), before(0)]).unwrap();
        assert_eq!(spacing.after(), Some(150));
        assert_eq!(spacing.before(), Some(0));
    }

    #[test]
    fn test_spacing_rejects_unknown_attribute() {
        let err = spacing([Attr::new("bogus", "1")]).unwrap_err();
        assert_eq!(
            err,
            OoxmlError::UnknownAttribute {
                element: "w:spacing",
                name: "bogus".to_string()
            }
        );
    }

    #[test]
    fn test_spacing_rejects_non_numeric_value() {
        let err = spacing([Attr::new("after", "lots")]).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidAttributeValue { element: "w:spacing", .. }));
    }

    #[test]
    fn test_indentation() {
        let indentation = ind([left(720), right(-120)]).unwrap();
        assert_eq!(indentation.left(), Some(720));
        assert_eq!(indentation.right(), Some(-120));
        assert!(ind([fill("x")]).is_err());
    }

    #[test]
    fn test_shading() {
        assert_eq!(shd([fill("F3F4F6")]).unwrap().fill(), Some("F3F4F6"));
        assert!(matches!(
            shd([val("F3F4F6")]),
            Err(OoxmlError::UnknownAttribute { element: "w:shd", .. })
        ));
    }

    #[test]
    fn test_border_compound_parse() {
        let borders = pbdr([top("AABBCC:12"), left("3B82F6:24")]).unwrap();
        let top = borders.top().unwrap();
        assert_eq!(top.color(), Some("AABBCC"));
        assert_eq!(top.size(), Some(12));
        assert_eq!(top.space(), Some(1));
        assert_eq!(top.style(), Some(BorderStyle::Single));
        assert_eq!(borders.left().unwrap().size(), Some(24));
        assert!(borders.bottom().is_none());
    }

    #[test]
    fn test_border_malformed_is_lenient() {
        let borders = pbdr([top("malformed"), bottom("a:b:c"), right("AABBCC:")]).unwrap();
        assert!(borders.top().unwrap().is_unset());
        assert!(borders.bottom().unwrap().is_unset());
        assert!(borders.right().unwrap().is_unset());
    }

    #[test]
    fn test_border_strict_rejects_malformed() {
        let err = pbdr_strict([top("malformed")]).unwrap_err();
        assert_eq!(
            err,
            OoxmlError::MalformedAttribute {
                element: "w:pBdr",
                name: "top".to_string(),
                value: "malformed".to_string()
            }
        );
        assert!(pbdr_strict([top("AABBCC:12")]).is_ok());
    }

    #[test]
    fn test_border_width_must_be_numeric() {
        assert!(matches!(
            pbdr([top("AABBCC:wide")]),
            Err(OoxmlError::InvalidAttributeValue { element: "w:pBdr", .. })
        ));
    }

    #[test]
    fn test_border_unknown_side() {
        assert!(matches!(
            pbdr([Attr::new("middle", "AABBCC:12")]),
            Err(OoxmlError::UnknownAttribute { element: "w:pBdr", .. })
        ));
    }

    #[test]
    fn test_border_side_checked_before_value() {
        assert_eq!(
            pbdr_strict([Attr::new("middle", "bad")]).unwrap_err(),
            OoxmlError::UnknownAttribute {
                element: "w:pBdr",
                name: "middle".to_string()
            }
        );
        assert!(matches!(
            pbdr([Attr::new("middle", "AABBCC:wide")]),
            Err(OoxmlError::UnknownAttribute { element: "w:pBdr", .. })
        ));
    }

    #[test]
    fn test_border_width_accepts_plus_sign() {
        let borders = pbdr([top("AABBCC:+12")]).unwrap();
        assert_eq!(borders.top().unwrap().size(), Some(12));
    }

    #[test]
    fn test_pstyle_accepts_val_and_text() {
        assert_eq!(pstyle([val("Heading1")]).unwrap(), pstyle(["Heading1"]).unwrap());
        assert!(pstyle([fill("x")]).is_err());
    }

    #[test]
    fn test_jc_variants_agree() {
        let by_attr = jc([val("center")]).unwrap();
        let by_text = jc(["center"]).unwrap();
        let by_enum = jc([Justification::Center]).unwrap();
        assert_eq!(by_attr, by_text);
        assert_eq!(by_text, by_enum);
        assert_eq!(by_enum.val(), Some(Justification::Center));
    }

    #[test]
    fn test_jc_rejects_unknown_token() {
        assert!(matches!(
            jc(["middle"]),
            Err(OoxmlError::InvalidAttributeValue { element: "w:jc", .. })
        ));
    }
}
