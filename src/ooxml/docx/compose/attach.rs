//! Appending built nodes to an existing container.
use crate::ooxml::docx::writer::{
    Alignment, Bold, Break, Color, ContentSink, Drawing, FontSize, Highlight, Indentation, Italic,
    Node, Paragraph, ParagraphBorders, ParagraphProperties, ParagraphStyle, Run, RunFonts,
    RunProperties, Shading, Spacing, Text, Underline,
};

use super::frags::{Fragment, FragmentGroup};

/// One item handed to [`attach`]: a single node, or a fragment whose members
/// are appended individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    Node(Node),
    Fragment(Fragment),
}

impl From<Node> for Attachment {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Fragment> for Attachment {
    fn from(fragment: Fragment) -> Self {
        Self::Fragment(fragment)
    }
}

impl From<FragmentGroup> for Attachment {
    fn from(group: FragmentGroup) -> Self {
        Self::Fragment(group.freeze())
    }
}

impl From<&FragmentGroup> for Attachment {
    fn from(group: &FragmentGroup) -> Self {
        Self::Fragment(group.into())
    }
}

macro_rules! impl_from_for_attachment {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Attachment {
                fn from(value: $ty) -> Self {
                    Self::Node(Node::from(value))
                }
            }
        )*
    };
}

impl_from_for_attachment!(
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

/// Append `items` to `target`, in order, flattening fragments.
///
/// Existing content is left untouched. Returns the number of nodes appended.
pub fn attach<S, I>(target: &mut S, items: I) -> usize
where
    S: ContentSink + ?Sized,
    I: IntoIterator,
    I::Item: Into<Attachment>,
{
    let content = target.content_mut();
    let start = content.len();
    for item in items {
        match item.into() {
            Attachment::Node(node) => content.push(node),
            Attachment::Fragment(fragment) => content.extend(fragment),
        }
    }

    let appended = content.len() - start;
    log::trace!("attached {} nodes after {} existing", appended, start);
    appended
}
