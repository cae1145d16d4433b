//! Variadic front-ends for the builders.
//!
//! Each macro converts its arguments into the builder's argument enum and
//! calls the builder, so mixed kinds can be written inline:
//! `w_p!("text", ppr_block, fragment)`.

#[doc(hidden)]
#[macro_export]
macro_rules! __compose_call {
    ($func:path, $arg_ty:ty $(, $arg:expr)*) => {{
        let args: ::std::vec::Vec<$arg_ty> = ::std::vec![$(<$arg_ty>::from($arg)),*];
        $func(args)
    }};
}

/// Build a paragraph from mixed arguments. See [`p`](crate::ooxml::docx::compose::p).
#[macro_export]
macro_rules! w_p {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::p,
            $crate::ooxml::docx::compose::ParagraphArg
            $(, $arg)*
        )
    };
}

/// Build a run from mixed arguments. See [`r`](crate::ooxml::docx::compose::r).
#[macro_export]
macro_rules! w_r {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::r,
            $crate::ooxml::docx::compose::RunArg
            $(, $arg)*
        )
    };
}

/// Build paragraph properties from mixed arguments.
#[macro_export]
macro_rules! w_ppr {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::ppr,
            $crate::ooxml::docx::compose::ParagraphPropertiesArg
            $(, $arg)*
        )
    };
}

/// Build run properties from mixed arguments.
#[macro_export]
macro_rules! w_rpr {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::rpr,
            $crate::ooxml::docx::compose::RunPropertiesArg
            $(, $arg)*
        )
    };
}

#[macro_export]
macro_rules! w_spacing {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::spacing,
            $crate::ooxml::docx::compose::attr::Attr
            $(, $arg)*
        )
    };
}

#[macro_export]
macro_rules! w_shd {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::shd,
            $crate::ooxml::docx::compose::attr::Attr
            $(, $arg)*
        )
    };
}

#[macro_export]
macro_rules! w_ind {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::ind,
            $crate::ooxml::docx::compose::attr::Attr
            $(, $arg)*
        )
    };
}

/// Build lenient paragraph borders. Use `pbdr_strict` directly to reject
/// malformed specifications.
#[macro_export]
macro_rules! w_pbdr {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::pbdr,
            $crate::ooxml::docx::compose::attr::Attr
            $(, $arg)*
        )
    };
}

#[macro_export]
macro_rules! w_pstyle {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::pstyle,
            $crate::ooxml::docx::compose::ValueArg
            $(, $arg)*
        )
    };
}

#[macro_export]
macro_rules! w_jc {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::jc,
            $crate::ooxml::docx::compose::JustificationArg
            $(, $arg)*
        )
    };
}

#[macro_export]
macro_rules! w_color {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::color,
            $crate::ooxml::docx::compose::ValueArg
            $(, $arg)*
        )
    };
}

#[macro_export]
macro_rules! w_sz {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::sz,
            $crate::ooxml::docx::compose::SizeArg
            $(, $arg)*
        )
    };
}

#[macro_export]
macro_rules! w_u {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::u,
            $crate::ooxml::docx::compose::UnderlineArg
            $(, $arg)*
        )
    };
}

#[macro_export]
macro_rules! w_highlight {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::highlight,
            $crate::ooxml::docx::compose::ValueArg
            $(, $arg)*
        )
    };
}

#[macro_export]
macro_rules! w_rfonts {
    ($($arg:expr),* $(,)?) => {
        $crate::__compose_call!(
            $crate::ooxml::docx::compose::rfonts,
            $crate::ooxml::docx::compose::ValueArg
            $(, $arg)*
        )
    };
}

/// Collect nodes into a [`FragmentGroup`](crate::ooxml::docx::compose::FragmentGroup).
#[macro_export]
macro_rules! frags {
    ($($item:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut group = $crate::ooxml::docx::compose::FragmentGroup::new();
        $(group.add($item);)*
        group
    }};
}

/// Attach nodes and fragments to a container; evaluates to the number of
/// nodes appended.
///
/// ```
/// use docx_compose::ooxml::docx::compose::p;
/// use docx_compose::ooxml::docx::writer::Document;
/// use docx_compose::{add_to, frags};
///
/// let mut doc = Document::new();
/// let added = add_to!(&mut doc, p(["intro"])?, frags![p(["a"])?, p(["b"])?]);
/// assert_eq!(added, 3);
/// # Ok::<(), docx_compose::ooxml::OoxmlError>(())
/// ```
#[macro_export]
macro_rules! add_to {
    ($target:expr $(, $item:expr)* $(,)?) => {{
        let items: ::std::vec::Vec<$crate::ooxml::docx::compose::Attachment> =
            ::std::vec![$($crate::ooxml::docx::compose::Attachment::from($item)),*];
        $crate::ooxml::docx::compose::attach($target, items)
    }};
}

#[cfg(test)]
mod tests {
    use crate::ooxml::docx::compose::attr::{after, ascii, before, fill, left, top, val};
    use crate::ooxml::docx::compose::{b, br, p, ppr, r, t};
    use crate::ooxml::docx::format::{Justification, UnderlineStyle};
    use crate::ooxml::docx::writer::{Document, Node};

    #[test]
    fn test_paragraph_macro_mixes_kinds() {
        let props = w_ppr!(w_spacing!(before(10), after(20)).unwrap(), w_jc!("center").unwrap())
            .unwrap();
        let para = w_p!("a", props.clone(), r(["b"]).unwrap(), fill("EEEEEE")).unwrap();

        assert_eq!(para.text(), "ab");
        let got = para.properties().unwrap();
        assert_eq!(got.spacing(), props.spacing());
        assert_eq!(got.alignment().unwrap().val(), Some(Justification::Center));
        assert_eq!(got.shading().unwrap().fill(), Some("EEEEEE"));
    }

    #[test]
    fn test_run_macro() {
        let run = w_r!(
            w_rpr!(b(), w_sz!(24).unwrap(), w_color!("FF0000").unwrap()).unwrap(),
            "x",
            br("page"),
            t("y"),
            ascii("Courier New"),
        )
        .unwrap();

        assert_eq!(run.text(), "xy");
        let props = run.properties().unwrap();
        assert_eq!(props.size().unwrap().val(), Some(24));
        assert_eq!(props.fonts().unwrap().ascii(), Some("Courier New"));
    }

    #[test]
    fn test_value_macros() {
        assert_eq!(w_pstyle!(val("Heading1")).unwrap().val(), Some("Heading1"));
        assert_eq!(w_highlight!("yellow").unwrap().val(), Some("yellow"));
        assert_eq!(w_u!().unwrap().val(), UnderlineStyle::Single);
        assert_eq!(w_u!("double").unwrap().val(), UnderlineStyle::Double);
        assert_eq!(w_rfonts!("Arial").unwrap().h_ansi(), Some("Arial"));
        assert_eq!(w_shd!(fill("CCCCCC")).unwrap().fill(), Some("CCCCCC"));
        assert_eq!(w_ind!(left(-120)).unwrap().left(), Some(-120));
        assert_eq!(w_pbdr!(top("000000:8")).unwrap().top().unwrap().size(), Some(8));
    }

    #[test]
    fn test_frags_and_add_to() {
        let group = frags![p(["b"]).unwrap(), p(["c"]).unwrap()];
        assert_eq!(group.len(), 2);

        let mut doc = Document::new();
        let added = add_to!(&mut doc, p(["a"]).unwrap(), group, p(["d"]).unwrap());
        assert_eq!(added, 4);

        let texts: Vec<_> = doc.paragraphs().map(|p| p.text()).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);

        let mut loose: Vec<Node> = Vec::new();
        assert_eq!(add_to!(&mut loose), 0);
        assert!(frags![].is_empty());
    }

    #[test]
    fn test_fragment_inside_paragraph_macro() {
        let para = w_p!("<", frags![r(["x"]).unwrap(), r(["y"]).unwrap()], ">").unwrap();
        assert_eq!(para.runs().len(), 4);
        assert_eq!(para.text(), "<xy>");

        let ppr_only = w_p!(ppr([w_pstyle!("Quote").unwrap()]).unwrap()).unwrap();
        assert!(ppr_only.runs().is_empty());
    }
}
