//! Main document content for DOCX.
use crate::ooxml::error::Result;

use super::node::Node;
use super::paragraph::Paragraph;
use super::run::{Drawing, Run, RunContent};

/// A container that owns an ordered top-level content sequence.
///
/// Attachment only ever appends to the sequence; it never reads or reorders it.
pub trait ContentSink {
    fn content_mut(&mut self) -> &mut Vec<Node>;
}

impl ContentSink for Vec<Node> {
    fn content_mut(&mut self) -> &mut Vec<Node> {
        self
    }
}

/// The main document part (`word/document.xml`).
///
/// Holds the body content in order. Packaging into a `.docx` container is left
/// to the caller; [`Document::to_xml`] produces the part content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Body content (paragraphs and any other attached nodes)
    content: Vec<Node>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the body content in order.
    pub fn content(&self) -> &[Node] {
        &self.content
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Iterate over the top-level paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.content.iter().filter_map(|node| match node {
            Node::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Give every drawing in the body a distinct `wp:docPr` id, numbering
    /// them 1, 2, ... in document order.
    pub fn renumber_drawings(&mut self) {
        let mut next_id = 1;
        for node in &mut self.content {
            for drawing in drawings_mut(node) {
                drawing.set_id(next_id);
                next_id += 1;
            }
        }
    }

    fn has_duplicate_drawing_ids(&self) -> bool {
        let mut ids: Vec<u32> = self
            .content
            .iter()
            .flat_map(drawings)
            .map(Drawing::id)
            .collect();
        ids.sort_unstable();
        ids.windows(2).any(|pair| pair[0] == pair[1])
    }

    /// Serialize the document to XML.
    ///
    /// Drawings whose ids collide are renumbered in the output; the document
    /// itself is left unchanged.
    pub fn to_xml(&self) -> Result<String> {
        if self.has_duplicate_drawing_ids() {
            let mut renumbered = self.clone();
            renumbered.renumber_drawings();
            return renumbered.write_xml();
        }
        self.write_xml()
    }

    fn write_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">"#);
        xml.push_str("<w:body>");
        for node in &self.content {
            node.to_xml(&mut xml)?;
        }
        xml.push_str("</w:body>");
        xml.push_str("</w:document>");

        log::debug!(
            "serialized document with {} top-level nodes ({} bytes)",
            self.content.len(),
            xml.len()
        );
        Ok(xml)
    }
}

fn run_drawings(run: &Run) -> impl Iterator<Item = &Drawing> {
    run.content.iter().filter_map(|content| match content {
        RunContent::Drawing(drawing) => Some(drawing),
        _ => None,
    })
}

/// Drawings held by a top-level node, in document order.
fn drawings(node: &Node) -> Vec<&Drawing> {
    match node {
        Node::Paragraph(p) => p.runs.iter().flat_map(run_drawings).collect(),
        Node::Run(run) => run_drawings(run).collect(),
        Node::Drawing(drawing) => vec![drawing],
        _ => Vec::new(),
    }
}

fn run_drawings_mut(run: &mut Run) -> impl Iterator<Item = &mut Drawing> {
    run.content.iter_mut().filter_map(|content| match content {
        RunContent::Drawing(drawing) => Some(drawing),
        _ => None,
    })
}

fn drawings_mut(node: &mut Node) -> Vec<&mut Drawing> {
    match node {
        Node::Paragraph(p) => p.runs.iter_mut().flat_map(run_drawings_mut).collect(),
        Node::Run(run) => run_drawings_mut(run).collect(),
        Node::Drawing(drawing) => vec![drawing],
        _ => Vec::new(),
    }
}

impl ContentSink for Document {
    fn content_mut(&mut self) -> &mut Vec<Node> {
        &mut self.content
    }
}
