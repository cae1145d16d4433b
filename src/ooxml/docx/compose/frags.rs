//! Fragment groups: several sibling nodes passed around as one value.
//!
//! A [`FragmentGroup`] is the mutable accumulator; [`Fragment`] is the frozen,
//! read-only sequence that builders and [`attach`](super::attach) consume.
//! Neither ever becomes a tree node: consumers always unwrap the members, in
//! insertion order, at the point of consumption.
//!
//! A group has a single owner. Sharing one between threads for concurrent
//! mutation requires external locking.

use crate::ooxml::docx::writer::Node;

/// An ordered, appendable collection of already-built nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentGroup {
    items: Vec<Node>,
}

impl FragmentGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one node.
    pub fn add(&mut self, item: impl Into<Node>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    /// Append several nodes, in order.
    pub fn add_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[Node] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stop accumulating and hand the members off for consumption.
    pub fn freeze(self) -> Fragment {
        Fragment { members: self.items }
    }
}

impl<T: Into<Node>> FromIterator<T> for FragmentGroup {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut group = FragmentGroup::new();
        group.add_all(iter);
        group
    }
}

impl<T: Into<Node>> Extend<T> for FragmentGroup {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

/// A frozen sequence of sibling nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    members: Vec<Node>,
}

impl Fragment {
    pub fn members(&self) -> &[Node] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.members.iter()
    }
}

impl From<FragmentGroup> for Fragment {
    fn from(group: FragmentGroup) -> Self {
        group.freeze()
    }
}

impl From<&FragmentGroup> for Fragment {
    fn from(group: &FragmentGroup) -> Self {
        group.clone().freeze()
    }
}

impl IntoIterator for Fragment {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fragment {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
