//! Tree iterators.

use std::iter::FusedIterator;

use super::forest::Forest;
use super::node::NodeId;

/// Iterator over the direct children of a node, first to last.
///
/// Cloning forks the current position. Call
/// [`Forest::children`](super::Forest::children) again to start over.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    forest: &'a Forest,
    next: Option<NodeId>,
}

impl<'a> Children<'a> {
    pub(super) fn new(forest: &'a Forest, first: Option<NodeId>) -> Self {
        Self {
            forest,
            next: first,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.forest[current].next_sibling();
        Some(current)
    }
}

impl FusedIterator for Children<'_> {}

/// Pre-order depth-first iterator yielding `(node, depth)`.
///
/// Uses an explicit stack. Children are pushed last to first so that the
/// first child is popped next.
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    forest: &'a Forest,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Preorder<'a> {
    pub(super) fn new(forest: &'a Forest, start: NodeId) -> Self {
        let stack = if forest.contains(start) {
            vec![(start, 0)]
        } else {
            Vec::new()
        };
        Self { forest, stack }
    }
}

impl Iterator for Preorder<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (current, depth) = self.stack.pop()?;
        let mut child = self.forest[current].last_child();
        while let Some(c) = child {
            self.stack.push((c, depth + 1));
            child = self.forest[c].prev_sibling();
        }
        Some((current, depth))
    }
}

impl FusedIterator for Preorder<'_> {}
