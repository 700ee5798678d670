//! Node storage and handles.

use std::fmt;

/// Label shown for nodes whose label is empty.
pub const FALLBACK_LABEL: &str = "Node";

/// Handle to a node inside a [`Forest`](super::Forest).
///
/// Handles are plain indices. They stay valid for the lifetime of the forest
/// that created them, since nodes are never freed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

// Keep `{:#?}` output on a single line.
impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A labelled node and its links to the neighboring nodes.
#[derive(Debug, Clone)]
pub struct Node {
    pub(super) label: String,
    pub(super) parent: Option<NodeId>,
    pub(super) prev: Option<NodeId>,
    pub(super) next: Option<NodeId>,
    pub(super) first: Option<NodeId>,
    pub(super) last: Option<NodeId>,
    pub(super) count: usize,
    pub(super) root: NodeId,
}

impl Node {
    /// Creates a node that has no parent and is the root of its own tree.
    pub(super) fn detached(label: String, id: NodeId) -> Self {
        Self {
            label,
            parent: None,
            prev: None,
            next: None,
            first: None,
            last: None,
            count: 0,
            root: id,
        }
    }

    /// The label as stored, possibly empty.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The label to show on screen; empty labels fall back to `"Node"`.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            FALLBACK_LABEL
        } else {
            &self.label
        }
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn prev_sibling(&self) -> Option<NodeId> {
        self.prev
    }

    #[must_use]
    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next
    }

    #[must_use]
    pub fn first_child(&self) -> Option<NodeId> {
        self.first
    }

    #[must_use]
    pub fn last_child(&self) -> Option<NodeId> {
        self.last
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        self.count > 0
    }

    /// Topmost ancestor of the tree this node currently belongs to.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns true if the node has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_node_is_its_own_root() {
        let id = NodeId::new(7);
        let node = Node::detached("x".into(), id);
        assert_eq!(node.root(), id);
        assert!(node.is_root());
        assert_eq!(node.child_count(), 0);
        assert!(node.first_child().is_none() && node.last_child().is_none());
    }

    #[test]
    fn empty_label_falls_back() {
        let node = Node::detached(String::new(), NodeId::new(0));
        assert_eq!(node.label(), "");
        assert_eq!(node.display_label(), "Node");
    }

    #[test]
    fn debug_is_compact() {
        assert_eq!(format!("{:#?}", NodeId::new(3)), "NodeId(3)");
    }
}
