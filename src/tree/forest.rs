//! Forest of labelled nodes.

use std::ops::Index;

use super::node::{Node, NodeId};
use super::traverse::{Children, Preorder};
use crate::error::TreeError;

/// Arena owning every node ever created.
///
/// Nodes are never freed. A node detached with [`Forest::remove`] stays in
/// the arena as the root of its own tree and can be attached again later.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: Vec<Node>,
}

impl Forest {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the arena, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if the handle was created by this forest.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Returns the node, or `None` for a handle from another forest.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn checked(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id.index()).ok_or(TreeError::UnknownNode(id))
    }

    /// Creates a detached node that is the root of its own tree.
    pub fn create(&mut self, label: impl Into<String>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::detached(label.into(), id));
        tracing::trace!(?id, "created node");
        id
    }

    /// Replaces the label of a node.
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), TreeError> {
        self.checked(id)?;
        self.nodes[id.index()].label = label.into();
        Ok(())
    }

    /// Appends `node` as the last child of `parent`.
    ///
    /// `node` is first detached from its current parent, if any. Afterwards
    /// every node of its subtree refers to the root of `parent`'s tree.
    ///
    /// # Errors
    ///
    /// * [`TreeError::UnknownNode`] if either handle is not from this forest.
    /// * [`TreeError::SelfAttachment`] if `node == parent`.
    /// * [`TreeError::AncestorAttachment`] if `node` is an ancestor of
    ///   `parent`, which would create a cycle.
    pub fn add(&mut self, parent: NodeId, node: NodeId) -> Result<(), TreeError> {
        self.checked(parent)?;
        let old_parent = self.checked(node)?.parent;
        if node == parent {
            return Err(TreeError::SelfAttachment(node));
        }
        if self.is_descendant_of(parent, node) {
            return Err(TreeError::AncestorAttachment { parent, node });
        }

        if let Some(old_parent) = old_parent {
            self.unlink(old_parent, node);
        }

        let old_last = self.nodes[parent.index()].last;
        {
            let n = &mut self.nodes[node.index()];
            n.parent = Some(parent);
            n.prev = old_last;
            n.next = None;
        }
        match old_last {
            Some(last) => self.nodes[last.index()].next = Some(node),
            None => self.nodes[parent.index()].first = Some(node),
        }

        let p = &mut self.nodes[parent.index()];
        p.last = Some(node);
        p.count += 1;
        let new_root = p.root;

        self.set_root_for_subtree(node, new_root);
        tracing::trace!(?parent, ?node, ?old_parent, "attached node");
        Ok(())
    }

    /// Detaches `node` from `parent`.
    ///
    /// Returns `Ok(false)` without touching anything when `node` is not a
    /// direct child of `parent`. The detached node becomes the root of its
    /// subtree; the subtree itself is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] if either handle is not from this
    /// forest.
    pub fn remove(&mut self, parent: NodeId, node: NodeId) -> Result<bool, TreeError> {
        self.checked(parent)?;
        if self.checked(node)?.parent != Some(parent) {
            return Ok(false);
        }

        self.unlink(parent, node);
        self.set_root_for_subtree(node, node);
        tracing::trace!(?parent, ?node, "detached node");
        Ok(true)
    }

    /// Detaches `node` from whatever parent it has.
    ///
    /// Returns `Ok(false)` if the node already had no parent.
    pub fn detach(&mut self, node: NodeId) -> Result<bool, TreeError> {
        match self.checked(node)?.parent {
            Some(parent) => self.remove(parent, node),
            None => Ok(false),
        }
    }

    /// Removes `node` from the sibling chain of `parent` and clears its links.
    ///
    /// The caller guarantees that `node` is a child of `parent`.
    fn unlink(&mut self, parent: NodeId, node: NodeId) {
        let (prev, next) = {
            let n = &self.nodes[node.index()];
            (n.prev, n.next)
        };

        match prev {
            Some(prev) => self.nodes[prev.index()].next = next,
            None => self.nodes[parent.index()].first = next,
        }
        match next {
            Some(next) => self.nodes[next.index()].prev = prev,
            None => self.nodes[parent.index()].last = prev,
        }

        let n = &mut self.nodes[node.index()];
        n.parent = None;
        n.prev = None;
        n.next = None;

        let p = &mut self.nodes[parent.index()];
        p.count = p.count.saturating_sub(1);
    }

    /// Points every node of the subtree at `root`.
    fn set_root_for_subtree(&mut self, node: NodeId, root: NodeId) {
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            self.nodes[current.index()].root = root;
            let mut child = self.nodes[current.index()].first;
            while let Some(c) = child {
                stack.push(c);
                child = self.nodes[c.index()].next;
            }
        }
    }

    /// Returns true if `candidate` is a strict ancestor of `node`.
    ///
    /// Handles from another forest are never ancestors of anything.
    #[must_use]
    pub fn is_descendant_of(&self, node: NodeId, candidate: NodeId) -> bool {
        let mut cursor = self.get(node).and_then(Node::parent);
        while let Some(current) = cursor {
            if current == candidate {
                return true;
            }
            cursor = self.get(current).and_then(Node::parent);
        }
        false
    }

    /// Iterates over the direct children of `node`, first to last.
    ///
    /// The iterator is empty for a leaf or a handle from another forest.
    #[must_use]
    pub fn children(&self, node: NodeId) -> Children<'_> {
        Children::new(self, self.get(node).and_then(Node::first_child))
    }

    /// Iterates over the subtree of `start` in pre-order, yielding
    /// `(node, depth)` with `start` at depth 0.
    #[must_use]
    pub fn preorder(&self, start: NodeId) -> Preorder<'_> {
        Preorder::new(self, start)
    }

    /// Calls `f(node, depth)` for every node of the subtree of `start`,
    /// in pre-order.
    pub fn each<F>(&self, start: NodeId, mut f: F)
    where
        F: FnMut(NodeId, usize),
    {
        for (node, depth) in self.preorder(start) {
            f(node, depth);
        }
    }

    /// Checks the structure of the whole tree containing `node`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Inconsistent`] describing the first broken
    /// invariant, or [`TreeError::UnknownNode`] for a foreign handle.
    pub fn validate(&self, node: NodeId) -> Result<(), TreeError> {
        self.checked(node)?;

        // Find the top of the tree, bounding the walk in case of a cycle.
        let mut top = node;
        let mut steps = 0;
        while let Some(parent) = self.checked(top)?.parent {
            steps += 1;
            if steps > self.nodes.len() {
                return Err(inconsistent(format!("parent chain of {node:?} loops")));
            }
            top = parent;
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![top];
        while let Some(current) = stack.pop() {
            if std::mem::replace(&mut visited[current.index()], true) {
                return Err(inconsistent(format!("{current:?} is reachable twice")));
            }
            let n = self.checked(current)?;
            if n.root != top {
                return Err(inconsistent(format!(
                    "{current:?} has root {:?}, expected {top:?}",
                    n.root
                )));
            }

            let mut walked = 0;
            let mut prev = None;
            let mut child = n.first;
            while let Some(c) = child {
                walked += 1;
                if walked > n.count {
                    return Err(inconsistent(format!(
                        "{current:?} has more children than its count of {}",
                        n.count
                    )));
                }
                let cn = self.checked(c)?;
                if cn.parent != Some(current) {
                    return Err(inconsistent(format!(
                        "{c:?} is listed under {current:?} but its parent is {:?}",
                        cn.parent
                    )));
                }
                if cn.prev != prev {
                    return Err(inconsistent(format!(
                        "{c:?} has prev {:?}, expected {prev:?}",
                        cn.prev
                    )));
                }
                stack.push(c);
                prev = Some(c);
                child = cn.next;
            }
            if walked != n.count {
                return Err(inconsistent(format!(
                    "{current:?} has {walked} children but a count of {}",
                    n.count
                )));
            }
            if n.last != prev {
                return Err(inconsistent(format!(
                    "{current:?} has last child {:?}, expected {prev:?}",
                    n.last
                )));
            }
        }

        Ok(())
    }
}

fn inconsistent(message: String) -> TreeError {
    TreeError::Inconsistent(message)
}

/// Panics if the handle is not from this forest, like slice indexing.
impl Index<NodeId> for Forest {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}
