//! Application state for the TUI.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::config::TuiConfig;
use crate::error::TreeError;
use crate::i18n::Messages;
use crate::tree::naming::next_auto_name;
use crate::tree::{Forest, NodeId};

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Keyboard move: a node is picked up and waits for a drop target.
    Move,
    /// Help overlay mode.
    Help,
}

/// Whether the node being dragged may be dropped on a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropState {
    Allowed,
    /// The target is inside the dragged subtree.
    Blocked,
}

/// A node being dragged and the target currently under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub node: NodeId,
    pub target: Option<(NodeId, DropState)>,
}

/// A transient message shown in the controls line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub expires_at: Instant,
}

/// A visible row in the flattened tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleEntry {
    pub node: NodeId,
    /// Depth in the tree (0 = root).
    pub depth: usize,
    pub has_children: bool,
    pub is_collapsed: bool,
}

/// Main application state for the TUI.
pub struct App {
    /// All nodes, including detached subtrees.
    pub forest: Forest,

    /// Root of the tree being edited.
    pub root: NodeId,

    /// Currently selected node.
    pub selected: NodeId,

    /// Nodes whose children are hidden.
    pub collapsed: HashSet<NodeId>,

    /// Flattened visible rows (for rendering and hit testing).
    pub visible_entries: Vec<VisibleEntry>,

    /// Current UI mode.
    pub mode: Mode,

    /// Drag in progress, from the mouse or from move mode.
    pub drag: Option<DragState>,

    /// Row under a pressed left button, before the pointer starts dragging.
    pub pressed: Option<NodeId>,

    /// Traversal item under the pointer.
    pub hovered_order: Option<NodeId>,

    /// Status message to display.
    pub status: Option<Status>,

    /// Application should quit.
    pub should_quit: bool,

    pub messages: Messages,
    pub status_timeout: Duration,
    pub indent_width: usize,
    pub show_order_panel: bool,
}

impl App {
    /// Create a new App with default settings.
    pub fn new(forest: Forest, root: NodeId) -> Self {
        Self::with_config(forest, root, &TuiConfig::default())
    }

    /// Create a new App using the given TUI settings.
    pub fn with_config(forest: Forest, root: NodeId, config: &TuiConfig) -> Self {
        let mut app = Self {
            forest,
            root,
            selected: root,
            collapsed: HashSet::new(),
            visible_entries: Vec::new(),
            mode: Mode::Normal,
            drag: None,
            pressed: None,
            hovered_order: None,
            status: None,
            should_quit: false,
            messages: Messages::new(config.locale),
            status_timeout: Duration::from_millis(config.status_timeout_ms),
            indent_width: config.indent_width,
            show_order_panel: config.show_order_panel,
        };
        app.rebuild_visible_entries();
        app
    }

    /// Recompute the visible rows, skipping children of collapsed nodes.
    pub fn rebuild_visible_entries(&mut self) {
        self.visible_entries.clear();
        let mut stack = vec![(self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            let n = &self.forest[node];
            let is_collapsed = self.collapsed.contains(&node);
            self.visible_entries.push(VisibleEntry {
                node,
                depth,
                has_children: n.has_children(),
                is_collapsed,
            });
            if is_collapsed {
                continue;
            }
            let mut child = n.last_child();
            while let Some(c) = child {
                stack.push((c, depth + 1));
                child = self.forest[c].prev_sibling();
            }
        }
    }

    /// Index of the selected node among the visible rows.
    pub fn selected_index(&self) -> Option<usize> {
        self.visible_entries
            .iter()
            .position(|e| e.node == self.selected)
    }

    /// Get the visible row of the selected node, if it is visible.
    pub fn selected_entry(&self) -> Option<&VisibleEntry> {
        self.selected_index().map(|i| &self.visible_entries[i])
    }

    /// Pre-order sequence of the whole tree, with depths.
    pub fn order_entries(&self) -> Vec<(NodeId, usize)> {
        self.forest.preorder(self.root).collect()
    }

    pub fn select(&mut self, node: NodeId) {
        if self.forest.contains(node) {
            self.selected = node;
            self.after_selection_moved();
        }
    }

    /// Move the selection by `delta` visible rows, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.visible_entries.is_empty() {
            return;
        }
        let last = self.visible_entries.len() - 1;
        let index = match self.selected_index() {
            Some(i) => i.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.selected = self.visible_entries[index].node;
        self.after_selection_moved();
    }

    pub fn select_first(&mut self) {
        if let Some(entry) = self.visible_entries.first() {
            self.selected = entry.node;
            self.after_selection_moved();
        }
    }

    pub fn select_last(&mut self) {
        if let Some(entry) = self.visible_entries.last() {
            self.selected = entry.node;
            self.after_selection_moved();
        }
    }

    fn after_selection_moved(&mut self) {
        if self.mode == Mode::Move {
            self.hover_drop(Some(self.selected));
        }
    }

    pub fn expand(&mut self, node: NodeId) {
        if self.collapsed.remove(&node) {
            self.rebuild_visible_entries();
        }
    }

    pub fn collapse(&mut self, node: NodeId) {
        if self.forest[node].has_children() && self.collapsed.insert(node) {
            self.rebuild_visible_entries();
        }
    }

    /// Flip the collapsed flag of a node with children.
    ///
    /// Returns false for leaves, which have nothing to collapse.
    pub fn toggle_collapse(&mut self, node: NodeId) -> bool {
        if !self.forest.get(node).is_some_and(|n| n.has_children()) {
            return false;
        }
        if !self.collapsed.remove(&node) {
            self.collapsed.insert(node);
        }
        self.rebuild_visible_entries();
        true
    }

    pub fn toggle_selected(&mut self) {
        self.toggle_collapse(self.selected);
    }

    pub fn expand_selected(&mut self) {
        self.expand(self.selected);
    }

    /// Select the parent of the selection. Does nothing on the root.
    pub fn select_parent(&mut self) {
        if let Some(parent) = self.forest[self.selected].parent() {
            self.select(parent);
        }
    }

    /// Collapse the selection, or select its parent if there is nothing to
    /// collapse.
    pub fn collapse_selected(&mut self) {
        if self.forest[self.selected].has_children() && !self.collapsed.contains(&self.selected) {
            self.collapse(self.selected);
        } else {
            self.select_parent();
        }
    }

    /// Add an automatically named child under the selection and select it.
    pub fn add_child(&mut self) {
        let parent = self.selected;
        let Some(label) = next_auto_name(&self.forest, parent) else {
            self.report_error(TreeError::UnknownNode(parent));
            return;
        };
        let node = self.forest.create(label.clone());
        if let Err(err) = self.forest.add(parent, node) {
            self.report_error(err);
            return;
        }

        self.collapsed.remove(&parent);
        self.selected = node;
        tracing::debug!(?parent, ?node, %label, "Added node");
        let text = self.messages.added(&label, self.forest[parent].label());
        self.set_status(text);
        self.rebuild_visible_entries();
    }

    /// Detach the selected subtree from its parent and select the parent.
    pub fn remove_selected(&mut self) {
        if self.selected == self.root {
            self.set_status(self.messages.root_not_removable());
            return;
        }
        let node = self.selected;
        let Some(parent) = self.forest[node].parent() else {
            return;
        };
        let label = self.forest[node].label().to_string();

        match self.forest.remove(parent, node) {
            Ok(_) => {
                let subtree: Vec<NodeId> = self.forest.preorder(node).map(|(id, _)| id).collect();
                for id in &subtree {
                    self.collapsed.remove(id);
                }
                if self.drag.is_some_and(|d| subtree.contains(&d.node)) {
                    self.cancel_drag();
                    if self.mode == Mode::Move {
                        self.mode = Mode::Normal;
                    }
                }
                self.selected = parent;
                tracing::debug!(?parent, ?node, "Removed node");
                self.set_status(self.messages.removed(&label));
                self.rebuild_visible_entries();
            }
            Err(err) => self.report_error(err),
        }
    }

    /// Pick up a node for dragging. The root cannot be picked up.
    pub fn begin_drag(&mut self, node: NodeId) -> bool {
        if node == self.root || !self.forest.contains(node) {
            return false;
        }
        self.drag = Some(DragState { node, target: None });
        true
    }

    /// Drop state for `target` while something is dragged.
    ///
    /// Returns `None` when nothing is dragged or the target is the dragged
    /// node itself.
    pub fn drop_state(&self, target: NodeId) -> Option<DropState> {
        let drag = self.drag?;
        if target == drag.node {
            None
        } else if self.forest.is_descendant_of(target, drag.node) {
            Some(DropState::Blocked)
        } else {
            Some(DropState::Allowed)
        }
    }

    /// Record the node under the dragged one.
    pub fn hover_drop(&mut self, target: Option<NodeId>) {
        let state = target.and_then(|t| self.drop_state(t).map(|s| (t, s)));
        if let Some(drag) = self.drag.as_mut() {
            drag.target = state;
        }
    }

    /// Reparent the dragged node as the last child of `target`.
    pub fn drop_on(&mut self, target: NodeId) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.pressed = None;

        if target == drag.node || self.forest.is_descendant_of(target, drag.node) {
            self.set_status(self.messages.move_into_self());
            return;
        }

        match self.forest.add(target, drag.node) {
            Ok(()) => {
                self.collapsed.remove(&target);
                self.selected = drag.node;
                tracing::debug!(node = ?drag.node, ?target, "Moved node");
                let text = self.messages.moved(
                    self.forest[drag.node].label(),
                    self.forest[target].label(),
                );
                self.set_status(text);
                self.rebuild_visible_entries();
            }
            Err(err) => self.report_error(err),
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
        self.pressed = None;
    }

    /// Pick up the selection for a keyboard move.
    pub fn start_move(&mut self) {
        if !self.begin_drag(self.selected) {
            self.set_status(self.messages.root_not_movable());
            return;
        }
        self.mode = Mode::Move;
        let text = self.messages.moving(self.forest[self.selected].label());
        self.set_status(text);
    }

    /// Drop the moving node on the selection.
    pub fn finish_move(&mut self) {
        self.drop_on(self.selected);
        self.mode = Mode::Normal;
    }

    pub fn cancel_move(&mut self) {
        self.cancel_drag();
        self.mode = Mode::Normal;
        self.set_status(self.messages.move_cancelled());
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.set_status_at(text, Instant::now());
    }

    pub fn set_status_at(&mut self, text: impl Into<String>, now: Instant) {
        self.status = Some(Status {
            text: text.into(),
            expires_at: now + self.status_timeout,
        });
    }

    /// Drop the status message once it has expired.
    pub fn tick(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| now >= s.expires_at) {
            self.status = None;
        }
    }

    /// Text for the controls line: the status message, or the active node.
    pub fn controls_text(&self) -> String {
        match &self.status {
            Some(status) => status.text.clone(),
            None => {
                let label = self.forest[self.selected].label();
                let label = if label.is_empty() {
                    self.messages.unnamed()
                } else {
                    label
                };
                self.messages.active_node(label)
            }
        }
    }

    /// Whether the remove action applies to the selection.
    pub fn can_remove(&self) -> bool {
        self.selected != self.root
    }

    fn report_error(&mut self, err: TreeError) {
        tracing::warn!(%err, "Tree operation failed");
        self.set_status(err.to_string());
    }
}
