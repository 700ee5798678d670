//! Plain-text renderings of a tree.

use super::{Forest, NodeId};

/// Separator between items of a traversal line.
pub const ORDER_SEPARATOR: &str = " → ";

/// Renders the subtree of `root` one node per line, in pre-order, indenting
/// each line by `depth * indent` spaces.
#[must_use]
pub fn render_static(forest: &Forest, root: NodeId, indent: usize) -> String {
    forest
        .preorder(root)
        .map(|(node, depth)| {
            format!(
                "{:width$}{}",
                "",
                forest[node].display_label(),
                width = depth * indent
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the subtree of `root` with box-drawing guides.
///
/// ```text
/// Root
/// ├── A
/// │   └── C
/// └── B
/// ```
#[must_use]
pub fn outline(forest: &Forest, root: NodeId) -> String {
    let Some(node) = forest.get(root) else {
        return String::new();
    };
    let mut lines = vec![node.display_label().to_string()];
    outline_children(forest, root, "", &mut lines);
    lines.join("\n")
}

fn outline_children(forest: &Forest, parent: NodeId, prefix: &str, lines: &mut Vec<String>) {
    for child in forest.children(parent) {
        let last = forest[child].next_sibling().is_none();
        let (branch, guide) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        lines.push(format!("{prefix}{branch}{}", forest[child].display_label()));
        outline_children(forest, child, &format!("{prefix}{guide}"), lines);
    }
}

/// Labels of the subtree of `root` in pre-order, joined by
/// [`ORDER_SEPARATOR`].
#[must_use]
pub fn order_line(forest: &Forest, root: NodeId) -> String {
    forest
        .preorder(root)
        .map(|(node, _)| forest[node].display_label())
        .collect::<Vec<_>>()
        .join(ORDER_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node() {
        let mut forest = Forest::new();
        let root = forest.create("");
        assert_eq!(render_static(&forest, root, 2), "Node");
        assert_eq!(outline(&forest, root), "Node");
        assert_eq!(order_line(&forest, root), "Node");
    }

    #[test]
    fn indentation_follows_depth() {
        let mut forest = Forest::new();
        let root = forest.create("r");
        let a = forest.create("a");
        let b = forest.create("b");
        forest.add(root, a).unwrap();
        forest.add(a, b).unwrap();
        assert_eq!(render_static(&forest, root, 3), "r\n   a\n      b");
    }

    #[test]
    fn foreign_root_renders_nothing() {
        let forest = Forest::new();
        assert_eq!(outline(&forest, NodeId::new(1)), "");
        assert_eq!(render_static(&forest, NodeId::new(1), 2), "");
    }
}
