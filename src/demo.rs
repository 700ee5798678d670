//! Starting trees for the interactive editor and the `show` command.

use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::tree::{Forest, NodeId};

/// Builds the sample tree:
///
/// ```text
/// Root
/// ├── A
/// │   ├── C
/// │   └── D
/// └── B
/// ```
pub fn demo_tree(root_label: &str) -> Result<(Forest, NodeId), TreeError> {
    let mut forest = Forest::new();
    let root = forest.create(root_label);
    let a = forest.create("A");
    let b = forest.create("B");
    let c = forest.create("C");
    let d = forest.create("D");

    forest.add(root, a)?;
    forest.add(root, b)?;
    forest.add(a, c)?;
    forest.add(a, d)?;

    Ok((forest, root))
}

/// A forest holding only a root node.
pub fn bare_tree(root_label: &str) -> (Forest, NodeId) {
    let mut forest = Forest::new();
    let root = forest.create(root_label);
    (forest, root)
}

/// The starting tree selected by configuration.
pub fn initial_tree(config: &TreeConfig) -> Result<(Forest, NodeId), TreeError> {
    if config.seed_demo {
        demo_tree(&config.root_label)
    } else {
        Ok(bare_tree(&config.root_label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::render::order_line;

    #[test]
    fn demo_tree_shape() {
        let (forest, root) = demo_tree("Root").unwrap();
        assert_eq!(order_line(&forest, root), "Root → A → C → D → B");
        forest.validate(root).unwrap();
    }

    #[test]
    fn bare_tree_has_only_root() {
        let config = TreeConfig {
            root_label: "Top".into(),
            seed_demo: false,
        };
        let (forest, root) = initial_tree(&config).unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[root].label(), "Top");
    }
}
