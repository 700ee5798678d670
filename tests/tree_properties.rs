//! Structural properties of the linked-list tree.

use proptest::prelude::*;
use treeview::{Forest, NodeId, TreeError};

fn topmost(forest: &Forest, mut node: NodeId) -> NodeId {
    while let Some(parent) = forest[node].parent() {
        node = parent;
    }
    node
}

fn children(forest: &Forest, node: NodeId) -> Vec<NodeId> {
    forest.children(node).collect()
}

#[test]
fn add_links_child_exactly_once() {
    let mut forest = Forest::new();
    let a = forest.create("A");
    let b = forest.create("B");
    let before = forest[a].child_count();

    forest.add(a, b).unwrap();

    assert_eq!(forest[b].parent(), Some(a));
    assert_eq!(children(&forest, a).iter().filter(|&&c| c == b).count(), 1);
    assert_eq!(forest[a].child_count(), before + 1);
}

#[test]
fn add_fails_on_self_and_cycles() {
    let mut forest = Forest::new();
    let a = forest.create("A");
    let b = forest.create("B");
    let c = forest.create("C");
    forest.add(a, b).unwrap();
    forest.add(b, c).unwrap();

    assert_eq!(forest.add(a, a), Err(TreeError::SelfAttachment(a)));
    assert!(forest.is_descendant_of(c, a));
    assert_eq!(
        forest.add(c, a),
        Err(TreeError::AncestorAttachment { parent: c, node: a })
    );
    forest.validate(a).unwrap();
}

#[test]
fn remove_clears_parent_and_repeats_as_noop() {
    let mut forest = Forest::new();
    let a = forest.create("A");
    let b = forest.create("B");
    forest.add(a, b).unwrap();

    assert_eq!(forest.remove(a, b), Ok(true));
    assert_eq!(forest[b].parent(), None);
    assert!(!children(&forest, a).contains(&b));

    assert_eq!(forest.remove(a, b), Ok(false));
    assert_eq!(forest[a].child_count(), 0);
}

#[test]
fn preorder_visits_root_x_z_y() {
    let mut forest = Forest::new();
    let r = forest.create("R");
    let x = forest.create("X");
    let y = forest.create("Y");
    let z = forest.create("Z");
    forest.add(r, x).unwrap();
    forest.add(r, y).unwrap();
    forest.add(x, z).unwrap();

    let mut visited = Vec::new();
    forest.each(r, |node, depth| visited.push((node, depth)));
    assert_eq!(visited, vec![(r, 0), (x, 1), (z, 2), (y, 1)]);
}

#[test]
fn moving_preserves_subtree_structure() {
    let mut forest = Forest::new();
    let root = forest.create("root");
    let left = forest.create("left");
    let right = forest.create("right");
    forest.add(root, left).unwrap();
    forest.add(root, right).unwrap();

    let moved = forest.create("moved");
    let kids: Vec<_> = (0..4).map(|i| forest.create(format!("k{i}"))).collect();
    forest.add(left, moved).unwrap();
    for &k in &kids {
        forest.add(moved, k).unwrap();
    }

    forest.add(right, moved).unwrap();

    assert_eq!(children(&forest, moved), kids);
    assert_eq!(forest[moved].child_count(), 4);
    assert_eq!(children(&forest, right), vec![moved]);
    assert!(children(&forest, left).is_empty());
    forest.validate(root).unwrap();
}

#[derive(Debug, Clone)]
enum Op {
    Add(usize, usize),
    Remove(usize, usize),
    Detach(usize),
}

const NODES: usize = 8;

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..NODES, 0..NODES).prop_map(|(p, c)| Op::Add(p, c)),
        1 => (0..NODES, 0..NODES).prop_map(|(p, c)| Op::Remove(p, c)),
        1 => (0..NODES).prop_map(Op::Detach),
    ]
}

proptest! {
    #[test]
    fn random_edits_keep_invariants(ops in prop::collection::vec(op(), 0..64)) {
        let mut forest = Forest::new();
        let ids: Vec<_> = (0..NODES).map(|i| forest.create(format!("n{i}"))).collect();

        for op in ops {
            match op {
                Op::Add(p, c) => {
                    let (parent, child) = (ids[p], ids[c]);
                    let would_cycle = parent == child || forest.is_descendant_of(parent, child);
                    let count_before = forest[parent].child_count();
                    let was_child = forest[child].parent() == Some(parent);
                    let result = forest.add(parent, child);

                    prop_assert_eq!(result.is_err(), would_cycle);
                    if result.is_ok() {
                        prop_assert_eq!(forest[child].parent(), Some(parent));
                        prop_assert_eq!(forest[parent].last_child(), Some(child));
                        let expected = if was_child { count_before } else { count_before + 1 };
                        prop_assert_eq!(forest[parent].child_count(), expected);
                    }
                }
                Op::Remove(p, c) => {
                    let (parent, child) = (ids[p], ids[c]);
                    let was_child = forest[child].parent() == Some(parent);
                    prop_assert_eq!(forest.remove(parent, child), Ok(was_child));
                    if was_child {
                        prop_assert_eq!(forest[child].parent(), None);
                        prop_assert!(!forest.children(parent).any(|n| n == child));
                    }
                }
                Op::Detach(c) => {
                    forest.detach(ids[c]).unwrap();
                    prop_assert!(forest[ids[c]].parent().is_none());
                }
            }

            for &id in &ids {
                prop_assert!(forest.validate(id).is_ok(), "{:?}", forest.validate(id));
                prop_assert_eq!(forest[id].root(), topmost(&forest, id));
            }
        }

        // Every node is reachable from exactly one tree root.
        let reachable: usize = ids
            .iter()
            .filter(|&&id| forest[id].is_root())
            .map(|&root| forest.preorder(root).count())
            .sum();
        prop_assert_eq!(reachable, NODES);
    }
}
