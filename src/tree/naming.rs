//! Automatic labels for newly added nodes.

use super::{Forest, NodeId};

/// Converts a 1-based index to spreadsheet-style letters.
///
/// `1 → "A"`, `26 → "Z"`, `27 → "AA"`. Zero yields an empty string.
#[must_use]
pub fn to_letters(mut n: usize) -> String {
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| char::from(b)).collect()
}

/// Label for the next child of `parent`.
///
/// Children of a tree root are lettered (`A`, `B`, ...). Deeper children
/// extend the parent's label with their 1-based position, e.g. `A.2`.
/// The position is derived from the current child count, so names are not
/// guaranteed to be unique once siblings have been removed.
///
/// Returns `None` if `parent` does not belong to `forest`.
#[must_use]
pub fn next_auto_name(forest: &Forest, parent: NodeId) -> Option<String> {
    let node = forest.get(parent)?;
    let index = node.child_count() + 1;
    Some(if node.is_root() {
        to_letters(index)
    } else {
        format!("{}.{}", node.label(), index)
    })
}
